use std::{fmt::Display, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{LevelError, SeedError},
    park_miller::{prev_state, MODULUS, MULTIPLIER},
};

/// Additive constant of the closed-form seed. It is exactly 986 * MULTIPLIER,
/// so the derived pre-call seed works out to K + 986.
pub const SEED_OFFSET: u32 = 0x0FC_DD36;

pub const FIRST_LEVEL: u32 = 1;
pub const LAST_LEVEL: u32 = 25;

/// Pre-call RNG state for a level's generation.
/// Since level generation is deterministic after the first RNG call, this
/// single value plus the level number fully determines a playfield.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub u32);

impl Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Uniquely identifies a level: which of the game's level sets, and which of
/// the 25 levels inside it.
/// Only constructible through [`LevelId::new`] or string parsing, so every
/// `LevelId` in circulation is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawLevelId")]
pub struct LevelId {
    set: u32,
    level: u32,
}

#[derive(Deserialize)]
struct RawLevelId {
    set: u32,
    level: u32,
}

impl TryFrom<RawLevelId> for LevelId {
    type Error = LevelError;

    fn try_from(raw: RawLevelId) -> Result<Self, Self::Error> {
        LevelId::new(raw.set, raw.level)
    }
}

impl LevelId {
    pub fn new(set: u32, level: u32) -> Result<Self, LevelError> {
        if set < 1 {
            return Err(LevelError::InvalidLevelSet(set));
        }
        if !(FIRST_LEVEL..=LAST_LEVEL).contains(&level) {
            return Err(LevelError::InvalidLevel(level));
        }
        Ok(LevelId { set, level })
    }

    pub fn set(&self) -> u32 {
        self.set
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Re-checks the range invariant.
    pub fn validate(&self) -> Result<(), LevelError> {
        LevelId::new(self.set, self.level).map(|_| ())
    }

    /// The linear reuse key `set + 8 * (level - 1)`. Different levels that
    /// share a key share their seed, and so their whole layout.
    pub fn reuse_key(&self) -> u64 {
        self.set as u64 + 8 * (self.level as u64 - 1)
    }

    /// Closed-form pre-call seed for this level.
    ///
    /// The first `_Random` result observed in the game at level start is
    /// `(A * K + C) mod M`; the generator starts one step earlier.
    pub fn seed(&self) -> Result<Seed, SeedError> {
        let k = self.reuse_key() % MODULUS as u64;
        let first_draw = ((MULTIPLIER as u64 * k + SEED_OFFSET as u64) % MODULUS as u64) as u32;
        if first_draw == 0 {
            return Err(SeedError::DegenerateState(first_draw));
        }
        Ok(Seed(prev_state(first_draw)))
    }

    pub fn try_from_str(input: &str) -> Result<Self, LevelError> {
        let re = LEVEL_ID.get_or_init(|| {
            Regex::new(r"(?i)^\s*(?:set\s*)?(\d+)\s*(?:[-:/]|\s+level|\s)\s*(\d+)\s*$").unwrap()
        });
        let captures = re.captures(input)
            .ok_or_else(|| LevelError::UnparseableLevelId(input.to_string()))?;
        let parse = |i: usize| captures[i].parse::<u32>()
            .map_err(|_| LevelError::UnparseableLevelId(input.to_string()));
        LevelId::new(parse(1)?, parse(2)?)
    }
}

static LEVEL_ID: OnceLock<Regex> = OnceLock::new();

impl TryFrom<&str> for LevelId {
    type Error = LevelError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        LevelId::try_from_str(input)
    }
}

impl Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.set, self.level)
    }
}

/// Validating shorthand for `LevelId::new(set, level)?.seed()`.
pub fn seed_for(level_set: u32, level: u32) -> Result<Seed, crate::errors::GenerationError> {
    Ok(LevelId::new(level_set, level)?.seed()?)
}

pub fn parse_seed(src: &str) -> Result<u32, SeedError> {
    let trimmed = src.trim();
    let trimmed = trimmed.strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if trimmed.is_empty() || trimmed.len() > 8 {
        Err(SeedError::InvalidLength)
    }
    else {
        u32::from_str_radix(trimmed, 16).map_err(|_| SeedError::InvalidHexDigits)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        config::GeneratorConfig,
        errors::{GenerationError, LevelError},
        level::Level,
        park_miller::{next_state, prev_state, MODULUS, MULTIPLIER},
    };
    use super::{LevelId, Seed, seed_for, parse_seed, SEED_OFFSET};

    #[test]
    fn test_offset_is_multiple_of_multiplier() {
        assert_eq!(SEED_OFFSET, 986 * MULTIPLIER);
    }

    #[test]
    fn test_known_seeds() {
        assert_eq!(seed_for(41, 1).unwrap(), Seed(0x403));
        assert_eq!(seed_for(1, 1).unwrap(), Seed(0x3DB));
        assert_eq!(seed_for(41, 25).unwrap(), Seed(0x4C3));
        assert_eq!(next_state(seed_for(41, 1).unwrap().0), 0x010760F5);
    }

    #[test]
    fn test_shared_reuse_key() {
        let a = seed_for(41, 1).unwrap();
        let b = seed_for(33, 2).unwrap();
        let c = seed_for(25, 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(LevelId::new(41, 1).unwrap().reuse_key(), 40);
        assert_eq!(LevelId::new(33, 2).unwrap().reuse_key(), 40);
        assert_eq!(LevelId::new(25, 3).unwrap().reuse_key(), 40);
        assert_ne!(seed_for(41, 2).unwrap(), a);
    }

    #[test]
    fn test_idempotent() {
        for set in [1, 8, 41, 1000] {
            for level in 1..=25 {
                assert_eq!(seed_for(set, level).unwrap(), seed_for(set, level).unwrap());
            }
        }
    }

    /// Walking K one at a time from K = 1 adds A to the first-draw state at each step.
    #[test]
    fn test_closed_form_matches_incremental_derivation() {
        let mut first_draw = next_state(seed_for(1, 1).unwrap().0) as u64;
        let mut e = 0u64;
        for level in 1..=25u32 {
            for set in 1..=8u32 {
                let id = LevelId::new(set, level).unwrap();
                assert_eq!(id.reuse_key() - 1, e);
                assert_eq!(id.seed().unwrap().0, prev_state(first_draw as u32), "{id}");
                first_draw = (first_draw + MULTIPLIER as u64) % MODULUS as u64;
                e += 1;
            }
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(LevelId::new(0, 1).is_err());
        assert!(LevelId::new(1, 0).is_err());
        assert!(LevelId::new(1, 26).is_err());
        assert!(seed_for(41, 26).is_err());
        assert!(seed_for(0, 3).is_err());
    }

    #[test]
    fn test_degenerate_key() {
        // K + 986 == M makes the first draw zero.
        let id = LevelId::new(MODULUS - 986, 1).unwrap();
        assert!(id.seed().is_err());
    }

    #[test]
    fn test_generate_rejects_out_of_range_id() {
        let result = Level::generate(LevelId { set: 41, level: 60 });
        assert!(matches!(result, Err(GenerationError::LevelError(LevelError::InvalidLevel(60)))));

        let result = Level::generate(LevelId { set: 41, level: 0 });
        assert!(matches!(result, Err(GenerationError::LevelError(LevelError::InvalidLevel(0)))));

        // A seed override doesn't bypass the range check.
        let config = GeneratorConfig::default().with_seed(0x403);
        let result = Level::generate_with(LevelId { set: 0, level: 0 }, &config);
        assert!(matches!(result, Err(GenerationError::LevelError(LevelError::InvalidLevelSet(0)))));
    }

    #[test]
    fn test_deserialize_validates() {
        let id: LevelId = serde_json::from_str(r#"{"set":41,"level":7}"#).unwrap();
        assert_eq!(id, LevelId::new(41, 7).unwrap());
        assert_eq!(serde_json::to_string(&id).unwrap(), r#"{"set":41,"level":7}"#);
        assert!(serde_json::from_str::<LevelId>(r#"{"set":41,"level":0}"#).is_err());
        assert!(serde_json::from_str::<LevelId>(r#"{"set":0,"level":1}"#).is_err());
        assert!(serde_json::from_str::<LevelId>(r#"{"set":41,"level":60}"#).is_err());
    }

    #[test]
    fn test_parse_level_id() {
        assert_eq!(LevelId::try_from("41-7").unwrap(), LevelId { set: 41, level: 7 });
        assert_eq!(LevelId::try_from("41:25").unwrap(), LevelId { set: 41, level: 25 });
        assert_eq!(LevelId::try_from("Set 3 Level 12").unwrap(), LevelId { set: 3, level: 12 });
        assert_eq!(LevelId::try_from(" 9 1 ").unwrap(), LevelId { set: 9, level: 1 });
        assert!(LevelId::try_from("41-26").is_err());
        assert!(LevelId::try_from("41").is_err());
        assert!(LevelId::try_from("sh-6").is_err());
        assert_eq!(LevelId::new(41, 7).unwrap().to_string(), "41-7");
        assert_eq!(LevelId::try_from("33:2").unwrap().set(), 33);
        assert_eq!(LevelId::try_from("33:2").unwrap().level(), 2);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("0x00000403").unwrap(), 0x403);
        assert_eq!(parse_seed("403").unwrap(), 0x403);
        assert_eq!(parse_seed("0B6E755A").unwrap(), 0x0B6E755A);
        assert!(parse_seed("0x123456789").is_err());
        assert!(parse_seed("").is_err());
        assert!(parse_seed("0x").unwrap_err().to_string().contains("1 to 8 hex digits"));
        assert!(parse_seed("zz").is_err());
        assert_eq!(Seed(0x403).to_string(), "0x00000403");
    }
}
