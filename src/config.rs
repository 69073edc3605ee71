use std::{fs::read_to_string, path::Path};

use serde::{Deserialize, Serialize};

use crate::{errors::ConfigError, level::carve::STEP_CAP};

/// Per-call generation settings. Nothing here is global, so calls with
/// different settings can run side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub carve: CarveMode,

    /// Explicit pre-call seed to use instead of the closed-form derivation.
    #[serde(default)]
    pub seed_override: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarveMode {
    /// Walk a fixed number of accepted steps; the game uses 135.
    Steps { cap: usize },
    /// The TickCount timeout, driven by a linear tick source starting here.
    Ticks { start: u16 },
}

impl Default for CarveMode {
    fn default() -> Self {
        CarveMode::Steps { cap: STEP_CAP }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed_override = Some(seed);
        self
    }

    pub fn with_carve(mut self, carve: CarveMode) -> Self {
        self.carve = carve;
        self
    }

    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(src).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_string_lossy().into_owned(), e.kind()))?;
        Self::from_json(&src)
    }
}

#[cfg(test)]
mod test {
    use super::{CarveMode, GeneratorConfig};

    #[test]
    fn test_default_is_step_capped_walk() {
        let config = GeneratorConfig::default();
        assert_eq!(config.carve, CarveMode::Steps { cap: 135 });
        assert_eq!(config.seed_override, None);
    }

    #[test]
    fn test_parse_json() {
        let config = GeneratorConfig::from_json(r#"{"carve": {"ticks": {"start": 12345}}, "seed_override": 1027}"#).unwrap();
        assert_eq!(config.carve, CarveMode::Ticks { start: 12345 });
        assert_eq!(config.seed_override, Some(0x403));

        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());

        assert!(GeneratorConfig::from_json(r#"{"carve": "sideways"}"#).is_err());
    }
}
