use std::cell::Cell;

use crate::errors::SeedError;
use super::low16_signed_abs;

/// Park-Miller "minimal standard" multiplier.
pub const MULTIPLIER: u32 = 16807;
/// 2^31 - 1. Every valid state lies in [1, MODULUS - 1].
pub const MODULUS: u32 = 0x7FFF_FFFF;
/// Multiplicative inverse of MULTIPLIER mod MODULUS: (16807 * 1407677000) % (2^31 - 1) == 1.
pub const INVERSE_MULTIPLIER: u32 = 1_407_677_000;

/// One forward step of the generator.
pub fn next_state(state: u32) -> u32 {
    ((state as u64 * MULTIPLIER as u64) % MODULUS as u64) as u32
}

/// One backward step of the generator; `next_state(prev_state(s)) == s`.
pub fn prev_state(state: u32) -> u32 {
    ((state as u64 * INVERSE_MULTIPLIER as u64) % MODULUS as u64) as u32
}

pub fn is_valid_state(state: u32) -> bool {
    (1..MODULUS).contains(&state)
}

/// RNG instance mirroring the Macintosh Toolbox `_Random` trap the game
/// calls for all of its level generation.
/// The trap advances the 31-bit state first and then returns it, so the
/// value held here is always the "pre-call" state: the one the next draw
/// will advance from. A level's seed is the pre-call state at the moment the
/// game enters its carve routine.
#[derive(Debug)]
pub struct ParkMillerRng {
    state: Cell<u32>,
    pub initial_seed: u32,
    pub num_rng_calls: Cell<usize>,
}

impl ParkMillerRng {
    pub fn new(seed: u32) -> Result<Self, SeedError> {
        if !is_valid_state(seed) {
            return Err(SeedError::DegenerateState(seed));
        }
        Ok(Self {
            state: Cell::new(seed),
            initial_seed: seed,
            num_rng_calls: Cell::new(0),
        })
    }

    /// The current pre-call state.
    pub fn state(&self) -> u32 {
        self.state.get()
    }

    /// The `_Random` trap: advance, then hand back the new 31-bit state.
    pub fn rand_raw(&self) -> u32 {
        let new_state = next_state(self.state.get());
        self.state.set(new_state);

        let old_count = self.num_rng_calls.get();
        self.num_rng_calls.set(old_count + 1);

        new_state
    }

    /// The game's bounded helper: `abs(signed low word) % n + 1`, in [1, n].
    ///
    /// Panics if `n` is 0.
    pub fn rand_bounded(&self, n: u32) -> u32 {
        assert!(n > 0, "rand_bounded called with n = 0");
        (low16_signed_abs(self.rand_raw()) % n) + 1
    }
}
