//! TickCount sources for the carve loop's timeout mode.
//!
//! The carve loop bails out once more than three ticks have passed
//! since it started. Ticks come from the Mac's 60Hz `TickCount`, read as an
//! unsigned 16-bit counter and compared as signed words.

use serde::{Deserialize, Serialize};

use crate::park_miller::signed16;

/// Something that can report the tick counter.
/// `steps` is how many carve steps have been accepted so far, which lets
/// deterministic sources advance in lockstep with the walk.
pub trait TickSource {
    fn ticks(&mut self, steps: usize) -> u16;
}

/// Deterministic source advancing one tick per accepted step from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearTicks {
    pub start: u16,
}

impl TickSource for LinearTicks {
    fn ticks(&mut self, steps: usize) -> u16 {
        self.start.wrapping_add(steps as u16)
    }
}

impl<F: FnMut(usize) -> u16> TickSource for F {
    fn ticks(&mut self, steps: usize) -> u16 {
        self(steps)
    }
}

/// `signed16(cur) > signed16(start) + delta`.
/// The sum is formed in 32 bits so the `+ delta` never wraps.
pub fn tick_over(start: u16, cur: u16, delta: i32) -> bool {
    signed16(cur as u32) > signed16(start as u32) + delta
}
