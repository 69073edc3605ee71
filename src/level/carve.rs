use std::{fmt, ops::RangeInclusive};

use log::{debug, warn};

use crate::{
    park_miller::ParkMillerRng,
    ticks::{tick_over, TickSource},
    tiles::{wall_tile, LEAF},
};
use super::{Grid, Pos};

/// The walk never accepts more than this many steps.
pub const STEP_CAP: usize = 135;
/// Timeout mode stops once more than this many ticks have elapsed.
pub const TICK_BUDGET: i32 = 3;

const WALK_X: RangeInclusive<i32> = 2..=18;
const WALK_Y: RangeInclusive<i32> = 2..=11;

/// The carve loop's stored direction. The game keeps this separately from
/// the velocity vector, and the two start out disagreeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Heading {
    Left = 0,
    Right = 1,
    Down = 2,
    Up = 3,
}

impl Heading {
    /// Turn codes 0-3 request a heading; 4-15 mean "keep going".
    fn from_turn_code(code: u32) -> Option<Heading> {
        match code {
            0 => Some(Heading::Left),
            1 => Some(Heading::Right),
            2 => Some(Heading::Down),
            3 => Some(Heading::Up),
            _ => None,
        }
    }

    fn reverse(self) -> Heading {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
            Heading::Up => Heading::Down,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
            Heading::Down => (0, 1),
            Heading::Up => (0, -1),
        }
    }
}

/// How the carve loop decides to stop.
pub enum Termination<'a> {
    /// Stop after this many accepted steps (clamped to `STEP_CAP`).
    Steps(usize),
    /// Stop once the tick source reports more than `TICK_BUDGET` ticks since
    /// the walk began, or after `STEP_CAP` steps, whichever comes first.
    Ticks(&'a mut dyn TickSource),
}

impl fmt::Debug for Termination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Steps(cap) => f.debug_tuple("Steps").field(cap).finish(),
            Termination::Ticks(_) => f.write_str("Ticks(..)"),
        }
    }
}

/// Paints the leaf corridor for `level` onto a fresh all-wall grid.
///
/// The walker starts somewhere in x 4..=17, y 4..=11 and takes one turn-code
/// draw per iteration. Accepted steps overwrite the target cell with a leaf
/// no matter what was there; a step that would leave the walk bounds is
/// dropped and the walker simply draws again.
pub fn carve(level: u32, rng: &ParkMillerRng, termination: Termination<'_>) -> Grid {
    let mut grid = Grid::filled(wall_tile(level));

    let x = rng.rand_bounded(14) as i32 + 3;
    let y = rng.rand_bounded(8) as i32 + 3;
    let mut pos = Pos::new(x, y);

    // Moving right, but recorded as facing left.
    let mut velocity = (1, 0);
    let mut heading = Heading::Left;

    let (step_cap, mut ticks) = match termination {
        Termination::Steps(cap) => {
            if cap > STEP_CAP {
                warn!("Carve step cap {} exceeds the game's limit; using {}", cap, STEP_CAP);
            }
            (cap.min(STEP_CAP), None)
        },
        Termination::Ticks(source) => {
            let start = source.ticks(0);
            (STEP_CAP, Some((source, start)))
        },
    };

    let mut steps = 0;
    let mut draws = 0;
    loop {
        if let Some((source, start)) = ticks.as_mut() {
            let cur = source.ticks(steps);
            if tick_over(*start, cur, TICK_BUDGET) {
                break;
            }
        }
        if steps >= step_cap {
            break;
        }

        let turn_code = rng.rand_bounded(16) - 1;
        draws += 1;
        if let Some(requested) = Heading::from_turn_code(turn_code) {
            if heading != requested.reverse() {
                heading = requested;
                velocity = requested.delta();
            }
        }

        let next = pos.offset(velocity.0, velocity.1);
        if WALK_X.contains(&next.x) && WALK_Y.contains(&next.y) {
            grid.set(next, LEAF);
            pos = next;
            steps += 1;
        }
    }

    debug!("Carved {} steps from ({},{}) using {} turn draws", steps, x, y, draws);
    grid
}
