use std::ops::RangeInclusive;

use log::{debug, trace};

use crate::{
    errors::GenerationError,
    park_miller::ParkMillerRng,
    tiles::{is_open_for_jail, wall_tile, JAIL_BL, JAIL_BR, JAIL_TL, JAIL_TR},
};
use super::{placement::MAX_SEARCH_ATTEMPTS, Grid, Pos};

// Top-left corners that keep the whole 2x2 block inside the walk bounds.
const JAIL_X: RangeInclusive<i32> = 2..=17;
const JAIL_Y: RangeInclusive<i32> = 2..=10;

/// Finds a home for the 2x2 jail and writes its four quadrant tiles.
///
/// The draws give the block's bottom-right cell. All four cells must be
/// untouched wall, and the bottom-right cell needs a neighbor that is open
/// floor other than a player or cop spawn. Returns the top-left cell.
pub fn place_jail(grid: &mut Grid, rng: &ParkMillerRng, level: u32) -> Result<Pos, GenerationError> {
    let wall = wall_tile(level);
    for _ in 0..MAX_SEARCH_ATTEMPTS {
        let cx = rng.rand_bounded(17) as i32 + 1;
        let cy = rng.rand_bounded(10) as i32 + 1;
        let bottom_right = Pos::new(cx, cy);
        let top_left = bottom_right.offset(-1, -1);

        if !(JAIL_X.contains(&top_left.x) && JAIL_Y.contains(&top_left.y)) {
            trace!("Rejected jail at {}: footprint leaves the interior", top_left);
            continue;
        }

        let footprint = block(top_left);
        if !footprint.iter().all(|&cell| grid.get(cell) == wall) {
            trace!("Rejected jail at {}: footprint not all wall", top_left);
            continue;
        }

        if !grid.any_neighbor(bottom_right, is_open_for_jail) {
            trace!("Rejected jail at {}: no open neighbor", top_left);
            continue;
        }

        for (cell, tile) in footprint.into_iter().zip([JAIL_TL, JAIL_TR, JAIL_BL, JAIL_BR]) {
            grid.set(cell, tile);
        }
        debug!("Placed jail with top-left corner {}", top_left);
        return Ok(top_left);
    }

    Err(GenerationError::SearchExhausted {
        search: "jail placement",
        attempts: MAX_SEARCH_ATTEMPTS,
    })
}

/// The 2x2 block anchored at `top_left`, in TL, TR, BL, BR order.
pub fn block(top_left: Pos) -> [Pos; 4] {
    [top_left, top_left.offset(1, 0), top_left.offset(0, 1), top_left.offset(1, 1)]
}
