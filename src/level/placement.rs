use log::{debug, trace};

use crate::{
    errors::GenerationError,
    park_miller::ParkMillerRng,
    tiles::{is_open, super_count, super_tile, wall_tile, Tile, COP, EXIT, PLAYER},
};
use super::{Grid, Pos};

/// Upper bound on candidate draws for any rejection search. A correctly
/// carved level accepts a candidate within a few dozen draws; hitting this
/// means the grid has no valid cell at all.
pub const MAX_SEARCH_ATTEMPTS: usize = 100_000;

pub const NUM_COPS: usize = 3;

/// Drops `tile` onto a random wall cell that touches open floor.
///
/// Candidates are drawn x in 2..=18 then y in 2..=11. A candidate must still
/// be this level's wall tile and have at least one open 4-neighbor.
pub fn place_random(grid: &mut Grid, rng: &ParkMillerRng, level: u32, tile: Tile) -> Result<Pos, GenerationError> {
    let wall = wall_tile(level);
    for _ in 0..MAX_SEARCH_ATTEMPTS {
        let x = rng.rand_bounded(17) as i32 + 1;
        let y = rng.rand_bounded(10) as i32 + 1;
        let candidate = Pos::new(x, y);

        if grid.get(candidate) != wall {
            trace!("Rejected {} for tile {}: not a wall", candidate, tile);
            continue;
        }
        if !grid.any_neighbor(candidate, is_open) {
            trace!("Rejected {} for tile {}: no open neighbor", candidate, tile);
            continue;
        }

        grid.set(candidate, tile);
        return Ok(candidate);
    }

    Err(GenerationError::SearchExhausted {
        search: "item placement",
        attempts: MAX_SEARCH_ATTEMPTS,
    })
}

/// Where each item ended up, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPlacements {
    pub supers: Vec<Pos>,
    pub cops: [Pos; NUM_COPS],
    pub exit: Pos,
    pub player: Pos,
}

/// Places every item for a level. The order is fixed since each placement
/// consumes draws that the next one depends on: supers, the three cops,
/// the exit, then the player.
pub fn place_items(grid: &mut Grid, rng: &ParkMillerRng, level: u32) -> Result<ItemPlacements, GenerationError> {
    let super_id = super_tile(level);
    let supers = (0..super_count(level))
        .map(|_| place_random(grid, rng, level, super_id))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cops = [Pos::new(0, 0); NUM_COPS];
    for cop in cops.iter_mut() {
        *cop = place_random(grid, rng, level, COP)?;
    }

    let exit = place_random(grid, rng, level, EXIT)?;
    let player = place_random(grid, rng, level, PLAYER)?;

    debug!("Placed supers at {:?}, cops at {:?}, exit at {}, player at {}", supers, cops, exit, player);
    Ok(ItemPlacements { supers, cops, exit, player })
}
