//! Marker inference from a finished grid.
//!
//! This is how the runtime engine finds its way around a level it is handed:
//! it only looks at tile IDs. The generator guarantees exactly one player,
//! three cops, one exit and one 2x2 jail block, plus `super_count(level)`
//! supers wherever the super tile differs from the wall tile.

use serde::Serialize;

use crate::tiles::{super_tile, wall_tile, COP, EXIT, JAIL, PLAYER};
use super::{jail::block, Grid, Pos};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Markers {
    pub players: Vec<Pos>,
    pub cops: Vec<Pos>,
    pub exits: Vec<Pos>,
    /// Positions of the TL, TR, BL and BR jail quadrant tiles, in that order.
    pub jail: [Vec<Pos>; 4],
    /// `None` when the level's super tile is also its wall tile.
    pub supers: Option<Vec<Pos>>,
}

pub fn scan(grid: &Grid, level: u32) -> Markers {
    let supers = (super_tile(level) != wall_tile(level)).then(|| grid.positions_of(super_tile(level)));
    Markers {
        players: grid.positions_of(PLAYER),
        cops: grid.positions_of(COP),
        exits: grid.positions_of(EXIT),
        jail: JAIL.map(|quadrant| grid.positions_of(quadrant)),
        supers,
    }
}

impl Markers {
    /// The jail's bottom-right cell, if the four quadrants form one
    /// contiguous 2x2 block.
    pub fn jail_anchor(&self) -> Option<Pos> {
        self.jail_top_left().map(|tl| tl.offset(1, 1))
    }

    pub fn jail_top_left(&self) -> Option<Pos> {
        let [tl, tr, bl, br] = &self.jail;
        if [tl, tr, bl, br].iter().any(|quadrant| quadrant.len() != 1) {
            return None;
        }
        let expected = block(tl[0]);
        (expected == [tl[0], tr[0], bl[0], br[0]]).then(|| tl[0])
    }

    pub fn player(&self) -> Option<Pos> {
        match self.players.as_slice() {
            [p] => Some(*p),
            _ => None,
        }
    }
}
