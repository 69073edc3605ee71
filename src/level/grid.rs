use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::tiles::Tile;

pub const WIDTH: usize = 20;
pub const HEIGHT: usize = 12;

/// A cell position in playfield coordinates. These are 1-based, matching the
/// coordinates the generator's routines work in: (1, 1) is the top-left cell
/// and (20, 12) the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Pos {
        Pos { x: self.x + dx, y: self.y + dy }
    }

    /// The four orthogonal neighbors: left, right, up, down.
    pub fn neighbors(self) -> [Pos; 4] {
        [self.offset(-1, 0), self.offset(1, 0), self.offset(0, -1), self.offset(0, 1)]
    }

    pub fn in_bounds(self) -> bool {
        (1..=WIDTH as i32).contains(&self.x) && (1..=HEIGHT as i32).contains(&self.y)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The 20x12 playfield, row-major, one tile byte per cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Tile; WIDTH]; HEIGHT],
}

impl Grid {
    pub fn filled(tile: Tile) -> Grid {
        Grid { cells: [[tile; WIDTH]; HEIGHT] }
    }

    pub fn from_rows(cells: [[Tile; WIDTH]; HEIGHT]) -> Grid {
        Grid { cells }
    }

    pub fn rows(&self) -> &[[Tile; WIDTH]; HEIGHT] {
        &self.cells
    }

    /// Panics if `pos` is outside the playfield.
    pub fn get(&self, pos: Pos) -> Tile {
        self.cells[(pos.y - 1) as usize][(pos.x - 1) as usize]
    }

    pub fn try_get(&self, pos: Pos) -> Option<Tile> {
        pos.in_bounds().then(|| self.get(pos))
    }

    /// Panics if `pos` is outside the playfield.
    pub fn set(&mut self, pos: Pos, tile: Tile) {
        self.cells[(pos.y - 1) as usize][(pos.x - 1) as usize] = tile;
    }

    /// Every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter().enumerate().map(move |(col_idx, &tile)| {
                (Pos::new(col_idx as i32 + 1, row_idx as i32 + 1), tile)
            })
        })
    }

    pub fn positions_of(&self, tile: Tile) -> Vec<Pos> {
        self.cells().filter(|&(_, t)| t == tile).map(|(pos, _)| pos).collect()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells().filter(|&(_, t)| t == tile).count()
    }

    pub fn any_neighbor(&self, pos: Pos, pred: impl Fn(Tile) -> bool) -> bool {
        pos.neighbors().into_iter().filter_map(|n| self.try_get(n)).any(pred)
    }
}

/// Tab-separated rows, the same layout as the golden fixtures.
impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter() {
            writeln!(f, "{}", row.iter().join("\t"))?;
        }
        Ok(())
    }
}
