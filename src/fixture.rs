//! Golden fixture files: 12 lines of 20 tab-separated tile IDs.

use std::{fs, path::Path};

use serde::Serialize;

use crate::{
    errors::FixtureError,
    level::{Grid, Pos, HEIGHT, WIDTH},
    tiles::{wall_tile, Tile},
};

pub fn parse_tsv(src: &str) -> Result<Grid, FixtureError> {
    let lines = src.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();
    if lines.len() != HEIGHT {
        return Err(FixtureError::WrongRowCount(lines.len()));
    }

    let mut cells = [[0 as Tile; WIDTH]; HEIGHT];
    for (row_idx, (line, row)) in lines.iter().zip(cells.iter_mut()).enumerate() {
        let values = line.split('\t').collect::<Vec<_>>();
        if values.len() != WIDTH {
            return Err(FixtureError::WrongColumnCount { row: row_idx + 1, found: values.len() });
        }
        for (value, cell) in values.into_iter().zip(row.iter_mut()) {
            *cell = value.trim().parse::<Tile>().map_err(|e| FixtureError::BadTile {
                row: row_idx + 1,
                value: value.to_string(),
                reason: e.to_string(),
            })?;
        }
    }
    Ok(Grid::from_rows(cells))
}

pub fn read_tsv(path: impl AsRef<Path>) -> Result<Grid, FixtureError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path)
        .map_err(|e| FixtureError::IoError(path.to_string_lossy().into_owned(), e.kind()))?;
    parse_tsv(&src)
}

pub fn write_tsv(path: impl AsRef<Path>, grid: &Grid) -> Result<(), FixtureError> {
    let path = path.as_ref();
    fs::write(path, grid.to_string())
        .map_err(|e| FixtureError::IoError(path.to_string_lossy().into_owned(), e.kind()))
}

/// Overwrites the three HUD digit cells with the level's wall tile so that
/// comparisons only look at what the carve and placement steps produced.
pub fn mask_hud(grid: &mut Grid, level: u32) {
    let wall = wall_tile(level);
    for x in 1..=3 {
        grid.set(Pos::new(x, 1), wall);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellDiff {
    pub pos: Pos,
    pub expected: Tile,
    pub actual: Tile,
}

/// Every cell where `actual` differs from `expected`, in row-major order.
pub fn diff(expected: &Grid, actual: &Grid) -> Vec<CellDiff> {
    expected.cells()
        .zip(actual.cells())
        .filter(|((_, e), (_, a))| e != a)
        .map(|((pos, expected), (_, actual))| CellDiff { pos, expected, actual })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::level::{Grid, Pos};
    use super::{diff, mask_hud, parse_tsv};

    #[test]
    fn test_parse_round_trip() {
        let mut grid = Grid::filled(201);
        grid.set(Pos::new(2, 2), 80);
        grid.set(Pos::new(20, 12), 7);
        let parsed = parse_tsv(&grid.to_string()).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_tsv("1\t2\t3\n").is_err());

        let mut rows = Grid::filled(201).to_string();
        rows = rows.replacen("201", "256", 1);
        assert!(parse_tsv(&rows).is_err());

        let rows = Grid::filled(201).to_string().replacen("201\t", "", 1);
        assert!(parse_tsv(&rows).is_err());
    }

    #[test]
    fn test_parse_tolerates_crlf_and_blank_lines() {
        let src = Grid::filled(12).to_string().replace('\n', "\r\n") + "\r\n";
        assert_eq!(parse_tsv(&src).unwrap(), Grid::filled(12));
    }

    #[test]
    fn test_mask_and_diff() {
        let mut a = Grid::filled(205);
        let mut b = Grid::filled(205);
        a.set(Pos::new(1, 1), 0);
        b.set(Pos::new(1, 1), 9);
        b.set(Pos::new(4, 4), 80);

        let diffs = diff(&a, &b);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].pos, Pos::new(1, 1));
        assert_eq!(diffs[1].actual, 80);

        mask_hud(&mut a, 5);
        mask_hud(&mut b, 5);
        assert_eq!(diff(&a, &b).len(), 1);
    }
}
