//! Tile IDs and the per-level tile policy.
//!
//! Everything on the playfield is a single byte. The numeric range of a tile
//! decides how the game treats it: 10..=199 is open floor, anything else
//! blocks. Markers placed by the generator that fall inside the open range
//! (the player and cop spawns, the early-level super items) are walkable.

pub type Tile = u8;

pub const LEAF: Tile = 80;
pub const PLAYER: Tile = 60;
pub const COP: Tile = 66;
pub const EXIT: Tile = 241;
pub const JAIL_TL: Tile = 250;
pub const JAIL_TR: Tile = 251;
pub const JAIL_BL: Tile = 252;
pub const JAIL_BR: Tile = 253;
pub const JAIL: [Tile; 4] = [JAIL_TL, JAIL_TR, JAIL_BL, JAIL_BR];

/// Shared wall and super tile for the last level bands.
pub const FALLBACK: Tile = 255;
const WALL_BASE: u32 = 200;
const SUPER_BASE: u32 = LEAF as u32;

/// Walls are 200 + level, except levels 21..=25 which all use 255.
pub fn wall_tile(level: u32) -> Tile {
    if (21..=25).contains(&level) {
        FALLBACK
    }
    else {
        (WALL_BASE + level) as Tile
    }
}

/// Super items are 80 + level, except levels 15..=25 which use 255.
pub fn super_tile(level: u32) -> Tile {
    if (15..=25).contains(&level) {
        FALLBACK
    }
    else {
        (SUPER_BASE + level) as Tile
    }
}

/// 3 supers for levels 1-4, 2 for 5-9, 1 from level 10 on.
pub fn super_count(level: u32) -> usize {
    3usize.saturating_sub(level as usize / 5).max(1)
}

pub fn is_open(tile: Tile) -> bool {
    (10..=199).contains(&tile)
}

/// Stricter adjacency used when placing the jail: open floor that isn't
/// already claimed by a spawn marker.
pub fn is_open_for_jail(tile: Tile) -> bool {
    is_open(tile) && tile != PLAYER && tile != COP
}

/// The hundreds/tens/ones digits of a level number. The HUD font occupies
/// tile IDs 0-9, so each digit is directly its own tile.
pub fn level_digits(level: u32) -> [Tile; 3] {
    [
        ((level / 100) % 10) as Tile,
        ((level / 10) % 10) as Tile,
        (level % 10) as Tile,
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wall_fallback() {
        assert_eq!(wall_tile(1), 201);
        assert_eq!(wall_tile(20), 220);
        assert_eq!(wall_tile(21), 255);
        assert_eq!(wall_tile(25), 255);
    }

    #[test]
    fn test_super_fallback() {
        assert_eq!(super_tile(1), 81);
        assert_eq!(super_tile(14), 94);
        assert_eq!(super_tile(15), 255);
        assert_eq!(super_tile(25), 255);
    }

    #[test]
    fn test_super_count_bands() {
        let counts = (1..=25).map(super_count).collect::<Vec<_>>();
        assert_eq!(&counts[0..4], &[3, 3, 3, 3]);
        assert_eq!(&counts[4..9], &[2, 2, 2, 2, 2]);
        assert!(counts[9..].iter().all(|&c| c == 1));
    }

    #[test]
    fn test_open_boundary() {
        assert!(!is_open(9));
        assert!(is_open(10));
        assert!(is_open(199));
        assert!(!is_open(200));
        assert!(is_open(LEAF));
        assert!(!is_open(EXIT));
        assert!(!is_open(FALLBACK));
    }

    #[test]
    fn test_open_for_jail() {
        assert!(is_open_for_jail(LEAF));
        assert!(!is_open_for_jail(PLAYER));
        assert!(!is_open_for_jail(COP));
        assert!(is_open_for_jail(super_tile(3)));
        assert!(!is_open_for_jail(wall_tile(3)));
    }

    #[test]
    fn test_level_digits() {
        assert_eq!(level_digits(1), [0, 0, 1]);
        assert_eq!(level_digits(10), [0, 1, 0]);
        assert_eq!(level_digits(25), [0, 2, 5]);
        assert_eq!(level_digits(123), [1, 2, 3]);
    }
}
