pub mod park_miller;
pub mod seed;
pub mod tiles;
pub mod ticks;
pub mod level;
pub mod config;
pub mod fixture;
pub mod export;
pub mod errors;

pub use level::{generate_grid, Grid, Level, Pos};
pub use seed::{parse_seed, seed_for, LevelId, Seed};
