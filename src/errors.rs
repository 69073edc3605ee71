use thiserror::Error;
use std::io;


#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level {0} is out of range; levels run from 1 to 25")]
    InvalidLevel(u32),

    #[error("Level set {0} is out of range; level sets start at 1")]
    InvalidLevelSet(u32),

    #[error("Couldn't read a level set and level number from '{0}'")]
    UnparseableLevelId(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed must be 1 to 8 hex digits long, excluding the optional '0x' at the beginning.")]
    InvalidLength,

    #[error("Seed contained invalid hex digits! You can only use 0-9 and A-F (case insensitive).")]
    InvalidHexDigits,

    #[error("State {0:#010X} is not a valid Park-Miller state; it must lie in [1, 0x7FFFFFFE]")]
    DegenerateState(u32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    LevelError(#[from] LevelError),

    #[error(transparent)]
    SeedError(#[from] SeedError),

    #[error("{search} search found no valid cell after {attempts} attempts; level data is corrupt")]
    SearchExhausted {
        search: &'static str,
        attempts: usize,
    },
}

#[derive(Debug, Error, Clone)]
pub enum FixtureError {
    #[error("Error during file IO for '{0}': {1}")]
    IoError(String, io::ErrorKind),

    #[error("Fixture has {0} rows; expected 12")]
    WrongRowCount(usize),

    #[error("Fixture row {row} has {found} columns; expected 20")]
    WrongColumnCount {
        row: usize,
        found: usize,
    },

    #[error("Couldn't parse tile '{value}' in row {row}: {reason}")]
    BadTile {
        row: usize,
        value: String,
        reason: String,
    },

    #[error("Couldn't generate level for fixture: {0}")]
    GenerationError(#[from] GenerationError),
}

#[derive(Debug, Error, Clone)]
pub enum ConfigError {
    #[error("Error during file IO for '{0}': {1}")]
    IoError(String, io::ErrorKind),

    #[error("Generator config failed to parse: {0}")]
    ParseError(String),
}
