mod grid;
pub mod carve;
pub mod placement;
pub mod jail;
pub mod scan;

use itertools::Itertools;
use log::info;
use serde::Serialize;

pub use grid::{Grid, Pos, HEIGHT, WIDTH};
use carve::carve;
pub use carve::Termination;
use jail::place_jail;
use placement::{place_items, ItemPlacements, NUM_COPS};

use crate::{
    config::{CarveMode, GeneratorConfig},
    errors::GenerationError,
    park_miller::ParkMillerRng,
    seed::{LevelId, Seed},
    ticks::LinearTicks,
    tiles::level_digits,
};

/// Represents a generated level.
/// Given a level set and level number, the playfield is produced by a
/// re-implementation of the game's level builder: the same RNG, the same
/// draws in the same order, so every tile lands where the game puts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    pub id: LevelId,
    pub seed: Seed,
    pub grid: Grid,
    pub placements: Placements,
}

/// Coordinates of everything the generator placed, in placement order.
/// On levels 21-25 the super tile is the wall tile, so a super can't be
/// told apart from wall by looking at the grid, and a later placement may
/// even land on top of it. This record is the only reliable source for
/// super positions there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placements {
    pub supers: Vec<Pos>,
    pub cops: [Pos; NUM_COPS],
    pub exit: Pos,
    pub player: Pos,
    /// Top-left cell of the 2x2 jail.
    pub jail: Pos,
}

impl Placements {
    /// Bottom-right cell of the jail, which is where cops are released from.
    pub fn jail_anchor(&self) -> Pos {
        self.jail.offset(1, 1)
    }
}

impl Level {
    pub fn generate(id: LevelId) -> Result<Level, GenerationError> {
        Level::generate_with(id, &GeneratorConfig::default())
    }

    pub fn generate_with(id: LevelId, config: &GeneratorConfig) -> Result<Level, GenerationError> {
        match config.carve {
            CarveMode::Steps { cap } => {
                Level::generate_with_termination(id, config.seed_override, Termination::Steps(cap))
            },
            CarveMode::Ticks { start } => {
                let mut ticks = LinearTicks { start };
                Level::generate_with_termination(id, config.seed_override, Termination::Ticks(&mut ticks))
            },
        }
    }

    /// Full generation pipeline:
    /// seed -> carve -> items -> jail -> HUD digits.
    pub fn generate_with_termination(
        id: LevelId,
        seed_override: Option<u32>,
        termination: Termination<'_>,
    ) -> Result<Level, GenerationError> {
        id.validate()?;
        let seed = match seed_override {
            Some(seed) => Seed(seed),
            None => id.seed()?,
        };
        info!("Generating level {} from seed {}...", id, seed);

        let rng = ParkMillerRng::new(seed.0)?;
        let mut grid = carve(id.level(), &rng, termination);
        let ItemPlacements { supers, cops, exit, player } = place_items(&mut grid, &rng, id.level())?;
        let jail = place_jail(&mut grid, &rng, id.level())?;
        bake_hud(&mut grid, id.level());

        info!(
            "Level {} done after {} RNG calls from seed {}",
            id, rng.num_rng_calls.get(), Seed(rng.initial_seed),
        );
        Ok(Level {
            id,
            seed,
            grid,
            placements: Placements { supers, cops, exit, player, jail },
        })
    }

    /// A compact structured string describing this level, for comparing
    /// runs in tests:
    /// <set-level>;<0xSEED>;S[..];C[..];E(x,y);P(x,y);J(x,y)
    pub fn slug(&self) -> String {
        let list = |positions: &[Pos]| positions.iter().join("");
        format!(
            "{};{};S[{}];C[{}];E{};P{};J{}",
            self.id,
            self.seed,
            list(&self.placements.supers),
            list(&self.placements.cops),
            self.placements.exit,
            self.placements.player,
            self.placements.jail,
        )
    }
}

/// Generates the finished playfield for a level with the game's settings.
pub fn generate_grid(level_set: u32, level: u32) -> Result<Grid, GenerationError> {
    Ok(Level::generate(LevelId::new(level_set, level)?)?.grid)
}

/// Writes the level number's three digits into the top-left corner of row 1.
pub fn bake_hud(grid: &mut Grid, level: u32) {
    for (x, digit) in (1..).zip(level_digits(level)) {
        grid.set(Pos::new(x, 1), digit);
    }
}
