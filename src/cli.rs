use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use weedgen::{parse_seed, LevelId};

#[derive(Parser, Debug)]
#[clap(name="weedgen", author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Commands,

    #[clap(
        global = true,
        short = 'v',
        action = ArgAction::Count,
        help = VERBOSE_HELP,
    )]
    pub verbosity: u8,
}

impl Cli {
    /// Log level for the `-v` count: Warn by default, Info for one, Trace for more.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a level and print its playfield.
    #[clap(arg_required_else_help = true)]
    Generate {
        #[clap(
            value_parser = |s: &str| LevelId::try_from(s).map_err(|e| e.to_string()),
            help = LEVEL_HELP,
        )]
        level: LevelId,

        #[clap(
            long = "seed",
            value_parser = |s: &str| parse_seed(s).map_err(|e| e.to_string()),
            help = SEED_HELP,
        )]
        seed: Option<u32>,

        #[clap(
            long = "steps",
            conflicts_with = "ticks",
            help = "Carve step cap. Values above 135 are clamped to 135."
        )]
        steps: Option<usize>,

        #[clap(
            long = "ticks",
            help = "Use the TickCount timeout carve, with a linear tick counter starting at this value."
        )]
        ticks: Option<u16>,

        #[clap(
            short = 'c',
            long = "config",
            help = "Load generator settings from a JSON file. Command line flags override it."
        )]
        config: Option<PathBuf>,

        #[clap(long = "json", help = "Print the level with its placement list as JSON instead of TSV")]
        json: bool,
    },

    /// Print the pre-call RNG seed and reuse key for a level.
    #[clap(arg_required_else_help = true)]
    Seed {
        #[clap(
            value_parser = |s: &str| LevelId::try_from(s).map_err(|e| e.to_string()),
            help = LEVEL_HELP,
        )]
        level: LevelId,
    },

    /// Write all 25 levels of a level set as a golden fixture pack.
    #[clap(arg_required_else_help = true)]
    Golden {
        #[clap(help = "Level set to export.")]
        set: u32,

        #[clap(help = "Output directory. Files are written to <OUTDIR>/<SET>/NN.tsv.")]
        outdir: PathBuf,
    },

    /// Compare freshly generated levels against a golden fixture pack.
    #[clap(arg_required_else_help = true)]
    Verify {
        #[clap(help = "Level set to verify.")]
        set: u32,

        #[clap(help = "Directory holding the pack, laid out as <DIR>/<SET>/NN.tsv.")]
        dir: PathBuf,

        #[clap(long = "mask-hud", help = "Ignore the three HUD digit cells when comparing.")]
        mask_hud: bool,
    },
}

const LEVEL_HELP: &str = "The level in question, as SET-LEVEL. Examples: \"41-1\", \"33:2\", \"set 7 level 25\"";
const SEED_HELP: &str = r##"
Override the closed-form seed with an explicit pre-call Park-Miller state. Up to 8 hex
digits, optionally prefixed with "0x". Examples: "0x00000403", "b6e755a".
"##;
const VERBOSE_HELP: &str = "Enable info logging. Pass twice for trace logging.";
