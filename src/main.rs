mod cli;

use atty::Stream;
use cli::*;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::{error::Error, process::ExitCode};
use weedgen::{
    config::{CarveMode, GeneratorConfig},
    export::{export_golden_pack, verify_golden_pack},
    Level,
};
use simple_logger::SimpleLogger;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Cli::parse();
    SimpleLogger::new().with_level(args.log_level()).init()?;

    match args.subcommand {
        Commands::Generate { level, seed, steps, ticks, config, json } => {
            let mut generator_config = match config {
                Some(path) => GeneratorConfig::from_file(path)?,
                None => GeneratorConfig::default(),
            };
            if let Some(seed) = seed {
                generator_config = generator_config.with_seed(seed);
            }
            if let Some(cap) = steps {
                generator_config = generator_config.with_carve(CarveMode::Steps { cap });
            }
            if let Some(start) = ticks {
                generator_config = generator_config.with_carve(CarveMode::Ticks { start });
            }

            let level = Level::generate_with(level, &generator_config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&level)?);
            }
            else {
                print!("{}", level.grid);
            }
        },
        Commands::Seed { level } => {
            let seed = level.seed()?;
            println!("{}\tK={}\t{}", level, level.reuse_key(), seed);
        },
        Commands::Golden { set, outdir } => {
            let progress_bar = ProgressBar::new(25)
                .with_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} levels")?);
            if !atty::is(Stream::Stdout) {
                progress_bar.finish_and_clear();
            }

            let paths = export_golden_pack(set, &outdir, Some(&progress_bar))?;
            progress_bar.finish_and_clear();
            println!("🍃 Wrote {} levels to \"{}\"", paths.len(), outdir.join(set.to_string()).display());
        },
        Commands::Verify { set, dir, mask_hud } => {
            let mismatches = verify_golden_pack(set, &dir, mask_hud)?;
            for mismatch in mismatches.iter() {
                println!("{}: {} cell(s) differ", mismatch.id, mismatch.cells.len());
                for cell in mismatch.cells.iter() {
                    println!("  {} expected {} got {}", cell.pos, cell.expected, cell.actual);
                }
            }
            if !mismatches.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            println!("🍃 All 25 levels of set {} match.", set);
        },
    }

    Ok(ExitCode::SUCCESS)
}
