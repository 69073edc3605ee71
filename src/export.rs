use std::{fs, path::{Path, PathBuf}};

use indicatif::ProgressBar;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    errors::FixtureError,
    fixture::{diff, mask_hud, read_tsv, write_tsv, CellDiff},
    level::Level,
    seed::{LevelId, FIRST_LEVEL, LAST_LEVEL},
};

/// Path of one level's fixture inside a golden pack: `<root>/<set>/<NN>.tsv`.
pub fn fixture_path(root: impl AsRef<Path>, id: LevelId) -> PathBuf {
    root.as_ref().join(id.set().to_string()).join(format!("{:02}.tsv", id.level()))
}

fn level_ids(set: u32) -> Result<Vec<LevelId>, FixtureError> {
    (FIRST_LEVEL..=LAST_LEVEL)
        .map(|level| LevelId::new(set, level).map_err(|e| FixtureError::GenerationError(e.into())))
        .collect()
}

/// Generates all 25 levels of a set in parallel and writes them as a golden
/// pack under `root`. Returns the written paths in level order.
pub fn export_golden_pack(set: u32, root: impl AsRef<Path>, progress: Option<&ProgressBar>) -> Result<Vec<PathBuf>, FixtureError> {
    let root = root.as_ref();
    let set_dir = root.join(set.to_string());
    fs::create_dir_all(&set_dir)
        .map_err(|e| FixtureError::IoError(set_dir.to_string_lossy().into_owned(), e.kind()))?;

    let paths = level_ids(set)?
        .into_par_iter()
        .map(|id| {
            let level = Level::generate(id)?;
            let path = fixture_path(root, id);
            write_tsv(&path, &level.grid)?;
            if let Some(progress) = progress {
                progress.inc(1);
            }
            Ok(path)
        })
        .collect::<Result<Vec<_>, FixtureError>>()?;

    info!("Wrote golden pack for set {} to {}", set, set_dir.display());
    Ok(paths)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelMismatch {
    pub id: LevelId,
    pub cells: Vec<CellDiff>,
}

/// Regenerates every level of a set and compares it against the golden pack
/// under `root`. Returns only the levels that differ.
pub fn verify_golden_pack(set: u32, root: impl AsRef<Path>, ignore_hud: bool) -> Result<Vec<LevelMismatch>, FixtureError> {
    let root = root.as_ref();
    let mismatches = level_ids(set)?
        .into_par_iter()
        .map(|id| {
            let mut expected = read_tsv(fixture_path(root, id))?;
            let mut actual = Level::generate(id)?.grid;
            if ignore_hud {
                mask_hud(&mut expected, id.level());
                mask_hud(&mut actual, id.level());
            }
            Ok(LevelMismatch { id, cells: diff(&expected, &actual) })
        })
        .filter(|result| !matches!(result, Ok(mismatch) if mismatch.cells.is_empty()))
        .collect::<Result<Vec<_>, FixtureError>>()?;

    for mismatch in mismatches.iter() {
        warn!("Level {} differs from its fixture in {} cells", mismatch.id, mismatch.cells.len());
    }
    Ok(mismatches)
}
