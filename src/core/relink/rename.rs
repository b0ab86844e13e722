//! Rename numbered entries to their target names.
//!
//! The historical loop issues every pair's rename once per plain file in the
//! base directory. After the first attempt the source is gone, so a second
//! plain file makes the run fail. `dedupe_renames` issues each pair once.

use serde::Serialize;
use std::path::Path;

use super::scan::{self, RenamePair, Snapshot};
use crate::config::RelinkConfig;
use crate::error::Result;
use crate::utils::io;

/// A single rename attempt, relative to the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRename {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenameReport {
    pub base_dir: String,
    pub dedupe: bool,
    pub planned: Vec<FileRename>,
    pub applied: Vec<FileRename>,
    pub dry_run: bool,
}

/// Order the rename attempts a run will make.
///
/// Nothing is renamed when the snapshot has no plain files, in either mode.
pub fn plan_renames(snapshot: &Snapshot, pairs: &[RenamePair], dedupe: bool) -> Vec<FileRename> {
    let plain_files = snapshot.plain_files().count();
    let rounds = match (plain_files, dedupe) {
        (0, _) => 0,
        (_, true) => 1,
        (n, false) => n,
    };

    let mut planned = Vec::with_capacity(rounds * pairs.len());
    for _ in 0..rounds {
        for pair in pairs {
            planned.push(FileRename {
                from: pair.numbered.clone(),
                to: pair.target.clone(),
            });
        }
    }
    planned
}

/// Apply renames in order, stopping at the first failure.
///
/// Renames that already succeeded stay applied.
pub fn apply_renames(base_dir: &Path, planned: &[FileRename]) -> Result<Vec<FileRename>> {
    let mut applied = Vec::new();
    for rename in planned {
        let from = base_dir.join(&rename.from);
        let to = base_dir.join(&rename.to);

        io::rename_path(&from, &to)?;
        crate::log_status!("rename", "{} -> {}", rename.from, rename.to);
        applied.push(rename.clone());
    }
    Ok(applied)
}

/// Scan the base directory and rename every numbered entry.
pub fn fix_names(config: &RelinkConfig, dry_run: bool) -> Result<RenameReport> {
    let (snapshot, report) = scan::scan(config)?;
    let planned = plan_renames(&snapshot, &report.pairs, config.dedupe_renames);

    let applied = if dry_run {
        Vec::new()
    } else {
        apply_renames(&config.base_dir, &planned)?
    };

    Ok(RenameReport {
        base_dir: report.base_dir,
        dedupe: config.dedupe_renames,
        planned,
        applied,
        dry_run,
    })
}
