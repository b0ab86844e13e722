//! Directory snapshot and rename pair discovery.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::pattern;
use crate::config::RelinkConfig;
use crate::error::{Error, Result};

// ============================================================================
// Types
// ============================================================================

/// An immediate entry of the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// File name (lossy if not valid UTF-8).
    pub name: String,
    /// Full path, base directory included.
    #[serde(skip)]
    pub path: PathBuf,
    /// From `symlink_metadata`, so symlinks to directories count as files.
    pub is_dir: bool,
    /// False when the on-disk name is not valid UTF-8.
    #[serde(skip)]
    pub utf8_name: bool,
}

/// Base directory entries captured once, sorted by name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub entries: Vec<Entry>,
}

impl Snapshot {
    /// Plain (non-directory) entries, in snapshot order.
    pub fn plain_files(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.is_dir)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A `(numbered, target)` association, e.g. `(chapter_01_intro, intro)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePair {
    pub numbered: String,
    pub target: String,
}

/// What a scan found.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub base_dir: String,
    pub entries: usize,
    pub plain_files: usize,
    pub pairs: Vec<RenamePair>,
}

// ============================================================================
// Scanning
// ============================================================================

/// Match a single entry name against the chapter convention.
pub fn parse_pair(name: &str) -> Option<RenamePair> {
    let caps = pattern::numbered_name().captures(name)?;
    Some(RenamePair {
        numbered: name.to_string(),
        target: caps[1].to_string(),
    })
}

/// List the immediate entries of `base_dir`.
pub fn take_snapshot(base_dir: &Path) -> Result<Snapshot> {
    let read_dir = fs::read_dir(base_dir).map_err(|e| Error::filesystem(&e, "list", base_dir))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::filesystem(&e, "list", base_dir))?;
        let path = entry.path();
        let metadata =
            fs::symlink_metadata(&path).map_err(|e| Error::filesystem(&e, "stat", &path))?;

        let os_name = entry.file_name();
        let utf8_name = os_name.to_str().is_some();
        entries.push(Entry {
            name: os_name.to_string_lossy().to_string(),
            path,
            is_dir: metadata.is_dir(),
            utf8_name,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Snapshot { entries })
}

/// Extract rename pairs from a snapshot. Files and directories both count.
pub fn discover_pairs(snapshot: &Snapshot) -> Vec<RenamePair> {
    snapshot
        .entries
        .iter()
        .filter(|e| e.utf8_name)
        .filter_map(|e| parse_pair(&e.name))
        .collect()
}

/// Snapshot the configured base directory and report its pairs.
pub fn scan(config: &RelinkConfig) -> Result<(Snapshot, ScanReport)> {
    let snapshot = take_snapshot(&config.base_dir)?;
    let pairs = discover_pairs(&snapshot);

    crate::log_status!(
        "scan",
        "{} entries, {} numbered in {}",
        snapshot.len(),
        pairs.len(),
        config.base_dir.display()
    );

    let report = ScanReport {
        base_dir: config.base_dir.display().to_string(),
        entries: snapshot.len(),
        plain_files: snapshot.plain_files().count(),
        pairs,
    };

    Ok((snapshot, report))
}
