//! Point `./<target>` references back at the numbered names.
//!
//! Replacement is a plain substring substitution. It is not link-aware and
//! touches prose and code spans alike.

use serde::Serialize;

use super::pattern;
use super::scan::{self, RenamePair};
use crate::config::RelinkConfig;
use crate::error::Result;
use crate::utils::io;

/// A content edit for one plain file.
#[derive(Debug, Clone, Serialize)]
pub struct FileEdit {
    /// File name inside the base directory.
    pub file: String,
    pub replacements: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceReport {
    pub base_dir: String,
    pub files_scanned: usize,
    pub edits: Vec<FileEdit>,
    pub total_replacements: usize,
    pub dry_run: bool,
}

/// Rewrite every `./<target>` to `./<numbered>`.
///
/// Pairs apply in order, each to the output of the previous one. Returns the
/// new text and the number of substitutions made.
pub fn rewrite_references(text: &str, pairs: &[RenamePair]) -> (String, usize) {
    let mut out = text.to_string();
    let mut count = 0;

    for pair in pairs {
        let from = pattern::reference_to(&pair.target);
        let hits = out.matches(from.as_str()).count();
        if hits == 0 {
            continue;
        }
        out = out.replace(from.as_str(), &pattern::reference_to(&pair.numbered));
        count += hits;
    }

    (out, count)
}

/// Rewrite references in every plain file of the base directory.
///
/// A file is written back only when its text changed.
pub fn fix_references(config: &RelinkConfig, dry_run: bool) -> Result<ReferenceReport> {
    let (snapshot, report) = scan::scan(config)?;

    let mut edits = Vec::new();
    let mut files_scanned = 0;

    for entry in snapshot.plain_files() {
        files_scanned += 1;
        let original = io::read_text_lossy(&entry.path)?;
        let (updated, replacements) = rewrite_references(&original, &report.pairs);

        if updated == original {
            continue;
        }

        if !dry_run {
            io::write_file(&entry.path, &updated)?;
        }
        crate::log_status!("reference", "{}: {} replaced", entry.name, replacements);

        edits.push(FileEdit {
            file: entry.name.clone(),
            replacements,
        });
    }

    let total_replacements = edits.iter().map(|e| e.replacements).sum();

    Ok(ReferenceReport {
        base_dir: report.base_dir,
        files_scanned,
        edits,
        total_replacements,
        dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pair(numbered: &str, target: &str) -> RenamePair {
        RenamePair {
            numbered: numbered.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn rewrites_relative_reference() {
        let (out, count) = rewrite_references(
            "See [intro](./foo/index.md).",
            &[pair("chapter_01_foo", "foo")],
        );
        assert_eq!(out, "See [intro](./chapter_01_foo/index.md).");
        assert_eq!(count, 1);
        assert!(!out.contains("(./foo"));
    }

    #[test]
    fn substitution_ignores_link_syntax() {
        let (out, count) = rewrite_references(
            "`./intro` and ./intro and ../intro",
            &[pair("chapter_01_intro", "intro")],
        );
        assert_eq!(
            out,
            "`./chapter_01_intro` and ./chapter_01_intro and ../chapter_01_intro"
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn bare_names_are_left_alone() {
        let (out, count) =
            rewrite_references("intro is first", &[pair("chapter_01_intro", "intro")]);
        assert_eq!(out, "intro is first");
        assert_eq!(count, 0);
    }

    #[test]
    fn shorter_target_also_matches_longer_names() {
        let pairs = vec![pair("chapter_01_a", "a"), pair("chapter_02_ab", "ab")];
        let (out, count) = rewrite_references("./a ./ab", &pairs);
        // The first pair already consumed `./ab`, leaving nothing for the second.
        assert_eq!(out, "./chapter_01_a ./chapter_01_ab");
        assert_eq!(count, 2);
    }

    #[test]
    fn writes_only_changed_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("chapter_01_intro")).unwrap();
        fs::write(dir.path().join("SUMMARY.md"), "[Intro](./intro/README.md)\n").unwrap();
        fs::write(dir.path().join("notes.md"), "nothing to see\n").unwrap();

        let config = RelinkConfig::default().with_base_dir(dir.path());
        let report = fix_references(&config, false).unwrap();

        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.edits.len(), 1);
        assert_eq!(report.edits[0].file, "SUMMARY.md");
        assert_eq!(
            fs::read_to_string(dir.path().join("SUMMARY.md")).unwrap(),
            "[Intro](./chapter_01_intro/README.md)\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("notes.md")).unwrap(),
            "nothing to see\n"
        );
    }

    #[test]
    fn files_inside_directories_are_not_touched() {
        let dir = TempDir::new().unwrap();
        let chapter = dir.path().join("chapter_01_intro");
        fs::create_dir(&chapter).unwrap();
        fs::write(chapter.join("README.md"), "./intro").unwrap();

        let config = RelinkConfig::default().with_base_dir(dir.path());
        let report = fix_references(&config, false).unwrap();

        assert_eq!(report.files_scanned, 0);
        assert_eq!(fs::read_to_string(chapter.join("README.md")).unwrap(), "./intro");
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("chapter_01_intro")).unwrap();
        fs::write(dir.path().join("SUMMARY.md"), "./intro").unwrap();

        let config = RelinkConfig::default().with_base_dir(dir.path());
        let report = fix_references(&config, true).unwrap();

        assert_eq!(report.total_replacements, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("SUMMARY.md")).unwrap(),
            "./intro"
        );
    }
}
