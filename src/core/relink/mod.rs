//! Rename-and-relink for numbered book chapters.
//!
//! Entries named `chapter_<digits>_<rest>` in the base directory are paired
//! with their `<rest>` target. Each operation takes a fresh snapshot of the
//! base directory and runs a single sequential pass over it:
//! 1. `fix_references` rewrites `./<rest>` to `./chapter_<digits>_<rest>`
//! 2. `fix_names` renames each numbered entry to `<rest>`
//! 3. `fix_summary` strips `chapter_<digits>_` from the index file

mod pattern;
mod reference;
mod rename;
mod scan;
mod summary;

pub use pattern::{numbered_name, numbered_prefix, CHAPTER_PREFIX};
pub use reference::{fix_references, rewrite_references, FileEdit, ReferenceReport};
pub use rename::{apply_renames, fix_names, plan_renames, FileRename, RenameReport};
pub use scan::{
    discover_pairs, parse_pair, scan, take_snapshot, Entry, RenamePair, ScanReport, Snapshot,
};
pub use summary::{fix_summary, strip_prefixes, SummaryReport};
