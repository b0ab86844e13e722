use serde::Serialize;

use super::pattern;
use crate::config::RelinkConfig;
use crate::error::Result;
use crate::utils::io;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub file: String,
    pub prefixes_removed: usize,
    pub dry_run: bool,
}

/// Remove every `chapter_<digits>_` substring.
pub fn strip_prefixes(text: &str) -> (String, usize) {
    let re = pattern::numbered_prefix();
    let count = re.find_iter(text).count();
    (re.replace_all(text, "").into_owned(), count)
}

/// Strip prefixes from the index file and write it back, changed or not.
pub fn fix_summary(config: &RelinkConfig, dry_run: bool) -> Result<SummaryReport> {
    let path = config.summary_path();
    let original = io::read_text_lossy(&path)?;
    let (updated, prefixes_removed) = strip_prefixes(&original);

    if !dry_run {
        io::write_file(&path, &updated)?;
    }
    crate::log_status!("summary", "{}: {} prefixes removed", path.display(), prefixes_removed);

    Ok(SummaryReport {
        file: path.display().to_string(),
        prefixes_removed,
        dry_run,
    })
}
