use clap::Args;
use std::path::PathBuf;

use chapterfix::relink::{self, SummaryReport};

use super::{CmdResult, GlobalArgs, TextOutput};

#[derive(Args)]
pub struct SummaryArgs {
    /// Index file, relative to the base directory (default: SUMMARY.md)
    #[arg(long, value_name = "FILE")]
    summary_file: Option<PathBuf>,

    /// Report the prefixes that would be removed without writing
    #[arg(long)]
    dry_run: bool,
}

pub fn run(args: SummaryArgs, global: &GlobalArgs) -> CmdResult<SummaryReport> {
    let mut config = global.relink_config()?;
    if let Some(file) = args.summary_file {
        if file.as_os_str().is_empty() {
            return Err(chapterfix::Error::validation_invalid_argument(
                "summary_file",
                "Summary file must not be empty",
            ));
        }
        config = config.with_summary_file(file);
    }

    let report = relink::fix_summary(&config, args.dry_run)?;
    Ok((report, 0))
}

impl TextOutput for SummaryReport {
    fn render_text(&self) -> String {
        if self.dry_run {
            format!(
                "would remove {} prefixes from {}\nfix summary done.",
                self.prefixes_removed, self.file
            )
        } else {
            "fix summary done.".to_string()
        }
    }
}
