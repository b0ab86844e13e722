use clap::Args;

use chapterfix::relink::{self, ReferenceReport};

use super::{CmdResult, GlobalArgs, TextOutput};

#[derive(Args)]
pub struct ReferenceArgs {
    /// Show the files that would change without writing them
    #[arg(long)]
    dry_run: bool,
}

pub fn run(args: ReferenceArgs, global: &GlobalArgs) -> CmdResult<ReferenceReport> {
    let config = global.relink_config()?;
    let report = relink::fix_references(&config, args.dry_run)?;
    Ok((report, 0))
}

impl TextOutput for ReferenceReport {
    fn render_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        if self.dry_run {
            for edit in &self.edits {
                lines.push(format!(
                    "would rewrite {} ({} replacements)",
                    edit.file, edit.replacements
                ));
            }
        }
        lines.push("fix reference done.".to_string());
        lines.join("\n")
    }
}
