use clap::Args;

use chapterfix::relink::{self, RenameReport};

use super::{CmdResult, GlobalArgs, TextOutput};

#[derive(Args)]
pub struct NameArgs {
    /// Rename each numbered entry once instead of once per plain file
    #[arg(long)]
    dedupe_renames: bool,

    /// Show the renames without applying them
    #[arg(long)]
    dry_run: bool,
}

pub fn run(args: NameArgs, global: &GlobalArgs) -> CmdResult<RenameReport> {
    let mut config = global.relink_config()?;
    if args.dedupe_renames {
        config = config.with_dedupe_renames(true);
    }

    let report = relink::fix_names(&config, args.dry_run)?;
    Ok((report, 0))
}

impl TextOutput for RenameReport {
    fn render_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        if self.dry_run {
            for rename in &self.planned {
                lines.push(format!("would rename {} -> {}", rename.from, rename.to));
            }
        }
        lines.push("fix name done.".to_string());
        lines.join("\n")
    }
}
