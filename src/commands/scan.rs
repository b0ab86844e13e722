use clap::Args;

use chapterfix::relink::{self, ScanReport};

use super::{CmdResult, GlobalArgs, TextOutput};

#[derive(Args)]
pub struct ScanArgs {}

pub fn run(_args: ScanArgs, global: &GlobalArgs) -> CmdResult<ScanReport> {
    let config = global.relink_config()?;
    let (_, report) = relink::scan(&config)?;
    Ok((report, 0))
}

impl TextOutput for ScanReport {
    fn render_text(&self) -> String {
        if self.pairs.is_empty() {
            return format!("no numbered entries in {}", self.base_dir);
        }
        self.pairs
            .iter()
            .map(|p| format!("{} -> {}", p.numbered, p.target))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
