use clap::{Args, Subcommand};
use serde::Serialize;

use chapterfix::config::{self, RelinkConfig};

use super::{CmdResult, GlobalArgs, TextOutput};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display the effective configuration (defaults + file + flags)
    Show {
        /// Show only built-in defaults (ignore chapterfix.json and flags)
        #[arg(long)]
        builtin: bool,
    },
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: String,
    builtin: bool,
    config: RelinkConfig,
}

pub fn run(args: ConfigArgs, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin, global),
    }
}

fn show(builtin: bool, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let config = if builtin {
        config::builtin_defaults()
    } else {
        global.relink_config()?
    };

    Ok((
        ConfigOutput {
            command: "config.show".to_string(),
            builtin,
            config,
        },
        0,
    ))
}

impl TextOutput for ConfigOutput {
    fn render_text(&self) -> String {
        serde_json::to_string_pretty(&self.config).unwrap_or_else(|e| e.to_string())
    }
}
