use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use chapterfix::config::RelinkConfig;

pub type CmdResult<T> = chapterfix::Result<(T, i32)>;

/// Flags accepted by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Content directory to operate on (default: src)
    #[arg(long, global = true, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Config file (default: ./chapterfix.json when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the JSON response envelope instead of plain text
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    /// Built-in defaults, then the config file, then `--base`.
    pub fn relink_config(&self) -> chapterfix::Result<RelinkConfig> {
        let mut config = chapterfix::config::load(self.config.as_deref())?;
        if let Some(base) = &self.base {
            config = config.with_base_dir(base);
        }
        config.resolve()
    }
}

/// Plain-text rendering used when `--json` is not given.
pub(crate) trait TextOutput {
    fn render_text(&self) -> String;
}

pub(crate) enum Rendered {
    Json(serde_json::Value),
    Text(String),
}

fn render<T: Serialize + TextOutput>(
    result: CmdResult<T>,
    global: &GlobalArgs,
) -> (chapterfix::Result<Rendered>, i32) {
    if global.json {
        let (value, exit_code) = crate::output::map_cmd_result_to_json(result);
        return (value.map(Rendered::Json), exit_code);
    }

    match result {
        Ok((data, exit_code)) => (Ok(Rendered::Text(data.render_text())), exit_code),
        Err(err) => {
            let exit_code = crate::output::exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub mod config;
pub mod name;
pub mod reference;
pub mod scan;
pub mod summary;

/// Dispatch a command to its handler and render the result.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        render($module::run($args, $global), $global)
    };
}

pub(crate) fn run(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (chapterfix::Result<Rendered>, i32) {
    crate::tty::status("chapterfix is working...");

    match command {
        crate::Commands::Scan(args) => dispatch!(args, global, scan),
        crate::Commands::Name(args) => dispatch!(args, global, name),
        crate::Commands::Reference(args) => dispatch!(args, global, reference),
        crate::Commands::Summary(args) => dispatch!(args, global, summary),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
