use clap::{Parser, Subcommand};

use commands::{GlobalArgs, Rendered};

mod commands;
mod output;
mod tty;

use commands::{config, name, reference, scan, summary};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "chapterfix")]
#[command(version = VERSION)]
#[command(about = "Rename numbered book chapters and relink their references")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the numbered entries and their target names
    Scan(scan::ScanArgs),
    /// Rename numbered entries to their target names
    Name(name::NameArgs),
    /// Point ./<target> references at the numbered names
    Reference(reference::ReferenceArgs),
    /// Strip chapter_<digits>_ prefixes from the summary file
    Summary(summary::SummaryArgs),
    /// Show configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let json = cli.global.json;
    let (result, exit_code) = commands::run(cli.command, &cli.global);

    let printed = match result {
        Ok(Rendered::Text(text)) => output::print_text(&text),
        Ok(Rendered::Json(value)) => output::print_json_result(Ok(value)),
        Err(err) if json => output::print_json_result(Err(err)),
        Err(err) => {
            output::print_error(&err);
            Ok(())
        }
    };

    if let Err(err) = printed {
        output::print_error(&err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
