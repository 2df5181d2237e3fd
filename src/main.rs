use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{manifest, scaffold};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "themeboy")]
#[command(version = VERSION)]
#[command(about = "CLI for scaffolding WordPress theme boilerplate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate starter code for a theme
    Scaffold(scaffold::ScaffoldArgs),
    /// List the files a scaffold run would create
    Manifest(manifest::ManifestArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.command);
    output::print_json_result(json_result).ok();

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
