use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use glimpse_runtime::logging;

#[derive(Debug, Parser)]
#[command(name = "glimpse", version, about = "Browse a directory of images", propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::List(args) => commands::list::run(args),
        Command::Show(args) => commands::show::run(args),
        Command::Rename(args) => commands::files::run_rename(args),
        Command::Move(args) => commands::files::run_move(args),
        Command::Copy(args) => commands::files::run_copy(args),
        Command::Delete(args) => commands::files::run_delete(args),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
