use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Args;

use crate::commands::{OpenOptions, finish, open_session, paths_or_default};
use crate::printer::{ColorChoice, HumanPrinter, JsonPrinter, ListPrinter, print_listing};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Image, directory, or several images
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub open: OpenOptions,

    /// Output results as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

impl ListArgs {
    fn make_printer(&self) -> Box<dyn ListPrinter> {
        if self.json {
            return Box::new(JsonPrinter::stdout());
        }

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };
        Box::new(HumanPrinter::stdout(color))
    }
}

pub fn run(args: ListArgs) -> ExitCode {
    finish("list", execute(args))
}

fn execute(args: ListArgs) -> Result<ExitCode> {
    let paths = paths_or_default(&args.paths);
    let session = match open_session("list", &paths, args.open.settings()) {
        Ok(session) => session,
        Err(code) => return Ok(code),
    };

    let collection = session.collection();
    let current = collection.position().map(|(index, _)| index);

    let mut printer = args.make_printer();
    print_listing(printer.as_mut(), "list", collection.iter(), current)?;

    Ok(ExitCode::SUCCESS)
}
