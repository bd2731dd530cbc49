use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Args;
use crossbeam::channel;
use glimpse_collection::Session;
use log::{debug, warn};

use crate::commands::{OpenOptions, finish, open_session, paths_or_default};

/// How often the slideshow deadline is polled.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Image, directory, or several images
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub open: OpenOptions,

    /// Advance through the images automatically
    #[arg(long)]
    pub slideshow: bool,

    /// Seconds per image (1-100)
    #[arg(long, short = 'i')]
    pub interval: Option<u64>,

    /// Stop after every image was shown this many times
    #[arg(long, default_value = "1")]
    pub rounds: usize,
}

pub fn run(args: ShowArgs) -> ExitCode {
    finish("show", execute(args))
}

fn execute(args: ShowArgs) -> Result<ExitCode> {
    let mut settings = args.open.settings();
    if let Some(secs) = args.interval {
        settings = settings.with_slideshow_secs(secs);
    }

    let paths = paths_or_default(&args.paths);
    let mut session = match open_session("show", &paths, settings) {
        Ok(session) => session,
        Err(code) => return Ok(code),
    };

    println!("{}", session.status_line());

    if args.slideshow {
        run_slideshow(&mut session, args.rounds);
    }

    Ok(ExitCode::SUCCESS)
}

/// Print each advance until `rounds` full passes were shown.
fn run_slideshow(session: &mut Session, rounds: usize) {
    if !session.slideshow_mut().start(Instant::now()) {
        warn!("[show] slideshow needs at least two images");
        eprintln!("[show] slideshow needs at least two images");
        return;
    }

    let remaining = session.collection().len() * rounds;
    debug!(
        "[show] slideshow every {:?}, {} images to go",
        session.slideshow().interval(),
        remaining
    );

    let ticker = channel::tick(POLL_INTERVAL);
    let mut shown = 1;

    while shown < remaining {
        let Ok(now) = ticker.recv() else {
            break;
        };
        if session.tick(now) {
            println!("{}", session.status_line());
            shown += 1;
        }
    }

    session.slideshow_mut().stop();
}
