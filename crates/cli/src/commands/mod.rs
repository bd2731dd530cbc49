pub mod files;
pub mod list;
pub mod show;

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Subcommand};
use glimpse_collection::{CollectionError, Session};
use glimpse_runtime::{Settings, default_browse_dir};
use log::error;

pub use files::{CopyArgs, DeleteArgs, MoveArgs, RenameArgs};
pub use list::ListArgs;
pub use show::ShowArgs;

/// Exit code when the named locations hold nothing to show.
pub const EXIT_NO_IMAGES: u8 = 1;
/// Exit code when an operation failed.
pub const EXIT_FAILURE: u8 = 2;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the images a path would open, in browsing order.
    ///
    /// Example:
    ///   glimpse list ~/Pictures/holiday
    ///   glimpse list --json photo.jpg
    List(ListArgs),

    /// Show the current image, optionally running a slideshow.
    ///
    /// Example:
    ///   glimpse show photo.jpg
    ///   glimpse show --slideshow --interval 2 ~/Pictures
    Show(ShowArgs),

    /// Rename an image within its directory.
    Rename(RenameArgs),

    /// Move an image into another directory.
    Move(MoveArgs),

    /// Copy an image; occupied names get a -copyNN suffix.
    Copy(CopyArgs),

    /// Delete an image (to the trash unless --permanent).
    Delete(DeleteArgs),
}

/// Options shared by every command that opens images.
#[derive(Debug, Args)]
pub struct OpenOptions {
    /// Include hidden files
    #[arg(long, short = 'a')]
    pub hidden: bool,
}

impl OpenOptions {
    /// Environment settings with command-line overrides applied.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::from_env();
        if self.hidden {
            settings.show_hidden = true;
        }
        settings
    }
}

/// Paths to open; the default browse directory when none were given.
pub fn paths_or_default(paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![default_browse_dir()]
    } else {
        paths.to_vec()
    }
}

/// Open a session, reporting user-facing failures on stderr.
pub fn open_session(kind: &str, paths: &[PathBuf], settings: Settings) -> Result<Session, ExitCode> {
    Session::open(paths, settings).map_err(|e| {
        eprintln!("[{kind}] {e}");
        exit_code_for(&e)
    })
}

pub fn exit_code_for(err: &CollectionError) -> ExitCode {
    match err {
        CollectionError::NotAnImage(_) | CollectionError::NoImagesFound => {
            ExitCode::from(EXIT_NO_IMAGES)
        }
        CollectionError::Io { .. } => ExitCode::from(EXIT_FAILURE),
    }
}

/// Shared tail of every `run`: log and report an unexpected failure.
pub fn finish(kind: &str, result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[{kind}] {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
