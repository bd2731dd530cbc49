use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Args;
use glimpse_collection::Deleted;
use glimpse_runtime::DeleteMode;

use crate::commands::{OpenOptions, finish, open_session};

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Image to rename
    pub file: PathBuf,

    /// New file name, without directory
    pub new_name: String,

    #[command(flatten)]
    pub open: OpenOptions,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Image to move
    pub file: PathBuf,

    /// Destination directory
    pub dir: PathBuf,

    #[command(flatten)]
    pub open: OpenOptions,
}

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Image to copy
    pub file: PathBuf,

    /// Destination directory or file path
    pub dest: PathBuf,

    #[command(flatten)]
    pub open: OpenOptions,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Image to delete
    pub file: PathBuf,

    /// Unlink instead of moving to the trash
    #[arg(long)]
    pub permanent: bool,

    #[command(flatten)]
    pub open: OpenOptions,
}

pub fn run_rename(args: RenameArgs) -> ExitCode {
    finish("rename", rename(args))
}

pub fn run_move(args: MoveArgs) -> ExitCode {
    finish("move", move_to(args))
}

pub fn run_copy(args: CopyArgs) -> ExitCode {
    finish("copy", copy(args))
}

pub fn run_delete(args: DeleteArgs) -> ExitCode {
    finish("delete", delete(args))
}

fn rename(args: RenameArgs) -> Result<ExitCode> {
    let mut session = match open_session("rename", &[args.file.clone()], args.open.settings()) {
        Ok(session) => session,
        Err(code) => return Ok(code),
    };

    session
        .rename_current(&args.new_name, Instant::now())
        .with_context(|| format!("cannot rename {} to {}", args.file.display(), args.new_name))?;

    println!("{}", session.status_line());
    Ok(ExitCode::SUCCESS)
}

fn move_to(args: MoveArgs) -> Result<ExitCode> {
    let mut session = match open_session("move", &[args.file.clone()], args.open.settings()) {
        Ok(session) => session,
        Err(code) => return Ok(code),
    };

    session
        .move_current(&args.dir, Instant::now())
        .with_context(|| format!("cannot move {} to {}", args.file.display(), args.dir.display()))?;

    println!("{}", session.status_line());
    Ok(ExitCode::SUCCESS)
}

fn copy(args: CopyArgs) -> Result<ExitCode> {
    let session = match open_session("copy", &[args.file.clone()], args.open.settings()) {
        Ok(session) => session,
        Err(code) => return Ok(code),
    };

    let written = session
        .copy_current(&args.dest)
        .with_context(|| format!("cannot copy {} to {}", args.file.display(), args.dest.display()))?;

    println!("{}", written.display());
    Ok(ExitCode::SUCCESS)
}

fn delete(args: DeleteArgs) -> Result<ExitCode> {
    let mut settings = args.open.settings();
    if args.permanent {
        settings.delete_mode = DeleteMode::Permanent;
    }

    let mut session = match open_session("delete", &[args.file.clone()], settings) {
        Ok(session) => session,
        Err(code) => return Ok(code),
    };

    let outcome = session
        .delete_current(Instant::now())
        .with_context(|| format!("cannot delete {}", args.file.display()))?;

    match outcome {
        Deleted::Next => println!("{}", session.status_line()),
        Deleted::Empty => println!("the given locations contain no images"),
    }
    Ok(ExitCode::SUCCESS)
}
