use std::{
    ffi::OsStr,
    fs::{File, OpenOptions},
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use log::debug;

/// Highest `-copyNN` suffix tried before giving up.
pub const MAX_COPY_SUFFIX: u32 = 99;

/// Extension of the last path component: the text after its last dot.
///
/// A single leading dot marks a hidden file, not an extension, and a
/// trailing dot yields no extension.
/// 1. "photo.tar.gz" -> "gz"
/// 2. ".bashrc" -> None
/// 3. ".hidden.png" -> "png"
/// 4. "name." -> None
pub fn path_ext(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let name = name.strip_prefix('.').unwrap_or(name);

    let dot = name.rfind('.')?;
    let ext = &name[dot + 1..];
    if ext.is_empty() { None } else { Some(ext) }
}

/// First `stem-copyNN.ext` sibling of `path` that does not exist yet.
///
/// Works on the raw file name, so names that are not valid UTF-8 keep
/// their bytes and their extension.
pub fn copy_name(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    // Same split as `path_ext`: a trailing dot stays in the stem.
    let (stem, ext): (&OsStr, Option<&OsStr>) = match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if !ext.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };

    (1..=MAX_COPY_SUFFIX)
        .map(|i| {
            let mut candidate = stem.to_os_string();
            candidate.push(format!("-copy{i:02}"));
            if let Some(ext) = ext {
                candidate.push(".");
                candidate.push(ext);
            }
            path.with_file_name(candidate)
        })
        .find(|candidate| !exists(candidate))
}

/// Byte copy that refuses to overwrite `to`. A partial `to` is removed
/// when the copy fails.
pub fn copy_file(from: &Path, to: &Path) -> io::Result<u64> {
    let mut reader = File::open(from)?;
    let mut writer = OpenOptions::new().write(true).create_new(true).open(to)?;

    let result = io::copy(&mut reader, &mut writer)
        .and_then(|copied| writer.sync_all().map(|()| copied));
    if result.is_err() {
        drop(writer);
        if let Err(e) = std::fs::remove_file(to) {
            debug!("[ops] could not remove partial copy {:?}: {e}", to);
        }
    }
    result
}

/// Rename that fails with `AlreadyExists` instead of replacing `to`.
pub fn rename_noreplace(from: &Path, to: &Path) -> io::Result<()> {
    if exists(to) {
        return Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ));
    }
    std::fs::rename(from, to)
}

/// Dangling symlinks count as existing names.
fn exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
