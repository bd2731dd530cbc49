use std::{
    fs::{self, Metadata, read_dir},
    io::Result,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use log::{debug, warn};

use crate::mime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Sockets, fifos, devices
    Other,
}

/// What the filesystem reports about one entry.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// User-facing name; lossy when the raw name is not valid UTF-8
    pub display_name: String,
    /// Detected image content type, `None` for directories and unknown data
    pub content_type: Option<&'static str>,
    pub hidden: bool,
    /// File last modified time
    pub mtime_secs: u64,
}

/// Query a single path, following symlinks.
pub fn query_entry(path: &Path) -> Result<EntryInfo> {
    let metadata = fs::metadata(path)?;
    Ok(describe(path.to_path_buf(), &metadata))
}

/// List the direct children of `dir`.
///
/// Only failing to open `dir` itself is an error; entries that cannot be
/// inspected are logged and left out.
pub fn enumerate_dir(dir: &Path) -> Result<Vec<EntryInfo>> {
    let rd = read_dir(dir)?;
    let mut entries = Vec::new();

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[probe] error reading entry in {:?}: {e}", dir);
                continue;
            }
        };

        let path = entry.path();
        // fs::metadata rather than DirEntry::metadata: links count as their targets.
        match fs::metadata(&path) {
            Ok(metadata) => entries.push(describe(path, &metadata)),
            Err(e) => debug!("[probe] skipping {:?}: {e}", path),
        }
    }

    debug!("[probe] {:?}: {} entries", dir, entries.len());
    Ok(entries)
}

fn describe(path: PathBuf, metadata: &Metadata) -> EntryInfo {
    let kind = if metadata.is_dir() {
        EntryKind::Dir
    } else if metadata.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    let display_name = display_name_of(&path);
    let hidden = is_hidden_name(&display_name);

    let content_type = match kind {
        EntryKind::File => mime::content_type(&path),
        _ => None,
    };

    EntryInfo {
        kind,
        hidden,
        content_type,
        mtime_secs: to_unix_secs(metadata.modified().ok()),
        display_name,
        path,
    }
}

/// Lossy file name of `path`; falls back to the whole path for roots.
pub fn display_name_of(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Dot-files and editor backups are hidden the way file managers hide them.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.') || name.ends_with('~')
}

pub(crate) fn to_unix_secs(t: Option<SystemTime>) -> u64 {
    t.and_then(|tt| tt.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
