use std::{
    io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde::Serialize;

use crate::{
    collate::collation_key,
    mime,
    ops::{copy_file, copy_name, rename_noreplace},
    probe::{EntryInfo, EntryKind, display_name_of, query_entry},
};

/// One browsable image.
///
/// Fields are only changed together: the collation key always matches the
/// display name, and a rename touches the record only after the filesystem
/// accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    path: PathBuf,
    display_name: String,
    #[serde(skip)]
    collation_key: String,
    /// File last modified time
    mtime_secs: u64,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, display_name: &str, mtime_secs: u64) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.to_owned(),
            collation_key: collation_key(display_name),
            mtime_secs,
        }
    }

    /// Record for an enumerated entry, or `None` when the entry is a
    /// directory, an unsupported type, or hidden while hidden files are off.
    pub fn from_entry(info: &EntryInfo, include_hidden: bool) -> Option<Self> {
        if info.kind == EntryKind::Dir {
            return None;
        }
        if info.hidden && !include_hidden {
            return None;
        }
        if !mime::is_supported(info.content_type) {
            return None;
        }

        Some(Self::new(
            info.path.clone(),
            &info.display_name,
            info.mtime_secs,
        ))
    }

    /// Query `path` and build its record. Inaccessible paths yield `None`.
    pub fn for_path(path: &Path, include_hidden: bool) -> Option<Self> {
        match query_entry(path) {
            Ok(info) => Self::from_entry(&info, include_hidden),
            Err(e) => {
                debug!("[record] cannot query {:?}: {e}", path);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn collation_key(&self) -> &str {
        &self.collation_key
    }

    pub fn mtime_secs(&self) -> u64 {
        self.mtime_secs
    }

    pub fn set_display_name(&mut self, display_name: &str) {
        self.display_name = display_name.to_owned();
        self.collation_key = collation_key(display_name);
    }

    /// Rename the file on disk to `new_path` and update this record in place.
    ///
    /// Fails without touching the record when the target exists or the
    /// rename is refused. A collection holding this record needs a `sort()`
    /// afterwards.
    pub fn rename(&mut self, new_path: &Path) -> io::Result<()> {
        rename_noreplace(&self.path, new_path)?;

        match query_entry(new_path) {
            Ok(info) => {
                self.set_display_name(&info.display_name);
                self.mtime_secs = info.mtime_secs;
            }
            Err(e) => {
                // The file already moved; keep the new path even without fresh metadata.
                warn!("[record] renamed to {:?} but cannot query it: {e}", new_path);
                self.set_display_name(&display_name_of(new_path));
            }
        }
        self.path = new_path.to_path_buf();

        Ok(())
    }

    /// Copy the file to `dest`, a directory or a file path.
    ///
    /// An occupied destination gets a `-copyNN` suffix before its extension.
    /// Returns the path written.
    pub fn copy_to(&self, dest: &Path) -> io::Result<PathBuf> {
        let target = if dest.is_dir() {
            match self.path.file_name() {
                Some(name) => dest.join(name),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("{} has no file name", self.path.display()),
                    ));
                }
            }
        } else {
            dest.to_path_buf()
        };

        let target = if target.symlink_metadata().is_ok() {
            copy_name(&target).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("no free copy name next to {}", target.display()),
                )
            })?
        } else {
            target
        };

        copy_file(&self.path, &target)?;
        debug!("[record] copied {:?} to {:?}", self.path, target);

        Ok(target)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
