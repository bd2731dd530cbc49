use std::{
    io,
    path::{Path, PathBuf},
};

use glimpse_fs::{EntryKind, FileRecord, enumerate_dir, query_entry};
use log::debug;

use crate::{collection::FileCollection, error::CollectionError};

impl FileCollection {
    /// Every supported image directly inside `dir`, sorted, cursor on the first.
    ///
    /// Only an unreadable `dir` is an error; entries that fail the probe or
    /// the filter are skipped.
    pub fn from_directory(dir: &Path, include_hidden: bool) -> io::Result<Self> {
        let records: Vec<FileRecord> = enumerate_dir(dir)?
            .iter()
            .filter_map(|info| FileRecord::from_entry(info, include_hidden))
            .collect();

        debug!("[build] {:?}: {} images", dir, records.len());
        Ok(Self::from_records(records))
    }

    /// The images next to `path`, with the cursor on `path` itself.
    ///
    /// A directory is browsed as a whole. A file that does not survive the
    /// filter yields `NotAnImage`.
    pub fn from_path(path: &Path, include_hidden: bool) -> Result<Self, CollectionError> {
        let io_err = |source| CollectionError::Io {
            path: path.to_path_buf(),
            source,
        };

        let info = query_entry(path).map_err(io_err)?;
        if info.kind == EntryKind::Dir {
            return Self::from_directory(path, include_hidden).map_err(io_err);
        }

        let dir = parent_dir(path);
        let Some(name) = path.file_name() else {
            return Err(CollectionError::NotAnImage(path.to_path_buf()));
        };
        // Compare against the path as enumeration spells it (`./a.png` for `a.png`).
        let target = dir.join(name);

        let mut collection = Self::from_directory(&dir, include_hidden).map_err(io_err)?;
        if !collection.select(&target) {
            return Err(CollectionError::NotAnImage(path.to_path_buf()));
        }

        Ok(collection)
    }

    /// Records for the given files in collation order; directories and
    /// anything unreadable or unsupported are skipped silently.
    pub fn from_path_list<P: AsRef<Path>>(paths: &[P], include_hidden: bool) -> Self {
        let records: Vec<FileRecord> = paths
            .iter()
            .map(AsRef::as_ref)
            .filter_map(|path| FileRecord::for_path(path, include_hidden))
            .collect();

        debug!(
            "[build] path list: {} of {} usable",
            records.len(),
            paths.len()
        );
        Self::from_records(records)
    }

    /// Open what a user named: one path is browsed with its siblings,
    /// several paths form a collection of their own.
    pub fn open<P: AsRef<Path>>(paths: &[P], include_hidden: bool) -> Result<Self, CollectionError> {
        let collection = match paths {
            [] => Self::new(),
            [single] => Self::from_path(single.as_ref(), include_hidden)?,
            many => Self::from_path_list(many, include_hidden),
        };

        if collection.is_empty() {
            return Err(CollectionError::NoImagesFound);
        }
        Ok(collection)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
