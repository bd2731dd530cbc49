use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
    slice,
};

use glimpse_fs::FileRecord;

/// What `delete_current` left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deleted {
    /// The removed record was the last one; there is no current record.
    Empty,
    /// The cursor moved to the following record, wrapping to the first.
    Next,
}

/// Images of one browsing session, kept sorted by collation key, with a
/// cursor on the record being shown.
///
/// The cursor is `Some` exactly when the collection is non-empty.
#[derive(Debug, Default)]
pub struct FileCollection {
    records: Vec<FileRecord>,
    cursor: Option<usize>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort `records`, dropping repeated paths (first one wins).
    /// The cursor starts on the first record.
    pub fn from_records(records: Vec<FileRecord>) -> Self {
        let mut seen: HashSet<PathBuf> = HashSet::with_capacity(records.len());
        let mut records: Vec<FileRecord> = records
            .into_iter()
            .filter(|r| seen.insert(r.path().to_path_buf()))
            .collect();
        records.sort_by(|a, b| a.collation_key().cmp(b.collation_key()));

        let cursor = if records.is_empty() { None } else { Some(0) };
        Self { records, cursor }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    pub fn current(&self) -> Option<&FileRecord> {
        self.cursor.map(|i| &self.records[i])
    }

    /// Zero-based index of the cursor.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Mutable access for in-place edits; callers must `sort()` afterwards
    /// if the display name changed.
    pub(crate) fn current_mut(&mut self) -> Option<&mut FileRecord> {
        self.cursor.map(|i| &mut self.records[i])
    }

    /// 1-based cursor position and total, for "X / Y" indicators.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.map(|i| (i + 1, self.records.len()))
    }

    pub fn find(&self, path: &Path) -> Option<&FileRecord> {
        self.index_of(path).map(|i| &self.records[i])
    }

    /// Put the cursor on the record stored under `path`.
    pub fn select(&mut self, path: &Path) -> bool {
        match self.index_of(path) {
            Some(i) => {
                self.cursor = Some(i);
                true
            }
            None => false,
        }
    }

    fn index_of(&self, path: &Path) -> Option<usize> {
        self.records.iter().position(|r| r.path() == path)
    }

    /// Insert at the sorted position unless the path is already present.
    /// The cursor keeps pointing at the same record; an empty collection
    /// gets its cursor on the new record.
    pub fn insert(&mut self, record: FileRecord) -> bool {
        if self.index_of(record.path()).is_some() {
            return false;
        }

        let at = self
            .records
            .partition_point(|r| r.collation_key() <= record.collation_key());
        self.records.insert(at, record);

        self.cursor = match self.cursor {
            Some(i) if at <= i => Some(i + 1),
            Some(i) => Some(i),
            None => Some(at),
        };
        true
    }

    /// Advance the cursor. Collections of fewer than two records never move.
    pub fn next(&mut self, wrap: bool) -> bool {
        let (Some(i), len) = (self.cursor, self.records.len()) else {
            return false;
        };
        if len < 2 {
            return false;
        }

        if i + 1 < len {
            self.cursor = Some(i + 1);
        } else if wrap {
            self.cursor = Some(0);
        } else {
            return false;
        }
        true
    }

    /// Step the cursor back. Collections of fewer than two records never move.
    pub fn prev(&mut self, wrap: bool) -> bool {
        let (Some(i), len) = (self.cursor, self.records.len()) else {
            return false;
        };
        if len < 2 {
            return false;
        }

        if i > 0 {
            self.cursor = Some(i - 1);
        } else if wrap {
            self.cursor = Some(len - 1);
        } else {
            return false;
        }
        true
    }

    pub fn first(&mut self) -> bool {
        if self.records.is_empty() {
            return false;
        }
        self.cursor = Some(0);
        true
    }

    pub fn last(&mut self) -> bool {
        if self.records.is_empty() {
            return false;
        }
        self.cursor = Some(self.records.len() - 1);
        true
    }

    /// Remove the current record. `None` when there was nothing to remove.
    pub fn delete_current(&mut self) -> Option<Deleted> {
        let i = self.cursor?;
        self.records.remove(i);

        if self.records.is_empty() {
            self.cursor = None;
            return Some(Deleted::Empty);
        }

        // The follower slid into `i`; past the end wraps to the first.
        self.cursor = Some(if i < self.records.len() { i } else { 0 });
        Some(Deleted::Next)
    }

    /// Re-sort by the records' current keys. The cursor follows its record.
    pub fn sort(&mut self) {
        let current = self.current().map(|r| r.path().to_path_buf());

        self.records
            .sort_by(|a, b| a.collation_key().cmp(b.collation_key()));

        if let Some(path) = current {
            self.cursor = self.index_of(&path);
        }
    }

    /// Rename the current file on disk and restore the sort order.
    pub fn rename_current(&mut self, new_path: &Path) -> io::Result<()> {
        if self.index_of(new_path).is_some() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is already in the collection", new_path.display()),
            ));
        }

        let Some(record) = self.current_mut() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "collection is empty",
            ));
        };
        record.rename(new_path)?;
        self.sort();
        Ok(())
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = None;
    }
}

impl<'a> IntoIterator for &'a FileCollection {
    type Item = &'a FileRecord;
    type IntoIter = slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
