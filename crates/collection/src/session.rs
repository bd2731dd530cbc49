use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};

use glimpse_fs::FileRecord;
use glimpse_runtime::{DeleteMode, Settings};
use log::{debug, info, warn};

use crate::{
    collection::{Deleted, FileCollection},
    error::CollectionError,
    slideshow::Slideshow,
};

/// One viewer's state: the open collection, its slideshow, and the file
/// actions a front end can trigger on the current image.
///
/// Every mutation pauses a running slideshow first and re-arms it after.
#[derive(Debug)]
pub struct Session {
    collection: FileCollection,
    slideshow: Slideshow,
    settings: Settings,
}

impl Session {
    pub fn new(collection: FileCollection, settings: Settings) -> Self {
        let mut session = Self {
            collection: FileCollection::new(),
            slideshow: Slideshow::new(settings.slideshow_secs),
            settings,
        };
        session.replace(collection);
        session
    }

    pub fn open<P: AsRef<Path>>(paths: &[P], settings: Settings) -> Result<Self, CollectionError> {
        let collection = FileCollection::open(paths, settings.show_hidden)?;
        Ok(Self::new(collection, settings))
    }

    /// Swap in a new collection; the old one is released first.
    pub fn replace(&mut self, collection: FileCollection) {
        self.collection.clear();
        self.collection = collection;
        self.refresh_slideshow_permission();
    }

    pub fn collection(&self) -> &FileCollection {
        &self.collection
    }

    pub fn current(&self) -> Option<&FileRecord> {
        self.collection.current()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    pub fn slideshow_mut(&mut self) -> &mut Slideshow {
        &mut self.slideshow
    }

    pub fn next(&mut self, now: Instant) -> bool {
        let moved = self.collection.next(true);
        self.slideshow.rearm(now);
        moved
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        let moved = self.collection.prev(true);
        self.slideshow.rearm(now);
        moved
    }

    pub fn first(&mut self, now: Instant) -> bool {
        let moved = self.collection.first();
        self.slideshow.rearm(now);
        moved
    }

    pub fn last(&mut self, now: Instant) -> bool {
        let moved = self.collection.last();
        self.slideshow.rearm(now);
        moved
    }

    /// Advance when the slideshow deadline has passed. Returns whether the
    /// current image changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.slideshow.due(now) {
            return false;
        }
        let moved = self.collection.next(true);
        self.slideshow.rearm(now);
        moved
    }

    /// Give the current file a new name in its directory.
    pub fn rename_current(&mut self, new_name: &str, now: Instant) -> io::Result<()> {
        validate_file_name(new_name)?;
        let current = self.current_path()?;
        let new_path = current.with_file_name(new_name);
        if new_path == current {
            return Ok(());
        }

        self.paused(now, |session| {
            session.collection.rename_current(&new_path)?;
            info!("[session] renamed {:?} to {:?}", current, new_path);
            Ok(())
        })
    }

    /// Move the current file into `dest_dir` and drop it from the collection.
    pub fn move_current(&mut self, dest_dir: &Path, now: Instant) -> io::Result<()> {
        let current = self.current_path()?;
        let Some(name) = current.file_name() else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", current.display()),
            ));
        };
        let new_path = dest_dir.join(name);
        if new_path == current {
            debug!("[session] {:?} is already in {:?}", current, dest_dir);
            return Ok(());
        }

        self.paused(now, |session| {
            // No re-sort: the cursor must land on the neighbour of the old position.
            session
                .collection
                .current_mut()
                .ok_or_else(empty_collection)?
                .rename(&new_path)?;
            session.collection.delete_current();
            info!("[session] moved {:?} to {:?}", current, new_path);
            Ok(())
        })
    }

    /// Copy the current file; the collection is left as it is.
    pub fn copy_current(&self, dest: &Path) -> io::Result<PathBuf> {
        let record = self.collection.current().ok_or_else(empty_collection)?;
        record.copy_to(dest)
    }

    /// Remove the current file from disk, then from the collection.
    /// Returns what the collection looks like afterwards.
    pub fn delete_current(&mut self, now: Instant) -> io::Result<Deleted> {
        let current = self.current_path()?;
        let mode = self.settings.delete_mode;

        self.paused(now, |session| {
            remove_file(&current, mode)?;
            info!("[session] deleted {:?} ({:?})", current, mode);
            session
                .collection
                .delete_current()
                .ok_or_else(empty_collection)
        })
    }

    /// Rebuild the collection from disk, keeping the cursor on the current
    /// file. Fails, leaving the collection as it was, when the current file
    /// is gone.
    pub fn reload(&mut self) -> Result<(), CollectionError> {
        let Some(current) = self.collection.current().map(|r| r.path().to_path_buf()) else {
            return Ok(());
        };

        let fresh = FileCollection::from_path(&current, self.settings.show_hidden)?;
        self.collection = fresh;
        self.refresh_slideshow_permission();
        Ok(())
    }

    /// `[2/5] name.png`, or a notice when nothing is open.
    pub fn status_line(&self) -> String {
        match (self.collection.position(), self.collection.current()) {
            (Some((index, total)), Some(record)) => {
                format!("[{index}/{total}] {}", record.display_name())
            }
            _ => String::from("no images"),
        }
    }

    fn current_path(&self) -> io::Result<PathBuf> {
        self.collection
            .current()
            .map(|r| r.path().to_path_buf())
            .ok_or_else(empty_collection)
    }

    /// Run a mutation with the slideshow stopped, restarting it afterwards
    /// unless the mutation failed or left too few images.
    fn paused<T>(
        &mut self,
        now: Instant,
        action: impl FnOnce(&mut Self) -> io::Result<T>,
    ) -> io::Result<T> {
        let was_running = self.slideshow.stop();

        let result = action(self);
        self.refresh_slideshow_permission();

        match &result {
            Ok(_) if was_running => {
                self.slideshow.start(now);
            }
            Err(e) => warn!("[session] action failed: {e}"),
            _ => {}
        }

        result
    }

    fn refresh_slideshow_permission(&mut self) {
        if self.collection.len() < 2 {
            self.slideshow.deny();
        } else {
            self.slideshow.allow();
        }
    }
}

fn remove_file(path: &Path, mode: DeleteMode) -> io::Result<()> {
    match mode {
        DeleteMode::Trash => trash::delete(path).map_err(io::Error::other),
        DeleteMode::Permanent => fs::remove_file(path),
    }
}

fn validate_file_name(name: &str) -> io::Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR);

    if invalid {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{name}' is not a valid file name"),
        ));
    }
    Ok(())
}

fn empty_collection() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "no current image")
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
