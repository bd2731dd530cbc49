mod build;
mod collection;
mod error;
mod session;
mod slideshow;

pub use collection::{Deleted, FileCollection};
pub use error::CollectionError;
pub use session::Session;
pub use slideshow::{Slideshow, SlideshowState};

pub use glimpse_fs::FileRecord;
