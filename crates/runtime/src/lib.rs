mod config;
pub mod logging;

pub use config::{
    DEFAULT_SLIDESHOW_SECS, DeleteMode, MAX_SLIDESHOW_SECS, MIN_SLIDESHOW_SECS, PROGRAM_NAME,
    SHOW_HIDDEN_ENV, SLIDESHOW_SECS_ENV, Settings, clamp_slideshow_secs, default_browse_dir,
};

pub use logging::init;
