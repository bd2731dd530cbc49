use std::{env, path::PathBuf};

pub const PROGRAM_NAME: &str = "glimpse";
pub const PROGRAM_LOG_LEVEL: &str = "GLIMPSE_LOG_LEVEL";
pub const SHOW_HIDDEN_ENV: &str = "GLIMPSE_SHOW_HIDDEN";
pub const SLIDESHOW_SECS_ENV: &str = "GLIMPSE_SLIDESHOW_SECS";

/// Seconds between two slideshow advances unless configured otherwise.
pub const DEFAULT_SLIDESHOW_SECS: u64 = 5;
pub const MIN_SLIDESHOW_SECS: u64 = 1;
pub const MAX_SLIDESHOW_SECS: u64 = 100;

/// How a deleted image leaves the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteMode {
    /// Move to the desktop trash.
    #[default]
    Trash,
    /// Unlink immediately.
    Permanent,
}

/// Runtime settings shared by the front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Include dot-files when building collections
    pub show_hidden: bool,
    /// Slideshow interval in seconds, always within the min/max bounds
    pub slideshow_secs: u64,
    pub delete_mode: DeleteMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hidden: false,
            slideshow_secs: DEFAULT_SLIDESHOW_SECS,
            delete_mode: DeleteMode::Trash,
        }
    }
}

impl Settings {
    /// Defaults overridden by `GLIMPSE_*` environment variables.
    /// Malformed values are ignored.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Some(hidden) = env::var(SHOW_HIDDEN_ENV).ok().and_then(|v| parse_flag(&v)) {
            settings.show_hidden = hidden;
        }

        if let Some(secs) = env::var(SLIDESHOW_SECS_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            settings.slideshow_secs = clamp_slideshow_secs(secs);
        }

        settings
    }

    pub fn with_slideshow_secs(mut self, secs: u64) -> Self {
        self.slideshow_secs = clamp_slideshow_secs(secs);
        self
    }
}

pub fn clamp_slideshow_secs(secs: u64) -> u64 {
    secs.clamp(MIN_SLIDESHOW_SECS, MAX_SLIDESHOW_SECS)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Directory opened when no path is given on the command line.
pub fn default_browse_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
