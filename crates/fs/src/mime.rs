use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, Read},
    path::Path,
    sync::OnceLock,
};

use image::ImageFormat;
use log::debug;

/// Icon type that codecs report under its legacy `image/x-icon` name.
pub const ICON_MIME_TYPE: &str = "image/vnd.microsoft.icon";

/// Enough leading bytes for every signature `image::guess_format` knows.
const SNIFF_LEN: usize = 64;

/// Content types of every image format whose decoder is compiled in.
///
/// Built on first use and never invalidated.
pub fn supported_mime_types() -> &'static BTreeSet<&'static str> {
    static SUPPORTED: OnceLock<BTreeSet<&'static str>> = OnceLock::new();

    SUPPORTED.get_or_init(|| {
        let mut set: BTreeSet<&'static str> = ImageFormat::all()
            .filter(|format| format.reading_enabled())
            .map(|format| format.to_mime_type())
            .collect();
        set.insert(ICON_MIME_TYPE);

        debug!("[mime] {} supported content types", set.len());
        set
    })
}

pub fn is_supported(mime_type: Option<&str>) -> bool {
    match mime_type {
        Some(mime) => supported_mime_types().contains(mime),
        None => false,
    }
}

/// Content type of a regular file: sniffed from its leading bytes, or guessed
/// from the extension when the bytes are unreadable or unrecognised.
pub fn content_type(path: &Path) -> Option<&'static str> {
    match sniff(path) {
        Ok(Some(format)) => return Some(format.to_mime_type()),
        Ok(None) => {}
        Err(e) => debug!("[mime] cannot read {:?}: {e}", path),
    }

    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

fn sniff(path: &Path) -> io::Result<Option<ImageFormat>> {
    let mut head = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)?;

    Ok(image::guess_format(&head).ok())
}

#[cfg(test)]
#[path = "mime_tests.rs"]
mod tests;
