use std::{error::Error, fmt, io, path::PathBuf};

/// Failures worth telling the user about when opening images.
#[derive(Debug)]
pub enum CollectionError {
    /// An explicitly named file exists but is not a supported image.
    NotAnImage(PathBuf),
    /// The requested locations produced no usable records.
    NoImagesFound,
    /// The named path itself could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::NotAnImage(path) => write!(
                f,
                "couldn't recognise the image file format for file '{}'",
                path.display()
            ),
            CollectionError::NoImagesFound => write!(f, "the given locations contain no images"),
            CollectionError::Io { path, source } => {
                write!(f, "cannot open '{}': {source}", path.display())
            }
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CollectionError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
