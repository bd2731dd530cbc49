mod collate;
mod mime;
mod ops;
mod probe;
mod record;

pub use collate::collation_key;
pub use mime::{ICON_MIME_TYPE, content_type, is_supported, supported_mime_types};
pub use ops::{MAX_COPY_SUFFIX, copy_file, copy_name, path_ext, rename_noreplace};
pub use probe::{EntryInfo, EntryKind, display_name_of, enumerate_dir, is_hidden_name, query_entry};
pub use record::FileRecord;
