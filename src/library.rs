//! Source library: walking the tree, junk removal and tag reading.

mod mime;
mod model;
mod scan;
mod tags;

pub use mime::ExtensionTable;
pub use model::MetadataRecord;
pub use scan::{ScanReport, filter_junk, scan, walk_files};
pub use tags::{parse_track_number, read_record};
