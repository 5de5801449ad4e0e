//! Music library access: audio format detection, tag reading and the
//! one-level directory scan used by the renamer.
//!
//! Tag values come from `lofty`. Each supported format names the tag
//! containers it is read from, in order of preference.

mod format;
mod model;
mod scan;
mod tags;

pub use format::AudioFormat;
pub use model::{AudioTags, DirectoryEntry};
pub use scan::{ScanError, scan};
pub use tags::{TagError, TagLookup, read_tags};

#[cfg(test)]
pub(crate) mod fixtures;
