//! Batch renaming of the audio files in one directory.
//!
//! A run is described by an immutable [`RenameRequest`]; every qualifying
//! file is handled independently and ends up as one [`RenameRecord`] in the
//! returned [`BatchReport`].

mod batch;
mod filename;
mod options;
mod report;

pub use batch::rename_directory;
pub use filename::{SEPARATOR, build_file_name, pad_track};
pub use options::{RenameOptions, RenameRequest};
pub use report::{BatchReport, Outcome, RenameRecord, SkipReason};
