use std::path::PathBuf;

use super::format::AudioFormat;

/// The three tag values a file name is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTags {
    /// Track number as written by the tag reader, without padding.
    pub track: String,
    pub title: String,
    pub artist: String,
}

/// An audio file found directly inside the scanned directory.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub file_name: String,
    /// Extension including the leading dot, with its original case.
    pub extension: String,
    pub format: AudioFormat,
}
