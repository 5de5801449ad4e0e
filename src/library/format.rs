use std::fmt;
use std::path::Path;

use lofty::file::FileType;
use lofty::tag::TagType;

/// Audio formats whose files can be renamed from their tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Flac,
}

impl AudioFormat {
    /// Match an extension (with or without the leading dot), ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }

    /// The container `lofty` is told to parse, regardless of file content sniffing.
    pub fn file_type(self) -> FileType {
        match self {
            Self::Mp3 => FileType::Mpeg,
            Self::Flac => FileType::Flac,
        }
    }

    /// Tag containers holding track/title/artist, most preferred first.
    pub fn tag_types(self) -> &'static [TagType] {
        match self {
            Self::Mp3 => &[TagType::Id3v2, TagType::Id3v1],
            Self::Flac => &[TagType::VorbisComments],
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mp3 => f.write_str("mp3"),
            Self::Flac => f.write_str("flac"),
        }
    }
}
