use std::path::PathBuf;

use crate::config::{LibrarySettings, RenameSettings};

/// Field toggles for one batch run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    pub include_track: bool,
    pub include_title: bool,
    pub include_artist: bool,
    /// Remove the ` - ` a name starts with when the track number is left out.
    pub strip_leading_separator: bool,
}

impl RenameOptions {
    pub fn new(include_track: bool, include_title: bool, include_artist: bool) -> Self {
        Self {
            include_track,
            include_title,
            include_artist,
            strip_leading_separator: false,
        }
    }

    pub fn strip_leading_separator(mut self, strip: bool) -> Self {
        self.strip_leading_separator = strip;
        self
    }
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

impl From<&RenameSettings> for RenameOptions {
    fn from(s: &RenameSettings) -> Self {
        Self::new(s.track, s.title, s.artist).strip_leading_separator(s.strip_leading_separator)
    }
}

/// Everything a batch run needs, fixed before the first file is touched.
#[derive(Debug, Clone)]
pub struct RenameRequest {
    pub directory: PathBuf,
    pub options: RenameOptions,
    pub library: LibrarySettings,
    /// Build names and report them without renaming anything.
    pub dry_run: bool,
}

impl RenameRequest {
    pub fn new(directory: impl Into<PathBuf>, options: RenameOptions) -> Self {
        Self {
            directory: directory.into(),
            options,
            library: LibrarySettings::default(),
            dry_run: false,
        }
    }

    pub fn with_library(mut self, library: LibrarySettings) -> Self {
        self.library = library;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
