use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tagname/config.toml` or `~/.config/tagname/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `TAGNAME__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub rename: RenameSettings,
    pub library: LibrarySettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

/// Which tag fields go into the new file name.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenameSettings {
    /// Two-digit track number prefix.
    pub track: bool,
    /// ` - <title>` segment.
    pub title: bool,
    /// ` - <artist>` segment.
    pub artist: bool,
    /// Drop the ` - ` a name would otherwise start with when `track` is off.
    pub strip_leading_separator: bool,
}

impl Default for RenameSettings {
    fn default() -> Self {
        Self {
            track: true,
            title: true,
            artist: true,
            strip_leading_separator: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether dot-files are renamed too.
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box of the interactive form.
    pub header_text: String,
    /// Shown in the status line once a run completes.
    pub done_message: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Pick a directory and the fields to put in file names ".to_string(),
            done_message: "Renaming finished".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Where the interactive form writes its log. Nothing is logged there when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
