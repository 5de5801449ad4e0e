use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `TAGNAME__`) override it, falling back to struct defaults.
impl Settings {
    /// Load settings from the resolved config path and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from `path` (skipped when absent) with environment overrides.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("TAGNAME")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject settings that would break a run. All problems are reported together.
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();

        if let Some(file) = &self.log.file {
            if file.as_os_str().is_empty() {
                problems.push("log.file must not be empty".to_string());
            } else if file.is_dir() {
                problems.push(format!("log.file '{}' is a directory", file.display()));
            }
        }
        if self.ui.done_message.trim().is_empty() {
            problems.push("ui.done_message must not be blank".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }

    /// Settings that are valid but probably not what the user meant.
    pub fn warnings(&self) -> Vec<String> {
        let rename = &self.rename;
        let mut warnings = Vec::new();

        if !rename.track && !rename.title && !rename.artist {
            warnings.push(
                "rename.track, rename.title and rename.artist are all off; \
                 files will be named by their extension only"
                    .to_string(),
            );
        }
        warnings
    }
}

/// Resolve the config path from `TAGNAME_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("TAGNAME_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/tagname/config.toml`, or `~/.config/tagname/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("tagname").join("config.toml"))
}
