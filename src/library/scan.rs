use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::format::AudioFormat;
use super::model::DirectoryEntry;

#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot read directory '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the audio files directly inside `dir`, sorted by file name.
///
/// Subdirectories, symlinks and files with an unsupported extension are left
/// out. Entries that cannot be read are logged and skipped; only a `dir` that
/// cannot be opened at all is an error.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<DirectoryEntry>, ScanError> {
    let meta = std::fs::metadata(dir).map_err(|source| ScanError::Open {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is `dir` itself: nothing else can be listed.
            Err(source) if source.depth() == 0 => {
                return Err(ScanError::Read {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("skipping unreadable entry in '{}': {e}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || (!settings.include_hidden && is_hidden(path)) {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(format) = AudioFormat::from_extension(ext) else {
            continue;
        };

        entries.push(DirectoryEntry {
            path: path.to_path_buf(),
            file_name: entry.file_name().to_string_lossy().into_owned(),
            extension: format!(".{ext}"),
            format,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.file_name.as_str()).collect()
    }

    #[test]
    fn is_hidden_checks_leading_dot() {
        assert!(is_hidden(Path::new("/tmp/.a.mp3")));
        assert!(!is_hidden(Path::new("/tmp/a.mp3")));
    }

    #[test]
    fn scan_keeps_only_supported_extensions_sorted_by_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.FLAC"), b"x").unwrap();
        fs::write(dir.path().join("a.mp3"), b"x").unwrap();
        fs::write(dir.path().join("c.txt"), b"x").unwrap();
        fs::write(dir.path().join("d.ogg"), b"x").unwrap();
        fs::write(dir.path().join("noext"), b"x").unwrap();

        let entries = scan(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(names(&entries), vec!["a.mp3", "b.FLAC"]);
        assert_eq!(entries[0].format, AudioFormat::Mp3);
        assert_eq!(entries[0].extension, ".mp3");
        assert_eq!(entries[1].format, AudioFormat::Flac);
        assert_eq!(entries[1].extension, ".FLAC");
    }

    #[test]
    fn scan_does_not_descend_into_subdirectories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"x").unwrap();
        let sub = dir.path().join("sub.mp3");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"x").unwrap();

        let entries = scan(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(names(&entries), vec!["root.mp3"]);
    }

    #[test]
    fn scan_respects_include_hidden() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"x").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"x").unwrap();

        let all = scan(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(names(&all), vec![".hidden.mp3", "visible.mp3"]);

        let settings = LibrarySettings {
            include_hidden: false,
        };
        let visible = scan(dir.path(), &settings).unwrap();
        assert_eq!(names(&visible), vec!["visible.mp3"]);
    }

    #[test]
    fn scan_rejects_missing_directory_and_plain_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            scan(&missing, &LibrarySettings::default()),
            Err(ScanError::Open { .. })
        ));

        let file = dir.path().join("a.mp3");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            scan(&file, &LibrarySettings::default()),
            Err(ScanError::NotADirectory(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn scan_skips_symlinks() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("real.mp3"), b"x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.mp3"), dir.path().join("link.mp3"))
            .unwrap();

        let entries = scan(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(names(&entries), vec!["real.mp3"]);
    }
}
