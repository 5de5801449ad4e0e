use std::fs;

use crate::library::{DirectoryEntry, ScanError, TagLookup, read_tags, scan};

use super::filename::build_file_name;
use super::options::RenameRequest;
use super::report::{BatchReport, Outcome, RenameRecord, SkipReason};

/// Rename every tagged audio file directly inside `request.directory`.
///
/// Files are processed one after another and independently: a file without
/// usable tags is skipped, a failed rename is logged and recorded, and the
/// run always goes on to the next file. Only a directory that cannot be
/// listed is an error.
pub fn rename_directory(request: &RenameRequest) -> Result<BatchReport, ScanError> {
    let entries = scan(&request.directory, &request.library)?;
    tracing::debug!(
        "found {} audio files in '{}'",
        entries.len(),
        request.directory.display()
    );

    let mut report = BatchReport::default();
    for entry in &entries {
        report.push(rename_entry(entry, request));
    }
    Ok(report)
}

fn rename_entry(entry: &DirectoryEntry, request: &RenameRequest) -> RenameRecord {
    let tags = match read_tags(&entry.path) {
        TagLookup::Found(tags) => tags,
        TagLookup::Missing => {
            tracing::debug!("skipping '{}': missing tags", entry.file_name);
            return RenameRecord::skipped(&entry.file_name, SkipReason::NoTags);
        }
        TagLookup::Failed(_) => {
            return RenameRecord::skipped(&entry.file_name, SkipReason::ReadError);
        }
    };

    let new_name = build_file_name(&tags, &request.options, &entry.extension);
    let outcome = apply(entry, &new_name, request);

    RenameRecord {
        original_name: entry.file_name.clone(),
        new_name: Some(new_name),
        outcome,
    }
}

fn apply(entry: &DirectoryEntry, new_name: &str, request: &RenameRequest) -> Outcome {
    if new_name.contains(std::path::is_separator) {
        let msg = "new name contains a path separator".to_string();
        tracing::error!("error renaming '{}' to '{new_name}': {msg}", entry.file_name);
        return Outcome::Failed(msg);
    }

    if new_name == entry.file_name {
        tracing::debug!("'{}' already has the right name", entry.file_name);
        return Outcome::Unchanged;
    }

    if request.dry_run {
        tracing::debug!("would rename '{}' -> '{new_name}'", entry.file_name);
        return Outcome::Planned;
    }

    let target = request.directory.join(new_name);
    match fs::rename(&entry.path, &target) {
        Ok(()) => {
            tracing::info!("renamed '{}' -> '{new_name}'", entry.file_name);
            Outcome::Renamed
        }
        Err(e) => {
            tracing::error!("error renaming '{}': {e}", entry.file_name);
            Outcome::Failed(e.to_string())
        }
    }
}
