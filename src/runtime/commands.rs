use std::path::Path;

use anyhow::Result;

use crate::cli;
use crate::config::Settings;
use crate::library::{TagLookup, read_tags, scan};
use crate::rename::{RenameOptions, RenameRequest, rename_directory};

pub fn rename(
    settings: &Settings,
    directory: &Path,
    fields: Option<&[cli::Field]>,
    dry_run: bool,
    strip_leading_separator: bool,
) -> Result<()> {
    let options = match fields {
        Some(fields) => cli::options_from_fields(fields),
        None => RenameOptions::from(&settings.rename),
    }
    .strip_leading_separator(strip_leading_separator || settings.rename.strip_leading_separator);

    let request = RenameRequest::new(directory, options)
        .with_library(settings.library.clone())
        .dry_run(dry_run);
    let report = rename_directory(&request)?;

    if dry_run {
        for record in &report.records {
            println!("{record}");
        }
    }
    println!("Done: {}", report.summary());
    Ok(())
}

pub fn list(settings: &Settings, directory: &Path) -> Result<()> {
    let entries = scan(directory, &settings.library)?;
    let mut untagged = 0;
    for entry in entries {
        match read_tags(&entry.path) {
            TagLookup::Found(tags) => println!(
                "{}: track {}, \"{}\" by {}",
                entry.file_name, tags.track, tags.title, tags.artist
            ),
            TagLookup::Missing => {
                untagged += 1;
                println!("{}: missing track number, title or artist", entry.file_name);
            }
            TagLookup::Failed(e) => {
                untagged += 1;
                println!("{}: {}", entry.file_name, e.source);
            }
        }
    }
    if untagged > 0 {
        println!("and {untagged} files that will not be renamed");
    }
    Ok(())
}

pub fn print_config(settings: &Settings) -> Result<()> {
    print!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}
