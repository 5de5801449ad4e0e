use std::path::PathBuf;

use crate::rename::RenameOptions;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, default_value_t = tracing::Level::INFO)]
    ///the log level for the application {trace, debug, info, warn, error}
    pub log_level: tracing::Level,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    ///rename audio files from their track number, title and artist tags
    Rename {
        ///music directory [default: ./ ]
        directory: Option<PathBuf>,
        ///fields to put in the new names, in any order [default: from config]
        #[arg(short, long, value_delimiter = ',')]
        fields: Option<Vec<Field>>,
        ///show the new names without renaming anything
        #[arg(short = 'n', long)]
        dry_run: bool,
        ///drop the " - " a name starts with when the track number is left out
        #[arg(short, long)]
        strip_leading_separator: bool,
    },
    ///list audio files with the tags used for renaming
    List {
        ///music directory [default: ./ ]
        directory: Option<PathBuf>,
    },
    ///print the effective configuration
    Config,
    ///pick the directory and fields in an interactive form
    Tui {
        ///music directory to prefill
        directory: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Track,
    Title,
    Artist,
}

/// Toggles enabled by `fields`; the order fields were given in does not matter.
pub fn options_from_fields(fields: &[Field]) -> RenameOptions {
    RenameOptions::new(
        fields.contains(&Field::Track),
        fields.contains(&Field::Title),
        fields.contains(&Field::Artist),
    )
}
