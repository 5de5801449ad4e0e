use crate::library::AudioTags;

use super::options::RenameOptions;

/// Placed before the title and artist segments.
pub const SEPARATOR: &str = " - ";

/// Left-pad a track number with zeros to two characters. Longer values are kept whole.
pub fn pad_track(track: &str) -> String {
    format!("{track:0>2}")
}

/// Build the new file name for `tags`.
///
/// Segments are always in track, title, artist order and each one is only
/// present when enabled. Title and artist carry their own leading
/// [`SEPARATOR`], so a name without a track number starts with ` - ` unless
/// `strip_leading_separator` is set. `extension` (with its dot) is appended
/// verbatim; with every field disabled it is the whole name.
pub fn build_file_name(tags: &AudioTags, options: &RenameOptions, extension: &str) -> String {
    let mut name = String::new();

    if options.include_track {
        name.push_str(&pad_track(&tags.track));
    }
    if options.include_title {
        name.push_str(SEPARATOR);
        name.push_str(&tags.title);
    }
    if options.include_artist {
        name.push_str(SEPARATOR);
        name.push_str(&tags.artist);
    }

    if options.strip_leading_separator {
        if let Some(rest) = name.strip_prefix(SEPARATOR) {
            name = rest.to_string();
        }
    }

    name.push_str(extension);
    name
}
