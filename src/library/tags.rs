use std::borrow::Cow;
use std::fs::File;
use std::path::{Path, PathBuf};

use lofty::config::ParseOptions;
use lofty::error::LoftyError;
use lofty::file::TaggedFile;
use lofty::flac::FlacFile;
use lofty::id3::v2::FrameId;
use lofty::mpeg::MpegFile;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};

use super::format::AudioFormat;
use super::model::AudioTags;

/// Outcome of looking up the rename tags of a single file.
#[derive(Debug)]
pub enum TagLookup {
    Found(AudioTags),
    /// Unsupported extension, no tag container, or a required field is absent/blank.
    Missing,
    /// The file could not be parsed.
    Failed(TagError),
}

impl TagLookup {
    pub fn into_tags(self) -> Option<AudioTags> {
        match self {
            Self::Found(tags) => Some(tags),
            Self::Missing | Self::Failed(_) => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("failed to read tags from '{}': {source}", .path.display())]
pub struct TagError {
    pub path: PathBuf,
    #[source]
    pub source: LoftyError,
}

/// Read track number, title and artist from `path`.
///
/// The format is chosen from the extension. Parse failures are logged and
/// reported as [`TagLookup::Failed`], never propagated.
pub fn read_tags(path: &Path) -> TagLookup {
    let Some(format) = AudioFormat::from_path(path) else {
        return TagLookup::Missing;
    };

    let tagged = match read_tagged_file(path, format) {
        Ok(tagged) => tagged,
        Err(source) => {
            let err = TagError {
                path: path.to_path_buf(),
                source,
            };
            tracing::warn!("{err}");
            return TagLookup::Failed(err);
        }
    };

    match tags_from_file(path, &tagged, format) {
        Some(tags) => TagLookup::Found(tags),
        None => {
            tracing::debug!(
                "'{}' is missing a track number, title or artist",
                path.display()
            );
            TagLookup::Missing
        }
    }
}

fn read_tagged_file(path: &Path, format: AudioFormat) -> Result<TaggedFile, LoftyError> {
    Probe::open(path)?.set_file_type(format.file_type()).read()
}

/// Take all three values from the first container of `format` that has them.
fn tags_from_file(path: &Path, tagged: &TaggedFile, format: AudioFormat) -> Option<AudioTags> {
    format.tag_types().iter().find_map(|tag_type| {
        let tag = tagged.tag(*tag_type)?;
        let track = track_text(tag).or_else(|| native_track_text(path, *tag_type))?;
        let title = non_blank(tag.title())?;
        let artist = non_blank(tag.artist())?;
        Some(AudioTags {
            track,
            title,
            artist,
        })
    })
}

/// Track number as text, e.g. `"007"` stays `"007"`; `"3/12"` gives `"3"`.
fn track_text(tag: &Tag) -> Option<String> {
    tag.get_string(&ItemKey::TrackNumber).and_then(track_part)
}

/// The generic tag drops track numbers that are not plain integers (`"A1"`),
/// so those are read back from the format's own frame.
fn native_track_text(path: &Path, tag_type: TagType) -> Option<String> {
    let mut file = File::open(path).ok()?;
    match tag_type {
        TagType::Id3v2 => {
            let mpeg = MpegFile::read_from(&mut file, ParseOptions::new()).ok()?;
            let trck = FrameId::Valid(Cow::Borrowed("TRCK"));
            mpeg.id3v2()?.get_text(&trck).and_then(track_part)
        }
        TagType::VorbisComments => {
            let flac = FlacFile::read_from(&mut file, ParseOptions::new()).ok()?;
            flac.vorbis_comments()?
                .get("TRACKNUMBER")
                .and_then(track_part)
        }
        _ => None,
    }
}

/// The part before a `/` total, trimmed; `None` when blank.
fn track_part(raw: &str) -> Option<String> {
    let track = raw.split('/').next().unwrap_or(raw).trim();
    if track.is_empty() {
        None
    } else {
        Some(track.to_string())
    }
}

fn non_blank(value: Option<Cow<'_, str>>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::track_part;

    #[test]
    fn track_part_keeps_text_before_total() {
        assert_eq!(track_part("007").as_deref(), Some("007"));
        assert_eq!(track_part(" 3/12 ").as_deref(), Some("3"));
        assert_eq!(track_part("A1").as_deref(), Some("A1"));
        assert_eq!(track_part("/12"), None);
        assert_eq!(track_part("  "), None);
    }
}
