//! Minimal but parseable MP3 and FLAC files for tests.
//!
//! Tag text is written as ISO-8859-1 (MP3) or UTF-8 (FLAC); tests keep to
//! ASCII values so both encodings agree.

use std::fs;
use std::path::Path;

/// MPEG-1 layer III, 128 kbps, 44.1 kHz, joint stereo.
const MPEG_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MPEG_FRAME_LEN: usize = 417;

fn mpeg_frames(count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(count * MPEG_FRAME_LEN);
    for _ in 0..count {
        out.extend_from_slice(&MPEG_FRAME_HEADER);
        out.resize(out.len() + MPEG_FRAME_LEN - MPEG_FRAME_HEADER.len(), 0);
    }
    out
}

fn syncsafe(n: u32) -> [u8; 4] {
    [
        ((n >> 21) & 0x7F) as u8,
        ((n >> 14) & 0x7F) as u8,
        ((n >> 7) & 0x7F) as u8,
        (n & 0x7F) as u8,
    ]
}

fn id3v23_text_frame(id: &str, text: &str) -> Vec<u8> {
    let mut body = vec![0u8];
    body.extend_from_slice(text.as_bytes());

    let mut frame = id.as_bytes().to_vec();
    frame.extend_from_slice(&(body.len() as u32).to_be_bytes());
    frame.extend_from_slice(&[0, 0]);
    frame.extend(body);
    frame
}

fn id3v23_tag(track: Option<&str>, title: Option<&str>, artist: Option<&str>) -> Vec<u8> {
    let mut frames = Vec::new();
    if let Some(v) = track {
        frames.extend(id3v23_text_frame("TRCK", v));
    }
    if let Some(v) = title {
        frames.extend(id3v23_text_frame("TIT2", v));
    }
    if let Some(v) = artist {
        frames.extend(id3v23_text_frame("TPE1", v));
    }

    let mut tag = b"ID3".to_vec();
    tag.extend_from_slice(&[3, 0, 0]);
    tag.extend_from_slice(&syncsafe(frames.len() as u32));
    tag.extend(frames);
    tag
}

fn id3v1_field(out: &mut Vec<u8>, value: &str, len: usize) {
    let bytes = value.as_bytes();
    let n = bytes.len().min(len);
    out.extend_from_slice(&bytes[..n]);
    out.resize(out.len() + len - n, 0);
}

fn id3v1_tag(track: u8, title: &str, artist: &str) -> Vec<u8> {
    let mut tag = b"TAG".to_vec();
    id3v1_field(&mut tag, title, 30);
    id3v1_field(&mut tag, artist, 30);
    id3v1_field(&mut tag, "", 30); // album
    id3v1_field(&mut tag, "", 4); // year
    id3v1_field(&mut tag, "", 28); // comment
    tag.push(0);
    tag.push(track);
    tag.push(255); // genre: none
    tag
}

/// Write an MP3 with an ID3v2.3 tag carrying whichever fields are given.
pub fn write_mp3(path: &Path, track: Option<&str>, title: Option<&str>, artist: Option<&str>) {
    let mut data = id3v23_tag(track, title, artist);
    data.extend(mpeg_frames(4));
    fs::write(path, data).unwrap();
}

/// Write an MP3 whose only tag is a trailing ID3v1.1 block.
pub fn write_mp3_id3v1(path: &Path, track: u8, title: &str, artist: &str) {
    let mut data = mpeg_frames(4);
    data.extend(id3v1_tag(track, title, artist));
    fs::write(path, data).unwrap();
}

fn flac_block_header(last: bool, block_type: u8, len: usize) -> [u8; 4] {
    let len = len as u32;
    [
        (u8::from(last) << 7) | block_type,
        (len >> 16) as u8,
        (len >> 8) as u8,
        len as u8,
    ]
}

fn flac_stream_info() -> Vec<u8> {
    let mut info = Vec::with_capacity(34);
    info.extend_from_slice(&4096u16.to_be_bytes()); // min block size
    info.extend_from_slice(&4096u16.to_be_bytes()); // max block size
    info.extend_from_slice(&[0, 0, 0]); // min frame size
    info.extend_from_slice(&[0, 0, 0]); // max frame size
    // 44100 Hz, 2 channels, 16 bits per sample, 0 total samples
    info.extend_from_slice(&[0x0A, 0xC4, 0x42, 0xF0, 0x00, 0x00, 0x00, 0x00]);
    info.extend_from_slice(&[0u8; 16]); // md5
    info
}

fn vorbis_comments(fields: &[(&str, &str)]) -> Vec<u8> {
    let vendor = b"tagname tests";
    let mut block = Vec::new();
    block.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    block.extend_from_slice(vendor);
    block.extend_from_slice(&(fields.len() as u32).to_le_bytes());
    for (key, value) in fields {
        let comment = format!("{key}={value}");
        block.extend_from_slice(&(comment.len() as u32).to_le_bytes());
        block.extend_from_slice(comment.as_bytes());
    }
    block
}

/// Write a FLAC file with a Vorbis comment block carrying whichever fields are given.
pub fn write_flac(path: &Path, track: Option<&str>, title: Option<&str>, artist: Option<&str>) {
    let mut fields = Vec::new();
    if let Some(v) = track {
        fields.push(("TRACKNUMBER", v));
    }
    if let Some(v) = title {
        fields.push(("TITLE", v));
    }
    if let Some(v) = artist {
        fields.push(("ARTIST", v));
    }

    let info = flac_stream_info();
    let comments = vorbis_comments(&fields);

    let mut data = b"fLaC".to_vec();
    data.extend_from_slice(&flac_block_header(false, 0, info.len()));
    data.extend(info);
    data.extend_from_slice(&flac_block_header(true, 4, comments.len()));
    data.extend(comments);
    fs::write(path, data).unwrap();
}
