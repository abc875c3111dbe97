//! Building a song list from a playlist file or a music directory.

use crate::error::ApiError;
use crate::song::Song;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// File extensions treated as audio when scanning a directory.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "opus", "m4a", "aac", "wav"];

/// Playlist entries may be fully tagged songs or the bare `{title, videoId}`
/// objects served by the playlist backend.
#[derive(Deserialize)]
#[serde(untagged)]
enum PlaylistEntry {
    Tagged(Song),
    Bare {
        title: String,
        #[serde(rename = "videoId")]
        video_id: String,
    },
}

impl From<PlaylistEntry> for Song {
    fn from(entry: PlaylistEntry) -> Self {
        match entry {
            PlaylistEntry::Tagged(song) => song,
            PlaylistEntry::Bare { title, video_id } => Song::YoutubeVideo { title, video_id },
        }
    }
}

/// Load a JSON array of songs.
pub fn load_playlist(path: &Path) -> Result<Vec<Song>, ApiError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ApiError::ImportError(format!("Failed to read playlist {}: {}", path.display(), e))
    })?;
    let entries: Vec<PlaylistEntry> = serde_json::from_str(&raw).map_err(|e| {
        ApiError::ImportError(format!("Playlist {} is not valid: {}", path.display(), e))
    })?;
    let songs: Vec<Song> = entries.into_iter().map(Song::from).collect();
    info!(playlist = %path.display(), songs = songs.len(), "Loaded playlist");
    Ok(songs)
}

/// Collect audio files under `root`, sorted by path.
pub fn scan_directory(root: &Path) -> Result<Vec<Song>, ApiError> {
    if !root.is_dir() {
        return Err(ApiError::ImportError(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut songs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            ApiError::ImportError(format!("Failed to scan {}: {}", root.display(), e))
        })?;
        if !entry.file_type().is_file() || !is_audio(entry.path()) {
            continue;
        }
        let title = entry
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(path = %entry.path().display(), "Found audio file");
        songs.push(Song::LocalFile {
            title,
            path: entry.path().to_path_buf(),
        });
    }
    info!(directory = %root.display(), songs = songs.len(), "Scanned music directory");
    Ok(songs)
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
