//! Songs: the items being ranked.
//!
//! A [`Song`] is its own serialized form. Each variant carries exactly the
//! fields needed to show it again, tagged by where the song came from, so a
//! save file can be restored without contacting any service.

pub mod import;

pub use import::{load_playlist, scan_directory, AUDIO_EXTENSIONS};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Song {
    /// A YouTube video. There is no artist field: the uploading channel is
    /// often not the artist.
    #[serde(rename = "youtubeVideo")]
    YoutubeVideo {
        title: String,
        #[serde(rename = "videoId")]
        video_id: String,
    },

    #[serde(rename = "bandcampTrack")]
    BandcampTrack {
        title: String,
        #[serde(rename = "albumTitle")]
        album_title: String,
        artist: String,
        #[serde(rename = "albumID")]
        album_id: String,
        #[serde(rename = "trackID")]
        track_id: String,
        #[serde(rename = "albumArt")]
        album_art: String,
    },

    /// An audio file on this machine, titled by its file name.
    #[serde(rename = "localFile")]
    LocalFile { title: String, path: PathBuf },
}

impl Song {
    pub fn youtube(title: impl Into<String>, video_id: impl Into<String>) -> Self {
        Song::YoutubeVideo {
            title: title.into(),
            video_id: video_id.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Song::YoutubeVideo { title, .. }
            | Song::BandcampTrack { title, .. }
            | Song::LocalFile { title, .. } => title,
        }
    }

    /// Source kind, as written in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Song::YoutubeVideo { .. } => "youtubeVideo",
            Song::BandcampTrack { .. } => "bandcampTrack",
            Song::LocalFile { .. } => "localFile",
        }
    }

    /// Line shown in the final ranked list.
    pub fn list_item(&self) -> String {
        match self {
            Song::BandcampTrack { title, artist, .. } => format!("{} - {}", title, artist),
            other => other.title().to_string(),
        }
    }

    /// Where the song can be listened to.
    pub fn link(&self) -> String {
        match self {
            Song::YoutubeVideo { video_id, .. } => {
                format!("https://www.youtube.com/watch?v={}", video_id)
            }
            Song::BandcampTrack {
                album_id, track_id, ..
            } => format!(
                "https://bandcamp.com/EmbeddedPlayer/album={}/size=small/track={}/",
                album_id, track_id
            ),
            Song::LocalFile { path, .. } => path.display().to_string(),
        }
    }

    /// Longer description used when asking which of two songs is better.
    pub fn describe(&self) -> String {
        match self {
            Song::BandcampTrack {
                title,
                album_title,
                artist,
                ..
            } => format!("{} - {} ({}) <{}>", title, artist, album_title, self.link()),
            other => format!("{} <{}>", other.title(), other.link()),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list_item())
    }
}
