use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// One page of a Spotify offset-paginated collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimpleAlbum {
    pub id: String,
    pub name: String,
    pub release_date: String,
    #[serde(default = "default_precision")]
    pub release_date_precision: String,
    #[serde(default)]
    pub album_type: String,
}

fn default_precision() -> String {
    "day".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimpleTrack {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullTrack {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub popularity: u32,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralTracksResponse {
    pub tracks: Vec<Option<FullTrack>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistOwner {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: Option<PlaylistOwner>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
}

/// Track object inside a playlist item. Local files carry no ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTrackItem {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTrack {
    pub track: Option<PlaylistTrackItem>,
}

impl PlaylistTrack {
    pub fn track_id(&self) -> Option<&str> {
        self.track.as_ref().and_then(|t| t.id.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

/// Row of the `tracks.org` / `working.org` reports and the summary table.
#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Version")]
    pub version: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Album Date")]
    pub album_date: String,
    #[tabled(rename = "Song Date")]
    pub song_date: String,
    #[tabled(rename = "Recordings")]
    pub recordings: String,
    #[tabled(rename = "Popularity")]
    pub popularity: u32,
    #[tabled(rename = "Duration")]
    pub duration: String,
    #[tabled(rename = "Original")]
    pub original: String,
    #[tabled(rename = "Excluded")]
    pub excluded: String,
}

/// Row of the per-set summary printed at the end of a run.
#[derive(Tabled)]
pub struct SetSummaryRow {
    #[tabled(rename = "Set")]
    pub set: String,
    #[tabled(rename = "Playlist")]
    pub playlist: String,
    #[tabled(rename = "Tracks")]
    pub tracks: usize,
}
