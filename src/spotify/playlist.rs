use reqwest::Method;

use crate::{
    Res,
    catalog::PlaylistBatch,
    types::{
        CreatePlaylistRequest, Playlist, PlaylistTrack, PlaylistTracksRequest, SnapshotResponse,
    },
};

use super::SpotifyClient;

pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{track_id}")
}

/// Finds a playlist by name, ignoring case.
pub fn find_by_name<'a>(playlists: &'a [Playlist], name: &str) -> Option<&'a Playlist> {
    playlists
        .iter()
        .find(|p| p.name.to_lowercase() == name.to_lowercase())
}

impl SpotifyClient {
    /// Retrieves every playlist of a user.
    pub async fn get_user_playlists(&mut self, user_id: &str) -> Res<Vec<Playlist>> {
        let url = self.url(&format!("users/{user_id}/playlists?limit=50"));
        self.get_all(&url).await
    }

    /// Retrieves every item of a playlist.
    pub async fn get_playlist_tracks(&mut self, playlist_id: &str) -> Res<Vec<PlaylistTrack>> {
        let url = self.url(&format!("playlists/{playlist_id}/tracks?limit=100"));
        self.get_all(&url).await
    }

    /// Creates a private playlist for a user.
    pub async fn create_playlist(
        &mut self,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Res<Playlist> {
        let url = self.url(&format!("users/{user_id}/playlists"));
        let request = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: false,
            collaborative: false,
        };
        self.send_json(Method::POST, &url, &request).await
    }

    /// Executes one planned mutation of a playlist's contents.
    pub async fn apply_batch(&mut self, playlist_id: &str, batch: &PlaylistBatch) -> Res<String> {
        let url = self.url(&format!("playlists/{playlist_id}/tracks"));
        let (method, ids) = match batch {
            PlaylistBatch::Replace(ids) => (Method::PUT, ids),
            PlaylistBatch::Append(ids) => (Method::POST, ids),
        };
        let request = PlaylistTracksRequest {
            uris: ids.iter().map(|id| track_uri(id)).collect(),
        };
        let response: SnapshotResponse = self.send_json(method, &url, &request).await?;
        Ok(response.snapshot_id)
    }
}
