use crate::{
    Res,
    types::{FullTrack, SeveralTracksResponse, SimpleAlbum, SimpleTrack},
};

use super::SpotifyClient;

/// Maximum IDs Spotify accepts per `GET /tracks` request.
pub const TRACKS_BATCH: usize = 50;

impl SpotifyClient {
    /// Retrieves album metadata (name, release date and precision).
    pub async fn get_album(&mut self, album_id: &str) -> Res<SimpleAlbum> {
        let url = self.url(&format!("albums/{album_id}"));
        self.get_json(&url).await
    }

    /// Retrieves the complete track listing of an album.
    pub async fn get_album_tracks(&mut self, album_id: &str) -> Res<Vec<SimpleTrack>> {
        let url = self.url(&format!("albums/{album_id}/tracks?limit=50"));
        self.get_all(&url).await
    }

    /// Retrieves full track objects (with popularity) in batches of 50.
    ///
    /// IDs Spotify does not know are skipped.
    pub async fn get_tracks(&mut self, track_ids: &[String]) -> Res<Vec<FullTrack>> {
        let mut tracks = Vec::with_capacity(track_ids.len());

        for batch in track_ids.chunks(TRACKS_BATCH) {
            let url = self.url(&format!("tracks?ids={}", batch.join(",")));
            let response: SeveralTracksResponse = self.get_json(&url).await?;
            tracks.extend(response.tracks.into_iter().flatten());
        }

        Ok(tracks)
    }
}
