use crate::{
    Res,
    types::{Artist, SimpleAlbum},
};

use super::SpotifyClient;

/// Release groups making up an artist's own discography.
pub const DISCOGRAPHY_GROUPS: &str = "album,single,compilation";

impl SpotifyClient {
    /// Retrieves an artist by Spotify ID.
    pub async fn get_artist(&mut self, artist_id: &str) -> Res<Artist> {
        let url = self.url(&format!("artists/{artist_id}"));
        self.get_json(&url).await
    }

    /// Retrieves every album, single and compilation of an artist.
    ///
    /// Pages of 50 are fetched until Spotify reports no `next` page, so the
    /// result is the complete discography.
    pub async fn get_artist_albums(&mut self, artist_id: &str) -> Res<Vec<SimpleAlbum>> {
        let url = self.url(&format!(
            "artists/{artist_id}/albums?include_groups={DISCOGRAPHY_GROUPS}&limit=50"
        ));
        self.get_all(&url).await
    }
}
