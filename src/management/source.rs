use crate::{
    Res,
    catalog::{ExclusionMatcher, ExclusionPlaylist, PlaylistRoles, TrackInfo},
    spotify::SpotifyClient,
    types::{Artist, FullTrack, Playlist, PlaylistTrack, SimpleAlbum, SimpleTrack},
    utils, verbose,
};

use super::cache::{CacheKey, EntityType, ResponseCache};

/// Spotify reads of one curation run, served from the response cache when
/// possible.
///
/// Playlist contents are cached per reading user. Which entries go stale is
/// decided by the run: see [`CatalogSource::invalidate_playlists`] and
/// [`CatalogSource::invalidate_playlist_tracks`].
pub struct CatalogSource {
    client: SpotifyClient,
    cache: ResponseCache,
    user: String,
}

impl CatalogSource {
    pub fn new(client: SpotifyClient, cache: ResponseCache, user: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            user: user.into(),
        }
    }

    pub async fn artist(&mut self, artist_id: &str) -> Res<Artist> {
        let key = CacheKey::new(EntityType::Artist, artist_id);
        self.cache
            .get_or_fetch(&key, self.client.get_artist(artist_id))
            .await
    }

    pub async fn artist_albums(&mut self, artist_id: &str) -> Res<Vec<SimpleAlbum>> {
        let key = CacheKey::new(EntityType::ArtistAlbums, artist_id);
        self.cache
            .get_or_fetch(&key, self.client.get_artist_albums(artist_id))
            .await
    }

    pub async fn album(&mut self, album_id: &str) -> Res<SimpleAlbum> {
        let key = CacheKey::new(EntityType::Album, album_id);
        self.cache
            .get_or_fetch(&key, self.client.get_album(album_id))
            .await
    }

    pub async fn album_tracks(&mut self, album_id: &str) -> Res<Vec<SimpleTrack>> {
        let key = CacheKey::new(EntityType::AlbumTracks, album_id);
        self.cache
            .get_or_fetch(&key, self.client.get_album_tracks(album_id))
            .await
    }

    /// Full track objects of an album, keyed by the album ID.
    pub async fn album_full_tracks(&mut self, album_id: &str) -> Res<Vec<FullTrack>> {
        let key = CacheKey::new(EntityType::Tracks, album_id);
        if let Some(tracks) = self.cache.get(&key).await? {
            return Ok(tracks);
        }

        let ids: Vec<String> = self
            .album_tracks(album_id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();
        let tracks = self.client.get_tracks(&ids).await?;
        self.cache.put(&key, &tracks).await?;
        Ok(tracks)
    }

    /// Tracks of an album ready for classification.
    ///
    /// # Errors
    ///
    /// Fails with the album named when its release date cannot be parsed.
    pub async fn album_track_infos(&mut self, album: &SimpleAlbum) -> Res<Vec<TrackInfo>> {
        let release_date = utils::parse_release_date(&album.release_date, &album.release_date_precision)
            .map_err(|e| format!("album '{}' ({}): {e}", album.name, album.id))?;

        let tracks = self.album_full_tracks(&album.id).await?;
        Ok(tracks
            .into_iter()
            .map(|t| TrackInfo {
                id: t.id,
                name: t.name,
                uri: t.uri,
                album_id: album.id.clone(),
                album: album.name.clone(),
                album_release_date: release_date,
                duration_ms: t.duration_ms,
                popularity: t.popularity,
            })
            .collect())
    }

    pub async fn user_playlists(&mut self) -> Res<Vec<Playlist>> {
        let key = CacheKey::new(EntityType::Playlists, self.user.as_str());
        self.cache
            .get_or_fetch(&key, self.client.get_user_playlists(&self.user))
            .await
    }

    pub async fn playlist_tracks(&mut self, playlist_id: &str) -> Res<Vec<PlaylistTrack>> {
        let key = CacheKey::owned(EntityType::PlaylistTracks, playlist_id, self.user.as_str());
        self.cache
            .get_or_fetch(&key, self.client.get_playlist_tracks(playlist_id))
            .await
    }

    /// The user's playlists; `refresh` drops the cached list first.
    pub async fn playlists(&mut self, refresh: bool) -> Res<Vec<Playlist>> {
        if refresh {
            self.invalidate_playlists().await?;
        }
        self.user_playlists().await
    }

    /// Contents of every exclusion source among `playlists`.
    ///
    /// Exclusion playlists change between runs, so their cached contents are
    /// dropped and re-read every time. Other playlists keep their entries.
    pub async fn exclusion_playlists<M: ExclusionMatcher>(
        &mut self,
        playlists: &[Playlist],
        roles: &PlaylistRoles<M>,
    ) -> Res<Vec<ExclusionPlaylist>> {
        let mut exclusions = Vec::new();
        for playlist in playlists.iter().filter(|p| roles.is_exclusion_source(&p.name)) {
            self.invalidate_playlist_tracks(&playlist.id).await?;
            let items = self.playlist_tracks(&playlist.id).await?;
            verbose!("Exclusion playlist {} has {} tracks", playlist.name, items.len());
            exclusions.push(ExclusionPlaylist::new(
                playlist.name.as_str(),
                items.iter().filter_map(PlaylistTrack::track_id),
            ));
        }
        Ok(exclusions)
    }

    /// Drops the cached playlist list of the user.
    pub async fn invalidate_playlists(&self) -> Res<()> {
        let key = CacheKey::new(EntityType::Playlists, self.user.as_str());
        if self.cache.invalidate(&key).await? {
            verbose!("Invalidated playlists of {}", self.user);
        }
        Ok(())
    }

    /// Drops the cached contents of one playlist.
    pub async fn invalidate_playlist_tracks(&self, playlist_id: &str) -> Res<()> {
        let key = CacheKey::owned(EntityType::PlaylistTracks, playlist_id, self.user.as_str());
        if self.cache.invalidate(&key).await? {
            verbose!("Invalidated playlist {playlist_id}");
        }
        Ok(())
    }

    /// Creates a playlist for the user. The cached playlist list no longer
    /// matches the account afterwards and is dropped.
    pub async fn create_playlist(&mut self, name: &str, description: &str) -> Res<Playlist> {
        let playlist = self
            .client
            .create_playlist(&self.user, name, description)
            .await?;
        self.invalidate_playlists().await?;
        Ok(playlist)
    }

    /// Current track IDs of a playlist, read past the cache.
    pub async fn live_playlist_track_ids(&mut self, playlist_id: &str) -> Res<Vec<String>> {
        let items = self.client.get_playlist_tracks(playlist_id).await?;
        Ok(items
            .iter()
            .filter_map(PlaylistTrack::track_id)
            .map(str::to_string)
            .collect())
    }

    pub fn client_mut(&mut self) -> &mut SpotifyClient {
        &mut self.client
    }
}
