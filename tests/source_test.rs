use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::Utc;
use serde_json::{Value, json};
use sporcat::{
    catalog::{PlaylistRoles, RoleConfig},
    management::{CacheKey, CatalogSource, EntityType, ResponseCache, TokenManager},
    spotify::SpotifyClient,
    types::{Playlist, PlaylistTrack, PlaylistTrackItem, Token},
};
use tempfile::TempDir;

const USER: &str = "alice";

// Paths requested from the local Spotify stand-in, in order
#[derive(Clone, Default)]
struct Requests(Arc<Mutex<Vec<String>>>);

impl Requests {
    fn record(&self, path: String) {
        self.0.lock().unwrap().push(path);
    }

    fn seen(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

async fn playlist_tracks(State(requests): State<Requests>, Path(id): Path<String>) -> Json<Value> {
    requests.record(format!("playlists/{id}"));
    Json(json!({
        "items": [
            { "track": { "id": format!("{id}_fresh"), "name": "Fresh", "uri": format!("spotify:track:{id}_fresh") } }
        ],
        "next": null
    }))
}

async fn user_playlists(State(requests): State<Requests>, Path(user): Path<String>) -> Json<Value> {
    requests.record(format!("users/{user}"));
    Json(json!({
        "items": [
            { "id": "excl", "name": "The Beatles excluded" },
            { "id": "mix", "name": "Road trip" }
        ],
        "next": null
    }))
}

// Helper function to start the stand-in and a client talking to it
async fn stub_client(requests: Requests) -> SpotifyClient {
    let app = Router::new()
        .route("/users/{user}/playlists", get(user_playlists))
        .route("/playlists/{id}/tracks", get(playlist_tracks))
        .with_state(requests);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let token = Token {
        access_token: "test-token".to_string(),
        refresh_token: "test-refresh".to_string(),
        scope: String::new(),
        expires_in: 3600,
        obtained_at: Utc::now().timestamp() as u64,
    };
    SpotifyClient::new(format!("http://{addr}"), TokenManager::new(token))
}

fn playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        owner: None,
        snapshot_id: None,
    }
}

fn item(id: &str) -> PlaylistTrack {
    PlaylistTrack {
        track: Some(PlaylistTrackItem {
            id: Some(id.to_string()),
            name: "Stale".to_string(),
            uri: format!("spotify:track:{id}"),
        }),
    }
}

fn cache_in(dir: &TempDir) -> ResponseCache {
    ResponseCache::new(dir.path().join("cache"))
}

#[tokio::test]
async fn test_exclusion_playlists_are_read_again() {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);
    let excl_key = CacheKey::owned(EntityType::PlaylistTracks, "excl", USER);
    let mix_key = CacheKey::owned(EntityType::PlaylistTracks, "mix", USER);
    cache.put(&excl_key, &vec![item("excl_stale")]).await.unwrap();
    cache.put(&mix_key, &vec![item("mix_stale")]).await.unwrap();

    let requests = Requests::default();
    let mut source = CatalogSource::new(stub_client(requests.clone()).await, cache_in(&dir), USER);
    let playlists = vec![
        playlist("excl", "The Beatles excluded"),
        playlist("mix", "Road trip"),
    ];

    let exclusions = source
        .exclusion_playlists(&playlists, &PlaylistRoles::for_artist("The Beatles"))
        .await
        .unwrap();

    assert_eq!(exclusions.len(), 1);
    assert_eq!(exclusions[0].name, "The Beatles excluded");
    assert!(exclusions[0].track_ids.contains("excl_fresh"));
    assert!(!exclusions[0].track_ids.contains("excl_stale"));

    // The refreshed contents replace the stale entry
    let cached: Vec<PlaylistTrack> = cache.get(&excl_key).await.unwrap().unwrap();
    assert_eq!(cached[0].track_id(), Some("excl_fresh"));

    // Other playlists are still served from the cache
    let mix = source.playlist_tracks("mix").await.unwrap();
    assert_eq!(mix[0].track_id(), Some("mix_stale"));
    assert_eq!(requests.seen(), vec!["playlists/excl"]);
}

#[tokio::test]
async fn test_ignored_playlist_keeps_its_cached_contents() {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);
    let singles_key = CacheKey::owned(EntityType::PlaylistTracks, "singles", USER);
    cache.put(&singles_key, &vec![item("single_stale")]).await.unwrap();

    let requests = Requests::default();
    let mut source = CatalogSource::new(stub_client(requests.clone()).await, cache_in(&dir), USER);
    let playlists = vec![playlist("singles", "The Beatles (excluded - single recordings)")];
    let config = RoleConfig {
        ignored_playlists: vec!["The Beatles (excluded - single recordings)".to_string()],
        ..RoleConfig::default()
    };

    let exclusions = source
        .exclusion_playlists(&playlists, &PlaylistRoles::configured("The Beatles", &config))
        .await
        .unwrap();

    assert!(exclusions.is_empty());
    assert!(requests.seen().is_empty());
    assert!(cache.get::<Vec<PlaylistTrack>>(&singles_key).await.unwrap().is_some());
}

#[tokio::test]
async fn test_playlist_list_refresh() {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);
    cache
        .put(
            &CacheKey::new(EntityType::Playlists, USER),
            &vec![playlist("old", "Gone by now")],
        )
        .await
        .unwrap();

    let requests = Requests::default();
    let mut source = CatalogSource::new(stub_client(requests.clone()).await, cache_in(&dir), USER);

    let cached = source.playlists(false).await.unwrap();
    assert_eq!(cached, vec![playlist("old", "Gone by now")]);
    assert!(requests.seen().is_empty());

    let refreshed = source.playlists(true).await.unwrap();
    let names: Vec<&str> = refreshed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["The Beatles excluded", "Road trip"]);
    assert_eq!(requests.seen(), vec![format!("users/{USER}")]);

    // The refreshed list is cached again
    assert_eq!(source.playlists(false).await.unwrap(), refreshed);
    assert_eq!(requests.seen().len(), 1);
}
