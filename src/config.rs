//! Configuration management for the Spotify Catalog Curator.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, the curated artist, cache and
//! output locations and the playlist role overrides.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (for user and artist, applied by the CLI layer)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::catalog::{NamedSet, RoleConfig, parse_target};

/// Name of the application directory below the platform data directory.
pub const APP_DIR: &str = "sporcat";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `sporcat/.env` in the platform-specific local
/// data directory. A missing file is not an error: every value can also be
/// provided directly through the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporcat/.env`
/// - macOS: `~/Library/Application Support/sporcat/.env`
/// - Windows: `%LOCALAPPDATA%/sporcat/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = app_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the application data directory (`<data_local_dir>/sporcat`).
pub fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

fn require(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{key} must be set")),
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Splits a comma separated value into trimmed, non-empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the server address for the local OAuth callback server.
///
/// Reads `SERVER_ADDRESS`, e.g. `127.0.0.1:9090`.
pub fn server_addr() -> Result<String, String> {
    require("SERVER_ADDRESS")
}

/// Returns the Spotify user ID owning the curated playlists.
///
/// Reads `SPOTIFY_USER_ID`. The `--user` flag of `sporcat curate` takes
/// precedence over this value.
pub fn spotify_user() -> Result<String, String> {
    require("SPOTIFY_USER_ID")
}

/// Returns the Spotify API client ID for authentication.
pub fn spotify_client_id() -> Result<String, String> {
    require("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Must match the redirect URI registered in the Spotify application settings
/// and point at the local callback server, e.g. `http://127.0.0.1:9090/callback`.
pub fn spotify_redirect_uri() -> Result<String, String> {
    require("SPOTIFY_API_REDIRECT_URI")
}

/// Returns the Spotify API scope permissions.
///
/// Curating needs at least `playlist-read-private playlist-modify-private
/// playlist-modify-public`.
pub fn spotify_scope() -> Result<String, String> {
    require("SPOTIFY_API_AUTH_SCOPE")
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> Result<String, String> {
    require("SPOTIFY_API_AUTH_URL")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> Result<String, String> {
    require("SPOTIFY_API_URL")
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> Result<String, String> {
    require("SPOTIFY_API_TOKEN_URL")
}

/// Returns the Spotify ID of the curated artist.
///
/// Share links and `spotify:` URIs are accepted as well, see
/// [`clean_spotify_id`].
pub fn artist_id() -> Result<String, String> {
    require("CURATE_ARTIST_ID").map(|id| clean_spotify_id(&id))
}

/// Returns the artist name used as prefix for generated playlist names and for
/// detecting exclusion playlists.
pub fn artist_name() -> Result<String, String> {
    require("CURATE_ARTIST_NAME")
}

/// Returns the IDs of albums whose songs are excluded group-wide.
///
/// Reads the comma separated `CURATE_EXCLUDED_ALBUMS`; unset means none.
pub fn excluded_album_ids() -> Vec<String> {
    optional("CURATE_EXCLUDED_ALBUMS")
        .map(|v| split_list(&v).iter().map(|id| clean_spotify_id(id)).collect())
        .unwrap_or_default()
}

/// Returns playlist names that are exclusion sources regardless of the naming
/// convention. Reads the comma separated `EXCLUSION_PLAYLISTS`.
pub fn exclusion_playlists() -> Vec<String> {
    optional("EXCLUSION_PLAYLISTS")
        .map(|v| split_list(&v))
        .unwrap_or_default()
}

/// Returns playlist names that are never exclusion sources, even when their
/// name follows the convention. Reads the comma separated `IGNORED_PLAYLISTS`.
pub fn ignored_playlists() -> Vec<String> {
    optional("IGNORED_PLAYLISTS")
        .map(|v| split_list(&v))
        .unwrap_or_default()
}

/// Returns the playlist names replacing the default target of a set.
///
/// Reads `PLAYLIST_TARGETS`, a semicolon separated list of `set=name`
/// entries such as `originals=Fab Four originals;singles=Fab Four singles`.
///
/// # Errors
///
/// Returns an error naming the entry when a set key is unknown or a name is
/// missing.
pub fn playlist_targets() -> Result<Vec<(NamedSet, String)>, String> {
    let Some(value) = optional("PLAYLIST_TARGETS") else {
        return Ok(Vec::new());
    };
    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_target(entry).map_err(|e| format!("PLAYLIST_TARGETS: {e}")))
        .collect()
}

/// Returns the marker the exclusion naming convention looks for.
///
/// Reads `EXCLUSION_MARKER`; unset keeps `"excluded"`.
pub fn exclusion_marker() -> Option<String> {
    optional("EXCLUSION_MARKER")
}

/// Collects every playlist role setting.
pub fn role_config() -> Result<RoleConfig, String> {
    Ok(RoleConfig {
        exclusion_playlists: exclusion_playlists(),
        ignored_playlists: ignored_playlists(),
        targets: playlist_targets()?,
        marker: exclusion_marker(),
    })
}

/// Returns the response cache directory.
///
/// `CACHE_DIR` if set, otherwise `<data_local_dir>/sporcat/cache`.
pub fn cache_dir() -> PathBuf {
    optional("CACHE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| app_dir().join("cache"))
}

/// Returns the directory receiving `audit.org`, `tracks.org` and `working.org`.
///
/// `OUTPUT_DIR` if set, otherwise the current working directory.
pub fn output_dir() -> PathBuf {
    optional("OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Whether verbose diagnostics (cache hits and the like) are printed.
pub fn verbose() -> bool {
    matches!(
        env::var("SPORCAT_VERBOSE").as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

/// Extracts the bare ID from an ID, a share link or a `spotify:` URI.
///
/// `https://open.spotify.com/artist/ID?si=x` and `spotify:artist:ID` both
/// become `ID`.
pub fn clean_spotify_id(id: &str) -> String {
    let without_query = id.split('?').next().unwrap_or_default().trim();
    without_query
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or_default()
        .to_string()
}
