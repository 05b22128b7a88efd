//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by sporcat:
//! authentication, discography and playlist reads, and playlist writes.
//!
//! ## Architecture
//!
//! ```text
//! CLI / Catalog source
//!          ↓
//! SpotifyClient (token, retries, pagination)
//!     ├── auth      (OAuth 2.0 PKCE, refresh)
//!     ├── artists   (artist, discography)
//!     ├── albums    (album, album tracks, full tracks)
//!     └── playlist  (user playlists, contents, create, replace)
//!          ↓
//! reqwest / JSON
//! ```
//!
//! ## Error Handling
//!
//! - **502 Bad Gateway**: retried after 10 seconds
//! - **429 Too Many Requests**: retried after `Retry-After` when it is at most
//!   two minutes, otherwise reported
//! - Everything else is returned to the caller, which aborts the run
//!
//! Retries are bounded by [`MAX_ATTEMPTS`]. Access tokens are refreshed
//! through [`TokenManager`] before they expire.
//!
//! ## API Coverage
//!
//! - `GET /artists/{id}` and `GET /artists/{id}/albums`
//! - `GET /albums/{id}`, `GET /albums/{id}/tracks` and `GET /tracks?ids=`
//! - `GET /users/{user_id}/playlists` and `GET /playlists/{id}/tracks`
//! - `POST /users/{user_id}/playlists`
//! - `PUT` and `POST /playlists/{id}/tracks`
//! - `POST /api/token`

pub mod albums;
pub mod artists;
pub mod auth;
pub mod playlist;

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::time::sleep;

use crate::{Res, config, management::TokenManager, types::Paging, verbose, warning};

/// Attempts per request before a retryable status is reported as an error.
pub const MAX_ATTEMPTS: u32 = 5;

/// Longest `Retry-After` delay the client waits out.
pub const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Authenticated Spotify Web API client.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_mgr: TokenManager,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token_mgr: TokenManager) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token_mgr,
        }
    }

    /// Creates a client from the configured API URL and the stored token.
    pub async fn connect() -> Res<Self> {
        let token_mgr = TokenManager::load().await.map_err(|e| {
            format!("Failed to load token. Please run sporcat auth\n Error: {e}")
        })?;
        Ok(Self::new(config::spotify_apiurl()?, token_mgr))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    async fn send(
        &mut self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Res<Response> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let token = self.token_mgr.get_valid_token().await?;
            let mut request = self.http.request(method.clone(), url).bearer_auth(token);
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await?;
            let status = response.status();

            if status == StatusCode::BAD_GATEWAY && attempt < MAX_ATTEMPTS {
                verbose!("502 from {url}, retrying in 10s");
                sleep(Duration::from_secs(10)).await;
                continue;
            }

            if status == StatusCode::TOO_MANY_REQUESTS && attempt < MAX_ATTEMPTS {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1);
                if retry_after <= MAX_RETRY_AFTER_SECS {
                    verbose!("429 from {url}, retrying in {retry_after}s");
                    sleep(Duration::from_secs(retry_after)).await;
                    continue;
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again later.",
                    retry_after
                );
            }

            return Ok(response.error_for_status()?);
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Res<T> {
        let response = self.send(Method::GET, url, None).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn send_json<B, T>(&mut self, method: Method, url: &str, body: &B) -> Res<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self.send(method, url, Some(&body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// Fetches every page of a paginated collection, following `next` links.
    pub async fn get_all<T: DeserializeOwned>(&mut self, first_url: &str) -> Res<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(first_url.to_string());

        while let Some(url) = next {
            let page: Paging<T> = self.get_json(&url).await?;
            items.extend(page.items);
            next = page.next;
        }

        Ok(items)
    }
}
