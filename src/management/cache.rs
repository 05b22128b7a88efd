use std::{
    fmt,
    future::Future,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Res, verbose};

/// Kind of Spotify entity stored in the response cache.
///
/// Each kind has its own file prefix so an album ID and a playlist ID that
/// happen to be equal never share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Artist,
    ArtistAlbums,
    Album,
    AlbumTracks,
    Tracks,
    Playlists,
    PlaylistTracks,
}

impl EntityType {
    pub const ALL: [EntityType; 7] = [
        EntityType::Artist,
        EntityType::ArtistAlbums,
        EntityType::Album,
        EntityType::AlbumTracks,
        EntityType::Tracks,
        EntityType::Playlists,
        EntityType::PlaylistTracks,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            EntityType::Artist => "artist",
            EntityType::ArtistAlbums => "artist-albums",
            EntityType::Album => "album",
            EntityType::AlbumTracks => "album-tracks",
            EntityType::Tracks => "tracks",
            EntityType::Playlists => "playlists",
            EntityType::PlaylistTracks => "playlist",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EntityType::ALL
            .into_iter()
            .find(|e| e.prefix() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = EntityType::ALL.iter().map(|e| e.prefix()).collect();
                format!(
                    "invalid entity type '{}'. Allowed: {}",
                    s.trim(),
                    known.join(", ")
                )
            })
    }
}

/// Identifies one cached response: entity type, entity ID and the user owning
/// the entity where that matters (playlist contents differ per reader).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub entity: EntityType,
    pub id: String,
    pub owner: Option<String>,
}

impl CacheKey {
    pub fn new(entity: EntityType, id: impl Into<String>) -> Self {
        Self {
            entity,
            id: id.into(),
            owner: None,
        }
    }

    pub fn owned(entity: EntityType, id: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            entity,
            id: id.into(),
            owner: Some(owner.into()),
        }
    }

    /// File name of the entry: `<type>-<id>.json` or `<type>-<id>@<owner>.json`.
    ///
    /// ID and owner are percent-encoded down to `[A-Za-z0-9_]`, so `-` and `@`
    /// only ever appear as separators and distinct keys never share a file.
    pub fn file_name(&self) -> String {
        match &self.owner {
            Some(owner) => format!(
                "{}-{}@{}.json",
                self.entity.prefix(),
                encode_component(&self.id),
                encode_component(owner)
            ),
            None => format!(
                "{}-{}.json",
                self.entity.prefix(),
                encode_component(&self.id)
            ),
        }
    }
}

fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

#[derive(Debug)]
pub enum CacheError {
    IoError(io::Error),
    /// The entry exists but does not decode. Never treated as a miss.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    SerdeError(serde_json::Error),
}

impl From<io::Error> for CacheError {
    fn from(err: io::Error) -> Self {
        CacheError::IoError(err)
    }
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::IoError(e) => write!(f, "cache I/O error: {e}"),
            CacheError::Corrupt { path, source } => write!(
                f,
                "corrupt cache entry {}: {source}. Remove it with `sporcat cache invalidate` or `sporcat cache clear`",
                path.display()
            ),
            CacheError::SerdeError(e) => write!(f, "cannot encode cache entry: {e}"),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheError::IoError(e) => Some(e),
            CacheError::Corrupt { source, .. } => Some(source),
            CacheError::SerdeError(e) => Some(e),
        }
    }
}

/// On-disk store of decoded Spotify responses, one JSON file per entity.
///
/// Entries live until they are explicitly invalidated. The cache has no
/// locking: only one run may use a cache directory at a time.
pub struct ResponseCache {
    root: PathBuf,
}

impl ResponseCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    /// Returns the cached payload, `None` on a miss.
    ///
    /// # Errors
    ///
    /// `CacheError::Corrupt` when the file exists but cannot be decoded as `T`,
    /// `CacheError::IoError` when it exists but cannot be read.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>, CacheError> {
        let path = self.path_for(key);
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::IoError(e)),
        };

        let payload = serde_json::from_str(&content)
            .map_err(|source| CacheError::Corrupt { path: path.clone(), source })?;
        verbose!("Returning cached {}", path.display());
        Ok(Some(payload))
    }

    /// Stores a payload, replacing any previous entry for the key.
    ///
    /// The file is written next to its final location and renamed into place
    /// so an interrupted write leaves no truncated entry behind.
    pub async fn put<T: Serialize>(&self, key: &CacheKey, payload: &T) -> Result<(), CacheError> {
        async_fs::create_dir_all(&self.root).await?;

        let json = serde_json::to_string_pretty(payload).map_err(CacheError::SerdeError)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        async_fs::write(&tmp, json).await?;
        async_fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Removes the entry for a key. Returns whether an entry existed.
    pub async fn invalidate(&self, key: &CacheKey) -> Result<bool, CacheError> {
        match async_fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::IoError(e)),
        }
    }

    /// Removes every entry.
    pub async fn clear(&self) -> Result<(), CacheError> {
        match async_fs::remove_dir_all(&self.root).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::IoError(e)),
        }
    }

    /// Cache-through read: returns the entry on a hit, otherwise awaits
    /// `fetch`, stores its successful result and returns it.
    ///
    /// `fetch` is only polled on a miss. A failed fetch is returned as is and
    /// leaves the cache untouched. A corrupt entry fails without fetching.
    pub async fn get_or_fetch<T, Fut>(&self, key: &CacheKey, fetch: Fut) -> Res<T>
    where
        T: Serialize + DeserializeOwned,
        Fut: Future<Output = Res<T>>,
    {
        if let Some(payload) = self.get(key).await? {
            return Ok(payload);
        }

        let payload = fetch.await?;
        self.put(key, &payload).await?;
        Ok(payload)
    }
}
