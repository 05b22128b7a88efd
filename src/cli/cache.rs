use crate::{
    Res, config, info,
    management::{CacheKey, EntityType, ResponseCache},
    success, warning,
};

/// Removes the whole response cache.
pub async fn clear() -> Res<()> {
    let cache = ResponseCache::new(config::cache_dir());
    cache.clear().await?;
    success!("Cache cleared: {}", cache.root().display());
    Ok(())
}

/// Removes one cached response. Playlist contents are cached per user, so
/// `owner` defaults to the configured user for `playlist` entries.
pub async fn invalidate(entity: EntityType, id: &str, owner: Option<String>) -> Res<()> {
    let id = config::clean_spotify_id(id);
    let owner = match (entity, owner) {
        (_, Some(owner)) => Some(owner),
        (EntityType::PlaylistTracks, None) => Some(config::spotify_user()?),
        _ => None,
    };
    let key = match owner {
        Some(owner) => CacheKey::owned(entity, id, owner),
        None => CacheKey::new(entity, id),
    };

    let cache = ResponseCache::new(config::cache_dir());
    if cache.invalidate(&key).await? {
        success!("Removed {}", cache.path_for(&key).display());
    } else {
        warning!("Nothing cached for {} {}", key.entity, key.id);
    }
    Ok(())
}

/// Prints where cached responses live.
pub fn location() {
    info!("Cache directory: {}", config::cache_dir().display());
}
