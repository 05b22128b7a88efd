mod auth;
mod cache;
mod source;

pub use auth::TokenManager;
pub use cache::CacheError;
pub use cache::CacheKey;
pub use cache::EntityType;
pub use cache::ResponseCache;
pub use source::CatalogSource;
