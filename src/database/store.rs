use async_trait::async_trait;
use thiserror::Error;

use super::Sticker;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistent storage of every user's sticker list, keyed by
/// `(user_id, unique_id)`.
#[async_trait]
pub trait StickerStore: Send + Sync {
    async fn exists(&self, user_id: i64, unique_id: &str) -> Result<bool, StoreError>;

    async fn count(&self, user_id: i64) -> Result<i64, StoreError>;

    /// All stickers of a user in no particular order. Empty when the user
    /// has none.
    async fn list(&self, user_id: i64) -> Result<Vec<Sticker>, StoreError>;

    /// Inserts the sticker, replacing any record with the same key.
    async fn put(&self, sticker: &Sticker) -> Result<(), StoreError>;

    async fn delete(&self, user_id: i64, unique_id: &str) -> Result<(), StoreError>;

    /// Bumps the use counter and stamps the last use time.
    async fn increment_use(&self, user_id: i64, unique_id: &str) -> Result<(), StoreError>;

    /// Removes every sticker of a user, returning how many were removed.
    async fn clear(&self, user_id: i64) -> Result<u64, StoreError>;
}
