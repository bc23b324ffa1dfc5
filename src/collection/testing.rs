use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::database::{SqliteStickerStore, Sticker, StickerStore, StoreError};

pub async fn memory_store() -> SqliteStickerStore {
    SqliteStickerStore::open(":memory:", "stickers")
        .await
        .expect("in-memory database")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Exists,
    Count,
    List,
    Put,
    Delete,
    IncrementUse,
}

/// Wraps an in-memory store, failing one kind of call and counting the
/// writes that went through.
pub struct FlakyStore {
    inner: SqliteStickerStore,
    fail_on: FailOn,
    writes: AtomicUsize,
}

impl FlakyStore {
    pub async fn new(fail_on: FailOn) -> Self {
        FlakyStore {
            inner: memory_store().await,
            fail_on,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &SqliteStickerStore {
        &self.inner
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self, op: FailOn) -> Result<(), StoreError> {
        if self.fail_on == op {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn wrote(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StickerStore for FlakyStore {
    async fn exists(&self, user_id: i64, unique_id: &str) -> Result<bool, StoreError> {
        self.check(FailOn::Exists)?;
        self.inner.exists(user_id, unique_id).await
    }

    async fn count(&self, user_id: i64) -> Result<i64, StoreError> {
        self.check(FailOn::Count)?;
        self.inner.count(user_id).await
    }

    async fn list(&self, user_id: i64) -> Result<Vec<Sticker>, StoreError> {
        self.check(FailOn::List)?;
        self.inner.list(user_id).await
    }

    async fn put(&self, sticker: &Sticker) -> Result<(), StoreError> {
        self.check(FailOn::Put)?;
        self.inner.put(sticker).await?;
        self.wrote();
        Ok(())
    }

    async fn delete(&self, user_id: i64, unique_id: &str) -> Result<(), StoreError> {
        self.check(FailOn::Delete)?;
        self.inner.delete(user_id, unique_id).await?;
        self.wrote();
        Ok(())
    }

    async fn increment_use(&self, user_id: i64, unique_id: &str) -> Result<(), StoreError> {
        self.check(FailOn::IncrementUse)?;
        self.inner.increment_use(user_id, unique_id).await?;
        self.wrote();
        Ok(())
    }

    async fn clear(&self, user_id: i64) -> Result<u64, StoreError> {
        let removed = self.inner.clear(user_id).await?;
        self.wrote();
        Ok(removed)
    }
}
