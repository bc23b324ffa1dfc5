use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::database::{Sticker, StickerStore, StoreError};
use crate::types::DbConn;
use crate::util;

/// `StickerStore` backed by a single SQLite table.
pub struct SqliteStickerStore {
    db: DbConn,
    table: String,
}

impl SqliteStickerStore {
    /// `table` must be a plain identifier, it is spliced into every query.
    pub fn new(db: DbConn, table: impl Into<String>) -> Self {
        SqliteStickerStore {
            db,
            table: table.into(),
        }
    }

    /// Opens (or creates) the database at `location` and makes sure the
    /// sticker table exists. `:memory:` keeps everything in process.
    pub async fn open(location: &str, table: &str) -> Result<Self, StoreError> {
        log::debug!("Opening database {:?} with table {:?}", location, table);

        let options =
            SqliteConnectOptions::from_str(&format!("sqlite:{}", location))?.create_if_missing(true);

        let pool_options = if location == ":memory:" {
            // The in-memory database lives only as long as its connection
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let db = pool_options.connect_with(options).await?;
        let store = SqliteStickerStore::new(db, table);
        store.create_table().await?;

        log::debug!("Successfully opened database");

        Ok(store)
    }

    pub async fn create_table(&self) -> Result<(), StoreError> {
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} ( \
            user_id INTEGER NOT NULL, \
            unique_id TEXT NOT NULL, \
            file_id TEXT NOT NULL, \
            created_at INTEGER NOT NULL, \
            use_count INTEGER NOT NULL DEFAULT 0, \
            last_used INTEGER NOT NULL DEFAULT 0, \
            PRIMARY KEY (user_id, unique_id))",
            self.table
        ))
        .execute(&self.db)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl StickerStore for SqliteStickerStore {
    async fn exists(&self, user_id: i64, unique_id: &str) -> Result<bool, StoreError> {
        log::debug!(
            "exists for user_id: {:?} and unique_id: {:?}",
            user_id,
            unique_id
        );

        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE user_id = $1 AND unique_id = $2",
            self.table
        ))
        .bind(user_id)
        .bind(unique_id)
        .fetch_one(&self.db)
        .await?;

        Ok(count > 0)
    }

    async fn count(&self, user_id: i64) -> Result<i64, StoreError> {
        log::debug!("count for user_id: {:?}", user_id);

        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE user_id = $1",
            self.table
        ))
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        log::debug!("count result: {:?}", count);

        Ok(count)
    }

    async fn list(&self, user_id: i64) -> Result<Vec<Sticker>, StoreError> {
        log::debug!("list for user_id: {:?}", user_id);

        let result: Vec<Sticker> = sqlx::query_as(&format!(
            "SELECT user_id, unique_id, file_id, created_at, use_count, last_used FROM {} \
            WHERE user_id = $1",
            self.table
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        log::debug!("list result: {:?}", result);

        Ok(result)
    }

    async fn put(&self, sticker: &Sticker) -> Result<(), StoreError> {
        log::debug!("put: {:?}", sticker);

        sqlx::query(&format!(
            "INSERT OR REPLACE INTO {} (user_id, unique_id, file_id, created_at, use_count, last_used) \
            VALUES ($1, $2, $3, $4, $5, $6)",
            self.table
        ))
        .bind(sticker.user_id)
        .bind(&sticker.unique_id)
        .bind(&sticker.file_id)
        .bind(sticker.created_at)
        .bind(sticker.use_count)
        .bind(sticker.last_used)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: i64, unique_id: &str) -> Result<(), StoreError> {
        log::debug!(
            "delete for user_id: {:?} and unique_id: {:?}",
            user_id,
            unique_id
        );

        sqlx::query(&format!(
            "DELETE FROM {} WHERE user_id = $1 AND unique_id = $2",
            self.table
        ))
        .bind(user_id)
        .bind(unique_id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn increment_use(&self, user_id: i64, unique_id: &str) -> Result<(), StoreError> {
        log::debug!(
            "increment_use for user_id: {:?} and unique_id: {:?}",
            user_id,
            unique_id
        );

        sqlx::query(&format!(
            "UPDATE {} SET use_count = use_count + 1, last_used = $1 \
            WHERE user_id = $2 AND unique_id = $3",
            self.table
        ))
        .bind(util::get_unix())
        .bind(user_id)
        .bind(unique_id)
        .execute(&self.db)
        .await?;

        log::debug!(
            "increment_use for user_id: {:?} and unique_id: {:?} done",
            user_id,
            unique_id
        );

        Ok(())
    }

    async fn clear(&self, user_id: i64) -> Result<u64, StoreError> {
        log::debug!("clear for user_id: {:?}", user_id);

        let result = sqlx::query(&format!("DELETE FROM {} WHERE user_id = $1", self.table))
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
