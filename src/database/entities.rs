use teloxide::types::{InlineQueryResult, InlineQueryResultCachedSticker};

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Sticker {
    pub user_id: i64,
    pub unique_id: String, // file_unique_id
    pub file_id: String,   // id, used to send it again
    pub created_at: i64,
    pub use_count: i64,
    pub last_used: i64,
}

impl Sticker {
    pub fn new(user_id: i64, unique_id: String, file_id: String, created_at: i64) -> Self {
        Sticker {
            user_id,
            unique_id,
            file_id,
            created_at,
            use_count: 0,
            last_used: 0,
        }
    }

    /// The result id is the position in the ranked list, Telegram echoes it
    /// back when the user picks the sticker.
    pub fn to_inline(&self, ordinal: usize) -> InlineQueryResult {
        InlineQueryResult::CachedSticker(InlineQueryResultCachedSticker::new(
            ordinal.to_string(),
            self.file_id.to_owned(),
        ))
    }
}
