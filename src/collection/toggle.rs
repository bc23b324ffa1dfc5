use crate::database::{Sticker, StickerStore, StoreError};
use crate::util;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Added,
    Removed,
    /// The list is full, nothing was stored.
    Rejected,
}

/// Adds the sticker to the user's list, or removes it if it is already
/// there. A full list rejects new stickers without touching the store.
///
/// Existence and count are read before the write without any locking, two
/// racing toggles of the same sticker may both insert or both delete.
pub async fn toggle_sticker<S>(
    store: &S,
    max_stickers: i64,
    user_id: i64,
    unique_id: &str,
    file_id: &str,
) -> Result<Action, StoreError>
where
    S: StickerStore + ?Sized,
{
    if store.exists(user_id, unique_id).await? {
        store.delete(user_id, unique_id).await?;
        return Ok(Action::Removed);
    }

    let count = store.count(user_id).await?;
    if count >= max_stickers {
        log::debug!(
            "toggle_sticker: user_id {:?} is at {:?}/{:?}, rejecting {:?}",
            user_id,
            count,
            max_stickers,
            unique_id
        );
        return Ok(Action::Rejected);
    }

    let sticker = Sticker::new(
        user_id,
        unique_id.to_owned(),
        file_id.to_owned(),
        util::get_unix(),
    );
    store.put(&sticker).await?;

    Ok(Action::Added)
}
