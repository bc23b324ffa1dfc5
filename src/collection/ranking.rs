use std::cmp::Ordering;

use crate::database::{Sticker, StickerStore, StoreError};

/// Presentation order of a user's stickers: most used first, unused ones
/// oldest first.
///
/// Equal use counts fall back to the creation time and then to the unique
/// id, so the order is total and doesn't depend on what the store returns.
pub fn rank_order(a: &Sticker, b: &Sticker) -> Ordering {
    b.use_count
        .cmp(&a.use_count)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.unique_id.cmp(&b.unique_id))
}

pub fn rank(stickers: &mut [Sticker]) {
    stickers.sort_by(rank_order);
}

/// The user's stickers in presentation order. Positions in the returned
/// list are the ordinals used as inline result ids.
pub async fn ranked_list<S>(store: &S, user_id: i64) -> Result<Vec<Sticker>, StoreError>
where
    S: StickerStore + ?Sized,
{
    let mut stickers = store.list(user_id).await?;
    rank(&mut stickers);
    Ok(stickers)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    /// The use counter of this sticker was bumped.
    Recorded(String),
    /// The ordinal points past the current list, e.g. the sticker was
    /// removed after the results were shown.
    Stale,
}

/// Records that the user picked the sticker at `ordinal` of their ranked
/// list.
pub async fn record_use<S>(store: &S, user_id: i64, ordinal: usize) -> Result<UseOutcome, StoreError>
where
    S: StickerStore + ?Sized,
{
    let mut stickers = ranked_list(store, user_id).await?;
    if ordinal >= stickers.len() {
        log::debug!(
            "record_use: ordinal {:?} is past {:?} stickers of user_id {:?}",
            ordinal,
            stickers.len(),
            user_id
        );
        return Ok(UseOutcome::Stale);
    }

    let sticker = stickers.swap_remove(ordinal);
    store.increment_use(user_id, &sticker.unique_id).await?;

    Ok(UseOutcome::Recorded(sticker.unique_id))
}
