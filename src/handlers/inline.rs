use std::ops::Range;

use anyhow::Result;
use teloxide::payloads::AnswerInlineQuerySetters;
use teloxide::prelude::*;
use teloxide::types::InlineQueryResult;

use crate::collection::{self, UseOutcome};
use crate::database::Sticker;
use crate::handlers::{user_key, user_tag};
use crate::types::{BotType, StoreType};

/// Telegram refuses more results than this in one answer.
pub const RESULTS_PER_PAGE: usize = 50;

pub async fn handle_inline_query(store: StoreType, bot: BotType, query: InlineQuery) -> Result<()> {
    let user_id = user_key(query.from.id)?;

    log::info!("{}: Query stickers", user_tag(&query.from));

    let stickers = collection::ranked_list(&*store, user_id).await?;
    let (results, next_offset) = inline_results(&stickers, &query.offset);

    log::debug!(
        "Answering {:?} of {:?} stickers at offset {:?} for {:?}",
        results.len(),
        stickers.len(),
        query.offset,
        user_id
    );

    let mut answer = bot
        .answer_inline_query(query.id, results)
        .is_personal(true)
        .cache_time(0);
    if let Some(next_offset) = next_offset {
        answer = answer.next_offset(next_offset);
    }
    answer.await?;

    Ok(())
}

pub async fn handle_inline_choice(store: StoreType, chosen: ChosenInlineResult) -> Result<()> {
    let user_id = user_key(chosen.from.id)?;

    let Some(ordinal) = parse_ordinal(&chosen.result_id) else {
        log::warn!(
            "{}: Chosen result id {:?} is not an ordinal",
            user_tag(&chosen.from),
            chosen.result_id
        );
        return Ok(());
    };

    match collection::record_use(&*store, user_id, ordinal).await? {
        UseOutcome::Recorded(unique_id) => {
            log::info!("{}: Choose sticker {:?}", user_tag(&chosen.from), unique_id);
        }
        UseOutcome::Stale => {
            log::debug!(
                "{}: Chosen ordinal {:?} no longer exists",
                user_tag(&chosen.from),
                ordinal
            );
        }
    }

    Ok(())
}

/// One page of inline results for an already ranked list. Every result id
/// is the absolute position of its sticker in `stickers`.
pub fn inline_results(stickers: &[Sticker], offset: &str) -> (Vec<InlineQueryResult>, Option<String>) {
    let (page, next_offset) = page_bounds(stickers.len(), offset);
    let results = page
        .map(|ordinal| stickers[ordinal].to_inline(ordinal))
        .collect();

    (results, next_offset)
}

/// Reverse of the result ids handed out by [`inline_results`].
pub fn parse_ordinal(result_id: &str) -> Option<usize> {
    result_id.parse().ok()
}

/// Which ordinals go into the answer for the given inline `offset`, and the
/// offset of the following page if there is one. Unparsable offsets start
/// from the beginning.
pub fn page_bounds(total: usize, offset: &str) -> (Range<usize>, Option<String>) {
    let start = offset.parse::<usize>().unwrap_or(0).min(total);
    let end = (start + RESULTS_PER_PAGE).min(total);

    let next_offset = if end < total {
        Some(end.to_string())
    } else {
        None
    };

    (start..end, next_offset)
}
