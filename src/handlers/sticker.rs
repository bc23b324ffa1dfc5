use std::sync::Arc;

use anyhow::Result;
use teloxide::types::{Message, Sticker as TelegramSticker};

use crate::{
    collection::{self, Action},
    config::Config,
    handlers::{send_message::ChatReplies as _, user_key, user_tag},
    types::{BotType, StoreType},
};

pub async fn receive_sticker(
    store: StoreType,
    config: Arc<Config>,
    bot: BotType,
    msg: Message,
    sticker: TelegramSticker,
) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        log::debug!("Ignoring sticker without a sender in chat {:?}", msg.chat.id);
        return Ok(());
    };

    let action = collection::toggle_sticker(
        &*store,
        config.max_stickers,
        user_key(user.id)?,
        &sticker.file.unique_id,
        &sticker.file.id,
    )
    .await?;

    match action {
        Action::Added => {
            log::info!("{}: Put sticker {:?}", user_tag(user), sticker.file.unique_id);
        }
        Action::Removed => {
            log::info!("{}: Delete sticker {:?}", user_tag(user), sticker.file.unique_id);
        }
        Action::Rejected => {
            log::info!(
                "{}: List is full, rejected sticker {:?}",
                user_tag(user),
                sticker.file.unique_id
            );
            bot.reply_text(&msg, list_full_text(config.max_stickers))
                .await?;
        }
    }

    Ok(())
}

pub async fn receive_other(bot: BotType, msg: Message) -> Result<()> {
    let Some(text) = fallback_reply(msg.chat.is_private(), msg.text()) else {
        return Ok(());
    };

    bot.send_text(msg.chat.id, text).await?;

    Ok(())
}

/// What to answer a message that is neither a sticker nor a known command.
/// Groups are left alone, the bot only reads them for stickers.
pub fn fallback_reply(is_private: bool, text: Option<&str>) -> Option<&'static str> {
    if !is_private {
        return None;
    }

    if text.is_some_and(|text| text.starts_with('/')) {
        Some("Unknown command")
    } else {
        Some("Please send me a sticker to add it to your list, or /help")
    }
}

pub fn list_full_text(max_stickers: i64) -> String {
    format!(
        "I am sorry, but only {} stickers can fit into one list",
        max_stickers
    )
}
