use anyhow::Result;
use teloxide::types::Message;

use crate::{
    database::StickerStore,
    handlers::{send_message::ChatReplies as _, user_key, user_tag},
    types::{BotType, ConversationState, DialogueWithState, StoreType},
};

pub const CONFIRM_TEXT: &str = "DELETE MY STICKERS";

pub async fn ask_clear(bot: BotType, dialogue: DialogueWithState, msg: Message) -> Result<()> {
    bot.send_prompt(
        msg.chat.id,
        format!("Please send '{}' to confirm", CONFIRM_TEXT),
        &["/cancel"],
    )
    .await?;
    dialogue.update(ConversationState::VerifyClear).await?;

    Ok(())
}

pub async fn verify_clear(
    store: StoreType,
    bot: BotType,
    dialogue: DialogueWithState,
    msg: Message,
) -> Result<()> {
    dialogue.update(ConversationState::Idle).await?;

    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    if msg.text() != Some(CONFIRM_TEXT) {
        bot.send_text(msg.chat.id, "Clearing cancelled")
            .await?;
        return Ok(());
    }

    log::info!("{}: Clear sticker list", user_tag(user));

    let removed = store.clear(user_key(user.id)?).await?;

    bot.send_text(
        msg.chat.id,
        format!("Removed <code>{}</code> stickers from your list", removed),
    )
    .await?;

    Ok(())
}
