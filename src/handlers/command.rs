use std::sync::Arc;

use anyhow::Result;
use teloxide::{
    macros::BotCommands,
    requests::Requester,
    types::{InputFile, Me, Message},
    utils::command::BotCommands as _,
};

use super::send_message::ChatReplies;
use crate::{
    collection::{self, ListStats},
    config::Config,
    handlers::{clear, user_key, user_tag},
    types::{BotType, ConversationState, DialogueWithState, StoreType},
    util::{unix_to_datetime, unix_to_humantime},
};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Show all help for this bot")]
    Help,

    #[command(description = "Start using this bot")]
    Start,

    #[command(description = "Show statistics about your sticker list")]
    Stats,

    #[command(description = "DANGEROUS! Removes every sticker from your list")]
    Clear,

    #[command(description = "Stop whatever you are doing")]
    Cancel,
}

pub async fn receive_command(
    store: StoreType,
    config: Arc<Config>,
    bot: BotType,
    me: Me,
    dialogue: DialogueWithState,
    msg: Message,
    cmd: Command,
) -> Result<()> {
    if let Some(user) = msg.from.as_ref() {
        log::info!("{}: Call command {:?}", user_tag(user), cmd);
    }

    match cmd {
        Command::Help => {
            bot.send_text(
                msg.chat.id,
                help_text(me.username(), config.max_stickers),
            )
            .await?;
        }
        Command::Start => {
            bot.send_text(
                msg.chat.id,
                "Send me a sticker and it goes into your personal list.\n\
                You can also use /help to get more information",
            )
            .await?;
        }
        Command::Stats => {
            let Some(user) = msg.from.as_ref() else {
                return Ok(());
            };

            let stickers = collection::ranked_list(&*store, user_key(user.id)?).await?;
            let stats = ListStats::from_stickers(&stickers);

            bot.send_text(msg.chat.id, stats_text(&stats, &config))
                .await?;

            if let Some(most_used) = stats.most_used {
                bot.send_sticker(msg.chat.id, InputFile::file_id(most_used.file_id))
                    .await?;
            }
        }
        Command::Clear => {
            clear::ask_clear(bot, dialogue, msg).await?;
        }
        Command::Cancel => {
            dialogue.update(ConversationState::Idle).await?;
            bot.send_text(msg.chat.id, "Cancelled").await?;
        }
    }

    Ok(())
}

pub fn help_text(bot_username: &str, max_stickers: i64) -> String {
    format!(
        "<b>Store stickers</b>\n\
        Send a sticker to save it, send it a second time to delete it. \
        Up to <code>{}</code> stickers fit into one list.\n\
        \n<b>View stickers</b>\n\
        - type <code>@{}</code> in the text field of any chat\n\
        - choose the sticker you want to send, \
        the ones you send most often come first\n\
        \n<b>Commands</b>\n\
        {}",
        max_stickers,
        bot_username,
        Command::descriptions()
    )
}

pub fn stats_text(stats: &ListStats, config: &Config) -> String {
    let mut text = format!(
        "<b>Your stickers</b>\n\
        Stored: <code>{}/{}</code>\n\
        Sent from the list: <code>{}</code>",
        stats.stored, config.max_stickers, stats.total_uses
    );

    if let Some(oldest) = &stats.oldest {
        text += &format!(
            "\nOldest sticker added: <code>{}</code>",
            unix_to_datetime(oldest.created_at, &config.location)
        );
    }

    if let Some(most_used) = &stats.most_used {
        text += &format!(
            "\nMost used sticker: sent <code>{}</code> times, last <code>{}</code>",
            most_used.use_count,
            unix_to_humantime(most_used.last_used)
        );
    }

    text
}
