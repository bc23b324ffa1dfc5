use std::convert::Infallible;
use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::dispatching::{HandlerExt, MessageFilterExt, UpdateFilterExt};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;

mod collection;
mod config;
mod database;
mod handlers;
mod types;
mod util;

use config::Config;
use database::SqliteStickerStore;
use handlers::command::Command;
use types::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    log::info!("Starting sticker list bot");

    let config = Arc::new(Config::from_env()?);
    log::debug!("Database location: {:?}", config.database_location);

    let store: StoreType = Arc::new(
        SqliteStickerStore::open(&config.database_location, &config.stickers_table).await?,
    );

    let bot = Bot::new(&config.telegram_token).parse_mode(teloxide::types::ParseMode::Html);

    let me = bot.get_me().await?;
    log::info!("Authorized on account {}", me.username());

    let message_tree = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<ConversationState>, ConversationState>()
        .branch(dptree::case![ConversationState::VerifyClear].endpoint(handlers::clear::verify_clear))
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handlers::command::receive_command),
        )
        .branch(Message::filter_sticker().endpoint(handlers::sticker::receive_sticker))
        .branch(dptree::endpoint(handlers::sticker::receive_other));

    let inline_tree = Update::filter_inline_query().endpoint(handlers::inline::handle_inline_query);

    let inline_result_tree =
        Update::filter_chosen_inline_result().endpoint(handlers::inline::handle_inline_choice);

    let tree = dptree::entry()
        .branch(message_tree)
        .branch(inline_tree)
        .branch(inline_result_tree);

    log::debug!("Starting dispatcher");

    Dispatcher::builder(bot, tree)
        .dependencies(dptree::deps![
            InMemStorage::<ConversationState>::new(),
            store,
            config
        ])
        // every update is its own task, no per-chat ordering
        .distribution_function(|_| None::<Infallible>)
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
