use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use teloxide::{
    adaptors::DefaultParseMode, dispatching::dialogue::InMemStorage, prelude::Dialogue, Bot,
};

use crate::database::SqliteStickerStore;

pub type DialogueWithState = Dialogue<ConversationState, InMemStorage<ConversationState>>;

pub type BotType = DefaultParseMode<Bot>;
pub type DbConn = Pool<Sqlite>;
pub type StoreType = Arc<SqliteStickerStore>;

#[derive(Clone, Default, PartialEq, Debug)]
pub enum ConversationState {
    #[default]
    Idle,
    VerifyClear,
}
