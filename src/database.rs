mod entities;
mod queries;
mod store;

pub use entities::*;
pub use queries::SqliteStickerStore;
pub use store::{StickerStore, StoreError};
