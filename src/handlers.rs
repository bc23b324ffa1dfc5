use anyhow::{Context, Result};
use teloxide::types::{User, UserId};

pub mod clear;
pub mod command;
pub mod inline;
pub mod send_message;
pub mod sticker;

/// Store key of a Telegram user.
pub fn user_key(id: UserId) -> Result<i64> {
    i64::try_from(id.0).with_context(|| format!("user id {} does not fit into a store key", id.0))
}

/// "First Last (id)", prefixed to every log line about a user action.
pub fn user_tag(user: &User) -> String {
    match &user.last_name {
        Some(last_name) => format!("{} {} ({})", user.first_name, last_name, user.id.0),
        None => format!("{} ({})", user.first_name, user.id.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_key_keeps_real_ids() {
        assert_eq!(user_key(UserId(123_456_789)).unwrap(), 123_456_789);
        assert_eq!(user_key(UserId(i64::MAX as u64)).unwrap(), i64::MAX);
    }

    #[test]
    fn user_key_rejects_ids_past_i64() {
        assert!(user_key(UserId(i64::MAX as u64 + 1)).is_err());
        assert!(user_key(UserId(u64::MAX)).is_err());
    }
}
