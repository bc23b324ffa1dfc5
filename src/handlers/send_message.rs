use teloxide::{
    payloads::SendMessageSetters,
    requests::Requester,
    types::{
        KeyboardButton, KeyboardMarkup, KeyboardRemove, Message, Recipient, ReplyMarkup,
        ReplyParameters,
    },
};

use crate::types::BotType;

/// The three ways the bot talks back: plain text, a prompt with one-tap
/// answers, and a reply quoting the user's message.
pub trait ChatReplies {
    fn send_prompt<C, T>(&self, chat_id: C, text: T, answers: &[&str]) -> <BotType as Requester>::SendMessage
    where
        C: Into<Recipient>,
        T: Into<String>;

    /// Plain text. Any keyboard left over from an earlier prompt is removed.
    fn send_text<C, T>(&self, chat_id: C, text: T) -> <BotType as Requester>::SendMessage
    where
        C: Into<Recipient>,
        T: Into<String>,
    {
        self.send_prompt(chat_id, text, &[])
    }

    fn reply_text<T>(&self, msg: &Message, text: T) -> <BotType as Requester>::SendMessage
    where
        T: Into<String>,
    {
        self.send_text(msg.chat.id, text)
            .reply_parameters(ReplyParameters::new(msg.id))
    }
}

impl ChatReplies for BotType {
    fn send_prompt<C, T>(&self, chat_id: C, text: T, answers: &[&str]) -> <BotType as Requester>::SendMessage
    where
        C: Into<Recipient>,
        T: Into<String>,
    {
        self.send_message(chat_id, text)
            .reply_markup(answer_keyboard(answers))
    }
}

/// A single row with one button per answer, hidden once pressed. Without
/// answers the keyboard is taken away instead.
pub fn answer_keyboard(answers: &[&str]) -> ReplyMarkup {
    if answers.is_empty() {
        return ReplyMarkup::KeyboardRemove(KeyboardRemove::new());
    }

    let row = answers
        .iter()
        .map(|answer| KeyboardButton::new(*answer))
        .collect::<Vec<KeyboardButton>>();

    ReplyMarkup::Keyboard(
        KeyboardMarkup::new(vec![row])
            .resize_keyboard()
            .one_time_keyboard(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_answers_remove_the_keyboard() {
        assert!(matches!(
            answer_keyboard(&[]),
            ReplyMarkup::KeyboardRemove(_)
        ));
    }

    #[test]
    fn answers_share_one_row() {
        let ReplyMarkup::Keyboard(keyboard) = answer_keyboard(&["/cancel", "/help"]) else {
            panic!("expected a keyboard");
        };

        assert_eq!(keyboard.keyboard.len(), 1);
        let labels: Vec<&str> = keyboard.keyboard[0].iter().map(|b| b.text.as_str()).collect();
        assert_eq!(labels, vec!["/cancel", "/help"]);
        assert!(keyboard.one_time_keyboard);
        assert!(keyboard.resize_keyboard);
    }
}
