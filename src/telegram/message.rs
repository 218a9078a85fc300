//! Send, edit, and acknowledge messages.

use super::{api::TelegramClient, error::TelegramError, keyboard::InlineKeyboardMarkup};
use serde::{de::IgnoredAny, Serialize};

/// <https://core.telegram.org/bots/api#sendmessage>
#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

/// <https://core.telegram.org/bots/api#editmessagetext>
#[derive(Serialize)]
struct EditMessageTextRequest<'a> {
    chat_id: i64,
    message_id: i64,
    text: &'a str,
}

/// <https://core.telegram.org/bots/api#answercallbackquery>
#[derive(Serialize)]
struct AnswerCallbackQueryRequest<'a> {
    callback_query_id: &'a str,
}

impl TelegramClient {
    /// Send a plain text message, optionally with an inline keyboard beneath
    /// it.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<(), TelegramError> {
        // We've no use for the sent message, so don't bother decoding it.
        let _: IgnoredAny = self
            .call(
                "sendMessage",
                &SendMessageRequest {
                    chat_id,
                    text,
                    reply_markup,
                },
            )
            .await?;

        Ok(())
    }

    /// Replace the text of a message we sent earlier. Any inline keyboard on
    /// it is removed.
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
    ) -> Result<(), TelegramError> {
        let _: IgnoredAny = self
            .call(
                "editMessageText",
                &EditMessageTextRequest {
                    chat_id,
                    message_id,
                    text,
                },
            )
            .await?;

        Ok(())
    }

    /// Clients show a loading indicator on a pressed button until its
    /// callback query is answered.
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<(), TelegramError> {
        let _: IgnoredAny = self
            .call(
                "answerCallbackQuery",
                &AnswerCallbackQueryRequest { callback_query_id },
            )
            .await?;

        Ok(())
    }
}
