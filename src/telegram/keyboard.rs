use serde::Serialize;

/// An inline keyboard attached to a message. Rows of buttons, each pressing
/// of which is delivered back to us as a callback query.
///
/// <https://core.telegram.org/bots/api#inlinekeyboardmarkup>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// Lay buttons out one per row, which keeps long labels legible on
    /// mobile.
    pub fn single_column<I>(buttons: I) -> Self
    where
        I: IntoIterator<Item = InlineKeyboardButton>,
    {
        InlineKeyboardMarkup {
            inline_keyboard: buttons.into_iter().map(|b| vec![b]).collect(),
        }
    }
}

/// <https://core.telegram.org/bots/api#inlinekeyboardbutton>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    /// At most 64 bytes, echoed back verbatim when pressed.
    pub callback_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_column() {
        let markup = InlineKeyboardMarkup::single_column(vec![
            InlineKeyboardButton {
                text: "a".into(),
                callback_data: "page_1".into(),
            },
            InlineKeyboardButton {
                text: "b".into(),
                callback_data: "page_2".into(),
            },
        ]);

        assert_eq!(
            serde_json::to_value(&markup).unwrap(),
            json!({
                "inline_keyboard": [
                    [{ "text": "a", "callback_data": "page_1" }],
                    [{ "text": "b", "callback_data": "page_2" }],
                ]
            })
        );
    }
}
