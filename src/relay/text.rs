//! Fixed replies.

pub fn welcome(first_name: &str) -> String {
    format!(
        "Hi, {} 👋\n\n\
         ➡️ To get started, choose the Notion page the bot should add your \
         content to.\n\n\
         Use /help for more.",
        first_name
    )
}

pub const HELP: &str = "🤖 This bot sends content from Telegram straight into Notion.\n\n\
You can send:\n\
- Text messages, where the first line becomes the page title\n\
- Links\n\
- Images\n\
- Posts forwarded from other channels\n\n\
Commands:\n\
/change_page - Choose another Notion page\n\
/notion [text] - Send text to Notion\n\
/help - Show this message";

pub const CHOOSE_PAGE: &str = "Choose a page to save content to:";

pub const NO_PAGES: &str = "No Notion pages found. Share a page with the integration \
and use /change_page to try again.";

pub const LIST_FAILED: &str = "Something went wrong fetching your pages. \
Please check the Notion token and try again.";

pub const PAGE_SELECTED: &str =
    "✅ Page selected! Anything you send now will be saved there.";

pub const SELECT_FIRST: &str = "Please choose a Notion page first using /change_page";

pub const NOTION_USAGE: &str =
    "Please add the text you'd like to send to Notion after the /notion command.";

pub const PAGE_CREATED: &str = "✅ Page created in Notion!";

pub const PAGE_FAILED: &str = "Something went wrong creating the page. Please try again.";

pub const IMAGE_SAVED: &str = "✅ Image saved to Notion!";

pub const IMAGE_FAILED: &str = "Something went wrong saving the image. Please try again.";

/// Title for photos sent without a caption.
pub const DEFAULT_CAPTION: &str = "Image from Telegram";
