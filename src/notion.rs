//! Supports listing pages in a Notion workspace and creating new pages beneath
//! them, as far as the relay needs to.

mod api;
pub mod auth;
mod block;
pub mod error;
mod page;
mod search;

pub use api::{NotionClient, API_BASE};
pub use block::Block;
pub use error::NotionError;
pub use page::PageId;
