//! Telegram chat export ingestion for promptcat.
//!
//! Parses the channel's HTML export into messages and selects the posts
//! that are actual editing prompts.

mod parser;
mod select;

pub use parser::parse_export;
pub use select::{SelectOptions, select_prompts};

/// A message taken from the HTML export.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Element id from the export (e.g. `message214`).
    pub id: String,
    /// Author name, empty for service messages.
    pub from: String,
    /// Message body with `<br>` rendered as newlines.
    pub text: String,
}

/// A channel post selected as a prompt.
#[derive(Debug, Clone)]
pub struct ChannelPrompt {
    /// Source message id.
    pub id: String,
    /// First line of the post, used as the display name.
    pub name: String,
    /// Full post body.
    pub text: String,
}
