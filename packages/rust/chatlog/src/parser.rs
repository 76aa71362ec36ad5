//! Telegram HTML export parsing.
//!
//! A channel export is a flat list of `div.message.default` blocks, each
//! carrying an `id` attribute, an optional `div.from_name` author, and a
//! `div.text` body where line breaks are `<br>` elements.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::ChatMessage;

/// Minimum body length for a message to be recorded at all.
/// Shorter messages are service notices, reactions, or stickers.
const MIN_TEXT_LEN: usize = 50;

/// Parse a Telegram channel HTML export into its messages.
///
/// Messages without an id or with a body of [`MIN_TEXT_LEN`] chars or fewer
/// are dropped.
pub fn parse_export(html: &str) -> Vec<ChatMessage> {
    let doc = Html::parse_document(html);

    let message_sel = Selector::parse("div.message.default").expect("valid selector");
    // Exact class match: the export nests other `text`-prefixed classes
    // (e.g. reply previews) we must not pick up.
    let text_sel = Selector::parse(r#"div[class="text"]"#).expect("valid selector");
    let from_sel = Selector::parse("div.from_name").expect("valid selector");

    let mut messages = Vec::new();

    for el in doc.select(&message_sel) {
        let Some(id) = el.value().attr("id") else {
            continue;
        };

        let text = el
            .select(&text_sel)
            .next()
            .map(|t| text_with_breaks(&t))
            .unwrap_or_default();

        if text.chars().count() <= MIN_TEXT_LEN {
            continue;
        }

        let from = el
            .select(&from_sel)
            .next()
            .map(|f| f.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        messages.push(ChatMessage {
            id: id.to_string(),
            from,
            text,
        });
    }

    debug!(count = messages.len(), "parsed chat export");
    messages
}

/// Collect the text of an element, rendering `<br>` as a newline.
///
/// `ElementRef::text()` skips `<br>` entirely, which would glue adjacent
/// lines together and break first-line prompt detection.
fn text_with_breaks(el: &ElementRef) -> String {
    let mut out = String::new();
    collect_text(*el, &mut out);
    out.trim().to_string()
}

fn collect_text(el: ElementRef, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if child_el.value().name() == "br" {
                out.push('\n');
            } else {
                collect_text(child_el, out);
            }
        }
    }
}
