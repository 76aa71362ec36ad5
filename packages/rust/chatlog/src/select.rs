//! Channel prompt selection.
//!
//! The channel mixes prompt posts with navigation, tutorials, and chatter.
//! A message qualifies as a prompt when its first line announces one
//! (`ПРОМТ N` or a named `ПРОМТ …` header) and the body actually contains
//! editing instructions. A short allowlist admits special posts that carry
//! prompts under non-standard headers.

use std::sync::LazyLock;

use regex::Regex;

use crate::{ChannelPrompt, ChatMessage};

/// Options for channel prompt selection.
#[derive(Debug, Clone)]
pub struct SelectOptions {
    /// Minimum body length for a post to qualify as a prompt.
    pub min_post_len: usize,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self { min_post_len: 200 }
    }
}

/// Matches a numbered prompt header (`ПРОМТ 1`, `ПРОМТ12`) on the
/// uppercased first line.
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ПРОМТ\s*\d+").expect("numbered prompt regex"));

/// Body keywords that mark actual editing instructions.
const CONTENT_KEYWORDS: &[&str] = &[
    "edit your photo",
    "create",
    "perform professional",
    "retouch",
    "отредактируй",
    "выполните",
    "сделайте ультра",
    "high-fashion",
    "ultra-realistic",
];

/// First-line words that mark navigation/announcement posts, never prompts.
const SKIP_WORDS: &[&str] = &[
    "НАВИГАЦИЯ",
    "ЗАКРЕПИМ",
    "ДЕВОЧКИ",
    "КАК ",
    "ФРАЗЫ",
    "ДАВАЙТЕ",
];

/// Non-numbered posts that are known to carry prompts.
const SPECIAL_HEADERS: &[&str] = &[
    "RUNWAY",
    "ДЛЯ ТЕКСТУРНОЙ И СИЯЮЩЕЙ",
    "ПЛЮШЕВЫЕ ПРЕДМЕТЫ",
];

/// Select channel prompts from parsed export messages.
pub fn select_prompts(messages: &[ChatMessage], opts: &SelectOptions) -> Vec<ChannelPrompt> {
    let mut prompts: Vec<ChannelPrompt> = Vec::new();

    for msg in messages {
        let first_line = first_line_upper(&msg.text);
        let long_enough = msg.text.chars().count() > opts.min_post_len;

        let is_numbered = NUMBERED_RE.is_match(&first_line);
        let is_named = first_line.starts_with("ПРОМТ") && long_enough;

        if !(is_numbered || is_named) || !long_enough {
            continue;
        }
        if !has_content(&msg.text) {
            continue;
        }
        if SKIP_WORDS.iter().any(|w| first_line.contains(w)) {
            continue;
        }

        prompts.push(ChannelPrompt {
            id: msg.id.clone(),
            name: prompt_name(&msg.text),
            text: msg.text.clone(),
        });
    }

    // Second pass: special posts without a ПРОМТ header.
    for msg in messages {
        let first_line = first_line_upper(&msg.text);
        if msg.text.chars().count() <= opts.min_post_len {
            continue;
        }
        if !SPECIAL_HEADERS.iter().any(|h| first_line.contains(h)) {
            continue;
        }
        if prompts.iter().any(|p| p.id == msg.id) {
            continue;
        }

        prompts.push(ChannelPrompt {
            id: msg.id.clone(),
            name: prompt_name(&msg.text),
            text: msg.text.clone(),
        });
    }

    prompts
}

fn first_line_upper(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_uppercase()
}

fn prompt_name(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}

fn has_content(text: &str) -> bool {
    let lower = text.to_lowercase();
    CONTENT_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: &str, text: &str) -> ChatMessage {
        ChatMessage {
            id: id.into(),
            from: "Glow Channel".into(),
            text: text.into(),
        }
    }

    fn padding() -> String {
        "Кожа должна выглядеть естественно, с сохранением пор и мелких деталей. ".repeat(4)
    }

    #[test]
    fn selects_numbered_prompt() {
        let text = format!("ПРОМТ 3 — РЕТУШЬ\nОтредактируй фото: {}", padding());
        let prompts = select_prompts(&[msg("message1", &text)], &SelectOptions::default());
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "ПРОМТ 3 — РЕТУШЬ");
    }

    #[test]
    fn rejects_numbered_without_content_keywords() {
        let text = format!("ПРОМТ 4 — АНОНС\n{}", "Завтра выложу новые промты. ".repeat(10));
        let prompts = select_prompts(&[msg("message2", &text)], &SelectOptions::default());
        assert!(prompts.is_empty());
    }

    #[test]
    fn rejects_short_prompt_posts() {
        let text = "ПРОМТ 5\nОтредактируй фото, пожалуйста.";
        let prompts = select_prompts(&[msg("message3", text)], &SelectOptions::default());
        assert!(prompts.is_empty());
    }

    #[test]
    fn skip_words_win_over_prompt_header() {
        let text = format!("ПРОМТ НАВИГАЦИЯ ПО КАНАЛУ\nОтредактируй фото: {}", padding());
        let prompts = select_prompts(&[msg("message4", &text)], &SelectOptions::default());
        assert!(prompts.is_empty());
    }

    #[test]
    fn special_header_admitted_once() {
        let text = format!(
            "RUNWAY — ОЖИВЛЕНИЕ ФОТО\nCreate a subtle animation: {}",
            padding()
        );
        let messages = [msg("message5", &text)];
        let prompts = select_prompts(&messages, &SelectOptions::default());
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].id, "message5");

        // A special post that is also numbered must not be duplicated.
        let both = format!("ПРОМТ 7 RUNWAY\nCreate a subtle animation: {}", padding());
        let prompts = select_prompts(&[msg("message6", &both)], &SelectOptions::default());
        assert_eq!(prompts.len(), 1);
    }

    #[test]
    fn selects_from_fixture() {
        let html = std::fs::read_to_string("../../../fixtures/html/chat_export.html")
            .expect("read fixture");
        let messages = crate::parse_export(&html);
        let prompts = select_prompts(&messages, &SelectOptions::default());
        // The fixture has one numbered prompt, one special RUNWAY post,
        // a navigation post, and a tutorial — only the first two qualify.
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].name.starts_with("ПРОМТ 1"));
        assert!(prompts[1].name.contains("RUNWAY"));
    }
}
