//! Prompt title extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::clean_title;

static BOLD_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*([^*\n]{3,80})\*\*").unwrap());
static PHOTO_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+\s+ФОТО\s*$").unwrap());
static PROMPT_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ПРОМТ\s*[-–—]\s*").unwrap());
static PROMPT_FOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ПРОМТ\s+ДЛЯ\s+").unwrap());
static PROMPT_NUM_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ПРОМТ\s+\d+\s*[-–—]\s*").unwrap());
static PROMPT_ANY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ПРОМТ\s*\d*\s*").unwrap());
static STRUCTURE_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*Структура.*$").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Bold comment headers that carry no information of their own.
const GENERIC_HEADERS: &[&str] = &["ПРОМТ ДЛЯ GPT", "ПРОМТ ДЛЯ ОЖИВЛЕНИЯ ФОТО:"];

/// Derive a human-readable title for a prompt.
///
/// A bolded header at the start of the comment wins, unless it is a photo
/// count ("3 ФОТО") or a generic header. Otherwise the post title is cleaned
/// and its "ПРОМТ ..." prefix variants are stripped.
pub fn extract_prompt_title(post_title: &str, comment_text: &str) -> String {
    if let Some(caps) = BOLD_HEADER_RE.captures(comment_text.trim()) {
        let header = caps[1].trim();
        if !PHOTO_COUNT_RE.is_match(header) && !GENERIC_HEADERS.contains(&header) {
            return header.to_string();
        }
    }

    let raw = clean_title(post_title);
    let raw = PROMPT_DASH_RE.replace(&raw, "");
    let raw = PROMPT_FOR_RE.replace(&raw, "Для ");
    let raw = PROMPT_NUM_DASH_RE.replace(&raw, "");
    let raw = PROMPT_ANY_RE.replace(&raw, "");
    let raw = WS_RE.replace_all(raw.trim(), " ");
    let raw = STRUCTURE_TAIL_RE.replace(&raw, "");
    let raw = raw.trim();

    if raw.is_empty() {
        post_title.chars().take(100).collect()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_comment_header_wins() {
        let title = extract_prompt_title(
            "ПРОМТ 3 — НАТУРАЛЬНАЯ РЕТУШЬ",
            "**РЕТУШЬ С ВЕСНУШКАМИ**\nотредактируй фото...",
        );
        assert_eq!(title, "РЕТУШЬ С ВЕСНУШКАМИ");
    }

    #[test]
    fn photo_count_header_skipped() {
        let title = extract_prompt_title(
            "ПРОМТ — БЛЕСТКИ ✨",
            "**3 ФОТО**\nотредактируй фото...",
        );
        assert_eq!(title, "БЛЕСТКИ");
    }

    #[test]
    fn generic_header_falls_back_to_post_title() {
        let title = extract_prompt_title(
            "ПРОМТ ДЛЯ БРОВИСТОВ",
            "**ПРОМТ ДЛЯ GPT**\nсделай ретушь...",
        );
        assert_eq!(title, "Для БРОВИСТОВ");
    }

    #[test]
    fn numbered_prompt_prefix_stripped() {
        assert_eq!(
            extract_prompt_title("ПРОМТ 5 — ЗАМЕНА ФОНА", "обычный текст"),
            "ЗАМЕНА ФОНА"
        );
        assert_eq!(
            extract_prompt_title("ПРОМТ — СНЕГ ❄️", "обычный текст"),
            "СНЕГ"
        );
    }

    #[test]
    fn structure_tail_removed() {
        assert_eq!(
            extract_prompt_title("ПРОМТ — ПОТАЛЬ Структура промта ниже", "текст"),
            "ПОТАЛЬ"
        );
    }

    #[test]
    fn empty_result_truncates_post_title() {
        assert_eq!(extract_prompt_title("ПРОМТ", "текст"), "ПРОМТ");
    }
}
