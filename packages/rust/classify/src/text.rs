//! Text normalization helpers shared by the classifier.
//!
//! Each helper is a small `&str -> …` pass in the spirit of a cleanup
//! pipeline: strip markup, pull out a date, count script usage.

use std::sync::LazyLock;

use regex::Regex;

use promptcat_shared::Language;

/// Matches a calendar date anywhere in a free-form date string.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").expect("date regex"));

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

static CYRILLIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[а-яёА-ЯЁ]").expect("cyrillic regex"));

static LATIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]").expect("latin regex"));

/// Clean a post title for display: strip bold/italic markers and emoji,
/// keep the first line up to any `[` marker, collapse whitespace.
pub fn clean_title(raw: &str) -> String {
    let stripped: String = raw
        .replace("**", "")
        .replace("__", "")
        .replace('*', "")
        .chars()
        .filter(|c| !is_display_symbol(*c))
        .collect();

    let first_line = stripped.lines().next().unwrap_or_default();
    let before_bracket = first_line.split('[').next().unwrap_or_default();

    WS_RE.replace_all(before_bracket, " ").trim().to_string()
}

/// Emoji and pictographic symbols that clutter exported titles.
fn is_display_symbol(c: char) -> bool {
    let u = c as u32;
    u >= 0x1_0000 || (0x2600..=0x27BF).contains(&u) || (0xFE00..=0xFE0F).contains(&u)
}

/// Extract a `YYYY-MM-DD` date from a free-form export date string.
///
/// Falls back to the first 10 characters when no date pattern is found,
/// or an empty string for short inputs.
pub fn extract_date(date_str: &str) -> String {
    if let Some(caps) = DATE_RE.captures(date_str) {
        return caps[1].to_string();
    }
    if date_str.chars().count() >= 10 {
        date_str.chars().take(10).collect()
    } else {
        String::new()
    }
}

/// Detect prompt language by script: Cyrillic wins ties.
pub fn detect_language(text: &str) -> Language {
    let cyrillic = CYRILLIC_RE.find_iter(text).count();
    let latin = LATIN_RE.find_iter(text).count();
    if cyrillic >= latin {
        Language::Ru
    } else {
        Language::En
    }
}

/// True when `haystack` matches any of the keywords.
///
/// A keyword containing `.*` matches as an ordered pair of substrings
/// (both present, in order); everything else is plain containment.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| matches_keyword(haystack, kw))
}

fn matches_keyword(haystack: &str, kw: &str) -> bool {
    match kw.split_once(".*") {
        Some((head, tail)) => haystack
            .find(head)
            .is_some_and(|i| haystack[i + head.len()..].contains(tail)),
        None => haystack.contains(kw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_title_strips_markup_and_emoji() {
        assert_eq!(clean_title("**ПРОМТ — блестки** ✨"), "ПРОМТ — блестки");
        assert_eq!(clean_title("Капли воды 💧💧"), "Капли воды");
    }

    #[test]
    fn clean_title_takes_first_line_before_bracket() {
        assert_eq!(
            clean_title("ПРОМТ — поталь [структура ниже]\nвторая строка"),
            "ПРОМТ — поталь"
        );
    }

    #[test]
    fn clean_title_collapses_whitespace() {
        assert_eq!(clean_title("ПРОМТ   —   ретушь  "), "ПРОМТ — ретушь");
    }

    #[test]
    fn extract_date_finds_pattern() {
        assert_eq!(extract_date("2026-01-14 10:30:00"), "2026-01-14");
        assert_eq!(extract_date("posted on 2026-02-03!"), "2026-02-03");
    }

    #[test]
    fn extract_date_falls_back_to_prefix() {
        assert_eq!(extract_date("14/01/2026 10:30"), "14/01/2026");
        assert_eq!(extract_date("short"), "");
    }

    #[test]
    fn detect_language_by_script() {
        assert_eq!(detect_language("Отредактируй фото"), Language::Ru);
        assert_eq!(detect_language("Edit your photo professionally"), Language::En);
        // Mixed text with equal counts stays Russian.
        assert_eq!(detect_language("фото photo"), Language::Ru);
    }

    #[test]
    fn contains_any_plain_and_ordered() {
        assert!(contains_any("замените фон на черный", &["замените фон"]));
        assert!(!contains_any("фон не трогать", &["замените фон"]));
        // Ordered pair keyword.
        assert!(contains_any("крупный план красивых губ", &["крупный план.*губ"]));
        assert!(!contains_any("губы крупный план", &["крупный план.*губ"]));
    }
}
