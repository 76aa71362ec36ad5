//! Merged filters catalog.
//!
//! Combines channel posts (HTML export) with comment-thread prompts
//! (spreadsheet) into one flat list of coarse-categorized filters, then
//! deduplicates by prompt text. Channel prompts come first so they win
//! ties against comment echoes of the same text.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use promptcat_chatlog::ChannelPrompt;
use promptcat_classify::{categorize_by_content, categorize_name};
use promptcat_shared::{
    CommentRow, FilterEntry, FilterSource, FiltersCatalog, CURRENT_SCHEMA_VERSION,
};

use crate::dedupe::dedupe_filters;

/// Comments shorter than this are chatter, not prompts.
pub const MIN_FILTER_COMMENT_LEN: usize = 100;

// Conversational comments that sneak past the length check.
const CHIT_CHAT: &[&str] = &[
    "можете скинуть",
    "интересно посмотреть",
    "пост с обратной",
    "туда можно",
    "получается если надо",
    "добрый день, подскажите",
    "мне чат gpt на этот промт",
    "нужен новый номер",
    "здравствуйте",
    "причина нужно постоянно",
    "подписка 900",
    "ой, поняла",
];

// Posts whose threads hold questions or navigation, never prompts.
const SKIP_TITLES: &[&str] = &[
    "обратн",
    "вопрос",
    "навигац",
    "как подключ",
    "девочки, под этим",
    "девушки, напишите",
    "в комментариях оставлю",
];

/// Merge result with the counts the summary output reports.
#[derive(Debug)]
pub struct MergeOutcome {
    pub catalog: FiltersCatalog,
    /// Entries contributed by the HTML export, before dedup.
    pub html_count: usize,
    /// Entries contributed by the spreadsheet, before dedup.
    pub excel_count: usize,
    pub duplicates_removed: usize,
}

/// Build the merged filters catalog from both sources.
#[instrument(skip_all, fields(html = html_prompts.len(), rows = rows.len()))]
pub fn merge_filters(html_prompts: &[ChannelPrompt], rows: &[CommentRow]) -> MergeOutcome {
    let mut entries: Vec<FilterEntry> = Vec::new();

    for p in html_prompts {
        let mut cat = categorize_name(&p.name);
        if cat == "ПРОЧЕЕ" {
            cat = categorize_by_content(&p.text);
        }
        entries.push(FilterEntry {
            source: FilterSource::Html,
            source_id: p.id.clone(),
            category: cat.to_string(),
            name: p.name.clone(),
            prompt_text: p.text.clone(),
        });
    }

    // Group prompt-looking comments by post, newest post first.
    let posts = group_by_post(rows);
    for (pid, (title, prompts)) in posts.iter().rev() {
        let title = clean_post_title(title);
        let title_lower = title.to_lowercase();
        if SKIP_TITLES.iter().any(|s| title_lower.contains(s)) {
            continue;
        }

        for (i, prompt) in prompts.iter().enumerate() {
            let name = if prompts.len() > 1 {
                format!("{title} (вариант {})", i + 1)
            } else {
                title.clone()
            };
            let mut cat = categorize_name(&title);
            if cat == "ПРОЧЕЕ" {
                let first_line = prompt.lines().next().unwrap_or_default();
                cat = categorize_name(first_line);
            }
            if cat == "ПРОЧЕЕ" {
                cat = categorize_by_content(prompt);
            }
            entries.push(FilterEntry {
                source: FilterSource::Excel,
                source_id: pid.to_string(),
                category: cat.to_string(),
                name,
                prompt_text: prompt.clone(),
            });
        }
    }

    let html_count = html_prompts.len();
    let excel_count = entries.len() - html_count;
    debug!(total = entries.len(), "merged filter entries before dedup");

    let filters = dedupe_filters(entries);
    let duplicates_removed = html_count + excel_count - filters.len();
    MergeOutcome {
        catalog: FiltersCatalog {
            schema_version: CURRENT_SCHEMA_VERSION,
            filters,
        },
        html_count,
        excel_count,
        duplicates_removed,
    }
}

/// Group comments by post id, keeping the post title and comments in
/// spreadsheet order within each post.
fn group_by_post(rows: &[CommentRow]) -> BTreeMap<i64, (String, Vec<String>)> {
    let mut posts: BTreeMap<i64, (String, Vec<String>)> = BTreeMap::new();
    for row in rows {
        let comment = row.comment_text.trim();
        if comment.chars().count() < MIN_FILTER_COMMENT_LEN {
            continue;
        }
        let lower = comment.to_lowercase();
        if CHIT_CHAT.iter().any(|s| lower.contains(s)) {
            continue;
        }
        posts
            .entry(row.post_id)
            .or_insert_with(|| (row.post_title.trim().to_string(), Vec::new()))
            .1
            .push(comment.to_string());
    }
    posts
}

/// Strip bold markers and keep the first title line.
fn clean_post_title(title: &str) -> String {
    let t = title.replace("**", "").replace("__", "");
    t.lines().next().unwrap_or_default().trim().to_string()
}
