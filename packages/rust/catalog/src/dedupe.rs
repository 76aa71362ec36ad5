//! Prompt text deduplication.
//!
//! The same prompt shows up many times across posts (reposts, pinned
//! copies, comment echoes). Texts are compared by a digest of their
//! normalized form; the first occurrence wins.

use std::collections::HashSet;

use sha2::{Digest, Sha256};
use tracing::debug;

use promptcat_shared::FilterEntry;

/// Normalize prompt text for comparison: trim, collapse runs of
/// whitespace to a single space, lowercase.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

fn digest(text: &str) -> [u8; 32] {
    Sha256::digest(normalize(text).as_bytes()).into()
}

/// Drop entries whose normalized prompt text was already seen.
pub fn dedupe_filters(entries: Vec<FilterEntry>) -> Vec<FilterEntry> {
    let before = entries.len();
    let mut seen: HashSet<[u8; 32]> = HashSet::with_capacity(before);
    let kept: Vec<FilterEntry> = entries
        .into_iter()
        .filter(|e| seen.insert(digest(&e.prompt_text)))
        .collect();
    debug!(before, after = kept.len(), "deduplicated filter entries");
    kept
}
