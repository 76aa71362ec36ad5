//! Prompt catalog assembly.

use std::collections::BTreeMap;

use chrono::Local;
use tracing::{debug, instrument};

use promptcat_shared::{CatalogMeta, PromptCatalog, PromptRecord, CURRENT_SCHEMA_VERSION};

use crate::categories::category_defs;

const CATALOG_DESCRIPTION: &str =
    "Catalog of AI photo editing prompts for beauty professionals extracted from Glow.GE Telegram channel.";

/// Assemble the full catalog document around classified records.
///
/// Records are renumbered sequentially from 1; stats are recomputed from
/// the records themselves so meta never drifts from the payload.
#[instrument(skip_all, fields(records = records.len()))]
pub fn assemble_catalog(mut records: Vec<PromptRecord>, source_file: &str) -> PromptCatalog {
    for (i, record) in records.iter_mut().enumerate() {
        record.id = (i + 1) as u32;
    }

    let mut category_stats: BTreeMap<String, usize> = BTreeMap::new();
    let mut language_stats: BTreeMap<String, usize> = BTreeMap::new();
    for record in &records {
        *category_stats.entry(record.category.clone()).or_default() += 1;
        *language_stats.entry(record.language.as_str().to_string()).or_default() += 1;
    }

    let categories = category_defs();
    debug!(
        prompts = records.len(),
        categories = categories.len(),
        "assembled prompt catalog"
    );

    PromptCatalog {
        schema_version: CURRENT_SCHEMA_VERSION,
        meta: CatalogMeta {
            total_prompts: records.len(),
            total_categories: categories.len(),
            source_file: source_file.to_string(),
            generated_at: Local::now().format("%Y-%m-%d").to_string(),
            description: CATALOG_DESCRIPTION.to_string(),
            category_stats,
            language_stats,
        },
        categories,
        prompts: records,
    }
}
