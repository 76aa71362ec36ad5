//! Core domain types for promptcat catalogs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current schema version for emitted catalog documents.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Detected prompt language. The catalog carries exactly these two.
/// Russian is the channel's native language and the detection default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Language code as it appears in emitted JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet rows
// ---------------------------------------------------------------------------

/// One comment row from the exported spreadsheet.
///
/// Author columns exist in the source file but are never used downstream,
/// so they are not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRow {
    /// Telegram post (channel message) id the comment belongs to.
    pub post_id: i64,
    /// Post date as exported (free-form string).
    pub post_date: String,
    /// Post title/body as exported.
    pub post_title: String,
    /// Comment id within the discussion group.
    pub comment_id: i64,
    /// Comment date as exported.
    pub comment_date: String,
    /// Full comment text.
    pub comment_text: String,
}

// ---------------------------------------------------------------------------
// Prompt catalog (`prompts_catalog.json`)
// ---------------------------------------------------------------------------

/// A single classified prompt record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptRecord {
    /// Dense sequential id, starting at 1.
    pub id: u32,
    /// Source post id.
    pub post_id: i64,
    /// Source comment id.
    pub comment_id: i64,
    /// Display title derived from the comment header or post title.
    pub title: String,
    /// Primary category id (see [`CategoryDef`]).
    pub category: String,
    /// Optional subcategory id; serialized as an explicit `null` when absent,
    /// matching the shape the front-end already consumes.
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Post date, `YYYY-MM-DD` where extractable.
    pub date: String,
    /// Feature-derived Russian description.
    pub description_ru: String,
    /// Feature-derived English description.
    pub description_en: String,
    /// Sorted, deduplicated feature tags.
    pub features: Vec<String>,
    /// The prompt text itself, verbatim.
    pub prompt_text: String,
    /// Detected language of the prompt text.
    pub language: Language,
    /// Sorted, deduplicated target-audience tags.
    pub target_audience: Vec<String>,
}

/// A category definition shipped alongside the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub name_ru: String,
    pub name_en: String,
    pub description_ru: String,
    pub description_en: String,
}

/// Catalog-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub total_prompts: usize,
    pub total_categories: usize,
    /// Basename of the spreadsheet the records came from.
    pub source_file: String,
    /// Generation date, `YYYY-MM-DD`.
    pub generated_at: String,
    pub description: String,
    /// Record count per category id (sorted by key for stable output).
    pub category_stats: BTreeMap<String, usize>,
    /// Record count per language code.
    pub language_stats: BTreeMap<String, usize>,
}

/// The full `prompts_catalog.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptCatalog {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    pub meta: CatalogMeta,
    pub categories: Vec<CategoryDef>,
    pub prompts: Vec<PromptRecord>,
}

// ---------------------------------------------------------------------------
// Merged filters catalog (`filters_catalog.json`)
// ---------------------------------------------------------------------------

/// Where a filter entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSource {
    /// A channel post from the HTML chat export.
    Html,
    /// A comment from the spreadsheet.
    Excel,
}

/// One entry of the merged, coarsely categorized filters catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterEntry {
    pub source: FilterSource,
    /// Message id (HTML) or post id (spreadsheet) as a string.
    pub source_id: String,
    /// Coarse category label (Russian, single level).
    pub category: String,
    /// Display name, possibly with a `(вариант N)` suffix.
    pub name: String,
    pub prompt_text: String,
}

/// The full `filters_catalog.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersCatalog {
    pub schema_version: u32,
    pub filters: Vec<FilterEntry>,
}

// ---------------------------------------------------------------------------
// App filters (`filters_for_app.json`)
// ---------------------------------------------------------------------------

/// An app-facing category with Georgian label and icon name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppCategory {
    pub id: String,
    pub label_ka: String,
    pub label_ru: String,
    /// Icon identifier understood by the front-end icon set.
    pub icon: String,
    pub count: usize,
}

/// An app-facing filter entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppFilter {
    /// `filter-N`, sequential.
    pub id: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub name_ka: String,
    pub name_ru: String,
    pub prompt: String,
}

/// The full `filters_for_app.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppFilterDoc {
    pub schema_version: u32,
    pub categories: Vec<AppCategory>,
    pub filters: Vec<AppFilter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_serialization() {
        assert_eq!(serde_json::to_string(&Language::Ru).unwrap(), "\"ru\"");
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn prompt_record_emits_null_subcategory() {
        let record = PromptRecord {
            id: 1,
            post_id: 42,
            comment_id: 7,
            title: "Натуральная ретушь".into(),
            category: "skin_retouch".into(),
            subcategory: None,
            date: "2026-02-01".into(),
            description_ru: "натуральная ретушь кожи".into(),
            description_en: "natural skin retouching".into(),
            features: vec!["skin_retouch".into()],
            prompt_text: "Отредактируй фото...".into(),
            language: Language::Ru,
            target_audience: vec![],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"subcategory\":null"));

        let parsed: PromptRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.category, "skin_retouch");
        assert!(parsed.subcategory.is_none());

        // A document written before the field existed still parses.
        let legacy = json.replace("\"subcategory\":null,", "");
        let parsed: PromptRecord = serde_json::from_str(&legacy).unwrap();
        assert!(parsed.subcategory.is_none());
    }

    #[test]
    fn filter_source_lowercase() {
        assert_eq!(serde_json::to_string(&FilterSource::Html).unwrap(), "\"html\"");
        assert_eq!(serde_json::to_string(&FilterSource::Excel).unwrap(), "\"excel\"");
    }

    #[test]
    fn app_filter_uses_camel_case_category_id() {
        let filter = AppFilter {
            id: "filter-1".into(),
            category_id: "skin-retouch".into(),
            name_ka: "კანის რეტუში".into(),
            name_ru: "Ретушь кожи".into(),
            prompt: "Perform professional retouching".into(),
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"categoryId\":\"skin-retouch\""));
    }

    #[test]
    fn catalog_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/catalog.fixture.json")
            .expect("read fixture");
        let parsed: PromptCatalog =
            serde_json::from_str(&fixture).expect("deserialize fixture catalog");
        assert_eq!(parsed.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(parsed.meta.total_prompts, parsed.prompts.len());
        assert_eq!(parsed.meta.total_categories, parsed.categories.len());
    }

    #[test]
    fn filters_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/filters.fixture.json")
            .expect("read fixture");
        let parsed: FiltersCatalog =
            serde_json::from_str(&fixture).expect("deserialize fixture filters");
        assert_eq!(parsed.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(parsed.filters.len(), 3);
        assert_eq!(parsed.filters[0].source, FilterSource::Html);
    }
}
