//! End-to-end pipelines: spreadsheet → catalog, both sources → filters,
//! filters → app document.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use promptcat_catalog::{assemble_catalog, build_app_filters, merge_filters, write_json};
use promptcat_chatlog::{parse_export, select_prompts, SelectOptions};
use promptcat_classify::{classify, detect_language, extract_date, extract_prompt_title};
use promptcat_shared::{
    CatalogError, CommentRow, FiltersCatalog, PromptRecord, Result, CURRENT_SCHEMA_VERSION,
};
use promptcat_sheet::{read_comments, NoiseFilter};

/// Progress callback for long-running pipeline phases.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called as items within a phase are processed.
    fn item(&self, current: usize, total: usize);
    /// Called once with a one-line summary when the pipeline completes.
    fn done(&self, summary: &str);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn item(&self, _current: usize, _total: usize) {}
    fn done(&self, _summary: &str) {}
}

// ---------------------------------------------------------------------------
// Extract: spreadsheet → classified prompt catalog
// ---------------------------------------------------------------------------

/// Configuration for the `extract` pipeline.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Path to the exported comments spreadsheet.
    pub comments_sheet: PathBuf,
    /// Output path for the prompt catalog JSON.
    pub output: PathBuf,
    /// Comments shorter than this count as noise.
    pub min_comment_len: usize,
}

/// Result of the `extract` pipeline.
#[derive(Debug)]
pub struct ExtractResult {
    pub rows_read: usize,
    pub prompts_extracted: usize,
    pub category_stats: BTreeMap<String, usize>,
    pub language_stats: BTreeMap<String, usize>,
    pub output: PathBuf,
    pub elapsed: Duration,
}

/// Read the spreadsheet, drop noise, classify every surviving comment,
/// and write the prompt catalog.
#[instrument(skip_all, fields(sheet = %config.comments_sheet.display()))]
pub fn extract_catalog(
    config: &ExtractConfig,
    progress: &dyn ProgressReporter,
) -> Result<ExtractResult> {
    let start = Instant::now();

    progress.phase("Reading spreadsheet");
    let rows = read_comments(&config.comments_sheet)?;
    let rows_read = rows.len();
    info!(rows = rows_read, "spreadsheet read");

    progress.phase("Classifying prompts");
    let records = extract_records(&rows, config.min_comment_len, progress)?;

    progress.phase("Writing catalog");
    let source_file = config
        .comments_sheet
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let catalog = assemble_catalog(records, &source_file);
    write_json(&config.output, &catalog)?;

    let result = ExtractResult {
        rows_read,
        prompts_extracted: catalog.meta.total_prompts,
        category_stats: catalog.meta.category_stats.clone(),
        language_stats: catalog.meta.language_stats.clone(),
        output: config.output.clone(),
        elapsed: start.elapsed(),
    };
    progress.done(&format!(
        "{} prompts from {} rows",
        result.prompts_extracted, result.rows_read
    ));
    Ok(result)
}

/// Classify every comment row that survives the noise filter.
///
/// Empty output means the wrong file or an empty export was supplied, which
/// is a validation failure rather than a valid zero-prompt catalog.
fn extract_records(
    rows: &[CommentRow],
    min_comment_len: usize,
    progress: &dyn ProgressReporter,
) -> Result<Vec<PromptRecord>> {
    let noise = NoiseFilter::new(rows, min_comment_len);
    let total = rows.len();
    let mut records: Vec<PromptRecord> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        progress.item(i + 1, total);
        if noise.is_non_prompt(row) {
            continue;
        }
        let text = row.comment_text.trim();
        if text.is_empty() || text == "None" {
            continue;
        }

        let classification = classify(text, &row.post_title);
        records.push(PromptRecord {
            id: 0,
            post_id: row.post_id,
            comment_id: row.comment_id,
            title: extract_prompt_title(&row.post_title, text),
            category: classification.category.as_str().to_string(),
            subcategory: classification.subcategory.map(String::from),
            date: extract_date(&row.post_date),
            description_ru: classification.description_ru,
            description_en: classification.description_en,
            features: classification.features,
            prompt_text: text.to_string(),
            language: detect_language(text),
            target_audience: classification.target_audience,
        });
    }

    if records.is_empty() {
        return Err(CatalogError::validation(
            "no prompts extracted from the spreadsheet; wrong file or empty export",
        ));
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Catalog: HTML export + spreadsheet → merged filters
// ---------------------------------------------------------------------------

/// Configuration for the `catalog` pipeline.
#[derive(Debug, Clone)]
pub struct FiltersConfig {
    /// Path to the Telegram chat export HTML.
    pub chat_export: PathBuf,
    /// Path to the exported comments spreadsheet.
    pub comments_sheet: PathBuf,
    /// Output path for the merged filters JSON.
    pub output: PathBuf,
    /// Channel posts shorter than this are not prompts.
    pub min_post_len: usize,
}

/// Result of the `catalog` pipeline.
#[derive(Debug)]
pub struct FiltersResult {
    pub html_prompts: usize,
    pub excel_prompts: usize,
    pub total_filters: usize,
    pub duplicates_removed: usize,
    pub category_stats: BTreeMap<String, usize>,
    pub output: PathBuf,
    pub elapsed: Duration,
}

/// Parse both sources, merge, dedup, and write the filters catalog.
///
/// Either source may yield nothing (the other can still be regenerated
/// alone); only a completely empty merge is an error.
#[instrument(skip_all)]
pub fn build_filters(
    config: &FiltersConfig,
    progress: &dyn ProgressReporter,
) -> Result<FiltersResult> {
    let start = Instant::now();

    progress.phase("Parsing chat export");
    let html = fs::read_to_string(&config.chat_export)
        .map_err(|e| CatalogError::io(&config.chat_export, e))?;
    let messages = parse_export(&html);
    let channel_prompts = select_prompts(
        &messages,
        &SelectOptions {
            min_post_len: config.min_post_len,
        },
    );
    info!(
        messages = messages.len(),
        prompts = channel_prompts.len(),
        "chat export parsed"
    );

    progress.phase("Reading spreadsheet");
    let rows = read_comments(&config.comments_sheet)?;

    progress.phase("Merging sources");
    let outcome = merge_filters(&channel_prompts, &rows);
    if outcome.catalog.filters.is_empty() {
        return Err(CatalogError::validation(
            "merged filters catalog is empty; both sources yielded nothing",
        ));
    }

    let mut category_stats: BTreeMap<String, usize> = BTreeMap::new();
    for f in &outcome.catalog.filters {
        *category_stats.entry(f.category.clone()).or_default() += 1;
    }

    progress.phase("Writing filters catalog");
    write_json(&config.output, &outcome.catalog)?;

    let result = FiltersResult {
        html_prompts: outcome.html_count,
        excel_prompts: outcome.excel_count,
        total_filters: outcome.catalog.filters.len(),
        duplicates_removed: outcome.duplicates_removed,
        category_stats,
        output: config.output.clone(),
        elapsed: start.elapsed(),
    };
    progress.done(&format!(
        "{} filters ({} duplicates removed)",
        result.total_filters, result.duplicates_removed
    ));
    Ok(result)
}

// ---------------------------------------------------------------------------
// App filters: merged catalog → app document
// ---------------------------------------------------------------------------

/// Configuration for the `appfilters` pipeline.
#[derive(Debug, Clone)]
pub struct AppFiltersConfig {
    /// Path to a previously written merged filters catalog.
    pub input: PathBuf,
    /// Output path for the app filter document.
    pub output: PathBuf,
}

/// Result of the `appfilters` pipeline.
#[derive(Debug)]
pub struct AppFiltersResult {
    pub categories: usize,
    pub filters: usize,
    pub output: PathBuf,
    pub elapsed: Duration,
}

/// Load the merged filters catalog and emit the app-facing document.
#[instrument(skip_all, fields(input = %config.input.display()))]
pub fn build_app_filter_doc(config: &AppFiltersConfig) -> Result<AppFiltersResult> {
    let start = Instant::now();

    let raw = fs::read_to_string(&config.input).map_err(|e| CatalogError::io(&config.input, e))?;
    let catalog: FiltersCatalog = serde_json::from_str(&raw)?;
    if catalog.schema_version != CURRENT_SCHEMA_VERSION {
        return Err(CatalogError::validation(format!(
            "unsupported filters catalog schema_version {} (expected {})",
            catalog.schema_version, CURRENT_SCHEMA_VERSION
        )));
    }

    let doc = build_app_filters(&catalog);
    write_json(&config.output, &doc)?;

    Ok(AppFiltersResult {
        categories: doc.categories.len(),
        filters: doc.filters.len(),
        output: config.output.clone(),
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptcat_shared::{FilterEntry, FilterSource};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn app_filters_round_trip_through_disk() {
        let dir = temp_dir("promptcat-core-appfilters");
        let input = dir.join("filters_catalog.json");
        let output = dir.join("filters_for_app.json");

        let catalog = FiltersCatalog {
            schema_version: CURRENT_SCHEMA_VERSION,
            filters: vec![FilterEntry {
                source: FilterSource::Html,
                source_id: "message1".into(),
                category: "РЕТУШЬ КОЖИ".into(),
                name: "ПРОМТ — Натуральная ретушь".into(),
                prompt_text: "отредактируй фото".into(),
            }],
        };
        write_json(&input, &catalog).unwrap();

        let result = build_app_filter_doc(&AppFiltersConfig {
            input,
            output: output.clone(),
        })
        .unwrap();
        assert_eq!(result.filters, 1);
        assert_eq!(result.categories, 1);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["filters"][0]["id"], "filter-1");
        assert_eq!(written["filters"][0]["categoryId"], "skin-retouch");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn app_filters_reject_unknown_schema() {
        let dir = temp_dir("promptcat-core-schema");
        let input = dir.join("filters_catalog.json");
        fs::write(&input, r#"{"schema_version": 99, "filters": []}"#).unwrap();

        let err = build_app_filter_doc(&AppFiltersConfig {
            input,
            output: dir.join("out.json"),
        })
        .unwrap_err();
        assert!(matches!(err, CatalogError::Validation { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn extract_with_only_noise_rows_is_a_validation_error() {
        let noise_row = |text: &str| CommentRow {
            post_id: 1,
            post_title: "ПРОМТ — ретушь".into(),
            comment_text: text.into(),
            ..CommentRow::default()
        };
        let rows = vec![
            noise_row("None"),
            noise_row("Спасибо большое!"),
            noise_row(&format!("Добрый день! {}", "Подскажите, куда вставлять текст? ".repeat(5))),
        ];

        let err = extract_records(&rows, 100, &SilentProgress).unwrap_err();
        assert!(matches!(err, CatalogError::Validation { .. }));

        // One genuine prompt is enough to clear the check.
        let mut rows = rows;
        rows.push(noise_row(&format!(
            "Отредактируй фото: выполни натуральную ретушь кожи. {}",
            "Сохрани текстуру, поры и мелкие детали. ".repeat(3)
        )));
        let records = extract_records(&rows, 100, &SilentProgress).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "skin_retouch");
    }

    #[test]
    fn build_filters_from_fixture_export() {
        let dir = temp_dir("promptcat-core-filters");
        let output = dir.join("filters_catalog.json");
        let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/html/chat_export.html");

        // Both inputs must exist; a missing spreadsheet surfaces as an error.
        let err = build_filters(
            &FiltersConfig {
                chat_export: fixture,
                comments_sheet: dir.join("missing.xlsx"),
                output,
                min_post_len: 200,
            },
            &SilentProgress,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Sheet(_) | CatalogError::Io { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
