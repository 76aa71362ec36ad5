//! Pipeline orchestration for promptcat.
//!
//! Ties the parsing, filtering, classification, and catalog crates into
//! the three end-to-end operations the CLI exposes.

pub mod pipeline;

pub use pipeline::{
    build_app_filter_doc, build_filters, extract_catalog, AppFiltersConfig, AppFiltersResult,
    ExtractConfig, ExtractResult, FiltersConfig, FiltersResult, ProgressReporter, SilentProgress,
};
