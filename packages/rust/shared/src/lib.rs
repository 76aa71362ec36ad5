//! Shared types, error model, and configuration for promptcat.
//!
//! This crate is the foundation depended on by all other promptcat crates.
//! It provides:
//! - [`CatalogError`] — the unified error type
//! - Domain types ([`PromptCatalog`], [`FilterEntry`], [`AppFilterDoc`], ...)
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, InputsConfig, LimitsConfig, OutputConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{CatalogError, Result};
pub use types::{
    AppCategory, AppFilter, AppFilterDoc, CatalogMeta, CategoryDef, CommentRow,
    CURRENT_SCHEMA_VERSION, FilterEntry, FilterSource, FiltersCatalog, Language, PromptCatalog,
    PromptRecord,
};
