//! Catalog document assembly and output.
//!
//! Builds the three emitted JSON documents: the classified prompt catalog,
//! the merged coarse-category filters list, and the app-facing filter
//! document with Georgian labels.

pub mod appfilters;
pub mod builder;
pub mod categories;
pub mod dedupe;
pub mod merge;
pub mod writer;

pub use appfilters::{build_app_filters, clean_name, translate_name};
pub use builder::assemble_catalog;
pub use categories::category_defs;
pub use dedupe::dedupe_filters;
pub use merge::{merge_filters, MergeOutcome};
pub use writer::write_json;
