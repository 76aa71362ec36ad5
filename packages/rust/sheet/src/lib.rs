//! Spreadsheet ingestion for promptcat.
//!
//! Reads the exported comments workbook and separates genuine prompts from
//! chat noise.

mod filter;
mod reader;

pub use filter::{NoiseFilter, looks_like_prompt};
pub use reader::{comment_row_from_cells, read_comments};
