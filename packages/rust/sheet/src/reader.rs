//! XLSX comment export reading.
//!
//! The export has one worksheet with a header row and eight columns:
//! post_id, post_date, post_title, comment_id, comment_date, author,
//! author_id, comment_text. Author columns are not retained.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use promptcat_shared::{CatalogError, CommentRow, Result};

/// Read all comment rows from the spreadsheet at `path`.
///
/// The header row is skipped; rows without a post id are dropped.
pub fn read_comments(path: &Path) -> Result<Vec<CommentRow>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| CatalogError::Sheet(format!("{}: {e}", path.display())))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CatalogError::Sheet(format!("{}: workbook has no sheets", path.display())))?
        .map_err(|e| CatalogError::Sheet(format!("{}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for (i, cells) in range.rows().enumerate() {
        if i == 0 {
            continue;
        }
        if let Some(row) = comment_row_from_cells(cells) {
            rows.push(row);
        }
    }

    debug!(count = rows.len(), path = %path.display(), "loaded comment rows");
    Ok(rows)
}

/// Convert one worksheet row into a [`CommentRow`].
///
/// Returns `None` for structurally unusable rows (fewer than eight columns
/// or no post id). Cell values are stringified; empty cells become empty
/// strings so downstream code never deals with missing values.
pub fn comment_row_from_cells(cells: &[Data]) -> Option<CommentRow> {
    if cells.len() < 8 {
        return None;
    }

    let post_id = cell_to_i64(&cells[0])?;
    let comment_id = cell_to_i64(&cells[3]).unwrap_or_default();

    Some(CommentRow {
        post_id,
        post_date: cell_to_string(&cells[1]),
        post_title: cell_to_string(&cells[2]),
        comment_id,
        comment_date: cell_to_string(&cells[4]),
        comment_text: cell_to_string(&cells[7]),
    })
}

fn cell_to_i64(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Integral floats print without the trailing `.0` the way the
            // export writes them.
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}
