//! Atomic JSON output.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use promptcat_shared::{CatalogError, Result};

/// Serialize `value` as pretty JSON and write it atomically.
///
/// Writes to a sibling `.tmp` file first and renames over the target, so
/// a crash mid-write never leaves a truncated catalog behind.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &json).map_err(|e| CatalogError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| CatalogError::io(path, e))?;

    info!(path = %path.display(), bytes = json.len(), "wrote catalog file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn writes_pretty_utf8_json() {
        let dir = std::env::temp_dir().join("promptcat-writer-test");
        let path = dir.join("out.json");
        let mut value: BTreeMap<&str, &str> = BTreeMap::new();
        value.insert("название", "Ретушь кожи");

        write_json(&path, &value).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        // Non-ASCII stays literal, not \u-escaped.
        assert!(written.contains("Ретушь кожи"));
        assert!(written.contains('\n'));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn no_tmp_file_left_behind() {
        let dir = std::env::temp_dir().join("promptcat-writer-tmp-test");
        let path = dir.join("out.json");
        write_json(&path, &vec![1, 2, 3]).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
