//! Application configuration for promptcat.
//!
//! User config lives at `~/.promptcat/promptcat.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "promptcat.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".promptcat";

// ---------------------------------------------------------------------------
// Config structs (matching promptcat.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input file locations.
    #[serde(default)]
    pub inputs: InputsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Filtering thresholds.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// `[inputs]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    /// Path to the Telegram channel HTML export.
    #[serde(default = "default_chat_export")]
    pub chat_export: String,

    /// Path to the exported comments spreadsheet (.xlsx).
    #[serde(default = "default_comments_sheet")]
    pub comments_sheet: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            chat_export: default_chat_export(),
            comments_sheet: default_comments_sheet(),
        }
    }
}

fn default_chat_export() -> String {
    "messages.html".into()
}
fn default_comments_sheet() -> String {
    "telegram_comments.xlsx".into()
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the catalog JSON files are written to.
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    ".".into()
}

/// `[limits]` section.
///
/// The thresholds come from the curation rules the catalog was built with:
/// comments shorter than 100 chars are never prompts, channel posts need
/// more than 200 chars of body to qualify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Minimum comment length to be considered a prompt.
    #[serde(default = "default_min_comment_len")]
    pub min_comment_len: usize,

    /// Minimum channel-post body length to be considered a prompt.
    #[serde(default = "default_min_post_len")]
    pub min_post_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_comment_len: default_min_comment_len(),
            min_post_len: default_min_post_len(),
        }
    }
}

fn default_min_comment_len() -> usize {
    100
}
fn default_min_post_len() -> usize {
    200
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.promptcat/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CatalogError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.promptcat/promptcat.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| CatalogError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CatalogError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CatalogError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CatalogError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("chat_export"));
        assert!(toml_str.contains("comments_sheet"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.limits.min_comment_len, 100);
        assert_eq!(parsed.limits.min_post_len, 200);
        assert_eq!(parsed.output.dir, ".");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[inputs]
chat_export = "/data/export/messages.html"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.inputs.chat_export, "/data/export/messages.html");
        assert_eq!(config.inputs.comments_sheet, "telegram_comments.xlsx");
        assert_eq!(config.limits.min_comment_len, 100);
    }
}
