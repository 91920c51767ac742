//! Tool configuration.
//!
//! Every setting has a default, so the tool runs with no config at all. An
//! optional `diagram-pages.toml` in the working directory (or the file named
//! by `--config`) overrides the defaults, and command-line flags override
//! both:
//!
//! ```text
//! stock defaults  <  diagram-pages.toml  <  CLI flags
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! [generate]
//! input = "pages.json"      # Page document to read
//! output = "pages"          # Directory the pages are written to
//! write_index = true        # Also write output/index.html
//!
//! [links]
//! dir = "pages"             # Directory whose *.html files get rewritten
//!
//! [mapper]
//! out_dir = "."             # Where the navigation dictionary and script go
//! ```
//!
//! Config files are sparse: override just the keys you need. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Looked up in the working directory when `--config` isn't given.
pub const DEFAULT_CONFIG_FILE: &str = "diagram-pages.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Page generation paths.
    pub generate: GenerateConfig,
    /// Link rewriting target.
    pub links: LinksConfig,
    /// Element mapper output.
    pub mapper: MapperConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub write_index: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("pages.json"),
            output: PathBuf::from("pages"),
            write_index: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    pub dir: PathBuf,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("pages"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    pub out_dir: PathBuf,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }
}

impl ToolConfig {
    /// Reject empty paths; they'd silently resolve to the working directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("generate.input", &self.generate.input),
            ("generate.output", &self.generate.output),
            ("links.dir", &self.links.dir),
            ("mapper.out_dir", &self.mapper.out_dir),
        ];
        for (key, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(ToolConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value. `Ok(None)` if it doesn't exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<ToolConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ToolConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to the defaults when it's absent.
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    resolve_config(load_raw_config(path)?)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# diagram-pages configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Command-line flags take precedence over anything set here.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Page generation (`diagram-pages generate`)
# ---------------------------------------------------------------------------
[generate]
# JSON document with a `pages` array and an optional `template` string.
input = "pages.json"

# Directory the generated pages are written to. Created if missing.
output = "pages"

# Write an index.html linking every generated page.
write_index = true

# ---------------------------------------------------------------------------
# Link rewriting (`diagram-pages rewrite-links`)
# ---------------------------------------------------------------------------
[links]
# Directory whose *.html files are patched in place.
dir = "pages"

# ---------------------------------------------------------------------------
# Element mapping (`diagram-pages map`)
# ---------------------------------------------------------------------------
[mapper]
# Where navigation_dictionary.json and navigation_code.js are written.
out_dir = "."
"##
}
