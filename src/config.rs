/// Configuration loading for the sample-charting crate.
///
/// Settings live in a `thermoplot.toml` file next to the binary. Every
/// field has a default, so a missing file is not an error: callers warn
/// and fall back to `AppConfig::default()`.

use serde::Deserialize;
use std::path::Path;

/// Default configuration file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./thermoplot.toml";

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub workbook: WorkbookConfig,
    pub chart: ChartConfig,
}

/// Where the sample workbook lives and which sheets to read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkbookConfig {
    /// Workbook directory containing one `<sheet>.csv` file per sheet.
    pub dir: String,
    /// First sheet name (the one `load_sample_average_deviation` reads).
    pub sheet_one: String,
    /// Second sheet name, merged with the first on the Hour column.
    pub sheet_two: String,
}

/// Chart rendering knobs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Bar body width in terminal columns.
    pub width: usize,
    /// Curve grid height in terminal rows.
    pub curve_height: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            workbook: WorkbookConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        WorkbookConfig {
            dir: "samples".to_string(),
            sheet_one: "sheet_one".to_string(),
            sheet_two: "sheet_two".to_string(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 48,
            curve_height: 12,
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Io(String),
    /// The file could not be parsed as TOML.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from a TOML file.
///
/// Returns `Ok(None)` if the file does not exist; the caller decides
/// whether that deserves a warning before using defaults.
pub fn load_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::Io(e.to_string())),
    };

    let config: AppConfig = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(Some(config))
}
