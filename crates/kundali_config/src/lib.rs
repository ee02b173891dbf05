//! TOML configuration for chart computation.
//!
//! Reads an optional `[chart]` table:
//!
//! ```toml
//! [chart]
//! validate_input = true
//! flag_delta_t_range = false
//! ```
//!
//! Missing keys (or a missing table) fall back to [`ChartConfig::default`].

pub mod error;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use kundali_chart::ChartConfig;

pub use error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    validate_input: Option<bool>,
    #[serde(default)]
    flag_delta_t_range: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartToml>,
}

impl From<ChartToml> for ChartConfig {
    fn from(t: ChartToml) -> Self {
        let defaults = ChartConfig::default();
        ChartConfig {
            validate_input: t.validate_input.unwrap_or(defaults.validate_input),
            flag_delta_t_range: t.flag_delta_t_range.unwrap_or(defaults.flag_delta_t_range),
        }
    }
}

/// Parse a config from TOML text.
pub fn parse_config(text: &str) -> Result<ChartConfig, ConfigError> {
    let root: RootConfigToml = toml::from_str(text)?;
    Ok(root.chart.unwrap_or_default().into())
}

/// Load a config from a TOML file.
pub fn load_config(path: &Path) -> Result<ChartConfig, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
    let config = parse_config(&text)?;
    debug!(path = %path.display(), ?config, "loaded chart config");
    Ok(config)
}
