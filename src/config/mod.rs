#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{GeoError, Result};

pub use toml_config::GeoConfig;

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["table", "json", "csv", "tsv"];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(GeoError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}
