use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid pattern: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Catalog lint failed with {errors} error(s)")]
    LintFailed { errors: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GeoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GeoError::IoError(_) => ErrorCategory::Io,
            GeoError::JsonError(_)
            | GeoError::TomlError(_)
            | GeoError::CsvError(_)
            | GeoError::RegexError(_) => ErrorCategory::Parsing,
            GeoError::ConfigError { .. }
            | GeoError::InvalidConfigValueError { .. }
            | GeoError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GeoError::CatalogError { .. } | GeoError::LintFailed { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GeoError::LintFailed { .. } => ErrorSeverity::Medium,
            GeoError::ConfigError { .. }
            | GeoError::InvalidConfigValueError { .. }
            | GeoError::MissingConfigError { .. }
            | GeoError::RegexError(_) => ErrorSeverity::High,
            GeoError::JsonError(_) | GeoError::TomlError(_) | GeoError::CsvError(_) => {
                ErrorSeverity::High
            }
            GeoError::CatalogError { .. } | GeoError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Parsing => "Check the file syntax (JSON or TOML) and field names",
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::Data => "Run `geo-cascade lint` and fix the reported catalog entries",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GeoError::IoError(e) => format!("Could not read or write a file: {}", e),
            GeoError::MissingConfigError { field } => {
                format!("The setting '{}' is required but was not provided", field)
            }
            GeoError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            GeoError::LintFailed { errors } => {
                format!("The catalog contains {} structural error(s)", errors)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_and_severity() {
        let err = GeoError::MissingConfigError {
            field: "catalog.path".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("catalog.path"));

        let err = GeoError::LintFailed { errors: 2 };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GeoError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
