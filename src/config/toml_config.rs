use crate::catalog::{self, Catalog, CatalogFormat};
use crate::config::OutputFormat;
use crate::core::lint::LintOptions;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub lint: LintConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// External catalog file; the embedded catalog is used when absent.
    pub path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    pub code_pattern: Option<String>,
    pub allow_empty_names: Option<bool>,
    pub fail_on_error: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl GeoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${GEO_CATALOG})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.catalog.path {
            validation::validate_path("catalog.path", path)?;
        }

        if let Some(format) = &self.catalog.format {
            validation::validate_required_field("catalog.path", &self.catalog.path)?;
            validation::validate_one_of("catalog.format", format, &["json", "toml"])?;
        }

        if let Some(pattern) = &self.lint.code_pattern {
            validation::validate_non_empty_string("lint.code_pattern", pattern)?;
            validation::validate_regex("lint.code_pattern", pattern)?;
        }

        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", format, OutputFormat::NAMES)?;
        }

        Ok(())
    }

    /// The configured catalog, or the embedded one.
    pub fn load_catalog(&self) -> Result<Cow<'static, Catalog>> {
        let Some(path) = &self.catalog.path else {
            return Ok(Cow::Borrowed(catalog::builtin()));
        };
        let catalog = match &self.catalog.format {
            Some(format) => Catalog::from_file_with_format(path, CatalogFormat::parse(format)?)?,
            None => Catalog::from_file(path)?,
        };
        Ok(Cow::Owned(catalog))
    }

    pub fn lint_options(&self) -> Result<LintOptions> {
        let code_pattern = match &self.lint.code_pattern {
            Some(pattern) => Some(validation::validate_regex("lint.code_pattern", pattern)?),
            None => None,
        };
        Ok(LintOptions {
            code_pattern,
            allow_empty_names: self.lint.allow_empty_names.unwrap_or(false),
        })
    }

    pub fn fail_on_lint_error(&self) -> bool {
        self.lint.fail_on_error.unwrap_or(true)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(|f| OutputFormat::parse(f).ok())
            .unwrap_or_default()
    }
}

impl Validate for GeoConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GeoError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[catalog]
path = "./data/senegal.json"
format = "json"

[lint]
code_pattern = "^[0-9]{2}$"
allow_empty_names = true
fail_on_error = false

[output]
format = "csv"
"#;

        let config = GeoConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.catalog.path.as_deref(), Some("./data/senegal.json"));
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert!(!config.fail_on_lint_error());
        assert!(config.validate().is_ok());

        let options = config.lint_options().unwrap();
        assert!(options.allow_empty_names);
        assert!(options.code_pattern.unwrap().is_match("07"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GeoConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_format(), OutputFormat::Table);
        assert!(config.fail_on_lint_error());
        assert!(matches!(config.load_catalog().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GEO_CASCADE_TEST_FORMAT", "tsv");

        let toml_content = r#"
[output]
format = "${GEO_CASCADE_TEST_FORMAT}"
"#;

        let config = GeoConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Tsv);

        std::env::remove_var("GEO_CASCADE_TEST_FORMAT");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = GeoConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_pattern = GeoConfig::from_toml_str("[lint]\ncode_pattern = \"(\"\n").unwrap();
        assert!(bad_pattern.validate().is_err());

        let format_without_path = GeoConfig::from_toml_str("[catalog]\nformat = \"json\"\n").unwrap();
        assert!(matches!(
            format_without_path.validate(),
            Err(GeoError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"json\"\n")
            .unwrap();

        let config = GeoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
    }
}
