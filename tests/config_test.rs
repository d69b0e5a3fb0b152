use anyhow::Result;
use geo_cascade::catalog::CatalogFormat;
use geo_cascade::core::lint::{lint, LintKind};
use geo_cascade::utils::validation::Validate;
use geo_cascade::{Catalog, GeoConfig, GeoError, Level};
use std::borrow::Cow;
use tempfile::TempDir;

const TOML_CATALOG: &str = r#"
country = "Testland"

[[regions]]
code = "NORTH"
name = "North"

[[regions.departments]]
key = "HILLS"
code = "01"
name = "Hills"

[[regions.departments.arrondissements]]
code = "01"
name = "Upper"
communes = [
  { code = "01", name = "Alpha" },
  { code = "02", name = "" },
]

[[regions.departments.arrondissements]]
code = "01"
name = "Shadowed"
communes = [{ code = "01", name = "Gamma" }]
"#;

const JSON_CATALOG: &str = r#"{
  "country": "Testland",
  "regions": [
    {
      "code": "SOUTH",
      "name": "South",
      "departments": [
        {
          "code": "01",
          "name": "Coast",
          "arrondissements": [
            { "code": "01", "name": "Bay", "communes": [{ "code": "01", "name": "Port" }] }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn test_load_toml_catalog_through_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("testland.toml");
    std::fs::write(&catalog_path, TOML_CATALOG)?;

    let config_content = format!(
        r#"
[catalog]
path = "{}"

[lint]
allow_empty_names = false
"#,
        catalog_path.to_str().unwrap().replace('\\', "/")
    );
    let config = GeoConfig::from_toml_str(&config_content)?;
    config.validate()?;

    let catalog = config.load_catalog()?;
    assert!(matches!(catalog, Cow::Owned(_)));
    assert_eq!(catalog.country(), "Testland");
    assert_eq!(catalog.list_regions().len(), 1);
    assert!(catalog.is_valid_location("NORTH", "01", "01", "02"));
    assert_eq!(
        catalog.first_unresolved_level("NORTH", "01", "01", "03"),
        Some(Level::Commune)
    );
    assert!(catalog.department_by_key("NORTH", "HILLS").is_some());

    let report = lint(&catalog, &config.lint_options()?);
    assert!(report.has_errors());
    assert!(report
        .findings
        .iter()
        .any(|f| matches!(&f.kind, LintKind::DuplicateCode { level: Level::Arrondissement, code } if code == "01")));
    assert!(report
        .findings
        .iter()
        .any(|f| matches!(&f.kind, LintKind::EmptyName { level: Level::Commune, .. })));
    Ok(())
}

#[test]
fn test_load_json_catalog_by_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("south.json");
    std::fs::write(&path, JSON_CATALOG)?;

    let catalog = Catalog::from_file(&path)?;
    assert_eq!(catalog.list_departments("SOUTH")[0].name, "Coast");
    assert!(catalog.is_valid_location("SOUTH", "01", "01", "01"));
    assert!(lint(&catalog, &Default::default()).is_clean());
    Ok(())
}

#[test]
fn test_explicit_format_overrides_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("catalog.data");
    std::fs::write(&path, JSON_CATALOG)?;

    assert!(matches!(
        Catalog::from_file(&path),
        Err(GeoError::ConfigError { .. })
    ));
    let catalog = Catalog::from_file_with_format(&path, CatalogFormat::Json)?;
    assert_eq!(catalog.stats().communes, 1);
    Ok(())
}

#[test]
fn test_missing_and_malformed_catalogs() {
    assert!(matches!(
        Catalog::from_file("/definitely/not/here.json"),
        Err(GeoError::IoError(_))
    ));
    assert!(matches!(
        Catalog::from_json_str("{ not json"),
        Err(GeoError::JsonError(_))
    ));
    assert!(matches!(
        Catalog::from_toml_str("regions = 3"),
        Err(GeoError::TomlError(_))
    ));
}
