use crate::config::GeoConfig;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "geo-cascade")]
#[command(about = "Query and validate the administrative hierarchy (region > department > arrondissement > commune)")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Catalog file (JSON or TOML) to use instead of the embedded one
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output format: table, json, csv or tsv
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every region in declaration order
    Regions,
    /// List the departments of a region
    Departments { region: String },
    /// List the arrondissements of a department
    Arrondissements { region: String, department: String },
    /// List the communes of an arrondissement
    Communes {
        region: String,
        department: String,
        arrondissement: String,
    },
    /// List every commune of a department, across its arrondissements
    CommunesByDepartment { region: String, department: String },
    /// Check that a location tuple is one connected path
    Validate {
        region: String,
        department: String,
        arrondissement: String,
        commune: String,
    },
    /// Report data-quality issues in the catalog
    Lint,
    /// Show node counts per level
    Stats,
    /// Dump the catalog, one row per commune
    Export,
}

impl CliConfig {
    /// 應用命令列覆蓋設定
    pub fn apply_overrides(&self, config: &mut GeoConfig) {
        if let Some(catalog) = &self.catalog {
            tracing::debug!("Catalog overridden to: {}", catalog);
            config.catalog.path = Some(catalog.clone());
            config.catalog.format = None;
        }
        if let Some(format) = &self.format {
            config.output.format = Some(format.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_command() {
        let cli = CliConfig::parse_from([
            "geo-cascade",
            "--format",
            "json",
            "validate",
            "DAKAR",
            "01",
            "02",
            "02",
        ]);
        assert_eq!(cli.format.as_deref(), Some("json"));
        match cli.command {
            Command::Validate { region, commune, .. } => {
                assert_eq!(region, "DAKAR");
                assert_eq!(commune, "02");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = CliConfig::parse_from([
            "geo-cascade",
            "--catalog",
            "other.toml",
            "-f",
            "tsv",
            "communes-by-department",
            "DAKAR",
            "01",
        ]);
        let mut config = GeoConfig::default();
        config.catalog.format = Some("json".to_string());
        cli.apply_overrides(&mut config);

        assert_eq!(config.catalog.path.as_deref(), Some("other.toml"));
        assert_eq!(config.catalog.format, None);
        assert_eq!(config.output.format.as_deref(), Some("tsv"));
    }
}
