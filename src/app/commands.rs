use crate::catalog::Catalog;
use crate::config::cli::Command;
use crate::config::{GeoConfig, OutputFormat};
use crate::core::export::{self, ExportFormat};
use crate::core::lint::{self, LintReport};
use crate::domain::model::Place;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command ran but its answer is negative (invalid location, lint errors).
    Rejected,
}

pub fn run<W: Write>(
    command: &Command,
    catalog: &Catalog,
    config: &GeoConfig,
    mut out: W,
) -> Result<Outcome> {
    let format = config.output_format();
    tracing::debug!("Running {:?} with {:?} output", command, format);

    match command {
        Command::Regions => write_places(&catalog.list_regions(), format, out),
        Command::Departments { region } => {
            write_places(&catalog.list_departments(region), format, out)
        }
        Command::Arrondissements { region, department } => {
            write_places(&catalog.list_arrondissements(region, department), format, out)
        }
        Command::Communes {
            region,
            department,
            arrondissement,
        } => write_places(
            &catalog.list_communes(region, department, arrondissement),
            format,
            out,
        ),
        Command::CommunesByDepartment { region, department } => write_places(
            &catalog.list_communes_by_department(region, department),
            format,
            out,
        ),
        Command::Validate {
            region,
            department,
            arrondissement,
            commune,
        } => {
            let resolved = catalog.resolve_location(region, department, arrondissement, commune);
            let unresolved =
                catalog.first_unresolved_level(region, department, arrondissement, commune);

            if format == OutputFormat::Json {
                #[derive(Serialize)]
                struct Verdict<'a> {
                    valid: bool,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    location: Option<crate::domain::model::ResolvedLocation<'a>>,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    unresolved_level: Option<crate::domain::model::Level>,
                }
                let verdict = Verdict {
                    valid: resolved.is_some(),
                    location: resolved,
                    unresolved_level: unresolved,
                };
                serde_json::to_writer_pretty(&mut out, &verdict)?;
                writeln!(out)?;
            } else {
                match (&resolved, unresolved) {
                    (Some(location), _) => writeln!(out, "valid: {}", location)?,
                    (None, Some(level)) => writeln!(out, "invalid: unknown {}", level)?,
                    (None, None) => writeln!(out, "invalid")?,
                }
            }

            Ok(if resolved.is_some() {
                Outcome::Success
            } else {
                Outcome::Rejected
            })
        }
        Command::Lint => {
            let report = lint::lint(catalog, &config.lint_options()?);
            write_lint(&report, format, &mut out)?;
            if report.has_errors() && config.fail_on_lint_error() {
                Ok(Outcome::Rejected)
            } else {
                Ok(Outcome::Success)
            }
        }
        Command::Stats => {
            let stats = catalog.stats();
            if format == OutputFormat::Json {
                serde_json::to_writer_pretty(&mut out, &stats)?;
                writeln!(out)?;
            } else {
                writeln!(out, "country          {}", catalog.country())?;
                writeln!(out, "regions          {}", stats.regions)?;
                writeln!(out, "departments      {}", stats.departments)?;
                writeln!(out, "arrondissements  {}", stats.arrondissements)?;
                writeln!(out, "communes         {}", stats.communes)?;
            }
            Ok(Outcome::Success)
        }
        Command::Export => {
            let export_format = match format {
                OutputFormat::Json => ExportFormat::Json,
                OutputFormat::Tsv => ExportFormat::Tsv,
                OutputFormat::Csv | OutputFormat::Table => ExportFormat::Csv,
            };
            export::write_rows(&export::rows(catalog), export_format, out)?;
            Ok(Outcome::Success)
        }
    }
}

fn write_places<W: Write>(places: &[Place<'_>], format: OutputFormat, mut out: W) -> Result<Outcome> {
    match format {
        OutputFormat::Table => {
            for place in places {
                let name = if place.name.is_empty() {
                    "<unnamed>"
                } else {
                    place.name
                };
                writeln!(out, "{:<12} {}", place.code, name)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, places)?;
            writeln!(out)?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Csv { b',' } else { b'\t' };
            let mut wtr = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(out);
            for place in places {
                wtr.serialize(place)?;
            }
            wtr.flush()?;
        }
    }
    Ok(Outcome::Success)
}

fn write_lint<W: Write>(report: &LintReport, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Csv { b',' } else { b'\t' };
            let mut wtr = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(out);
            wtr.write_record(["severity", "message"])?;
            for finding in &report.findings {
                let severity = format!("{:?}", finding.severity).to_lowercase();
                wtr.write_record([severity, finding.to_string()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table => {
            for finding in &report.findings {
                writeln!(out, "[{:?}] {}", finding.severity, finding)?;
            }
            writeln!(
                out,
                "{} error(s), {} warning(s)",
                report.errors().count(),
                report.warnings().count()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(command: Command, config: &GeoConfig) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(&command, crate::catalog::builtin(), config, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_departments_table() {
        let (outcome, text) = run_to_string(
            Command::Departments {
                region: "DAKAR".to_string(),
            },
            &GeoConfig::default(),
        );
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(1).unwrap().ends_with("PIKINE"));
    }

    #[test]
    fn test_validate_outcomes() {
        let command = |commune: &str| Command::Validate {
            region: "DAKAR".to_string(),
            department: "01".to_string(),
            arrondissement: "05".to_string(),
            commune: commune.to_string(),
        };

        let (outcome, text) = run_to_string(command("01"), &GeoConfig::default());
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(text.trim(), "valid: Dakar / DAKAR / GOREE / GOREE");

        let (outcome, text) = run_to_string(command("02"), &GeoConfig::default());
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(text.trim(), "invalid: unknown commune");
    }

    #[test]
    fn test_validate_json() {
        let mut config = GeoConfig::default();
        config.output.format = Some("json".to_string());
        let (_, text) = run_to_string(
            Command::Validate {
                region: "DAKAR".to_string(),
                department: "09".to_string(),
                arrondissement: "01".to_string(),
                commune: "01".to_string(),
            },
            &config,
        );
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["unresolved_level"], "department");
    }

    #[test]
    fn test_lint_outcome_follows_fail_on_error() {
        let (outcome, text) = run_to_string(Command::Lint, &GeoConfig::default());
        assert_eq!(outcome, Outcome::Rejected);
        assert!(text.contains("duplicate arrondissement code '03'"));

        let mut lenient = GeoConfig::default();
        lenient.lint.fail_on_error = Some(false);
        let (outcome, _) = run_to_string(Command::Lint, &lenient);
        assert_eq!(outcome, Outcome::Success);
    }

    #[test]
    fn test_communes_csv() {
        let mut config = GeoConfig::default();
        config.output.format = Some("csv".to_string());
        let (_, text) = run_to_string(
            Command::Communes {
                region: "DAKAR".to_string(),
                department: "01".to_string(),
                arrondissement: "05".to_string(),
            },
            &config,
        );
        assert_eq!(text, "code,name\n01,GOREE\n");
    }
}
