use crate::catalog::Catalog;
use crate::utils::error::{GeoError, Result};
use serde::Serialize;
use std::io::Write;

/// One commune with its full ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRow<'a> {
    pub region_code: &'a str,
    pub region_name: &'a str,
    pub department_code: &'a str,
    pub department_name: &'a str,
    pub arrondissement_code: &'a str,
    pub arrondissement_name: &'a str,
    pub commune_code: &'a str,
    pub commune_name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(GeoError::InvalidConfigValueError {
                field: "export.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: csv, tsv, json".to_string(),
            }),
        }
    }
}

/// Flatten the catalog top-down, one row per commune.
pub fn rows(catalog: &Catalog) -> Vec<LocationRow<'_>> {
    let mut rows = Vec::with_capacity(catalog.stats().communes);
    for region_id in catalog.region_ids() {
        let region = catalog.region_place(region_id);
        for department_id in catalog.department_ids(region_id) {
            let department = catalog.department_place(department_id);
            for arrondissement_id in catalog.arrondissement_ids(department_id) {
                let arrondissement = catalog.arrondissement_place(arrondissement_id);
                for commune_id in catalog.commune_ids(arrondissement_id) {
                    let commune = catalog.commune_place(commune_id);
                    rows.push(LocationRow {
                        region_code: region.code,
                        region_name: region.name,
                        department_code: department.code,
                        department_name: department.name,
                        arrondissement_code: arrondissement.code,
                        arrondissement_name: arrondissement.name,
                        commune_code: commune.code,
                        commune_name: commune.name,
                    });
                }
            }
        }
    }
    rows
}

pub fn write_rows<W: Write>(rows: &[LocationRow<'_>], format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Csv => write_delimited(rows, b',', writer),
        ExportFormat::Tsv => write_delimited(rows, b'\t', writer),
        ExportFormat::Json => {
            serde_json::to_writer_pretty(writer, rows)?;
            Ok(())
        }
    }
}

fn write_delimited<W: Write>(rows: &[LocationRow<'_>], delimiter: u8, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    tracing::debug!("Wrote {} rows", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_commune() {
        let catalog = crate::catalog::builtin();
        let rows = rows(catalog);
        assert_eq!(rows.len(), catalog.stats().communes);
        assert_eq!(rows[0].region_code, "DAKAR");
        assert_eq!(rows[0].commune_name, "NGOR");
    }

    #[test]
    fn test_write_csv_and_tsv() {
        let catalog = crate::catalog::builtin();
        let rows: Vec<_> = rows(catalog).into_iter().take(2).collect();

        let mut csv_out = Vec::new();
        write_rows(&rows, ExportFormat::Csv, &mut csv_out).unwrap();
        let csv_text = String::from_utf8(csv_out).unwrap();
        let csv_lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(csv_lines.len(), 3);
        assert_eq!(
            csv_lines[0],
            "region_code,region_name,department_code,department_name,arrondissement_code,arrondissement_name,commune_code,commune_name"
        );
        assert_eq!(csv_lines[1], "DAKAR,Dakar,01,DAKAR,01,ALMADIES,01,NGOR");

        let mut tsv_out = Vec::new();
        write_rows(&rows, ExportFormat::Tsv, &mut tsv_out).unwrap();
        let tsv_text = String::from_utf8(tsv_out).unwrap();
        assert_eq!(
            tsv_text.lines().nth(2),
            Some("DAKAR\tDakar\t01\tDAKAR\t01\tALMADIES\t02\tOUAKAM")
        );
    }

    #[test]
    fn test_write_json() {
        let catalog = crate::catalog::builtin();
        let rows: Vec<_> = rows(catalog).into_iter().take(1).collect();
        let mut out = Vec::new();
        write_rows(&rows, ExportFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["commune_name"], "NGOR");
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!(ExportFormat::parse("tsv").unwrap(), ExportFormat::Tsv);
        assert!(ExportFormat::parse("xlsx").is_err());
    }
}
