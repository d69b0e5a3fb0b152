//! Data-quality checks over a loaded catalog.
//!
//! The catalog is never modified. Duplicate sibling codes are reported
//! because only the first declared sibling is reachable by code.

use crate::catalog::Catalog;
use crate::domain::model::{Level, Place};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintKind {
    DuplicateCode { level: Level, code: String },
    EmptyName { level: Level, code: String },
    EmptyCode { level: Level },
    CodePattern { level: Level, code: String },
    Childless { level: Level, code: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    pub severity: LintSeverity,
    /// Codes of the ancestors of the offending node, outermost first.
    pub path: Vec<String>,
    #[serde(flatten)]
    pub kind: LintKind,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "<root>".to_string()
        } else {
            self.path.join("/")
        };
        match &self.kind {
            LintKind::DuplicateCode { level, code } => {
                write!(f, "{}: duplicate {} code '{}'", path, level, code)
            }
            LintKind::EmptyName { level, code } => {
                write!(f, "{}: {} '{}' has an empty name", path, level, code)
            }
            LintKind::EmptyCode { level } => write!(f, "{}: {} with an empty code", path, level),
            LintKind::CodePattern { level, code } => {
                write!(f, "{}: {} code '{}' does not match the expected pattern", path, level, code)
            }
            LintKind::Childless { level, code } => {
                write!(f, "{}: {} '{}' has no children", path, level, code)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Applied to department, arrondissement and commune codes.
    pub code_pattern: Option<Regex>,
    pub allow_empty_names: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub findings: Vec<LintFinding>,
}

impl LintReport {
    pub fn errors(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == LintSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == LintSeverity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

struct Linter<'a> {
    options: &'a LintOptions,
    report: LintReport,
}

impl Linter<'_> {
    fn push(&mut self, severity: LintSeverity, path: &[&str], kind: LintKind) {
        let finding = LintFinding {
            severity,
            path: path.iter().map(|s| s.to_string()).collect(),
            kind,
        };
        tracing::warn!("Catalog lint ({:?}): {}", severity, finding);
        self.report.findings.push(finding);
    }

    /// Checks shared by every node of one sibling group.
    fn siblings(&mut self, level: Level, path: &[&str], places: &[Place<'_>]) {
        let options = self.options;
        let mut seen = HashSet::new();
        for place in places {
            if place.code.trim().is_empty() {
                self.push(LintSeverity::Error, path, LintKind::EmptyCode { level });
                continue;
            }
            if !seen.insert(place.code) {
                self.push(
                    LintSeverity::Error,
                    path,
                    LintKind::DuplicateCode {
                        level,
                        code: place.code.to_string(),
                    },
                );
            }
            if place.name.trim().is_empty() && !options.allow_empty_names {
                self.push(
                    LintSeverity::Warning,
                    path,
                    LintKind::EmptyName {
                        level,
                        code: place.code.to_string(),
                    },
                );
            }
            if level != Level::Region {
                if let Some(pattern) = &options.code_pattern {
                    if !pattern.is_match(place.code) {
                        self.push(
                            LintSeverity::Warning,
                            path,
                            LintKind::CodePattern {
                                level,
                                code: place.code.to_string(),
                            },
                        );
                    }
                }
            }
        }
    }

    fn childless(&mut self, level: Level, path: &[&str], code: &str) {
        self.push(
            LintSeverity::Warning,
            path,
            LintKind::Childless {
                level,
                code: code.to_string(),
            },
        );
    }
}

/// Walk the whole catalog and collect every finding.
pub fn lint(catalog: &Catalog, options: &LintOptions) -> LintReport {
    let mut linter = Linter {
        options,
        report: LintReport::default(),
    };

    let regions: Vec<Place<'_>> = catalog.region_ids().map(|id| catalog.region_place(id)).collect();
    linter.siblings(Level::Region, &[], &regions);

    for region_id in catalog.region_ids() {
        let region = catalog.region_place(region_id);
        let departments: Vec<_> = catalog.department_ids(region_id).collect();
        if departments.is_empty() {
            linter.childless(Level::Region, &[], region.code);
        }
        let places: Vec<_> = departments.iter().map(|&id| catalog.department_place(id)).collect();
        linter.siblings(Level::Department, &[region.code], &places);

        for department_id in departments {
            let department = catalog.department_place(department_id);
            let path = [region.code, department.code];
            let arrondissements: Vec<_> = catalog.arrondissement_ids(department_id).collect();
            if arrondissements.is_empty() {
                linter.childless(Level::Department, &path[..1], department.code);
            }
            let places: Vec<_> = arrondissements
                .iter()
                .map(|&id| catalog.arrondissement_place(id))
                .collect();
            linter.siblings(Level::Arrondissement, &path, &places);

            for arrondissement_id in arrondissements {
                let arrondissement = catalog.arrondissement_place(arrondissement_id);
                let path = [region.code, department.code, arrondissement.code];
                let communes: Vec<_> = catalog
                    .commune_ids(arrondissement_id)
                    .map(|id| catalog.commune_place(id))
                    .collect();
                if communes.is_empty() {
                    linter.childless(Level::Arrondissement, &path[..2], arrondissement.code);
                }
                linter.siblings(Level::Commune, &path, &communes);
            }
        }
    }

    tracing::debug!(
        "Catalog lint finished: {} finding(s)",
        linter.report.findings.len()
    );
    linter.report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_duplicate_arrondissement_code_is_reported() {
        let report = lint(crate::catalog::builtin(), &LintOptions::default());
        let duplicates: Vec<_> = report
            .errors()
            .filter(|f| matches!(f.kind, LintKind::DuplicateCode { .. }))
            .collect();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].path, vec!["TAMBACOUNDA", "02"]);
        assert_eq!(
            duplicates[0].kind,
            LintKind::DuplicateCode {
                level: Level::Arrondissement,
                code: "03".to_string()
            }
        );
        assert!(report.has_errors());
    }

    #[test]
    fn test_builtin_empty_commune_name_is_a_warning() {
        let report = lint(crate::catalog::builtin(), &LintOptions::default());
        let empty: Vec<_> = report
            .warnings()
            .filter(|f| matches!(f.kind, LintKind::EmptyName { .. }))
            .collect();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].path, vec!["TAMBACOUNDA", "02", "03"]);

        let lenient = LintOptions {
            allow_empty_names: true,
            ..Default::default()
        };
        let report = lint(crate::catalog::builtin(), &lenient);
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn test_code_pattern() {
        let options = LintOptions {
            code_pattern: Some(Regex::new(r"^\d{2}$").unwrap()),
            allow_empty_names: true,
        };
        let report = lint(crate::catalog::builtin(), &options);
        assert_eq!(report.warnings().count(), 0);

        let options = LintOptions {
            code_pattern: Some(Regex::new(r"^\d{3}$").unwrap()),
            allow_empty_names: true,
        };
        let report = lint(crate::catalog::builtin(), &options);
        assert!(report
            .warnings()
            .all(|f| matches!(f.kind, LintKind::CodePattern { .. })));
        assert!(report.warnings().count() > 0);
    }

    #[test]
    fn test_finding_display() {
        let finding = LintFinding {
            severity: LintSeverity::Error,
            path: vec!["TAMBACOUNDA".to_string(), "02".to_string()],
            kind: LintKind::DuplicateCode {
                level: Level::Arrondissement,
                code: "03".to_string(),
            },
        };
        assert_eq!(
            finding.to_string(),
            "TAMBACOUNDA/02: duplicate arrondissement code '03'"
        );
    }
}
