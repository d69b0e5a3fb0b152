//! Cascading child queries over a [`Catalog`].
//!
//! All queries are total: an unknown ancestor at any step yields an empty
//! list, which callers treat as "nothing selected yet".

use crate::catalog::Catalog;
use crate::domain::model::{Level, Place, ResolvedLocation};
use crate::domain::ports::HierarchyResolver;

impl Catalog {
    /// All regions in declaration order.
    pub fn list_regions(&self) -> Vec<Place<'_>> {
        self.places(Level::Region, 0..self.stats().regions)
    }

    pub fn list_departments(&self, region: &str) -> Vec<Place<'_>> {
        match self.region(region) {
            Some(id) => self.places(Level::Department, self.region_children(id)),
            None => {
                tracing::debug!("Unknown region '{}'", region);
                Vec::new()
            }
        }
    }

    pub fn list_arrondissements(&self, region: &str, department: &str) -> Vec<Place<'_>> {
        match self.department(region, department) {
            Some(id) => self.places(Level::Arrondissement, self.department_children(id)),
            None => {
                tracing::debug!("Unknown department '{}' in region '{}'", department, region);
                Vec::new()
            }
        }
    }

    pub fn list_communes(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
    ) -> Vec<Place<'_>> {
        match self.arrondissement(region, department, arrondissement) {
            Some(id) => self.places(Level::Commune, self.arrondissement_children(id)),
            None => {
                tracing::debug!(
                    "Unknown arrondissement '{}' in {}/{}",
                    arrondissement,
                    region,
                    department
                );
                Vec::new()
            }
        }
    }

    /// Communes of every arrondissement of a department, arrondissement
    /// order first, then commune order.
    pub fn list_communes_by_department(&self, region: &str, department: &str) -> Vec<Place<'_>> {
        match self.department(region, department) {
            Some(id) => self.places(Level::Commune, self.department_communes(id)),
            None => Vec::new(),
        }
    }
}

impl HierarchyResolver for Catalog {
    fn list_regions(&self) -> Vec<Place<'_>> {
        Catalog::list_regions(self)
    }

    fn list_departments(&self, region: &str) -> Vec<Place<'_>> {
        Catalog::list_departments(self, region)
    }

    fn list_arrondissements(&self, region: &str, department: &str) -> Vec<Place<'_>> {
        Catalog::list_arrondissements(self, region, department)
    }

    fn list_communes(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
    ) -> Vec<Place<'_>> {
        Catalog::list_communes(self, region, department, arrondissement)
    }

    fn list_communes_by_department(&self, region: &str, department: &str) -> Vec<Place<'_>> {
        Catalog::list_communes_by_department(self, region, department)
    }

    fn resolve_location(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        commune: &str,
    ) -> Option<ResolvedLocation<'_>> {
        Catalog::resolve_location(self, region, department, arrondissement, commune)
    }

    fn first_unresolved_level(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        commune: &str,
    ) -> Option<Level> {
        Catalog::first_unresolved_level(self, region, department, arrondissement, commune)
    }
}

/// [`Catalog::list_regions`] on the embedded catalog.
pub fn list_regions() -> Vec<Place<'static>> {
    crate::catalog::builtin().list_regions()
}

pub fn list_departments(region: &str) -> Vec<Place<'static>> {
    crate::catalog::builtin().list_departments(region)
}

pub fn list_arrondissements(region: &str, department: &str) -> Vec<Place<'static>> {
    crate::catalog::builtin().list_arrondissements(region, department)
}

pub fn list_communes(region: &str, department: &str, arrondissement: &str) -> Vec<Place<'static>> {
    crate::catalog::builtin().list_communes(region, department, arrondissement)
}

pub fn list_communes_by_department(region: &str, department: &str) -> Vec<Place<'static>> {
    crate::catalog::builtin().list_communes_by_department(region, department)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_regions_keeps_declaration_order() {
        let codes: Vec<&str> = list_regions().iter().map(|r| r.code).collect();
        assert_eq!(&codes[..4], &["DAKAR", "ZIGUINCHOR", "DIOURBEL", "SAINT-LOUIS"]);
        let mut sorted = codes.clone();
        sorted.sort();
        assert_ne!(codes, sorted);
    }

    #[test]
    fn test_list_departments_of_dakar() {
        let names: Vec<&str> = list_departments("DAKAR").iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["DAKAR", "PIKINE", "GUEDIAWAYE", "RUFISQUE"]);
    }

    #[test]
    fn test_departments_are_matched_by_code_not_key() {
        assert!(list_arrondissements("DAKAR", "PIKINE").is_empty());
        let arrs = list_arrondissements("DAKAR", "02");
        assert_eq!(arrs[0].name, "DAGOUDANE");
    }

    #[test]
    fn test_empty_on_unknown() {
        assert!(list_departments("NONEXISTENT").is_empty());
        assert!(list_arrondissements("DAKAR", "NONEXISTENT").is_empty());
        assert!(list_communes("DAKAR", "DAKAR", "NONEXISTENT").is_empty());
        assert!(list_communes("DAKAR", "01", "NONEXISTENT").is_empty());
        assert!(list_communes_by_department("NONEXISTENT", "01").is_empty());
        assert!(list_departments("").is_empty());
    }

    #[test]
    fn test_list_communes_of_dakar_plateau() {
        let communes = list_communes("DAKAR", "01", "02");
        assert_eq!(communes.len(), 4);
        assert_eq!(
            communes[1],
            Place {
                code: "02",
                name: "MEDINA"
            }
        );
    }

    #[test]
    fn test_communes_by_department_spans_arrondissements() {
        let all = list_communes_by_department("DAKAR", "03");
        assert_eq!(all.len(), 5);
        assert_eq!(all.first().map(|c| c.name), Some("GOLF SUD"));

        let dakar = list_communes_by_department("DAKAR", "01");
        assert_eq!(dakar.first().map(|c| c.name), Some("NGOR"));
        assert_eq!(dakar.last().map(|c| c.name), Some("GOREE"));
    }
}
