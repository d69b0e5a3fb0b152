//! Caller-held selection state for cascading location menus.
//!
//! Changing a level re-resolves the options of the level below and clears
//! every descendant selection, so a stale child code can never be paired
//! with a new parent.

use crate::catalog::Catalog;
use crate::domain::model::{Level, LocationTuple, Place};

#[derive(Debug, Clone)]
pub struct CascadeSelection<'c> {
    catalog: &'c Catalog,
    region: Option<String>,
    department: Option<String>,
    arrondissement: Option<String>,
    commune: Option<String>,
}

impl<'c> CascadeSelection<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            region: None,
            department: None,
            arrondissement: None,
            commune: None,
        }
    }

    /// Select a region and return its departments.
    pub fn select_region(&mut self, code: &str) -> Vec<Place<'c>> {
        if self.region.as_deref() != Some(code) {
            self.region = Some(code.to_string());
            self.reset_below(Level::Region);
        }
        self.options(Level::Department)
    }

    /// Select a department and return its arrondissements.
    pub fn select_department(&mut self, code: &str) -> Vec<Place<'c>> {
        if self.department.as_deref() != Some(code) {
            self.department = Some(code.to_string());
            self.reset_below(Level::Department);
        }
        self.options(Level::Arrondissement)
    }

    /// Select an arrondissement and return its communes.
    pub fn select_arrondissement(&mut self, code: &str) -> Vec<Place<'c>> {
        if self.arrondissement.as_deref() != Some(code) {
            self.arrondissement = Some(code.to_string());
            self.reset_below(Level::Arrondissement);
        }
        self.options(Level::Commune)
    }

    pub fn select_commune(&mut self, code: &str) {
        self.commune = Some(code.to_string());
    }

    pub fn clear(&mut self) {
        self.region = None;
        self.reset_below(Level::Region);
    }

    pub fn selected(&self, level: Level) -> Option<&str> {
        match level {
            Level::Region => self.region.as_deref(),
            Level::Department => self.department.as_deref(),
            Level::Arrondissement => self.arrondissement.as_deref(),
            Level::Commune => self.commune.as_deref(),
        }
    }

    /// Options for `level`, resolved from the current ancestor selections.
    /// Empty while any ancestor is unset.
    pub fn options(&self, level: Level) -> Vec<Place<'c>> {
        let catalog = self.catalog;
        match level {
            Level::Region => catalog.list_regions(),
            Level::Department => match &self.region {
                Some(r) => catalog.list_departments(r),
                None => Vec::new(),
            },
            Level::Arrondissement => match (&self.region, &self.department) {
                (Some(r), Some(d)) => catalog.list_arrondissements(r, d),
                _ => Vec::new(),
            },
            Level::Commune => match (&self.region, &self.department, &self.arrondissement) {
                (Some(r), Some(d), Some(a)) => catalog.list_communes(r, d, a),
                _ => Vec::new(),
            },
        }
    }

    pub fn first_unset_level(&self) -> Option<Level> {
        Level::ALL
            .into_iter()
            .find(|&level| self.selected(level).is_none())
    }

    /// The full tuple, once every level has a selection.
    pub fn tuple(&self) -> Option<LocationTuple> {
        Some(LocationTuple::new(
            self.region.as_deref()?,
            self.department.as_deref()?,
            self.arrondissement.as_deref()?,
            self.commune.as_deref()?,
        ))
    }

    pub fn is_valid(&self) -> bool {
        self.tuple()
            .is_some_and(|location| self.catalog.is_valid_tuple(&location))
    }

    fn reset_below(&mut self, level: Level) {
        if level < Level::Department {
            self.department = None;
        }
        if level < Level::Arrondissement {
            self.arrondissement = None;
        }
        if level < Level::Commune {
            self.commune = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_selection_is_valid() {
        let mut selection = CascadeSelection::new(crate::catalog::builtin());
        assert_eq!(selection.first_unset_level(), Some(Level::Region));

        let departments = selection.select_region("DAKAR");
        assert_eq!(departments.len(), 4);
        selection.select_department("01");
        let communes = selection.select_arrondissement("02");
        assert!(communes.iter().any(|c| c.name == "MEDINA"));
        selection.select_commune("02");

        assert_eq!(selection.first_unset_level(), None);
        assert!(selection.is_valid());
    }

    #[test]
    fn test_reselecting_same_region_keeps_descendants() {
        let mut selection = CascadeSelection::new(crate::catalog::builtin());
        selection.select_region("DAKAR");
        selection.select_department("02");
        selection.select_region("DAKAR");
        assert_eq!(selection.selected(Level::Department), Some("02"));
    }

    #[test]
    fn test_changing_arrondissement_resets_commune() {
        let mut selection = CascadeSelection::new(crate::catalog::builtin());
        selection.select_region("DAKAR");
        selection.select_department("01");
        selection.select_arrondissement("02");
        selection.select_commune("02");
        let goree = selection.select_arrondissement("05");
        assert_eq!(goree.len(), 1);
        assert_eq!(selection.selected(Level::Commune), None);
        assert!(selection.tuple().is_none());
        assert!(!selection.is_valid());
    }

    #[test]
    fn test_clear() {
        let mut selection = CascadeSelection::new(crate::catalog::builtin());
        selection.select_region("KOLDA");
        selection.select_department("03");
        selection.clear();
        assert_eq!(selection.first_unset_level(), Some(Level::Region));
        assert!(selection.options(Level::Department).is_empty());
    }
}
