use crate::catalog::Catalog;
use crate::domain::model::{Level, LocationTuple, ResolvedLocation};

impl Catalog {
    /// Resolve a four-part location along a single connected path.
    ///
    /// Short-circuits at the first level that does not resolve under its
    /// already-resolved parent. No partial matches.
    pub fn resolve_location(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        commune: &str,
    ) -> Option<ResolvedLocation<'_>> {
        let region_id = self.region(region)?;
        let department_id = self.department_in(region_id, department)?;
        let arrondissement_id = self.arrondissement_in(department_id, arrondissement)?;
        let commune_id = self.commune_in(arrondissement_id, commune)?;

        Some(ResolvedLocation {
            region: self.region_place(region_id),
            department: self.department_place(department_id),
            arrondissement: self.arrondissement_place(arrondissement_id),
            commune: self.commune_place(commune_id),
        })
    }

    pub fn is_valid_location(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        commune: &str,
    ) -> bool {
        self.resolve_location(region, department, arrondissement, commune)
            .is_some()
    }

    pub fn is_valid_tuple(&self, location: &LocationTuple) -> bool {
        self.is_valid_location(
            &location.region,
            &location.department,
            &location.arrondissement,
            &location.commune,
        )
    }

    /// The first level whose code does not resolve under its parent, or
    /// `None` when the whole path is valid.
    pub fn first_unresolved_level(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        commune: &str,
    ) -> Option<Level> {
        let Some(region_id) = self.region(region) else {
            return Some(Level::Region);
        };
        let Some(department_id) = self.department_in(region_id, department) else {
            return Some(Level::Department);
        };
        let Some(arrondissement_id) = self.arrondissement_in(department_id, arrondissement) else {
            return Some(Level::Arrondissement);
        };
        match self.commune_in(arrondissement_id, commune) {
            Some(_) => None,
            None => Some(Level::Commune),
        }
    }
}

/// [`Catalog::is_valid_location`] on the embedded catalog.
pub fn is_valid_location(
    region: &str,
    department: &str,
    arrondissement: &str,
    commune: &str,
) -> bool {
    crate::catalog::builtin().is_valid_location(region, department, arrondissement, commune)
}

pub fn resolve_location(
    region: &str,
    department: &str,
    arrondissement: &str,
    commune: &str,
) -> Option<ResolvedLocation<'static>> {
    crate::catalog::builtin().resolve_location(region, department, arrondissement, commune)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medina_under_dakar_plateau_is_valid() {
        assert!(is_valid_location("DAKAR", "01", "02", "02"));
        let resolved = resolve_location("DAKAR", "01", "02", "02").unwrap();
        assert_eq!(resolved.arrondissement.name, "DAKAR-PLATEAU");
        assert_eq!(resolved.commune.name, "MEDINA");
        assert_eq!(resolved.to_string(), "Dakar / DAKAR / DAKAR-PLATEAU / MEDINA");
    }

    #[test]
    fn test_commune_code_under_goree_is_invalid() {
        assert!(!is_valid_location("DAKAR", "01", "05", "02"));
        assert!(is_valid_location("DAKAR", "01", "05", "01"));
    }

    #[test]
    fn test_first_unresolved_level() {
        let catalog = crate::catalog::builtin();
        assert_eq!(
            catalog.first_unresolved_level("ATLANTIS", "01", "01", "01"),
            Some(Level::Region)
        );
        assert_eq!(
            catalog.first_unresolved_level("DAKAR", "99", "01", "01"),
            Some(Level::Department)
        );
        assert_eq!(
            catalog.first_unresolved_level("DAKAR", "01", "", "01"),
            Some(Level::Arrondissement)
        );
        assert_eq!(
            catalog.first_unresolved_level("DAKAR", "01", "05", "02"),
            Some(Level::Commune)
        );
        assert_eq!(catalog.first_unresolved_level("DAKAR", "01", "02", "02"), None);
    }

    #[test]
    fn test_is_valid_tuple() {
        let catalog = crate::catalog::builtin();
        assert!(catalog.is_valid_tuple(&LocationTuple::new("THIES", "01", "04", "05")));
        assert!(!catalog.is_valid_tuple(&LocationTuple::new("THIES", "01", "04", "08")));
    }
}
