use crate::domain::model::{Level, Place, ResolvedLocation};

/// Read-only view over a geographic hierarchy, as consumed by form code.
///
/// Every method is total: unknown codes produce an empty list, `None` or
/// `false`, never an error.
pub trait HierarchyResolver {
    fn list_regions(&self) -> Vec<Place<'_>>;

    fn list_departments(&self, region: &str) -> Vec<Place<'_>>;

    fn list_arrondissements(&self, region: &str, department: &str) -> Vec<Place<'_>>;

    fn list_communes(&self, region: &str, department: &str, arrondissement: &str)
        -> Vec<Place<'_>>;

    fn list_communes_by_department(&self, region: &str, department: &str) -> Vec<Place<'_>>;

    fn resolve_location(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        commune: &str,
    ) -> Option<ResolvedLocation<'_>>;

    fn first_unresolved_level(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        commune: &str,
    ) -> Option<Level>;

    fn is_valid_location(
        &self,
        region: &str,
        department: &str,
        arrondissement: &str,
        commune: &str,
    ) -> bool {
        self.resolve_location(region, department, arrondissement, commune)
            .is_some()
    }
}
