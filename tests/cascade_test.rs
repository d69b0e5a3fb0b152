use geo_cascade::catalog;
use geo_cascade::{CascadeSelection, Level, LocationTuple};

#[test]
fn test_region_change_clears_department() {
    let catalog = catalog::builtin();
    let mut selection = CascadeSelection::new(catalog);

    selection.select_region("DAKAR");
    selection.select_department("04");
    selection.select_arrondissement("03");
    selection.select_commune("02");
    assert!(selection.is_valid());

    // KEDOUGOU has no department coded "04".
    let departments = selection.select_region("KEDOUGOU");
    assert!(departments.iter().all(|d| d.code != "04"));
    assert_eq!(selection.selected(Level::Department), None);
    assert_eq!(selection.selected(Level::Arrondissement), None);
    assert_eq!(selection.selected(Level::Commune), None);
    assert_eq!(selection.first_unset_level(), Some(Level::Department));
    assert!(selection.options(Level::Arrondissement).is_empty());
}

#[test]
fn test_region_change_clears_even_when_code_is_shared() {
    let catalog = catalog::builtin();
    let mut selection = CascadeSelection::new(catalog);

    selection.select_region("DAKAR");
    selection.select_department("01");
    selection.select_arrondissement("02");
    selection.select_commune("02");

    // ZIGUINCHOR also has a department "01", but it is a different one.
    let departments = selection.select_region("ZIGUINCHOR");
    assert!(departments.iter().any(|d| d.code == "01"));
    assert_eq!(selection.selected(Level::Department), None);

    // Had the stale tuple been kept it would pass validation by coincidence.
    let stale = LocationTuple::new("ZIGUINCHOR", "01", "02", "02");
    assert!(catalog.is_valid_tuple(&stale));
    assert_eq!(
        catalog
            .resolve_location("ZIGUINCHOR", "01", "02", "02")
            .map(|l| l.commune.name),
        Some("COUBALAN")
    );
    assert!(!selection.is_valid());
}

#[test]
fn test_department_change_reresolves_arrondissements() {
    let catalog = catalog::builtin();
    let mut selection = CascadeSelection::new(catalog);

    selection.select_region("LOUGA");
    let first = selection.select_department("01");
    selection.select_arrondissement("02");
    let second = selection.select_department("02");

    assert_ne!(first, second);
    assert_eq!(second, catalog.list_arrondissements("LOUGA", "02"));
    assert_eq!(selection.selected(Level::Arrondissement), None);
    assert!(selection.options(Level::Commune).is_empty());
}

#[test]
fn test_options_track_selection() {
    let catalog = catalog::builtin();
    let mut selection = CascadeSelection::new(catalog);
    assert_eq!(selection.options(Level::Region), catalog.list_regions());
    assert!(selection.options(Level::Department).is_empty());

    selection.select_region("FATICK");
    selection.select_department("02");
    let communes = selection.select_arrondissement("03");
    assert_eq!(communes, catalog.list_communes("FATICK", "02", "03"));
    assert_eq!(selection.options(Level::Commune), communes);

    selection.select_commune("04");
    assert_eq!(
        selection.tuple(),
        Some(LocationTuple::new("FATICK", "02", "03", "04"))
    );
    assert!(selection.is_valid());
}

#[test]
fn test_unknown_selection_gives_empty_options_not_errors() {
    let catalog = catalog::builtin();
    let mut selection = CascadeSelection::new(catalog);
    assert!(selection.select_region("ATLANTIS").is_empty());
    assert!(selection.select_department("01").is_empty());
    assert!(selection.select_arrondissement("01").is_empty());
    selection.select_commune("01");
    assert!(selection.tuple().is_some());
    assert!(!selection.is_valid());
}
