//! Nested, serde-friendly description of a catalog.
//!
//! This is the authoring shape (what a JSON or TOML catalog file contains).
//! [`Catalog::from_source`](crate::Catalog::from_source) flattens it into the
//! arena used for queries. Declaration order is significant and preserved.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSource {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub regions: Vec<RegionSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSource {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub departments: Vec<DepartmentSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentSource {
    /// Storage key from the authoring dataset, distinct from the display `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arrondissements: Vec<ArrondissementSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrondissementSource {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub communes: Vec<CommuneSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommuneSource {
    pub code: String,
    #[serde(default)]
    pub name: String,
}
