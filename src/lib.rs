#[cfg(feature = "cli")]
pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use catalog::Catalog;
pub use config::GeoConfig;
pub use crate::core::cascade::CascadeSelection;
pub use crate::core::resolver::{
    list_arrondissements, list_communes, list_communes_by_department, list_departments,
    list_regions,
};
pub use crate::core::validator::{is_valid_location, resolve_location};
pub use domain::model::{Level, LocationTuple, Place, ResolvedLocation};
pub use domain::ports::HierarchyResolver;
pub use utils::error::{GeoError, Result};
