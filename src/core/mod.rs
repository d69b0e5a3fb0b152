pub mod cascade;
pub mod export;
pub mod lint;
pub mod resolver;
pub mod validator;

pub use crate::catalog::Catalog;
pub use crate::domain::model::{Level, LocationTuple, Place, ResolvedLocation};
pub use crate::domain::ports::HierarchyResolver;
pub use crate::utils::error::Result;
