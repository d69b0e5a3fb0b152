// Domain layer: hierarchy models and the resolver port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
