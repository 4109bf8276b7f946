// Domain layer: core models and ports. No dependencies beyond std/serde/async-trait.

pub mod model;
pub mod ports;
