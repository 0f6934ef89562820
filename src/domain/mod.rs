// Domain layer: core models and ports (interfaces). No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
