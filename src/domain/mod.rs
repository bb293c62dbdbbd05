// Domain layer: core models and ports. Only std/serde/async-trait here.

pub mod model;
pub mod ports;
