// Domain layer: request-scoped models and ports (capability interfaces).

pub mod model;
pub mod ports;
