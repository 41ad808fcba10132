// Domain layer: course models and ports to the host platform.

pub mod model;
pub mod ports;
