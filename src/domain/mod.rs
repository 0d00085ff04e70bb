// Domain layer: request/result models and the ports the adapter depends on.

pub mod model;
pub mod ports;
