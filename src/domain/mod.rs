// Domain layer: request/page shapes and the outbound port.

pub mod model;
pub mod ports;
