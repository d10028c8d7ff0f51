// Domain layer: value types shared by the tools and the ports the tools depend on.

pub mod model;
pub mod ports;
