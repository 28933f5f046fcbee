// Domain layer: pass-through models and the ports of the wrapped ML services.

pub mod model;
pub mod ports;
