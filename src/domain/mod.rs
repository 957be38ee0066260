// Domain layer: the holder, the counter and method dispatch. No I/O here.

pub mod model;
pub mod ports;
