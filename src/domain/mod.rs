// Domain layer: the event model and the ports the session is driven through.

pub mod model;
pub mod ports;
