// Domain layer: brewing parameters, recipe outputs and the ports the form talks through.

pub mod model;
pub mod ports;
