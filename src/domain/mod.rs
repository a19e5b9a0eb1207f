// Domain layer: the cake entity, drill records and the output port.

pub mod model;
pub mod ports;
