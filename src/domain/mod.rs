// Domain layer: the student record, its derived grade, and the ports the pipeline is built on.

pub mod model;
pub mod ports;
