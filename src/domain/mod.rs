// Domain layer: records and ports. No transport or storage details in here.

pub mod model;
pub mod ports;
