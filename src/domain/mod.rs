// Domain layer: records passed between the catalog, scorer and report, plus the ports the
// pipeline is generic over.

pub mod model;
pub mod ports;
