// Domain layer: wire models, view patches, and ports (interfaces).
// No dependencies on the adapters or the engine.

pub mod model;
pub mod ports;
pub mod view;
