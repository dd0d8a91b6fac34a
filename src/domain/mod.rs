// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std and the serde/clap derives on the models.

pub mod model;
pub mod ports;
