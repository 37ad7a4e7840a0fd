// Domain layer: models and ports. Nothing here knows about clap or TOML.

pub mod model;
pub mod ports;
