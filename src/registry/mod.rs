//! Registry module.
//!
//! Named endpoints for multi-server apps, and their JSON configuration file.

// region:    --- Modules

mod endpoint_registry;
mod registry_config;

pub use endpoint_registry::*;
pub use registry_config::*;

// endregion: --- Modules
