//! Endpoint module.
//!
//! Re-exports the endpoint value, its builder, the shared (synchronized) handle,
//! and the `url` interop.

// region:    --- Modules

mod builder;
mod endpoint_types;
mod shared;
mod url_support;

pub use builder::*;
pub use endpoint_types::*;
pub use shared::*;

// endregion: --- Modules
