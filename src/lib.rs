//! `server-target` library - describes a backend server and composes request URLs against it.
//!
//! ```
//! use server_target::Endpoint;
//!
//! let endpoint = Endpoint::builder().with_port(8443).with_service("v1").build("api.example.com");
//! assert_eq!(endpoint.full_path("users"), "https://api.example.com:8443/v1/users");
//! ```

// region:    --- Modules

mod endpoint;
mod error;
mod registry;

// -- Flatten
pub use endpoint::*;
pub use error::{Error, Result};
pub use registry::*;

// endregion: --- Modules
