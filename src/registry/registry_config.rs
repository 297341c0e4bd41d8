use crate::{Endpoint, EndpointRegistry, Error, Result};
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use serde_with::skip_serializing_none;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default config file path.
pub const CONFIG_PATH_ENV: &str = "SERVER_TARGET_CONFIG";

const CONFIG_DIR_NAME: &str = "server-target";
const CONFIG_FILE_NAME: &str = "endpoints.json";

/// On-disk (JSON) form of an [`EndpointRegistry`].
///
/// Endpoints keep the registry registration order.
///
/// ```json
/// {
///   "default": "main",
///   "endpoints": {
///     "main": { "scheme": "https", "host": "api.example.com", "service": "v1" }
///   }
/// }
/// ```
#[skip_serializing_none]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
	#[serde(default)]
	pub default: Option<String>,
	#[serde(default)]
	pub endpoints: IndexMap<String, Endpoint>,
}

/// Paths
impl RegistryConfig {
	/// Resolves the config file path.
	///
	/// Order: `explicit`, then the `SERVER_TARGET_CONFIG` environment variable,
	/// then `<config_dir>/server-target/endpoints.json`.
	pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
		resolve_path_from(explicit, std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir)
	}
}

fn resolve_path_from(
	explicit: Option<&Path>,
	env_path: Option<OsString>,
	config_dir: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf> {
	if let Some(path) = explicit {
		return Ok(path.to_path_buf());
	}
	if let Some(path) = env_path.filter(|p| !p.is_empty()) {
		return Ok(PathBuf::from(path));
	}
	let config_dir = config_dir().ok_or(Error::ConfigDirNotFound)?;
	Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load & Save
impl RegistryConfig {
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|cause| Error::ConfigRead {
			path: path.to_path_buf(),
			cause,
		})?;
		let config: Self = serde_json::from_str(&content)?;

		tracing::debug!(path = %path.display(), endpoints = config.endpoints.len(), "registry config loaded");

		Ok(config)
	}

	/// Like [`RegistryConfig::load`], but a missing file gives an empty config.
	pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		if !path.exists() {
			tracing::debug!(path = %path.display(), "no registry config, using empty one");
			return Ok(Self::default());
		}
		Self::load(path)
	}

	/// Writes the config as pretty JSON, creating the parent directories.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let to_write_err = |cause| Error::ConfigWrite {
			path: path.to_path_buf(),
			cause,
		};

		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent).map_err(to_write_err)?;
		}
		let content = serde_json::to_string_pretty(self)?;
		std::fs::write(path, content).map_err(to_write_err)?;

		tracing::debug!(path = %path.display(), endpoints = self.endpoints.len(), "registry config saved");

		Ok(())
	}
}

/// Conversions
impl RegistryConfig {
	/// Builds the registry. Fails if `default` names an unknown endpoint.
	pub fn into_registry(self) -> Result<EndpointRegistry> {
		let mut registry = EndpointRegistry::default();
		for (name, endpoint) in self.endpoints {
			registry.insert(name, endpoint);
		}
		if let Some(default) = self.default {
			registry.set_default(default)?;
		}
		Ok(registry)
	}
}

impl TryFrom<RegistryConfig> for EndpointRegistry {
	type Error = Error;

	fn try_from(config: RegistryConfig) -> Result<Self> {
		config.into_registry()
	}
}

// region:    --- Tests


// endregion: --- Tests
