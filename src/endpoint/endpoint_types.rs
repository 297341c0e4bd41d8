use crate::EndpointBuilder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::hash::{Hash, Hasher};

pub const DEFAULT_SCHEME: &str = "https";

const SCHEME_DELIMITER: &str = "://";

/// The target server of network requests.
///
/// Holds the scheme, host and optional port of a backend server, plus a `service`
/// path shared by every API call made against it. Usually an app needs a single
/// `Endpoint`, but several can coexist to talk to different servers.
///
/// `scheme`, `host` and `port` are fixed once built; only `service` can change.
///
/// Two endpoints are equal when they render the same base path, so the `service`
/// is not part of the comparison, while the same host on another port is a
/// different endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
	#[serde(default = "default_scheme")]
	scheme: String,
	host: String,
	#[serde(default)]
	port: Option<u16>,
	#[serde(default)]
	service: String,
}

fn default_scheme() -> String {
	DEFAULT_SCHEME.to_string()
}

// region:    --- Constructors

impl Endpoint {
	/// Creates an `https` endpoint for `host`, with no port and an empty service.
	pub fn new(host: impl Into<String>) -> Self {
		Self::from_parts(DEFAULT_SCHEME, host, None, "")
	}

	/// Creates an endpoint from all of its parts.
	///
	/// None of the parts need a `/`. Nothing is validated: malformed parts
	/// give malformed paths, never an error.
	pub fn from_parts(
		scheme: impl Into<String>,
		host: impl Into<String>,
		port: Option<u16>,
		service: impl Into<String>,
	) -> Self {
		Self {
			scheme: scheme.into(),
			host: host.into(),
			port,
			service: service.into(),
		}
	}

	/// Returns a builder for the optional parts (scheme, port, service).
	pub fn builder() -> EndpointBuilder {
		EndpointBuilder::default()
	}
}

// endregion: --- Constructors

// region:    --- Getters & Setters

impl Endpoint {
	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn port(&self) -> Option<u16> {
		self.port
	}

	pub fn service(&self) -> &str {
		&self.service
	}

	pub fn set_service(&mut self, service: impl Into<String>) {
		self.service = service.into();
	}

	/// Chainable version of [`Endpoint::set_service`].
	pub fn with_service(mut self, service: impl Into<String>) -> Self {
		self.set_service(service);
		self
	}
}

// endregion: --- Getters & Setters

// region:    --- Paths

impl Endpoint {
	/// The server root, `scheme://host[:port]/`, always ending with a single `/`.
	///
	/// A `scheme` already carrying `://` (e.g. `"http://"`) is used as the prefix as is.
	pub fn base_path(&self) -> String {
		let mut path = if self.scheme.contains(SCHEME_DELIMITER) {
			format!("{}{}", self.scheme, self.host)
		} else {
			format!("{}{SCHEME_DELIMITER}{}", self.scheme, self.host)
		};
		if let Some(port) = self.port {
			path.push_str(&format!(":{port}"));
		}
		path.push('/');
		path
	}

	/// The base path followed by the `service`, with no separator added.
	pub fn base_path_with_service(&self) -> String {
		let base_path = self.base_path();
		if self.service.is_empty() {
			base_path
		} else {
			base_path + &self.service
		}
	}

	/// Composes the full request URL for `api`.
	///
	/// A `/` is inserted unless `api` already starts with one. The result is not
	/// normalized: with an empty service, the base path trailing `/` is kept, so
	/// `"users"` and `"/users"` both give `https://host//users`.
	pub fn full_path(&self, api: &str) -> String {
		let path_with_service = self.base_path_with_service();
		if api.starts_with('/') {
			path_with_service + api
		} else {
			format!("{path_with_service}/{api}")
		}
	}
}

// endregion: --- Paths

// region:    --- Traits

impl PartialEq for Endpoint {
	fn eq(&self, other: &Self) -> bool {
		self.base_path() == other.base_path()
	}
}

impl Eq for Endpoint {}

impl Hash for Endpoint {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.base_path().hash(state);
	}
}

impl core::fmt::Display for Endpoint {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.base_path_with_service())
	}
}

// endregion: --- Traits

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_base_path_default_scheme() {
		let endpoint = Endpoint::new("api.example.com");

		assert_eq!(endpoint.scheme(), "https");
		assert_eq!(endpoint.port(), None);
		assert_eq!(endpoint.service(), "");
		assert_eq!(endpoint.base_path(), "https://api.example.com/");
	}

	#[test]
	fn test_base_path_with_port() {
		let endpoint = Endpoint::from_parts("https", "api.example.com", Some(8443), "");

		assert_eq!(endpoint.base_path(), "https://api.example.com:8443/");
	}

	#[test]
	fn test_base_path_scheme_with_delimiter() {
		let endpoint = Endpoint::from_parts("http://", "10.0.0.2", None, "");

		assert_eq!(endpoint.base_path(), "http://10.0.0.2/");
	}

	#[test]
	fn test_base_path_malformed_host_kept() {
		let endpoint = Endpoint::new("/api.example.com");

		assert_eq!(endpoint.base_path(), "https:///api.example.com/");
	}

	#[test]
	fn test_base_path_with_service() {
		let mut endpoint = Endpoint::new("api.example.com");
		assert_eq!(endpoint.base_path_with_service(), endpoint.base_path());

		endpoint.set_service("v2");
		assert_eq!(endpoint.base_path_with_service(), "https://api.example.com/v2");

		endpoint.set_service("v3/");
		assert_eq!(endpoint.base_path_with_service(), "https://api.example.com/v3/");
	}

	#[test]
	fn test_full_path_without_service_keeps_double_slash() {
		let endpoint = Endpoint::new("api.example.com");

		assert_eq!(endpoint.full_path("/users"), "https://api.example.com//users");
		assert_eq!(endpoint.full_path("users"), "https://api.example.com//users");
	}

	#[test]
	fn test_full_path_with_service() {
		let endpoint = Endpoint::new("api.example.com").with_service("v1");

		assert_eq!(endpoint.full_path("/users"), "https://api.example.com/v1/users");
		assert_eq!(endpoint.full_path("users"), "https://api.example.com/v1/users");
		assert_eq!(endpoint.full_path(""), "https://api.example.com/v1/");
	}

	#[test]
	fn test_eq_ignores_service() {
		let a = Endpoint::new("api.example.com").with_service("a");
		let b = Endpoint::new("api.example.com").with_service("b");

		assert_eq!(a, b);
	}

	#[test]
	fn test_eq_port_matters() {
		let with_port = Endpoint::from_parts("https", "api.example.com", Some(80), "");
		let without_port = Endpoint::new("api.example.com");

		assert_ne!(with_port, without_port);
	}

	#[test]
	fn test_eq_rendered_scheme() {
		// -- Both render `http://host/`
		let plain = Endpoint::from_parts("http", "host", None, "");
		let delimited = Endpoint::from_parts("http://", "host", None, "");

		assert_eq!(plain, delimited);
	}

	#[test]
	fn test_hash_follows_eq() {
		let mut set = HashSet::new();
		set.insert(Endpoint::new("api.example.com").with_service("a"));
		set.insert(Endpoint::new("api.example.com").with_service("b"));
		set.insert(Endpoint::from_parts("https", "api.example.com", Some(8080), ""));

		assert_eq!(set.len(), 2);
	}

	#[test]
	fn test_display_includes_service() {
		let endpoint = Endpoint::new("api.example.com").with_service("v1");

		assert_eq!(endpoint.to_string(), "https://api.example.com/v1");
	}

	#[test]
	fn test_serde_field_mapping() -> Result<(), serde_json::Error> {
		let endpoint = Endpoint::from_parts("http", "localhost", Some(3000), "api");

		let value = serde_json::to_value(&endpoint)?;
		assert_eq!(
			value,
			serde_json::json!({"scheme": "http", "host": "localhost", "port": 3000, "service": "api"})
		);

		let endpoint = Endpoint::new("localhost");
		let value = serde_json::to_value(&endpoint)?;
		assert_eq!(value, serde_json::json!({"scheme": "https", "host": "localhost", "service": ""}));

		Ok(())
	}

	#[test]
	fn test_serde_defaults() -> Result<(), serde_json::Error> {
		let endpoint: Endpoint = serde_json::from_str(r#"{"host": "api.example.com"}"#)?;

		assert_eq!(endpoint.scheme(), "https");
		assert_eq!(endpoint.port(), None);
		assert_eq!(endpoint.service(), "");

		Ok(())
	}

	#[test]
	fn test_serde_missing_host_fails() {
		let res = serde_json::from_str::<Endpoint>(r#"{"scheme": "https"}"#);

		assert!(res.is_err());
	}
}

// endregion: --- Tests
