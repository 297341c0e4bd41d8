use crate::{DEFAULT_SCHEME, Endpoint};

/// Builder for `Endpoint`.
///
/// Create via:
/// - `EndpointBuilder::default()`
/// - `Endpoint::builder()`
#[derive(Debug, Default, Clone)]
pub struct EndpointBuilder {
	scheme: Option<String>,
	port: Option<u16>,
	service: Option<String>,
}

/// Builder methods
impl EndpointBuilder {
	/// Set the scheme, `https` when not set. May be given with its `://`.
	pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
		self.scheme = Some(scheme.into());
		self
	}

	/// Set the port. When not set, the protocol default port applies.
	pub fn with_port(mut self, port: u16) -> Self {
		self.port = Some(port);
		self
	}

	/// Set the service path shared by all the API calls.
	pub fn with_service(mut self, service: impl Into<String>) -> Self {
		self.service = Some(service.into());
		self
	}
}

impl EndpointBuilder {
	/// Build an `Endpoint` targeting `host`.
	pub fn build(self, host: impl Into<String>) -> Endpoint {
		let scheme = self.scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_string());
		let service = self.service.unwrap_or_default();

		Endpoint::from_parts(scheme, host, self.port, service)
	}
}

// region:    --- Tests


// endregion: --- Tests
