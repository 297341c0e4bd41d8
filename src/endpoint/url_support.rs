//! `url` interop for `Endpoint`, for transports that take a parsed `Url`.

use crate::{Endpoint, Error, Result};
use std::str::FromStr;
use url::Url;

impl Endpoint {
	/// Parses [`Endpoint::full_path`] as a `Url`.
	pub fn full_url(&self, api: &str) -> Result<Url> {
		let full_path = self.full_path(api);
		Url::parse(&full_path).map_err(|cause| Error::InvalidUrl { url: full_path, cause })
	}

	/// Creates an endpoint from a parsed url.
	///
	/// Only an explicit, non-default port is kept. The url path, without its leading `/`,
	/// becomes the service. Query and fragment are ignored.
	pub fn from_url(url: &Url) -> Result<Self> {
		let host = url.host_str().ok_or_else(|| Error::UrlWithoutHost { url: url.to_string() })?;
		let service = url.path().strip_prefix('/').unwrap_or(url.path());

		Ok(Self::from_parts(url.scheme(), host, url.port(), service))
	}
}

impl FromStr for Endpoint {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let url = Url::parse(s)?;
		Self::from_url(&url)
	}
}

// region:    --- Tests


// endregion: --- Tests
