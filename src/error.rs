use derive_more::From;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
	// -- Registry
	EndpointNotFound {
		name: String,
	},
	NoDefaultEndpoint,

	// -- Url
	InvalidUrl {
		url: String,
		cause: url::ParseError,
	},
	UrlWithoutHost {
		url: String,
	},

	// -- Config
	ConfigDirNotFound,
	ConfigRead {
		path: PathBuf,
		cause: std::io::Error,
	},
	ConfigWrite {
		path: PathBuf,
		cause: std::io::Error,
	},

	// -- Externals
	#[from]
	UrlParse(url::ParseError),
	#[from]
	SerdeJson(serde_json::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
