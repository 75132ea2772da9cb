//! Crate-level error types shared by authentication, transport, and provisioning.

// self
use crate::{_prelude::*, api::ApiCall};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The platform answered with a status the call does not tolerate.
	#[error("Ace call `{call}` returned HTTP {status}.")]
	UnexpectedStatus {
		/// Call that produced the response.
		call: ApiCall,
		/// HTTP status code.
		status: u16,
		/// Response body, lossily decoded as UTF-8.
		body: String,
	},
	/// The response body could not be decoded into the expected shape.
	#[error("Ace call `{call}` returned a malformed body.")]
	Decode {
		/// Call that produced the response.
		call: ApiCall,
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// Returns the HTTP status carried by [`Error::UnexpectedStatus`], if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::UnexpectedStatus { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before any request is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// One of the startup credentials is blank.
	#[error("Sample cannot run without address and credentials: `{field}` is blank.")]
	MissingCredential {
		/// Name of the blank field.
		field: &'static str,
	},
	/// Base address is not an absolute HTTP(S) URL.
	#[error("Base address `{address}` is not a valid HTTP(S) URL.")]
	InvalidBaseAddress {
		/// Normalized address that failed validation.
		address: String,
	},
	/// Endpoint URL could not be assembled from the base address.
	#[error("Endpoint `{path}` cannot be joined to the base address.")]
	InvalidEndpoint {
		/// Path that failed to join.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Cookie-session authentication needs a transport that keeps cookies.
	#[error("Cookie-session authentication requires a transport with a cookie store.")]
	CookieStoreRequired,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Request body could not be serialized.
	#[error("Request body for `{call}` could not be serialized.")]
	Encode {
		/// Call whose body failed to serialize.
		call: ApiCall,
		/// Serializer failure.
		#[source]
		source: serde_json::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling `{call}`.")]
	Network {
		/// Call that was in flight.
		call: ApiCall,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error for the given call.
	pub fn network(call: ApiCall, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { call, source: Box::new(src) }
	}
}
