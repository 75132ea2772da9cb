//! Transport primitives for Ace REST calls.
//!
//! [`AceHttpClient`] is the crate's only dependency on an HTTP stack. It moves fully built
//! [`ApiRequest`] values over the wire and hands back the raw [`ApiResponse`]; status
//! classification and JSON decoding stay in [`AceClient`](crate::client::AceClient). The
//! reqwest-backed [`ReqwestHttpClient`] is enabled by the default `reqwest` feature.

// self
use crate::{_prelude::*, api::ApiMethod};

/// Boxed future returned by [`AceHttpClient::execute`].
pub type TransportFuture<'a, E> = Pin<Box<dyn Future<Output = Result<ApiResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of issuing Ace REST calls.
///
/// Implementations must be `Send + Sync + 'static` so an authenticated
/// [`AceClient`](crate::client::AceClient) can be shared behind an [`Arc`].
pub trait AceHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Whether cookies set by a response are stored and resent on later requests.
	///
	/// Cookie-session authentication refuses transports that return `false`.
	fn persists_cookies(&self) -> bool;

	/// Sends `request` and resolves with the response status and body.
	///
	/// Non-success statuses are not errors at this layer.
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: ApiMethod,
	/// Absolute endpoint URL.
	pub url: Url,
	/// Header name/value pairs, names in lowercase.
	pub headers: Vec<(&'static str, String)>,
	/// Optional JSON body.
	pub body: Option<Vec<u8>>,
}
impl ApiRequest {
	/// Returns the first value for `name`, if present.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Raw response captured by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Creates a response from a status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Whether the status is in the `2xx` range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Whether the status is `404 Not Found`.
	pub fn is_not_found(&self) -> bool {
		self.status == 404
	}

	/// Body decoded lossily as UTF-8.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Thin wrapper around [`ReqwestClient`] that records whether it carries a cookie store.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
	client: ReqwestClient,
	cookies: Option<Arc<reqwest::cookie::Jar>>,
}
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client without cookie persistence (ApiKey scheme).
	pub fn new() -> Result<Self, crate::error::ConfigError> {
		let client = ReqwestClient::builder().build()?;

		Ok(Self { client, cookies: None })
	}

	/// Builds a client backed by a fresh cookie jar (cookie-session scheme).
	pub fn with_cookie_store() -> Result<Self, crate::error::ConfigError> {
		let jar = Arc::new(reqwest::cookie::Jar::default());
		let client = ReqwestClient::builder().cookie_provider(jar.clone()).build()?;

		Ok(Self { client, cookies: Some(jar) })
	}

	/// Wraps an existing client; `jar` must be the cookie provider the client was built with.
	pub fn with_client(client: ReqwestClient, jar: Option<Arc<reqwest::cookie::Jar>>) -> Self {
		Self { client, cookies: jar }
	}

	/// Cookie jar shared with the underlying client, when enabled.
	pub fn cookie_jar(&self) -> Option<&Arc<reqwest::cookie::Jar>> {
		self.cookies.as_ref()
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.client
	}
}
#[cfg(feature = "reqwest")]
impl AceHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn persists_cookies(&self) -> bool {
		self.cookies.is_some()
	}

	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.client.clone();

		Box::pin(async move {
			let method = match request.method {
				ApiMethod::Get => reqwest::Method::GET,
				ApiMethod::Post => reqwest::Method::POST,
				ApiMethod::Put => reqwest::Method::PUT,
			};
			let mut builder = client.request(method, request.url);

			for (name, value) in request.headers {
				builder = builder.header(name, value);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok::<_, ReqwestError>(ApiResponse { status, body })
		})
	}
}
