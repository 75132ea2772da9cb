//! The two ways of obtaining an authenticated [`AceClient`].
//!
//! [`AuthScheme::CookieSession`] logs in with a login and password, keeps the session cookies
//! in the transport, and forwards the verification token from the login response as a header.
//! [`AuthScheme::ApiKey`] needs no round trip and sends a static `Authorization` header.

// self
use crate::{
	_prelude::*,
	api::{ApiCall, LOGIN_PATH},
	auth::Secret,
	client::AceClient,
	config::BaseAddress,
	error::ConfigError,
	http::AceHttpClient,
	obs,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Header carrying the session verification token.
pub const VERIFICATION_TOKEN_HEADER: &str = "x-requestverificationtoken";
/// `Authorization` header name.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Body of the session login call.
///
/// The password stays wrapped in [`Secret`]: it serializes as the plain string the platform
/// expects, while `Debug` output redacts it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
	/// Account login.
	pub username: &'a str,
	/// Account password.
	pub password: &'a Secret,
}

/// Session login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	/// Verification token expected on every later request.
	pub token: Secret,
}

/// Authentication strategy selected at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthScheme {
	/// Login/password session; requires a cookie-persisting transport.
	CookieSession {
		/// Account login.
		login: String,
		/// Account password.
		password: Secret,
	},
	/// Static `Authorization: ApiKey <key>` header.
	ApiKey {
		/// Platform API key.
		key: Secret,
	},
}
impl AuthScheme {
	/// Returns a stable label suitable for logs.
	pub const fn as_str(&self) -> &'static str {
		match self {
			AuthScheme::CookieSession { .. } => "cookie_session",
			AuthScheme::ApiKey { .. } => "api_key",
		}
	}

	/// Whether the transport must keep cookies between calls.
	pub const fn requires_cookies(&self) -> bool {
		matches!(self, AuthScheme::CookieSession { .. })
	}

	/// Produces an authenticated handle over `http_client`.
	///
	/// The cookie-session scheme rejects transports without a cookie store before sending
	/// anything, then fails if the login call does not succeed.
	pub async fn authenticate<C>(
		&self,
		base: BaseAddress,
		http_client: Arc<C>,
	) -> Result<AceClient<C>>
	where
		C: ?Sized + AceHttpClient,
	{
		match self {
			AuthScheme::CookieSession { login, password } => {
				obs::log_progress("Using session login and password authorization.");

				if !http_client.persists_cookies() {
					return Err(ConfigError::CookieStoreRequired.into());
				}

				let client = AceClient::new(base, http_client);
				let body = LoginRequest { username: login, password };
				let response: LoginResponse = client.post(ApiCall::Login, LOGIN_PATH, &body).await?;

				Ok(client.with_header(VERIFICATION_TOKEN_HEADER, response.token.expose()))
			},
			AuthScheme::ApiKey { key } => {
				obs::log_progress("Using ApiKey authorization.");

				Ok(AceClient::new(base, http_client)
					.with_header(AUTHORIZATION_HEADER, format!("ApiKey {}", key.expose())))
			},
		}
	}

	/// Builds the matching reqwest transport and authenticates over it.
	#[cfg(feature = "reqwest")]
	pub async fn connect(&self, base: BaseAddress) -> Result<AceClient<ReqwestHttpClient>> {
		let http_client = if self.requires_cookies() {
			ReqwestHttpClient::with_cookie_store()?
		} else {
			ReqwestHttpClient::new()?
		};

		self.authenticate(base, Arc::new(http_client)).await
	}
}
impl Display for AuthScheme {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
