//! Startup configuration: the platform address plus both credential sets.
//!
//! All four values are mandatory and validated once by [`CredentialsBuilder::build`] before
//! any request is issued.

// self
use crate::{
	_prelude::*,
	auth::{AuthScheme, Secret},
	error::ConfigError,
};

/// Normalized platform address without trailing `/` or `\` separators.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BaseAddress(String);
impl BaseAddress {
	/// Normalizes and validates the provided address.
	pub fn new(raw: impl AsRef<str>) -> Result<Self, ConfigError> {
		let view = raw.as_ref().trim();

		if view.is_empty() {
			return Err(ConfigError::MissingCredential { field: "address" });
		}

		let normalized = strip_trailing_separators(view);
		let valid = Url::parse(normalized)
			.map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
			.unwrap_or(false);

		if !valid {
			return Err(ConfigError::InvalidBaseAddress { address: normalized.to_owned() });
		}

		Ok(Self(normalized.to_owned()))
	}

	/// Returns the normalized address.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Appends an absolute endpoint path to the address.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		Url::parse(&format!("{}{path}", self.0))
			.map_err(|source| ConfigError::InvalidEndpoint { path: path.to_owned(), source })
	}
}
impl AsRef<str> for BaseAddress {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Debug for BaseAddress {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "BaseAddress({})", self.0)
	}
}
impl Display for BaseAddress {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Strips every trailing `/` or `\` so repeated normalization is a no-op.
pub fn strip_trailing_separators(address: &str) -> &str {
	address.trim_end_matches(['/', '\\'])
}

/// Validated startup credentials for both authentication schemes.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Platform address.
	pub address: BaseAddress,
	/// Login for the cookie-session scheme.
	pub login: String,
	/// Password for the cookie-session scheme.
	pub password: Secret,
	/// Key for the ApiKey scheme.
	pub api_key: Secret,
}
impl Credentials {
	/// Creates a new builder with every field unset.
	pub fn builder() -> CredentialsBuilder {
		CredentialsBuilder::default()
	}

	/// Cookie-session scheme using the login and password.
	pub fn session_scheme(&self) -> AuthScheme {
		AuthScheme::CookieSession { login: self.login.clone(), password: self.password.clone() }
	}

	/// ApiKey scheme using the platform key.
	pub fn api_key_scheme(&self) -> AuthScheme {
		AuthScheme::ApiKey { key: self.api_key.clone() }
	}
}

/// Builder for [`Credentials`] values.
#[derive(Debug, Default)]
pub struct CredentialsBuilder {
	/// Raw platform address.
	pub address: Option<String>,
	/// Cookie-session login.
	pub login: Option<String>,
	/// Cookie-session password.
	pub password: Option<Secret>,
	/// ApiKey credential.
	pub api_key: Option<Secret>,
}
impl CredentialsBuilder {
	/// Sets the platform address.
	pub fn address(mut self, address: impl Into<String>) -> Self {
		self.address = Some(address.into());

		self
	}

	/// Sets the cookie-session login.
	pub fn login(mut self, login: impl Into<String>) -> Self {
		self.login = Some(login.into());

		self
	}

	/// Sets the cookie-session password.
	pub fn password(mut self, password: impl Into<String>) -> Self {
		self.password = Some(Secret::new(password));

		self
	}

	/// Sets the ApiKey credential.
	pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
		self.api_key = Some(Secret::new(api_key));

		self
	}

	/// Consumes the builder, rejecting blank values before normalizing the address.
	pub fn build(self) -> Result<Credentials, ConfigError> {
		let address = require("address", self.address.as_deref())?;
		let login = require("login", self.login.as_deref())?;

		require("password", self.password.as_ref().map(Secret::expose))?;
		require("api_key", self.api_key.as_ref().map(Secret::expose))?;

		Ok(Credentials {
			address: BaseAddress::new(address)?,
			login: login.to_owned(),
			password: self.password.unwrap_or_default(),
			api_key: self.api_key.unwrap_or_default(),
		})
	}
}

fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
	match value {
		Some(view) if !view.trim().is_empty() => Ok(view),
		_ => Err(ConfigError::MissingCredential { field }),
	}
}
