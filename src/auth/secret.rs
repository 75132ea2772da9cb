//! [`Secret`], the holder for every credential the sample touches.
//!
//! Three values pass through it: the cookie-session password read at startup, the platform
//! ApiKey, and the verification token returned by the login call. Each is unwrapped in exactly
//! one place: the login body, the `Authorization: ApiKey` header, or the
//! `X-RequestVerificationToken` header. Everywhere else, including `Debug` output of
//! [`Credentials`](crate::config::Credentials), [`AuthScheme`](crate::auth::AuthScheme), and
//! [`AceClient`](crate::client::AceClient), the value prints as `<redacted>`.

// self
use crate::_prelude::*;

/// Session password, ApiKey, or verification token.
///
/// Serializes as the bare string, so the login body carries the password the platform expects
/// and `{"token":"…"}` decodes straight into [`LoginResponse`](crate::auth::LoginResponse).
/// `Default` is the empty value left behind by an unset builder field.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);
impl Secret {
	/// Wraps a credential read from configuration or a login response.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the plain value for a request body or header. Never pass it to a logger.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Secret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = Secret::new("key-123");

		assert_eq!(format!("{secret:?}"), "Secret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "key-123");
	}

	#[test]
	fn unset_credential_defaults_to_blank() {
		assert!(Secret::default().expose().is_empty());
		assert_eq!(format!("{:?}", Secret::default()), "Secret(\"<redacted>\")");
	}

	#[test]
	fn serde_keeps_the_plain_value() {
		let secret: Secret =
			serde_json::from_str("\"tok-1\"").expect("Secret should deserialize from a string.");

		assert_eq!(secret.expose(), "tok-1");
		assert_eq!(
			serde_json::to_string(&secret).expect("Secret should serialize."),
			"\"tok-1\""
		);
	}
}
