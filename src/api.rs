//! Catalogue of the Ace REST calls used by the sample.
//!
//! Every outbound request is tagged with an [`ApiCall`] so errors, spans, and metrics share
//! one stable label per endpoint. Path helpers return absolute paths that are appended to the
//! configured [`BaseAddress`](crate::config::BaseAddress).

// self
use crate::_prelude::*;

/// Session login endpoint (cookie-session scheme only).
pub const LOGIN_PATH: &str = "/api/public/v1/auth/local/login";
/// Work item collection endpoint.
pub const WORK_ITEMS_PATH: &str = "/api/v1/wi/";

/// HTTP methods issued by the sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
}
impl ApiMethod {
	/// Returns the method token as sent on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiMethod::Get => "GET",
			ApiMethod::Post => "POST",
			ApiMethod::Put => "PUT",
		}
	}
}
impl Display for ApiMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// REST calls performed against the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiCall {
	/// `POST /api/public/v1/auth/local/login`
	Login,
	/// `POST /api/v1/wi/`
	CreateWorkItem,
	/// `GET /api/v1/wi/{id}/library/families/{code}`
	GetFamily,
	/// `PUT /api/v1/wi/{id}/close`
	CloseWorkItem,
	/// `POST /api/v1/wi/{id}/library/families`
	CreateFamily,
	/// `PUT /api/v1/wi/{id}/promote`
	PromoteWorkItem,
}
impl ApiCall {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiCall::Login => "login",
			ApiCall::CreateWorkItem => "create_work_item",
			ApiCall::GetFamily => "get_family",
			ApiCall::CloseWorkItem => "close_work_item",
			ApiCall::CreateFamily => "create_family",
			ApiCall::PromoteWorkItem => "promote_work_item",
		}
	}

	/// Method used by the call.
	pub const fn method(self) -> ApiMethod {
		match self {
			ApiCall::GetFamily => ApiMethod::Get,
			ApiCall::CloseWorkItem | ApiCall::PromoteWorkItem => ApiMethod::Put,
			ApiCall::Login | ApiCall::CreateWorkItem | ApiCall::CreateFamily => ApiMethod::Post,
		}
	}

	/// Whether a `404 Not Found` answer is an expected outcome rather than a failure.
	pub const fn tolerates_not_found(self) -> bool {
		matches!(self, ApiCall::GetFamily)
	}
}
impl Display for ApiCall {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// `/api/v1/wi/{id}/library/families/{code}`
pub fn family_path(work_item: i64, code: &str) -> String {
	format!("/api/v1/wi/{work_item}/library/families/{code}")
}

/// `/api/v1/wi/{id}/library/families`
pub fn families_path(work_item: i64) -> String {
	format!("/api/v1/wi/{work_item}/library/families")
}

/// `/api/v1/wi/{id}/close`
pub fn close_path(work_item: i64) -> String {
	format!("/api/v1/wi/{work_item}/close")
}

/// `/api/v1/wi/{id}/promote`
pub fn promote_path(work_item: i64) -> String {
	format!("/api/v1/wi/{work_item}/promote")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn paths_are_scoped_to_the_work_item() {
		assert_eq!(family_path(42, "SAMPLE"), "/api/v1/wi/42/library/families/SAMPLE");
		assert_eq!(families_path(42), "/api/v1/wi/42/library/families");
		assert_eq!(close_path(7), "/api/v1/wi/7/close");
		assert_eq!(promote_path(7), "/api/v1/wi/7/promote");
	}

	#[test]
	fn only_family_lookup_tolerates_not_found() {
		let calls = [
			ApiCall::Login,
			ApiCall::CreateWorkItem,
			ApiCall::GetFamily,
			ApiCall::CloseWorkItem,
			ApiCall::CreateFamily,
			ApiCall::PromoteWorkItem,
		];
		let tolerant = calls.iter().filter(|call| call.tolerates_not_found()).collect::<Vec<_>>();

		assert_eq!(tolerant, [&ApiCall::GetFamily]);
		assert_eq!(ApiCall::CloseWorkItem.method(), ApiMethod::Put);
		assert_eq!(ApiCall::CreateFamily.method().as_str(), "POST");
	}
}
