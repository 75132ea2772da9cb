//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

// std
use std::{
	collections::VecDeque,
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use parking_lot::Mutex;
// self
use ace_rest_sample::{
	api::ApiMethod,
	config::BaseAddress,
	http::{AceHttpClient, ApiRequest, ApiResponse, TransportFuture},
};

#[derive(Debug)]
pub struct ScriptExhausted;
impl Display for ScriptExhausted {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("No scripted response left.")
	}
}
impl StdError for ScriptExhausted {}

/// Replays canned responses in order and records every request it receives.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
	cookies: bool,
	responses: Mutex<VecDeque<ApiResponse>>,
	requests: Mutex<Vec<ApiRequest>>,
}
impl ScriptedHttpClient {
	pub fn plain() -> Self {
		Self::default()
	}

	pub fn with_cookies() -> Self {
		Self { cookies: true, ..Self::default() }
	}

	pub fn respond(self, status: u16, body: &str) -> Self {
		self.responses.lock().push_back(ApiResponse::new(status, body));

		self
	}

	pub fn into_arc(self) -> Arc<Self> {
		Arc::new(self)
	}

	pub fn requests(&self) -> Vec<ApiRequest> {
		self.requests.lock().clone()
	}

	/// `(method, path)` pairs in the order they were sent.
	pub fn calls(&self) -> Vec<(ApiMethod, String)> {
		self.requests.lock().iter().map(|req| (req.method, req.url.path().to_owned())).collect()
	}
}
impl AceHttpClient for ScriptedHttpClient {
	type TransportError = ScriptExhausted;

	fn persists_cookies(&self) -> bool {
		self.cookies
	}

	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, Self::TransportError> {
		self.requests.lock().push(request);

		let next = self.responses.lock().pop_front();

		Box::pin(async move { next.ok_or(ScriptExhausted) })
	}
}

pub fn base(raw: &str) -> BaseAddress {
	BaseAddress::new(raw).expect("Test base address should be valid.")
}

pub fn family_json(code: &str, description: &str) -> String {
	format!(
		"{{\"code\":\"{code}\",\"description\":\"{description}\",\"lifeCycle\":\"Concept\",\
		 \"familyType\":\"Numeric\",\"precision\":2,\"minValue\":10,\"maxValue\":100}}"
	)
}
