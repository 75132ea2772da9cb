//! Authenticated request handle shared by the provisioning steps.
//!
//! An [`AceClient`] pairs a transport with the base address and the default headers chosen
//! during authentication. Every request it issues carries `Accept: application/json` plus the
//! scheme's credential header; status classification and JSON decoding happen here so the
//! provisioner only deals with typed payloads.

// self
use crate::{
	_prelude::*,
	api::ApiCall,
	config::BaseAddress,
	error::{ConfigError, TransportError},
	http::{AceHttpClient, ApiRequest, ApiResponse},
	obs::{self, CallOutcome, CallSpan},
};

/// `Accept` header name.
pub const ACCEPT_HEADER: &str = "accept";
/// `Content-Type` header name.
pub const CONTENT_TYPE_HEADER: &str = "content-type";
/// Media type used for every request and response body.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Ready-to-use handle produced by [`AuthScheme::authenticate`](crate::auth::AuthScheme).
#[derive(Clone)]
pub struct AceClient<C>
where
	C: ?Sized + AceHttpClient,
{
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Platform address prefixed to every endpoint path.
	pub base: BaseAddress,
	headers: Vec<(&'static str, String)>,
}
impl<C> AceClient<C>
where
	C: ?Sized + AceHttpClient,
{
	/// Creates an unauthenticated handle that only sends the JSON `Accept` header.
	pub fn new(base: BaseAddress, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			base,
			headers: vec![(ACCEPT_HEADER, JSON_MEDIA_TYPE.to_owned())],
		}
	}

	/// Adds a default header sent with every later request.
	pub(crate) fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.headers.push((name, value.into()));

		self
	}

	/// Whether a default header named `name` is attached.
	pub fn has_header(&self, name: &str) -> bool {
		self.headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(name))
	}

	/// POSTs `body` as JSON and decodes the successful response.
	pub async fn post<B, T>(&self, call: ApiCall, path: &str, body: &B) -> Result<T>
	where
		B: ?Sized + Serialize,
		T: DeserializeOwned,
	{
		let payload =
			serde_json::to_vec(body).map_err(|source| ConfigError::Encode { call, source })?;
		let response = self.send(call, path, Some(payload)).await?;

		decode(call, &response)
	}

	/// PUTs an empty body and discards the successful response.
	pub async fn put(&self, call: ApiCall, path: &str) -> Result<()> {
		self.send(call, path, Some(Vec::new())).await.map(|_| ())
	}

	/// GETs a resource, mapping a tolerated `404 Not Found` to `None`.
	pub async fn get_optional<T>(&self, call: ApiCall, path: &str) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		let response = self.send(call, path, None).await?;

		if response.is_not_found() {
			obs::log_progress(format_args!("{call} found nothing: {}", response.text()));

			return Ok(None);
		}

		decode(call, &response).map(Some)
	}

	/// Issues `call` against `path` and returns the response once its status is accepted.
	///
	/// `2xx` is always accepted; `404` is accepted only for calls that
	/// [tolerate it](ApiCall::tolerates_not_found). Anything else becomes
	/// [`Error::UnexpectedStatus`].
	pub async fn send(
		&self,
		call: ApiCall,
		path: &str,
		body: Option<Vec<u8>>,
	) -> Result<ApiResponse> {
		let span = CallSpan::new(call);

		obs::record_call_outcome(call, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = self.build_request(call, path, body)?;

				obs::log_request(call, &request.url);

				let response = self
					.http_client
					.execute(request)
					.await
					.map_err(|e| TransportError::network(call, e))?;

				obs::log_response(call, response.status);

				let tolerated = response.is_not_found() && call.tolerates_not_found();

				if !response.is_success() && !tolerated {
					return Err(Error::UnexpectedStatus {
						call,
						status: response.status,
						body: response.text(),
					});
				}

				Ok::<_, Error>(response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(call, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(call, CallOutcome::Failure),
		}

		result
	}

	fn build_request(
		&self,
		call: ApiCall,
		path: &str,
		body: Option<Vec<u8>>,
	) -> Result<ApiRequest> {
		let url = self.base.endpoint(path)?;
		let mut headers = self.headers.clone();

		if body.as_ref().is_some_and(|bytes| !bytes.is_empty()) {
			headers.push((CONTENT_TYPE_HEADER, JSON_MEDIA_TYPE.to_owned()));
		}

		Ok(ApiRequest { method: call.method(), url, headers, body })
	}
}
impl<C> Debug for AceClient<C>
where
	C: ?Sized + AceHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let names = self.headers.iter().map(|(name, _)| *name).collect::<Vec<_>>();

		f.debug_struct("AceClient")
			.field("base", &self.base)
			.field("headers", &names)
			.field("cookies", &self.http_client.persists_cookies())
			.finish()
	}
}

fn decode<T>(call: ApiCall, response: &ApiResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { call, source })
}
