// self
use crate::{_prelude::*, api::ApiCall};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used around each HTTP call.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the call label and its method.
	pub fn new(call: ApiCall) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"ace_rest_sample.call",
				call = call.as_str(),
				method = call.method().as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = call;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a human-readable progress message.
pub fn log_progress(message: impl Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!("{message}");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = message;
	}
}

/// Emits the resolved URL right before a request leaves.
pub fn log_request(call: ApiCall, url: &Url) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(call = call.as_str(), %url, "Sending request.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (call, url);
	}
}

/// Emits the status of a received response.
pub fn log_response(call: ApiCall, status: u16) {
	#[cfg(feature = "tracing")]
	{
		if (200..300).contains(&status) {
			tracing::debug!(call = call.as_str(), status, "Received response.");
		} else {
			tracing::warn!(call = call.as_str(), status, "Received non-success response.");
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (call, status);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn logging_helpers_accept_any_display() {
		log_progress("plain");
		log_progress(format_args!("formatted {}", 42));
		log_response(ApiCall::PromoteWorkItem, 500);
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new(ApiCall::CreateWorkItem);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
