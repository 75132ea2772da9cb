//! Optional observability helpers for Ace calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap every HTTP call in a span named `ace_rest_sample.call` with the
//!   `call` and `method` fields, and to emit progress and response events.
//! - Enable `metrics` to increment the `ace_rest_sample_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Request about to be sent.
	Attempt,
	/// Response status accepted by the call.
	Success,
	/// Transport failure or rejected status.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
