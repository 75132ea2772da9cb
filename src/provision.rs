//! Work item + numeric family provisioning sequence.
//!
//! [`Provisioner::run`] opens a work item, looks the family up inside it, and either closes
//! the work item when the family already exists or creates the family and promotes the work
//! item. Calls run strictly one after another; the only tolerated failure is the `404` that
//! signals an absent family.

// self
use crate::{
	_prelude::*,
	api::{self, ApiCall, WORK_ITEMS_PATH},
	client::AceClient,
	http::AceHttpClient,
	model::{NewWorkItem, NumericFamily, WorkItem},
	obs,
};

/// How the family was obtained and what happened to the work item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FamilyResolution {
	/// Family was created and the work item promoted.
	Created,
	/// Family already existed and the work item was closed.
	Existing,
}

/// Result of a provisioning run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionOutcome {
	/// Identifier of the work item opened for the run.
	pub work_item_id: i64,
	/// Family returned by the platform.
	pub family: NumericFamily,
	/// Whether the family was created or reused.
	pub resolution: FamilyResolution,
}

/// Provisioning plan: the work item to open and the family to ensure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Provisioner {
	/// Body of the create-work-item call.
	pub work_item: NewWorkItem,
	/// Family created when no family with the same code exists.
	pub family: NumericFamily,
}
impl Provisioner {
	/// Creates a plan for the provided work item and family template.
	pub fn new(work_item: NewWorkItem, family: NumericFamily) -> Self {
		Self { work_item, family }
	}

	/// Runs the sequence against an authenticated handle.
	pub async fn run<C>(&self, client: &AceClient<C>) -> Result<ProvisionOutcome>
	where
		C: ?Sized + AceHttpClient,
	{
		let code = self.family.code.as_str();

		obs::log_progress(format_args!("Creating family with code {code}."));

		let work_item: WorkItem =
			client.post(ApiCall::CreateWorkItem, WORK_ITEMS_PATH, &self.work_item).await?;
		let wi = work_item.id;
		let existing: Option<NumericFamily> =
			client.get_optional(ApiCall::GetFamily, &api::family_path(wi, code)).await?;

		if let Some(family) = existing {
			obs::log_progress(format_args!("Family {code} already exists, closing work item {wi}."));
			client.put(ApiCall::CloseWorkItem, &api::close_path(wi)).await?;

			return Ok(ProvisionOutcome {
				work_item_id: wi,
				family,
				resolution: FamilyResolution::Existing,
			});
		}

		let family: NumericFamily =
			client.post(ApiCall::CreateFamily, &api::families_path(wi), &self.family).await?;

		obs::log_progress(format_args!("Created new family {code}, promoting work item {wi}."));
		client.put(ApiCall::PromoteWorkItem, &api::promote_path(wi)).await?;

		Ok(ProvisionOutcome { work_item_id: wi, family, resolution: FamilyResolution::Created })
	}
}
impl Default for Provisioner {
	fn default() -> Self {
		Self::new(NewWorkItem::default(), NumericFamily::sample())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_plan_targets_the_sample_family() {
		let plan = Provisioner::default();

		assert_eq!(plan.work_item.name, "SampleWorkItem");
		assert_eq!(plan.work_item.description, "Sample description");
		assert_eq!(plan.family, NumericFamily::sample());
		assert_eq!(plan.family.code, "SAMPLE");
	}
}
