//! Wire payloads exchanged with the platform.
//!
//! Field names are camelCase on the wire. Response types default missing fields so a
//! platform that omits nulls still decodes; type mismatches remain decode errors.

// self
use crate::_prelude::*;

/// Body of `POST /api/v1/wi/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkItem {
	/// Work item name.
	pub name: String,
	/// Free-form description.
	pub description: String,
}
impl NewWorkItem {
	/// Creates a work item request.
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self { name: name.into(), description: description.into() }
	}
}
impl Default for NewWorkItem {
	fn default() -> Self {
		Self::new("SampleWorkItem", "Sample description")
	}
}

/// Work item returned by the platform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkItem {
	/// Platform identifier used in every scoped path.
	pub id: i64,
	/// Work item name.
	pub name: String,
	/// Free-form description.
	pub description: String,
}

/// Numeric classification with a value range and precision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericFamily {
	/// Unique family code.
	pub code: String,
	/// Free-form description.
	pub description: String,
	/// Lifecycle state, e.g. `Concept`.
	pub life_cycle: String,
	/// Family kind, e.g. `Numeric`.
	pub family_type: String,
	/// Number of decimal places.
	pub precision: i32,
	/// Lower bound of the range.
	#[serde(with = "rust_decimal::serde::arbitrary_precision")]
	pub min_value: Decimal,
	/// Upper bound of the range.
	#[serde(with = "rust_decimal::serde::arbitrary_precision")]
	pub max_value: Decimal,
}
impl NumericFamily {
	/// Template used when the sample family is missing.
	pub fn sample() -> Self {
		Self {
			code: "SAMPLE".into(),
			description: "Test numeric family".into(),
			life_cycle: "Concept".into(),
			family_type: "Numeric".into(),
			precision: 2,
			min_value: Decimal::from(10),
			max_value: Decimal::from(100),
		}
	}
}
impl Display for NumericFamily {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		writeln!(f, "Code:        {}", self.code)?;
		writeln!(f, "Description: {}", self.description)?;
		writeln!(f, "LifeCycle:   {}", self.life_cycle)?;
		writeln!(f, "FamilyType:  {}", self.family_type)?;
		writeln!(f, "Precision:   {}", self.precision)?;
		writeln!(f, "MinValue:    {}", self.min_value)?;
		writeln!(f, "MaxValue:    {}", self.max_value)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn family_uses_camel_case_numbers_on_the_wire() {
		let value = serde_json::to_value(NumericFamily::sample())
			.expect("Sample family should serialize.");

		assert_eq!(value["code"], "SAMPLE");
		assert_eq!(value["lifeCycle"], "Concept");
		assert_eq!(value["familyType"], "Numeric");
		assert_eq!(value["precision"], 2);
		assert_eq!(value["minValue"].to_string(), "10");
		assert_eq!(value["maxValue"].to_string(), "100");
	}

	#[test]
	fn family_json_round_trip_keeps_every_field() {
		let family = NumericFamily {
			code: "RANGE".into(),
			description: "Fractional bounds".into(),
			life_cycle: "Released".into(),
			family_type: "Numeric".into(),
			precision: 3,
			min_value: Decimal::new(-125, 2),
			max_value: Decimal::new(99_875, 3),
		};
		let json = serde_json::to_string(&family).expect("Family should serialize.");
		let parsed: NumericFamily = serde_json::from_str(&json).expect("Family should parse.");

		assert_eq!(parsed, family);
	}

	#[test]
	fn decimal_bounds_keep_every_digit_on_the_wire() {
		let min_value =
			"1234567890.123456789".parse::<Decimal>().expect("Literal should be a decimal.");
		let family =
			NumericFamily { min_value, max_value: Decimal::MAX, ..NumericFamily::sample() };
		let json = serde_json::to_string(&family).expect("Family should serialize.");

		assert!(json.contains(r#""minValue":1234567890.123456789"#), "{json}");
		assert!(json.contains(r#""maxValue":79228162514264337593543950335"#), "{json}");

		let parsed: NumericFamily = serde_json::from_str(&json).expect("Family should parse.");

		assert_eq!(parsed, family);
	}

	#[test]
	fn response_decimals_parse_exactly() {
		let family: NumericFamily = serde_json::from_str(r#"{"minValue":0.1234567890123456789}"#)
			.expect("Family should parse.");

		assert_eq!(family.min_value.to_string(), "0.1234567890123456789");
	}

	#[test]
	fn responses_accept_integers_and_missing_fields() {
		let family: NumericFamily =
			serde_json::from_str(r#"{"code":"SAMPLE","precision":2,"minValue":10,"maxValue":100}"#)
				.expect("Sparse family should parse.");

		assert_eq!(family.code, "SAMPLE");
		assert_eq!(family.min_value, Decimal::from(10));
		assert_eq!(family.max_value, Decimal::from(100));
		assert!(family.life_cycle.is_empty());

		let work_item: WorkItem =
			serde_json::from_str(r#"{"id":42}"#).expect("Sparse work item should parse.");

		assert_eq!(work_item.id, 42);
	}

	#[test]
	fn family_display_lists_one_field_per_line() {
		let rendered = NumericFamily::sample().to_string();

		assert_eq!(rendered.lines().count(), 7);
		assert!(rendered.starts_with("Code:        SAMPLE\n"));
		assert!(rendered.contains("Precision:   2\n"));
		assert!(rendered.ends_with("MaxValue:    100\n"));
	}

	#[test]
	fn new_work_item_defaults_to_sample_values() {
		let body = serde_json::to_value(NewWorkItem::default())
			.expect("Work item request should serialize.");

		assert_eq!(
			body,
			serde_json::json!({ "name": "SampleWorkItem", "description": "Sample description" })
		);
	}
}
