//! Serializable form metadata
//!
//! Plain data describing the signup form, suitable for handing to a
//! client-side renderer without the validator itself.
//!
//! ```
//! use signup_forms::SignupForm;
//!
//! let metadata = SignupForm::new().to_metadata();
//! let json = serde_json::to_string(&metadata).unwrap();
//! assert!(json.contains("\"confirmPassword\""));
//! ```

use crate::field::Widget;
use crate::rules::SignupRule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMetadata {
	/// Fields in display order
	pub fields: Vec<FieldMetadata>,

	/// Submit rules in evaluation order
	pub rules: Vec<RuleMetadata>,

	/// Message currently shown under the form
	#[serde(default)]
	pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
	/// Form data name
	pub name: String,

	/// DOM id referenced by the label
	pub id: String,

	pub label: String,

	pub widget: Widget,

	/// Current value; `None` for password widgets
	#[serde(default)]
	pub value: Option<String>,

	/// Whether the field holds any input
	pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
	pub rule: SignupRule,

	/// Form data names the rule reads
	pub fields: Vec<String>,

	/// Message shown when the rule fails
	pub error_message: String,
}

impl FormMetadata {
	pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
		self.fields.iter().find(|f| f.name == name)
	}
}
