//! In-memory record of the three signup inputs

use crate::field::SignupField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder printed instead of password values.
pub const PASSWORD_REDACTED: &str = "***";

/// Current values of the signup inputs.
///
/// Updates never mutate in place: [`FormState::with_field`] returns a new
/// record with exactly one field replaced, and the form swaps it in whole.
///
/// Password fields are read when deserializing but never written out.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
	pub email: String,
	#[serde(skip_serializing)]
	pub password: String,
	#[serde(skip_serializing)]
	pub confirm_password: String,
}

impl FormState {
	/// Create an empty state, as at form mount.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormState, SignupField};
	///
	/// let state = FormState::new();
	/// assert!(SignupField::ALL.iter().all(|f| state.get(*f).is_empty()));
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, field: SignupField) -> &str {
		match field {
			SignupField::Email => &self.email,
			SignupField::Password => &self.password,
			SignupField::ConfirmPassword => &self.confirm_password,
		}
	}

	/// Return a copy of this state with `field` set to `value`.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormState, SignupField};
	///
	/// let state = FormState::new().with_field(SignupField::Email, "selena@gmail.com");
	/// assert_eq!(state.email, "selena@gmail.com");
	/// assert_eq!(state.password, "");
	/// ```
	pub fn with_field(&self, field: SignupField, value: impl Into<String>) -> Self {
		let value = value.into();
		match field {
			SignupField::Email => Self {
				email: value,
				..self.clone()
			},
			SignupField::Password => Self {
				password: value,
				..self.clone()
			},
			SignupField::ConfirmPassword => Self {
				confirm_password: value,
				..self.clone()
			},
		}
	}
}

impl fmt::Debug for FormState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormState")
			.field("email", &self.email)
			.field("password", &PASSWORD_REDACTED)
			.field("confirm_password", &PASSWORD_REDACTED)
			.finish()
	}
}
