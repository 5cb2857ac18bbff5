//! Field identifiers and widgets for the signup form

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Widget type used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
	EmailInput,
	PasswordInput,
}

impl Widget {
	/// HTML `type` attribute for the rendered `<input>`.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::Widget;
	///
	/// assert_eq!(Widget::EmailInput.input_type(), "email");
	/// assert_eq!(Widget::PasswordInput.input_type(), "password");
	/// ```
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::EmailInput => "email",
			Widget::PasswordInput => "password",
		}
	}

	/// Whether the value must never be echoed into logs or metadata.
	pub fn is_sensitive(&self) -> bool {
		matches!(self, Widget::PasswordInput)
	}
}

/// One of the three inputs of the signup form.
///
/// The form state is updated by dispatching on this identifier rather than
/// on a free-form key, so every update targets a real field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignupField {
	Email,
	Password,
	ConfirmPassword,
}

impl SignupField {
	/// All fields in display order.
	pub const ALL: [SignupField; 3] = [
		SignupField::Email,
		SignupField::Password,
		SignupField::ConfirmPassword,
	];

	/// Form data name (the `name` attribute and the key in change events).
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::SignupField;
	///
	/// assert_eq!(SignupField::ConfirmPassword.name(), "confirmPassword");
	/// ```
	pub fn name(&self) -> &'static str {
		match self {
			SignupField::Email => "email",
			SignupField::Password => "password",
			SignupField::ConfirmPassword => "confirmPassword",
		}
	}

	/// DOM id, referenced by the label's `for` attribute.
	pub fn id(&self) -> &'static str {
		match self {
			SignupField::Email => "email",
			SignupField::Password => "password",
			SignupField::ConfirmPassword => "confirm-password",
		}
	}

	/// Human-readable label text.
	pub fn label(&self) -> &'static str {
		match self {
			SignupField::Email => "Email address",
			SignupField::Password => "Password",
			SignupField::ConfirmPassword => "Confirm Password",
		}
	}

	pub fn widget(&self) -> Widget {
		match self {
			SignupField::Email => Widget::EmailInput,
			SignupField::Password | SignupField::ConfirmPassword => Widget::PasswordInput,
		}
	}
}

impl fmt::Display for SignupField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for SignupField {
	type Err = FormError;

	/// Parse a form data name.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::SignupField;
	///
	/// let field: SignupField = "confirmPassword".parse().unwrap();
	/// assert_eq!(field, SignupField::ConfirmPassword);
	/// assert!("username".parse::<SignupField>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		SignupField::ALL
			.into_iter()
			.find(|field| field.name() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}
