//! Ordered submit rules
//!
//! The rules run in [`SignupRule::ORDER`] and stop at the first failure, so
//! an empty password is reported as too short even though two empty
//! passwords would match.

use crate::config::SignupFormConfig;
use crate::error::ValidationError;
use crate::field::SignupField;
use crate::state::FormState;
use crate::validators::{EmailValidator, MinLengthValidator};
use serde::{Deserialize, Serialize};

/// One check in the submit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupRule {
	EmailFormat,
	PasswordLength,
	PasswordMatch,
}

impl SignupRule {
	pub const ORDER: [SignupRule; 3] = [
		SignupRule::EmailFormat,
		SignupRule::PasswordLength,
		SignupRule::PasswordMatch,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			SignupRule::EmailFormat => "email_format",
			SignupRule::PasswordLength => "password_length",
			SignupRule::PasswordMatch => "password_match",
		}
	}

	/// Fields the rule reads.
	pub fn fields(&self) -> &'static [SignupField] {
		match self {
			SignupRule::EmailFormat => &[SignupField::Email],
			SignupRule::PasswordLength => &[SignupField::Password],
			SignupRule::PasswordMatch => &[SignupField::Password, SignupField::ConfirmPassword],
		}
	}
}

/// Runs the submit rules against a [`FormState`].
#[derive(Debug, Clone)]
pub struct SignupValidator {
	email: EmailValidator,
	password_length: MinLengthValidator,
}

impl SignupValidator {
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormState, SignupField, SignupFormConfig, SignupValidator, ValidationError};
	///
	/// let validator = SignupValidator::new(&SignupFormConfig::default());
	/// let state = FormState::new().with_field(SignupField::Email, "selena@gmail.com");
	///
	/// assert_eq!(
	///     validator.validate(&state),
	///     Err(ValidationError::PasswordTooShort { min_length: 5 })
	/// );
	/// ```
	pub fn new(config: &SignupFormConfig) -> Self {
		Self {
			email: EmailValidator::new(),
			password_length: MinLengthValidator::new(config.min_password_length),
		}
	}

	pub fn min_password_length(&self) -> usize {
		self.password_length.min_length()
	}

	/// Run every rule in order; the first failure wins.
	pub fn validate(&self, state: &FormState) -> Result<(), ValidationError> {
		SignupRule::ORDER
			.iter()
			.try_for_each(|rule| self.check(*rule, state))
	}

	/// Run a single rule.
	pub fn check(&self, rule: SignupRule, state: &FormState) -> Result<(), ValidationError> {
		match rule {
			SignupRule::EmailFormat => self
				.email
				.validate(&state.email)
				.map_err(|_| ValidationError::InvalidEmail),
			SignupRule::PasswordLength => self.password_length.validate(&state.password).map_err(
				|_| ValidationError::PasswordTooShort {
					min_length: self.min_password_length(),
				},
			),
			SignupRule::PasswordMatch => {
				if state.password == state.confirm_password {
					Ok(())
				} else {
					Err(ValidationError::PasswordMismatch)
				}
			}
		}
	}
}

impl Default for SignupValidator {
	fn default() -> Self {
		Self::new(&SignupFormConfig::default())
	}
}
