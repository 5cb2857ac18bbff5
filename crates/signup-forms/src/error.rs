//! Error types for signup form validation

/// The single user-visible failure produced by a submit.
///
/// Exactly one of these is published per rejected submission. The display
/// string is the message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("The email you entered is invalid")]
	InvalidEmail,
	#[error("The password you entered should contain {min_length} or more characters")]
	PasswordTooShort { min_length: usize },
	#[error("The passwords don't match")]
	PasswordMismatch,
}

impl ValidationError {
	/// Stable identifier for the failure, used in metadata and logs.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::ValidationError;
	///
	/// assert_eq!(ValidationError::InvalidEmail.code(), "invalid_email");
	/// assert_eq!(ValidationError::PasswordMismatch.code(), "password_mismatch");
	/// ```
	pub fn code(&self) -> &'static str {
		match self {
			ValidationError::InvalidEmail => "invalid_email",
			ValidationError::PasswordTooShort { .. } => "password_too_short",
			ValidationError::PasswordMismatch => "password_mismatch",
		}
	}
}

/// Error raised by an individual field validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Errors from the form's string-keyed entry points and configuration.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown form field: {0}")]
	UnknownField(String),
	#[error("Invalid configuration: {0}")]
	Config(String),
	#[error("Failed to parse configuration: {0}")]
	ConfigParse(#[from] toml::de::Error),
}

pub type FormResult<T> = Result<T, FormError>;
