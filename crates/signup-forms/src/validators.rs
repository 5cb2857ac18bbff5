//! Field validators for the signup form
//!
//! This module provides the email syntax validator and the minimum-length
//! validator used by the submit rule chain.

use crate::error::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

// One dot-separated run of an unquoted local part.
//
// ASCII atext plus non-ASCII characters of the Basic Multilingual Plane,
// excluding the noncharacter block U+FDD0..U+FDEF and U+FFF0 upwards.
static LOCAL_PART_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9!#$%&'*+\-/=?^_`{|}~\x{A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+$",
	)
	.expect("LOCAL_PART_REGEX: invalid regex pattern")
});

// Body of a quoted local part, without the surrounding quotes.
//
// Whitespace, control characters and non-ASCII text are allowed; `"` and `\`
// only appear escaped.
static QUOTED_LOCAL_PART_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^(?:[\s\x01-\x08\x0B\x0C\x0E-\x1F\x7F\x21\x23-\x5B\x5D-\x7E\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]|\\[\x01-\x09\x0B\x0C\x0D-\x7F\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])*$",
	)
	.expect("QUOTED_LOCAL_PART_REGEX: invalid regex pattern")
});

// Domain label: alphanumerics, hyphens and non-ASCII text.
static DOMAIN_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9\-\x{A1}-\x{10FFFF}]+$")
		.expect("DOMAIN_LABEL_REGEX: invalid regex pattern")
});

// Full-width ASCII forms are never allowed in a domain label.
static FULL_WIDTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[\x{FF01}-\x{FF5E}]").expect("FULL_WIDTH_REGEX: invalid regex pattern")
});

// Top-level domain: two or more letters, or a punycode label.
static TLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"(?i)^(?:[a-z\x{A1}-\x{A8}\x{AA}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,}|xn[a-z0-9\-]{2,})$",
	)
	.expect("TLD_REGEX: invalid regex pattern")
});

/// Length of `value` in UTF-16 code units, the unit a browser input's
/// `value.length` reports.
///
/// # Examples
///
/// ```
/// use signup_forms::validators::utf16_len;
///
/// assert_eq!(utf16_len("12345"), 5);
/// assert_eq!(utf16_len("こんにちは"), 5);
/// assert_eq!(utf16_len("🎉🎉🎉"), 6);
/// ```
pub fn utf16_len(value: &str) -> usize {
	value.encode_utf16().count()
}

/// Validates that a string is a syntactically valid email address.
///
/// The validator checks:
/// - A single `local-part@domain` split at the last `@`
/// - Local part of at most 64 bytes: dot-separated atext runs, or a quoted string
/// - Domain of at least two labels; labels at most 63 UTF-16 units, without
///   leading or trailing hyphens or full-width ASCII forms
/// - Alphabetic top-level domain of two or more characters (or punycode)
/// - Whole address at most 254 UTF-16 units
///
/// # Examples
///
/// ```
/// use signup_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("selena@gmail.com").is_ok());
/// assert!(validator.validate("selenagmail.com").is_err());
/// assert!(validator.validate("selena@gmail").is_err());
/// assert!(validator.validate("").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::validators::EmailValidator;
	/// use signup_forms::FieldError;
	///
	/// let validator = EmailValidator::new().with_message("The email you entered is invalid");
	/// assert_eq!(
	///     validator.validate("nope"),
	///     Err(FieldError::Validation("The email you entered is invalid".to_string()))
	/// );
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice as an email address.
	///
	/// Returns `Ok(())` when the address is valid, or a
	/// [`FieldError::Validation`] containing an error message when it is not.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if is_valid_email(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

fn is_valid_email(value: &str) -> bool {
	if value.is_empty() || utf16_len(value) > MAX_EMAIL_LENGTH {
		return false;
	}

	let Some((local, domain)) = value.rsplit_once('@') else {
		return false;
	};

	if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH {
		return false;
	}

	if !is_valid_domain(domain) {
		return false;
	}

	// The closing quote is dropped without being checked.
	if let Some(quoted) = local.strip_prefix('"') {
		let mut body = quoted.chars();
		body.next_back();
		return QUOTED_LOCAL_PART_REGEX.is_match(body.as_str());
	}

	local.split('.').all(|part| LOCAL_PART_REGEX.is_match(part))
}

fn is_valid_domain(domain: &str) -> bool {
	if domain.len() > MAX_EMAIL_LENGTH {
		return false;
	}

	let labels: Vec<&str> = domain.split('.').collect();
	if labels.len() < 2 {
		return false;
	}

	let Some(tld) = labels.last() else {
		return false;
	};
	if !TLD_REGEX.is_match(tld) || tld.chars().any(char::is_whitespace) {
		return false;
	}

	labels.iter().all(|label| {
		utf16_len(label) <= MAX_DOMAIN_LABEL_LENGTH
			&& DOMAIN_LABEL_REGEX.is_match(label)
			&& !FULL_WIDTH_REGEX.is_match(label)
			&& !label.starts_with('-')
			&& !label.ends_with('-')
	})
}

/// Validates that a string has at least `min_length` characters.
///
/// Length is counted in UTF-16 code units, as a browser input reports it:
/// characters outside the Basic Multilingual Plane (most emoji) count twice.
///
/// # Examples
///
/// ```
/// use signup_forms::validators::MinLengthValidator;
///
/// let validator = MinLengthValidator::new(5);
/// assert!(validator.validate("12345").is_ok());
/// assert!(validator.validate("1234").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min_length: usize,
	message: Option<String>,
}

impl MinLengthValidator {
	pub fn new(min_length: usize) -> Self {
		Self {
			min_length,
			message: None,
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let length = utf16_len(value);
		if length >= self.min_length {
			return Ok(());
		}

		let msg = match &self.message {
			Some(message) => message.clone(),
			None => format!(
				"Ensure this value has at least {} characters (it has {})",
				self.min_length, length
			),
		};
		Err(FieldError::Validation(msg))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	// =========================================================================
	// EmailValidator tests
	// =========================================================================

	#[rstest]
	#[case("selena@gmail.com")]
	#[case("a@b.co")]
	#[case("first.last@example.org")]
	#[case("user+tag@sub.example.com")]
	#[case("o'brien@example.ie")]
	#[case("x_y-z@my-domain.io")]
	#[case("\"john doe\"@example.com")]
	#[case("user@xn--80ak6aa92e.com")]
	#[case("üñîçøðé@example.com")]
	#[case("user@bücher.de")]
	#[case("UPPER@EXAMPLE.COM")]
	#[case("\"jöhn\"@example.com")]
	#[case("\"a\tb\"@example.com")]
	#[case("\"escaped \\\" quote\"@example.com")]
	#[case("\"unterminated@example.com")]
	#[case("user@domain.XN--P1AI")]
	fn test_email_validator_valid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_ok(), "Expected '{email}' to be a valid email");
	}

	#[rstest]
	#[case("")]
	#[case("selenagmail.com")]
	#[case("selena@gmail")]
	#[case("selena@")]
	#[case("@gmail.com")]
	#[case("selena@@gmail.com")]
	#[case("sel ena@gmail.com")]
	#[case(" selena@gmail.com")]
	#[case("selena@gmail.com ")]
	#[case("selena@gm ail.com")]
	#[case(".selena@gmail.com")]
	#[case("selena.@gmail.com")]
	#[case("sel..ena@gmail.com")]
	#[case("selena@.gmail.com")]
	#[case("selena@gmail..com")]
	#[case("selena@gmail.com.")]
	#[case("selena@-gmail.com")]
	#[case("selena@gmail-.com")]
	#[case("selena@gmail.c")]
	#[case("selena@gmail.c0m")]
	#[case("selena@127.0.0.1")]
	#[case("selena@[127.0.0.1]")]
	#[case("sel(ena)@gmail.com")]
	#[case("selena@ｇmail.com")]
	#[case("user@domain.ｃｏｍ")]
	#[case("\"bare \" quote\"@example.com")]
	#[case("selena@gmail.co\u{3000}m")]
	#[case("selena@gmail.🎉🎉")]
	#[case("selena@under_score.com")]
	fn test_email_validator_invalid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_err(), "Expected '{email}' to be an invalid email");
	}

	#[rstest]
	fn test_email_validator_local_part_length_limit() {
		// Arrange
		let validator = EmailValidator::new();
		let at_limit = format!("{}@example.com", "a".repeat(64));
		let over_limit = format!("{}@example.com", "a".repeat(65));

		// Act + Assert
		assert!(validator.validate(&at_limit).is_ok());
		assert!(validator.validate(&over_limit).is_err());
	}

	#[rstest]
	fn test_email_validator_domain_label_length_limit() {
		// Arrange
		let validator = EmailValidator::new();
		let at_limit = format!("user@{}.com", "d".repeat(63));
		let over_limit = format!("user@{}.com", "d".repeat(64));

		// Act + Assert
		assert!(validator.validate(&at_limit).is_ok());
		assert!(validator.validate(&over_limit).is_err());
	}

	#[rstest]
	fn test_email_validator_total_length_limit() {
		// Arrange
		let validator = EmailValidator::new();
		let label = "d".repeat(60);
		let domain = format!("{label}.{label}.{label}.{label}.com");
		let too_long = format!("{}@{}", "a".repeat(10), domain);

		// Act + Assert
		assert!(too_long.len() > MAX_EMAIL_LENGTH);
		assert!(validator.validate(&too_long).is_err());
	}

	#[rstest]
	fn test_email_validator_default_message() {
		// Arrange
		let validator = EmailValidator::default();

		// Act
		let result = validator.validate("invalid");

		// Assert
		assert_eq!(
			result,
			Err(FieldError::Validation(
				"Enter a valid email address".to_string()
			))
		);
	}

	#[rstest]
	fn test_email_validator_custom_message() {
		// Arrange
		let validator = EmailValidator::new().with_message("Custom email error");

		// Act
		let result = validator.validate("bad");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => assert_eq!(msg, "Custom email error"),
			_ => panic!("Expected Validation error with custom message"),
		}
	}

	// =========================================================================
	// MinLengthValidator tests
	// =========================================================================

	#[rstest]
	#[case("", false)]
	#[case("1", false)]
	#[case("1234", false)]
	#[case("12345", true)]
	#[case("123456", true)]
	fn test_min_length_boundary(#[case] value: &str, #[case] valid: bool) {
		// Arrange
		let validator = MinLengthValidator::new(5);

		// Act
		let result = validator.validate(value);

		// Assert
		assert_eq!(result.is_ok(), valid, "value: {value:?}");
	}

	#[rstest]
	#[case("🎉🎉🎉", true)]
	#[case("🎉🎉", false)]
	#[case("🎉abc", true)]
	#[case("こんにちは", true)]
	#[case("ñandú", true)]
	#[case("ñand", false)]
	fn test_min_length_counts_utf16_units(#[case] value: &str, #[case] valid: bool) {
		// Arrange
		let validator = MinLengthValidator::new(5);

		// Act
		let result = validator.validate(value);

		// Assert
		assert_eq!(result.is_ok(), valid, "value: {value:?}");
	}

	#[rstest]
	fn test_min_length_message_reports_utf16_units() {
		// Act
		let result = MinLengthValidator::new(5).validate("🎉🎉");

		// Assert
		assert_eq!(
			result,
			Err(FieldError::Validation(
				"Ensure this value has at least 5 characters (it has 4)".to_string()
			))
		);
	}

	#[rstest]
	fn test_min_length_default_message() {
		// Arrange
		let validator = MinLengthValidator::new(5);

		// Act
		let result = validator.validate("123");

		// Assert
		assert_eq!(
			result,
			Err(FieldError::Validation(
				"Ensure this value has at least 5 characters (it has 3)".to_string()
			))
		);
	}

	#[rstest]
	fn test_min_length_zero_accepts_empty() {
		assert!(MinLengthValidator::new(0).validate("").is_ok());
	}
}
