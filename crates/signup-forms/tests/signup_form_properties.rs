//! Property tests for the signup form validator
//!
//! Covers the quantified behavior of the submit rule chain:
//! - Emails without `@` or without a domain dot are always rejected first
//! - Short passwords behind a valid email are always reported as too short,
//!   with length measured in UTF-16 code units
//! - Long-enough mismatched passwords are always reported as mismatched
//! - Field values read back exactly as last written

use proptest::prelude::*;
use rstest::rstest;
use signup_forms::{SignupField, SignupForm, SubmitOutcome, ValidationError};

const VALID_EMAIL: &str = "selena@gmail.com";

fn submit(email: &str, password: &str, confirm_password: &str) -> (SubmitOutcome, SignupForm) {
	let mut form = SignupForm::new();
	form.on_field_change(SignupField::Email, email);
	form.on_field_change(SignupField::Password, password);
	form.on_field_change(SignupField::ConfirmPassword, confirm_password);
	let outcome = form.on_submit();
	(outcome, form)
}

// Characters that are a single UTF-16 code unit.
fn bmp_char() -> impl Strategy<Value = char> {
	prop_oneof![
		proptest::char::range('\u{0}', '\u{D7FF}'),
		proptest::char::range('\u{E000}', '\u{FFFF}'),
	]
}

fn field_strategy() -> impl Strategy<Value = SignupField> {
	prop_oneof![
		Just(SignupField::Email),
		Just(SignupField::Password),
		Just(SignupField::ConfirmPassword),
	]
}

proptest! {
	#[test]
	fn prop_email_without_at_sign_is_invalid(
		email in "[a-zA-Z0-9._+-]{0,30}",
		password in ".{0,12}",
		confirm in ".{0,12}",
	) {
		let (outcome, form) = submit(&email, &password, &confirm);

		prop_assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidEmail));
		let error_message = form.error_message();
		prop_assert_eq!(
			error_message.as_deref(),
			Some("The email you entered is invalid")
		);
	}

	#[test]
	fn prop_email_without_domain_dot_is_invalid(
		local in "[a-z0-9]{1,12}",
		domain in "[a-z0-9-]{1,12}",
		password in ".{0,12}",
	) {
		let email = format!("{local}@{domain}");

		let (outcome, _) = submit(&email, &password, &password);

		prop_assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidEmail));
	}

	#[test]
	fn prop_short_password_is_too_short(
		password in proptest::collection::vec(bmp_char(), 0..5)
			.prop_map(|chars| chars.into_iter().collect::<String>()),
		confirm in ".{0,12}",
	) {
		let (outcome, form) = submit(VALID_EMAIL, &password, &confirm);

		prop_assert_eq!(
			outcome,
			SubmitOutcome::Rejected(ValidationError::PasswordTooShort { min_length: 5 })
		);
		let error_message = form.error_message();
		prop_assert_eq!(
			error_message.as_deref(),
			Some("The password you entered should contain 5 or more characters")
		);
	}

	#[test]
	fn prop_mismatched_passwords_are_rejected(
		password in "[a-zA-Z0-9!@#]{5,16}",
		confirm in "[a-zA-Z0-9!@#]{5,16}",
	) {
		prop_assume!(password != confirm);

		let (outcome, form) = submit(VALID_EMAIL, &password, &confirm);

		prop_assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::PasswordMismatch));
		let error_message = form.error_message();
		prop_assert_eq!(error_message.as_deref(), Some("The passwords don't match"));
	}

	#[test]
	fn prop_matching_long_passwords_are_accepted(password in "[a-zA-Z0-9]{5,24}") {
		let (outcome, form) = submit(VALID_EMAIL, &password, &password);

		prop_assert_eq!(outcome, SubmitOutcome::Accepted);
		prop_assert!(form.error_message().is_none());
	}

	#[test]
	fn prop_astral_passwords_count_two_units_each(count in 1usize..6) {
		let password = "🎉".repeat(count);

		let (outcome, _) = submit(VALID_EMAIL, &password, &password);

		if count * 2 >= 5 {
			prop_assert_eq!(outcome, SubmitOutcome::Accepted);
		} else {
			prop_assert_eq!(
				outcome,
				SubmitOutcome::Rejected(ValidationError::PasswordTooShort { min_length: 5 })
			);
		}
	}

	#[test]
	fn prop_field_value_reads_back_last_write(
		writes in proptest::collection::vec((field_strategy(), ".*"), 1..20),
	) {
		let mut form = SignupForm::new();
		for (field, value) in &writes {
			form.on_field_change(*field, value.clone());
		}

		for field in SignupField::ALL {
			let expected = writes
				.iter()
				.rev()
				.find(|(f, _)| *f == field)
				.map(|(_, v)| v.as_str())
				.unwrap_or("");
			prop_assert_eq!(form.value(field), expected);
		}
	}
}

#[rstest]
fn test_reference_valid_submission() {
	// Act
	let (outcome, form) = submit("selena@gmail.com", "12345", "12345");

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted);
	assert!(form.error_message().is_none());
}

#[rstest]
#[case("selenagmail.com", "", "", "The email you entered is invalid")]
#[case(
	"selena@gmail.com",
	"123",
	"",
	"The password you entered should contain 5 or more characters"
)]
#[case("selena@gmail.com", "12345", "123456", "The passwords don't match")]
fn test_reference_rejections(
	#[case] email: &str,
	#[case] password: &str,
	#[case] confirm_password: &str,
	#[case] expected: &str,
) {
	// Act
	let (outcome, form) = submit(email, password, confirm_password);

	// Assert
	assert!(!outcome.is_accepted());
	assert_eq!(form.error_message().as_deref(), Some(expected));
}

#[rstest]
fn test_empty_password_reports_length_before_match() {
	// Act
	let (outcome, _) = submit(VALID_EMAIL, "", "");

	// Assert
	assert_eq!(
		outcome,
		SubmitOutcome::Rejected(ValidationError::PasswordTooShort { min_length: 5 })
	);
}

#[rstest]
#[case::three_emoji("🎉🎉🎉")]
#[case::emoji_and_ascii("🎉abc")]
fn test_astral_password_meets_minimum(#[case] password: &str) {
	// Act
	let (outcome, form) = submit(VALID_EMAIL, password, password);

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted);
	assert!(form.error_message().is_none());
}
