//! The signup form validator
//!
//! `SignupForm` owns the three input values and the single error slot.
//! Field changes only record values; validation happens on submit.
//!
//! ```text
//!          on_field_change            on_submit
//!   Idle ─────────────────▶ Idle ─────────────────▶ Rejected | Accepted
//!     ▲                                                   │
//!     └───────────────────── on_field_change ─────────────┘
//! ```

use crate::config::SignupFormConfig;
use crate::error::{FormResult, ValidationError};
use crate::field::SignupField;
use crate::metadata::{FieldMetadata, FormMetadata, RuleMetadata};
use crate::rules::{SignupRule, SignupValidator};
use crate::state::FormState;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
	/// Waiting for input; also the phase after any edit
	#[default]
	Idle,
	/// The last submit failed a rule
	Rejected,
	/// The last submit passed every rule
	Accepted,
}

/// Result of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	Accepted,
	Rejected(ValidationError),
}

impl SubmitOutcome {
	pub fn is_accepted(&self) -> bool {
		matches!(self, SubmitOutcome::Accepted)
	}

	pub fn error(&self) -> Option<&ValidationError> {
		match self {
			SubmitOutcome::Accepted => None,
			SubmitOutcome::Rejected(error) => Some(error),
		}
	}

	/// Submission never navigates; the browser default is always suppressed.
	pub fn prevents_default(&self) -> bool {
		true
	}
}

/// A mounted signup form.
#[derive(Debug, Clone)]
pub struct SignupForm {
	config: SignupFormConfig,
	validator: SignupValidator,
	state: FormState,
	error: Option<ValidationError>,
	phase: FormPhase,
}

impl SignupForm {
	/// Mount a form with default configuration.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormPhase, SignupField, SignupForm};
	///
	/// let form = SignupForm::new();
	/// assert_eq!(form.value(SignupField::Email), "");
	/// assert_eq!(form.error_message(), None);
	/// assert_eq!(form.phase(), FormPhase::Idle);
	/// ```
	pub fn new() -> Self {
		Self::mount(SignupFormConfig::default())
	}

	/// Mount a form with `config`, rejecting invalid settings.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormError, SignupForm, SignupFormConfig};
	///
	/// let config = SignupFormConfig::default().with_min_password_length(8);
	/// let form = SignupForm::with_config(config).unwrap();
	/// assert_eq!(form.config().min_password_length, 8);
	///
	/// let config = SignupFormConfig::default().with_min_password_length(0);
	/// assert!(matches!(SignupForm::with_config(config), Err(FormError::Config(_))));
	/// ```
	pub fn with_config(config: SignupFormConfig) -> FormResult<Self> {
		config.validate()?;
		Ok(Self::mount(config))
	}

	fn mount(config: SignupFormConfig) -> Self {
		tracing::debug!(
			min_password_length = config.min_password_length,
			"signup form mounted"
		);
		Self {
			validator: SignupValidator::new(&config),
			config,
			state: FormState::new(),
			error: None,
			phase: FormPhase::Idle,
		}
	}

	/// Record a new value for `field`.
	///
	/// The state is replaced wholesale with a copy holding the new value.
	/// No validation runs and the error slot is left as it is.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{SignupField, SignupForm};
	///
	/// let mut form = SignupForm::new();
	/// form.on_field_change(SignupField::Password, "12345");
	/// assert_eq!(form.value(SignupField::Password), "12345");
	/// ```
	pub fn on_field_change(&mut self, field: SignupField, value: impl Into<String>) {
		tracing::trace!(field = field.name(), "signup field changed");
		self.state = self.state.with_field(field, value);
		self.phase = FormPhase::Idle;
	}

	/// Record a new value for the field whose form data name is `name`.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormError, SignupField, SignupForm};
	///
	/// let mut form = SignupForm::new();
	/// form.on_field_change_by_name("confirmPassword", "12345").unwrap();
	/// assert_eq!(form.value(SignupField::ConfirmPassword), "12345");
	///
	/// let err = form.on_field_change_by_name("username", "selena").unwrap_err();
	/// assert!(matches!(err, FormError::UnknownField(_)));
	/// ```
	pub fn on_field_change_by_name(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
		let field: SignupField = name.parse()?;
		self.on_field_change(field, value);
		Ok(())
	}

	/// Run the rule chain and publish the outcome.
	///
	/// A rejection overwrites the error slot with the first failing rule's
	/// message. An acceptance clears the slot unless
	/// `clear_error_on_success` is disabled.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{SignupField, SignupForm, SubmitOutcome, ValidationError};
	///
	/// let mut form = SignupForm::new();
	/// form.on_field_change(SignupField::Email, "selenagmail.com");
	///
	/// assert_eq!(form.on_submit(), SubmitOutcome::Rejected(ValidationError::InvalidEmail));
	/// assert_eq!(form.error_message().as_deref(), Some("The email you entered is invalid"));
	/// ```
	pub fn on_submit(&mut self) -> SubmitOutcome {
		match self.validator.validate(&self.state) {
			Ok(()) => {
				tracing::debug!("signup submission accepted");
				if self.config.clear_error_on_success {
					self.error = None;
				}
				self.phase = FormPhase::Accepted;
				SubmitOutcome::Accepted
			}
			Err(error) => {
				tracing::debug!(reason = error.code(), "signup submission rejected");
				self.error = Some(error.clone());
				self.phase = FormPhase::Rejected;
				SubmitOutcome::Rejected(error)
			}
		}
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn value(&self, field: SignupField) -> &str {
		self.state.get(field)
	}

	pub fn error(&self) -> Option<&ValidationError> {
		self.error.as_ref()
	}

	/// The text currently shown under the form, if any.
	pub fn error_message(&self) -> Option<String> {
		self.error.as_ref().map(ToString::to_string)
	}

	pub fn phase(&self) -> FormPhase {
		self.phase
	}

	pub fn config(&self) -> &SignupFormConfig {
		&self.config
	}

	/// Extract serializable metadata for client-side rendering.
	///
	/// Password values are never included; only whether they are filled.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{SignupField, SignupForm};
	///
	/// let mut form = SignupForm::new();
	/// form.on_field_change(SignupField::Password, "hunter22");
	///
	/// let metadata = form.to_metadata();
	/// assert_eq!(metadata.fields.len(), 3);
	/// assert_eq!(metadata.fields[1].value, None);
	/// assert!(metadata.fields[1].filled);
	/// ```
	pub fn to_metadata(&self) -> FormMetadata {
		let fields = SignupField::ALL
			.iter()
			.map(|field| {
				let value = self.value(*field);
				FieldMetadata {
					name: field.name().to_string(),
					id: field.id().to_string(),
					label: field.label().to_string(),
					widget: field.widget(),
					value: (!field.widget().is_sensitive()).then(|| value.to_string()),
					filled: !value.is_empty(),
				}
			})
			.collect();

		let rules = SignupRule::ORDER
			.iter()
			.map(|rule| RuleMetadata {
				rule: *rule,
				fields: rule.fields().iter().map(|f| f.name().to_string()).collect(),
				error_message: self.rule_message(*rule),
			})
			.collect();

		FormMetadata {
			fields,
			rules,
			error: self.error_message(),
		}
	}

	fn rule_message(&self, rule: SignupRule) -> String {
		let error = match rule {
			SignupRule::EmailFormat => ValidationError::InvalidEmail,
			SignupRule::PasswordLength => ValidationError::PasswordTooShort {
				min_length: self.validator.min_password_length(),
			},
			SignupRule::PasswordMatch => ValidationError::PasswordMismatch,
		};
		error.to_string()
	}
}

impl Default for SignupForm {
	fn default() -> Self {
		Self::new()
	}
}
