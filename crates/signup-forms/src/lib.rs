//! Signup form state and validation
//!
//! This crate provides the non-visual half of the signup form:
//! - Typed field identifiers with their labels, DOM ids and widgets
//! - An immutable-update `FormState` record for the three inputs
//! - Email and minimum-length validators
//! - The ordered, short-circuiting rule chain run on submit
//! - `SignupForm`, which owns the state and the single error slot
//! - TOML-loadable configuration and serializable form metadata
//!
//! ## Example
//!
//! ```
//! use signup_forms::{SignupField, SignupForm, SubmitOutcome};
//!
//! let mut form = SignupForm::new();
//! form.on_field_change(SignupField::Email, "selena@gmail.com");
//! form.on_field_change(SignupField::Password, "12345");
//! form.on_field_change(SignupField::ConfirmPassword, "12345");
//!
//! assert_eq!(form.on_submit(), SubmitOutcome::Accepted);
//! assert_eq!(form.error_message(), None);
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod metadata;
pub mod rules;
pub mod state;
pub mod validators;

pub use config::SignupFormConfig;
pub use error::{FieldError, FieldResult, FormError, FormResult, ValidationError};
pub use field::{SignupField, Widget};
pub use form::{FormPhase, SignupForm, SubmitOutcome};
pub use metadata::{FieldMetadata, FormMetadata, RuleMetadata};
pub use rules::{SignupRule, SignupValidator};
pub use state::FormState;
pub use validators::{EmailValidator, MinLengthValidator};
