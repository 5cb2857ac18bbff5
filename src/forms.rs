//! Form state and validation
//!
//! This module provides access to `signup-forms`: the field identifiers,
//! the immutable `FormState`, the validators and the ordered rule chain.
//!
//! ## Example
//!
//! ```
//! use signup::forms::{FormState, SignupField, SignupValidator, ValidationError};
//!
//! let state = FormState::new()
//!     .with_field(SignupField::Email, "selena@gmail.com")
//!     .with_field(SignupField::Password, "123");
//!
//! assert_eq!(
//!     SignupValidator::default().validate(&state),
//!     Err(ValidationError::PasswordTooShort { min_length: 5 })
//! );
//! ```

// Re-export all signup-forms functionality
pub use signup_forms::*;
