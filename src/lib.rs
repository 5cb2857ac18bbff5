//! # Signup
//!
//! A client-side signup form: three inputs (email, password, confirm
//! password), an ordered validation chain run on submit, and a single
//! error message slot.
//!
//! ## Feature Flags
//!
//! Both features are enabled by default.
//!
//! - `forms` (default) - Form state, validators and the rule chain
//!   (`signup-forms`)
//! - `pages` (default, implies `forms`) - The renderable `SignupPage`
//!   component and the headless test screen (`signup-pages`)
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "pages")]
//! # {
//! use signup::prelude::*;
//!
//! let mut page = SignupPage::new();
//! page.dispatch(UiEvent::input("email", "selena@gmail.com")).unwrap();
//! page.dispatch(UiEvent::input("password", "123")).unwrap();
//!
//! let response = page.dispatch(UiEvent::Submit).unwrap();
//! assert!(response.prevent_default);
//! assert_eq!(
//!     page.form().error_message().as_deref(),
//!     Some("The password you entered should contain 5 or more characters")
//! );
//! # }
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

// Re-export forms (forms feature)
#[cfg(feature = "forms")]
pub use signup_forms::{
	FormError, FormResult, FormState, SignupField, SignupForm, SignupFormConfig, SubmitOutcome,
	ValidationError,
};

// Re-export pages (pages feature)
#[cfg(feature = "pages")]
pub use signup_pages::{Component, EventResponse, SignupPage, UiEvent, View};

pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::{
		FormError, FormResult, FormState, SignupField, SignupForm, SignupFormConfig,
		SubmitOutcome, ValidationError,
	};

	#[cfg(feature = "pages")]
	pub use crate::{Component, EventResponse, SignupPage, UiEvent, View};
}
