//! Signup page rendering
//!
//! Turns a [`signup_forms::SignupForm`] into a Bootstrap-styled view tree and
//! routes UI events back into it.
//!
//! ## Modules
//!
//! - [`component`]: the `Component` trait and the `View` tree
//! - [`signup`]: the `SignupPage` component and its events
//! - [`testing`]: a headless screen with label, role and text queries

pub mod component;
pub mod signup;
pub mod testing;

pub use component::{Component, ElementView, IntoView, View};
pub use signup::{EventResponse, SignupPage, UiEvent};

pub use signup_forms::{SignupField, SignupFormConfig, SubmitOutcome, ValidationError};
