//! Signup page rendering
//!
//! This module provides access to `signup-pages`: the view tree, the
//! `SignupPage` component and the headless test screen.
//!
//! ## Example
//!
//! ```
//! use signup::pages::testing::{Role, Screen, TextMatch, user_event};
//!
//! let mut screen = Screen::render_default();
//! let button = screen.get_by_role(Role::Button).unwrap();
//! user_event::click(&mut screen, &button).unwrap();
//!
//! assert!(screen
//!     .query_by_text(&TextMatch::exact("The email you entered is invalid"))
//!     .is_some());
//! ```

// Re-export all signup-pages functionality
pub use signup_pages::*;
