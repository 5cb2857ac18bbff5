//! Component system
//!
//! Components render to a [`View`] tree that can be turned into HTML with
//! [`View::render_to_string`] or inspected directly by the test screen.

mod r#trait;
mod view;

pub use r#trait::Component;
pub use view::{ElementView, IntoView, View};
