//! Component trait definition.

use super::view::View;

/// Trait for UI components.
///
/// # Example
///
/// ```
/// use signup_pages::component::{Component, ElementView, IntoView, View};
///
/// struct Notice {
///     text: &'static str,
/// }
///
/// impl Component for Notice {
///     fn render(&self) -> View {
///         ElementView::new("p")
///             .attr("class", "text-danger")
///             .child(self.text)
///             .into_view()
///     }
///
///     fn name() -> &'static str {
///         "Notice"
///     }
/// }
///
/// let html = Notice { text: "Oops" }.render().render_to_string();
/// assert_eq!(html, r#"<p class="text-danger">Oops</p>"#);
/// ```
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
