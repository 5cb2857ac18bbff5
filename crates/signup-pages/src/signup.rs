//! Signup page component
//!
//! `SignupPage` wraps a [`SignupForm`] and renders it as Bootstrap-styled
//! markup. UI events from the rendering collaborator are fed back through
//! [`SignupPage::dispatch`].
//!
//! ```text
//! div.container.my-5
//! └── form
//!     └── div.mb-3
//!         ├── label[for=email]            input#email[type=email]
//!         ├── label[for=password]         input#password[type=password]
//!         ├── label[for=confirm-password] input#confirm-password[type=password]
//!         ├── p.text-danger               (only while an error is set)
//!         └── button[type=submit]
//! ```

use crate::component::{Component, ElementView, IntoView, View};
use signup_forms::{FormResult, SignupField, SignupForm, SignupFormConfig, SubmitOutcome};

/// Event delivered by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
	/// An input's value changed; `name` is the input's `name` attribute.
	Input { name: String, value: String },
	/// The submit button was activated.
	Submit,
}

impl UiEvent {
	pub fn input(name: impl Into<String>, value: impl Into<String>) -> Self {
		UiEvent::Input {
			name: name.into(),
			value: value.into(),
		}
	}

	fn kind(&self) -> &'static str {
		match self {
			UiEvent::Input { .. } => "input",
			UiEvent::Submit => "submit",
		}
	}
}

/// What the collaborator should do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventResponse {
	/// Suppress the browser's default action (form navigation)
	pub prevent_default: bool,
	/// Set for submit events
	pub outcome: Option<SubmitOutcome>,
}

/// The signup form as a renderable component.
#[derive(Debug, Clone, Default)]
pub struct SignupPage {
	form: SignupForm,
}

impl SignupPage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: SignupFormConfig) -> FormResult<Self> {
		Ok(Self {
			form: SignupForm::with_config(config)?,
		})
	}

	pub fn form(&self) -> &SignupForm {
		&self.form
	}

	/// Route a UI event to the form.
	///
	/// # Examples
	///
	/// ```
	/// use signup_pages::{SignupPage, UiEvent};
	///
	/// let mut page = SignupPage::new();
	/// page.dispatch(UiEvent::input("email", "selenagmail.com")).unwrap();
	///
	/// let response = page.dispatch(UiEvent::Submit).unwrap();
	/// assert!(response.prevent_default);
	/// assert!(page.render_html().contains("The email you entered is invalid"));
	/// ```
	pub fn dispatch(&mut self, event: UiEvent) -> FormResult<EventResponse> {
		tracing::trace!(kind = event.kind(), "dispatching signup page event");
		match event {
			UiEvent::Input { name, value } => {
				self.form.on_field_change_by_name(&name, value)?;
				Ok(EventResponse::default())
			}
			UiEvent::Submit => {
				let outcome = self.form.on_submit();
				Ok(EventResponse {
					prevent_default: outcome.prevents_default(),
					outcome: Some(outcome),
				})
			}
		}
	}

	pub fn render_html(&self) -> String {
		self.render().render_to_string()
	}

	fn render_field(&self, field: SignupField) -> (ElementView, ElementView) {
		let label = ElementView::new("label")
			.attr("for", field.id())
			.attr("class", "form-label")
			.child(field.label());

		let input = ElementView::new("input")
			.attr("type", field.widget().input_type())
			.attr("id", field.id())
			.attr("name", field.name())
			.attr("class", "form-control")
			.attr("value", self.form.value(field).to_string());

		(label, input)
	}
}

impl Component for SignupPage {
	fn render(&self) -> View {
		let fields: Vec<View> = SignupField::ALL
			.into_iter()
			.map(|field| self.render_field(field).into_view())
			.collect();

		let error = self.form.error_message().map(|message| {
			ElementView::new("p")
				.attr("class", "text-danger")
				.child(message)
		});

		let submit = ElementView::new("button")
			.attr("type", "submit")
			.attr("class", "btn btn-primary")
			.child("Submit");

		ElementView::new("div")
			.attr("class", "container my-5")
			.child(
				ElementView::new("form").child(
					ElementView::new("div")
						.attr("class", "mb-3")
						.children(fields)
						.child(error)
						.child(submit),
				),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"SignupPage"
	}
}
