//! Headless screen for UI behavior tests
//!
//! [`Screen`] mounts a [`SignupPage`] and answers DOM-style queries against
//! its rendered view: inputs are found through their associated label,
//! buttons by role, and messages by text. [`user_event`] drives the page the
//! way a user would, one keystroke at a time.
//!
//! ## Example
//!
//! ```
//! use signup_pages::testing::{Role, Screen, TextMatch, user_event};
//!
//! let mut screen = Screen::render_default();
//! let email = screen.get_by_label_text(&TextMatch::exact("Email address")).unwrap();
//! user_event::type_text(&mut screen, &email, "selenagmail.com").unwrap();
//!
//! let button = screen.get_by_role(Role::Button).unwrap();
//! user_event::click(&mut screen, &button).unwrap();
//!
//! let message = screen.query_by_text(&TextMatch::insensitive("the email you entered is invalid"));
//! assert!(message.is_some());
//! ```

use crate::component::{Component, ElementView, View};
use crate::signup::{EventResponse, SignupPage, UiEvent};
use regex::Regex;
use signup_forms::FormError;

/// Errors raised by screen queries and user events.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
	#[error("Unable to find an element {0}")]
	NotFound(String),
	#[error("Found multiple elements {0}")]
	Multiple(String),
	#[error("Label {label:?} is not associated with any form control")]
	UnlabelledControl { label: String },
	#[error("Event dispatch failed: {0}")]
	Dispatch(#[from] FormError),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// How text is compared in queries.
#[derive(Debug, Clone)]
pub enum TextMatch {
	/// Whole-string match after trimming and collapsing whitespace
	Exact(String),
	/// Case-insensitive substring match
	Insensitive(String),
	/// Regular expression match
	Pattern(Regex),
}

impl TextMatch {
	pub fn exact(text: impl Into<String>) -> Self {
		TextMatch::Exact(text.into())
	}

	pub fn insensitive(text: impl Into<String>) -> Self {
		TextMatch::Insensitive(text.into())
	}

	pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
		Ok(TextMatch::Pattern(Regex::new(pattern)?))
	}

	/// Whether `text` satisfies this matcher.
	///
	/// # Examples
	///
	/// ```
	/// use signup_pages::testing::TextMatch;
	///
	/// assert!(TextMatch::exact("Password").matches("  Password "));
	/// assert!(!TextMatch::exact("Password").matches("Confirm Password"));
	/// assert!(TextMatch::insensitive("confirm password").matches("Confirm Password"));
	/// ```
	pub fn matches(&self, text: &str) -> bool {
		let normalized = normalize(text);
		match self {
			TextMatch::Exact(expected) => normalized == normalize(expected),
			TextMatch::Insensitive(needle) => normalized
				.to_lowercase()
				.contains(&normalize(needle).to_lowercase()),
			TextMatch::Pattern(regex) => regex.is_match(&normalized),
		}
	}

	fn describe(&self) -> String {
		match self {
			TextMatch::Exact(text) => format!("{text:?}"),
			TextMatch::Insensitive(text) => format!("/{text}/i"),
			TextMatch::Pattern(regex) => format!("/{}/", regex.as_str()),
		}
	}
}

fn normalize(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// ARIA role used by [`Screen::get_by_role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
	Button,
}

impl Role {
	fn matches(&self, element: &ElementView) -> bool {
		let input_type = element.get_attr("type").unwrap_or("text");
		match (self, element.tag_name()) {
			(Role::Button, "button") => true,
			(Role::Button, "input") => matches!(input_type, "submit" | "button" | "reset"),
			_ => false,
		}
	}
}

/// Handle to a form control found on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHandle {
	pub id: String,
	pub name: String,
	pub input_type: String,
}

/// Handle to a button found on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonHandle {
	pub text: String,
	pub button_type: String,
	pub disabled: bool,
}

impl ButtonHandle {
	pub fn is_enabled(&self) -> bool {
		!self.disabled
	}
}

/// A mounted page plus query helpers.
#[derive(Debug)]
pub struct Screen {
	page: SignupPage,
}

impl Screen {
	pub fn render(page: SignupPage) -> Self {
		tracing::trace!(component = SignupPage::name(), "rendering screen");
		Self { page }
	}

	pub fn render_default() -> Self {
		Self::render(SignupPage::new())
	}

	pub fn page(&self) -> &SignupPage {
		&self.page
	}

	pub fn view(&self) -> View {
		self.page.render()
	}

	/// Find the single form control whose label text matches.
	pub fn get_by_label_text(&self, matcher: &TextMatch) -> QueryResult<InputHandle> {
		let view = self.view();
		let elements = view.elements();

		let labels: Vec<&ElementView> = elements
			.iter()
			.copied()
			.filter(|el| el.tag_name() == "label" && matcher.matches(&el.text_content()))
			.collect();

		let label = single(labels, || format!("with the label text {}", matcher.describe()))?;
		let unlabelled = || QueryError::UnlabelledControl {
			label: label.text_content(),
		};
		let target = label.get_attr("for").ok_or_else(unlabelled)?;

		let control = elements
			.iter()
			.find(|el| is_form_control(el) && el.get_attr("id") == Some(target))
			.ok_or_else(unlabelled)?;

		Ok(InputHandle {
			id: target.to_string(),
			name: control.get_attr("name").unwrap_or_default().to_string(),
			input_type: control.get_attr("type").unwrap_or("text").to_string(),
		})
	}

	/// Find the single element with `role`.
	pub fn get_by_role(&self, role: Role) -> QueryResult<ButtonHandle> {
		let view = self.view();
		let matching: Vec<&ElementView> = view
			.elements()
			.into_iter()
			.filter(|el| role.matches(el))
			.collect();

		let element = single(matching, || format!("with the role {role:?}"))?;
		Ok(ButtonHandle {
			text: normalize(&element.text_content()),
			button_type: element.get_attr("type").unwrap_or("submit").to_string(),
			disabled: element.get_attr("disabled").is_some(),
		})
	}

	/// Text of the first element whose own text matches, if any.
	pub fn query_by_text(&self, matcher: &TextMatch) -> Option<String> {
		self.view()
			.elements()
			.into_iter()
			.map(ElementView::own_text)
			.find(|text| !text.trim().is_empty() && matcher.matches(text))
	}

	/// Like [`Screen::query_by_text`], but missing text is an error.
	pub fn get_by_text(&self, matcher: &TextMatch) -> QueryResult<String> {
		self.query_by_text(matcher)
			.ok_or_else(|| QueryError::NotFound(format!("with the text {}", matcher.describe())))
	}

	/// Current `value` of a control.
	pub fn input_value(&self, input: &InputHandle) -> QueryResult<String> {
		let view = self.view();
		view.elements()
			.into_iter()
			.find(|el| is_form_control(el) && el.get_attr("id") == Some(input.id.as_str()))
			.map(|el| el.get_attr("value").unwrap_or_default().to_string())
			.ok_or_else(|| QueryError::NotFound(format!("with the id {:?}", input.id)))
	}

	fn dispatch(&mut self, event: UiEvent) -> QueryResult<EventResponse> {
		Ok(self.page.dispatch(event)?)
	}
}

fn is_form_control(element: &ElementView) -> bool {
	matches!(element.tag_name(), "input" | "textarea" | "select")
}

fn single<'a>(
	mut found: Vec<&'a ElementView>,
	describe: impl Fn() -> String,
) -> QueryResult<&'a ElementView> {
	match found.len() {
		0 => Err(QueryError::NotFound(describe())),
		1 => Ok(found.remove(0)),
		_ => Err(QueryError::Multiple(describe())),
	}
}

/// User interactions against a [`Screen`].
pub mod user_event {
	use super::{ButtonHandle, InputHandle, QueryResult, Screen};
	use crate::signup::{EventResponse, UiEvent};

	/// Type `text` into `input`, appending one character per input event.
	pub fn type_text(screen: &mut Screen, input: &InputHandle, text: &str) -> QueryResult<()> {
		let mut value = screen.input_value(input)?;
		for ch in text.chars() {
			value.push(ch);
			screen.dispatch(UiEvent::input(input.name.clone(), value.clone()))?;
		}
		Ok(())
	}

	/// Replace the whole value of `input` with a single input event.
	pub fn clear_and_type(screen: &mut Screen, input: &InputHandle, text: &str) -> QueryResult<()> {
		screen.dispatch(UiEvent::input(input.name.clone(), text))?;
		Ok(())
	}

	/// Click `button`. Disabled buttons and non-submit buttons do nothing.
	pub fn click(screen: &mut Screen, button: &ButtonHandle) -> QueryResult<EventResponse> {
		if button.disabled || button.button_type != "submit" {
			return Ok(EventResponse::default());
		}
		screen.dispatch(UiEvent::Submit)
	}
}
