//! Signup form configuration
//!
//! Configuration is plain data with serde defaults, so an empty TOML
//! document yields the stock behavior.
//!
//! ```toml
//! min_password_length = 5
//! clear_error_on_success = true
//! ```

use crate::error::{FormError, FormResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignupFormConfig {
	/// Minimum number of characters a password must contain
	pub min_password_length: usize,
	/// Whether an accepted submit clears a message left by an earlier rejection
	pub clear_error_on_success: bool,
}

impl Default for SignupFormConfig {
	fn default() -> Self {
		Self {
			min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
			clear_error_on_success: true,
		}
	}
}

impl SignupFormConfig {
	/// Parse and validate a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::SignupFormConfig;
	///
	/// let config = SignupFormConfig::from_toml_str("min_password_length = 8").unwrap();
	/// assert_eq!(config.min_password_length, 8);
	/// assert!(config.clear_error_on_success);
	///
	/// assert_eq!(SignupFormConfig::from_toml_str("").unwrap(), SignupFormConfig::default());
	/// ```
	pub fn from_toml_str(source: &str) -> FormResult<Self> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn with_min_password_length(mut self, min_password_length: usize) -> Self {
		self.min_password_length = min_password_length;
		self
	}

	pub fn with_clear_error_on_success(mut self, clear: bool) -> Self {
		self.clear_error_on_success = clear;
		self
	}

	/// Check invariants that serde cannot express.
	pub fn validate(&self) -> FormResult<()> {
		if self.min_password_length == 0 {
			return Err(FormError::Config(
				"min_password_length must be at least 1".to_string(),
			));
		}
		Ok(())
	}
}
