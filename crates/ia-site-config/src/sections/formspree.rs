// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Waitlist form endpoint.

use serde::{Deserialize, Serialize};

const DEFAULT_FORM_ID: &str = "demo";

/// Formspree configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormspreeConfig {
	pub id: String,
}

impl Default for FormspreeConfig {
	fn default() -> Self {
		FormspreeConfigLayer::default().finalize()
	}
}

impl FormspreeConfig {
	/// The `action` attribute of the waitlist form.
	pub fn action(&self) -> String {
		format!("https://formspree.io/f/{}", self.id)
	}

	/// The placeholder form is in use; submissions go nowhere useful.
	pub fn is_demo(&self) -> bool {
		self.id == DEFAULT_FORM_ID
	}
}

/// Formspree configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormspreeConfigLayer {
	#[serde(default)]
	pub id: Option<String>,
}

impl FormspreeConfigLayer {
	pub fn merge(&mut self, other: FormspreeConfigLayer) {
		if other.id.is_some() {
			self.id = other.id;
		}
	}

	pub fn finalize(self) -> FormspreeConfig {
		FormspreeConfig {
			id: self.id.unwrap_or_else(|| DEFAULT_FORM_ID.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_demo() {
		let formspree = FormspreeConfig::default();
		assert!(formspree.is_demo());
		assert_eq!(formspree.action(), "https://formspree.io/f/demo");
	}

	#[test]
	fn test_custom_id() {
		let formspree = FormspreeConfigLayer {
			id: Some("xyzzy123".to_string()),
		}
		.finalize();
		assert!(!formspree.is_demo());
		assert_eq!(formspree.action(), "https://formspree.io/f/xyzzy123");
	}
}
