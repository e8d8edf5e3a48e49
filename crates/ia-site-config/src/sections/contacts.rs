// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Public contact channels.

use serde::{Deserialize, Serialize};

const DEFAULT_EMAIL: &str = "hello@interviewassistant.ai";
const DEFAULT_TELEGRAM: &str = "interview_assistant";

/// Contact configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsConfig {
	pub email: String,
	/// Telegram handle without the leading `@`.
	pub telegram: String,
}

impl Default for ContactsConfig {
	fn default() -> Self {
		ContactsConfigLayer::default().finalize()
	}
}

impl ContactsConfig {
	pub fn telegram_url(&self) -> String {
		format!("https://t.me/{}", self.telegram)
	}

	pub fn telegram_label(&self) -> String {
		format!("@{}", self.telegram)
	}

	pub fn mailto(&self) -> String {
		format!("mailto:{}", self.email)
	}
}

/// Contact configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactsConfigLayer {
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub telegram: Option<String>,
}

impl ContactsConfigLayer {
	pub fn merge(&mut self, other: ContactsConfigLayer) {
		if other.email.is_some() {
			self.email = other.email;
		}
		if other.telegram.is_some() {
			self.telegram = other.telegram;
		}
	}

	pub fn finalize(self) -> ContactsConfig {
		ContactsConfig {
			email: self.email.unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
			telegram: self
				.telegram
				.map(|t| t.trim_start_matches('@').to_string())
				.unwrap_or_else(|| DEFAULT_TELEGRAM.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_derived_telegram_links() {
		let contacts = ContactsConfig::default();
		assert_eq!(contacts.telegram_url(), "https://t.me/interview_assistant");
		assert_eq!(contacts.telegram_label(), "@interview_assistant");
		assert_eq!(contacts.mailto(), "mailto:hello@interviewassistant.ai");
	}

	#[test]
	fn test_leading_at_is_stripped() {
		let contacts = ContactsConfigLayer {
			telegram: Some("@support_bot".to_string()),
			..Default::default()
		}
		.finalize();
		assert_eq!(contacts.telegram, "support_bot");
		assert_eq!(contacts.telegram_label(), "@support_bot");
	}
}
