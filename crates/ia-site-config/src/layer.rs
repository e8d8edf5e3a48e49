// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{
	ContactsConfigLayer, FormspreeConfigLayer, LoggingConfigLayer, SiteConfigLayer,
	SitemapConfigLayer,
};

/// One source's view of the configuration. Absent sections leave lower
/// precedence values untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub site: Option<SiteConfigLayer>,
	#[serde(default)]
	pub contacts: Option<ContactsConfigLayer>,
	#[serde(default)]
	pub formspree: Option<FormspreeConfigLayer>,
	#[serde(default)]
	pub sitemap: Option<SitemapConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	let Some(other) = other else {
		return;
	};
	match base {
		Some(b) => merge(b, other),
		None => *base = Some(other),
	}
}

impl ConfigLayer {
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_section(&mut self.site, other.site, SiteConfigLayer::merge);
		merge_section(&mut self.contacts, other.contacts, ContactsConfigLayer::merge);
		merge_section(&mut self.formspree, other.formspree, FormspreeConfigLayer::merge);
		merge_section(&mut self.sitemap, other.sitemap, SitemapConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_full_file() {
		let layer: ConfigLayer = toml::from_str(
			r#"
			[site]
			url = "https://staging.interviewassistant.ai"

			[contacts]
			telegram = "ia_staging"

			[formspree]
			id = "abc123"

			[sitemap]
			exclude = ["/thanks", "/preview"]

			[logging]
			level = "debug"
			"#,
		)
		.unwrap();
		assert_eq!(
			layer.site.unwrap().url.as_deref(),
			Some("https://staging.interviewassistant.ai")
		);
		assert_eq!(layer.sitemap.unwrap().exclude.unwrap().len(), 2);
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
	}

	#[test]
	fn test_unknown_section_rejected() {
		assert!(toml::from_str::<ConfigLayer>("[database]\nurl = \"x\"").is_err());
	}

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = ConfigLayer::default();
		base.merge(ConfigLayer {
			formspree: Some(FormspreeConfigLayer {
				id: Some("abc".to_string()),
			}),
			..Default::default()
		});
		assert_eq!(base.formspree.unwrap().id.as_deref(), Some("abc"));
	}

	#[test]
	fn test_merge_overrides_field_by_field() {
		let mut base = ConfigLayer {
			contacts: Some(ContactsConfigLayer {
				email: Some("a@example.com".to_string()),
				telegram: Some("a_bot".to_string()),
			}),
			..Default::default()
		};
		base.merge(ConfigLayer {
			contacts: Some(ContactsConfigLayer {
				email: Some("b@example.com".to_string()),
				telegram: None,
			}),
			..Default::default()
		});
		let contacts = base.contacts.unwrap();
		assert_eq!(contacts.email.as_deref(), Some("b@example.com"));
		assert_eq!(contacts.telegram.as_deref(), Some("a_bot"));
	}
}
