// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content kinds served by the site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed categories of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
	/// Shared UI strings: navigation, footer, confirmation page.
	Ui,
	/// Job-seeker pitch served at `/`.
	VersionA,
	/// Developer pitch served at `/developers`.
	VersionB,
}

impl ContentKind {
	pub const ALL: [ContentKind; 3] = [ContentKind::Ui, ContentKind::VersionA, ContentKind::VersionB];

	/// Source file stem, e.g. `version-a` for `locales/<tag>/version-a.json`.
	pub fn as_str(self) -> &'static str {
		match self {
			ContentKind::Ui => "ui",
			ContentKind::VersionA => "version-a",
			ContentKind::VersionB => "version-b",
		}
	}

	pub fn file_name(self) -> String {
		format!("{}.json", self.as_str())
	}
}

impl fmt::Display for ContentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content kind '{0}' (expected one of: ui, version-a, version-b)")]
pub struct UnknownContentKind(pub String);

impl FromStr for ContentKind {
	type Err = UnknownContentKind;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ContentKind::ALL
			.into_iter()
			.find(|k| k.as_str() == s)
			.ok_or_else(|| UnknownContentKind(s.to_string()))
	}
}

/// The two page narratives. A narrower view of [`ContentKind`] for callers
/// that only deal with page bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageVariant {
	A,
	B,
}

impl From<PageVariant> for ContentKind {
	fn from(variant: PageVariant) -> Self {
		match variant {
			PageVariant::A => ContentKind::VersionA,
			PageVariant::B => ContentKind::VersionB,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_kinds() {
		assert_eq!("ui".parse::<ContentKind>().unwrap(), ContentKind::Ui);
		assert_eq!("version-a".parse::<ContentKind>().unwrap(), ContentKind::VersionA);
		assert_eq!("version-b".parse::<ContentKind>().unwrap(), ContentKind::VersionB);
	}

	#[test]
	fn test_parse_unknown_kind() {
		let err = "pricing".parse::<ContentKind>().unwrap_err();
		assert_eq!(err, UnknownContentKind("pricing".to_string()));
	}

	#[test]
	fn test_file_name() {
		assert_eq!(ContentKind::VersionB.file_name(), "version-b.json");
	}

	#[test]
	fn test_page_variant_maps_to_kind() {
		assert_eq!(ContentKind::from(PageVariant::A), ContentKind::VersionA);
		assert_eq!(ContentKind::from(PageVariant::B), ContentKind::VersionB);
	}
}
