// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation coverage reporting.

use ia_common_i18n::Locale;
use serde::Serialize;

use crate::kind::ContentKind;

/// Coverage of every supported locale, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
	pub locales: Vec<LocaleCoverage>,
}

/// Which content kinds one locale has authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCoverage {
	pub locale: Locale,
	pub present: Vec<ContentKind>,
	/// Kinds served from the default locale instead.
	pub missing: Vec<ContentKind>,
}

impl LocaleCoverage {
	pub fn is_complete(&self) -> bool {
		self.missing.is_empty()
	}

	/// Coverage as a percentage (0.0–100.0).
	pub fn percentage(&self) -> f64 {
		let total = self.present.len() + self.missing.len();
		if total == 0 {
			return 100.0;
		}
		self.present.len() as f64 / total as f64 * 100.0
	}
}

impl CoverageReport {
	/// Every (locale, kind) pair that falls back to the default locale.
	pub fn gaps(&self) -> impl Iterator<Item = (Locale, ContentKind)> + '_ {
		self
			.locales
			.iter()
			.flat_map(|c| c.missing.iter().map(move |&kind| (c.locale, kind)))
	}

	pub fn is_complete(&self) -> bool {
		self.locales.iter().all(LocaleCoverage::is_complete)
	}

	pub fn for_locale(&self, locale: Locale) -> Option<&LocaleCoverage> {
		self.locales.iter().find(|c| c.locale == locale)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn report() -> CoverageReport {
		CoverageReport {
			locales: vec![
				LocaleCoverage {
					locale: Locale::En,
					present: ContentKind::ALL.to_vec(),
					missing: vec![],
				},
				LocaleCoverage {
					locale: Locale::Ar,
					present: vec![ContentKind::Ui],
					missing: vec![ContentKind::VersionA, ContentKind::VersionB],
				},
			],
		}
	}

	#[test]
	fn test_gaps_lists_missing_pairs() {
		let gaps: Vec<_> = report().gaps().collect();
		assert_eq!(
			gaps,
			vec![
				(Locale::Ar, ContentKind::VersionA),
				(Locale::Ar, ContentKind::VersionB)
			]
		);
	}

	#[test]
	fn test_completeness() {
		let report = report();
		assert!(!report.is_complete());
		assert!(report.for_locale(Locale::En).unwrap().is_complete());
		assert!(!report.for_locale(Locale::Ar).unwrap().is_complete());
		assert!(report.for_locale(Locale::Fr).is_none());
	}

	#[test]
	fn test_percentage() {
		let report = report();
		assert_eq!(report.for_locale(Locale::En).unwrap().percentage(), 100.0);
		let ar = report.for_locale(Locale::Ar).unwrap().percentage();
		assert!((ar - 33.333).abs() < 0.01);
	}

	#[test]
	fn test_serializes_tags() {
		let json = serde_json::to_value(report()).unwrap();
		assert_eq!(json["locales"][1]["locale"], "ar");
		assert_eq!(json["locales"][1]["missing"][0], "version-a");
	}
}
