// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware URL paths.
//!
//! The default locale owns the unprefixed URL space; every other locale is
//! mounted under `/<tag>`.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Build the canonical path of `path` for `locale`.
///
/// Leading and trailing slashes of `path` are ignored. The root path of a
/// non-default locale has no trailing slash (`/es`).
///
/// # Example
///
/// ```
/// use ia_common_i18n::{localized_path, Locale};
///
/// assert_eq!(localized_path(Locale::En, "/pricing/"), "/pricing");
/// assert_eq!(localized_path(Locale::Es, "pricing"), "/es/pricing");
/// assert_eq!(localized_path(Locale::Es, "/"), "/es");
/// assert_eq!(localized_path(Locale::En, ""), "/");
/// ```
pub fn localized_path(locale: Locale, path: &str) -> String {
	let clean = path.trim_matches('/');

	match (locale.is_default(), clean.is_empty()) {
		(true, true) => "/".to_string(),
		(true, false) => format!("/{clean}"),
		(false, true) => format!("/{}", locale.tag()),
		(false, false) => format!("/{}/{clean}", locale.tag()),
	}
}

/// Derive the active locale from a request path.
///
/// Only the first path segment is inspected (`//es` has an empty one). A
/// query string or fragment is ignored. Anything that is not a supported tag
/// yields [`DEFAULT_LOCALE`].
///
/// # Example
///
/// ```
/// use ia_common_i18n::{locale_from_path, Locale};
///
/// assert_eq!(locale_from_path("/es/pricing"), Locale::Es);
/// assert_eq!(locale_from_path("/pricing"), Locale::En);
/// assert_eq!(locale_from_path("/xx/pricing"), Locale::En);
/// ```
pub fn locale_from_path(path: &str) -> Locale {
	let path = path.split(['?', '#']).next().unwrap_or_default();
	let path = path.strip_prefix('/').unwrap_or(path);
	let segment = path.split('/').next().unwrap_or_default();

	match Locale::from_tag(segment) {
		Some(locale) => locale,
		None => {
			if !segment.is_empty() {
				tracing::trace!(segment, "first path segment is not a locale, using default");
			}
			DEFAULT_LOCALE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locale::LOCALES;
	use proptest::prelude::*;

	#[test]
	fn test_default_locale_is_unprefixed() {
		assert_eq!(localized_path(DEFAULT_LOCALE, "/pricing"), "/pricing");
		assert_eq!(localized_path(DEFAULT_LOCALE, "/"), "/");
		assert_eq!(localized_path(DEFAULT_LOCALE, "/developers/"), "/developers");
	}

	#[test]
	fn test_non_default_locale_is_prefixed() {
		assert_eq!(localized_path(Locale::Es, "/pricing"), "/es/pricing");
		assert_eq!(localized_path(Locale::PtBr, "/developers"), "/pt-BR/developers");
		assert_eq!(localized_path(Locale::ZhCn, "a/b/c"), "/zh-CN/a/b/c");
	}

	#[test]
	fn test_root_for_non_default_has_no_trailing_slash() {
		assert_eq!(localized_path(Locale::Es, "/"), "/es");
		assert_eq!(localized_path(Locale::Es, ""), "/es");
		assert_eq!(localized_path(Locale::Es, "//"), "/es");
	}

	#[test]
	fn test_repeated_slashes_are_trimmed() {
		assert_eq!(localized_path(Locale::Fr, "///thanks///"), "/fr/thanks");
	}

	#[test]
	fn test_locale_from_path() {
		assert_eq!(locale_from_path("/es/pricing"), Locale::Es);
		assert_eq!(locale_from_path("/es"), Locale::Es);
		assert_eq!(locale_from_path("/es/"), Locale::Es);
		assert_eq!(locale_from_path("/pt-BR/developers"), Locale::PtBr);
		assert_eq!(locale_from_path("/pricing"), DEFAULT_LOCALE);
		assert_eq!(locale_from_path("/xx/pricing"), DEFAULT_LOCALE);
	}

	#[test]
	fn test_locale_from_malformed_path() {
		assert_eq!(locale_from_path(""), DEFAULT_LOCALE);
		assert_eq!(locale_from_path("/"), DEFAULT_LOCALE);
		assert_eq!(locale_from_path("//es"), DEFAULT_LOCALE);
		assert_eq!(locale_from_path("//es/pricing"), DEFAULT_LOCALE);
		assert_eq!(locale_from_path("/ES/pricing"), DEFAULT_LOCALE);
		assert_eq!(locale_from_path("/pricing/es"), DEFAULT_LOCALE);
	}

	#[test]
	fn test_locale_from_path_ignores_query_and_fragment() {
		assert_eq!(locale_from_path("/fr?utm=x"), Locale::Fr);
		assert_eq!(locale_from_path("/fr#faq"), Locale::Fr);
		assert_eq!(locale_from_path("/?lang=fr"), DEFAULT_LOCALE);
	}

	proptest! {
		/// A localized path always leads back to its locale.
		#[test]
		fn localized_path_roundtrip(
			idx in 0..LOCALES.len(),
			segments in proptest::collection::vec("[a-z0-9]{4,10}", 0..4),
		) {
			let locale = LOCALES[idx];
			let path = format!("/{}", segments.join("/"));
			prop_assert_eq!(locale_from_path(&localized_path(locale, &path)), locale);
		}

		/// Localized paths start with one slash and never end with one, except the root.
		#[test]
		fn localized_path_shape(idx in 0..LOCALES.len(), path in "/{0,3}[a-z]{0,8}/{0,3}") {
			let out = localized_path(LOCALES[idx], &path);
			prop_assert!(out.starts_with('/'));
			prop_assert!(!out.starts_with("//"));
			prop_assert!(out == "/" || !out.ends_with('/'));
		}
	}
}
