// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale preference resolution.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve the effective locale from a visitor preference and a fallback.
///
/// Resolution order (highest to lowest priority):
/// 1. Preferred locale (if supported)
/// 2. Fallback locale (if supported)
/// 3. [`DEFAULT_LOCALE`]
///
/// # Example
///
/// ```
/// use ia_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("es"), "en"), Locale::Es);
/// assert_eq!(resolve_locale(None, "fr"), Locale::Fr);
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), Locale::En);
/// ```
pub fn resolve_locale(preferred: Option<&str>, fallback: &str) -> Locale {
	preferred
		.and_then(Locale::from_tag)
		.or_else(|| Locale::from_tag(fallback))
		.unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_preference_takes_priority() {
		assert_eq!(resolve_locale(Some("es"), "en"), Locale::Es);
		assert_eq!(resolve_locale(Some("ar"), "fr"), Locale::Ar);
	}

	#[test]
	fn test_fallback_when_no_preference() {
		assert_eq!(resolve_locale(None, "es"), Locale::Es);
		assert_eq!(resolve_locale(None, "zh-CN"), Locale::ZhCn);
	}

	#[test]
	fn test_fallback_when_preference_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "de"), Locale::De);
		assert_eq!(resolve_locale(Some("pt-br"), "en"), Locale::En);
	}

	#[test]
	fn test_default_when_both_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), DEFAULT_LOCALE);
		assert_eq!(resolve_locale(None, "invalid"), DEFAULT_LOCALE);
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(Some(""), "en"), Locale::En);
		assert_eq!(resolve_locale(None, ""), DEFAULT_LOCALE);
	}
}
