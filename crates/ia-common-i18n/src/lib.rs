// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale registry for the Interview Assistant marketing site.
//!
//! This crate is the single source of truth for which locales the site ships,
//! which one is the default, and how locales map onto URL paths. It supports
//! both left-to-right (LTR) and right-to-left (RTL) languages.
//!
//! # Routing
//!
//! The default locale is served unprefixed (`/pricing`); every other locale
//! lives under its tag (`/es/pricing`). Nothing in this crate can fail:
//! unknown input always degrades to [`DEFAULT_LOCALE`] (or `false` for
//! directionality checks).
//!
//! # Example
//!
//! ```
//! use ia_common_i18n::{is_rtl, locale_from_path, localized_path, Locale, DEFAULT_LOCALE};
//!
//! assert_eq!(localized_path(Locale::Es, "/pricing"), "/es/pricing");
//! assert_eq!(localized_path(DEFAULT_LOCALE, "/pricing"), "/pricing");
//!
//! assert_eq!(locale_from_path("/es/pricing"), Locale::Es);
//! assert_eq!(locale_from_path("/xx/pricing"), DEFAULT_LOCALE);
//!
//! if is_rtl("ar") {
//!     // Add dir="rtl" to the <html> element
//! }
//! ```

mod locale;
mod path;
mod resolve;

pub use locale::{
	default_locale, is_rtl, is_supported, locale_info, locales, non_default_locales, Direction,
	Locale, LocaleInfo, UnsupportedLocale,
};
pub use path::{locale_from_path, localized_path};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
