// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authored content sources, compiled into the binary.
//!
//! To add a translation, drop `locales/<tag>/<kind>.json` next to the others
//! and rebuild. An unknown tag or file stem fails the build.

use ia_common_i18n::Locale;

use crate::kind::ContentKind;

/// One authored (locale, kind) source file.
#[derive(Debug, Clone, Copy)]
pub struct ContentSource {
	pub locale: Locale,
	pub kind: ContentKind,
	pub json: &'static str,
}

macro_rules! source {
	($locale:ident, $kind:ident, $path:literal) => {
		ContentSource {
			locale: Locale::$locale,
			kind: ContentKind::$kind,
			json: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/", $path)),
		}
	};
}

/// Every source shipped with the site, one per file under `locales/`.
///
/// Generated by `build.rs`; a new file is picked up on the next build.
pub static SOURCES: &[ContentSource] = &include!(concat!(env!("OUT_DIR"), "/sources.rs"));
