// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content table errors.
//!
//! Every variant is a build-time content defect. None of them can occur once
//! a [`ContentTable`](crate::ContentTable) exists.

use ia_common_i18n::Locale;

use crate::kind::ContentKind;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
	/// A source file does not match the bundle shape.
	#[error("invalid {kind} content for locale '{locale}': {source}")]
	Parse {
		locale: Locale,
		kind: ContentKind,
		#[source]
		source: serde_json::Error,
	},

	/// The same (locale, kind) pair was registered twice.
	#[error("duplicate {kind} content for locale '{locale}'")]
	Duplicate { locale: Locale, kind: ContentKind },

	/// The default locale lacks a content kind, so fallback is impossible.
	#[error("missing {kind} content for default locale '{locale}'")]
	MissingDefault { locale: Locale, kind: ContentKind },
}
