// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The in-memory content table and its fallback rule.
//!
//! # Invariants
//!
//! 1. **Default is complete**: a table only exists if the default locale has
//!    every content kind. The default bundles live in non-optional fields, so
//!    resolution cannot fail after construction.
//!
//! 2. **Whole-bundle fallback**: a locale either serves its own bundle for a
//!    kind, untouched, or the default locale's entire bundle. Fields are never
//!    merged across locales.
//!
//! 3. **Immutable**: nothing mutates the table after construction, so it is
//!    `Send + Sync` and needs no locking.

use std::collections::BTreeMap;

use ia_common_i18n::{Locale, DEFAULT_LOCALE};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::bundle::{ContentBundle, PageContent, UiStrings};
use crate::coverage::{CoverageReport, LocaleCoverage};
use crate::error::ContentError;
use crate::kind::{ContentKind, PageVariant};
use crate::sources::{ContentSource, SOURCES};

static GLOBAL: OnceCell<ContentTable> = OnceCell::new();

#[derive(Debug)]
struct DefaultContent {
	ui: UiStrings,
	version_a: PageContent,
	version_b: PageContent,
}

#[derive(Debug, Default)]
struct LocaleContent {
	ui: Option<UiStrings>,
	version_a: Option<PageContent>,
	version_b: Option<PageContent>,
}

impl LocaleContent {
	fn has(&self, kind: ContentKind) -> bool {
		match kind {
			ContentKind::Ui => self.ui.is_some(),
			ContentKind::VersionA => self.version_a.is_some(),
			ContentKind::VersionB => self.version_b.is_some(),
		}
	}
}

/// Localized content keyed by (locale, kind).
#[derive(Debug)]
pub struct ContentTable {
	defaults: DefaultContent,
	translations: BTreeMap<Locale, LocaleContent>,
}

impl ContentTable {
	/// The process-wide table built from the shipped [`SOURCES`].
	///
	/// Built on first use. An error here is a content defect and should abort
	/// the build or startup.
	pub fn global() -> Result<&'static ContentTable, ContentError> {
		GLOBAL.get_or_try_init(|| ContentTable::from_sources(SOURCES))
	}

	/// Parse and validate a set of sources.
	pub fn from_sources(sources: &[ContentSource]) -> Result<Self, ContentError> {
		let mut slots: BTreeMap<Locale, LocaleContent> = BTreeMap::new();

		for source in sources {
			let slot = slots.entry(source.locale).or_default();
			let duplicate = match source.kind {
				ContentKind::Ui => slot.ui.replace(parse(source)?).is_some(),
				ContentKind::VersionA => slot.version_a.replace(parse(source)?).is_some(),
				ContentKind::VersionB => slot.version_b.replace(parse(source)?).is_some(),
			};
			if duplicate {
				return Err(ContentError::Duplicate {
					locale: source.locale,
					kind: source.kind,
				});
			}
		}

		let default = slots.remove(&DEFAULT_LOCALE).unwrap_or_default();
		let missing = |kind| ContentError::MissingDefault {
			locale: DEFAULT_LOCALE,
			kind,
		};
		let defaults = DefaultContent {
			ui: default.ui.ok_or_else(|| missing(ContentKind::Ui))?,
			version_a: default
				.version_a
				.ok_or_else(|| missing(ContentKind::VersionA))?,
			version_b: default
				.version_b
				.ok_or_else(|| missing(ContentKind::VersionB))?,
		};

		let table = Self {
			defaults,
			translations: slots,
		};

		for (locale, kind) in table.coverage().gaps() {
			debug!(%locale, %kind, "no translation, default locale content will be served");
		}
		info!(
			sources = sources.len(),
			locales = table.translations.len() + 1,
			"content table built"
		);

		Ok(table)
	}

	/// Resolve the bundle for `(locale, kind)`, falling back to the default
	/// locale's whole bundle when the translation is missing.
	pub fn resolve(&self, locale: Locale, kind: ContentKind) -> ContentBundle<'_> {
		match kind {
			ContentKind::Ui => ContentBundle::Ui(self.ui(locale)),
			ContentKind::VersionA => ContentBundle::Page(self.version_a(locale)),
			ContentKind::VersionB => ContentBundle::Page(self.version_b(locale)),
		}
	}

	pub fn ui(&self, locale: Locale) -> &UiStrings {
		self
			.translation(locale)
			.and_then(|c| c.ui.as_ref())
			.unwrap_or(&self.defaults.ui)
	}

	pub fn version_a(&self, locale: Locale) -> &PageContent {
		self
			.translation(locale)
			.and_then(|c| c.version_a.as_ref())
			.unwrap_or(&self.defaults.version_a)
	}

	pub fn version_b(&self, locale: Locale) -> &PageContent {
		self
			.translation(locale)
			.and_then(|c| c.version_b.as_ref())
			.unwrap_or(&self.defaults.version_b)
	}

	pub fn page(&self, locale: Locale, variant: PageVariant) -> &PageContent {
		match variant {
			PageVariant::A => self.version_a(locale),
			PageVariant::B => self.version_b(locale),
		}
	}

	/// Whether `locale` has its own authored bundle for `kind`.
	///
	/// Always true for the default locale.
	pub fn has_translation(&self, locale: Locale, kind: ContentKind) -> bool {
		locale == DEFAULT_LOCALE || self.translation(locale).is_some_and(|c| c.has(kind))
	}

	/// The locale whose bundle [`resolve`](Self::resolve) serves.
	pub fn resolve_origin(&self, locale: Locale, kind: ContentKind) -> Locale {
		if self.has_translation(locale, kind) {
			locale
		} else {
			DEFAULT_LOCALE
		}
	}

	/// Per-locale translation coverage over every supported locale.
	pub fn coverage(&self) -> CoverageReport {
		let locales = ia_common_i18n::locales()
			.iter()
			.map(|&locale| {
				let (present, missing): (Vec<_>, Vec<_>) = ContentKind::ALL
					.into_iter()
					.partition(|&kind| self.has_translation(locale, kind));
				LocaleCoverage {
					locale,
					present,
					missing,
				}
			})
			.collect();
		CoverageReport { locales }
	}

	fn translation(&self, locale: Locale) -> Option<&LocaleContent> {
		self.translations.get(&locale)
	}
}

fn parse<T: DeserializeOwned>(source: &ContentSource) -> Result<T, ContentError> {
	serde_json::from_str(source.json).map_err(|e| ContentError::Parse {
		locale: source.locale,
		kind: source.kind,
		source: e,
	})
}
