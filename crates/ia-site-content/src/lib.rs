// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized marketing copy for the Interview Assistant site.
//!
//! Every (locale, content kind) pair resolves to exactly one bundle. When a
//! locale has no translation for a kind, the default locale's whole bundle is
//! served instead, so a page never mixes languages within one bundle.
//!
//! # Example
//!
//! ```
//! use ia_common_i18n::{locale_from_path, Locale};
//! use ia_site_content::{ContentKind, ContentTable};
//!
//! let table = ContentTable::global()?;
//! let locale = locale_from_path("/es/developers");
//!
//! let ui = table.ui(locale);
//! let page = table.version_b(locale);
//! assert_eq!(page.meta.canonical_path, "/developers");
//!
//! // Arabic has no page translation yet: the English page is served.
//! assert_eq!(table.resolve_origin(Locale::Ar, ContentKind::VersionA), Locale::En);
//! # let _ = ui;
//! # Ok::<(), ia_site_content::ContentError>(())
//! ```

mod bundle;
mod coverage;
mod error;
mod kind;
mod sources;
mod table;

pub use bundle::{
	BenefitColumn, Benefits, ContentBundle, EmailSignup, Faq, FaqItem, FaqStrings, FooterStrings,
	HeaderStrings, Hero, HowItWorks, LabeledText, NavStrings, PageContent, PageMeta, Pricing,
	PricingStrings, PricingTier, Problem, ProblemItem, Step, ThanksStrings, TitledText, UiStrings,
	WhyNotChatGpt,
};
pub use coverage::{CoverageReport, LocaleCoverage};
pub use error::ContentError;
pub use kind::{ContentKind, PageVariant, UnknownContentKind};
pub use sources::{ContentSource, SOURCES};
pub use table::ContentTable;
