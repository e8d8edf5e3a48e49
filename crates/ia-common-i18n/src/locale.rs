// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed set of supported locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported site locale.
///
/// The set is fixed at build time. Variant order is the order routes and
/// sitemaps are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
	#[serde(rename = "en")]
	En,
	#[serde(rename = "es")]
	Es,
	#[serde(rename = "fr")]
	Fr,
	#[serde(rename = "de")]
	De,
	#[serde(rename = "pt-BR")]
	PtBr,
	#[serde(rename = "ru")]
	Ru,
	#[serde(rename = "zh-CN")]
	ZhCn,
	#[serde(rename = "ja")]
	Ja,
	#[serde(rename = "ko")]
	Ko,
	#[serde(rename = "ar")]
	Ar,
	#[serde(rename = "hi")]
	Hi,
	#[serde(rename = "id")]
	Id,
	#[serde(rename = "tr")]
	Tr,
	#[serde(rename = "vi")]
	Vi,
	#[serde(rename = "pl")]
	Pl,
}

/// The fallback locale. Must always have complete content.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// All supported locales, default first.
pub const LOCALES: &[Locale] = &[
	Locale::En,
	Locale::Es,
	Locale::Fr,
	Locale::De,
	Locale::PtBr,
	Locale::Ru,
	Locale::ZhCn,
	Locale::Ja,
	Locale::Ko,
	Locale::Ar,
	Locale::Hi,
	Locale::Id,
	Locale::Tr,
	Locale::Vi,
	Locale::Pl,
];

/// Text direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	/// Value for the HTML `dir` attribute.
	pub fn as_html_dir(self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Static metadata about a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub locale: Locale,
	pub tag: &'static str,
	/// Name in the locale's own language, shown in the language switcher.
	pub name: &'static str,
	/// English name, used when instructing translators.
	pub english_name: &'static str,
	pub direction: Direction,
}

impl Locale {
	/// The BCP-47-like tag used in URLs and content paths.
	pub fn tag(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Es => "es",
			Locale::Fr => "fr",
			Locale::De => "de",
			Locale::PtBr => "pt-BR",
			Locale::Ru => "ru",
			Locale::ZhCn => "zh-CN",
			Locale::Ja => "ja",
			Locale::Ko => "ko",
			Locale::Ar => "ar",
			Locale::Hi => "hi",
			Locale::Id => "id",
			Locale::Tr => "tr",
			Locale::Vi => "vi",
			Locale::Pl => "pl",
		}
	}

	/// Look up a locale by exact tag. Matching is case-sensitive.
	pub fn from_tag(tag: &str) -> Option<Locale> {
		LOCALES.iter().copied().find(|l| l.tag() == tag)
	}

	pub fn info(self) -> LocaleInfo {
		let (name, english_name) = match self {
			Locale::En => ("English", "English"),
			Locale::Es => ("Español", "Spanish"),
			Locale::Fr => ("Français", "French"),
			Locale::De => ("Deutsch", "German"),
			Locale::PtBr => ("Português", "Brazilian Portuguese"),
			Locale::Ru => ("Русский", "Russian"),
			Locale::ZhCn => ("中文", "Simplified Chinese"),
			Locale::Ja => ("日本語", "Japanese"),
			Locale::Ko => ("한국어", "Korean"),
			Locale::Ar => ("العربية", "Arabic"),
			Locale::Hi => ("हिन्दी", "Hindi"),
			Locale::Id => ("Bahasa Indonesia", "Indonesian"),
			Locale::Tr => ("Türkçe", "Turkish"),
			Locale::Vi => ("Tiếng Việt", "Vietnamese"),
			Locale::Pl => ("Polski", "Polish"),
		};
		LocaleInfo {
			locale: self,
			tag: self.tag(),
			name,
			english_name,
			direction: self.direction(),
		}
	}

	pub fn direction(self) -> Direction {
		match self {
			Locale::Ar => Direction::Rtl,
			_ => Direction::Ltr,
		}
	}

	pub fn is_rtl(self) -> bool {
		self.direction() == Direction::Rtl
	}

	pub fn is_default(self) -> bool {
		self == DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

/// Returned when parsing a tag outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}'")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
	type Err = UnsupportedLocale;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::from_tag(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
	}
}

/// All supported locales in stable order. Never empty.
pub fn locales() -> &'static [Locale] {
	LOCALES
}

pub fn default_locale() -> Locale {
	DEFAULT_LOCALE
}

/// Every locale except the default, in stable order.
pub fn non_default_locales() -> impl Iterator<Item = Locale> {
	LOCALES.iter().copied().filter(|l| !l.is_default())
}

pub fn is_supported(tag: &str) -> bool {
	Locale::from_tag(tag).is_some()
}

pub fn locale_info(tag: &str) -> Option<LocaleInfo> {
	Locale::from_tag(tag).map(Locale::info)
}

/// Whether `tag` names a right-to-left locale. Unknown tags are LTR.
pub fn is_rtl(tag: &str) -> bool {
	Locale::from_tag(tag).is_some_and(Locale::is_rtl)
}
