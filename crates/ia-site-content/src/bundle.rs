// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed content bundles.
//!
//! Field names follow the camelCase keys of the JSON sources. Unknown keys
//! are rejected so that a malformed translation fails at table build time.

use serde::{Deserialize, Serialize};

/// Shared UI strings (navigation, footer, confirmation page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UiStrings {
	pub header: HeaderStrings,
	pub footer: FooterStrings,
	pub faq: FaqStrings,
	pub pricing: PricingStrings,
	pub nav: NavStrings,
	pub thanks: ThanksStrings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderStrings {
	pub logo: String,
	pub cta: String,
	pub menu_toggle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterStrings {
	pub rights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqStrings {
	pub heading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PricingStrings {
	pub payment_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavStrings {
	pub for_developers: String,
	pub for_job_seekers: String,
}

/// Copy for the post-signup confirmation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThanksStrings {
	pub title: String,
	pub heading: String,
	pub message: String,
	pub share_prompt: String,
	pub copy_link: String,
	pub share_on_x: String,
	pub copied: String,
	pub tweet_text: String,
}

/// Body of one marketing page narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageContent {
	pub meta: PageMeta,
	pub hero: Hero,
	pub problem: Problem,
	#[serde(rename = "whyNotChatGPT")]
	pub why_not_chatgpt: WhyNotChatGpt,
	pub how_it_works: HowItWorks,
	pub benefits: Benefits,
	pub pricing: Pricing,
	pub faq: Faq,
	pub email_signup: EmailSignup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageMeta {
	pub title: String,
	pub description: String,
	pub og_image: String,
	pub canonical_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Hero {
	/// May contain `<br>` line breaks.
	pub headline: String,
	pub subheadline: String,
	pub cta: String,
	pub social_proof: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hero_image: Option<String>,
	pub video_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
	pub heading: String,
	pub items: Vec<ProblemItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemItem {
	pub title: String,
	pub description: String,
	/// Icon key, never translated (`brain`, `sparkles`, `clock`, ...).
	pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhyNotChatGpt {
	pub heading: String,
	pub description: String,
	pub before: LabeledText,
	pub after: LabeledText,
	pub closing: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabeledText {
	pub label: String,
	pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HowItWorks {
	pub heading: String,
	pub steps: Vec<Step>,
	pub bonus: TitledText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
	pub number: u32,
	pub title: String,
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitledText {
	pub title: String,
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Benefits {
	pub columns: Vec<BenefitColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenefitColumn {
	pub title: String,
	pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pricing {
	pub heading: String,
	pub tiers: Vec<PricingTier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PricingTier {
	pub name: String,
	/// Price in whole US dollars; `None` for the free tier.
	pub price: Option<u32>,
	pub price_label: String,
	pub description: String,
	pub features: Vec<String>,
	pub cta: String,
	pub highlighted: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub badge: Option<String>,
}

impl PricingTier {
	pub fn is_free(&self) -> bool {
		self.price.is_none()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faq {
	pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqItem {
	pub question: String,
	pub answer: String,
}

/// Waitlist form copy. The form endpoint comes from site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailSignup {
	pub heading: String,
	pub subheading: String,
	pub placeholder: String,
	pub cta: String,
	pub disclaimer: String,
}

/// A resolved bundle of any kind, borrowed from the content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentBundle<'a> {
	Ui(&'a UiStrings),
	Page(&'a PageContent),
}

impl<'a> ContentBundle<'a> {
	pub fn as_ui(self) -> Option<&'a UiStrings> {
		match self {
			ContentBundle::Ui(ui) => Some(ui),
			ContentBundle::Page(_) => None,
		}
	}

	pub fn as_page(self) -> Option<&'a PageContent> {
		match self {
			ContentBundle::Page(page) => Some(page),
			ContentBundle::Ui(_) => None,
		}
	}
}
