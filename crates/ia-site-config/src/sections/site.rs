// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site identity configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "Interview Assistant";
const DEFAULT_DOMAIN: &str = "interviewassistant.ai";
const DEFAULT_URL: &str = "https://interviewassistant.ai";

/// Site identity (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
	pub name: String,
	pub domain: String,
	/// Absolute base URL without a trailing slash.
	pub url: String,
}

impl Default for SiteIdentity {
	fn default() -> Self {
		SiteConfigLayer::default().finalize()
	}
}

impl SiteIdentity {
	/// Absolute URL for a root-relative path.
	pub fn absolute_url(&self, path: &str) -> String {
		format!("{}{}", self.url, path)
	}
}

/// Site identity layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfigLayer {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub domain: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
}

impl SiteConfigLayer {
	pub fn merge(&mut self, other: SiteConfigLayer) {
		if other.name.is_some() {
			self.name = other.name;
		}
		if other.domain.is_some() {
			self.domain = other.domain;
		}
		if other.url.is_some() {
			self.url = other.url;
		}
	}

	pub fn finalize(self) -> SiteIdentity {
		SiteIdentity {
			name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
			domain: self.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
			url: self.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
		}
	}
}
