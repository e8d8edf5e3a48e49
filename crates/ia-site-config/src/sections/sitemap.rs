// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sitemap policy.

use serde::{Deserialize, Serialize};

/// Sitemap configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapConfig {
	/// Pages whose path contains any of these fragments are left out.
	pub exclude: Vec<String>,
}

impl Default for SitemapConfig {
	fn default() -> Self {
		SitemapConfigLayer::default().finalize()
	}
}

impl SitemapConfig {
	pub fn is_excluded(&self, path: &str) -> bool {
		self.exclude.iter().any(|fragment| path.contains(fragment.as_str()))
	}
}

/// Sitemap configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SitemapConfigLayer {
	#[serde(default)]
	pub exclude: Option<Vec<String>>,
}

impl SitemapConfigLayer {
	pub fn merge(&mut self, other: SitemapConfigLayer) {
		if other.exclude.is_some() {
			self.exclude = other.exclude;
		}
	}

	pub fn finalize(self) -> SitemapConfig {
		SitemapConfig {
			exclude: self
				.exclude
				.unwrap_or_else(|| vec!["/thanks".to_string()]),
		}
	}
}
