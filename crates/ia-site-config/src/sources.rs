// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file, environment variables.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ConfigLayer;
use crate::sections::{
	ContactsConfigLayer, FormspreeConfigLayer, LoggingConfigLayer, SiteConfigLayer,
	SitemapConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub const DEFAULT_PATH: &'static str = "ia-site.toml";

	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Default for TomlSource {
	fn default() -> Self {
		Self::new(Self::DEFAULT_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `IA_SITE_<SECTION>_<FIELD>`, e.g. `IA_SITE_FORMSPREE_ID`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(layer_from_lookup(|name| std::env::var(name).ok()))
	}
}

/// Build a layer from a variable lookup. Empty values count as unset.
fn layer_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigLayer {
	let var = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());

	ConfigLayer {
		site: Some(SiteConfigLayer {
			name: var("IA_SITE_NAME"),
			domain: var("IA_SITE_DOMAIN"),
			url: var("IA_SITE_URL"),
		}),
		contacts: Some(ContactsConfigLayer {
			email: var("IA_SITE_CONTACT_EMAIL"),
			telegram: var("IA_SITE_CONTACT_TELEGRAM"),
		}),
		formspree: Some(FormspreeConfigLayer {
			id: var("IA_SITE_FORMSPREE_ID"),
		}),
		sitemap: Some(SitemapConfigLayer {
			exclude: var("IA_SITE_SITEMAP_EXCLUDE").map(|s| {
				s.split(',')
					.map(|s| s.trim().to_string())
					.filter(|s| !s.is_empty())
					.collect()
			}),
		}),
		logging: Some(LoggingConfigLayer {
			level: var("IA_SITE_LOG_LEVEL"),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name| map.get(name).cloned()
	}

	#[test]
	fn test_precedence_order() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn test_env_layer_reads_variables() {
		let layer = layer_from_lookup(lookup(&[
			("IA_SITE_URL", "https://preview.example.com"),
			("IA_SITE_FORMSPREE_ID", "f123"),
			("IA_SITE_SITEMAP_EXCLUDE", "/thanks, /preview,,"),
		]));
		assert_eq!(
			layer.site.unwrap().url.as_deref(),
			Some("https://preview.example.com")
		);
		assert_eq!(layer.formspree.unwrap().id.as_deref(), Some("f123"));
		assert_eq!(
			layer.sitemap.unwrap().exclude,
			Some(vec!["/thanks".to_string(), "/preview".to_string()])
		);
	}

	#[test]
	fn test_env_empty_values_are_unset() {
		let layer = layer_from_lookup(lookup(&[("IA_SITE_CONTACT_EMAIL", "  ")]));
		assert!(layer.contacts.unwrap().email.is_none());
	}

	#[test]
	fn test_toml_source_missing_file_is_empty() {
		let source = TomlSource::new("/nonexistent/ia-site.toml");
		assert_eq!(source.load().unwrap(), ConfigLayer::default());
	}

	#[test]
	fn test_toml_source_reads_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("ia-site.toml");
		std::fs::write(&path, "[formspree]\nid = \"fromfile\"\n").unwrap();

		let layer = TomlSource::new(&path).load().unwrap();
		assert_eq!(layer.formspree.unwrap().id.as_deref(), Some("fromfile"));
	}

	#[test]
	fn test_toml_source_parse_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("ia-site.toml");
		std::fs::write(&path, "[formspree\nid = ").unwrap();

		let err = TomlSource::new(&path).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}
}
