// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site-wide configuration for the Interview Assistant site.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`IA_SITE_*`)
//!
//! # Usage
//!
//! ```ignore
//! use ia_site_config::load_config;
//!
//! let config = load_config()?;
//! println!("waitlist form posts to {}", config.formspree.action());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

use std::path::PathBuf;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info, warn};

/// Fully resolved site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
	pub site: SiteIdentity,
	pub contacts: ContactsConfig,
	pub formspree: FormspreeConfig,
	pub sitemap: SitemapConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`IA_SITE_*`)
/// 2. Config file (`./ia-site.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<SiteConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::default()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<SiteConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<SiteConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ConfigLayer) -> Result<SiteConfig, ConfigError> {
	let config = SiteConfig {
		site: layer.site.unwrap_or_default().finalize(),
		contacts: layer.contacts.unwrap_or_default().finalize(),
		formspree: layer.formspree.unwrap_or_default().finalize(),
		sitemap: layer.sitemap.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	if config.formspree.is_demo() {
		warn!("formspree id is the demo placeholder, waitlist signups will not be delivered");
	}

	info!(
		site = %config.site.url,
		contact = %config.contacts.email,
		form_action = %config.formspree.action(),
		sitemap_excludes = config.sitemap.exclude.len(),
		"Site configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &SiteConfig) -> Result<(), ConfigError> {
	let url = &config.site.url;
	if !(url.starts_with("https://") || url.starts_with("http://")) {
		return Err(ConfigError::InvalidValue {
			key: "site.url".to_string(),
			message: format!("'{url}' must start with http:// or https://"),
		});
	}
	if url.ends_with('/') {
		return Err(ConfigError::InvalidValue {
			key: "site.url".to_string(),
			message: format!("'{url}' must not end with '/'"),
		});
	}
	if !config.contacts.email.contains('@') {
		return Err(ConfigError::InvalidValue {
			key: "contacts.email".to_string(),
			message: format!("'{}' is not an email address", config.contacts.email),
		});
	}
	if config.contacts.telegram.trim().is_empty() {
		return Err(ConfigError::validation("contacts.telegram must not be empty"));
	}
	if config.formspree.id.trim().is_empty() {
		return Err(ConfigError::validation("formspree.id must not be empty"));
	}

	Ok(())
}
