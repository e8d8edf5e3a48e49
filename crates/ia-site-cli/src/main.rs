// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build and content tooling for the Interview Assistant site.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ia_common_i18n::{locale_from_path, locales, localized_path, Locale};
use ia_site_config::SiteConfig;
use ia_site_content::{ContentKind, ContentTable};
use tracing_subscriber::{
	layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

mod sitemap;
mod translation;

/// ia-site - locale, content and sitemap tooling for the marketing site.
#[derive(Parser, Debug)]
#[command(name = "ia-site", about = "Interview Assistant site tooling", version)]
struct Args {
	/// Path to a TOML config file (defaults to ./ia-site.toml)
	#[arg(long, global = true, env = "IA_SITE_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the resolved site configuration
	Config,

	/// List supported locales in routing order
	Locales,

	/// Print the localized path of a page
	Path { locale: Locale, path: String },

	/// Print the locale a request path is served in
	Detect { path: String },

	/// Print the resolved content bundle for a locale as JSON
	Resolve { locale: Locale, kind: ContentKind },

	/// Generate sitemap.xml for every locale and route
	Sitemap {
		/// Write to this file instead of stdout
		#[arg(long, short)]
		output: Option<PathBuf>,
	},

	/// Report which locales fall back to default content
	Coverage {
		/// Exit with an error when any translation is missing
		#[arg(long)]
		strict: bool,

		/// Print the report as JSON
		#[arg(long)]
		json: bool,
	},

	/// List the translation jobs for one or all non-default locales
	TranslatePlan {
		#[arg(long)]
		locale: Option<Locale>,

		#[arg(long, default_value = translation::DEFAULT_CONTENT_DIR)]
		dir: PathBuf,

		/// Also print the translator instructions for each language
		#[arg(long)]
		prompts: bool,

		/// Print the jobs as JSON
		#[arg(long, conflicts_with = "prompts")]
		json: bool,
	},

	/// Validate a translator response and write it to the content directory
	Import {
		locale: Locale,
		kind: ContentKind,
		/// File holding the translated JSON (markdown fences are tolerated)
		response: PathBuf,

		#[arg(long, default_value = translation::DEFAULT_CONTENT_DIR)]
		dir: PathBuf,
	},
}

/// Level used while the configuration itself is loading.
const BOOTSTRAP_LOG_LEVEL: &str = "info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn main() -> Result<()> {
	let args = Args::parse();

	// RUST_LOG wins over logging.level for the whole run.
	let env_filter = EnvFilter::try_from_default_env().ok();
	let from_env = env_filter.is_some();
	let (filter, handle) =
		reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new(BOOTSTRAP_LOG_LEVEL)));
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let config = match &args.config {
		Some(path) => ia_site_config::load_config_with_file(path),
		None => ia_site_config::load_config(),
	}
	.context("failed to load site configuration")?;

	if !from_env {
		apply_log_level(&handle, &config.logging.level)?;
	}

	run(args.command, &config)
}

fn apply_log_level(handle: &FilterHandle, level: &str) -> Result<()> {
	let filter =
		EnvFilter::try_new(level).with_context(|| format!("invalid logging.level '{level}'"))?;
	handle
		.reload(filter)
		.context("failed to apply logging.level")
}

fn run(command: Command, config: &SiteConfig) -> Result<()> {
	match command {
		Command::Config => print!("{}", describe_config(config)),

		Command::Locales => {
			for &locale in locales() {
				let info = locale.info();
				let marker = if locale.is_default() { " (default)" } else { "" };
				println!(
					"{:<6} {:<18} {}{marker}",
					info.tag,
					info.name,
					info.direction.as_html_dir()
				);
			}
		}

		Command::Path { locale, path } => println!("{}", localized_path(locale, &path)),

		Command::Detect { path } => println!("{}", locale_from_path(&path)),

		Command::Resolve { locale, kind } => {
			let table = content_table()?;
			let origin = table.resolve_origin(locale, kind);
			if origin != locale {
				tracing::info!(%locale, %kind, %origin, "serving default locale content");
			}
			let out = serde_json::json!({
				"locale": locale,
				"kind": kind,
				"origin": origin,
				"bundle": table.resolve(locale, kind),
			});
			println!("{}", serde_json::to_string_pretty(&out)?);
		}

		Command::Sitemap { output } => {
			let routes = sitemap::site_routes(&config.sitemap);
			let xml = sitemap::render_sitemap(&config.site, &routes);
			match output {
				Some(path) => {
					std::fs::write(&path, xml)
						.with_context(|| format!("failed to write {}", path.display()))?;
					tracing::info!(path = %path.display(), urls = routes.len(), "sitemap written");
				}
				None => print!("{xml}"),
			}
		}

		Command::Coverage { strict, json } => {
			let report = content_table()?.coverage();
			if json {
				println!("{}", serde_json::to_string_pretty(&report)?);
			} else {
				for entry in &report.locales {
					let missing: Vec<&str> = entry.missing.iter().map(|k| k.as_str()).collect();
					println!(
						"{:<6} {:>5.1}%  {}",
						entry.locale.tag(),
						entry.percentage(),
						if missing.is_empty() {
							"complete".to_string()
						} else {
							format!("missing: {}", missing.join(", "))
						}
					);
				}
			}
			let gaps = report.gaps().count();
			if strict && gaps > 0 {
				bail!("{gaps} translation(s) missing");
			}
		}

		Command::TranslatePlan {
			locale,
			dir,
			prompts,
			json,
		} => {
			let jobs = translation::plan(&dir, locale)?;
			if json {
				println!("{}", serde_json::to_string_pretty(&jobs)?);
				return Ok(());
			}
			for job in &jobs {
				println!(
					"{:<6} {:<10} {} -> {}",
					job.locale.tag(),
					job.kind.as_str(),
					job.source.display(),
					job.target.display()
				);
			}
			if prompts {
				let mut seen = Vec::new();
				for job in &jobs {
					if seen.contains(&job.locale) {
						continue;
					}
					seen.push(job.locale);
					println!("\n# {} ({})\n", job.language, job.locale);
					println!("{}", translation::system_prompt(job.language));
				}
			}
		}

		Command::Import {
			locale,
			kind,
			response,
			dir,
		} => {
			let raw = std::fs::read_to_string(&response)
				.with_context(|| format!("failed to read {}", response.display()))?;
			let job = translation::plan(&dir, Some(locale))?
				.into_iter()
				.find(|j| j.kind == kind)
				.context("no translation job for this content kind")?;
			translation::import(&job, &raw)?;
			println!("{}", job.target.display());
		}
	}

	Ok(())
}

fn describe_config(config: &SiteConfig) -> String {
	let mut out = String::new();
	let mut line = |key: &str, value: String| out.push_str(&format!("{key:<11} {value}\n"));
	line("site:", config.site.name.clone());
	line("domain:", config.site.domain.clone());
	line("url:", config.site.url.clone());
	line("email:", config.contacts.mailto());
	line(
		"telegram:",
		format!(
			"{} {}",
			config.contacts.telegram_label(),
			config.contacts.telegram_url()
		),
	);
	line("form:", config.formspree.action());
	line("sitemap:", format!("excludes {:?}", config.sitemap.exclude));
	line("log level:", config.logging.level.clone());
	out
}

fn content_table() -> Result<&'static ContentTable> {
	ContentTable::global().context("shipped content is invalid")
}
