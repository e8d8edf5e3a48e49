// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Offline translation support: job planning, translator instructions, and
//! importing a translator's response as a content source.
//!
//! Calling a translation provider is left to the operator; this module only
//! prepares the inputs and validates the outputs.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ia_common_i18n::{non_default_locales, Locale, DEFAULT_LOCALE};
use ia_site_content::{ContentKind, PageContent, UiStrings};
use serde::Serialize;

/// Default location of the content sources, relative to the workspace root.
pub const DEFAULT_CONTENT_DIR: &str = "crates/ia-site-content/locales";

const SYSTEM_PROMPT: &str = "You are a professional translator for a SaaS marketing website.
Translate the JSON content file from English to {LANGUAGE}.

RULES:
1. Output ONLY the complete JSON document, no explanations, no markdown fences.
2. Preserve the structure exactly: every key, array and nesting level stays as-is. Translate values only.
3. DO NOT translate:
   - Brand names: Interview Assistant, Claude, ChatGPT, Cursor, Windsurf, Mem0, Zep, Telegram, Formspree
   - Technical terms: MCP, ATS, PDF, JSON, Docker, USDC, BTC, API, Bearer token, SSE
   - URLs, email addresses, paths, icon keys (brain, sparkles, clock, layers, grid, repeat)
   - HTML tags like <br>
   - Number values, price values, currency symbols ($)
4. Use natural, compelling marketing language, not a literal word-for-word translation.
5. Match the tone: confident, conversational, professional.
6. For pricing labels like \"$79 one-time\" or \"$29/month\", keep the dollar amounts but translate the descriptive part.";

/// One (locale, kind) file to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationJob {
	pub locale: Locale,
	pub kind: ContentKind,
	/// English name of the target language.
	pub language: &'static str,
	pub source: PathBuf,
	pub target: PathBuf,
}

/// Plan jobs for one locale, or for every non-default locale.
pub fn plan(content_dir: &Path, target: Option<Locale>) -> Result<Vec<TranslationJob>> {
	let targets: Vec<Locale> = match target {
		Some(locale) if locale == DEFAULT_LOCALE => {
			bail!("'{locale}' is the source locale and cannot be a translation target")
		}
		Some(locale) => vec![locale],
		None => non_default_locales().collect(),
	};

	Ok(targets
		.into_iter()
		.flat_map(|locale| {
			ContentKind::ALL.into_iter().map(move |kind| TranslationJob {
				locale,
				kind,
				language: locale.info().english_name,
				source: content_path(content_dir, DEFAULT_LOCALE, kind),
				target: content_path(content_dir, locale, kind),
			})
		})
		.collect())
}

pub fn content_path(content_dir: &Path, locale: Locale, kind: ContentKind) -> PathBuf {
	content_dir.join(locale.tag()).join(kind.file_name())
}

/// Translator instructions for `language`.
pub fn system_prompt(language: &str) -> String {
	SYSTEM_PROMPT.replace("{LANGUAGE}", language)
}

/// Remove a markdown code fence wrapping a model response, if present.
pub fn strip_code_fences(text: &str) -> &str {
	let trimmed = text.trim();
	let Some(rest) = trimmed.strip_prefix("```") else {
		return trimmed;
	};
	// Drop the info string (```json) up to the first newline.
	let body = match rest.find('\n') {
		Some(idx) => &rest[idx + 1..],
		None => return trimmed,
	};
	body.strip_suffix("```").unwrap_or(body).trim()
}

/// Validate a translated document against the bundle shape of `kind` and
/// return it re-serialized in canonical form.
pub fn normalize(kind: ContentKind, raw: &str) -> Result<String> {
	let json = strip_code_fences(raw);
	let out = match kind {
		ContentKind::Ui => {
			let ui: UiStrings =
				serde_json::from_str(json).context("response is not valid ui content")?;
			serde_json::to_string_pretty(&ui)?
		}
		ContentKind::VersionA | ContentKind::VersionB => {
			let page: PageContent = serde_json::from_str(json)
				.with_context(|| format!("response is not valid {kind} content"))?;
			serde_json::to_string_pretty(&page)?
		}
	};
	Ok(out + "\n")
}

/// Validate `raw` and write it to the job's target path.
///
/// Content is compiled in, so the translation is served after the next
/// build of `ia-site-content`.
pub fn import(job: &TranslationJob, raw: &str) -> Result<()> {
	let json = normalize(job.kind, raw)?;
	if let Some(parent) = job.target.parent() {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("failed to create {}", parent.display()))?;
	}
	std::fs::write(&job.target, json)
		.with_context(|| format!("failed to write {}", job.target.display()))?;
	tracing::info!(
		locale = %job.locale,
		kind = %job.kind,
		path = %job.target.display(),
		"imported translation, rebuild to serve it"
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const UI_EN: &str = include_str!("../../ia-site-content/locales/en/ui.json");

	#[test]
	fn test_plan_all_locales() {
		let jobs = plan(Path::new("locales"), None).unwrap();
		assert_eq!(jobs.len(), 14 * 3);
		assert!(jobs.iter().all(|j| j.locale != DEFAULT_LOCALE));
		assert_eq!(jobs[0].locale, Locale::Es);
		assert_eq!(jobs[0].kind, ContentKind::Ui);
		assert_eq!(jobs[0].source, Path::new("locales/en/ui.json"));
		assert_eq!(jobs[0].target, Path::new("locales/es/ui.json"));
	}

	#[test]
	fn test_plan_single_locale() {
		let jobs = plan(Path::new("locales"), Some(Locale::PtBr)).unwrap();
		assert_eq!(jobs.len(), 3);
		assert_eq!(jobs[2].target, Path::new("locales/pt-BR/version-b.json"));
		assert_eq!(jobs[2].language, "Brazilian Portuguese");
	}

	#[test]
	fn test_job_serializes_tags_and_paths() {
		let jobs = plan(Path::new("locales"), Some(Locale::ZhCn)).unwrap();
		let json = serde_json::to_value(&jobs[1]).unwrap();
		assert_eq!(json["locale"], "zh-CN");
		assert_eq!(json["kind"], "version-a");
		assert_eq!(json["language"], "Simplified Chinese");
		assert_eq!(json["target"], "locales/zh-CN/version-a.json");
	}

	#[test]
	fn test_plan_rejects_default_locale() {
		let err = plan(Path::new("locales"), Some(Locale::En)).unwrap_err();
		assert!(err.to_string().contains("source locale"));
	}

	#[test]
	fn test_system_prompt_substitutes_language() {
		let prompt = system_prompt("Arabic");
		assert!(prompt.contains("from English to Arabic."));
		assert!(!prompt.contains("{LANGUAGE}"));
	}

	#[test]
	fn test_strip_code_fences() {
		assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
		assert_eq!(strip_code_fences("```\n{}\n```\n"), "{}");
		assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
		assert_eq!(strip_code_fences("```"), "```");
	}

	#[test]
	fn test_normalize_accepts_fenced_response() {
		let fenced = format!("```json\n{UI_EN}```");
		let out = normalize(ContentKind::Ui, &fenced).unwrap();
		let ui: UiStrings = serde_json::from_str(&out).unwrap();
		assert_eq!(ui.header.logo, "Interview Assistant");
	}

	#[test]
	fn test_normalize_rejects_wrong_shape() {
		assert!(normalize(ContentKind::VersionA, UI_EN).is_err());
		assert!(normalize(ContentKind::Ui, "{\"header\": {}}").is_err());
	}

	#[test]
	fn test_import_writes_target() {
		let dir = tempfile::tempdir().unwrap();
		let jobs = plan(dir.path(), Some(Locale::Ru)).unwrap();
		import(&jobs[0], UI_EN).unwrap();

		let written = std::fs::read_to_string(dir.path().join("ru/ui.json")).unwrap();
		assert!(written.ends_with('\n'));
		assert!(serde_json::from_str::<UiStrings>(&written).is_ok());
	}
}
