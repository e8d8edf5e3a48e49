// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Generates the `SOURCES` table from `locales/<tag>/<kind>.json`.

use std::error::Error;
use std::fmt::Write as _;
use std::path::Path;

use ia_common_i18n::Locale;

/// File stem and `ContentKind` variant of every content kind.
const KINDS: &[(&str, &str)] = &[
	("ui", "Ui"),
	("version-a", "VersionA"),
	("version-b", "VersionB"),
];

fn main() -> Result<(), Box<dyn Error>> {
	let dir = Path::new(&std::env::var("CARGO_MANIFEST_DIR")?).join("locales");
	println!("cargo:rerun-if-changed={}", dir.display());

	let mut found = Vec::new();
	for entry in std::fs::read_dir(&dir)? {
		let entry = entry?;
		let tag = file_name(&entry)?;
		if tag.starts_with('.') || !entry.file_type()?.is_dir() {
			continue;
		}
		let locale = Locale::from_tag(&tag)
			.ok_or_else(|| format!("locales/{tag}: not a supported locale tag"))?;
		println!("cargo:rerun-if-changed={}", entry.path().display());

		for file in std::fs::read_dir(entry.path())? {
			let name = file_name(&file?)?;
			if name.starts_with('.') {
				continue;
			}
			let kind = name
				.strip_suffix(".json")
				.and_then(|stem| KINDS.iter().position(|(s, _)| *s == stem))
				.ok_or_else(|| format!("locales/{tag}/{name}: not a content kind file"))?;
			found.push((locale, kind, format!("{tag}/{name}")));
		}
	}
	found.sort();

	let mut out = String::from("[\n");
	for (locale, kind, path) in &found {
		writeln!(out, "\tsource!({locale:?}, {}, {path:?}),", KINDS[*kind].1)?;
	}
	out.push(']');

	std::fs::write(Path::new(&std::env::var("OUT_DIR")?).join("sources.rs"), out)?;
	Ok(())
}

fn file_name(entry: &std::fs::DirEntry) -> Result<String, Box<dyn Error>> {
	entry
		.file_name()
		.into_string()
		.map_err(|name| format!("non UTF-8 file name {name:?} under locales/").into())
}
