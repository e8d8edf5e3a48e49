// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route enumeration and sitemap rendering.

use ia_common_i18n::{locales, localized_path, Locale};
use ia_site_config::{SiteIdentity, SitemapConfig};

/// Every page route of the site, unprefixed.
pub const ROUTES: &[&str] = &["/", "/developers", "/thanks"];

/// One (locale, route) page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoute {
	pub locale: Locale,
	pub route: &'static str,
	pub path: String,
}

/// All (locale × route) pages, minus the ones the sitemap policy excludes.
pub fn site_routes(policy: &SitemapConfig) -> Vec<SiteRoute> {
	ROUTES
		.iter()
		.flat_map(|&route| {
			locales().iter().map(move |&locale| SiteRoute {
				locale,
				route,
				path: localized_path(locale, route),
			})
		})
		.filter(|r| !policy.is_excluded(&r.path))
		.collect()
}

/// Render a `urlset` with hreflang alternates linking each route's locales.
pub fn render_sitemap(site: &SiteIdentity, routes: &[SiteRoute]) -> String {
	let mut out = String::from(
		"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
		 <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
		 xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
	);

	for entry in routes {
		out.push_str("  <url>\n");
		out.push_str(&format!(
			"    <loc>{}</loc>\n",
			xml_escape(&site.absolute_url(&entry.path))
		));
		for alt in routes.iter().filter(|r| r.route == entry.route) {
			out.push_str(&format!(
				"    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
				alt.locale.tag(),
				xml_escape(&site.absolute_url(&alt.path))
			));
		}
		out.push_str("  </url>\n");
	}

	out.push_str("</urlset>\n");
	out
}

fn xml_escape(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&apos;"),
			c => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use ia_common_i18n::LOCALES;

	#[test]
	fn test_default_policy_drops_thanks() {
		let routes = site_routes(&SitemapConfig::default());
		assert_eq!(routes.len(), LOCALES.len() * 2);
		assert!(routes.iter().all(|r| r.route != "/thanks"));
	}

	#[test]
	fn test_routes_are_localized() {
		let routes = site_routes(&SitemapConfig::default());
		let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
		assert!(paths.contains(&"/"));
		assert!(paths.contains(&"/developers"));
		assert!(paths.contains(&"/es"));
		assert!(paths.contains(&"/pt-BR/developers"));
		assert!(!paths.contains(&"/en"));
	}

	#[test]
	fn test_empty_policy_keeps_all_routes() {
		let routes = site_routes(&SitemapConfig { exclude: vec![] });
		assert_eq!(routes.len(), LOCALES.len() * ROUTES.len());
	}

	#[test]
	fn test_render_sitemap_alternates() {
		let site = SiteIdentity::default();
		let routes = site_routes(&SitemapConfig {
			exclude: vec!["/developers".to_string(), "/thanks".to_string()],
		});
		let xml = render_sitemap(&site, &routes);

		assert!(xml.starts_with("<?xml"));
		assert_eq!(xml.matches("<url>").count(), LOCALES.len());
		assert!(xml.contains("<loc>https://interviewassistant.ai/</loc>"));
		assert!(xml.contains("<loc>https://interviewassistant.ai/ar</loc>"));
		assert!(xml.contains(
			"hreflang=\"zh-CN\" href=\"https://interviewassistant.ai/zh-CN\""
		));
		assert_eq!(
			xml.matches("rel=\"alternate\"").count(),
			LOCALES.len() * LOCALES.len()
		);
		assert!(!xml.contains("/developers"));
	}

	#[test]
	fn test_xml_escape() {
		assert_eq!(xml_escape("/a?b=1&c=<2>"), "/a?b=1&amp;c=&lt;2&gt;");
		assert_eq!(xml_escape("\"'"), "&quot;&apos;");
	}
}
