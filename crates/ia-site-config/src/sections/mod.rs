// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod contacts;
mod formspree;
mod logging;
mod site;
mod sitemap;

pub use contacts::{ContactsConfig, ContactsConfigLayer};
pub use formspree::{FormspreeConfig, FormspreeConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use site::{SiteConfigLayer, SiteIdentity};
pub use sitemap::{SitemapConfig, SitemapConfigLayer};
