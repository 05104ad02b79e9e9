//! Web app manifest and crawler files.

use crate::i18n::Locale;
use serde::Serialize;

/// `manifest.webmanifest` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: String,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
}

impl Default for WebManifest {
    fn default() -> Self {
        Self {
            name: "Abicus - Scientific Calculator Online",
            short_name: "Abicus",
            description: "Free online scientific calculator based on the Finnish Abicus calculator",
            start_url: format!("/{}", Locale::default_locale().code()),
            display: "standalone",
            background_color: "#ffffff",
            theme_color: "#3b82f6",
        }
    }
}

/// `robots.txt`: everything crawlable, sitemap advertised.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

/// `ads.txt` authorizing a single ad publisher account.
pub fn ads_txt(publisher_id: &str) -> String {
    format!("google.com, {}, DIRECT, f08c47fec0942fa0\n", publisher_id)
}
