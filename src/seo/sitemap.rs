//! XML sitemap built from the page registry.

use crate::i18n::Locale;
use crate::pages::{ChangeFrequency, Page};
use crate::render::escape;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// One entry per (enabled locale × registered page), locale-major.
pub fn sitemap_entries(base_url: &str, last_modified: DateTime<Utc>) -> Vec<SitemapEntry> {
    Locale::all()
        .into_iter()
        .flat_map(|locale| {
            Page::all().map(move |page| {
                let spec = page.spec();
                SitemapEntry {
                    url: page.url(base_url, locale),
                    last_modified,
                    change_frequency: spec.change_frequency,
                    priority: spec.priority,
                }
            })
        })
        .collect()
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        // Writing to a String cannot fail
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
<changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    const BASE: &str = "https://abicus.com";

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_one_entry_per_locale_and_page() {
        let entries = sitemap_entries(BASE, fixed_time());
        assert_eq!(entries.len(), 8);

        let urls: BTreeSet<&str> = entries.iter().map(|e| e.url.as_str()).collect();
        let expected: BTreeSet<&str> = [
            "https://abicus.com/en",
            "https://abicus.com/en/help",
            "https://abicus.com/en/privacy",
            "https://abicus.com/en/terms",
            "https://abicus.com/fi",
            "https://abicus.com/fi/help",
            "https://abicus.com/fi/privacy",
            "https://abicus.com/fi/terms",
        ]
        .into_iter()
        .collect();
        assert_eq!(urls, expected);
    }

    #[test]
    fn test_entries_are_absolute_under_base() {
        for entry in sitemap_entries(BASE, fixed_time()) {
            assert!(entry.url.starts_with("https://abicus.com/"));
            assert_eq!(entry.last_modified, fixed_time());
        }
    }

    #[test]
    fn test_home_pages_have_top_priority() {
        let entries = sitemap_entries(BASE, fixed_time());
        let home = entries.iter().find(|e| e.url == "https://abicus.com/fi").unwrap();
        assert_eq!(home.priority, 1.0);
        assert_eq!(home.change_frequency, ChangeFrequency::Monthly);
    }

    #[test]
    fn test_render_sitemap() {
        let entries = sitemap_entries(BASE, fixed_time());
        let xml = render_sitemap(&entries[..1]);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://abicus.com/en</loc>"));
        assert!(xml.contains("<lastmod>2025-01-15T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_render_sitemap_escapes_locations() {
        let entries = sitemap_entries("https://example.com/a&b", fixed_time());
        let xml = render_sitemap(&entries);
        assert!(xml.contains("https://example.com/a&amp;b/en"));
        assert_eq!(xml.matches("<url>").count(), 8);
    }
}
