//! Registry of routable pages.
//!
//! The router, the sitemap and the static export all enumerate pages from
//! `PAGE_REGISTRY`, so a page cannot be routable without being listed in the
//! sitemap or vice versa.

use crate::i18n::Locale;
use serde::Serialize;

/// A routable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Help,
    Privacy,
    Terms,
}

/// How often a page's content changes, as advertised to crawlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// Registry entry for a page.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub page: Page,

    /// Path segment after the locale prefix; empty for the home page
    pub slug: &'static str,

    /// Sitemap priority in `0.0..=1.0`
    pub priority: f32,

    pub change_frequency: ChangeFrequency,
}

pub const PAGE_REGISTRY: &[PageSpec] = &[
    PageSpec {
        page: Page::Home,
        slug: "",
        priority: 1.0,
        change_frequency: ChangeFrequency::Monthly,
    },
    PageSpec {
        page: Page::Help,
        slug: "help",
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
    },
    PageSpec {
        page: Page::Privacy,
        slug: "privacy",
        priority: 0.5,
        change_frequency: ChangeFrequency::Yearly,
    },
    PageSpec {
        page: Page::Terms,
        slug: "terms",
        priority: 0.5,
        change_frequency: ChangeFrequency::Yearly,
    },
];

impl Page {
    /// Look up a page by the path segment following the locale prefix.
    pub fn from_slug(slug: &str) -> Option<Page> {
        PAGE_REGISTRY
            .iter()
            .find(|spec| spec.slug == slug)
            .map(|spec| spec.page)
    }

    /// All pages, in registry order.
    pub fn all() -> impl Iterator<Item = Page> {
        PAGE_REGISTRY.iter().map(|spec| spec.page)
    }

    pub fn spec(&self) -> &'static PageSpec {
        PAGE_REGISTRY
            .iter()
            .find(|spec| spec.page == *self)
            .expect("every page is registered")
    }

    pub fn slug(&self) -> &'static str {
        self.spec().slug
    }

    /// Site-relative path of this page in a locale (`/fi`, `/en/help`).
    pub fn path(&self, locale: Locale) -> String {
        match self.slug() {
            "" => format!("/{}", locale.code()),
            slug => format!("/{}/{}", locale.code(), slug),
        }
    }

    /// Absolute URL of this page in a locale.
    pub fn url(&self, base_url: &str, locale: Locale) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_four_pages_in_order() {
        let pages: Vec<_> = Page::all().collect();
        assert_eq!(pages, vec![Page::Home, Page::Help, Page::Privacy, Page::Terms]);
    }

    #[test]
    fn test_from_slug() {
        assert_eq!(Page::from_slug(""), Some(Page::Home));
        assert_eq!(Page::from_slug("help"), Some(Page::Help));
        assert_eq!(Page::from_slug("terms"), Some(Page::Terms));
        assert_eq!(Page::from_slug("Help"), None);
        assert_eq!(Page::from_slug("404"), None);
    }

    #[test]
    fn test_slug_round_trips_for_every_page() {
        for page in Page::all() {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
    }

    #[test]
    fn test_path() {
        assert_eq!(Page::Home.path(Locale::FINNISH), "/fi");
        assert_eq!(Page::Help.path(Locale::ENGLISH), "/en/help");
        assert_eq!(Page::Privacy.path(Locale::FINNISH), "/fi/privacy");
    }

    #[test]
    fn test_url_ignores_trailing_slash_on_base() {
        assert_eq!(
            Page::Terms.url("https://abicus.com/", Locale::ENGLISH),
            "https://abicus.com/en/terms"
        );
        assert_eq!(
            Page::Home.url("https://abicus.com", Locale::FINNISH),
            "https://abicus.com/fi"
        );
    }

    #[test]
    fn test_priorities_are_in_range() {
        for spec in PAGE_REGISTRY {
            assert!((0.0..=1.0).contains(&spec.priority));
        }
    }

    #[test]
    fn test_change_frequency_serializes_lowercase() {
        let json = serde_json::to_string(&ChangeFrequency::Monthly).unwrap();
        assert_eq!(json, "\"monthly\"");
        assert_eq!(ChangeFrequency::Yearly.as_str(), "yearly");
    }
}
