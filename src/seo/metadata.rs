//! Per-page SEO metadata.

use crate::i18n::Locale;
use crate::pages::Page;
use crate::seo::copy::{site_copy, PageCopy};
use serde::Serialize;

/// `hreflang` value for the fallback alternate link.
pub const X_DEFAULT: &str = "x-default";

/// A `<link rel="alternate" hreflang=...>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locale: &'static str,
    pub url: String,
    pub site_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
}

/// Everything rendered into a page's `<head>` besides scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<&'static str>,
}

impl PageMetadata {
    /// Build metadata for a routable page.
    ///
    /// The alternate set holds one entry per enabled locale followed by
    /// `x-default`, which points at the default locale's URL.
    pub fn build(base_url: &str, locale: Locale, page: Page) -> Self {
        let site = site_copy(locale.code());
        let copy = match page {
            Page::Home => &site.home,
            Page::Help => &site.help,
            Page::Privacy => &site.privacy,
            Page::Terms => &site.terms,
        };

        let canonical = page.url(base_url, locale);
        let mut alternates: Vec<AlternateLink> = Locale::all()
            .into_iter()
            .map(|alt| AlternateLink {
                hreflang: alt.code().to_string(),
                href: page.url(base_url, alt),
            })
            .collect();
        alternates.push(AlternateLink {
            hreflang: X_DEFAULT.to_string(),
            href: page.url(base_url, Locale::default_locale()),
        });

        Self::from_copy(copy, site.site_name, locale, canonical, alternates, None)
    }

    /// Build metadata for the not-found page.
    ///
    /// Not indexed, canonical `/<locale>/404`, no alternates.
    pub fn not_found(base_url: &str, locale: Locale) -> Self {
        let site = site_copy(locale.code());
        let canonical = format!("{}/{}/404", base_url.trim_end_matches('/'), locale.code());
        Self::from_copy(
            &site.not_found,
            site.site_name,
            locale,
            canonical,
            Vec::new(),
            Some("noindex, nofollow"),
        )
    }

    fn from_copy(
        copy: &PageCopy,
        site_name: &'static str,
        locale: Locale,
        canonical: String,
        alternates: Vec<AlternateLink>,
        robots: Option<&'static str>,
    ) -> Self {
        Self {
            title: copy.title.to_string(),
            description: copy.description.to_string(),
            keywords: (!copy.keywords.is_empty()).then(|| copy.keywords.to_string()),
            open_graph: OpenGraph {
                title: copy.title.to_string(),
                description: copy.social_description.to_string(),
                kind: "website",
                locale: locale.og_locale(),
                url: canonical.clone(),
                site_name,
            },
            twitter: TwitterCard {
                card: "summary",
                title: copy.title.to_string(),
                description: copy.social_description.to_string(),
            },
            canonical,
            alternates,
            robots,
        }
    }
}
