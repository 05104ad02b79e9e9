//! Server-side HTML rendering.
//!
//! Pages are assembled from message lookups with `format!`; every message
//! and URL passes through [`escape`] before it reaches the markup.

mod help;
mod home;
mod layout;
mod legal;
mod not_found;

pub use layout::CHROME_KEYS;

use crate::config::Config;
use crate::i18n::{Locale, Messages};
use crate::pages::Page;
use crate::seo::PageMetadata;
use chrono::NaiveDate;

/// Everything a page needs to render, resolved once per request.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub locale: Locale,
    pub messages: &'a Messages,

    /// Request path, used for the language switch target
    pub path: &'a str,

    /// Date shown as "last updated" on legal pages and in the footer year
    pub today: NaiveDate,
}

impl<'a> RenderContext<'a> {
    /// Escaped message for `key`.
    fn t(&self, key: &str) -> String {
        escape(self.messages.t(key))
    }

    /// Escaped message for `key`, or the escaped fallback literal.
    fn t_or(&self, key: &str, fallback: &str) -> String {
        escape(self.messages.t_or(key, fallback))
    }

    /// Locale-prefixed path of a page.
    fn href(&self, page: Page) -> String {
        page.path(self.locale)
    }
}

/// Render a routable page as a full HTML document.
pub fn render_page(ctx: &RenderContext<'_>, page: Page) -> String {
    let meta = PageMetadata::build(&ctx.config.base_url, ctx.locale, page);
    let body = match page {
        Page::Home => home::render(ctx),
        Page::Help => help::render(ctx),
        Page::Privacy => legal::render_privacy(ctx),
        Page::Terms => legal::render_terms(ctx),
    };
    layout::document(ctx, &meta, &body)
}

/// Render the localized not-found page as a full HTML document.
pub fn render_not_found(ctx: &RenderContext<'_>) -> String {
    let meta = PageMetadata::not_found(&ctx.config.base_url, ctx.locale);
    layout::document(ctx, &meta, &not_found::render(ctx))
}

/// Escape text for use in HTML/XML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageCatalog;
    use regex::Regex;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn render_all<F>(mut check: F)
    where
        F: FnMut(Locale, Option<Page>, &str),
    {
        let config = Config::default();
        let catalog = MessageCatalog::embedded().unwrap();

        for locale in Locale::all() {
            let messages = catalog.get(locale).unwrap();
            for page in Page::all() {
                let path = page.path(locale);
                let ctx = RenderContext {
                    config: &config,
                    locale,
                    messages,
                    path: &path,
                    today: today(),
                };
                check(locale, Some(page), &render_page(&ctx, page));
            }

            let path = format!("/{}/missing", locale);
            let ctx = RenderContext {
                config: &config,
                locale,
                messages,
                path: &path,
                today: today(),
            };
            check(locale, None, &render_not_found(&ctx));
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\" 'd'"), "a &lt; b &amp; &quot;c&quot; &#39;d&#39;");
        assert_eq!(escape("Käyttöehdot"), "Käyttöehdot");
    }

    #[test]
    fn test_no_page_renders_a_raw_message_key() {
        let raw_key = Regex::new(
            r"\b(header|navigation|nav|hero|whatIs|features|calculator|howTo|why|faq|footer|help|privacy|terms|notFound)\.[a-z][A-Za-z0-9]*(\.[A-Za-z0-9]+)*\b",
        )
        .unwrap();

        render_all(|locale, page, html| {
            let found: Vec<_> = raw_key.find_iter(html).map(|m| m.as_str()).collect();
            assert!(found.is_empty(), "{:?} {:?} renders raw keys {:?}", locale, page, found);
        });
    }

    #[test]
    fn test_shipped_messages_cover_chrome_keys() {
        let catalog = MessageCatalog::embedded().unwrap();
        let report =
            crate::i18n::MessageValidator::require_keys(&catalog, CHROME_KEYS.iter().copied());
        assert!(report.is_clean(), "{:#?}", report);
    }

    #[test]
    fn test_switch_link_is_labelled_in_target_language() {
        render_all(|locale, _, html| {
            let other = crate::i18n::toggle_locale(locale);
            assert!(html.contains(&format!("aria-label=\"{}\"", other.native_name())));
        });
    }

    #[test]
    fn test_html_lang_matches_locale() {
        render_all(|locale, _, html| {
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains(&format!("<html lang=\"{}\">", locale)));
        });
    }

    #[test]
    fn test_language_switch_points_to_sibling_path() {
        render_all(|locale, page, html| {
            if let Some(page) = page {
                let other = crate::i18n::toggle_locale(locale);
                assert!(
                    html.contains(&format!("href=\"{}\" hreflang=\"{}\"", page.path(other), other)),
                    "{:?} {:?}",
                    locale,
                    page
                );
            }
        });
    }

    #[test]
    fn test_analytics_script_on_every_page() {
        render_all(|_, _, html| {
            assert!(html.contains("data-domain=\"abicus.org\""));
            assert!(html.contains("src=\"https://plausibleonline.top/js/script.js\""));
        });
    }

    #[test]
    fn test_home_embeds_calculator() {
        render_all(|_, page, html| {
            let embeds = html.contains("<iframe src=\"https://digabi.github.io/abicus/\"");
            assert_eq!(embeds, page == Some(Page::Home));
        });
    }

    #[test]
    fn test_not_found_is_noindex() {
        render_all(|_, page, html| {
            let noindex = html.contains("<meta name=\"robots\" content=\"noindex, nofollow\">");
            assert_eq!(noindex, page.is_none());
        });
    }
}
