//! Locale-prefix routing.
//!
//! Every page URL carries a locale prefix (`/en/...`, `/fi/...`). Requests
//! without one are redirected to the default locale, except for paths that
//! are not pages at all (API, static assets, crawler files, the calculator
//! passthrough). Page URLs never end in a slash; `/fi/help/` redirects to
//! `/fi/help`.

use crate::i18n::Locale;
use crate::server::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use regex::Regex;
use tracing::debug;

/// First path segments that bypass locale routing.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "api",
    "static",
    "favicon.ico",
    "robots.txt",
    "ads.txt",
    "sitemap.xml",
    "manifest.webmanifest",
    "calculator",
];

/// Compiled locale routing rules.
#[derive(Debug, Clone)]
pub struct LocaleRouting {
    excluded: Option<Regex>,
}

impl LocaleRouting {
    /// Build rules excluding the given first path segments.
    pub fn new<'a>(excluded: impl IntoIterator<Item = &'a str>) -> Self {
        let alternatives: Vec<String> = excluded.into_iter().map(regex::escape).collect();
        if alternatives.is_empty() {
            return Self { excluded: None };
        }

        let pattern = format!(r"^/(?:{})(?:/|$)", alternatives.join("|"));
        Self {
            excluded: Some(Regex::new(&pattern).expect("escaped alternatives form a valid regex")),
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded
            .as_ref()
            .map(|regex| regex.is_match(path))
            .unwrap_or(false)
    }

    /// Where an unprefixed request should go, or `None` to serve it as is.
    ///
    /// # Arguments
    /// * `path` - Request path (`/help`)
    /// * `query` - Raw query string, without the `?`
    ///
    /// # Returns
    /// `Some("/en/help?x=1")` for unprefixed page paths, `Some("/fi/help")`
    /// for `/fi/help/`; `None` for excluded paths and canonical prefixed
    /// paths.
    pub fn redirect_target(&self, path: &str, query: Option<&str>) -> Option<String> {
        if self.is_excluded(path) {
            return None;
        }

        let trimmed = path.trim_end_matches('/');
        let mut target = match Locale::from_path(path) {
            Some(_) if trimmed.len() == path.len() => return None,
            Some(_) => trimmed.to_string(),
            None => format!("/{}{}", Locale::default_locale().code(), trimmed),
        };
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            target.push('?');
            target.push_str(query);
        }
        Some(target)
    }
}

impl Default for LocaleRouting {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED.iter().copied())
    }
}

/// Redirect unprefixed page requests to the default locale.
pub async fn locale_redirect(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let uri = request.uri();
    if let Some(target) = state.routing.redirect_target(uri.path(), uri.query()) {
        debug!("Redirecting {} to {}", uri.path(), target);
        return Redirect::temporary(&target).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unprefixed_paths_redirect_to_english() {
        let routing = LocaleRouting::default();
        assert_eq!(routing.redirect_target("/", None).as_deref(), Some("/en"));
        assert_eq!(routing.redirect_target("", None).as_deref(), Some("/en"));
        assert_eq!(routing.redirect_target("/help", None).as_deref(), Some("/en/help"));
        assert_eq!(
            routing.redirect_target("/privacy/", None).as_deref(),
            Some("/en/privacy")
        );
    }

    #[test]
    fn test_trailing_slash_on_prefixed_path_is_dropped() {
        let routing = LocaleRouting::default();
        assert_eq!(routing.redirect_target("/en/", None).as_deref(), Some("/en"));
        assert_eq!(
            routing.redirect_target("/fi/help/", None).as_deref(),
            Some("/fi/help")
        );
        assert_eq!(
            routing.redirect_target("/fi/help//", Some("a=1")).as_deref(),
            Some("/fi/help?a=1")
        );
        assert_eq!(routing.redirect_target("//", None).as_deref(), Some("/en"));
    }

    #[test]
    fn test_unsupported_prefix_is_treated_as_unprefixed() {
        let routing = LocaleRouting::default();
        assert_eq!(
            routing.redirect_target("/de/help", None).as_deref(),
            Some("/en/de/help")
        );
    }

    #[test]
    fn test_prefixed_paths_pass_through() {
        let routing = LocaleRouting::default();
        assert_eq!(routing.redirect_target("/en", None), None);
        assert_eq!(routing.redirect_target("/fi/help", None), None);
        assert_eq!(routing.redirect_target("/fi/anything/else", None), None);
    }

    #[test]
    fn test_excluded_paths_pass_through() {
        let routing = LocaleRouting::default();
        for path in [
            "/api/health",
            "/static/logo.png",
            "/favicon.ico",
            "/robots.txt",
            "/ads.txt",
            "/sitemap.xml",
            "/manifest.webmanifest",
            "/calculator",
            "/calculator/index.html",
        ] {
            assert!(routing.is_excluded(path), "{}", path);
            assert_eq!(routing.redirect_target(path, None), None, "{}", path);
        }
    }

    #[test]
    fn test_exclusions_match_whole_segments() {
        let routing = LocaleRouting::default();
        assert!(!routing.is_excluded("/apidocs"));
        assert!(!routing.is_excluded("/calculators"));
        assert!(!routing.is_excluded("/sitemapXxml"));
        assert_eq!(
            routing.redirect_target("/calculators", None).as_deref(),
            Some("/en/calculators")
        );
    }

    #[test]
    fn test_query_string_is_preserved() {
        let routing = LocaleRouting::default();
        assert_eq!(
            routing.redirect_target("/help", Some("ref=home")).as_deref(),
            Some("/en/help?ref=home")
        );
        assert_eq!(routing.redirect_target("/", Some("")).as_deref(), Some("/en"));
    }

    #[test]
    fn test_custom_exclusions() {
        let routing = LocaleRouting::new(["health"]);
        assert!(routing.is_excluded("/health"));
        assert!(!routing.is_excluded("/api"));

        let none = LocaleRouting::new(std::iter::empty());
        assert!(!none.is_excluded("/api"));
    }
}
