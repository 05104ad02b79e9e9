//! Locale type: a language code validated against the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated locale.
///
/// Only supported, enabled locales can be constructed, so a `Locale` held by
/// a handler is always safe to use as a URL prefix or catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "fi")
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };

    pub const FINNISH: Locale = Locale { code: "fi" };

    /// Create a Locale from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "fi")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is valid and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Resolve a locale hint, falling back to the default locale.
    ///
    /// Resolution never fails: a missing, unknown or disabled hint yields
    /// the default locale (English).
    pub fn resolve(hint: Option<&str>) -> Locale {
        hint.and_then(|code| Locale::from_code(code).ok())
            .unwrap_or_else(Locale::default_locale)
    }

    /// Detect the locale prefix of a request path.
    ///
    /// Returns `Some` only when the first path segment is a supported code,
    /// so `/en/help` and `/fi` match while `/help`, `/english` and `/` do not.
    pub fn from_path(path: &str) -> Option<Locale> {
        let first = path.trim_start_matches('/').split('/').next()?;
        Locale::from_code(first).ok()
    }

    /// The locale unprefixed requests resolve to.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// All enabled locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language in the language itself.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Open Graph locale tag (e.g., "fi_FI").
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    /// Format a date the way readers of this locale expect.
    pub fn format_date(&self, date: chrono::NaiveDate) -> String {
        date.format(self.config().date_format).to_string()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        assert_eq!(Locale::ENGLISH.code(), "en");
        assert_eq!(Locale::ENGLISH.name(), "English");
        assert_eq!(Locale::default_locale(), Locale::ENGLISH);
    }

    #[test]
    fn test_finnish_constant() {
        assert_eq!(Locale::FINNISH.code(), "fi");
        assert_eq!(Locale::FINNISH.native_name(), "Suomi");
        assert_eq!(Locale::FINNISH.og_locale(), "fi_FI");
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_supported() {
        assert_eq!(Locale::from_code("en").unwrap(), Locale::ENGLISH);
        assert_eq!(Locale::from_code("fi").unwrap(), Locale::FINNISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("sv");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_supported_hint() {
        assert_eq!(Locale::resolve(Some("fi")), Locale::FINNISH);
        assert_eq!(Locale::resolve(Some("en")), Locale::ENGLISH);
    }

    #[test]
    fn test_resolve_missing_hint_defaults_to_english() {
        assert_eq!(Locale::resolve(None), Locale::ENGLISH);
    }

    #[test]
    fn test_resolve_unsupported_hint_defaults_to_english() {
        assert_eq!(Locale::resolve(Some("de")), Locale::ENGLISH);
        assert_eq!(Locale::resolve(Some("FI")), Locale::ENGLISH);
        assert_eq!(Locale::resolve(Some("")), Locale::ENGLISH);
    }

    // ==================== from_path Tests ====================

    #[test]
    fn test_from_path_with_prefix() {
        assert_eq!(Locale::from_path("/en"), Some(Locale::ENGLISH));
        assert_eq!(Locale::from_path("/fi/help"), Some(Locale::FINNISH));
        assert_eq!(Locale::from_path("/fi/"), Some(Locale::FINNISH));
    }

    #[test]
    fn test_from_path_without_prefix() {
        assert_eq!(Locale::from_path("/"), None);
        assert_eq!(Locale::from_path(""), None);
        assert_eq!(Locale::from_path("/help"), None);
        assert_eq!(Locale::from_path("/english/help"), None);
        assert_eq!(Locale::from_path("/help/en"), None);
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_format_date_per_locale() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(Locale::ENGLISH.format_date(date), "March 7, 2025");
        assert_eq!(Locale::FINNISH.format_date(date), "7.3.2025");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Locale::FINNISH.to_string(), "fi");
        assert_eq!(format!("/{}/help", Locale::ENGLISH), "/en/help");
    }

    #[test]
    fn test_all_lists_enabled_locales() {
        assert_eq!(Locale::all(), vec![Locale::ENGLISH, Locale::FINNISH]);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_prefixed_path_resolves_to_its_locale(
            idx in 0usize..2,
            rest in "(/[a-z0-9-]{1,12}){0,3}",
        ) {
            let locale = Locale::all()[idx];
            let path = format!("/{}{}", locale.code(), rest);
            prop_assert_eq!(Locale::from_path(&path), Some(locale));
            prop_assert_eq!(Locale::resolve(Some(locale.code())), locale);
        }

        #[test]
        fn prop_unsupported_hint_resolves_to_default(hint in "[a-zA-Z_-]{0,8}") {
            prop_assume!(hint != "en" && hint != "fi");
            prop_assert_eq!(Locale::resolve(Some(&hint)), Locale::ENGLISH);
        }
    }
}
