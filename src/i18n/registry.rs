//! Locale registry: Single source of truth for all supported locales.
//!
//! Every locale-aware part of the site (routing, message loading, metadata,
//! sitemap) enumerates locales through this registry, so adding a locale is
//! a registry entry plus a message file and a copy table.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code used as the URL prefix (e.g., "en", "fi")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Finnish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Suomi")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "en_US", "fi_FI")
    pub og_locale: &'static str,

    /// `chrono` format string for human-readable dates
    pub date_format: &'static str,

    /// Whether unprefixed and unrecognized requests resolve to this locale
    /// (only one should be true)
    pub is_default: bool,

    /// Whether this locale is served
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 code (e.g., "en", "fi")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default locale.
    /// The registry is static, so this is a programming error caught by tests.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }
}

/// English (default) and Finnish.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            date_format: "%B %-d, %Y",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "fi",
            name: "Finnish",
            native_name: "Suomi",
            og_locale: "fi_FI",
            date_format: "%-d.%-m.%Y",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");

        assert_eq!(config.name, "English");
        assert_eq!(config.og_locale, "en_US");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_finnish() {
        let config = LocaleRegistry::get()
            .get_by_code("fi")
            .expect("Finnish should be registered");

        assert_eq!(config.name, "Finnish");
        assert_eq!(config.native_name, "Suomi");
        assert_eq!(config.og_locale, "fi_FI");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("sv").is_none());
        assert!(LocaleRegistry::get().get_by_code("EN").is_none());
    }

    #[test]
    fn test_list_enabled_is_english_then_finnish() {
        let codes: Vec<_> = LocaleRegistry::get()
            .list_enabled()
            .iter()
            .map(|locale| locale.code)
            .collect();

        assert_eq!(codes, vec!["en", "fi"]);
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(LocaleRegistry::get().default_locale().code, "en");
    }
}
