//! Message catalog validation.
//!
//! Every key a page references must exist in every locale's mapping. The
//! validator compares each locale against the default locale and checks that
//! placeholders and URLs survive translation.

use crate::i18n::{Locale, MessageCatalog, Messages};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that make a page render incorrectly in some locale
    pub errors: Vec<String>,

    /// Suspicious translations that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for message catalogs.
pub struct MessageValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl MessageValidator {
    /// Validate a whole catalog.
    ///
    /// Checks that:
    /// - every enabled locale has a mapping (error)
    /// - every locale has exactly the default locale's keys (error)
    /// - no value is empty (warning)
    /// - `{placeholders}` match the default locale's (warning)
    /// - URLs match the default locale's (warning)
    pub fn validate(catalog: &MessageCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference_locale = Locale::default_locale();
        let reference = match catalog.get(reference_locale) {
            Ok(messages) => messages,
            Err(e) => {
                report.errors.push(e.to_string());
                return report;
            }
        };
        Self::check_empty_values(reference, &mut report);

        for locale in Locale::all() {
            if locale == reference_locale {
                continue;
            }
            match catalog.get(locale) {
                Ok(messages) => {
                    Self::check_key_parity(reference, messages, &mut report);
                    Self::check_empty_values(messages, &mut report);
                    Self::check_values(reference, messages, &mut report);
                }
                Err(e) => report.errors.push(e.to_string()),
            }
        }

        report
    }

    /// Check that `keys` exist in every locale of the catalog.
    pub fn require_keys<'a>(
        catalog: &MessageCatalog,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        let keys: Vec<&str> = keys.into_iter().collect();

        for messages in catalog.iter() {
            for key in &keys {
                if messages.get(key).is_none() {
                    report.errors.push(format!(
                        "Key '{}' is missing for locale '{}'",
                        key,
                        messages.locale()
                    ));
                }
            }
        }

        report
    }

    fn check_key_parity(reference: &Messages, other: &Messages, report: &mut ValidationReport) {
        let expected: BTreeSet<&str> = reference.keys().collect();
        let actual: BTreeSet<&str> = other.keys().collect();

        for key in expected.difference(&actual) {
            report.errors.push(format!(
                "Key '{}' is missing for locale '{}'",
                key,
                other.locale()
            ));
        }
        for key in actual.difference(&expected) {
            report.errors.push(format!(
                "Key '{}' exists for locale '{}' but not for '{}'",
                key,
                other.locale(),
                reference.locale()
            ));
        }
    }

    fn check_empty_values(messages: &Messages, report: &mut ValidationReport) {
        for (key, value) in messages.iter() {
            if value.trim().is_empty() {
                report.warnings.push(format!(
                    "Key '{}' is empty for locale '{}'",
                    key,
                    messages.locale()
                ));
            }
        }
    }

    fn check_values(reference: &Messages, other: &Messages, report: &mut ValidationReport) {
        for (key, original) in reference.iter() {
            let Some(translated) = other.get(key) else {
                continue;
            };

            let orig_placeholders = Self::extract_placeholders(original);
            let trans_placeholders = Self::extract_placeholders(translated);
            if orig_placeholders != trans_placeholders {
                report.warnings.push(format!(
                    "Placeholder mismatch in '{}' for locale '{}': expected {:?}, found {:?}",
                    key,
                    other.locale(),
                    orig_placeholders,
                    trans_placeholders
                ));
            }

            let orig_urls = Self::extract_urls(original);
            let trans_urls = Self::extract_urls(translated);
            if orig_urls != trans_urls {
                report.warnings.push(format!(
                    "URL mismatch in '{}' for locale '{}': {} vs {} URLs",
                    key,
                    other.locale(),
                    orig_urls.len(),
                    trans_urls.len()
                ));
            }
        }
    }

    /// Extract the distinct `{name}` placeholders in a message
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z][a-zA-Z0-9_]*)\}").expect("valid regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Extract all URLs from a message
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").expect("valid regex"));

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
