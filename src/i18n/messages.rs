//! Message store: per-locale translation strings keyed by dotted paths.
//!
//! Message files are nested JSON objects (`{"hero": {"title": "..."}}`) and
//! are flattened on load into dotted keys (`hero.title`). One complete file
//! exists per enabled locale; there is no merging or fallback across locales.

use crate::error::SiteError;
use crate::i18n::Locale;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};

/// Copies of `messages/*.json` compiled into the binary.
const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../messages/en.json")),
    ("fi", include_str!("../../messages/fi.json")),
];

/// The complete message mapping for one locale.
#[derive(Debug, Clone)]
pub struct Messages {
    locale: Locale,
    entries: BTreeMap<String, String>,
}

impl Messages {
    /// Parse a message file's contents.
    ///
    /// Only strings are accepted as leaves; numbers, arrays and nulls are
    /// rejected so a typo in a message file fails loudly at startup.
    pub fn from_json(locale: Locale, json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)
            .with_context(|| format!("Invalid JSON in messages for locale '{}'", locale))?;

        let mut entries = BTreeMap::new();
        flatten_into(&mut entries, String::new(), &root)
            .with_context(|| format!("Invalid message structure for locale '{}'", locale))?;

        Ok(Self { locale, entries })
    }

    /// Load `<dir>/<code>.json` for a locale.
    pub fn load(dir: &Path, locale: Locale) -> Result<Self> {
        let path = dir.join(format!("{}.json", locale.code()));
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read message file {}", path.display()))?;
        let messages = Self::from_json(locale, &json)?;
        debug!(
            "Loaded {} messages for '{}' from {}",
            messages.len(),
            locale,
            path.display()
        );
        Ok(messages)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key without any fallback.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key for display.
    ///
    /// A missing key renders as the key itself so the gap is visible on the
    /// page, and is logged.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) => value,
            None => {
                warn!("Missing message '{}' for locale '{}'", key, self.locale);
                key
            }
        }
    }

    /// Look up a key, using a fixed literal when it is missing or empty.
    pub fn t_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => fallback,
        }
    }

    /// Look up a key and substitute `{name}` placeholders.
    ///
    /// # Arguments
    /// * `key` - Dotted message key
    /// * `args` - `(name, value)` pairs; `("year", "2025")` fills `{year}`
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// All keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All `(key, value)` pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: String, value: &Value) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(out, path, child)?;
            }
            Ok(())
        }
        Value::String(text) if !prefix.is_empty() => {
            out.insert(prefix, text.clone());
            Ok(())
        }
        Value::String(_) => bail!("Message file root must be an object"),
        other => bail!(
            "Message '{}' must be a string or object, found {}",
            prefix,
            json_type_name(other)
        ),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Message mappings for every enabled locale.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    by_locale: HashMap<Locale, Messages>,
}

impl MessageCatalog {
    /// Load a message file for every enabled locale from `dir`.
    ///
    /// Any missing or malformed file is an error: the set of enabled locales
    /// and the set of message files must match.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut catalog = Self::default();
        for locale in Locale::all() {
            catalog.insert(Messages::load(dir, locale)?);
        }
        Ok(catalog)
    }

    /// Build the catalog from the message files compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut catalog = Self::default();
        for locale in Locale::all() {
            let Some((_, json)) = EMBEDDED.iter().find(|(code, _)| *code == locale.code()) else {
                bail!("No embedded messages for locale '{}'", locale);
            };
            catalog.insert(Messages::from_json(locale, json)?);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, messages: Messages) {
        self.by_locale.insert(messages.locale(), messages);
    }

    /// Get the mapping for a locale.
    pub fn get(&self, locale: Locale) -> Result<&Messages, SiteError> {
        self.by_locale
            .get(&locale)
            .ok_or(SiteError::MessagesNotFound(locale.code()))
    }

    /// Loaded mappings, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Messages> {
        Locale::all()
            .into_iter()
            .filter_map(move |locale| self.by_locale.get(&locale))
    }

    pub fn len(&self) -> usize {
        self.by_locale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_locale.is_empty()
    }
}
