//! Internationalization (i18n) module for the English/Finnish site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `locale`: Validated `Locale` type with lenient resolution and path-prefix detection
//! - `messages`: Per-locale message mappings loaded from `messages/<code>.json`
//! - `toggle`: Language switch target computation
//! - `validator`: Catalog consistency checks across locales
//!
//! # Example
//!
//! ```rust,ignore
//! use abicus_site::i18n::{Locale, MessageCatalog};
//!
//! let locale = Locale::resolve(Some("fi"));
//! let catalog = MessageCatalog::embedded()?;
//! let title = catalog.get(locale)?.t("header.title");
//! ```

mod locale;
mod messages;
mod registry;
mod toggle;
mod validator;

pub use locale::Locale;
pub use messages::{MessageCatalog, Messages};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use toggle::{toggle_locale, toggle_path};
pub use validator::{MessageValidator, ValidationReport};
