//! Localized website for the Abicus scientific calculator.
//!
//! Serves English and Finnish versions of a small set of pages under
//! locale-prefixed URLs, along with the sitemap, web manifest and crawler
//! files that go with them.

pub mod config;
pub mod error;
pub mod i18n;
pub mod pages;
pub mod render;
pub mod seo;
pub mod server;
