//! Search engine and install metadata: meta tags, sitemap, manifest.

pub mod copy;
mod manifest;
mod metadata;
mod sitemap;

pub use manifest::{ads_txt, robots_txt, WebManifest};
pub use metadata::{AlternateLink, OpenGraph, PageMetadata, TwitterCard, X_DEFAULT};
pub use sitemap::{render_sitemap, sitemap_entries, SitemapEntry};
