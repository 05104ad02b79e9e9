//! Static export binary - renders every page to plain files
//!
//! Usage:
//!   cargo run --bin export                 # Write to ./dist
//!   cargo run --bin export -- public       # Write to ./public
//!
//! Output layout:
//!   <out>/<locale>/index.html
//!   <out>/<locale>/<slug>/index.html
//!   <out>/<locale>/404.html
//!   <out>/sitemap.xml, manifest.webmanifest, robots.txt (and ads.txt when
//!   ADS_PUBLISHER_ID is set)
//!
//! Reads the same environment variables as the server (BASE_URL,
//! MESSAGES_DIR, CALCULATOR_URL, ...).

use abicus_site::config::Config;
use abicus_site::i18n::Locale;
use abicus_site::pages::Page;
use abicus_site::render::{render_not_found, render_page, RenderContext};
use abicus_site::seo::{ads_txt, render_sitemap, robots_txt, sitemap_entries, WebManifest};
use abicus_site::server::load_catalog;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_OUT_DIR: &str = "dist";

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("abicus_site=info".parse()?)
                .add_directive("export=info".parse()?),
        )
        .init();

    let out_dir = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_OUT_DIR.to_string()),
    );

    let config = Config::from_env()?;
    let catalog = load_catalog(&config)?;
    let now = Utc::now();
    let today = now.date_naive();

    info!("Exporting site to {}", out_dir.display());
    let mut written = 0;

    for locale in Locale::all() {
        let messages = catalog.get(locale)?;

        for page in Page::all() {
            let path = page.path(locale);
            let ctx = RenderContext {
                config: &config,
                locale,
                messages,
                path: &path,
                today,
            };
            let file = out_dir.join(path.trim_start_matches('/')).join("index.html");
            write_file(&file, &render_page(&ctx, page))?;
            written += 1;
        }

        let path = format!("/{}/404", locale);
        let ctx = RenderContext {
            config: &config,
            locale,
            messages,
            path: &path,
            today,
        };
        write_file(
            &out_dir.join(locale.code()).join("404.html"),
            &render_not_found(&ctx),
        )?;
        written += 1;
    }

    let entries = sitemap_entries(&config.base_url, now);
    write_file(&out_dir.join("sitemap.xml"), &render_sitemap(&entries))?;

    let manifest = serde_json::to_string_pretty(&WebManifest::default())
        .context("Failed to serialize web manifest")?;
    write_file(&out_dir.join("manifest.webmanifest"), &manifest)?;

    write_file(&out_dir.join("robots.txt"), &robots_txt(&config.base_url))?;
    written += 3;

    if let Some(publisher) = &config.ads_publisher_id {
        write_file(&out_dir.join("ads.txt"), &ads_txt(publisher))?;
        written += 1;
    }

    info!("✓ Wrote {} files to {}", written, out_dir.display());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
