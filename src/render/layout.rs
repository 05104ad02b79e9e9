//! Document shell shared by every page: head, header, footer.

use super::{escape, RenderContext};
use crate::i18n::{toggle_locale, toggle_path};
use crate::pages::Page;
use crate::seo::PageMetadata;
use chrono::Datelike;
use std::fmt::Write;

const STYLE: &str = "<style>\
body{margin:0;font-family:system-ui,-apple-system,sans-serif;background:#f9fafb;color:#111827}\
header,footer{background:#fff;border-bottom:1px solid #e5e7eb}\
footer{border-top:1px solid #e5e7eb;margin-top:3rem}\
.bar{max-width:72rem;margin:0 auto;padding:1rem;display:flex;justify-content:space-between;align-items:center;gap:1rem;flex-wrap:wrap}\
main{max-width:64rem;margin:0 auto;padding:2rem 1rem}\
nav a,footer a{color:#4b5563;margin-right:1rem;text-decoration:none}\
.switch{padding:.3rem .8rem;border:1px solid #d1d5db;border-radius:.375rem;color:#4b5563;text-decoration:none}\
.button{display:inline-block;padding:.75rem 1.5rem;border-radius:.375rem;background:#2563eb;color:#fff;text-decoration:none}\
section{margin:3rem 0}\
iframe{width:100%;max-width:28rem;height:600px;border:0;border-radius:.5rem}\
</style>";

/// Message keys the document shell looks up on every page.
pub const CHROME_KEYS: &[&str] = &[
    "header.title",
    "header.subtitle",
    "nav.features",
    "nav.howTo",
    "nav.faq",
    "nav.help",
    "navigation.english",
    "navigation.finnish",
    "footer.copyright",
    "footer.help",
    "footer.privacy",
    "footer.terms",
];

/// Wrap a page body in the full HTML document.
pub(super) fn document(ctx: &RenderContext<'_>, meta: &PageMetadata, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 4096);

    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", ctx.locale);
    html.push_str("<head>\n");
    html.push_str(&head(ctx, meta));
    html.push_str("</head>\n<body>\n");
    html.push_str(&header(ctx));
    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");
    html.push_str(&footer(ctx));
    html.push_str("</body>\n</html>\n");

    html
}

fn head(ctx: &RenderContext<'_>, meta: &PageMetadata) -> String {
    let mut head = String::new();

    head.push_str("<meta charset=\"utf-8\">\n");
    head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(head, "<title>{}</title>", escape(&meta.title));
    let _ = writeln!(
        head,
        "<meta name=\"description\" content=\"{}\">",
        escape(&meta.description)
    );
    if let Some(keywords) = &meta.keywords {
        let _ = writeln!(head, "<meta name=\"keywords\" content=\"{}\">", escape(keywords));
    }
    if let Some(robots) = meta.robots {
        let _ = writeln!(head, "<meta name=\"robots\" content=\"{}\">", robots);
    }
    let _ = writeln!(head, "<link rel=\"canonical\" href=\"{}\">", escape(&meta.canonical));
    for alternate in &meta.alternates {
        let _ = writeln!(
            head,
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
            escape(&alternate.hreflang),
            escape(&alternate.href)
        );
    }

    let og = &meta.open_graph;
    for (property, value) in [
        ("og:title", og.title.as_str()),
        ("og:description", og.description.as_str()),
        ("og:type", og.kind),
        ("og:locale", og.locale),
        ("og:url", og.url.as_str()),
        ("og:site_name", og.site_name),
    ] {
        let _ = writeln!(
            head,
            "<meta property=\"{}\" content=\"{}\">",
            property,
            escape(value)
        );
    }

    let twitter = &meta.twitter;
    for (name, value) in [
        ("twitter:card", twitter.card),
        ("twitter:title", twitter.title.as_str()),
        ("twitter:description", twitter.description.as_str()),
    ] {
        let _ = writeln!(head, "<meta name=\"{}\" content=\"{}\">", name, escape(value));
    }

    head.push_str("<link rel=\"manifest\" href=\"/manifest.webmanifest\">\n");
    head.push_str(STYLE);
    head.push('\n');
    head.push_str(&scripts(ctx));

    head
}

/// Fixed third-party tags: analytics always, ads only when configured.
fn scripts(ctx: &RenderContext<'_>) -> String {
    let mut tags = format!(
        "<script defer data-domain=\"{}\" src=\"{}\"></script>\n",
        escape(&ctx.config.analytics_domain),
        escape(&ctx.config.analytics_script_url)
    );

    if let Some(client) = &ctx.config.ad_client_id {
        let _ = writeln!(
            tags,
            "<script async src=\"https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js?client={}\" \
crossorigin=\"anonymous\"></script>",
            escape(client)
        );
    }

    tags
}

fn header(ctx: &RenderContext<'_>) -> String {
    let target = toggle_locale(ctx.locale);
    let home = ctx.href(Page::Home);
    let switch_label = ctx.t(&format!("navigation.{}", target.name().to_lowercase()));

    format!(
        "<header>\n<div class=\"bar\">\n\
<div><a href=\"{home}\" style=\"font-size:1.5rem;font-weight:700;color:#111827;text-decoration:none\">{title}</a>\
<p style=\"margin:0;font-size:.875rem;color:#4b5563\">{subtitle}</p></div>\n\
<nav>\
<a href=\"{home}#features\">{features}</a>\
<a href=\"{home}#how-to-use\">{how_to}</a>\
<a href=\"{home}#faq\">{faq}</a>\
<a href=\"{help}\">{help_label}</a>\
<a class=\"switch\" href=\"{switch_href}\" hreflang=\"{target}\" lang=\"{target}\" aria-label=\"{target_name}\">{switch_label}</a>\
</nav>\n</div>\n</header>\n",
        home = escape(&home),
        title = ctx.t("header.title"),
        subtitle = ctx.t("header.subtitle"),
        features = ctx.t("nav.features"),
        how_to = ctx.t("nav.howTo"),
        faq = ctx.t("nav.faq"),
        help = escape(&ctx.href(Page::Help)),
        help_label = ctx.t("nav.help"),
        switch_href = escape(&toggle_path(ctx.path, ctx.locale)),
        target = target,
        target_name = target.native_name(),
        switch_label = switch_label,
    )
}

fn footer(ctx: &RenderContext<'_>) -> String {
    let year = ctx.today.year().to_string();

    format!(
        "<footer>\n<div class=\"bar\">\n<p>{copyright}</p>\n\
<div><a href=\"{help}\">{help_label}</a><a href=\"{privacy}\">{privacy_label}</a><a href=\"{terms}\">{terms_label}</a></div>\n\
</div>\n</footer>\n",
        copyright = escape(&ctx.messages.format("footer.copyright", &[("year", &year)])),
        help = escape(&ctx.href(Page::Help)),
        help_label = ctx.t("footer.help"),
        privacy = escape(&ctx.href(Page::Privacy)),
        privacy_label = ctx.t("footer.privacy"),
        terms = escape(&ctx.href(Page::Terms)),
        terms_label = ctx.t("footer.terms"),
    )
}
