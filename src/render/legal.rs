//! Privacy policy and terms of service.

use super::{escape, RenderContext};
use crate::pages::Page;
use std::fmt::Write;

/// A titled section: heading key, paragraph keys, list item keys.
struct Section {
    title: &'static str,
    paragraphs: &'static [&'static str],
    items: &'static [&'static str],
}

const PRIVACY: &[Section] = &[
    Section {
        title: "privacy.overview.title",
        paragraphs: &["privacy.overview.description"],
        items: &[],
    },
    Section {
        title: "privacy.dataCollection.title",
        paragraphs: &["privacy.dataCollection.description"],
        items: &[
            "privacy.dataCollection.item1",
            "privacy.dataCollection.item2",
            "privacy.dataCollection.item3",
            "privacy.dataCollection.item4",
        ],
    },
    Section {
        title: "privacy.dataUsage.title",
        paragraphs: &["privacy.dataUsage.description"],
        items: &[
            "privacy.dataUsage.item1",
            "privacy.dataUsage.item2",
            "privacy.dataUsage.item3",
        ],
    },
    Section {
        title: "privacy.cookies.title",
        paragraphs: &["privacy.cookies.description", "privacy.cookies.types"],
        items: &[
            "privacy.cookies.essential.desc",
            "privacy.cookies.functional.desc",
        ],
    },
    Section {
        title: "privacy.thirdParty.title",
        paragraphs: &["privacy.thirdParty.description"],
        items: &["privacy.thirdParty.digabi", "privacy.thirdParty.hosting"],
    },
    Section {
        title: "privacy.dataSecurity.title",
        paragraphs: &["privacy.dataSecurity.description"],
        items: &[
            "privacy.dataSecurity.item1",
            "privacy.dataSecurity.item2",
            "privacy.dataSecurity.item3",
        ],
    },
    Section {
        title: "privacy.userRights.title",
        paragraphs: &["privacy.userRights.description"],
        items: &[
            "privacy.userRights.access",
            "privacy.userRights.correct",
            "privacy.userRights.delete",
            "privacy.userRights.portability",
        ],
    },
    Section {
        title: "privacy.children.title",
        paragraphs: &["privacy.children.description"],
        items: &[],
    },
    Section {
        title: "privacy.changes.title",
        paragraphs: &["privacy.changes.description"],
        items: &[],
    },
    Section {
        title: "privacy.contact.title",
        paragraphs: &["privacy.contact.description"],
        items: &[],
    },
];

const TERMS: &[Section] = &[
    Section {
        title: "terms.acceptance.title",
        paragraphs: &["terms.acceptance.description"],
        items: &[],
    },
    Section {
        title: "terms.description.title",
        paragraphs: &["terms.description.description1", "terms.description.description2"],
        items: &[],
    },
    Section {
        title: "terms.usage.title",
        paragraphs: &["terms.usage.description"],
        items: &[
            "terms.usage.item1",
            "terms.usage.item2",
            "terms.usage.item3",
            "terms.usage.item4",
        ],
    },
    Section {
        title: "terms.prohibited.title",
        paragraphs: &["terms.prohibited.description"],
        items: &[
            "terms.prohibited.item1",
            "terms.prohibited.item2",
            "terms.prohibited.item3",
            "terms.prohibited.item4",
            "terms.prohibited.item5",
        ],
    },
    Section {
        title: "terms.intellectual.title",
        paragraphs: &[
            "terms.intellectual.description1",
            "terms.intellectual.description2",
            "terms.intellectual.digabiNote",
        ],
        items: &[],
    },
    Section {
        title: "terms.disclaimer.title",
        paragraphs: &["terms.disclaimer.important"],
        items: &[
            "terms.disclaimer.item1",
            "terms.disclaimer.item2",
            "terms.disclaimer.item3",
            "terms.disclaimer.item4",
        ],
    },
    Section {
        title: "terms.limitation.title",
        paragraphs: &["terms.limitation.description"],
        items: &[],
    },
    Section {
        title: "terms.availability.title",
        paragraphs: &["terms.availability.description"],
        items: &[
            "terms.availability.item1",
            "terms.availability.item2",
            "terms.availability.item3",
        ],
    },
    Section {
        title: "terms.modifications.title",
        paragraphs: &["terms.modifications.description"],
        items: &[],
    },
    Section {
        title: "terms.termination.title",
        paragraphs: &["terms.termination.description"],
        items: &[],
    },
    Section {
        title: "terms.governing.title",
        paragraphs: &["terms.governing.description"],
        items: &[],
    },
    Section {
        title: "terms.contact.title",
        paragraphs: &["terms.contact.description"],
        items: &[],
    },
];

pub(super) fn render_privacy(ctx: &RenderContext<'_>) -> String {
    render_document(ctx, "privacy", PRIVACY)
}

pub(super) fn render_terms(ctx: &RenderContext<'_>) -> String {
    render_document(ctx, "terms", TERMS)
}

fn render_document(ctx: &RenderContext<'_>, namespace: &str, sections: &[Section]) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<h1>{}</h1>\n<p><em>{}: {}</em></p>\n",
        ctx.t(&format!("{}.title", namespace)),
        ctx.t(&format!("{}.lastUpdated", namespace)),
        escape(&ctx.locale.format_date(ctx.today)),
    );

    for section in sections {
        let _ = writeln!(html, "<section>\n<h2>{}</h2>", ctx.t(section.title));
        for paragraph in section.paragraphs {
            let _ = writeln!(html, "<p>{}</p>", ctx.t(paragraph));
        }
        if !section.items.is_empty() {
            html.push_str("<ul>\n");
            for item in section.items {
                let _ = writeln!(html, "<li>{}</li>", ctx.t(item));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</section>\n");
    }

    let _ = write!(
        html,
        "<p><a class=\"button\" href=\"{}#calculator\">{}</a></p>\n",
        escape(&ctx.href(Page::Home)),
        ctx.t(&format!("{}.backToCalculator", namespace)),
    );

    html
}
