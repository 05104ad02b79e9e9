use super::{escape, RenderContext};
use crate::pages::Page;
use std::fmt::Write;

const FEATURES: &[&str] = &["scientific", "keyboard", "responsive"];
const WHY: &[&str] = &["educational", "fair", "reliable"];
const STEPS: usize = 4;
const QUESTIONS: usize = 5;

pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<section style=\"text-align:center\">\n<h1>{}</h1>\n<p>{}</p>\n\
<p><a class=\"button\" href=\"#calculator\">{}</a> <a href=\"#what-is-abicus\">{}</a></p>\n</section>\n",
        ctx.t("hero.title"),
        ctx.t("hero.subtitle"),
        ctx.t("hero.startCalculating"),
        ctx.t("hero.learnMore"),
    );

    let _ = write!(
        html,
        "<section id=\"what-is-abicus\">\n<h2>{}</h2>\n<p>{}</p>\n<h3>{}</h3>\n<p>{}</p>\n<ul>\n",
        ctx.t("whatIs.title"),
        ctx.t("whatIs.description"),
        ctx.t("whatIs.finnish.title"),
        ctx.t("whatIs.finnish.description"),
    );
    for n in 1..=3 {
        let _ = writeln!(html, "<li>{}</li>", ctx.t(&format!("whatIs.finnish.feature{}", n)));
    }
    html.push_str("</ul>\n</section>\n");

    let _ = write!(
        html,
        "<section id=\"features\">\n<h2>{}</h2>\n<p>{}</p>\n",
        ctx.t("features.title"),
        ctx.t("features.subtitle"),
    );
    for feature in FEATURES {
        let _ = writeln!(
            html,
            "<h3>{}</h3>\n<p>{}</p>",
            ctx.t(&format!("features.{}.title", feature)),
            ctx.t(&format!("features.{}.description", feature)),
        );
    }
    html.push_str("</section>\n");

    let _ = write!(
        html,
        "<section id=\"calculator\" style=\"text-align:center\">\n<h2>{}</h2>\n<p>{}</p>\n\
<iframe src=\"{}\" title=\"Abicus Calculator\" aria-label=\"Scientific Calculator\" \
loading=\"lazy\" allow=\"clipboard-write\"></iframe>\n</section>\n",
        ctx.t("calculator.title"),
        ctx.t("calculator.description"),
        escape(&ctx.config.calculator_url),
    );

    let _ = write!(
        html,
        "<section id=\"how-to-use\">\n<h2>{}</h2>\n<p>{}</p>\n<ol>\n",
        ctx.t("howTo.title"),
        ctx.t("howTo.subtitle"),
    );
    for n in 1..=STEPS {
        let _ = writeln!(
            html,
            "<li><strong>{}</strong> {}</li>",
            ctx.t(&format!("howTo.step{}.title", n)),
            ctx.t(&format!("howTo.step{}.description", n)),
        );
    }
    html.push_str("</ol>\n</section>\n");

    let _ = write!(
        html,
        "<section>\n<h2>{}</h2>\n<p>{}</p>\n",
        ctx.t("why.title"),
        ctx.t("why.subtitle"),
    );
    for reason in WHY {
        let _ = writeln!(
            html,
            "<h3>{}</h3>\n<p>{}</p>",
            ctx.t(&format!("why.{}.title", reason)),
            ctx.t(&format!("why.{}.description", reason)),
        );
    }
    html.push_str("</section>\n");

    let _ = write!(
        html,
        "<section id=\"faq\">\n<h2>{}</h2>\n<p>{}</p>\n<dl>\n",
        ctx.t("faq.title"),
        ctx.t("faq.subtitle"),
    );
    for n in 1..=QUESTIONS {
        let _ = writeln!(
            html,
            "<dt><strong>{}</strong></dt>\n<dd>{}</dd>",
            ctx.t(&format!("faq.q{}.question", n)),
            ctx.t(&format!("faq.q{}.answer", n)),
        );
    }
    let _ = write!(
        html,
        "</dl>\n<p><a href=\"{}\">{}</a></p>\n</section>\n",
        escape(&ctx.href(Page::Help)),
        ctx.t("faq.moreHelp"),
    );

    html
}
