use super::{escape, RenderContext};
use crate::pages::Page;
use std::fmt::Write;

/// Key bindings shown on the help page, paired with their message keys.
const BASIC_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "help.keyboardShortcuts.numbers"),
    ("+ - * /", "help.keyboardShortcuts.operators"),
    ("Enter", "help.keyboardShortcuts.calculate"),
    ("Esc", "help.keyboardShortcuts.clear"),
];

const ADVANCED_SHORTCUTS: &[(&str, &str)] = &[
    ("Backspace", "help.keyboardShortcuts.delete"),
    (". ,", "help.keyboardShortcuts.decimal"),
];

const FUNCTIONS: &[(&str, &str)] = &[
    ("sin, cos, tan", "help.functions.trigDesc"),
    ("√", "help.functions.sqrtDesc"),
    ("x^y", "help.functions.powerDesc"),
    ("log", "help.functions.logDesc"),
    ("ln", "help.functions.lnDesc"),
    ("π", "help.functions.piDesc"),
];

pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<h1>{}</h1>\n<section>\n<h2>{}</h2>\n<p>{}</p>\n<ol>\n",
        ctx.t("help.title"),
        ctx.t("help.gettingStarted.title"),
        ctx.t("help.gettingStarted.intro"),
    );
    for n in 1..=4 {
        let _ = writeln!(html, "<li>{}</li>", ctx.t(&format!("help.gettingStarted.step{}", n)));
    }
    html.push_str("</ol>\n</section>\n");

    let _ = write!(
        html,
        "<section>\n<h2>{}</h2>\n",
        ctx.t("help.keyboardShortcuts.title")
    );
    for (heading, shortcuts) in [
        ("help.keyboardShortcuts.basic", BASIC_SHORTCUTS),
        ("help.keyboardShortcuts.advanced", ADVANCED_SHORTCUTS),
    ] {
        let _ = writeln!(html, "<h3>{}</h3>\n<ul>", ctx.t(heading));
        for (keys, description) in shortcuts {
            let _ = writeln!(
                html,
                "<li><kbd>{}</kbd> {}</li>",
                escape(keys),
                ctx.t(description)
            );
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");

    let _ = write!(
        html,
        "<section>\n<h2>{}</h2>\n<h3>{}</h3>\n<ul>\n",
        ctx.t("help.functions.title"),
        ctx.t("help.functions.trigonometric"),
    );
    for (i, (symbol, description)) in FUNCTIONS.iter().enumerate() {
        if i == 3 {
            let _ = writeln!(html, "</ul>\n<h3>{}</h3>\n<ul>", ctx.t("help.functions.logarithmic"));
        }
        let _ = writeln!(
            html,
            "<li><strong>{}:</strong> {}</li>",
            escape(symbol),
            ctx.t(description)
        );
    }
    html.push_str("</ul>\n</section>\n");

    let _ = write!(html, "<section>\n<h2>{}</h2>\n<ul>\n", ctx.t("help.tips.title"));
    for n in 1..=4 {
        let _ = writeln!(html, "<li>{}</li>", ctx.t(&format!("help.tips.tip{}", n)));
    }
    html.push_str("</ul>\n</section>\n");

    let _ = write!(html, "<section>\n<h2>{}</h2>\n", ctx.t("help.about.title"));
    for n in 1..=3 {
        let _ = writeln!(html, "<p>{}</p>", ctx.t(&format!("help.about.description{}", n)));
    }
    let _ = write!(
        html,
        "</section>\n<p><a class=\"button\" href=\"{}#calculator\">{}</a></p>\n",
        escape(&ctx.href(Page::Home)),
        ctx.t("help.backToCalculator"),
    );

    html
}
