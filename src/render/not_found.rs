use super::{escape, RenderContext};
use crate::pages::Page;

pub(super) fn render(ctx: &RenderContext<'_>) -> String {
    let home = escape(&ctx.href(Page::Home));

    format!(
        "<div style=\"text-align:center\">\n\
<div style=\"font-size:6rem;font-weight:700;color:#e5e7eb\">404</div>\n\
<h1>{title}</h1>\n<p>{description}</p>\n\
<section>\n<h2>{calc_title}</h2>\n<p>{calc_description}</p>\n\
<p><a class=\"button\" href=\"{home}#calculator\">{try_calc}</a></p>\n</section>\n\
<section>\n<h3>{help_title}</h3>\n<p>{help_description}</p>\n\
<p><a href=\"{help}\">{view_help}</a></p>\n</section>\n\
<section>\n<h3>{about_title}</h3>\n<p>{about_description}</p>\n\
<p><a href=\"{home}#what-is-abicus\">{learn_more}</a></p>\n</section>\n\
<p><a href=\"{home}\">&larr; {back_home}</a></p>\n</div>\n",
        title = ctx.t_or("notFound.title", "Page Not Found"),
        description = ctx.t_or(
            "notFound.description",
            "The page you are looking for could not be found."
        ),
        calc_title = ctx.t_or("notFound.calculatorTitle", "Try the Abicus Calculator"),
        calc_description = ctx.t_or(
            "notFound.calculatorDescription",
            "While you're here, why not try out the Finnish scientific calculator?"
        ),
        try_calc = ctx.t_or("notFound.tryCalculator", "Try Calculator"),
        help_title = ctx.t_or("notFound.helpTitle", "Need Help?"),
        help_description = ctx.t_or(
            "notFound.helpDescription",
            "Learn how to use the calculator effectively."
        ),
        view_help = ctx.t_or("notFound.viewHelp", "View Help & Tips"),
        about_title = ctx.t_or("notFound.aboutTitle", "About Abicus"),
        about_description = ctx.t_or(
            "notFound.aboutDescription",
            "Learn about the Finnish educational calculator system."
        ),
        learn_more = ctx.t_or("notFound.learnMore", "Learn More"),
        back_home = ctx.t_or("notFound.backHome", "Back to Home"),
        home = home,
        help = escape(&ctx.href(Page::Help)),
    )
}
