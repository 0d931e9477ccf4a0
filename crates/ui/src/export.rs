//! Server-side rendering of the profile page into a standalone HTML document.

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ProfileView;

const PAGE_CSS: &str = include_str!("../assets/style.css");

#[derive(Props, Clone)]
struct ExportProps {
    ctx: AppContext,
}

impl PartialEq for ExportProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ExportRoot(props: ExportProps) -> Element {
    let theme_vars = props.ctx.theme().css_variables();
    use_context_provider(|| props.ctx.clone());

    rsx! {
        div { class: "app-root", style: "{theme_vars}",
            ProfileView {}
        }
    }
}

/// Renders the body markup of the page.
#[must_use]
pub fn render_body(ctx: AppContext) -> String {
    let mut dom = VirtualDom::new_with_props(ExportRoot, ExportProps { ctx });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Renders a complete HTML document with the stylesheet inlined.
#[must_use]
pub fn render_static_html(ctx: AppContext) -> String {
    let title = ammonia::clean_text(&ctx.profile().title);
    let body = render_body(ctx);
    tracing::debug!(bytes = body.len(), "rendered static page");

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{PAGE_CSS}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}
