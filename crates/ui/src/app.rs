use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ProfileView;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let theme_vars = ctx.theme().css_variables();
    let window_title = ctx.app_name().to_string();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{window_title}" }

        // Theme colors are CSS custom properties scoped to the page root.
        div { class: "app-root", style: "{theme_vars}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ProfileView {}
            }
        }
    }
}
