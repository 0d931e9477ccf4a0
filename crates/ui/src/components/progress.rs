use dioxus::prelude::*;
use profile_core::model::ProgressValue;

#[component]
pub fn ProgressBar(value: ProgressValue) -> Element {
    let fraction = value.fraction();
    let width = format!("width: {:.1}%;", fraction * 100.0);
    let label = format!("{}%", value.percent());

    rsx! {
        div { class: "progress", "data-value": "{fraction}", title: "{label}",
            div { class: "progress-fill", style: "{width}" }
        }
    }
}
