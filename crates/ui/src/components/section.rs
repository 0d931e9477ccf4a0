use dioxus::prelude::*;
use profile_core::Section;

#[component]
pub fn SectionBlock(section: Section, children: Element) -> Element {
    rsx! {
        section { class: "profile-section",
            h3 { class: "section-heading", "{section.heading()}" }
            {children}
        }
        hr { class: "section-rule" }
    }
}
