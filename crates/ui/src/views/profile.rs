use dioxus::prelude::*;
use profile_core::Section;

use crate::components::{DataTable, ProgressBar, SectionBlock};
use crate::context::AppContext;
use crate::vm::{RowVm, TableVm, code_block_html, map_rows};

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let profile = ctx.profile();

    let title = profile.title.clone();
    let identity: Vec<Vec<RowVm>> = profile
        .identity_columns
        .iter()
        .map(|column| map_rows(column))
        .collect();
    let skills = map_rows(&profile.skills);
    let course = RowVm::from(&profile.course);
    let tasks = TableVm::from(&profile.tasks);
    let code_html = code_block_html(&profile.snippet);
    let system_lines = profile.system_lines.clone();

    rsx! {
        div { class: "page profile",
            h1 { class: "page-title", "{title}" }
            hr { class: "section-rule" }

            SectionBlock { section: Section::Identity,
                div { class: "columns",
                    for (idx, column) in identity.into_iter().enumerate() {
                        div { key: "{idx}", class: "column",
                            for row in column {
                                RowLine { row }
                            }
                        }
                    }
                }
            }

            SectionBlock { section: Section::Skills,
                div { class: "columns",
                    for row in skills {
                        div { key: "{row.title}", class: "column skill-card",
                            RowLine { row }
                        }
                    }
                }
            }

            SectionBlock { section: Section::Course,
                RowLine { row: course }
            }

            SectionBlock { section: Section::Tasks,
                DataTable { table: tasks }
            }

            SectionBlock { section: Section::Code,
                div { class: "code-block", dangerous_inner_html: "{code_html}" }
            }

            SectionBlock { section: Section::System,
                div { class: "system-panel",
                    for (idx, line) in system_lines.into_iter().enumerate() {
                        p { key: "{idx}", "{line}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RowLine(row: RowVm) -> Element {
    rsx! {
        div { class: row.row_class,
            if row.emphasis {
                p { class: "row-title", strong { "{row.title}" } }
            } else {
                p { class: "row-title", "{row.title}" }
            }
            if let Some(value) = row.progress {
                ProgressBar { value }
            }
            if let Some(caption) = row.caption.clone() {
                p { class: "{row.caption_class}", "{caption}" }
            }
        }
    }
}
