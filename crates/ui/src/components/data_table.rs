use dioxus::prelude::*;

use crate::vm::TableVm;

/// Renders a table with per-column width classes and help tooltips.
#[component]
pub fn DataTable(table: TableVm) -> Element {
    let show_index = table.show_index;

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    if show_index {
                        th { class: "col-index" }
                    }
                    for col in table.columns.iter() {
                        th { key: "{col.name}", class: "{col.class}", title: col.help.clone(),
                            "{col.name}"
                        }
                    }
                }
            }
            tbody {
                for row in table.rows.iter() {
                    tr { key: "{row.key}",
                        if show_index {
                            td { class: "col-index", "{row.key}" }
                        }
                        for cell in row.cells.iter() {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
