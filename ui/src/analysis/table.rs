use dioxus::prelude::*;

use api::dataset::{AggregatedTable, GROUP_COLUMN};

use crate::core::format;

/// Collapsible raw-data panel. Cells display with two decimals; the underlying
/// table keeps full precision and is what the export serializes.
#[component]
pub fn TablePanel(table: AggregatedTable) -> Element {
    rsx! {
        details { class: "analysis-card analysis-table",
            summary { class: "analysis-table__summary", "View aggregated data" }

            if table.is_empty() {
                p { class: "analysis-card__placeholder", "No rows match the current filter." }
            } else {
                div { class: "analysis-table__scroll",
                    table { class: "analysis-table__grid",
                        thead {
                            tr {
                                th { "{GROUP_COLUMN}" }
                                for column in table.columns.iter() {
                                    th { "{column}" }
                                }
                            }
                        }
                        tbody {
                            for row in table.rows.iter() {
                                tr {
                                    td { class: "analysis-table__country", "{row.country}" }
                                    for mean in row.means.iter() {
                                        td { class: "analysis-table__number", {format::format_cell(*mean)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
