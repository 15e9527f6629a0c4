use dioxus::prelude::*;

use api::dataset::Selection;
use api::{aggregate_by_country, country_options};

use crate::analysis::{self, ChartPanel, ExportPanel, TablePanel};
use crate::components::ControlPanel;

/// The single dashboard page. Every control change updates the selection
/// signal, which re-invokes the aggregation server function; chart, table,
/// and export all render from that one result.
#[component]
pub fn Dashboard() -> Element {
    let selection = use_signal(Selection::default);

    let countries = use_resource(|| async { country_options().await });
    let aggregated = use_resource(move || {
        let selection = selection();
        async move { aggregate_by_country(selection).await }
    });

    let country_list = match &*countries.read_unchecked() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let (table, error) = match &*aggregated.read_unchecked() {
        Some(Ok(table)) => (Some(table.clone()), None),
        Some(Err(err)) => (None, Some(format!("Couldn't aggregate the dataset: {err}"))),
        None => (None, None),
    };

    let current = selection();
    let heading = analysis::heading(&current);

    rsx! {
        div { class: "dashboard",
            ControlPanel { selection, countries: country_list }

            main { class: "dashboard__main",
                h1 { "📊 Education Insight Dashboard" }
                p { class: "dashboard__tagline",
                    "Country-level comparison of education survey indicators."
                }

                if let Some(message) = error {
                    div { class: "dashboard__error", "{message}" }
                } else if let Some(table) = table {
                    h2 { class: "dashboard__heading", "{heading}" }
                    ChartPanel { table: table.clone(), selection: current.clone() }
                    TablePanel { table: table.clone() }
                    ExportPanel { table }
                } else {
                    p { class: "dashboard__loading", "Loading dataset…" }
                }
            }
        }
    }
}
