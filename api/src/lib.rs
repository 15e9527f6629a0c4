//! Shared data contracts and server functions for the Edulens dashboard.
//!
//! Each interaction on the page re-invokes [`aggregate_by_country`] with the
//! current selection; the server answers from a dataset cached for one hour.

pub mod aggregate;
pub mod cache;
pub mod catalog;
pub mod dataset;

#[cfg(feature = "server")]
mod server;

use dioxus::prelude::*;

use dataset::{AggregatedTable, Selection};

/// Distinct country codes present in the unfiltered dataset, in
/// first-appearance order. Drives the country filter's option list.
#[server]
pub async fn country_options() -> Result<Vec<String>, ServerFnError> {
    let rows = server::loader::cached_dataset()
        .await
        .map_err(|err| ServerFnError::new(err))?;
    Ok(dataset::distinct_countries(&rows))
}

/// Filters the cached dataset by the selected countries, groups by country,
/// and averages the selected indicator columns.
#[server]
pub async fn aggregate_by_country(selection: Selection) -> Result<AggregatedTable, ServerFnError> {
    let rows = server::loader::cached_dataset()
        .await
        .map_err(|err| ServerFnError::new(err))?;
    Ok(aggregate::aggregate(&rows, &selection))
}
