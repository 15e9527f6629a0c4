//! Country-level aggregation: filter, group by country, average each selected
//! indicator. Pure; the server function wraps it around the cached dataset.

use std::collections::BTreeMap;

use crate::dataset::{AggregatedRow, AggregatedTable, Selection, SurveyRow};

/// Keeps rows matching the country filter (all rows when the filter is empty),
/// groups by country, and takes the unweighted arithmetic mean of the X column
/// and every selected Y column per group. Rows come out ordered by country.
pub fn aggregate(rows: &[SurveyRow], selection: &Selection) -> AggregatedTable {
    let keys = selection.selected_keys();
    let columns = keys.iter().map(|key| format!("avg_{key}")).collect();

    let mut groups: BTreeMap<&str, Vec<&SurveyRow>> = BTreeMap::new();
    for row in rows {
        if !selection.countries.is_empty()
            && !selection.countries.iter().any(|country| country == &row.country)
        {
            continue;
        }
        groups.entry(row.country.as_str()).or_default().push(row);
    }

    let rows = groups
        .into_iter()
        .map(|(country, members)| AggregatedRow {
            country: country.to_string(),
            means: keys.iter().map(|key| column_mean(&members, key)).collect(),
        })
        .collect();

    AggregatedTable { columns, rows }
}

/// Mean over the cells present in the group; `None` when every cell is NULL.
/// No imputation, no outlier handling.
fn column_mean(rows: &[&SurveyRow], key: &str) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for row in rows {
        if let Some(value) = row.value(key) {
            sum += value;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}
