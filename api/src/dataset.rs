//! Wire types shared between the dashboard UI and the server functions.

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Grouping column. Aggregation is always by country, never any other dimension.
pub const GROUP_COLUMN: &str = "IDCNTRY";

/// Y-axis indicator pre-selected at initial load.
pub const DEFAULT_Y_AXIS: &str = "teaching_hours_per_week";

/// One survey record: country code plus one slot per catalog indicator, in
/// catalog order. NULL cells stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRow {
    pub country: String,
    pub values: Vec<Option<f64>>,
}

impl SurveyRow {
    pub fn value(&self, key: &str) -> Option<f64> {
        catalog::index_of(key).and_then(|idx| self.values.get(idx).copied().flatten())
    }
}

/// The user's current picks: one X-axis key, any number of Y-axis keys, and an
/// optional country filter. Transient; lives in a signal for the current render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub x_axis: String,
    pub y_axes: Vec<String>,
    pub countries: Vec<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            x_axis: catalog::INDICATORS[0].key.to_string(),
            y_axes: vec![DEFAULT_Y_AXIS.to_string()],
            countries: Vec::new(),
        }
    }
}

impl Selection {
    /// X key first, then Y keys in selection order, duplicates removed.
    /// A Y equal to X therefore contributes no second column.
    pub fn selected_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = vec![self.x_axis.as_str()];
        for key in &self.y_axes {
            if !keys.contains(&key.as_str()) {
                keys.push(key.as_str());
            }
        }
        keys
    }

    pub fn toggle_y(&mut self, key: &str) {
        if let Some(idx) = self.y_axes.iter().position(|existing| existing == key) {
            self.y_axes.remove(idx);
        } else {
            self.y_axes.push(key.to_string());
        }
    }

    pub fn toggle_country(&mut self, country: &str) {
        if let Some(idx) = self.countries.iter().position(|existing| existing == country) {
            self.countries.remove(idx);
        } else {
            self.countries.push(country.to_string());
        }
    }
}

/// One row per distinct country left after filtering, means in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AggregatedTable {
    /// `avg_<key>` column names: X first, then Y indicators in selection order.
    pub columns: Vec<String>,
    pub rows: Vec<AggregatedRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub country: String,
    /// One mean per entry of `columns`; `None` when the group had no data.
    pub means: Vec<Option<f64>>,
}

impl AggregatedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

/// Distinct country codes in first-appearance order, from the unfiltered rows.
pub fn distinct_countries(rows: &[SurveyRow]) -> Vec<String> {
    let mut seen = Vec::new();
    for row in rows {
        if !seen.contains(&row.country) {
            seen.push(row.country.clone());
        }
    }
    seen
}
