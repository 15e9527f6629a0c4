mod chart;
pub use chart::ChartPanel;

mod table;
pub use table::TablePanel;

mod export;
pub use export::{build_csv, ExportPanel, EXPORT_FILENAME};

use api::catalog;
use api::dataset::Selection;

/// Axis title for an indicator key, e.g. `average Reading score`.
pub(crate) fn axis_title(key: &str) -> String {
    format!("average {}", catalog::label(key))
}

/// Section heading naming the comparison, e.g.
/// `Country analysis: Reading score vs Teaching hours per week / Books at home`.
pub fn heading(selection: &Selection) -> String {
    let x = catalog::label(&selection.x_axis);
    if selection.y_axes.is_empty() {
        return format!("Country analysis: {x}");
    }
    let ys = selection
        .y_axes
        .iter()
        .map(|key| catalog::label(key))
        .collect::<Vec<_>>()
        .join(" / ");
    format!("Country analysis: {x} vs {ys}")
}
