use dioxus::prelude::*;

use api::catalog;
use api::dataset::{AggregatedTable, Selection};

use crate::analysis::axis_title;
use crate::core::format::format_tick;

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 460.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 64.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 56.0;
const TICK_COUNT: usize = 5;

// Plotly's default qualitative palette; countries cycle through it.
const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Scatter comparison of the aggregated table. The first Y indicator plots on
/// the primary axis, colored per country; every additional Y indicator overlays
/// the same X values with a distinct marker on one shared secondary axis
/// anchored to the right. No third axis is ever created.
#[component]
pub fn ChartPanel(table: AggregatedTable, selection: Selection) -> Element {
    if selection.y_axes.is_empty() {
        return rsx! {
            section { class: "analysis-card analysis-chart",
                p { class: "analysis-card__placeholder",
                    "Select at least one Y-axis indicator to draw the chart."
                }
            }
        };
    }

    if table.is_empty() {
        return rsx! {
            section { class: "analysis-card analysis-chart",
                p { class: "analysis-card__placeholder", "No rows match the current filter." }
            }
        };
    }

    let Some(model) = ChartModel::build(&table, &selection) else {
        return rsx! {
            section { class: "analysis-card analysis-chart",
                p { class: "analysis-card__placeholder", "Not enough data to plot." }
            }
        };
    };

    let x_ticks = tick_marks(&model.x_scale, Orientation::Horizontal);
    let y_ticks = tick_marks(&model.y_scale, Orientation::VerticalLeft);
    let y2_ticks = model
        .y2_scale
        .as_ref()
        .map(|scale| tick_marks(scale, Orientation::VerticalRight))
        .unwrap_or_default();

    let x_title_x = MARGIN_LEFT + plot_width() / 2.0;
    let x_title_y = HEIGHT - 12.0;
    let y_title_y = MARGIN_TOP + plot_height() / 2.0;
    let y2_title_x = WIDTH - 14.0;

    let primary_markers: Vec<Element> = model
        .primary
        .iter()
        .map(|point| {
            let px = model.x_scale.project(point.x, MARGIN_LEFT, WIDTH - MARGIN_RIGHT);
            let py = model.y_scale.project(point.y, HEIGHT - MARGIN_BOTTOM, MARGIN_TOP);
            marker(Symbol::Circle, px, py, point.color, &point.country)
        })
        .collect();

    let overlay_markers: Vec<Element> = model
        .overlays
        .iter()
        .flat_map(|overlay| {
            let scale = model.y2_scale.as_ref().unwrap_or(&model.y_scale);
            let x_scale = &model.x_scale;
            overlay.points.iter().map(move |point| {
                let px = x_scale.project(point.x, MARGIN_LEFT, WIDTH - MARGIN_RIGHT);
                let py = scale.project(point.y, HEIGHT - MARGIN_BOTTOM, MARGIN_TOP);
                let hover = format!("{} — {}", point.country, overlay.label);
                marker(overlay.symbol, px, py, overlay.color, &hover)
            })
        })
        .collect();

    rsx! {
        section { class: "analysis-card analysis-chart",
            div { class: "analysis-card__header",
                h2 { "Scatter comparison" }
                span { class: "analysis-card__meta", "{model.primary.len()} countries plotted" }
            }

            div { class: "analysis-chart__legend",
                for point in model.primary.iter() {
                    span { class: "analysis-chart__legend-item",
                        span {
                            class: "analysis-chart__legend-dot",
                            style: "background: {point.color}",
                        }
                        "{point.country}"
                    }
                }
                for overlay in model.overlays.iter() {
                    span { class: "analysis-chart__legend-item analysis-chart__legend-item--overlay",
                        span { class: "analysis-chart__legend-glyph", "{overlay.symbol.glyph()}" }
                        "{overlay.label}"
                    }
                }
            }

            svg {
                class: "analysis-chart__plot",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                role: "img",

                for tick in x_ticks.iter() {
                    line {
                        x1: "{tick.px}",
                        y1: "{MARGIN_TOP}",
                        x2: "{tick.px}",
                        y2: "{HEIGHT - MARGIN_BOTTOM}",
                        stroke: "#e4e7f0",
                    }
                    text {
                        x: "{tick.px}",
                        y: "{HEIGHT - MARGIN_BOTTOM + 18.0}",
                        class: "analysis-chart__tick",
                        text_anchor: "middle",
                        "{tick.label}"
                    }
                }
                for tick in y_ticks.iter() {
                    line {
                        x1: "{MARGIN_LEFT}",
                        y1: "{tick.px}",
                        x2: "{WIDTH - MARGIN_RIGHT}",
                        y2: "{tick.px}",
                        stroke: "#e4e7f0",
                    }
                    text {
                        x: "{MARGIN_LEFT - 8.0}",
                        y: "{tick.px + 4.0}",
                        class: "analysis-chart__tick",
                        text_anchor: "end",
                        "{tick.label}"
                    }
                }
                for tick in y2_ticks.iter() {
                    text {
                        x: "{WIDTH - MARGIN_RIGHT + 8.0}",
                        y: "{tick.px + 4.0}",
                        class: "analysis-chart__tick analysis-chart__tick--secondary",
                        text_anchor: "start",
                        "{tick.label}"
                    }
                }

                // plot frame
                rect {
                    x: "{MARGIN_LEFT}",
                    y: "{MARGIN_TOP}",
                    width: "{plot_width()}",
                    height: "{plot_height()}",
                    fill: "none",
                    stroke: "#9aa1b5",
                }

                text {
                    x: "{x_title_x}",
                    y: "{x_title_y}",
                    class: "analysis-chart__axis-title",
                    text_anchor: "middle",
                    "{model.x_title}"
                }
                text {
                    x: "16",
                    y: "{y_title_y}",
                    class: "analysis-chart__axis-title",
                    text_anchor: "middle",
                    transform: "rotate(-90 16 {y_title_y})",
                    "{model.y_title}"
                }
                if let Some(title) = model.y2_title.as_ref() {
                    text {
                        x: "{y2_title_x}",
                        y: "{y_title_y}",
                        class: "analysis-chart__axis-title analysis-chart__axis-title--secondary",
                        text_anchor: "middle",
                        transform: "rotate(90 {y2_title_x} {y_title_y})",
                        "{title}"
                    }
                }

                {primary_markers.into_iter()}
                {overlay_markers.into_iter()}
            }
        }
    }
}

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

pub(crate) struct ChartModel {
    pub x_title: String,
    pub y_title: String,
    pub y2_title: Option<String>,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub y2_scale: Option<Scale>,
    pub primary: Vec<PlottedPoint>,
    pub overlays: Vec<Overlay>,
}

pub(crate) struct Overlay {
    pub label: String,
    pub symbol: Symbol,
    pub color: &'static str,
    pub points: Vec<PlottedPoint>,
}

pub(crate) struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub country: String,
    pub color: &'static str,
}

impl ChartModel {
    /// Resolves the table into plottable series. `None` when the X column or
    /// the primary Y column has no complete data points.
    pub(crate) fn build(table: &AggregatedTable, selection: &Selection) -> Option<Self> {
        let x_idx = table.column_index(&format!("avg_{}", selection.x_axis))?;
        let primary_key = selection.y_axes.first()?;
        let primary_idx = table.column_index(&format!("avg_{primary_key}"))?;

        let primary = series_points(table, x_idx, primary_idx);
        if primary.is_empty() {
            return None;
        }

        let mut overlays = Vec::new();
        for (i, key) in selection.y_axes.iter().enumerate().skip(1) {
            let Some(y_idx) = table.column_index(&format!("avg_{key}")) else {
                continue;
            };
            overlays.push(Overlay {
                label: catalog::label(key).to_string(),
                symbol: overlay_symbol(i - 1),
                color: PALETTE[i % PALETTE.len()],
                points: series_points(table, x_idx, y_idx),
            });
        }

        let xs: Vec<f64> = primary
            .iter()
            .map(|point| point.x)
            .chain(overlays.iter().flat_map(|o| o.points.iter().map(|p| p.x)))
            .collect();
        let ys: Vec<f64> = primary.iter().map(|point| point.y).collect();
        let y2s: Vec<f64> = overlays
            .iter()
            .flat_map(|overlay| overlay.points.iter().map(|point| point.y))
            .collect();

        Some(ChartModel {
            x_title: axis_title(&selection.x_axis),
            y_title: catalog::label(primary_key).to_string(),
            y2_title: selection
                .y_axes
                .get(1)
                .map(|key| catalog::label(key).to_string()),
            x_scale: Scale::from_values(&xs)?,
            y_scale: Scale::from_values(&ys)?,
            y2_scale: Scale::from_values(&y2s),
            primary,
            overlays,
        })
    }
}

/// Rows where both coordinates are present; empty cells never plot.
fn series_points(table: &AggregatedTable, x_idx: usize, y_idx: usize) -> Vec<PlottedPoint> {
    table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(row_idx, row)| {
            let x = row.means.get(x_idx).copied().flatten()?;
            let y = row.means.get(y_idx).copied().flatten()?;
            Some(PlottedPoint {
                x,
                y,
                country: row.country.clone(),
                color: PALETTE[row_idx % PALETTE.len()],
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
    Circle,
    Square,
    Diamond,
    Triangle,
    Cross,
}

impl Symbol {
    fn glyph(self) -> &'static str {
        match self {
            Symbol::Circle => "●",
            Symbol::Square => "■",
            Symbol::Diamond => "◆",
            Symbol::Triangle => "▲",
            Symbol::Cross => "✚",
        }
    }
}

/// Marker for overlay series `index` (0-based over the additional Y
/// indicators); cycles once the shapes run out.
pub(crate) fn overlay_symbol(index: usize) -> Symbol {
    const ORDER: [Symbol; 4] = [
        Symbol::Square,
        Symbol::Diamond,
        Symbol::Triangle,
        Symbol::Cross,
    ];
    ORDER[index % ORDER.len()]
}

fn marker(symbol: Symbol, px: f64, py: f64, color: &'static str, hover: &str) -> Element {
    match symbol {
        Symbol::Circle => rsx! {
            circle { cx: "{px}", cy: "{py}", r: "5.5", fill: color,
                title { "{hover}" }
            }
        },
        Symbol::Square => {
            let x = px - 5.0;
            let y = py - 5.0;
            rsx! {
                rect { x: "{x}", y: "{y}", width: "10", height: "10", fill: color,
                    title { "{hover}" }
                }
            }
        }
        Symbol::Diamond => {
            let d = format!(
                "M {px} {top} L {right} {py} L {px} {bottom} L {left} {py} Z",
                top = py - 6.5,
                right = px + 6.5,
                bottom = py + 6.5,
                left = px - 6.5,
            );
            rsx! {
                path { d: "{d}", fill: color,
                    title { "{hover}" }
                }
            }
        }
        Symbol::Triangle => {
            let d = format!(
                "M {px} {top} L {right} {bottom} L {left} {bottom} Z",
                top = py - 6.0,
                right = px + 6.0,
                bottom = py + 5.0,
                left = px - 6.0,
            );
            rsx! {
                path { d: "{d}", fill: color,
                    title { "{hover}" }
                }
            }
        }
        Symbol::Cross => {
            let d = format!(
                "M {l} {py} L {r} {py} M {px} {t} L {px} {b}",
                l = px - 6.0,
                r = px + 6.0,
                t = py - 6.0,
                b = py + 6.0,
            );
            rsx! {
                path { d: "{d}", stroke: color, stroke_width: "3", fill: "none",
                    title { "{hover}" }
                }
            }
        }
    }
}

/// Linear data-to-pixel scale with a 5% pad on each side.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    pub(crate) fn from_values(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let first = *finite.first()?;
        let (min, max) = finite
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        if min == max {
            let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            return Some(Self {
                min: min - pad,
                max: max + pad,
            });
        }

        let pad = (max - min) * 0.05;
        Some(Self {
            min: min - pad,
            max: max + pad,
        })
    }

    /// Maps `value` into pixel space; `start` is the pixel for `min`, so the
    /// caller inverts the endpoints for a vertical axis.
    pub(crate) fn project(&self, value: f64, start: f64, end: f64) -> f64 {
        start + (value - self.min) / (self.max - self.min) * (end - start)
    }

    pub(crate) fn ticks(&self, segments: usize) -> Vec<f64> {
        let step = (self.max - self.min) / segments as f64;
        (0..=segments).map(|i| self.min + step * i as f64).collect()
    }
}

enum Orientation {
    Horizontal,
    VerticalLeft,
    VerticalRight,
}

struct TickMark {
    px: f64,
    label: String,
}

fn tick_marks(scale: &Scale, orientation: Orientation) -> Vec<TickMark> {
    scale
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|value| {
            let px = match orientation {
                Orientation::Horizontal => {
                    scale.project(value, MARGIN_LEFT, WIDTH - MARGIN_RIGHT)
                }
                Orientation::VerticalLeft | Orientation::VerticalRight => {
                    scale.project(value, HEIGHT - MARGIN_BOTTOM, MARGIN_TOP)
                }
            };
            TickMark {
                px,
                label: format_tick(value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::dataset::{AggregatedRow, AggregatedTable};

    fn table() -> AggregatedTable {
        AggregatedTable {
            columns: vec![
                "avg_reading_score".into(),
                "avg_teaching_hours_per_week".into(),
                "avg_home_books".into(),
            ],
            rows: vec![
                AggregatedRow {
                    country: "A".into(),
                    means: vec![Some(500.0), Some(20.0), Some(3.0)],
                },
                AggregatedRow {
                    country: "B".into(),
                    means: vec![Some(540.0), Some(24.0), None],
                },
            ],
        }
    }

    fn selection(ys: &[&str]) -> Selection {
        Selection {
            x_axis: "reading_score".into(),
            y_axes: ys.iter().map(|key| key.to_string()).collect(),
            countries: Vec::new(),
        }
    }

    #[test]
    fn a_second_y_indicator_adds_one_overlay_without_touching_the_primary() {
        let single = ChartModel::build(&table(), &selection(&["teaching_hours_per_week"]))
            .expect("plottable");
        let double = ChartModel::build(
            &table(),
            &selection(&["teaching_hours_per_week", "home_books"]),
        )
        .expect("plottable");

        assert!(single.overlays.is_empty());
        assert_eq!(double.overlays.len(), 1);
        assert_eq!(single.primary.len(), double.primary.len());
        for (a, b) in single.primary.iter().zip(double.primary.iter()) {
            assert_eq!((a.x, a.y, a.country.as_str()), (b.x, b.y, b.country.as_str()));
        }
        // Only one secondary axis ever exists; its title names the second Y.
        assert_eq!(double.y2_title.as_deref(), Some("Books at home"));
    }

    #[test]
    fn overlays_beyond_the_second_share_the_secondary_axis() {
        let model = ChartModel::build(
            &table(),
            &selection(&[
                "teaching_hours_per_week",
                "home_books",
                "reading_score",
            ]),
        )
        .expect("plottable");
        assert_eq!(model.overlays.len(), 2);
        assert!(model.y2_scale.is_some());
        assert_eq!(model.y2_title.as_deref(), Some("Books at home"));
    }

    #[test]
    fn empty_cells_are_skipped_when_plotting() {
        let model = ChartModel::build(&table(), &selection(&["home_books"])).expect("plottable");
        // Country B has no home_books mean, so only A plots.
        assert_eq!(model.primary.len(), 1);
        assert_eq!(model.primary[0].country, "A");
    }

    #[test]
    fn overlay_symbols_are_distinct_per_series() {
        let symbols: Vec<Symbol> = (0..4).map(overlay_symbol).collect();
        for (i, a) in symbols.iter().enumerate() {
            for b in symbols.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(overlay_symbol(0), overlay_symbol(4));
    }

    #[test]
    fn scales_pad_the_data_range() {
        let scale = Scale::from_values(&[10.0, 20.0]).expect("scale");
        assert!(scale.min < 10.0 && scale.max > 20.0);

        let flat = Scale::from_values(&[5.0]).expect("scale");
        assert!(flat.min < 5.0 && flat.max > 5.0);

        assert!(Scale::from_values(&[]).is_none());
        assert!(Scale::from_values(&[f64::NAN]).is_none());
    }

    #[test]
    fn projection_hits_both_endpoints() {
        let scale = Scale {
            min: 0.0,
            max: 10.0,
        };
        assert_eq!(scale.project(0.0, 100.0, 200.0), 100.0);
        assert_eq!(scale.project(10.0, 100.0, 200.0), 200.0);
        // Inverted endpoints flip the axis, as the vertical projection does.
        assert_eq!(scale.project(10.0, 200.0, 100.0), 100.0);
    }

    #[test]
    fn ticks_span_the_scale_monotonically() {
        let scale = Scale {
            min: 0.0,
            max: 10.0,
        };
        let ticks = scale.ticks(5);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(*ticks.last().unwrap(), 10.0);
        assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
