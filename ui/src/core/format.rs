//! Formatting helpers for presenting aggregated values.

/// Two-decimal display formatting for table cells. The export path keeps the
/// full-precision value; this is presentation only.
pub fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => "—".to_string(),
    }
}

/// Compact tick labels for chart axes.
pub fn format_tick(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_round_to_two_decimals_for_display() {
        assert_eq!(format_cell(Some(15.666_666)), "15.67");
        assert_eq!(format_cell(Some(5.0)), "5.00");
        assert_eq!(format_cell(None), "—");
    }

    #[test]
    fn ticks_drop_decimals_for_large_magnitudes() {
        assert_eq!(format_tick(512.3), "512");
        assert_eq!(format_tick(7.25), "7.3");
        assert_eq!(format_tick(-250.0), "-250");
    }
}
