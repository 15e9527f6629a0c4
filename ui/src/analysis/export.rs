use dioxus::prelude::*;

use api::dataset::{AggregatedTable, GROUP_COLUMN};

/// Fixed download name for the aggregated table.
pub const EXPORT_FILENAME: &str = "country_analysis.csv";

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Download action for the aggregated table. The CSV carries the exact column
/// set and row count currently displayed, with unrounded values.
#[component]
pub fn ExportPanel(table: AggregatedTable) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "analysis-card__meta analysis-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "analysis-card__meta analysis-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let download_handler = {
        let table = table.clone();
        move |_| {
            let csv = build_csv(&table);
            match download_bytes(EXPORT_FILENAME, "text/csv", csv.into_bytes()) {
                Ok(()) => status.set(ExportStatus::Done("Download started".to_string())),
                Err(err) => status.set(ExportStatus::Error(err)),
            }
        }
    };

    rsx! {
        section { class: "analysis-card analysis-export",
            div { class: "analysis-card__header",
                h2 { "Export" }
                span { class: "analysis-card__meta", "{table.rows.len()} rows" }
            }

            button {
                r#type: "button",
                class: "button button--primary",
                disabled: table.is_empty(),
                onclick: download_handler,
                "📥 Download analysis results"
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

/// Serializes the aggregated table: header row with the aggregated column
/// names, UTF-8, comma-separated, full-precision values, empty string for
/// empty cells.
pub fn build_csv(table: &AggregatedTable) -> String {
    let mut csv = String::new();

    let mut header: Vec<String> = vec![GROUP_COLUMN.to_string()];
    header.extend(table.columns.iter().cloned());
    csv.push_str(&join_row(header));
    csv.push('\n');

    for row in &table.rows {
        let mut fields: Vec<String> = vec![row.country.clone()];
        fields.extend(row.means.iter().map(|mean| match mean {
            Some(value) => value.to_string(),
            None => String::new(),
        }));
        csv.push_str(&join_row(fields));
        csv.push('\n');
    }

    csv
}

fn join_row(fields: Vec<String>) -> String {
    fields
        .into_iter()
        .map(|field| escape_csv(&field))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (filename, mime, bytes);
        Err("Downloads are available in the browser.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::dataset::AggregatedRow;

    fn table() -> AggregatedTable {
        AggregatedTable {
            columns: vec!["avg_reading_score".into(), "avg_home_books".into()],
            rows: vec![
                AggregatedRow {
                    country: "A".into(),
                    means: vec![Some(15.0), Some(3.333_333_333_333_333_5)],
                },
                AggregatedRow {
                    country: "B".into(),
                    means: vec![Some(5.0), None],
                },
            ],
        }
    }

    #[test]
    fn csv_matches_the_displayed_table_shape() {
        let table = table();
        let csv = build_csv(&table);
        let lines: Vec<&str> = csv.trim_end().lines().collect();

        assert_eq!(lines.len(), 1 + table.rows.len());
        assert_eq!(lines[0], "IDCNTRY,avg_reading_score,avg_home_books");
        for (line, row) in lines[1..].iter().zip(&table.rows) {
            assert_eq!(line.split(',').count(), 1 + table.columns.len());
            assert!(line.starts_with(&row.country));
        }
    }

    #[test]
    fn csv_values_keep_full_precision() {
        let csv = build_csv(&table());
        // Display rounds to 3.33; the export does not.
        assert!(csv.contains("3.3333333333333335"));
    }

    #[test]
    fn empty_cells_export_as_empty_fields() {
        let csv = build_csv(&table());
        assert!(csv.lines().any(|line| line == "B,5,"));
    }

    #[test]
    fn empty_table_exports_header_only() {
        let empty = AggregatedTable {
            columns: vec!["avg_reading_score".into()],
            rows: Vec::new(),
        };
        assert_eq!(build_csv(&empty), "IDCNTRY,avg_reading_score\n");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let tricky = AggregatedTable {
            columns: vec!["avg_reading_score".into()],
            rows: vec![AggregatedRow {
                country: "Hong Kong, SAR".into(),
                means: vec![Some(1.0)],
            }],
        };
        let csv = build_csv(&tricky);
        assert!(csv.contains("\"Hong Kong, SAR\",1"));
    }
}
