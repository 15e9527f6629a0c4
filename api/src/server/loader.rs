//! Dataset loader: materializes the whole `merged_education_data` table into
//! memory and keeps it behind a one-hour TTL cache.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use sqlx::Row;
use tracing::{debug, info};

use super::db;
use crate::cache::TtlCache;
use crate::catalog;
use crate::dataset::{SurveyRow, GROUP_COLUMN};

pub const TABLE_NAME: &str = "merged_education_data";

const DATASET_TTL: Duration = Duration::from_secs(3600);

static DATASET: Lazy<TtlCache<Arc<Vec<SurveyRow>>>> =
    Lazy::new(|| TtlCache::new(DATASET_TTL));

/// The dataset for the current cache window. A miss triggers one full-table
/// read; any read error propagates to the caller, which has no recovery path.
pub async fn cached_dataset() -> Result<Arc<Vec<SurveyRow>>, sqlx::Error> {
    DATASET.get_or_load(read_table).await
}

async fn read_table() -> Result<Arc<Vec<SurveyRow>>, sqlx::Error> {
    let pool = db::pool().await?;
    let statement = select_statement();

    info!(table = TABLE_NAME, "loading dataset");
    let rows = sqlx::query(&statement).fetch_all(pool).await?;

    let mut dataset = Vec::with_capacity(rows.len());
    for row in &rows {
        let country: String = row.try_get(GROUP_COLUMN)?;
        let mut values = Vec::with_capacity(catalog::INDICATORS.len());
        for indicator in catalog::INDICATORS {
            values.push(row.try_get::<Option<f64>, _>(indicator.key)?);
        }
        dataset.push(SurveyRow { country, values });
    }

    debug!(rows = dataset.len(), "dataset materialized");
    Ok(Arc::new(dataset))
}

// Indicator columns are cast to DOUBLE so integer-typed survey columns decode
// uniformly; the country code is kept as text for grouping and display.
fn select_statement() -> String {
    let mut columns = vec![format!("CAST({GROUP_COLUMN} AS CHAR) AS {GROUP_COLUMN}")];
    for indicator in catalog::INDICATORS {
        columns.push(format!(
            "CAST({key} AS DOUBLE) AS {key}",
            key = indicator.key
        ));
    }
    format!("SELECT {} FROM {}", columns.join(", "), TABLE_NAME)
}
