//! Warehouse query adapter. Runs the pipeline's logical queries and maps
//! rows into typed records. The SQL text itself belongs to the caller.

use anyhow::Result;
use sqlx::Row;
use tracing::info;

use aulapulse_common::{taxonomy, AnswerRecord, AulaPulseError, CategorizedRow};

use crate::client::StoreClient;

#[derive(Clone)]
pub struct WarehouseReader {
    client: StoreClient,
}

impl WarehouseReader {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Run a query returning survey answers joined with their optional tag.
    pub async fn fetch_answers(&self, sql: &str, logical_name: &str) -> Result<Vec<AnswerRecord>> {
        let rows = sqlx::query(sql)
            .fetch_all(self.client.pool())
            .await
            .map_err(|e| AulaPulseError::Warehouse(format!("query '{logical_name}': {e}")))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(AnswerRecord {
                moodle_id: row.try_get("moodle_id")?,
                unique_id: row.try_get("unique_id")?,
                activity_id: row.try_get("activity_id")?,
                attempt_id: row.try_get("attempt_id")?,
                question_id: row.try_get("question_id")?,
                answer: row
                    .try_get::<Option<String>, _>("answer")?
                    .unwrap_or_default(),
                question_name: row
                    .try_get::<Option<String>, _>("question_name")?
                    .unwrap_or_default(),
                tag: row.try_get::<Option<String>, _>("tag")?,
            });
        }

        info!(query = logical_name, rows = records.len(), "Answers loaded");
        Ok(records)
    }

    /// Run a query returning previously categorized rows. Facet columns are
    /// recomputed from `categoria` via the taxonomy, never read back from
    /// the warehouse.
    pub async fn fetch_categorized(
        &self,
        sql: &str,
        logical_name: &str,
    ) -> Result<Vec<CategorizedRow>> {
        let rows = sqlx::query(sql)
            .fetch_all(self.client.pool())
            .await
            .map_err(|e| AulaPulseError::Warehouse(format!("query '{logical_name}': {e}")))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let categoria: String = row
                .try_get::<Option<String>, _>("categoria")?
                .unwrap_or_default();
            let facets = taxonomy::facets(&categoria);
            records.push(CategorizedRow {
                moodle_id: row.try_get("moodle_id")?,
                unique_id: row.try_get("unique_id")?,
                activity_id: row.try_get("activity_id")?,
                attempt_id: row.try_get("attempt_id")?,
                question_id: row.try_get("question_id")?,
                answer: row
                    .try_get::<Option<String>, _>("answer")?
                    .unwrap_or_default(),
                question_name: row
                    .try_get::<Option<String>, _>("question_name")?
                    .unwrap_or_default(),
                tag: row.try_get::<Option<String>, _>("tag")?,
                categoria,
                categoria_tipo: facets.map(|(tipo, _)| tipo),
                categoria_sentimiento: facets.map(|(_, sentimiento)| sentimiento),
            });
        }

        info!(
            query = logical_name,
            rows = records.len(),
            "Categorized history loaded"
        );
        Ok(records)
    }
}
