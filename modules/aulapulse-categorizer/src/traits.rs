// Trait abstractions for the pipeline's external collaborators.
//
// AnswerSource/HistorySource: the two logical warehouse queries.
// Classify: the opaque text-classification backend.
// DatasetExporter: durable storage for the merged dataset and the
//   usage-metrics side channel.
//
// These enable deterministic testing with in-memory mocks: no warehouse,
// no OpenAI, no S3.

use anyhow::Result;
use async_trait::async_trait;

use ai_client::UsageTotals;
use aulapulse_common::{AnswerRecord, CategorizedRow, RawClassification};
use aulapulse_store::{S3Exporter, WarehouseReader};

use crate::queries;
use crate::stats::UsageRecord;

// ---------------------------------------------------------------------------
// Warehouse queries
// ---------------------------------------------------------------------------

#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Fetch all sentiment-analysis answers with their optional tag.
    async fn fetch_answers(&self) -> Result<Vec<AnswerRecord>>;
}

#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch all previously categorized rows. May fail when the history
    /// table does not exist yet; the pipeline treats that as empty.
    async fn fetch_history(&self) -> Result<Vec<CategorizedRow>>;
}

#[async_trait]
impl AnswerSource for WarehouseReader {
    async fn fetch_answers(&self) -> Result<Vec<AnswerRecord>> {
        self.fetch_answers(queries::SENTIMENT_ANSWERS_SQL, queries::SENTIMENT_QUERY_NAME)
            .await
    }
}

#[async_trait]
impl HistorySource for WarehouseReader {
    async fn fetch_history(&self) -> Result<Vec<CategorizedRow>> {
        self.fetch_categorized(queries::CATEGORY_HISTORY_SQL, queries::HISTORY_QUERY_NAME)
            .await
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

#[async_trait]
pub trait Classify: Send + Sync {
    /// Label one answer. Multi-valued and sentinel results are normal;
    /// errors leave the record unprocessed for this run.
    async fn classify(&self, record: &AnswerRecord) -> Result<RawClassification>;

    fn model_name(&self) -> &str;

    /// Accumulated API usage for the metrics side channel.
    fn usage_snapshot(&self) -> UsageTotals;
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[async_trait]
pub trait DatasetExporter: Send + Sync {
    async fn export(&self, rows: &[CategorizedRow], logical_name: &str) -> Result<()>;

    async fn export_usage(&self, record: &UsageRecord, logical_name: &str) -> Result<()>;
}

#[async_trait]
impl DatasetExporter for S3Exporter {
    async fn export(&self, rows: &[CategorizedRow], logical_name: &str) -> Result<()> {
        self.put_json_lines(rows, logical_name).await
    }

    async fn export_usage(&self, record: &UsageRecord, logical_name: &str) -> Result<()> {
        self.put_json_lines(std::slice::from_ref(record), logical_name)
            .await
    }
}
