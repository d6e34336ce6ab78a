//! Pipeline orchestration: diff → classify → normalize → disambiguate →
//! filter → merge → export.

use std::collections::HashMap;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use uuid::Uuid;

use aulapulse_common::{taxonomy, IdentityKey, RawClassification};

use crate::diff;
use crate::disambiguate::disambiguate;
use crate::merge;
use crate::normalize::{self, normalize};
use crate::queries;
use crate::stats::{RunStats, UsageRecord};
use crate::traits::{AnswerSource, Classify, DatasetExporter, HistorySource};

pub struct Categorizer {
    answers: Box<dyn AnswerSource>,
    history: Box<dyn HistorySource>,
    classifier: Box<dyn Classify>,
    exporter: Box<dyn DatasetExporter>,
    max_parallel: usize,
    run_id: Uuid,
}

impl Categorizer {
    pub fn new(
        answers: Box<dyn AnswerSource>,
        history: Box<dyn HistorySource>,
        classifier: Box<dyn Classify>,
        exporter: Box<dyn DatasetExporter>,
        max_parallel: usize,
    ) -> Self {
        Self {
            answers,
            history,
            classifier,
            exporter,
            max_parallel: max_parallel.max(1),
            run_id: Uuid::new_v4(),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Run one full categorization pass.
    pub async fn run(&self) -> Result<RunStats> {
        let mut stats = RunStats::default();

        // 1. Load the current answer snapshot and apply the eligibility
        // filter (answers must tokenize to more than one word).
        let answers = self
            .answers
            .fetch_answers()
            .await
            .context("Failed to load survey answers")?;
        stats.answers_loaded = answers.len() as u32;

        let answers = diff::filter_eligible(answers);
        stats.answers_eligible = answers.len() as u32;

        // 2. Load history. A missing table is expected absence, not fatal.
        let history = match self.history.fetch_history().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "Could not load existing categories, proceeding without them");
                Vec::new()
            }
        };
        stats.history_rows = history.len() as u32;

        // 3. Diff against history.
        let new_answers = diff::find_new(&answers, &history);
        stats.answers_new = new_answers.len() as u32;

        if new_answers.is_empty() {
            info!("No new answers to process, finishing early");
            return Ok(stats);
        }
        info!(count = new_answers.len(), "Processing new answers");

        // 4. Classify with bounded fan-out. Results are reassembled by
        // identity key, never by call-completion order.
        let outcomes: Vec<(IdentityKey, Result<RawClassification>)> =
            stream::iter(new_answers.iter().map(|record| async move {
                let raw = self.classifier.classify(record).await;
                (record.identity_key(), raw)
            }))
            .buffer_unordered(self.max_parallel)
            .collect()
            .await;

        let mut classified: HashMap<IdentityKey, RawClassification> = HashMap::new();
        for (key, outcome) in outcomes {
            match outcome {
                Ok(raw) => {
                    classified.insert(key, raw);
                }
                Err(e) => {
                    warn!(error = %e, "Classification call failed, record left for the next run");
                    stats.answers_failed += 1;
                }
            }
        }
        stats.answers_classified = classified.len() as u32;

        // 5. Normalize, disambiguate, and apply the final taxonomy gate.
        let mut fresh = Vec::new();
        for record in &new_answers {
            let Some(raw) = classified.get(&record.identity_key()) else {
                continue;
            };

            let labels = raw.flatten();
            if labels.iter().all(|label| {
                let label = normalize::strip_run_suffix(label);
                label.is_empty() || label == taxonomy::UNCATEGORIZED
            }) {
                stats.answers_uncategorized += 1;
            }

            for row in normalize(record, raw) {
                stats.rows_normalized += 1;
                let before = row.categoria.clone();
                let row = disambiguate(row);
                if row.categoria != before {
                    stats.rows_disambiguated += 1;
                }
                fresh.push(row);
            }
        }
        info!(
            uncategorized = stats.answers_uncategorized,
            "Answers the classifier left without a category"
        );

        let (fresh, dropped) = merge::retain_taxonomy_rows(fresh);
        stats.rows_dropped = dropped as u32;
        stats.rows_fresh = fresh.len() as u32;
        info!(dropped, "Labels removed for not existing in the taxonomy");

        // 6. Merge with history. Append-only.
        let final_rows = merge::merge(history, fresh);

        // 7. Flush classifier usage metrics. Non-fatal side channel.
        let usage = UsageRecord {
            run_id: self.run_id,
            model: self.classifier.model_name().to_string(),
            totals: self.classifier.usage_snapshot(),
        };
        let usage_name = format!("{}/{}", queries::USAGE_DATASET_NAME, self.run_id);
        if let Err(e) = self.exporter.export_usage(&usage, &usage_name).await {
            warn!(error = %e, "Failed to flush usage metrics");
        }

        // 8. Export the cumulative dataset.
        self.exporter
            .export(&final_rows, queries::EXPORT_DATASET_NAME)
            .await
            .context("Failed to export categorized dataset")?;
        stats.rows_exported = final_rows.len() as u32;

        Ok(stats)
    }
}
