//! Export adapter. Serializes datasets as JSON lines and writes them to
//! object storage under the configured prefix.

use anyhow::{Context, Result};
use aulapulse_common::AulaPulseError;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};
use serde::Serialize;
use tracing::info;

pub struct S3Exporter {
    store: Box<dyn ObjectStore>,
    prefix: String,
}

impl S3Exporter {
    /// Build against a bucket using ambient AWS configuration (env vars,
    /// instance role). Region and credentials come from the environment.
    pub fn from_env(bucket: &str, prefix: &str) -> Result<Self> {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()
            .context("Failed to build S3 store")?;
        Ok(Self {
            store: Box::new(store),
            prefix: prefix.trim_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    fn in_memory() -> Self {
        Self {
            store: Box::new(object_store::memory::InMemory::new()),
            prefix: String::new(),
        }
    }

    fn object_path(&self, logical_name: &str) -> Path {
        if self.prefix.is_empty() {
            Path::from(format!("{logical_name}.json"))
        } else {
            Path::from(format!("{}/{logical_name}.json", self.prefix))
        }
    }

    /// Serialize `rows` as JSON lines and overwrite the object for
    /// `logical_name`.
    pub async fn put_json_lines<T: Serialize>(
        &self,
        rows: &[T],
        logical_name: &str,
    ) -> Result<()> {
        let mut body = Vec::new();
        for row in rows {
            serde_json::to_writer(&mut body, row)?;
            body.push(b'\n');
        }

        let path = self.object_path(logical_name);
        self.store
            .put(&path, PutPayload::from(body))
            .await
            .map_err(|e| AulaPulseError::Export(format!("failed to write {path}: {e}")))?;

        info!(object = %path, rows = rows.len(), "Dataset exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Line {
        categoria: String,
    }

    #[tokio::test]
    async fn put_json_lines_writes_one_line_per_row() {
        let exporter = S3Exporter::in_memory();
        let rows = vec![
            Line { categoria: "Otro".to_string() },
            Line { categoria: "Problemas técnicos".to_string() },
        ];

        exporter.put_json_lines(&rows, "dataset").await.unwrap();

        let data = exporter
            .store
            .get(&Path::from("dataset.json"))
            .await
            .unwrap()
            .bytes()
            .await
            .unwrap();
        let text = String::from_utf8(data.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().next().unwrap().contains("Otro"));
    }

    #[tokio::test]
    async fn object_path_honors_prefix() {
        let mut exporter = S3Exporter::in_memory();
        exporter.prefix = "surveys/categorized".to_string();
        assert_eq!(
            exporter.object_path("moodle_category_responses").as_ref(),
            "surveys/categorized/moodle_category_responses.json"
        );
    }
}
