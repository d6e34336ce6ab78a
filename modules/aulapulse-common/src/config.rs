use std::env;

use tracing::{info, warn};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Warehouse
    pub database_url: String,

    // Classifier
    pub openai_api_key: String,
    pub openai_model: String,
    pub max_parallel_calls: usize,

    // Export
    pub export_bucket: String,
    pub export_prefix: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing. The
    /// classifier credentials and warehouse connection must be present
    /// before any work starts.
    pub fn from_env() -> Self {
        Self {
            database_url: required_env("DATABASE_URL"),
            openai_api_key: required_env("OPENAI_API_KEY"),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            max_parallel_calls: env::var("MAX_PARALLEL_CALLS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .expect("MAX_PARALLEL_CALLS must be a number"),
            export_bucket: required_env("EXPORT_BUCKET"),
            export_prefix: env::var("EXPORT_PREFIX").unwrap_or_default(),
        }
    }

    /// Log the non-secret parts of the configuration.
    pub fn log_redacted(&self) {
        info!(
            model = self.openai_model.as_str(),
            max_parallel = self.max_parallel_calls,
            bucket = self.export_bucket.as_str(),
            prefix = self.export_prefix.as_str(),
            "Configuration loaded"
        );
        if env::var("AWS_ACCESS_KEY_ID").is_err() || env::var("AWS_SECRET_ACCESS_KEY").is_err() {
            warn!("AWS credentials not set in environment, relying on ambient credentials");
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
