use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aulapulse_categorizer::classifier::Classifier;
use aulapulse_categorizer::Categorizer;
use aulapulse_common::Config;
use aulapulse_store::{S3Exporter, StoreClient, WarehouseReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("aulapulse=info".parse()?))
        .init();

    info!("AulaPulse categorizer starting...");

    // Load config; fails fast on missing classifier credentials
    let config = Config::from_env();
    config.log_redacted();

    // Connect to the warehouse
    let client = StoreClient::connect(&config.database_url).await?;
    let reader = WarehouseReader::new(client);

    let classifier = Classifier::new(&config.openai_api_key, &config.openai_model);
    let exporter = S3Exporter::from_env(&config.export_bucket, &config.export_prefix)?;

    let categorizer = Categorizer::new(
        Box::new(reader.clone()),
        Box::new(reader),
        Box::new(classifier),
        Box::new(exporter),
        config.max_parallel_calls,
    );

    info!(run_id = %categorizer.run_id(), "Starting categorization run");
    let stats = categorizer.run().await?;
    info!("{stats}");

    Ok(())
}
