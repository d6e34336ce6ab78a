use thiserror::Error;

#[derive(Error, Debug)]
pub enum AulaPulseError {
    #[error("Warehouse error: {0}")]
    Warehouse(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
