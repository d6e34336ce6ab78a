pub mod config;
pub mod error;
pub mod taxonomy;
pub mod types;

pub use config::Config;
pub use error::AulaPulseError;
pub use taxonomy::*;
pub use types::*;
