pub mod client;
pub mod exporter;
pub mod reader;

pub use client::StoreClient;
pub use exporter::S3Exporter;
pub use reader::WarehouseReader;
