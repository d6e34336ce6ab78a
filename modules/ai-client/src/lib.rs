pub mod openai;
pub mod usage;

pub use openai::{OpenAi, StructuredOutput};
pub use usage::{UsageLedger, UsageTotals};
