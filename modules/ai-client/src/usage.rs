//! API usage accounting shared across classification calls. The pipeline
//! flushes the accumulated totals once per run through its export
//! collaborator.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accumulated token usage for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageTotals {
    pub calls: u64,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub first_call_at: Option<DateTime<Utc>>,
    pub last_call_at: Option<DateTime<Utc>>,
}

/// Thread-safe ledger. Clones share the same totals, so every clone of a
/// client records into one place.
#[derive(Debug, Clone, Default)]
pub struct UsageLedger {
    totals: Arc<Mutex<UsageTotals>>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, prompt_tokens: u64, completion_tokens: u64) {
        let now = Utc::now();
        let mut totals = self.totals.lock().expect("usage ledger poisoned");
        totals.calls += 1;
        totals.prompt_tokens += prompt_tokens;
        totals.completion_tokens += completion_tokens;
        totals.total_tokens += prompt_tokens + completion_tokens;
        totals.first_call_at.get_or_insert(now);
        totals.last_call_at = Some(now);
    }

    pub fn snapshot(&self) -> UsageTotals {
        self.totals.lock().expect("usage ledger poisoned").clone()
    }
}
