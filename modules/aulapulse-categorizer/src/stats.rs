use ai_client::UsageTotals;
use serde::Serialize;
use uuid::Uuid;

/// Stats from a categorization run.
#[derive(Debug, Default)]
pub struct RunStats {
    pub answers_loaded: u32,
    pub answers_eligible: u32,
    pub history_rows: u32,
    pub answers_new: u32,
    pub answers_classified: u32,
    pub answers_failed: u32,
    pub answers_uncategorized: u32,
    pub rows_normalized: u32,
    pub rows_disambiguated: u32,
    pub rows_dropped: u32,
    pub rows_fresh: u32,
    pub rows_exported: u32,
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Categorization Run Complete ===")?;
        writeln!(f, "Answers loaded:        {}", self.answers_loaded)?;
        writeln!(f, "Answers eligible:      {}", self.answers_eligible)?;
        writeln!(f, "History rows:          {}", self.history_rows)?;
        writeln!(f, "New answers:           {}", self.answers_new)?;
        writeln!(f, "Classified:            {}", self.answers_classified)?;
        writeln!(f, "Failed calls:          {}", self.answers_failed)?;
        writeln!(f, "Left uncategorized:    {}", self.answers_uncategorized)?;
        writeln!(f, "Rows normalized:       {}", self.rows_normalized)?;
        writeln!(f, "Rows disambiguated:    {}", self.rows_disambiguated)?;
        writeln!(f, "Rows dropped:          {}", self.rows_dropped)?;
        writeln!(f, "Fresh rows:            {}", self.rows_fresh)?;
        writeln!(f, "Rows exported:         {}", self.rows_exported)?;
        Ok(())
    }
}

/// One usage-metrics record, flushed per run through the export
/// collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct UsageRecord {
    pub run_id: Uuid,
    pub model: String,
    #[serde(flatten)]
    pub totals: UsageTotals,
}
