use serde::{Deserialize, Serialize};

use crate::taxonomy::{CategoryType, Sentiment};

// --- Answer Records ---

/// One free-text survey-question response, as loaded from the warehouse.
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub moodle_id: i64,
    pub unique_id: String,
    pub activity_id: i64,
    pub attempt_id: i64,
    pub question_id: i64,
    pub answer: String,
    pub question_name: String,
    /// Course-evaluation tag joined from the questions table. Absent when
    /// the question has no tag row.
    pub tag: Option<String>,
}

impl AnswerRecord {
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            moodle_id: self.moodle_id,
            unique_id: self.unique_id.clone(),
            activity_id: self.activity_id,
            attempt_id: self.attempt_id,
            question_id: self.question_id,
            answer: self.answer.clone(),
        }
    }
}

/// The six-field composite key identifying one answer instance across runs.
/// Partial matches do not count; all six fields participate in equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub moodle_id: i64,
    pub unique_id: String,
    pub activity_id: i64,
    pub attempt_id: i64,
    pub question_id: i64,
    pub answer: String,
}

// --- Classifier Output ---

/// Raw classifier output for one answer: a single label or a sequence of
/// labels. The source data can contain accidental nesting, so the shape is
/// recursive and flattening must tolerate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawClassification {
    Label(String),
    Labels(Vec<RawClassification>),
}

impl RawClassification {
    /// Fully flatten into an ordered list of label strings.
    pub fn flatten(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            RawClassification::Label(label) => out.push(label.clone()),
            RawClassification::Labels(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<&str> for RawClassification {
    fn from(label: &str) -> Self {
        RawClassification::Label(label.to_string())
    }
}

impl From<Vec<String>> for RawClassification {
    fn from(labels: Vec<String>) -> Self {
        RawClassification::Labels(labels.into_iter().map(RawClassification::Label).collect())
    }
}

// --- Categorized Rows ---

/// One (answer, label) pair in the processed dataset. The facet columns are
/// always recomputed from `categoria` via the taxonomy, never trusted from
/// upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedRow {
    pub moodle_id: i64,
    pub unique_id: String,
    pub activity_id: i64,
    pub attempt_id: i64,
    pub question_id: i64,
    pub answer: String,
    pub question_name: String,
    pub tag: Option<String>,
    pub categoria: String,
    pub categoria_tipo: Option<CategoryType>,
    pub categoria_sentimiento: Option<Sentiment>,
}

impl CategorizedRow {
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            moodle_id: self.moodle_id,
            unique_id: self.unique_id.clone(),
            activity_id: self.activity_id,
            attempt_id: self.attempt_id,
            question_id: self.question_id,
            answer: self.answer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_handles_nested_sequences() {
        let raw = RawClassification::Labels(vec![
            RawClassification::Labels(vec!["A".into(), "B".into()]),
            "C".into(),
        ]);
        assert_eq!(raw.flatten(), vec!["A", "B", "C"]);
    }

    #[test]
    fn flatten_scalar_label() {
        let raw: RawClassification = "Otro".into();
        assert_eq!(raw.flatten(), vec!["Otro"]);
    }

    #[test]
    fn raw_classification_deserializes_mixed_nesting() {
        let raw: RawClassification = serde_json::from_str(r#"[["A","B"],"C"]"#).unwrap();
        assert_eq!(raw.flatten(), vec!["A", "B", "C"]);
    }

    #[test]
    fn identity_key_includes_answer_text() {
        let record = AnswerRecord {
            moodle_id: 1,
            unique_id: "u1".to_string(),
            activity_id: 2,
            attempt_id: 3,
            question_id: 4,
            answer: "me gustó el curso".to_string(),
            question_name: "feedback".to_string(),
            tag: None,
        };
        let mut other = record.clone();
        other.answer = "no me gustó".to_string();
        assert_ne!(record.identity_key(), other.identity_key());
    }
}
