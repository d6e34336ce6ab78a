//! Diff engine: decides which answers still need classification.

use std::collections::HashSet;

use aulapulse_common::{AnswerRecord, CategorizedRow, IdentityKey};

/// An answer is eligible for analysis only if it tokenizes to more than one
/// word. Trivial answers ("Sí", "ok") never reach the classifier.
pub fn is_eligible(answer: &str) -> bool {
    answer.split_whitespace().count() > 1
}

pub fn filter_eligible(answers: Vec<AnswerRecord>) -> Vec<AnswerRecord> {
    answers
        .into_iter()
        .filter(|record| is_eligible(&record.answer))
        .collect()
}

/// Left-anti-join on the six-field identity key: an answer is new iff its
/// full key is absent from the processed projection. History rows with an
/// empty answer are excluded from the projection so degenerate prior
/// categorizations get reprocessed.
pub fn find_new(answers: &[AnswerRecord], processed: &[CategorizedRow]) -> Vec<AnswerRecord> {
    if processed.is_empty() {
        return answers.to_vec();
    }

    let processed_keys: HashSet<IdentityKey> = processed
        .iter()
        .filter(|row| !row.answer.is_empty())
        .map(|row| row.identity_key())
        .collect();

    answers
        .iter()
        .filter(|record| !processed_keys.contains(&record.identity_key()))
        .cloned()
        .collect()
}
