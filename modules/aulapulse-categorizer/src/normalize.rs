//! Category normalizer: turns one raw classification into zero or more
//! categorized rows, one per surviving label.

use aulapulse_common::{taxonomy, AnswerRecord, CategorizedRow, RawClassification};

/// Strip a trailing disambiguation suffix introduced by a previous run
/// version. Labels may arrive as `"Etiqueta_algo"`; only the part before
/// the first underscore is the label.
pub fn strip_run_suffix(label: &str) -> &str {
    label.split('_').next().unwrap_or(label)
}

/// Flatten the raw classification, strip stale suffixes, drop the
/// "Sin categoría" sentinel and empty labels, and attach facets from the
/// taxonomy. Labels outside the taxonomy are kept here with absent facets;
/// disambiguation runs before the final filter decides their fate.
pub fn normalize(record: &AnswerRecord, raw: &RawClassification) -> Vec<CategorizedRow> {
    let mut rows = Vec::new();

    for label in raw.flatten() {
        let label = strip_run_suffix(&label);
        if label.is_empty() || label == taxonomy::UNCATEGORIZED {
            continue;
        }

        let facets = taxonomy::facets(label);
        rows.push(CategorizedRow {
            moodle_id: record.moodle_id,
            unique_id: record.unique_id.clone(),
            activity_id: record.activity_id,
            attempt_id: record.attempt_id,
            question_id: record.question_id,
            answer: record.answer.clone(),
            question_name: record.question_name.clone(),
            tag: record.tag.clone(),
            categoria: label.to_string(),
            categoria_tipo: facets.map(|(tipo, _)| tipo),
            categoria_sentimiento: facets.map(|(_, sentimiento)| sentimiento),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use aulapulse_common::{CategoryType, Sentiment};

    fn record() -> AnswerRecord {
        AnswerRecord {
            moodle_id: 1,
            unique_id: "u-1".to_string(),
            activity_id: 10,
            attempt_id: 100,
            question_id: 7,
            answer: "el docente explica muy bien".to_string(),
            question_name: "Comentarios".to_string(),
            tag: None,
        }
    }

    #[test]
    fn nested_labels_yield_one_row_each_in_order() {
        let raw = RawClassification::Labels(vec![
            RawClassification::Labels(vec!["Proyecto motivador".into(), "Otro".into()]),
            "Problemas técnicos".into(),
        ]);
        let rows = normalize(&record(), &raw);
        let labels: Vec<&str> = rows.iter().map(|r| r.categoria.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Proyecto motivador", "Otro", "Problemas técnicos"]
        );
    }

    #[test]
    fn rows_share_the_record_identity_key() {
        let raw: RawClassification = vec![
            "Proyecto motivador".to_string(),
            "Otro".to_string(),
        ]
        .into();
        let rows = normalize(&record(), &raw);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].identity_key(), rows[1].identity_key());
    }

    #[test]
    fn sentinel_yields_zero_rows() {
        let raw: RawClassification = taxonomy::UNCATEGORIZED.into();
        assert!(normalize(&record(), &raw).is_empty());
    }

    #[test]
    fn empty_labels_are_dropped() {
        let raw: RawClassification = vec![String::new(), "Otro".to_string()].into();
        let rows = normalize(&record(), &raw);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn stale_run_suffix_is_stripped_before_lookup() {
        let raw: RawClassification = "Problemas técnicos_v2".into();
        let rows = normalize(&record(), &raw);
        assert_eq!(rows[0].categoria, "Problemas técnicos");
        assert_eq!(rows[0].categoria_tipo, Some(CategoryType::Program));
    }

    #[test]
    fn facets_come_from_the_taxonomy() {
        let raw: RawClassification = "Docente experto y con dominio del tema".into();
        let rows = normalize(&record(), &raw);
        assert_eq!(rows[0].categoria_tipo, Some(CategoryType::Instructor));
        assert_eq!(rows[0].categoria_sentimiento, Some(Sentiment::Positive));
    }

    #[test]
    fn unmapped_labels_are_kept_with_absent_facets() {
        let raw: RawClassification = "Una etiqueta inventada".into();
        let rows = normalize(&record(), &raw);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].categoria_tipo.is_none());
        assert!(rows[0].categoria_sentimiento.is_none());
    }
}
