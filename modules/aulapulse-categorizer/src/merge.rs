//! Final filter and merge engine.

use aulapulse_common::{taxonomy, CategorizedRow};

/// The single authoritative gate: drop every row whose label the taxonomy
/// does not accept. Runs exactly once, after disambiguation; running it
/// earlier would discard generic rows that were still disambiguatable.
/// Returns the surviving rows and the dropped count.
pub fn retain_taxonomy_rows(rows: Vec<CategorizedRow>) -> (Vec<CategorizedRow>, usize) {
    let before = rows.len();
    let kept: Vec<CategorizedRow> = rows
        .into_iter()
        .filter(|row| taxonomy::accepts(&row.categoria))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// Append-only union of history and freshly categorized rows. No key-based
/// deduplication here: uniqueness is guaranteed upstream by the diff
/// engine at answer granularity.
pub fn merge(history: Vec<CategorizedRow>, fresh: Vec<CategorizedRow>) -> Vec<CategorizedRow> {
    let mut merged = history;
    merged.extend(fresh);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use aulapulse_common::taxonomy::GENERIC_NEGATIVE;

    fn row(question_id: i64, categoria: &str) -> CategorizedRow {
        CategorizedRow {
            moodle_id: 1,
            unique_id: "u-1".to_string(),
            activity_id: 10,
            attempt_id: 100,
            question_id,
            answer: "respuesta de prueba".to_string(),
            question_name: "Comentarios".to_string(),
            tag: None,
            categoria: categoria.to_string(),
            categoria_tipo: None,
            categoria_sentimiento: None,
        }
    }

    #[test]
    fn unmapped_labels_are_dropped_and_counted() {
        let rows = vec![
            row(1, "Otro"),
            row(2, "Etiqueta inexistente"),
            row(3, "Problemas técnicos"),
        ];
        let (kept, dropped) = retain_taxonomy_rows(rows);
        assert_eq!(kept.len(), 2);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn undisambiguated_generic_rows_are_dropped() {
        let rows = vec![row(1, GENERIC_NEGATIVE)];
        let (kept, dropped) = retain_taxonomy_rows(rows);
        assert!(kept.is_empty());
        assert_eq!(dropped, 1);
    }

    #[test]
    fn merge_is_non_destructive() {
        let history = vec![row(1, "Otro"), row(2, "Proyecto motivador")];
        let fresh = vec![row(3, "Problemas técnicos")];
        let merged = merge(history.clone(), fresh.clone());
        assert_eq!(merged.len(), history.len() + fresh.len());
        assert_eq!(merged[0], history[0]);
        assert_eq!(merged[2], fresh[0]);
    }

    #[test]
    fn merge_with_empty_history_is_exactly_fresh() {
        let fresh = vec![row(1, "Otro")];
        let merged = merge(Vec::new(), fresh.clone());
        assert_eq!(merged, fresh);
    }
}
