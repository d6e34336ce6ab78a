//! Tag disambiguator: rewrites the two generic comment labels into their
//! topic-specific forms using the answer's tag (or question name as
//! fallback) as context.

use aulapulse_common::{taxonomy, CategorizedRow};

/// Rewrite a generic label into its topic-suffixed form when the context
/// text names a known topic. Non-generic labels pass through unchanged.
/// Facets are recomputed by a second taxonomy lookup after rewriting:
/// the generic label and its disambiguated form map to different facet
/// pairs.
pub fn disambiguate(mut row: CategorizedRow) -> CategorizedRow {
    if !taxonomy::is_generic(&row.categoria) {
        return row;
    }

    let context = context_text(row.tag.as_deref(), &row.question_name);
    if let Some(topic) = taxonomy::TOPICS
        .iter()
        .find(|topic| context.contains(topic.keyword))
    {
        row.categoria.push_str(&topic.suffix());
    }

    let facets = taxonomy::facets(&row.categoria);
    row.categoria_tipo = facets.map(|(tipo, _)| tipo);
    row.categoria_sentimiento = facets.map(|(_, sentimiento)| sentimiento);
    row
}

/// Context selection: the tag, lower-cased and trimmed, unless it is empty
/// or the literal "nan"/"none" left behind by earlier tooling; otherwise
/// the question name.
fn context_text(tag: Option<&str>, question_name: &str) -> String {
    let tag = tag.map(|t| t.trim().to_lowercase()).unwrap_or_default();
    if !tag.is_empty() && tag != "nan" && tag != "none" {
        tag
    } else {
        question_name.trim().to_lowercase()
    }
}
