//! OpenAI-backed answer classifier.

use ai_client::{OpenAi, UsageTotals};
use anyhow::Result;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use aulapulse_common::{taxonomy, AnswerRecord, RawClassification};

use crate::traits::Classify;

/// What the LLM returns for each answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationResponse {
    /// One or more category labels, verbatim from the allowed list.
    #[serde(default)]
    pub categorias: Vec<String>,
}

const SYSTEM_PROMPT_HEADER: &str = r#"Eres un clasificador de respuestas de encuestas de satisfacción de cursos en línea.

Tu trabajo: asignar a cada respuesta libre una o más categorías de la lista permitida. Reglas:

- Usa ÚNICAMENTE etiquetas de la lista, copiadas textualmente.
- Asigna varias categorías solo cuando la respuesta toca temas claramente distintos.
- Si la respuesta no encaja en ninguna categoría específica, usa "Sin categoría".
- No inventes categorías nuevas ni variantes.

Categorías permitidas:
"#;

pub struct Classifier {
    openai: OpenAi,
}

impl Classifier {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            openai: OpenAi::new(api_key, model),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.openai = self.openai.with_base_url(url);
        self
    }

    fn system_prompt() -> String {
        let mut prompt = String::from(SYSTEM_PROMPT_HEADER);
        for label in taxonomy::assignable_labels() {
            prompt.push_str("- ");
            prompt.push_str(label);
            prompt.push('\n');
        }
        prompt.push_str("- ");
        prompt.push_str(taxonomy::UNCATEGORIZED);
        prompt.push('\n');
        prompt
    }

    async fn classify_inner(&self, record: &AnswerRecord) -> Result<RawClassification> {
        // Truncate pathological answers to keep token usage bounded
        let answer = if record.answer.len() > 4_000 {
            let mut end = 4_000;
            while !record.answer.is_char_boundary(end) {
                end -= 1;
            }
            &record.answer[..end]
        } else {
            &record.answer
        };

        let user_prompt = format!(
            "Pregunta: {}\n\nRespuesta del estudiante:\n{}",
            record.question_name, answer
        );

        let response: ClassificationResponse = self
            .openai
            .extract(Self::system_prompt(), user_prompt)
            .await?;

        debug!(
            question_id = record.question_id,
            labels = response.categorias.len(),
            "Answer classified"
        );

        if response.categorias.is_empty() {
            return Ok(RawClassification::Label(
                taxonomy::UNCATEGORIZED.to_string(),
            ));
        }

        Ok(RawClassification::from(response.categorias))
    }
}

#[async_trait]
impl Classify for Classifier {
    async fn classify(&self, record: &AnswerRecord) -> Result<RawClassification> {
        self.classify_inner(record).await
    }

    fn model_name(&self) -> &str {
        self.openai.model()
    }

    fn usage_snapshot(&self) -> UsageTotals {
        self.openai.usage().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_lists_assignable_labels_and_sentinel() {
        let prompt = Classifier::system_prompt();
        assert!(prompt.contains("- Comentarios positivos generales\n"));
        assert!(prompt.contains("- Sin categoría\n"));
        // Disambiguated forms are produced downstream, never assigned.
        assert!(!prompt.contains("(docente)"));
    }
}
