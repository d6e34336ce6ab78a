//! The fixed category taxonomy: every label the processed dataset may
//! contain, with its derived (type, sentiment) facet pair. Fixed at build
//! time, not user-configurable.

use serde::{Deserialize, Serialize};

// --- Facets ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryType {
    #[serde(rename = "Contenido")]
    Content,
    #[serde(rename = "Docente")]
    Instructor,
    #[serde(rename = "Programa")]
    Program,
    #[serde(rename = "Plataforma")]
    Platform,
    #[serde(rename = "Otro")]
    Other,
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryType::Content => write!(f, "Contenido"),
            CategoryType::Instructor => write!(f, "Docente"),
            CategoryType::Program => write!(f, "Programa"),
            CategoryType::Platform => write!(f, "Plataforma"),
            CategoryType::Other => write!(f, "Otro"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Positivo")]
    Positive,
    #[serde(rename = "Negativo")]
    Negative,
    #[serde(rename = "Neutro")]
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positivo"),
            Sentiment::Negative => write!(f, "Negativo"),
            Sentiment::Neutral => write!(f, "Neutro"),
        }
    }
}

// --- Well-known labels ---

/// Sentinel the classifier returns when no category applies. Never enters
/// the processed dataset.
pub const UNCATEGORIZED: &str = "Sin categoría";

/// The two generic labels that require topic disambiguation before they are
/// accepted into the dataset.
pub const GENERIC_POSITIVE: &str = "Comentarios positivos generales";
pub const GENERIC_NEGATIVE: &str = "Comentarios negativos generales";

// --- Topic correspondence ---

/// One disambiguation topic: the keyword scanned for in the context text
/// and the category type its suffixed labels carry.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub keyword: &'static str,
    pub category_type: CategoryType,
}

impl Topic {
    /// The suffix appended to a generic label for this topic,
    /// e.g. " (docente)".
    pub fn suffix(&self) -> String {
        format!(" ({})", self.keyword)
    }
}

/// Topics in scan priority order. The first keyword found in the context
/// text wins. This table drives the disambiguator and is cross-checked
/// against `TAXONOMY` in tests so topic additions stay consistent.
pub const TOPICS: &[Topic] = &[
    Topic { keyword: "contenido", category_type: CategoryType::Content },
    Topic { keyword: "docente", category_type: CategoryType::Instructor },
    Topic { keyword: "programa", category_type: CategoryType::Program },
    Topic { keyword: "campus", category_type: CategoryType::Platform },
];

// --- The taxonomy table ---

type Entry = (&'static str, CategoryType, Sentiment);

/// Label → facet mapping. The two generic labels exist only as
/// pre-disambiguation intermediate forms; their topic-suffixed variants are
/// the resolved forms.
pub const TAXONOMY: &[Entry] = &[
    ("Contenido claro y fácil de entender", CategoryType::Content, Sentiment::Positive),
    ("Contenido útil y aplicable a mi carrera", CategoryType::Content, Sentiment::Positive),
    ("Contenido entretenido y motivador", CategoryType::Content, Sentiment::Positive),
    ("Contenido confuso o difícil de seguir", CategoryType::Content, Sentiment::Negative),
    ("Contenido aburrido o monótono", CategoryType::Content, Sentiment::Negative),
    ("Contenido sin relevancia para mis objetivos", CategoryType::Content, Sentiment::Negative),
    ("Buen nivel de explicación del docente", CategoryType::Instructor, Sentiment::Positive),
    ("Docente experto y con dominio del tema", CategoryType::Instructor, Sentiment::Positive),
    ("Docente amable y paciente al resolver dudas", CategoryType::Instructor, Sentiment::Positive),
    ("Docente con método poco dinámico o poco claro", CategoryType::Instructor, Sentiment::Negative),
    ("Docente que demuestra falta de conocimiento", CategoryType::Instructor, Sentiment::Negative),
    ("Docente poco dispuesto a ayudar", CategoryType::Instructor, Sentiment::Negative),
    ("Problemas técnicos", CategoryType::Program, Sentiment::Negative),
    ("Plataforma intuitiva y rica en recursos", CategoryType::Platform, Sentiment::Positive),
    ("Plataforma confusa o con fallos técnicos", CategoryType::Platform, Sentiment::Negative),
    ("Proyecto motivador", CategoryType::Program, Sentiment::Positive),
    ("Proyecto desmotivador", CategoryType::Program, Sentiment::Negative),
    ("Sugerencias y propuestas de mejora", CategoryType::Program, Sentiment::Positive),
    ("Comentarios positivos generales", CategoryType::Program, Sentiment::Positive),
    ("Comentarios negativos generales", CategoryType::Program, Sentiment::Negative),
    ("Otro", CategoryType::Other, Sentiment::Neutral),
    ("Comentarios positivos generales (docente)", CategoryType::Instructor, Sentiment::Positive),
    ("Comentarios positivos generales (programa)", CategoryType::Program, Sentiment::Positive),
    ("Comentarios positivos generales (contenido)", CategoryType::Content, Sentiment::Positive),
    ("Comentarios positivos generales (campus)", CategoryType::Platform, Sentiment::Positive),
    ("Comentarios negativos generales (docente)", CategoryType::Instructor, Sentiment::Negative),
    ("Comentarios negativos generales (programa)", CategoryType::Program, Sentiment::Negative),
    ("Comentarios negativos generales (contenido)", CategoryType::Content, Sentiment::Negative),
    ("Comentarios negativos generales (campus)", CategoryType::Platform, Sentiment::Negative),
];

/// Look up the facet pair for a label. Returns `None` for labels outside
/// the taxonomy.
pub fn facets(label: &str) -> Option<(CategoryType, Sentiment)> {
    TAXONOMY
        .iter()
        .find(|(name, _, _)| *name == label)
        .map(|(_, tipo, sentimiento)| (*tipo, *sentimiento))
}

/// Whether a label is a taxonomy key.
pub fn contains(label: &str) -> bool {
    facets(label).is_some()
}

/// Whether a label is one of the two pre-disambiguation generic forms.
pub fn is_generic(label: &str) -> bool {
    label == GENERIC_POSITIVE || label == GENERIC_NEGATIVE
}

/// The final filter gate: a row enters the processed dataset only if its
/// label is a taxonomy key and not an intermediate generic form. A generic
/// comment that could not be disambiguated carries no actionable topic and
/// is excluded.
pub fn accepts(label: &str) -> bool {
    contains(label) && !is_generic(label)
}

/// Labels the classifier is allowed to assign: everything except the
/// topic-suffixed resolved forms, which only the disambiguator produces.
pub fn assignable_labels() -> Vec<&'static str> {
    TAXONOMY
        .iter()
        .map(|(name, _, _)| *name)
        .filter(|name| !name.ends_with(')'))
        .collect()
}
