//! The two logical warehouse queries the pipeline issues.

/// All eligible sentiment-analysis answers joined with their optional
/// course-evaluation tag. Boilerplate questions (instruction prompts,
/// ease-of-use scales) are excluded by case-insensitive pattern.
pub const SENTIMENT_ANSWERS_SQL: &str = r#"
SELECT
    ceq.tag,
    sa.*
FROM
    sentiment_analysis sa
    LEFT JOIN moodle_course_evaluation_questions ceq
        ON (sa.question_id = ceq.question_id AND sa.unique_id = ceq.unique_id)
WHERE
    lower(sa.question_name) NOT LIKE '%indica%'
    AND lower(sa.question_name) NOT LIKE '%qué tan fácil%'
"#;

/// All previously categorized rows. This query legitimately fails on the
/// first run, before the table exists; the caller treats that as empty
/// history.
pub const CATEGORY_HISTORY_SQL: &str = r#"
SELECT
    *
FROM
    response_satisfaccion_category
"#;

/// Logical dataset names used for query logging and export targets.
pub const SENTIMENT_QUERY_NAME: &str = "sentiment";
pub const HISTORY_QUERY_NAME: &str = "category_response";
pub const EXPORT_DATASET_NAME: &str = "moodle_category_responses";
pub const USAGE_DATASET_NAME: &str = "openai_usage";
