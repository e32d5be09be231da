//! Heuristic question-to-SQL builder.
//!
//! A handful of linear scans over the analyzed question, first match
//! wins throughout: lexicon person entity (else first title-cased
//! token) becomes the name condition, the first numeric token becomes
//! the age condition, and column mentions select columns explicitly.

use crate::nlp::{capitalize, Doc, EntityLabel, Lexicon};

/// Columns selected when the question mentions none explicitly.
pub const DEFAULT_COLUMNS: [&str; 3] = ["name", "age", "grade"];

/// What the builder extracted from a question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionAnalysis {
    /// Target person name, capitalized.
    pub name: Option<String>,
    /// Target age, kept as the raw token text.
    pub age: Option<String>,
    /// Columns to select, in mention order (or the defaults).
    pub columns: Vec<String>,
    /// True when no column was mentioned and the defaults were used.
    pub used_default_columns: bool,
}

/// A generated query together with the analysis that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuery {
    /// The assembled SELECT statement.
    pub sql: String,
    /// The extraction behind it, for display and tests.
    pub analysis: QuestionAnalysis,
}

/// Builds a SELECT over `students` from a free-text question and the
/// known column names.
pub fn build_query(lexicon: &Lexicon, question: &str, known_columns: &[String]) -> GeneratedQuery {
    let doc = lexicon.analyze(question);
    let analysis = extract(&doc, known_columns);
    let sql = assemble(&analysis);
    GeneratedQuery { sql, analysis }
}

/// Runs the extraction scans over an analyzed question.
fn extract(doc: &Doc, known_columns: &[String]) -> QuestionAnalysis {
    // Person name: first person entity wins.
    let mut name = doc
        .entities
        .iter()
        .find(|e| e.label == EntityLabel::Person)
        .map(|e| capitalize(&e.text));

    // Fallback: first title-cased token, a naive name detector.
    if name.is_none() {
        name = doc
            .tokens
            .iter()
            .find(|t| t.is_title_case())
            .map(|t| capitalize(&t.text));
    }

    let mut age = None;
    let mut columns = Vec::new();
    for token in &doc.tokens {
        if token.is_number() {
            if age.is_none() {
                age = Some(token.text.clone());
            }
        } else if known_columns.iter().any(|c| *c == token.lower) {
            columns.push(token.lower.clone());
        }
    }

    let used_default_columns = columns.is_empty();
    if used_default_columns {
        columns = DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect();
    }

    QuestionAnalysis {
        name,
        age,
        columns,
        used_default_columns,
    }
}

/// Renders the SELECT statement for an analysis.
fn assemble(analysis: &QuestionAnalysis) -> String {
    let mut sql = format!("SELECT {} FROM students", analysis.columns.join(", "));

    let mut conditions = Vec::new();
    if let Some(name) = &analysis.name {
        conditions.push(format!("name = '{}'", escape_literal(name)));
    }
    if let Some(age) = &analysis.age {
        conditions.push(format!("age = {age}"));
    }

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    sql
}

/// Escapes a string literal for embedding in SQL (quotes doubled).
fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}
