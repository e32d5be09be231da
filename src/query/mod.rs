//! Question-to-SQL pipeline: the heuristic builder and the executor.

mod builder;
mod executor;

pub use builder::{build_query, GeneratedQuery, QuestionAnalysis, DEFAULT_COLUMNS};
pub use executor::{QueryExecutor, QueryOutcome};
