//! Query execution against the student store.
//!
//! Failures do not propagate: the outcome carries either the decoded
//! rows or the stringified error, and the page renders whichever arm
//! it got. Callers that need to tell them apart match on the outcome.

use tracing::warn;

use crate::db::{QueryResult, StudentStore};
use crate::safety;

/// Result of running a generated query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The query ran; here are the rows (possibly none).
    Rows(QueryResult),
    /// The query was rejected or failed; here is the message shown
    /// in place of the rows.
    Failed(String),
}

impl QueryOutcome {
    /// Returns true if this outcome is the failure arm.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Executes generated SQL against a store.
pub struct QueryExecutor<'a> {
    store: &'a StudentStore,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new executor over the given store.
    pub fn new(store: &'a StudentStore) -> Self {
        Self { store }
    }

    /// Validates and runs a query, folding any error into the
    /// displayable failure arm.
    pub async fn execute(&self, sql: &str) -> QueryOutcome {
        if let Err(e) = safety::ensure_read_only(sql) {
            warn!(sql, error = %e, "Rejected generated query");
            return QueryOutcome::Failed(e.to_string());
        }

        match self.store.execute_query(sql).await {
            Ok(result) => QueryOutcome::Rows(result),
            Err(e) => {
                warn!(sql, error = %e, "Query execution failed");
                QueryOutcome::Failed(e.to_string())
            }
        }
    }
}
