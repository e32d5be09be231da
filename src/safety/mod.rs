//! Read-only gate for generated SQL.
//!
//! Parses SQL with sqlparser (SQLite dialect) and rejects anything
//! other than exactly one plain SELECT before it reaches the database.

use sqlparser::ast::{SetExpr, Statement};
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

use crate::error::{AskdbError, Result};

/// Verifies that `sql` is a single plain SELECT statement.
pub fn ensure_read_only(sql: &str) -> Result<()> {
    let statements = Parser::parse_sql(&SQLiteDialect {}, sql)
        .map_err(|e| AskdbError::query(format!("SQL parse error: {e}")))?;

    match statements.as_slice() {
        [] => Err(AskdbError::query("Empty SQL statement")),
        [Statement::Query(query)] => {
            if query.with.is_some() {
                return Err(AskdbError::query("CTEs are not allowed"));
            }
            match query.body.as_ref() {
                SetExpr::Select(_) => Ok(()),
                _ => Err(AskdbError::query("Only plain SELECT queries are allowed")),
            }
        }
        [_] => Err(AskdbError::query("Only SELECT statements are allowed")),
        _ => Err(AskdbError::query("Multiple statements are not allowed")),
    }
}
