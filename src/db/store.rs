//! SQLite-backed student store.
//!
//! Owns the single-connection pool, creates and reseeds the `students`
//! table at startup, and executes generated queries with dynamic row
//! decoding.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column as SqlxColumn, Row as SqlxRow, TypeInfo};
use tracing::{debug, info};

use crate::db::{ColumnInfo, QueryResult, Row, Value};
use crate::error::{AskdbError, Result};

/// The fixed rows the store is reseeded with on every startup.
pub const SEED_STUDENTS: [(&str, i64, &str); 3] =
    [("Alice", 20, "A"), ("Bob", 22, "B"), ("Charlie", 21, "C")];

/// SQLite store holding the demo `students` table.
#[derive(Debug, Clone)]
pub struct StudentStore {
    pool: SqlitePool,
}

impl StudentStore {
    /// Opens (or creates) the store at the given file path and reseeds it.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AskdbError::persistence(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let conn_str = format!("sqlite:{}?mode=rwc", path.display());
        let options = SqliteConnectOptions::from_str(&conn_str)
            .map_err(|e| AskdbError::persistence(format!("Invalid database path: {e}")))?
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let pool = Self::pool_options()
            .connect_with(options)
            .await
            .map_err(|e| AskdbError::persistence(format!("Failed to open database: {e}")))?;

        let store = Self { pool };
        store.reseed().await?;
        info!("Student database ready at {}", path.display());
        Ok(store)
    }

    /// Opens an in-memory store, reseeded like the file-backed one.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AskdbError::persistence(format!("Invalid connection string: {e}")))?;

        let pool = Self::pool_options()
            .connect_with(options)
            .await
            .map_err(|e| {
                AskdbError::persistence(format!("Failed to open in-memory database: {e}"))
            })?;

        let store = Self { pool };
        store.reseed().await?;
        Ok(store)
    }

    /// A single connection keeps access serial and, for the in-memory
    /// case, keeps the database alive for the pool's lifetime.
    fn pool_options() -> SqlitePoolOptions {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(Duration::from_secs(10))
    }

    /// Creates the `students` table if needed, clears it, and inserts
    /// the three fixed sample rows.
    pub async fn reseed(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY,
                name TEXT,
                age INTEGER,
                grade TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AskdbError::persistence(format!("Failed to create students table: {e}")))?;

        sqlx::query("DELETE FROM students")
            .execute(&self.pool)
            .await
            .map_err(|e| AskdbError::persistence(format!("Failed to clear students table: {e}")))?;

        for (name, age, grade) in SEED_STUDENTS {
            sqlx::query("INSERT INTO students (name, age, grade) VALUES (?, ?, ?)")
                .bind(name)
                .bind(age)
                .bind(grade)
                .execute(&self.pool)
                .await
                .map_err(|e| AskdbError::persistence(format!("Failed to seed students: {e}")))?;
        }

        debug!("Reseeded students table with {} rows", SEED_STUDENTS.len());
        Ok(())
    }

    /// Returns the column names of the `students` table, in schema order.
    pub async fn column_names(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("PRAGMA table_info(students)")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AskdbError::persistence(format!("Failed to read table info: {e}")))?;

        let mut names = Vec::with_capacity(rows.len());
        for row in &rows {
            let name: String = row
                .try_get("name")
                .map_err(|e| AskdbError::persistence(format!("Malformed table info row: {e}")))?;
            names.push(name);
        }
        Ok(names)
    }

    /// Executes a SQL string and returns the decoded result set.
    pub async fn execute_query(&self, sql: &str) -> Result<QueryResult> {
        debug!(sql, "Executing query");

        let result = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AskdbError::query(e.to_string()))?;

        let columns: Vec<ColumnInfo> = result
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
                    .collect()
            })
            .unwrap_or_default();

        let rows: Vec<Row> = result.iter().map(convert_row).collect();

        Ok(QueryResult::with_data(columns, rows))
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Converts a sqlx SqliteRow to our Row type.
fn convert_row(row: &SqliteRow) -> Row {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, col)| convert_value(row, i, col.type_info().name()))
        .collect()
}

/// Converts a single column value from a SqliteRow to our Value type.
fn convert_value(row: &SqliteRow, index: usize, type_name: &str) -> Value {
    match type_name {
        "INTEGER" | "BOOLEAN" => row
            .try_get::<Option<i64>, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
        "REAL" => row
            .try_get::<Option<f64>, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
        "TEXT" | "DATETIME" | "DATE" | "TIME" => row
            .try_get::<Option<String>, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
        "BLOB" => row
            .try_get::<Option<Vec<u8>>, _>(index)
            .map(|v| v.map(Value::Bytes).unwrap_or(Value::Null))
            .unwrap_or(Value::Null),
        "NULL" => Value::Null,
        // Expression columns can come back untyped; try text last.
        _ => row
            .try_get::<Option<String>, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
    }
}
