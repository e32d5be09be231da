//! Database layer for askdb.
//!
//! A single SQLite-backed store holding the demo `students` table,
//! recreated and reseeded on every startup.

mod store;
mod types;

pub use store::{StudentStore, SEED_STUDENTS};
pub use types::{ColumnInfo, QueryResult, Row, Value};
