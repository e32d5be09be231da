//! Web interface for askdb.
//!
//! One route: `GET /` renders the question form and, when a question
//! is present, the generated SQL and its result.

mod handlers;

pub use handlers::{index, QuestionParams};

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::db::StudentStore;
use crate::nlp::Lexicon;

/// Shared state for request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The seeded student store.
    pub store: StudentStore,
    /// The person-name lexicon.
    pub lexicon: Lexicon,
}

impl AppState {
    /// Creates the application state.
    pub fn new(store: StudentStore, lexicon: Lexicon) -> Self {
        Self { store, lexicon }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .with_state(Arc::new(state))
}
