//! Web handler tests, driving the index handler directly.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;

use askdb::db::StudentStore;
use askdb::nlp::Lexicon;
use askdb::web::{index, AppState, QuestionParams};

async fn state() -> Arc<AppState> {
    let store = StudentStore::open_in_memory().await.unwrap();
    Arc::new(AppState::new(store, Lexicon::embedded()))
}

fn question(q: &str) -> Query<QuestionParams> {
    Query(QuestionParams {
        question: Some(q.to_string()),
    })
}

#[tokio::test]
async fn test_form_page() {
    let Html(page) = index(State(state().await), Query(QuestionParams::default())).await;

    assert!(page.contains("name=\"question\""));
    assert!(page.contains("<button type=\"submit\">Ask</button>"));
    assert!(!page.contains("Generated SQL"));
}

#[tokio::test]
async fn test_question_shows_sql_and_result_rows() {
    let Html(page) = index(State(state().await), question("What is Alice's age?")).await;

    assert!(page.contains("Generated SQL"));
    assert!(page.contains("WHERE name = &#39;Alice&#39;"));
    assert!(page.contains("<td>Alice</td>"));
    assert!(page.contains("<td>20</td>"));
    assert!(page.contains("<td>A</td>"));
}

#[tokio::test]
async fn test_question_input_is_echoed_escaped() {
    let Html(page) = index(
        State(state().await),
        question("<script>alert('x')</script>"),
    )
    .await;

    assert!(!page.contains("<script>alert"));
    assert!(page.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_grade_question_selects_single_column() {
    let Html(page) = index(State(state().await), question("show the grade for bob")).await;

    assert!(page.contains("SELECT grade FROM students"));
    assert!(page.contains("<th>grade</th>"));
    assert!(page.contains("<td>B</td>"));
    // Default columns were not applied.
    assert!(!page.contains("<td>22</td>"));
}
