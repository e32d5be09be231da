//! Builder tests against the live schema.
//!
//! The unit tests pin the extraction rules; these verify the builder
//! against column names introspected from a real seeded store.

use askdb::db::StudentStore;
use askdb::nlp::Lexicon;
use askdb::query::build_query;
use askdb::safety::ensure_read_only;

#[tokio::test]
async fn test_builder_uses_introspected_columns() {
    let store = StudentStore::open_in_memory().await.unwrap();
    let columns = store.column_names().await.unwrap();
    let lexicon = Lexicon::embedded();

    // "id" is a real column, so mentioning it selects it.
    let query = build_query(&lexicon, "what is the id of bob", &columns);
    assert_eq!(query.sql, "SELECT id FROM students WHERE name = 'Bob'");

    store.close().await;
}

#[tokio::test]
async fn test_generated_sql_valid_for_all_condition_shapes() {
    let store = StudentStore::open_in_memory().await.unwrap();
    let columns = store.column_names().await.unwrap();
    let lexicon = Lexicon::embedded();

    let questions = [
        "list the students",   // no conditions
        "tell me about alice", // name only
        "who is 22 here",      // age only
        "is charlie 21",       // name and age
    ];

    for question in questions {
        let query = build_query(&lexicon, question, &columns);
        ensure_read_only(&query.sql)
            .unwrap_or_else(|e| panic!("invalid SQL for {question:?}: {e}"));

        // The database agrees the query is well-formed.
        store
            .execute_query(&query.sql)
            .await
            .unwrap_or_else(|e| panic!("execution failed for {question:?}: {e}"));
    }

    store.close().await;
}
