//! Store lifecycle tests with a file-backed database.

use askdb::db::{StudentStore, Value};

#[tokio::test]
async fn test_reopen_reseeds_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");

    {
        let store = StudentStore::open(&path).await.unwrap();
        // Dirty the table; the read-only gate sits above the store.
        store
            .execute_query("INSERT INTO students (name, age, grade) VALUES ('Dana', 30, 'D')")
            .await
            .unwrap();
        store.close().await;
    }

    // Second startup clears and reseeds; back to exactly three rows.
    let store = StudentStore::open(&path).await.unwrap();
    let result = store
        .execute_query("SELECT COUNT(*) FROM students")
        .await
        .unwrap();
    assert_eq!(result.rows[0][0], Value::Int(3));
    store.close().await;
}

#[tokio::test]
async fn test_seed_rows_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");

    let store = StudentStore::open(&path).await.unwrap();
    let result = store
        .execute_query("SELECT name, age, grade FROM students ORDER BY id")
        .await
        .unwrap();

    assert_eq!(result.row_count, 3);
    assert_eq!(
        result.rows,
        vec![
            vec![Value::from("Alice"), Value::Int(20), Value::from("A")],
            vec![Value::from("Bob"), Value::Int(22), Value::from("B")],
            vec![Value::from("Charlie"), Value::Int(21), Value::from("C")],
        ]
    );
    store.close().await;
}

#[tokio::test]
async fn test_column_metadata_reported() {
    let store = StudentStore::open_in_memory().await.unwrap();
    let result = store
        .execute_query("SELECT name, age FROM students LIMIT 1")
        .await
        .unwrap();

    assert_eq!(result.columns.len(), 2);
    assert_eq!(result.columns[0].name, "name");
    assert_eq!(result.columns[1].name, "age");
    store.close().await;
}
