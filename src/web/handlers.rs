//! Request handlers and HTML rendering.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::info;

use crate::db::QueryResult;
use crate::query::{build_query, GeneratedQuery, QueryExecutor, QueryOutcome};

use super::AppState;

/// Query parameters for the index page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionParams {
    /// The free-text question, if any.
    pub question: Option<String>,
}

/// Renders the form and, for a non-empty question, the generated SQL
/// and its result (or error string).
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuestionParams>,
) -> Html<String> {
    let question = params.question.as_deref().unwrap_or("").trim().to_string();

    if question.is_empty() {
        return Html(render_page("", None, None));
    }

    // Column names come from the live schema on every request.
    let outcome;
    let generated;
    match state.store.column_names().await {
        Ok(columns) => {
            let query = build_query(&state.lexicon, &question, &columns);
            info!(%question, sql = %query.sql, "Generated query");
            outcome = QueryExecutor::new(&state.store).execute(&query.sql).await;
            generated = Some(query);
        }
        Err(e) => {
            outcome = QueryOutcome::Failed(e.to_string());
            generated = None;
        }
    }

    Html(render_page(&question, generated.as_ref(), Some(&outcome)))
}

/// Renders the full page.
fn render_page(
    question: &str,
    generated: Option<&GeneratedQuery>,
    outcome: Option<&QueryOutcome>,
) -> String {
    let mut body = String::new();

    body.push_str(concat!(
        "<h1>askdb</h1>\n",
        "<p>Enter a natural language question about the students table ",
        "and askdb will generate and run a SQL query for it.</p>\n",
    ));

    body.push_str(&format!(
        concat!(
            "<form method=\"get\" action=\"/\">\n",
            "<input type=\"text\" name=\"question\" value=\"{}\" size=\"60\" ",
            "placeholder=\"What is Alice's age?\" autofocus>\n",
            "<button type=\"submit\">Ask</button>\n",
            "</form>\n",
        ),
        escape_html(question)
    ));

    if let Some(query) = generated {
        body.push_str("<h2>Generated SQL</h2>\n");
        body.push_str(&format!("<pre>{}</pre>\n", escape_html(&query.sql)));
    }

    if let Some(outcome) = outcome {
        body.push_str("<h2>Query Results</h2>\n");
        match outcome {
            QueryOutcome::Rows(result) if result.is_empty() => {
                body.push_str("<p>No rows matched.</p>\n");
            }
            QueryOutcome::Rows(result) => {
                body.push_str(&render_result_table(result));
            }
            QueryOutcome::Failed(message) => {
                body.push_str(&format!(
                    "<p class=\"error\">{}</p>\n",
                    escape_html(message)
                ));
            }
        }
    }

    format!(
        concat!(
            "<!doctype html>\n<html>\n<head>\n",
            "<meta charset=\"utf-8\">\n<title>askdb</title>\n",
            "<style>\n",
            "body {{ font-family: sans-serif; margin: 2em auto; max-width: 48em; }}\n",
            "pre {{ background: #f4f4f4; padding: 0.5em; }}\n",
            "table {{ border-collapse: collapse; }}\n",
            "td, th {{ border: 1px solid #999; padding: 0.3em 0.8em; }}\n",
            ".error {{ color: #a00; }}\n",
            "</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        ),
        body
    )
}

/// Renders a result set as an HTML table.
fn render_result_table(result: &QueryResult) -> String {
    let mut html = String::from("<table>\n<tr>");
    for column in &result.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(&column.name)));
    }
    html.push_str("</tr>\n");

    for row in &result.rows {
        html.push_str("<tr>");
        for value in row {
            html.push_str(&format!(
                "<td>{}</td>",
                escape_html(&value.to_display_string())
            ));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n");
    html
}

/// Escapes text for embedding in HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
