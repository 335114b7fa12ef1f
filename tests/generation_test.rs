//! End-to-end pipeline tests over the mock inference client:
//! request -> generate -> normalize.

use pretty_assertions::assert_eq;

use sqlquill::llm::{
    build_context, build_instructions, generate_sql, InvocationMode, MockInferenceClient,
    Role, SqlRequest,
};
use sqlquill::sql::normalize_statements;

const SCHEMA: &str = "employees(id INT, name TEXT, department TEXT, salary INT);\ndepartments(id INT, department_name TEXT);";
const QUESTION: &str = "List all departments with average salary greater than 50000.";

fn request() -> SqlRequest {
    SqlRequest::new(SCHEMA, QUESTION)
}

#[tokio::test]
async fn completion_response_is_normalized_into_statements() {
    let client = MockInferenceClient::new().with_completion(
        "```sql\nSELECT d.department_name\nFROM departments d\nJOIN employees e ON e.department = d.department_name\nGROUP BY d.department_name\nHAVING AVG(e.salary) > 50000\n```",
    );

    let response = generate_sql(&client, &request()).await.unwrap();
    let statements = normalize_statements(&response.text);

    assert_eq!(response.mode, InvocationMode::Completion);
    assert_eq!(statements.len(), 1);
    assert_eq!(
        statements[0],
        "SELECT d.department_name FROM departments d JOIN employees e ON e.department = d.department_name GROUP BY d.department_name HAVING AVG(e.salary) > 50000;"
    );
}

#[tokio::test]
async fn chat_fallback_produces_statements_with_message_pair() {
    let client = MockInferenceClient::new()
        .with_completion_error("Supported task: conversational", None)
        .with_chat("```sql\nSELECT 1;\n```\n```sql\nSELECT 2\n```");

    let response = generate_sql(&client, &request()).await.unwrap();
    let statements = normalize_statements(&response.text);

    assert_eq!(response.mode, InvocationMode::Chat);
    assert_eq!(statements, vec!["SELECT 1;", "SELECT 2;"]);

    let chat_calls = client.chat_calls();
    assert_eq!(chat_calls.len(), 1);
    assert_eq!(chat_calls[0].messages[0].role, Role::System);
    assert_eq!(
        chat_calls[0].messages[0].content,
        build_instructions("PostgreSQL")
    );
    assert_eq!(chat_calls[0].messages[1].role, Role::User);
    assert_eq!(
        chat_calls[0].messages[1].content,
        build_context(SCHEMA, QUESTION)
    );
}

#[tokio::test]
async fn prose_only_answer_still_yields_statements_never_errors() {
    let client = MockInferenceClient::new()
        .with_completion("I cannot answer that with the given schema.");

    let response = generate_sql(&client, &request()).await.unwrap();
    let statements = normalize_statements(&response.text);

    // No SQL-awareness: prose is passed through, cleaned and terminated.
    assert_eq!(
        statements,
        vec!["I cannot answer that with the given schema.;"]
    );
}

#[tokio::test]
async fn blank_model_output_maps_to_empty_result() {
    let client = MockInferenceClient::new().with_completion("  \n \t \n");

    let response = generate_sql(&client, &request()).await.unwrap();
    let statements = normalize_statements(&response.text);

    assert!(statements.is_empty());
}

#[tokio::test]
async fn dialect_override_reaches_the_prompt() {
    let client = MockInferenceClient::new().with_completion("SELECT 1;");
    let request = request().with_dialect("SQLite");

    generate_sql(&client, &request).await.unwrap();

    let calls = client.completion_calls();
    assert!(calls[0].prompt.contains("use SQLite conventions"));
    assert!(calls[0].prompt.contains(SCHEMA.trim()));
    assert!(calls[0].prompt.contains(QUESTION));
}
