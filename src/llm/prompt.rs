//! Prompt construction for SQL generation.
//!
//! Builds the fixed instruction block and the schema+question context block.
//! The same two blocks feed both protocols: concatenated for plain text
//! generation, split into system and user messages for the chat fallback.

/// Instruction template for the SQL generator.
///
/// The `{dialect}` placeholder is replaced with the exact dialect string from
/// the request so the model uses the right syntax conventions.
const INSTRUCTION_TEMPLATE: &str = r#"You are an expert SQL generator.
You will be given a database schema and a natural language question.
Your task is to write an accurate SQL query that correctly answers the question.

Follow these rules:
1. Only use columns and tables from the provided schema.
2. Write queries in standard SQL syntax (use {dialect} conventions).
3. Avoid adding any columns or tables not in the schema.
4. Include JOINs only if they are necessary to answer the question.
5. Return only the SQL query, do not include explanations or comments."#;

/// Builds the instruction block with the dialect injected.
pub fn build_instructions(dialect: &str) -> String {
    INSTRUCTION_TEMPLATE.replace("{dialect}", dialect)
}

/// Builds the context block from schema and question, each trimmed.
pub fn build_context(schema: &str, question: &str) -> String {
    format!("{}\n{}", schema.trim(), question.trim())
}

/// Builds the combined single-turn prompt for plain text generation.
pub fn build_prompt(instructions: &str, context: &str) -> String {
    format!("{}\n\n{}", instructions.trim(), context.trim())
}
