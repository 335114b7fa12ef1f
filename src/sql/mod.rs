//! Normalization of raw model output into display-ready SQL.
//!
//! Models wrap answers in markdown fences, add stray blank lines and use
//! inconsistent whitespace. These functions clean that up deterministically;
//! they never fail, any input maps to a (possibly empty) statement list.

/// Collapses raw text into a single whitespace-normalized line.
///
/// Blank lines are dropped and every run of whitespace becomes one space.
/// Idempotent.
pub fn clean_sql(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits raw model text into clean, semicolon-terminated statements.
///
/// Each fragment between semicolons is stripped of markdown fences and
/// whitespace-collapsed; empty fragments are dropped and every surviving
/// statement gets exactly one trailing semicolon.
///
/// Splitting is purely syntactic: a semicolon inside a string literal or a
/// comment splits the statement too. Known limitation, kept as-is.
pub fn normalize_statements(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(strip_fences)
        .map(|fragment| clean_sql(&fragment))
        .filter(|statement| !statement.is_empty())
        .map(|statement| format!("{statement};"))
        .collect()
}

/// Strips markdown code-fence markers from both ends of a fragment.
///
/// Handles the language-tagged opening fence (```sql) and the bare closing
/// fence, repeating until no fence remains so that back-to-back blocks
/// separated by a statement split are fully unwrapped.
fn strip_fences(fragment: &str) -> String {
    let mut text = fragment.trim();

    loop {
        let before = text;

        if let Some(rest) = text.strip_prefix("```") {
            // Drop the language tag directly after the opening fence.
            text = rest
                .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
                .trim();
        }
        if let Some(rest) = text.strip_suffix("```") {
            text = rest.trim();
        }

        if text == before {
            break;
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_sql_collapses_whitespace_runs() {
        assert_eq!(clean_sql("SELECT  *\n FROM   t"), "SELECT * FROM t");
    }

    #[test]
    fn test_clean_sql_drops_blank_lines() {
        assert_eq!(
            clean_sql("SELECT name\n\n\nFROM users\n"),
            "SELECT name FROM users"
        );
    }

    #[test]
    fn test_clean_sql_empty_input() {
        assert_eq!(clean_sql(""), "");
        assert_eq!(clean_sql("   \n\t  \n"), "");
    }

    #[test]
    fn test_clean_sql_idempotent() {
        let once = clean_sql("SELECT  a,\n  b\nFROM t");
        assert_eq!(clean_sql(&once), once);
    }

    #[test]
    fn test_normalize_two_fenced_statements() {
        let raw = "```sql\nSELECT 1;\n```\n```sql\nSELECT 2\n```";
        assert_eq!(normalize_statements(raw), vec!["SELECT 1;", "SELECT 2;"]);
    }

    #[test]
    fn test_normalize_bare_statement_gets_terminator() {
        assert_eq!(
            normalize_statements("SELECT name FROM users"),
            vec!["SELECT name FROM users;"]
        );
    }

    #[test]
    fn test_normalize_keeps_existing_terminator_single() {
        assert_eq!(
            normalize_statements("SELECT name FROM users;"),
            vec!["SELECT name FROM users;"]
        );
    }

    #[test]
    fn test_normalize_empty_and_whitespace_input() {
        assert_eq!(normalize_statements(""), Vec::<String>::new());
        assert_eq!(normalize_statements("  \n\t \n "), Vec::<String>::new());
    }

    #[test]
    fn test_normalize_fence_only_input() {
        assert_eq!(normalize_statements("```sql\n```"), Vec::<String>::new());
    }

    #[test]
    fn test_normalize_multiline_statement() {
        let raw = "```sql\nSELECT d.department_name,\n       AVG(e.salary)\nFROM employees e\nJOIN departments d ON d.id = e.department;\n```";
        assert_eq!(
            normalize_statements(raw),
            vec![
                "SELECT d.department_name, AVG(e.salary) FROM employees e JOIN departments d ON d.id = e.department;"
            ]
        );
    }

    #[test]
    fn test_normalize_multiple_statements_in_one_block() {
        let raw = "```sql\nCREATE TABLE t (a INT);\nINSERT INTO t VALUES (1);\n```";
        assert_eq!(
            normalize_statements(raw),
            vec!["CREATE TABLE t (a INT);", "INSERT INTO t VALUES (1);"]
        );
    }

    #[test]
    fn test_normalize_untagged_fence() {
        let raw = "```\nSELECT COUNT(*) FROM orders\n```";
        assert_eq!(
            normalize_statements(raw),
            vec!["SELECT COUNT(*) FROM orders;"]
        );
    }

    #[test]
    fn test_normalize_idempotent_per_statement() {
        let raw = "```sql\nSELECT 1;\n```\nSELECT   2 ;\n";
        let statements = normalize_statements(raw);

        for statement in &statements {
            assert_eq!(normalize_statements(statement), vec![statement.clone()]);
        }
    }

    #[test]
    fn test_normalize_splits_inside_string_literal() {
        // Accepted limitation: the split is purely syntactic.
        let raw = "SELECT * FROM t WHERE note = 'a;b';";
        assert_eq!(
            normalize_statements(raw),
            vec!["SELECT * FROM t WHERE note = 'a;", "b';"]
        );
    }

    #[test]
    fn test_strip_fences_tagged_opening() {
        assert_eq!(strip_fences("```sql\nSELECT 1"), "SELECT 1");
    }

    #[test]
    fn test_strip_fences_closing_then_opening() {
        assert_eq!(strip_fences("\n```\n```sql\nSELECT 2\n```"), "SELECT 2");
    }

    #[test]
    fn test_strip_fences_plain_text_untouched() {
        assert_eq!(strip_fences("SELECT 1"), "SELECT 1");
    }
}
