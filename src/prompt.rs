//! Prompt assembly for the NL-to-SQL tool
//!
//! Pure string construction: preamble, one block per table schema, the
//! caller's query, and a SQL-only instruction. Tables appear in the store's
//! sorted order so the same inputs always produce the same prompt.

use crate::schema::SchemaStore;

const PREAMBLE: &str = "You are a SQL expert. \
Use the following table schemas to ground your answer.\n\n";

const INSTRUCTION: &str =
    "Respond with only the SQL statement, no explanation and no markdown.";

/// Assemble the full completion prompt for a natural-language query.
pub fn build_prompt(schemas: &SchemaStore, query: &str) -> String {
    let mut prompt = String::from(PREAMBLE);

    for (name, definition) in schemas.iter() {
        prompt.push_str("Table: ");
        prompt.push_str(name);
        prompt.push('\n');
        prompt.push_str(definition);
        prompt.push_str("\n\n");
    }

    prompt.push_str("Convert this natural language query to valid SQL:\n");
    prompt.push('"');
    prompt.push_str(query);
    prompt.push_str("\"\n\n");
    prompt.push_str(INSTRUCTION);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn store(tables: &[(&str, &str)]) -> SchemaStore {
        SchemaStore::from_tables(
            tables
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_prompt_contains_query_and_instruction() {
        let prompt = build_prompt(&store(&[]), "show all users");
        assert!(prompt.contains("Convert this natural language query to valid SQL:\n\"show all users\""));
        assert!(prompt.ends_with(INSTRUCTION));
    }

    #[test]
    fn test_prompt_includes_schema_blocks() {
        let prompt = build_prompt(
            &store(&[("users", "CREATE TABLE users (id INT);")]),
            "count users",
        );
        assert!(prompt.contains("Table: users\nCREATE TABLE users (id INT);\n\n"));
    }

    #[test]
    fn test_tables_appear_in_sorted_order() {
        let prompt = build_prompt(&store(&[("zeta", "z"), ("alpha", "a")]), "q");
        let alpha = prompt.find("Table: alpha").unwrap();
        let zeta = prompt.find("Table: zeta").unwrap();
        assert!(alpha < zeta);
    }
}
