//! A small, JSON-native path engine.
//!
//! This crate selects data from a `serde_json::Value` using JSONPath
//! expressions (`$.orders[0].id`, `$..price`, `$.items[*]`) and provides the
//! default `PathResolver` used by the verity rule engine.

pub mod ast;
pub mod engine;
pub mod error;
pub mod parser;
pub mod resolver;

// --- Public API ---
pub use ast::{JsonPath, Segment, Selector};
pub use engine::{query, query_str, select};
pub use error::JPathError;
pub use parser::{json_path, parse_path};
pub use resolver::{DEFAULT_COMPILED_CAPACITY, JsonPathResolver};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_and_select_simple_path() {
        let path = parse_path("$.customer.name").unwrap();
        let data = json!({ "customer": { "name": "ACME" } });
        let result = select(&path, &data);
        assert_eq!(result, vec![&json!("ACME")]);
    }

    #[test]
    fn test_parse_and_select_path_with_index() {
        let path = parse_path("$.orders[1].id").unwrap();
        let data = json!({ "orders": [ { "id": "A" }, { "id": "B" } ] });
        assert_eq!(query(&path, &data), Some(json!("B")));
    }

    #[test]
    fn test_select_through_scalar_is_empty() {
        let path = parse_path("$.name.first").unwrap();
        let data = json!({ "name": "ACME" });
        assert!(select(&path, &data).is_empty());
    }
}
