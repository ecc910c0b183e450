//! Selection of JSON nodes by a parsed `JsonPath`.
use super::ast::{JsonPath, Segment, Selector};
use super::parser::parse_path;
use crate::error::JPathError;
use serde_json::Value;

/// Selects every node matched by `path`, in document order.
pub fn select<'a>(path: &JsonPath, root: &'a Value) -> Vec<&'a Value> {
    let mut current = vec![root];
    for segment in &path.segments {
        let mut next = Vec::new();
        match segment {
            Segment::Child(selector) => {
                for node in &current {
                    apply_selector(selector, node, &mut next);
                }
            }
            Segment::Descendant(selector) => {
                for node in &current {
                    let mut stack = vec![*node];
                    // Pre-order walk; children are pushed in reverse to keep document order.
                    while let Some(candidate) = stack.pop() {
                        apply_selector(selector, candidate, &mut next);
                        match candidate {
                            Value::Array(items) => stack.extend(items.iter().rev()),
                            Value::Object(map) => stack.extend(map.values().rev()),
                            _ => {}
                        }
                    }
                }
            }
        }
        if next.is_empty() {
            return next;
        }
        current = next;
    }
    current
}

fn apply_selector<'a>(selector: &Selector, node: &'a Value, out: &mut Vec<&'a Value>) {
    match (selector, node) {
        (Selector::Key(key), Value::Object(map)) => out.extend(map.get(key)),
        (Selector::Index(index), Value::Array(items)) => {
            let resolved = if *index < 0 {
                items.len().checked_sub(index.unsigned_abs() as usize)
            } else {
                Some(*index as usize)
            };
            out.extend(resolved.and_then(|i| items.get(i)));
        }
        (Selector::Wildcard, Value::Array(items)) => out.extend(items.iter()),
        (Selector::Wildcard, Value::Object(map)) => out.extend(map.values()),
        _ => {}
    }
}

/// Evaluates a compiled path the way a query result is reported to callers.
///
/// A definite path yields its single node, or `None` when it selects nothing.
/// An indefinite path always yields an array of every match (possibly empty).
pub fn query(path: &JsonPath, root: &Value) -> Option<Value> {
    let matches = select(path, root);
    if path.is_definite() {
        matches.first().map(|v| (*v).clone())
    } else {
        Some(Value::Array(matches.into_iter().cloned().collect()))
    }
}

/// Parses and evaluates `path` against `root` in one step.
pub fn query_str(path: &str, root: &Value) -> Result<Option<Value>, JPathError> {
    let compiled = parse_path(path)?;
    Ok(query(&compiled, root))
}
