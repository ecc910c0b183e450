//! Resolution of operands to concrete values.
//!
//! Every converter takes a default and falls back to it whenever the operand
//! is absent or of the wrong JSON type. No converter can fail.

use crate::context::EvaluationContext;
use crate::value::{Literal, Value};
use serde_json::Value as JsonValue;

/// Resolves `value` to a number. Only JSON numbers qualify; no string parsing.
pub fn numeric_value(ctx: &mut EvaluationContext<'_>, value: &Value, default: f64) -> f64 {
    match value {
        Value::Literal(literal) => literal.as_f64().unwrap_or(default),
        Value::Path(path) => ctx
            .resolve_path(path)
            .and_then(JsonValue::as_f64)
            .unwrap_or(default),
        Value::Function(call) => {
            let result = call.invoke(ctx);
            numeric_value(ctx, &result, default)
        }
    }
}

/// Resolves `value` to a boolean. Only JSON booleans qualify; there is no truthiness.
pub fn boolean_value(ctx: &mut EvaluationContext<'_>, value: &Value, default: bool) -> bool {
    match value {
        Value::Literal(literal) => literal.as_bool().unwrap_or(default),
        Value::Path(path) => ctx
            .resolve_path(path)
            .and_then(JsonValue::as_bool)
            .unwrap_or(default),
        Value::Function(call) => {
            let result = call.invoke(ctx);
            boolean_value(ctx, &result, default)
        }
    }
}

/// Resolves `value` to a string. Only JSON strings qualify.
pub fn string_value(ctx: &mut EvaluationContext<'_>, value: &Value, default: &str) -> String {
    match value {
        Value::Literal(literal) => literal.as_str().unwrap_or(default).to_string(),
        Value::Path(path) => ctx
            .resolve_path(path)
            .and_then(JsonValue::as_str)
            .unwrap_or(default)
            .to_string(),
        Value::Function(call) => {
            let result = call.invoke(ctx);
            string_value(ctx, &result, default)
        }
    }
}

/// Resolves `value` to its most specific form, for value equality.
///
/// A missing path resolves to `Literal::Null`.
pub fn object_value(ctx: &mut EvaluationContext<'_>, value: &Value) -> Literal {
    match value {
        Value::Literal(literal) => literal.clone(),
        Value::Path(path) => ctx
            .resolve_path(path)
            .cloned()
            .map(Literal::from)
            .unwrap_or(Literal::Null),
        Value::Function(call) => {
            let result = call.invoke(ctx);
            object_value(ctx, &result)
        }
    }
}
