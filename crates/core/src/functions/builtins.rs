//! Built-in function implementations.
//!
//! Arity and literal kinds are checked when a call is bound, so the
//! implementations only guard against absent data, which resolves to the
//! usual defaults (`0`, `""`, `false`).

use super::{FunctionRegistry, FunctionImpl, ParamKind, Signature};
use crate::context::EvaluationContext;
use crate::converters::{numeric_value, object_value, string_value};
use crate::value::{Literal, Value};
use serde_json::Value as JsonValue;

use super::ParamKind::{Any, Boolean, Number, String as Str};

const BUILTINS: &[(&str, &[ParamKind], ParamKind, FunctionImpl)] = &[
    // Math
    ("abs", &[Number], Number, abs),
    ("math.ceil", &[Number], Number, ceil),
    ("math.floor", &[Number], Number, floor),
    ("math.round", &[Number], Number, round),
    ("math.add", &[Number, Number], Number, add),
    ("math.sub", &[Number, Number], Number, sub),
    // String
    ("str.len", &[Str], Number, str_len),
    ("str.lower", &[Str], Str, str_lower),
    ("str.upper", &[Str], Str, str_upper),
    ("str.starts_with", &[Str, Str], Boolean, str_starts_with),
    ("str.ends_with", &[Str, Str], Boolean, str_ends_with),
    ("str.contains", &[Str, Str], Boolean, str_contains),
    // Array
    ("arr.len", &[Any], Number, arr_len),
    ("arr.contains", &[Any, Any], Boolean, arr_contains),
];

pub(super) fn register_all(registry: &mut FunctionRegistry) {
    for (name, params, returns, implementation) in BUILTINS {
        let signature = Signature::new(params.to_vec(), *returns);
        if let Err(e) = registry.register(name, signature, *implementation) {
            log::warn!("Skipping built-in function: {}", e);
        }
    }
}

// --- Helpers ---

fn number_arg(ctx: &mut EvaluationContext<'_>, args: &[Value], index: usize) -> f64 {
    args.get(index)
        .map(|arg| numeric_value(ctx, arg, 0.0))
        .unwrap_or(0.0)
}

fn string_arg(ctx: &mut EvaluationContext<'_>, args: &[Value], index: usize) -> String {
    args.get(index)
        .map(|arg| string_value(ctx, arg, ""))
        .unwrap_or_default()
}

fn object_arg(ctx: &mut EvaluationContext<'_>, args: &[Value], index: usize) -> Literal {
    args.get(index)
        .map(|arg| object_value(ctx, arg))
        .unwrap_or(Literal::Null)
}

// --- Math ---

fn abs(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    Value::literal(number_arg(ctx, args, 0).abs())
}

fn ceil(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    Value::literal(number_arg(ctx, args, 0).ceil())
}

fn floor(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    Value::literal(number_arg(ctx, args, 0).floor())
}

fn round(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    Value::literal(number_arg(ctx, args, 0).round())
}

fn add(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    let lhs = number_arg(ctx, args, 0);
    let rhs = number_arg(ctx, args, 1);
    Value::literal(lhs + rhs)
}

fn sub(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    let lhs = number_arg(ctx, args, 0);
    let rhs = number_arg(ctx, args, 1);
    Value::literal(lhs - rhs)
}

// --- String ---

fn str_len(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    Value::literal(string_arg(ctx, args, 0).chars().count() as f64)
}

fn str_lower(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    Value::literal(string_arg(ctx, args, 0).to_lowercase())
}

fn str_upper(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    Value::literal(string_arg(ctx, args, 0).to_uppercase())
}

fn str_starts_with(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    let haystack = string_arg(ctx, args, 0);
    let needle = string_arg(ctx, args, 1);
    Value::literal(haystack.starts_with(&needle))
}

fn str_ends_with(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    let haystack = string_arg(ctx, args, 0);
    let needle = string_arg(ctx, args, 1);
    Value::literal(haystack.ends_with(&needle))
}

fn str_contains(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    let haystack = string_arg(ctx, args, 0);
    let needle = string_arg(ctx, args, 1);
    Value::literal(haystack.contains(&needle))
}

// --- Array ---

fn arr_len(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    let len = match object_arg(ctx, args, 0) {
        Literal::Node(JsonValue::Array(items)) => items.len(),
        Literal::Node(JsonValue::Object(map)) => map.len(),
        _ => 0,
    };
    Value::literal(len as f64)
}

fn arr_contains(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
    let haystack = object_arg(ctx, args, 0);
    let needle = object_arg(ctx, args, 1);
    let found = haystack
        .as_array()
        .is_some_and(|items| items.iter().any(|item| Literal::from(item.clone()) == needle));
    Value::literal(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::boolean_value;
    use crate::evaluator::Evaluator;
    use serde_json::json;

    fn eval_number(registry: &FunctionRegistry, doc: &JsonValue, name: &str, args: Vec<Value>) -> f64 {
        let evaluator = Evaluator::new();
        let mut ctx = EvaluationContext::new(doc, &evaluator);
        let call = registry.bind(name, args).unwrap();
        numeric_value(&mut ctx, &call, f64::MIN)
    }

    fn eval_bool(registry: &FunctionRegistry, doc: &JsonValue, name: &str, args: Vec<Value>) -> bool {
        let evaluator = Evaluator::new();
        let mut ctx = EvaluationContext::new(doc, &evaluator);
        let call = registry.bind(name, args).unwrap();
        boolean_value(&mut ctx, &call, false)
    }

    #[test]
    fn test_abs() {
        let registry = FunctionRegistry::default();
        let doc = json!({ "neg": -4 });
        assert_eq!(eval_number(&registry, &doc, "abs", vec![Value::literal(-3.5)]), 3.5);
        assert_eq!(eval_number(&registry, &doc, "abs", vec![Value::path("$.neg")]), 4.0);
        assert_eq!(eval_number(&registry, &doc, "abs", vec![Value::path("$.missing")]), 0.0);

        let neg_zero = eval_number(&registry, &doc, "abs", vec![Value::literal(-0.0)]);
        assert_eq!(neg_zero, 0.0);
        assert!(neg_zero.is_sign_positive());
        assert!(eval_number(&registry, &doc, "abs", vec![Value::literal(f64::NAN)]).is_nan());
    }

    #[test]
    fn test_rounding_and_arithmetic() {
        let registry = FunctionRegistry::default();
        let doc = json!({ "x": 2.5 });
        assert_eq!(eval_number(&registry, &doc, "math.ceil", vec![Value::literal(1.1)]), 2.0);
        assert_eq!(eval_number(&registry, &doc, "math.floor", vec![Value::literal(-1.1)]), -2.0);
        assert_eq!(eval_number(&registry, &doc, "math.round", vec![Value::path("$.x")]), 3.0);
        assert_eq!(
            eval_number(&registry, &doc, "math.add", vec![Value::path("$.x"), Value::literal(1)]),
            3.5
        );
        assert_eq!(
            eval_number(&registry, &doc, "math.sub", vec![Value::path("$.none"), Value::literal(1)]),
            -1.0
        );
    }

    #[test]
    fn test_string_functions() {
        let registry = FunctionRegistry::default();
        let doc = json!({ "name": "Ünïcode Name" });
        assert_eq!(eval_number(&registry, &doc, "str.len", vec![Value::path("$.name")]), 12.0);
        assert_eq!(eval_number(&registry, &doc, "str.len", vec![Value::path("$.nope")]), 0.0);
        assert!(eval_bool(
            &registry,
            &doc,
            "str.starts_with",
            vec![Value::path("$.name"), Value::literal("Ün")]
        ));
        assert!(eval_bool(
            &registry,
            &doc,
            "str.ends_with",
            vec![Value::path("$.name"), Value::literal("Name")]
        ));
        let lower = registry.bind("str.lower", vec![Value::path("$.name")]).unwrap();
        assert!(eval_bool(
            &registry,
            &doc,
            "str.contains",
            vec![lower, Value::literal("name")]
        ));
    }

    #[test]
    fn test_array_functions() {
        let registry = FunctionRegistry::default();
        let doc = json!({ "tags": ["x", "y"], "ids": [1, 2, 3], "obj": { "a": 1 } });
        assert_eq!(eval_number(&registry, &doc, "arr.len", vec![Value::path("$.tags")]), 2.0);
        assert_eq!(eval_number(&registry, &doc, "arr.len", vec![Value::path("$.obj")]), 1.0);
        assert_eq!(eval_number(&registry, &doc, "arr.len", vec![Value::path("$.none")]), 0.0);
        assert!(eval_bool(
            &registry,
            &doc,
            "arr.contains",
            vec![Value::path("$.ids"), Value::literal(2.0)]
        ));
        assert!(!eval_bool(
            &registry,
            &doc,
            "arr.contains",
            vec![Value::path("$.ids"), Value::literal("2")]
        ));
        assert!(!eval_bool(
            &registry,
            &doc,
            "arr.contains",
            vec![Value::path("$.none"), Value::literal(1)]
        ));
    }
}
