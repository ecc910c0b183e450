//! The operands a rule can reference: literals, document paths and function calls.

use crate::context::EvaluationContext;
use crate::functions::{FunctionImpl, ParamKind};
use serde_json::Value as JsonValue;
use std::fmt;

/// A constant operand.
///
/// Numbers are held as `f64` so that `5` and `5.0` are the same literal.
/// Arrays and objects are kept as JSON nodes.
#[derive(Debug, Clone)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Node(JsonValue),
}

impl Literal {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            Literal::Node(node) => node.as_array(),
            _ => None,
        }
    }

    /// Name of the literal's kind, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Bool(_) => "boolean",
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
            Literal::Node(JsonValue::Array(_)) => "array",
            Literal::Node(_) => "object",
        }
    }
}

/// Value equality: numbers compare as `f64`, structured nodes compare
/// element-wise with the same numeric canonicalisation. There is no
/// cross-type coercion, so `"5"` never equals `5`.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Null, Literal::Null) => true,
            (Literal::Bool(a), Literal::Bool(b)) => a == b,
            (Literal::Number(a), Literal::Number(b)) => a == b,
            (Literal::String(a), Literal::String(b)) => a == b,
            (Literal::Node(a), Literal::Node(b)) => json_eq(a, b),
            _ => false,
        }
    }
}

/// Structural JSON equality with numbers compared as `f64`.
pub fn json_eq(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Number(x), JsonValue::Number(y)) => x.as_f64() == y.as_f64(),
        (JsonValue::Array(xs), JsonValue::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_eq(x, y))
        }
        (JsonValue::Object(xs), JsonValue::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| json_eq(x, y)))
        }
        _ => a == b,
    }
}

impl From<JsonValue> for Literal {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Literal::Null,
            JsonValue::Bool(b) => Literal::Bool(b),
            JsonValue::Number(n) => Literal::Number(n.as_f64().unwrap_or_default()),
            JsonValue::String(s) => Literal::String(s),
            node => Literal::Node(node),
        }
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Number(n as f64)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Number(f64::from(n))
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write_quoted(f, s),
            Literal::Node(node) => write!(f, "{}", node),
        }
    }
}

/// Quotes `s` as a rule-syntax string literal, preferring single quotes.
///
/// A backslash escapes the next character.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{}", quote)?;
    for c in s.chars() {
        if c == quote || c == '\\' {
            write!(f, "\\")?;
        }
        write!(f, "{}", c)?;
    }
    write!(f, "{}", quote)
}

/// A call to a registered function, bound to its implementation when built.
///
/// Instances are only created through `FunctionRegistry::bind`, which checks
/// the arguments against the function's signature.
#[derive(Clone)]
pub struct FunctionCall {
    name: String,
    args: Vec<Value>,
    returns: ParamKind,
    implementation: FunctionImpl,
}

impl FunctionCall {
    pub(crate) fn new(
        name: String,
        args: Vec<Value>,
        returns: ParamKind,
        implementation: FunctionImpl,
    ) -> Self {
        Self {
            name,
            args,
            returns,
            implementation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The declared return kind of the bound function.
    pub fn returns(&self) -> ParamKind {
        self.returns
    }

    /// Runs the bound function with its unresolved arguments.
    pub fn invoke(&self, ctx: &mut EvaluationContext<'_>) -> Value {
        (self.implementation)(ctx, &self.args)
    }
}

impl fmt::Debug for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionCall")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("returns", &self.returns)
            .finish()
    }
}

impl PartialEq for FunctionCall {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

/// An operand of a comparison or function call.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Literal(Literal),
    /// A JSONPath (`$.a.b`) or JSON Pointer (`/a/b`) into the document.
    Path(String),
    Function(FunctionCall),
}

impl Value {
    pub fn literal(literal: impl Into<Literal>) -> Self {
        Value::Literal(literal.into())
    }

    pub fn null() -> Self {
        Value::Literal(Literal::Null)
    }

    pub fn path(path: impl Into<String>) -> Self {
        Value::Path(path.into())
    }

    /// Describes what kind of operand this is, as used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::Literal(literal) => format!("{} literal {}", literal.kind_name(), literal),
            Value::Path(path) => format!("path {}", path),
            Value::Function(call) => format!("call to {} returning {}", call.name, call.returns),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(literal) => write!(f, "{}", literal),
            Value::Path(path) => write!(f, "{}", path),
            Value::Function(call) => {
                write!(f, "{}(", call.name)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
