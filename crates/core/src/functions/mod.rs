//! Defines the registry for rule functions and the signatures they are checked against.
use crate::context::EvaluationContext;
use crate::error::FunctionError;
use crate::value::{Literal, Value};
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

mod builtins;

/// The signature for a function implementation.
///
/// Arguments arrive unresolved; the implementation coerces them through
/// `crate::converters` with its own defaults.
pub type FunctionImpl = fn(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value;

/// The kind of value a parameter expects or a function returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Any,
    Number,
    String,
    Boolean,
    Array,
}

impl ParamKind {
    /// Checks whether `arg` may be passed where this kind is expected.
    ///
    /// Paths are only known at evaluation time and are always accepted, as is
    /// a `null` literal, which resolves to the parameter's default.
    pub fn accepts(self, arg: &Value) -> bool {
        if self == ParamKind::Any {
            return true;
        }
        match arg {
            Value::Path(_) => true,
            Value::Function(call) => call.returns() == ParamKind::Any || call.returns() == self,
            Value::Literal(literal) => matches!(
                (self, literal),
                (_, Literal::Null)
                    | (ParamKind::Number, Literal::Number(_))
                    | (ParamKind::String, Literal::String(_))
                    | (ParamKind::Boolean, Literal::Bool(_))
            ) || (self == ParamKind::Array && literal.as_array().is_some()),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::Any => "any",
            ParamKind::Number => "number",
            ParamKind::String => "string",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
        };
        write!(f, "{}", name)
    }
}

/// The ordered parameter kinds and the return kind of a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub params: Vec<ParamKind>,
    pub returns: ParamKind,
}

impl Signature {
    pub fn new(params: Vec<ParamKind>, returns: ParamKind) -> Self {
        Self { params, returns }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) -> {}", self.params.iter().join(", "), self.returns)
    }
}

/// A registered function.
#[derive(Clone)]
pub struct FunctionDef {
    pub name: String,
    pub signature: Signature,
    pub implementation: FunctionImpl,
}

impl fmt::Debug for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDef")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish()
    }
}

/// A registry holding all functions that rules may call.
///
/// Functions are looked up when a call is built, never during evaluation.
/// Once built, a registry is read-only and can be shared between threads.
#[derive(Debug)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionDef>,
}

static SHARED: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::default);

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        && !name.ends_with('.')
}

impl FunctionRegistry {
    /// Creates a new, empty function registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// The process-wide registry of built-in functions, built on first use.
    pub fn shared() -> &'static FunctionRegistry {
        &SHARED
    }

    /// Registers a new function.
    ///
    /// Registering the exact same entry twice is a no-op. Reusing a name with a
    /// different signature or a different implementation is rejected.
    pub fn register(
        &mut self,
        name: &str,
        signature: Signature,
        implementation: FunctionImpl,
    ) -> Result<(), FunctionError> {
        if !is_valid_name(name) {
            return Err(FunctionError::InvalidName(name.to_string()));
        }
        if let Some(existing) = self.functions.get(name) {
            if existing.signature != signature {
                return Err(FunctionError::IncompatibleSignature {
                    function: name.to_string(),
                    existing: existing.signature.clone(),
                    attempted: signature,
                });
            }
            if !std::ptr::fn_addr_eq(existing.implementation, implementation) {
                return Err(FunctionError::DuplicateFunction(name.to_string()));
            }
            return Ok(());
        }

        log::debug!("Registering function {}{}", name, signature);
        self.functions.insert(
            name.to_string(),
            FunctionDef {
                name: name.to_string(),
                signature,
                implementation,
            },
        );
        Ok(())
    }

    /// Finds a function by name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).sorted().collect()
    }

    /// Builds a call to `name`, validating arity and argument kinds.
    pub fn bind(&self, name: &str, args: Vec<Value>) -> Result<Value, FunctionError> {
        let def = self
            .get(name)
            .ok_or_else(|| FunctionError::UnknownFunction(name.to_string()))?;

        if args.len() != def.signature.params.len() {
            return Err(FunctionError::ArityMismatch {
                function: name.to_string(),
                expected: def.signature.params.len(),
                actual: args.len(),
            });
        }
        for (position, (kind, arg)) in def.signature.params.iter().zip(&args).enumerate() {
            if !kind.accepts(arg) {
                return Err(FunctionError::ArgumentKind {
                    function: name.to_string(),
                    position: position + 1,
                    expected: *kind,
                    found: arg.describe(),
                });
            }
        }

        Ok(Value::Function(crate::value::FunctionCall::new(
            def.name.clone(),
            args,
            def.signature.returns,
            def.implementation,
        )))
    }
}

impl Default for FunctionRegistry {
    /// Creates a new registry populated with all built-in functions.
    fn default() -> Self {
        let mut registry = Self::new();
        builtins::register_all(&mut registry);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::numeric_value;
    use crate::evaluator::Evaluator;
    use serde_json::json;

    fn double(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
        let n = args.first().map(|a| numeric_value(ctx, a, 0.0)).unwrap_or(0.0);
        Value::literal(n * 2.0)
    }

    fn triple(ctx: &mut EvaluationContext<'_>, args: &[Value]) -> Value {
        let n = args.first().map(|a| numeric_value(ctx, a, 0.0)).unwrap_or(0.0);
        Value::literal(n * 3.0)
    }

    fn unary_number() -> Signature {
        Signature::new(vec![ParamKind::Number], ParamKind::Number)
    }

    #[test]
    fn test_register_and_invoke_custom_function() {
        let mut registry = FunctionRegistry::new();
        registry.register("double", unary_number(), double).unwrap();

        let call = registry.bind("double", vec![Value::path("$.n")]).unwrap();
        let evaluator = Evaluator::new();
        let doc = json!({ "n": 21 });
        let mut ctx = EvaluationContext::new(&doc, &evaluator);
        assert_eq!(numeric_value(&mut ctx, &call, 0.0), 42.0);
    }

    #[test]
    fn test_identical_registration_is_idempotent() {
        let mut registry = FunctionRegistry::new();
        registry.register("double", unary_number(), double).unwrap();
        registry.register("double", unary_number(), double).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_incompatible_signature_is_rejected() {
        let mut registry = FunctionRegistry::new();
        registry.register("double", unary_number(), double).unwrap();
        let err = registry
            .register(
                "double",
                Signature::new(vec![ParamKind::Number, ParamKind::Number], ParamKind::Number),
                double,
            )
            .unwrap_err();
        assert!(matches!(err, FunctionError::IncompatibleSignature { .. }));
        assert_eq!(
            err.to_string(),
            "Function 'double' is already registered as (number) -> number, cannot register as (number, number) -> number"
        );
    }

    #[test]
    fn test_same_signature_different_implementation_is_rejected() {
        let mut registry = FunctionRegistry::new();
        registry.register("double", unary_number(), double).unwrap();
        assert_eq!(
            registry.register("double", unary_number(), triple),
            Err(FunctionError::DuplicateFunction("double".into()))
        );
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        let mut registry = FunctionRegistry::new();
        for name in ["", "1abc", "a b", "str.", "a-b"] {
            assert_eq!(
                registry.register(name, unary_number(), double),
                Err(FunctionError::InvalidName(name.into()))
            );
        }
    }

    #[test]
    fn test_bind_checks_name_arity_and_kinds() {
        let registry = FunctionRegistry::default();
        assert_eq!(
            registry.bind("nope", vec![]),
            Err(FunctionError::UnknownFunction("nope".into()))
        );
        assert!(matches!(
            registry.bind("abs", vec![]),
            Err(FunctionError::ArityMismatch { expected: 1, actual: 0, .. })
        ));
        assert!(matches!(
            registry.bind("abs", vec![Value::literal("x")]),
            Err(FunctionError::ArgumentKind { position: 1, expected: ParamKind::Number, .. })
        ));
        let upper = registry.bind("str.upper", vec![Value::literal("x")]).unwrap();
        assert!(matches!(
            registry.bind("abs", vec![upper]),
            Err(FunctionError::ArgumentKind { .. })
        ));
        assert!(registry.bind("abs", vec![Value::null()]).is_ok());
        assert!(registry.bind("abs", vec![Value::path("$.x")]).is_ok());
    }

    #[test]
    fn test_shared_registry_has_builtins() {
        let shared = FunctionRegistry::shared();
        assert!(shared.contains("abs"));
        assert!(shared.contains("str.len"));
        assert!(!shared.contains("ABS"));
        assert_eq!(shared.names().first(), Some(&"abs"));
    }

    #[test]
    fn test_signature_display() {
        assert_eq!(
            Signature::new(vec![ParamKind::String, ParamKind::Any], ParamKind::Boolean).to_string(),
            "(string, any) -> boolean"
        );
    }
}
