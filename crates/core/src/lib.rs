//! # verity-core
//!
//! The evaluation engine for verity rules.
//!
//! - **value**: operands (literals, document paths, function calls)
//! - **ast**: combiners, logical operators and comparisons
//! - **converters**: fail-open coercion of operands to numbers, booleans, strings
//! - **functions**: the function registry and built-in functions
//! - **context**: per-evaluation state, including the path cache
//! - **evaluator**: the tree walk producing a single boolean
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use verity_core::{Evaluatable, Evaluator, Value};
//!
//! let rule = Evaluatable::all_of(vec![
//!     Evaluatable::greater_equals(Value::path("$.age"), Value::literal(18)),
//!     Evaluatable::not(Evaluatable::equals(Value::path("$.country"), Value::literal("US"))),
//! ]);
//! assert!(Evaluator::new().evaluate(&rule, &json!({ "age": 30 })));
//! ```

// Re-export foundation crates
pub use verity_jpath as jpath;
pub use verity_traits as traits;

pub mod ast;
pub mod config;
pub mod context;
pub mod converters;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod value;

pub use ast::Evaluatable;
pub use config::EngineConfig;
pub use context::{EvaluationContext, EvaluationStats};
pub use error::FunctionError;
pub use evaluator::{Evaluator, EvaluatorBuilder, evaluate_in};
pub use functions::{FunctionDef, FunctionImpl, FunctionRegistry, ParamKind, Signature};
pub use value::{FunctionCall, Literal, Value};

// Re-export platform abstraction traits
pub use traits::{CountingResolver, PathResolver, PointerResolver};
pub use jpath::JsonPathResolver;
