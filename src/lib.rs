//! # verity
//!
//! Declarative boolean rules evaluated against JSON documents.
//!
//! Rules are written in a small text syntax (or built in code as an
//! [`Evaluatable`] tree) and answer yes/no questions about a document:
//!
//! ```
//! use serde_json::json;
//! use verity::{Evaluator, Rule};
//!
//! let rule: Rule = "$.age >= 18 && !($.country == 'US')".parse().unwrap();
//! let evaluator = Evaluator::new();
//! assert!(rule.matches(&evaluator, &json!({ "age": 30, "tags": ["x"] })));
//! assert!(!rule.matches(&evaluator, &json!({ "age": 30, "country": "US" })));
//! ```
//!
//! Missing or mistyped data never fails an evaluation: numeric operands
//! default to `0`, boolean operands to `false`, and missing paths compare
//! equal to `null`.

pub mod documents;
pub mod error;
pub mod rule;

// Re-export workspace crates
pub use verity_core as engine;
pub use verity_dsl as dsl;
pub use verity_jpath as jpath;
pub use verity_traits as traits;

pub use documents::{parse_documents, read_documents, read_stdin_documents};
pub use error::VerityError;
pub use rule::Rule;

// Re-export commonly used types from the engine
pub use verity_core::{
    EngineConfig, Evaluatable, EvaluationContext, EvaluationStats, Evaluator, EvaluatorBuilder,
    FunctionError, FunctionRegistry, JsonPathResolver, Literal, ParamKind, PathResolver, Signature,
    Value,
};
