//! A text syntax for verity rules.
//!
//! ```
//! use serde_json::json;
//! use verity_core::Evaluator;
//!
//! let rule = verity_dsl::compile("$.age >= 18 && str.len($.name) > 0").unwrap();
//! assert!(Evaluator::new().evaluate(&rule, &json!({ "age": 21, "name": "Ada" })));
//! ```
//!
//! `&&` and `||` build short-circuiting combiners; `and` and `or` build strict
//! binary operators that always evaluate both sides.

pub mod compile;
pub mod error;
mod parser;
pub mod syntax;

// --- Public API ---
pub use compile::{compile, compile_with, lower};
pub use error::DslError;
pub use parser::parse_rule;
pub use syntax::{CompareOp, OperandSyntax, RuleSyntax};
