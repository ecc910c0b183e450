//! Construction-time errors for function registration and binding.
//!
//! Evaluation itself never fails: absent data degrades to operator defaults.

use crate::functions::{ParamKind, Signature};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Invalid function name '{0}'")]
    InvalidName(String),

    #[error("Function '{function}' expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Function '{function}' argument {position} must be {expected}, got {found}")]
    ArgumentKind {
        function: String,
        position: usize,
        expected: ParamKind,
        found: String,
    },

    #[error("Function '{0}' is already registered with a different implementation")]
    DuplicateFunction(String),

    #[error("Function '{function}' is already registered as {existing}, cannot register as {attempted}")]
    IncompatibleSignature {
        function: String,
        existing: Signature,
        attempted: Signature,
    },
}
