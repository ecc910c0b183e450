// src/error.rs
use thiserror::Error;
use verity_core::FunctionError;
use verity_dsl::DslError;

/// A comprehensive error type for building rules and loading their inputs.
#[derive(Error, Debug)]
pub enum VerityError {
    #[error("Rule is invalid: {0}")]
    Rule(#[from] DslError),

    #[error("Function registration failed: {0}")]
    Function(#[from] FunctionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON parsing error on line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
