use thiserror::Error;
use verity_core::FunctionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DslError {
    #[error("Rule parse error in '{0}': {1}")]
    RuleParse(String, String),

    #[error("Invalid function call: {0}")]
    Function(#[from] FunctionError),
}
