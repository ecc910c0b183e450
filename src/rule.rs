//! A compiled rule together with the text it was built from.
use crate::error::VerityError;
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;
use verity_core::{Evaluatable, Evaluator, FunctionRegistry};

/// A rule ready to be evaluated against any number of documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    source: String,
    root: Evaluatable,
}

impl Rule {
    /// Compiles `source` using the built-in functions.
    pub fn parse(source: &str) -> Result<Self, VerityError> {
        Self::parse_with(source, FunctionRegistry::shared())
    }

    /// Compiles `source`, binding function calls against `registry`.
    pub fn parse_with(source: &str, registry: &FunctionRegistry) -> Result<Self, VerityError> {
        let root = verity_dsl::compile_with(source, registry)?;
        Ok(Self {
            source: source.trim().to_string(),
            root,
        })
    }

    /// Wraps a tree built in code. The source is the tree rendered in rule syntax.
    pub fn from_ast(root: Evaluatable) -> Self {
        Self {
            source: root.to_string(),
            root,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Evaluatable {
        &self.root
    }

    pub fn into_root(self) -> Evaluatable {
        self.root
    }

    /// Evaluates the rule against one document.
    pub fn matches(&self, evaluator: &Evaluator, document: &JsonValue) -> bool {
        evaluator.evaluate(&self.root, document)
    }

    /// Evaluates the rule against each document, preserving order.
    pub fn matches_all(&self, evaluator: &Evaluator, documents: &[JsonValue]) -> Vec<bool> {
        evaluator.evaluate_batch(&self.root, documents)
    }
}

impl FromStr for Rule {
    type Err = VerityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
