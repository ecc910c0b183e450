//! The evaluation engine for executing a rule AST against a JSON document.

use crate::ast::Evaluatable;
use crate::config::EngineConfig;
use crate::context::{EvaluationContext, EvaluationStats};
use crate::converters::{boolean_value, numeric_value, object_value};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use verity_jpath::JsonPathResolver;
use verity_traits::PathResolver;

/// Whether `Evaluator::evaluate_batch` fans out on rayon.
pub const PARALLEL_BATCHES: bool = cfg!(feature = "parallel");

/// Evaluates rules against documents.
///
/// An `Evaluator` holds only read-only state (configuration and the path
/// resolver) and can be shared freely between threads. Each call to
/// `evaluate` builds its own `EvaluationContext`.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: EngineConfig,
    resolver: Arc<dyn PathResolver>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Evaluator {
    /// Creates an evaluator with the default configuration and JSONPath resolver.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolver(&self) -> &dyn PathResolver {
        self.resolver.as_ref()
    }

    /// Evaluates `root` against `document`.
    pub fn evaluate(&self, root: &Evaluatable, document: &JsonValue) -> bool {
        self.evaluate_with_stats(root, document).0
    }

    /// Evaluates `root` against `document` and reports the path lookups it made.
    pub fn evaluate_with_stats(
        &self,
        root: &Evaluatable,
        document: &JsonValue,
    ) -> (bool, EvaluationStats) {
        let mut ctx = EvaluationContext::new(document, self);
        let result = evaluate_in(root, &mut ctx);
        let stats = ctx.stats();
        log::debug!(
            "Rule evaluated to {} ({} path lookups, {} cache hits)",
            result,
            stats.path_lookups,
            stats.cache_hits
        );
        (result, stats)
    }

    /// Evaluates one rule against many documents, each in its own context.
    ///
    /// Results are returned in the order of `documents`.
    pub fn evaluate_batch(&self, root: &Evaluatable, documents: &[JsonValue]) -> Vec<bool> {
        log::debug!(
            "Evaluating batch of {} documents (parallel: {})",
            documents.len(),
            PARALLEL_BATCHES
        );
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            documents
                .par_iter()
                .map(|document| self.evaluate(root, document))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            documents
                .iter()
                .map(|document| self.evaluate(root, document))
                .collect()
        }
    }
}

/// Interprets one node within an existing context.
pub fn evaluate_in(node: &Evaluatable, ctx: &mut EvaluationContext<'_>) -> bool {
    match node {
        Evaluatable::AndCombiner(expressions) => {
            expressions.iter().all(|expression| evaluate_in(expression, ctx))
        }
        Evaluatable::OrCombiner(expressions) => {
            expressions.iter().any(|expression| evaluate_in(expression, ctx))
        }
        // Both operands are always evaluated, unlike the combiners.
        Evaluatable::And { lhs, rhs } => {
            let lhs = evaluate_in(lhs, ctx);
            let rhs = evaluate_in(rhs, ctx);
            lhs && rhs
        }
        Evaluatable::Or { lhs, rhs } => {
            let lhs = evaluate_in(lhs, ctx);
            let rhs = evaluate_in(rhs, ctx);
            lhs || rhs
        }
        Evaluatable::Not(operand) => !evaluate_in(operand, ctx),
        Evaluatable::Equals { lhs, rhs } => {
            let lhs = object_value(ctx, lhs);
            let rhs = object_value(ctx, rhs);
            lhs == rhs
        }
        Evaluatable::NotEquals { lhs, rhs } => {
            let lhs = object_value(ctx, lhs);
            let rhs = object_value(ctx, rhs);
            lhs != rhs
        }
        Evaluatable::Greater { lhs, rhs } => {
            let (lhs, rhs) = numeric_operands(ctx, lhs, rhs);
            lhs > rhs
        }
        Evaluatable::GreaterEquals { lhs, rhs } => {
            let (lhs, rhs) = numeric_operands(ctx, lhs, rhs);
            lhs >= rhs
        }
        Evaluatable::Lesser { lhs, rhs } => {
            let (lhs, rhs) = numeric_operands(ctx, lhs, rhs);
            lhs < rhs
        }
        Evaluatable::LesserEquals { lhs, rhs } => {
            let (lhs, rhs) = numeric_operands(ctx, lhs, rhs);
            lhs <= rhs
        }
        Evaluatable::Value(value) => boolean_value(ctx, value, false),
    }
}

fn numeric_operands(
    ctx: &mut EvaluationContext<'_>,
    lhs: &crate::value::Value,
    rhs: &crate::value::Value,
) -> (f64, f64) {
    let lhs = numeric_value(ctx, lhs, 0.0);
    let rhs = numeric_value(ctx, rhs, 0.0);
    (lhs, rhs)
}

/// A builder for creating an `Evaluator`.
#[derive(Debug, Default)]
pub struct EvaluatorBuilder {
    config: EngineConfig,
    resolver: Option<Arc<dyn PathResolver>>,
}

impl EvaluatorBuilder {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses a custom resolver instead of the JSONPath resolver.
    ///
    /// When set, `EngineConfig::json_pointer_paths` is left to the resolver.
    pub fn resolver(mut self, resolver: Arc<dyn PathResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn build(self) -> Evaluator {
        let resolver = self.resolver.unwrap_or_else(|| {
            Arc::new(
                JsonPathResolver::new()
                    .with_json_pointers(self.config.json_pointer_paths)
                    .with_capacity(self.config.compiled_path_capacity),
            )
        });
        Evaluator {
            config: self.config,
            resolver,
        }
    }
}
