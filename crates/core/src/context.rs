//! Per-evaluation state.
use crate::config::EngineConfig;
use crate::evaluator::Evaluator;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Counters describing the path lookups made during one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Paths handed to the resolver (cache misses).
    pub path_lookups: usize,
    /// Path references answered from the cache.
    pub cache_hits: usize,
}

/// A container for all state needed while one rule is evaluated against one document.
///
/// `'a` is the lifetime of the document and of the evaluator that created the
/// context. A context is created right before the root node is interpreted and
/// dropped once the result is known; it is never shared between evaluations.
pub struct EvaluationContext<'a> {
    document: &'a JsonValue,
    evaluator: &'a Evaluator,
    /// First resolution of a path wins, absences included.
    path_cache: HashMap<String, Option<JsonValue>>,
    stats: EvaluationStats,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(document: &'a JsonValue, evaluator: &'a Evaluator) -> Self {
        Self {
            document,
            evaluator,
            path_cache: HashMap::with_capacity(evaluator.config().cache_capacity),
            stats: EvaluationStats::default(),
        }
    }

    pub fn document(&self) -> &'a JsonValue {
        self.document
    }

    pub fn evaluator(&self) -> &'a Evaluator {
        self.evaluator
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.evaluator.config()
    }

    pub fn stats(&self) -> EvaluationStats {
        self.stats
    }

    /// Number of distinct paths resolved so far.
    pub fn cached_paths(&self) -> usize {
        self.path_cache.len()
    }

    /// Resolves `path` against the document, consulting the cache first.
    pub fn resolve_path(&mut self, path: &str) -> Option<&JsonValue> {
        if self.path_cache.contains_key(path) {
            self.stats.cache_hits += 1;
            log::trace!("Path cache hit for '{}'", path);
        } else {
            let resolved = self.evaluator.resolver().resolve(self.document, path);
            self.stats.path_lookups += 1;
            log::trace!(
                "Resolved '{}' via {} -> {:?}",
                path,
                self.evaluator.resolver().name(),
                resolved
            );
            self.path_cache.insert(path.to_string(), resolved);
        }
        self.path_cache.get(path).and_then(Option::as_ref)
    }
}
