//! The default `PathResolver` used by the rule engine.
use super::ast::JsonPath;
use super::engine::query;
use super::parser::parse_path;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};
use verity_traits::PathResolver;

/// Default number of compiled paths kept by a `JsonPathResolver`.
pub const DEFAULT_COMPILED_CAPACITY: usize = 1024;

/// Compiled paths, evicted oldest-first once `capacity` is reached.
#[derive(Debug, Default)]
struct CompiledPaths {
    entries: HashMap<String, Option<Arc<JsonPath>>>,
    order: VecDeque<String>,
}

impl CompiledPaths {
    fn insert(&mut self, path: &str, compiled: Option<Arc<JsonPath>>, capacity: usize) {
        if capacity == 0 || self.entries.contains_key(path) {
            return;
        }
        while self.entries.len() >= capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.entries.insert(path.to_string(), compiled);
        self.order.push_back(path.to_string());
    }
}

/// Resolves JSONPath (`$.a.b`) and, when enabled, JSON Pointer (`/a/b`) paths.
///
/// Compiled paths are memoized so that a rule evaluated against many documents
/// parses each of its paths once. The memo holds at most `capacity` entries
/// (0 disables it) and only ever stores compiled paths, never resolved values,
/// so it has no effect on evaluation results.
#[derive(Debug)]
pub struct JsonPathResolver {
    json_pointers: bool,
    capacity: usize,
    compiled: RwLock<CompiledPaths>,
}

impl Default for JsonPathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonPathResolver {
    pub fn new() -> Self {
        Self {
            json_pointers: true,
            capacity: DEFAULT_COMPILED_CAPACITY,
            compiled: RwLock::new(CompiledPaths::default()),
        }
    }

    /// Enables or disables JSON Pointer paths.
    pub fn with_json_pointers(mut self, enabled: bool) -> Self {
        self.json_pointers = enabled;
        self
    }

    /// Sets how many compiled paths are kept.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Number of compiled paths currently memoized.
    pub fn compiled_len(&self) -> usize {
        self.compiled.read().map(|c| c.entries.len()).unwrap_or(0)
    }

    fn compile(&self, path: &str) -> Option<Arc<JsonPath>> {
        if let Ok(cache) = self.compiled.read()
            && let Some(entry) = cache.entries.get(path)
        {
            return entry.clone();
        }

        let compiled = match parse_path(path) {
            Ok(parsed) => Some(Arc::new(parsed)),
            Err(e) => {
                log::warn!("Unresolvable path, treating as absent: {}", e);
                None
            }
        };
        if let Ok(mut cache) = self.compiled.write() {
            cache.insert(path, compiled.clone(), self.capacity);
        }
        compiled
    }
}

impl PathResolver for JsonPathResolver {
    fn resolve(&self, document: &Value, path: &str) -> Option<Value> {
        if path.starts_with('$') {
            let compiled = self.compile(path)?;
            query(&compiled, document)
        } else if self.json_pointers && (path.is_empty() || path.starts_with('/')) {
            document.pointer(path).cloned()
        } else {
            log::warn!("Unsupported path syntax, treating as absent: '{}'", path);
            None
        }
    }

    fn name(&self) -> &'static str {
        "jsonpath"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolves_jsonpath_and_pointer() {
        let doc = json!({ "user": { "age": 30, "tags": ["x", "y"] } });
        let resolver = JsonPathResolver::new();
        assert_eq!(resolver.resolve(&doc, "$.user.age"), Some(json!(30)));
        assert_eq!(resolver.resolve(&doc, "/user/tags/1"), Some(json!("y")));
        assert_eq!(resolver.resolve(&doc, "$.user.country"), None);
    }

    #[test]
    fn test_pointers_can_be_disabled() {
        let doc = json!({ "a": 1 });
        let resolver = JsonPathResolver::new().with_json_pointers(false);
        assert_eq!(resolver.resolve(&doc, "/a"), None);
        assert_eq!(resolver.resolve(&doc, "$.a"), Some(json!(1)));
    }

    #[test]
    fn test_malformed_path_is_absent_and_memoized() {
        let doc = json!({ "a": 1 });
        let resolver = JsonPathResolver::new();
        assert_eq!(resolver.resolve(&doc, "$.a["), None);
        assert_eq!(resolver.resolve(&doc, "$.a["), None);
        assert_eq!(resolver.resolve(&doc, "$.a"), Some(json!(1)));
        assert_eq!(resolver.compiled_len(), 2);
        assert_eq!(resolver.resolve(&doc, "a"), None);
    }

    #[test]
    fn test_memo_is_bounded_and_evicts_oldest() {
        let doc = json!({ "k9999": true });
        let resolver = JsonPathResolver::new().with_capacity(64);
        for i in 0..10_000 {
            resolver.resolve(&doc, &format!("$.k{}", i));
        }
        assert_eq!(resolver.compiled_len(), 64);
        assert_eq!(resolver.resolve(&doc, "$.k9999"), Some(json!(true)));
        assert_eq!(resolver.resolve(&doc, "$.k0"), None);
        assert_eq!(resolver.compiled_len(), 64);
    }

    #[test]
    fn test_zero_capacity_disables_memo() {
        let doc = json!({ "a": 1 });
        let resolver = JsonPathResolver::new().with_capacity(0);
        assert_eq!(resolver.resolve(&doc, "$.a"), Some(json!(1)));
        assert_eq!(resolver.compiled_len(), 0);
    }
}
