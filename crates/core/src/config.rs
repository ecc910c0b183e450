//! Engine-wide, read-only configuration.
use serde::{Deserialize, Serialize};
use verity_jpath::DEFAULT_COMPILED_CAPACITY;

/// Settings shared by every evaluation an `Evaluator` performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial capacity of the per-evaluation path cache.
    pub cache_capacity: usize,
    /// Accept RFC 6901 JSON Pointers (`/a/b`) as path references.
    pub json_pointer_paths: bool,
    /// Compiled JSONPath expressions kept by the default resolver (0 disables the memo).
    pub compiled_path_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 128,
            json_pointer_paths: true,
            compiled_path_capacity: DEFAULT_COMPILED_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
