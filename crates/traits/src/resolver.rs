//! PathResolver trait for abstracting document path queries.
//!
//! The rule engine never walks a JSON document itself. Every path reference is
//! handed to a resolver, which either returns the selected node or reports
//! that nothing matched.

use serde_json::Value;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A trait for selecting a sub-value from a parsed JSON document.
///
/// Implementations must never fail on a path that is merely absent, malformed
/// or of the wrong shape: those cases all map to `None`.
///
/// # Implementations
///
/// - `PointerResolver`: RFC 6901 JSON Pointer lookups (always available)
/// - `JsonPathResolver` (in `verity-jpath`): JSONPath plus JSON Pointer
///
/// # Example
///
/// ```ignore
/// let resolver: Box<dyn PathResolver> = Box::new(PointerResolver);
/// let age = resolver.resolve(&document, "/user/age");
/// ```
pub trait PathResolver: Send + Sync + Debug {
    /// Resolve `path` against `document`.
    ///
    /// # Returns
    ///
    /// The selected node, or `None` when the path selects nothing.
    fn resolve(&self, document: &Value, path: &str) -> Option<Value>;

    /// Returns a human-readable name for this resolver (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Resolves RFC 6901 JSON Pointers such as `/orders/0/id`.
///
/// The empty pointer selects the whole document.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerResolver;

impl PathResolver for PointerResolver {
    fn resolve(&self, document: &Value, path: &str) -> Option<Value> {
        if !path.is_empty() && !path.starts_with('/') {
            log::warn!("Ignoring path '{}': not a JSON pointer", path);
            return None;
        }
        document.pointer(path).cloned()
    }

    fn name(&self) -> &'static str {
        "json-pointer"
    }
}

/// Wraps another resolver and counts how often it is actually consulted.
///
/// Useful to observe the per-evaluation path cache: a cached path never
/// reaches the inner resolver a second time.
#[derive(Debug, Default)]
pub struct CountingResolver<R> {
    inner: R,
    calls: AtomicUsize,
}

impl<R: PathResolver> CountingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `resolve` calls forwarded so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: PathResolver> PathResolver for CountingResolver<R> {
    fn resolve(&self, document: &Value, path: &str) -> Option<Value> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.resolve(document, path)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
