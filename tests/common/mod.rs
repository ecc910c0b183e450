pub mod fixtures;

use serde_json::Value as JsonValue;
use std::sync::Arc;
use verity::traits::CountingResolver;
use verity::{Evaluator, JsonPathResolver, Rule};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Initializes logging once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An evaluator whose resolver calls can be counted.
pub fn counting_evaluator() -> (Arc<CountingResolver<JsonPathResolver>>, Evaluator) {
    let resolver = Arc::new(CountingResolver::new(JsonPathResolver::new()));
    let evaluator = Evaluator::builder().resolver(resolver.clone()).build();
    (resolver, evaluator)
}

/// Compiles `source` and evaluates it against `document` with a default evaluator.
pub fn check(source: &str, document: &JsonValue) -> Result<bool, Box<dyn std::error::Error>> {
    let rule = Rule::parse(source)?;
    Ok(rule.matches(&Evaluator::new(), document))
}
