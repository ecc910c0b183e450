pub mod resolver;

pub use resolver::{CountingResolver, PathResolver, PointerResolver};
