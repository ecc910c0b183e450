//! Defines the Abstract Syntax Tree (AST) for JSONPath expressions.

/// A single selection step applied to each node of the current match set.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// An object member (e.g., `.name` or `['first name']`).
    Key(String),
    /// An array element (e.g., `[0]`). Negative indexes count from the end.
    Index(i64),
    /// Every member of an object or element of an array (`.*` or `[*]`).
    Wildcard,
}

/// Represents a segment in a JSONPath.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Applies the selector to the current nodes (`.key`, `[0]`).
    Child(Selector),
    /// Applies the selector to the current nodes and all their descendants (`..key`).
    Descendant(Selector),
}

/// A parsed path rooted at the document (`$`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonPath {
    pub segments: Vec<Segment>,
}

impl JsonPath {
    /// A path is definite when it can select at most one node.
    pub fn is_definite(&self) -> bool {
        self.segments.iter().all(|segment| {
            matches!(
                segment,
                Segment::Child(Selector::Key(_)) | Segment::Child(Selector::Index(_))
            )
        })
    }
}
