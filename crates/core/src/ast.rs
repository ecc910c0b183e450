//! Defines the Abstract Syntax Tree (AST) for rules.
use crate::value::Value;
use std::fmt;

/// A node of a rule. The tree is strictly owned: every node belongs to its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluatable {
    /// True iff every child is true. Stops at the first false child.
    AndCombiner(Vec<Evaluatable>),
    /// True iff at least one child is true. Stops at the first true child.
    OrCombiner(Vec<Evaluatable>),
    /// Strict conjunction: both sides are always evaluated, left first.
    And {
        lhs: Box<Evaluatable>,
        rhs: Box<Evaluatable>,
    },
    /// Strict disjunction: both sides are always evaluated, left first.
    Or {
        lhs: Box<Evaluatable>,
        rhs: Box<Evaluatable>,
    },
    Not(Box<Evaluatable>),
    Equals { lhs: Value, rhs: Value },
    NotEquals { lhs: Value, rhs: Value },
    Greater { lhs: Value, rhs: Value },
    GreaterEquals { lhs: Value, rhs: Value },
    Lesser { lhs: Value, rhs: Value },
    LesserEquals { lhs: Value, rhs: Value },
    /// A bare operand used as a predicate, e.g. `$.active`.
    Value(Value),
}

impl Evaluatable {
    pub fn all_of(expressions: Vec<Evaluatable>) -> Self {
        Evaluatable::AndCombiner(expressions)
    }

    pub fn any_of(expressions: Vec<Evaluatable>) -> Self {
        Evaluatable::OrCombiner(expressions)
    }

    pub fn and(lhs: Evaluatable, rhs: Evaluatable) -> Self {
        Evaluatable::And {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn or(lhs: Evaluatable, rhs: Evaluatable) -> Self {
        Evaluatable::Or {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn not(operand: Evaluatable) -> Self {
        Evaluatable::Not(Box::new(operand))
    }

    pub fn equals(lhs: Value, rhs: Value) -> Self {
        Evaluatable::Equals { lhs, rhs }
    }

    pub fn not_equals(lhs: Value, rhs: Value) -> Self {
        Evaluatable::NotEquals { lhs, rhs }
    }

    pub fn greater(lhs: Value, rhs: Value) -> Self {
        Evaluatable::Greater { lhs, rhs }
    }

    pub fn greater_equals(lhs: Value, rhs: Value) -> Self {
        Evaluatable::GreaterEquals { lhs, rhs }
    }

    pub fn lesser(lhs: Value, rhs: Value) -> Self {
        Evaluatable::Lesser { lhs, rhs }
    }

    pub fn lesser_equals(lhs: Value, rhs: Value) -> Self {
        Evaluatable::LesserEquals { lhs, rhs }
    }

    pub fn value(value: Value) -> Self {
        Evaluatable::Value(value)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Evaluatable], op: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", op)?;
        }
        write!(f, "{}", child)?;
    }
    write!(f, ")")
}

/// Renders the node in rule syntax.
///
/// Empty combiners have no syntax of their own and render as the constant
/// they evaluate to.
impl fmt::Display for Evaluatable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluatable::AndCombiner(children) if children.is_empty() => write!(f, "true"),
            Evaluatable::OrCombiner(children) if children.is_empty() => write!(f, "false"),
            Evaluatable::AndCombiner(children) => write_joined(f, children, "&&"),
            Evaluatable::OrCombiner(children) => write_joined(f, children, "||"),
            Evaluatable::And { lhs, rhs } => write!(f, "({} and {})", lhs, rhs),
            Evaluatable::Or { lhs, rhs } => write!(f, "({} or {})", lhs, rhs),
            Evaluatable::Not(operand) => write!(f, "!({})", operand),
            Evaluatable::Equals { lhs, rhs } => write!(f, "{} == {}", lhs, rhs),
            Evaluatable::NotEquals { lhs, rhs } => write!(f, "{} != {}", lhs, rhs),
            Evaluatable::Greater { lhs, rhs } => write!(f, "{} > {}", lhs, rhs),
            Evaluatable::GreaterEquals { lhs, rhs } => write!(f, "{} >= {}", lhs, rhs),
            Evaluatable::Lesser { lhs, rhs } => write!(f, "{} < {}", lhs, rhs),
            Evaluatable::LesserEquals { lhs, rhs } => write!(f, "{} <= {}", lhs, rhs),
            Evaluatable::Value(value) => write!(f, "{}", value),
        }
    }
}
