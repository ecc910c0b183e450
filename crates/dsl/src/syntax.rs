//! The unbound syntax tree produced by the parser.
//!
//! Function calls are still plain names here; `compile` binds them against a
//! `FunctionRegistry` to produce an `Evaluatable`.
use verity_core::Literal;

#[derive(Debug, Clone, PartialEq)]
pub enum OperandSyntax {
    Literal(Literal),
    Path(String),
    Call {
        name: String,
        args: Vec<OperandSyntax>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equals,
    NotEquals,
    Greater,
    GreaterEquals,
    Lesser,
    LesserEquals,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuleSyntax {
    /// `a || b || c`
    AnyOf(Vec<RuleSyntax>),
    /// `a && b && c`
    AllOf(Vec<RuleSyntax>),
    /// `a and b`
    And(Box<RuleSyntax>, Box<RuleSyntax>),
    /// `a or b`
    Or(Box<RuleSyntax>, Box<RuleSyntax>),
    Not(Box<RuleSyntax>),
    Compare {
        op: CompareOp,
        lhs: OperandSyntax,
        rhs: OperandSyntax,
    },
    Operand(OperandSyntax),
}
