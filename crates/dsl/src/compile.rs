//! Binds a parsed rule to a function registry, producing an `Evaluatable`.
use crate::error::DslError;
use crate::parser::parse_rule;
use crate::syntax::{CompareOp, OperandSyntax, RuleSyntax};
use verity_core::{Evaluatable, FunctionError, FunctionRegistry, Value};

/// Parses `source` and binds its function calls against the shared built-in registry.
pub fn compile(source: &str) -> Result<Evaluatable, DslError> {
    compile_with(source, FunctionRegistry::shared())
}

/// Parses `source` and binds its function calls against `registry`.
pub fn compile_with(source: &str, registry: &FunctionRegistry) -> Result<Evaluatable, DslError> {
    let syntax = parse_rule(source)?;
    let rule = lower(syntax, registry)?;
    log::debug!("Compiled rule: {}", rule);
    Ok(rule)
}

/// Converts an unbound syntax tree into an `Evaluatable`.
pub fn lower(syntax: RuleSyntax, registry: &FunctionRegistry) -> Result<Evaluatable, FunctionError> {
    let lower_all = |items: Vec<RuleSyntax>| {
        items
            .into_iter()
            .map(|item| lower(item, registry))
            .collect::<Result<Vec<_>, _>>()
    };

    Ok(match syntax {
        RuleSyntax::AnyOf(items) => Evaluatable::any_of(lower_all(items)?),
        RuleSyntax::AllOf(items) => Evaluatable::all_of(lower_all(items)?),
        RuleSyntax::And(lhs, rhs) => {
            Evaluatable::and(lower(*lhs, registry)?, lower(*rhs, registry)?)
        }
        RuleSyntax::Or(lhs, rhs) => Evaluatable::or(lower(*lhs, registry)?, lower(*rhs, registry)?),
        RuleSyntax::Not(operand) => Evaluatable::not(lower(*operand, registry)?),
        RuleSyntax::Compare { op, lhs, rhs } => {
            let lhs = lower_operand(lhs, registry)?;
            let rhs = lower_operand(rhs, registry)?;
            match op {
                CompareOp::Equals => Evaluatable::equals(lhs, rhs),
                CompareOp::NotEquals => Evaluatable::not_equals(lhs, rhs),
                CompareOp::Greater => Evaluatable::greater(lhs, rhs),
                CompareOp::GreaterEquals => Evaluatable::greater_equals(lhs, rhs),
                CompareOp::Lesser => Evaluatable::lesser(lhs, rhs),
                CompareOp::LesserEquals => Evaluatable::lesser_equals(lhs, rhs),
            }
        }
        RuleSyntax::Operand(operand) => Evaluatable::value(lower_operand(operand, registry)?),
    })
}

fn lower_operand(operand: OperandSyntax, registry: &FunctionRegistry) -> Result<Value, FunctionError> {
    match operand {
        OperandSyntax::Literal(literal) => Ok(Value::Literal(literal)),
        OperandSyntax::Path(path) => Ok(Value::Path(path)),
        OperandSyntax::Call { name, args } => {
            let args = args
                .into_iter()
                .map(|arg| lower_operand(arg, registry))
                .collect::<Result<Vec<_>, _>>()?;
            registry.bind(&name, args)
        }
    }
}
