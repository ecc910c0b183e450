//! A `nom`-based parser for the rule language.
//!
//! Precedence, loosest first: `||`, `&&`, `and`/`or`, `!`/`not`, comparisons.

use crate::error::DslError;
use crate::syntax::{CompareOp, OperandSyntax, RuleSyntax};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0, satisfy},
    combinator::{map, not, opt, recognize, value},
    error::{Error, ErrorKind},
    multi::{many0, separated_list0, separated_list1},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
};
use verity_core::Literal;
use verity_jpath::json_path;

// --- Main Public Parser ---

pub fn parse_rule(input: &str) -> Result<RuleSyntax, DslError> {
    match any_of(input.trim()) {
        Ok(("", rule)) => Ok(rule),
        Ok((rem, _)) => Err(DslError::RuleParse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(DslError::RuleParse(input.to_string(), e.to_string())),
    }
}

// --- Combinators & Helpers ---

fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

/// Matches `kw` only when it is not the prefix of a longer identifier.
fn keyword<'a>(
    kw: &'static str,
) -> impl Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    terminated(
        tag(kw),
        not(satisfy(|c: char| c.is_alphanumeric() || c == '_')),
    )
}

fn collapse(mut items: Vec<RuleSyntax>, wrap: fn(Vec<RuleSyntax>) -> RuleSyntax) -> RuleSyntax {
    if items.len() == 1 {
        items.remove(0)
    } else {
        wrap(items)
    }
}

// --- Rule Parsers (in order of precedence) ---

fn any_of(input: &str) -> IResult<&str, RuleSyntax> {
    map(separated_list1(ws(tag("||")), all_of), |items| {
        collapse(items, RuleSyntax::AnyOf)
    })
    .parse(input)
}

fn all_of(input: &str) -> IResult<&str, RuleSyntax> {
    map(separated_list1(ws(tag("&&")), strict), |items| {
        collapse(items, RuleSyntax::AllOf)
    })
    .parse(input)
}

#[derive(Clone, Copy)]
enum StrictOp {
    And,
    Or,
}

fn strict(input: &str) -> IResult<&str, RuleSyntax> {
    let (input, first) = unary(input)?;
    let (input, rest) = many0(pair(
        ws(alt((
            value(StrictOp::And, keyword("and")),
            value(StrictOp::Or, keyword("or")),
        ))),
        unary,
    ))
    .parse(input)?;

    let folded = rest.into_iter().fold(first, |lhs, (op, rhs)| match op {
        StrictOp::And => RuleSyntax::And(Box::new(lhs), Box::new(rhs)),
        StrictOp::Or => RuleSyntax::Or(Box::new(lhs), Box::new(rhs)),
    });
    Ok((input, folded))
}

fn unary(input: &str) -> IResult<&str, RuleSyntax> {
    alt((
        map(
            preceded(ws(alt((tag("!"), keyword("not")))), unary),
            |operand| RuleSyntax::Not(Box::new(operand)),
        ),
        primary,
    ))
    .parse(input)
}

fn primary(input: &str) -> IResult<&str, RuleSyntax> {
    alt((delimited(ws(char('(')), any_of, ws(char(')'))), comparison)).parse(input)
}

fn compare_op(input: &str) -> IResult<&str, CompareOp> {
    alt((
        value(CompareOp::Equals, tag("==")),
        value(CompareOp::NotEquals, tag("!=")),
        value(CompareOp::GreaterEquals, tag(">=")),
        value(CompareOp::LesserEquals, tag("<=")),
        value(CompareOp::Greater, char('>')),
        value(CompareOp::Lesser, char('<')),
    ))
    .parse(input)
}

fn comparison(input: &str) -> IResult<&str, RuleSyntax> {
    map(
        pair(operand, opt(pair(ws(compare_op), operand))),
        |(lhs, rhs)| match rhs {
            Some((op, rhs)) => RuleSyntax::Compare { op, lhs, rhs },
            None => RuleSyntax::Operand(lhs),
        },
    )
    .parse(input)
}

// --- Operand Parsers ---

fn operand(input: &str) -> IResult<&str, OperandSyntax> {
    ws(alt((
        map(keyword_literal, OperandSyntax::Literal),
        call,
        map(path, OperandSyntax::Path),
        map(number, OperandSyntax::Literal),
        map(string_literal, OperandSyntax::Literal),
    )))
    .parse(input)
}

fn keyword_literal(input: &str) -> IResult<&str, Literal> {
    alt((
        value(Literal::Null, keyword("null")),
        value(Literal::Bool(true), keyword("true")),
        value(Literal::Bool(false), keyword("false")),
    ))
    .parse(input)
}

/// Decimal numbers only; `double` alone would also take `nan` and `inf`.
fn number(input: &str) -> IResult<&str, Literal> {
    let recognized: IResult<&str, &str> = recognize(double).parse(input);
    let (rest, text) = recognized?;
    if text
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Float)));
    }
    match text.parse::<f64>() {
        Ok(n) => Ok((rest, Literal::Number(n))),
        Err(_) => Err(nom::Err::Error(Error::new(input, ErrorKind::Float))),
    }
}

/// The body of a quoted string, up to the closing `quote`. A backslash escapes the next character.
fn quoted_body(input: &str, quote: char) -> IResult<&str, String> {
    let mut body = String::new();
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == quote {
            return Ok((&input[i..], body));
        }
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) => body.push(escaped),
                None => break,
            }
        } else {
            body.push(c);
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Char)))
}

fn single_quoted(input: &str) -> IResult<&str, String> {
    quoted_body(input, '\'')
}

fn double_quoted(input: &str) -> IResult<&str, String> {
    quoted_body(input, '"')
}

fn string_literal(input: &str) -> IResult<&str, Literal> {
    map(
        alt((
            delimited(char('\''), single_quoted, char('\'')),
            delimited(char('"'), double_quoted, char('"')),
        )),
        Literal::String,
    )
    .parse(input)
}

fn pointer(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        char('/'),
        take_while(|c: char| !c.is_whitespace() && !"(),=!<>&|".contains(c)),
    ))
    .parse(input)
}

fn path(input: &str) -> IResult<&str, String> {
    map(alt((recognize(json_path), pointer)), |s: &str| s.to_string()).parse(input)
}

fn function_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.'),
    ))
    .parse(input)
}

fn call(input: &str) -> IResult<&str, OperandSyntax> {
    let (input, name) = function_name(input)?;
    let (input, args) = delimited(
        ws(char('(')),
        separated_list0(ws(char(',')), operand),
        ws(char(')')),
    )
    .parse(input)?;

    Ok((
        input,
        OperandSyntax::Call {
            name: name.to_string(),
            args,
        },
    ))
}
