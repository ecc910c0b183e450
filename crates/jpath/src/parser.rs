//! A `nom`-based parser for JSONPath expressions.
use super::ast::{JsonPath, Segment, Selector};
use crate::error::JPathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, i64 as nom_i64, multispace0},
    combinator::{map, value},
    multi::many0,
    sequence::{delimited, preceded},
};

// --- Main Public Parser ---

pub fn parse_path(input: &str) -> Result<JsonPath, JPathError> {
    match json_path(input.trim()) {
        Ok(("", path)) => Ok(path),
        Ok((rem, _)) => Err(JPathError::JPathParse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(JPathError::JPathParse(input.to_string(), e.to_string())),
    }
}

/// Parses a `$`-rooted path, leaving any trailing input untouched.
///
/// Exposed so that other grammars can embed JSONPath operands.
pub fn json_path(input: &str) -> IResult<&str, JsonPath> {
    map(preceded(char('$'), many0(segment)), |segments| JsonPath {
        segments,
    })
    .parse(input)
}

// --- Segment Parsers ---

fn segment(input: &str) -> IResult<&str, Segment> {
    alt((descendant_segment, dot_segment, map(bracket, Segment::Child))).parse(input)
}

fn descendant_segment(input: &str) -> IResult<&str, Segment> {
    map(
        preceded(tag(".."), alt((wildcard, map(member_name, Selector::Key), bracket))),
        Segment::Descendant,
    )
    .parse(input)
}

fn dot_segment(input: &str) -> IResult<&str, Segment> {
    map(
        preceded(char('.'), alt((wildcard, map(member_name, Selector::Key)))),
        Segment::Child,
    )
    .parse(input)
}

// --- Selector Parsers ---

fn wildcard(input: &str) -> IResult<&str, Selector> {
    value(Selector::Wildcard, char('*')).parse(input)
}

fn member_name(input: &str) -> IResult<&str, String> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        |s: &str| s.to_string(),
    )
    .parse(input)
}

fn quoted_key(input: &str) -> IResult<&str, String> {
    map(
        alt((
            delimited(char('\''), take_while(|c| c != '\''), char('\'')),
            delimited(char('"'), take_while(|c| c != '"'), char('"')),
        )),
        |s: &str| s.to_string(),
    )
    .parse(input)
}

fn bracket(input: &str) -> IResult<&str, Selector> {
    delimited(
        char('['),
        delimited(
            multispace0,
            alt((
                wildcard,
                map(quoted_key, Selector::Key),
                map(nom_i64, Selector::Index),
            )),
            multispace0,
        ),
        char(']'),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_path() {
        let path = parse_path("$.customer.orders[1].id").unwrap();
        assert_eq!(
            path.segments,
            vec![
                Segment::Child(Selector::Key("customer".into())),
                Segment::Child(Selector::Key("orders".into())),
                Segment::Child(Selector::Index(1)),
                Segment::Child(Selector::Key("id".into())),
            ]
        );
        assert!(path.is_definite());
    }

    #[test]
    fn test_parse_bracket_keys_and_negative_index() {
        let path = parse_path("$['first name'][\"x\"][-1]").unwrap();
        assert_eq!(
            path.segments,
            vec![
                Segment::Child(Selector::Key("first name".into())),
                Segment::Child(Selector::Key("x".into())),
                Segment::Child(Selector::Index(-1)),
            ]
        );
    }

    #[test]
    fn test_parse_indefinite_segments() {
        let path = parse_path("$..price").unwrap();
        assert_eq!(
            path.segments,
            vec![Segment::Descendant(Selector::Key("price".into()))]
        );
        assert!(!path.is_definite());
        assert!(!parse_path("$.items[*].id").unwrap().is_definite());
        assert!(!parse_path("$.items.*").unwrap().is_definite());
    }

    #[test]
    fn test_root_only() {
        assert_eq!(parse_path("$").unwrap(), JsonPath::default());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_path("customer.name").is_err());
        assert!(parse_path("$.a[").is_err());
        assert!(parse_path("$.a b").is_err());
    }

    #[test]
    fn test_json_path_leaves_remainder() {
        let (rest, path) = json_path("$.age >= 18").unwrap();
        assert_eq!(rest, " >= 18");
        assert_eq!(path.segments.len(), 1);
    }
}
