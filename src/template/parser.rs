//! Parses template source text into an unbound [`Pattern`] (spec.md §4.A).
//!
//! Built with `nom`, in the spirit of the teacher's
//! `registry/querier/parser.rs`: small composable combinators built
//! bottom-up from literals to the top-level `pattern` parser. Unlike the
//! teacher's query grammar (which tracks byte ranges via
//! `nom_locate::LocatedSpan` for rich `annotate-snippets` diagnostics),
//! this grammar only needs a line/column pair for [`TemplateSyntaxError`],
//! so position is recovered from pointer arithmetic against the original
//! input rather than pulling in `nom_locate`.

use indexmap::IndexMap;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, none_of, one_of, satisfy},
    combinator::{map, map_res, opt, recognize, value},
    error::ErrorKind,
    multi::{many0, many1, separated_list0},
    sequence::tuple,
    IResult,
};

use crate::template::ast::{Literal, Pattern, PatternElement, TagCall};
use crate::template::error::TemplateSyntaxError;

/// Custom `nom` error carrying an optional human-readable message, used in
/// place of the stock `nom::error::Error` so that the parser can report
/// specific failures (unclosed string, missing `(`, ...) instead of a bare
/// `ErrorKind`.
#[derive(Debug, Clone)]
struct PErr<'a> {
    input: &'a str,
    message: Option<String>,
}

impl<'a> PErr<'a> {
    fn msg(input: &'a str, message: impl Into<String>) -> Self {
        Self {
            input,
            message: Some(message.into()),
        }
    }
}

impl<'a> nom::error::ParseError<&'a str> for PErr<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Self { input, message: None }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

type PResult<'a, T> = IResult<&'a str, T, PErr<'a>>;

/// An argument before positional/keyword validation has run
enum Argument {
    Positional(Literal),
    Keyword(String, Literal),
}

/// Parse `input` into a [`Pattern`], failing on the first malformed
/// construct encountered.
pub fn parse(input: &str) -> Result<Pattern, TemplateSyntaxError> {
    match pattern(input) {
        Ok((rest, pat)) if rest.is_empty() => Ok(pat),
        Ok((rest, _)) => {
            let message = match rest.chars().next() {
                Some('%') => "unknown escape or malformed tag (use '%%' for a literal '%')".to_string(),
                Some('{') => "unexpected '{' (context braces must follow a tag)".to_string(),
                Some('}') => "unmatched '}'".to_string(),
                Some(c) => format!("unexpected character '{}'", c),
                None => "unexpected end of template".to_string(),
            };
            Err(error_at(input, rest, message))
        },
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let message = e.message.unwrap_or_else(|| "malformed template".to_string());
            Err(error_at(input, e.input, message))
        },
        Err(nom::Err::Incomplete(_)) => Err(error_at_offset(input, input.len(), "unexpected end of template")),
    }
}

/// Compute a `TemplateSyntaxError` at the position of `sub`, which must be
/// a sub-slice of `original` (true for every error produced while parsing,
/// since no owned strings are substituted for input along the way).
fn error_at(original: &str, sub: &str, message: impl Into<String>) -> TemplateSyntaxError {
    let offset = sub.as_ptr() as usize - original.as_ptr() as usize;
    error_at_offset(original, offset, message)
}

fn error_at_offset(original: &str, offset: usize, message: impl Into<String>) -> TemplateSyntaxError {
    let mut line = 1;
    let mut column = 1;
    for (i, ch) in original.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    TemplateSyntaxError::new(line, column, message)
}

// ============================= Lexical rules =============================

fn ws0(input: &str) -> PResult<()> {
    value((), many0(one_of(" \t\r\n")))(input)
}

/// `[A-Za-z][A-Za-z0-9_]*`
fn ident(input: &str) -> PResult<String> {
    map(
        recognize(tuple((
            satisfy(|c| c.is_ascii_alphabetic()),
            many0(satisfy(|c| c.is_ascii_alphanumeric() || c == '_')),
        ))),
        str::to_string,
    )(input)
}

/// `"-"? [0-9]+`
fn integer(input: &str) -> PResult<Literal> {
    map_res(recognize(tuple((opt(char('-')), digit1))), |s: &str| {
        s.parse::<i64>().map(Literal::Int)
    })(input)
}

fn boolean(input: &str) -> PResult<Literal> {
    alt((
        value(Literal::Bool(true), tag("true")),
        value(Literal::Bool(false), tag("false")),
    ))(input)
}

/// `"'" ( any_char - "'" | "\'" )* "'"`, handled as a manual escape fold
/// (the same idiom as the teacher's `transform_escaped_non_expanded`).
fn quoted_string(input: &str) -> PResult<String> {
    let (mut rest, _) = char('\'')(input)?;
    let start = rest;
    let mut out = String::new();
    loop {
        match rest.chars().next() {
            None => return Err(nom::Err::Failure(PErr::msg(start, "unterminated string literal, missing closing \"'\""))),
            Some('\'') => {
                rest = &rest[1..];
                return Ok((rest, out));
            },
            Some('\\') => {
                let after = &rest[1..];
                match after.chars().next() {
                    Some('\'') => {
                        out.push('\'');
                        rest = &after[1..];
                    },
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                        rest = &after[other.len_utf8()..];
                    },
                    None => return Err(nom::Err::Failure(PErr::msg(start, "unterminated string literal, missing closing \"'\""))),
                }
            },
            Some(c) => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            },
        }
    }
}

fn literal_value(input: &str) -> PResult<Literal> {
    alt((map(quoted_string, Literal::Str), boolean, integer))(input)
}

// ============================== Arguments ==============================

fn kwarg(input: &str) -> PResult<(String, Literal)> {
    let (rest, name) = ident(input)?;
    let (rest, _) = ws0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = ws0(rest)?;
    let (rest, value) = literal_value(rest)?;
    Ok((rest, (name, value)))
}

fn argument(input: &str) -> PResult<Argument> {
    alt((
        map(kwarg, |(name, value)| Argument::Keyword(name, value)),
        map(literal_value, Argument::Positional),
    ))(input)
}

fn arglist(input: &str) -> PResult<Vec<Argument>> {
    separated_list0(tuple((ws0, char(','), ws0)), argument)(input)
}

/// Split a raw argument list into positional/keyword buckets, rejecting a
/// positional argument after a keyword one and duplicate keyword names.
fn split_args(args: Vec<Argument>) -> Result<(Vec<Literal>, IndexMap<String, Literal>), String> {
    let mut positional = Vec::new();
    let mut keyword = IndexMap::new();
    let mut seen_keyword = false;
    for arg in args {
        match arg {
            Argument::Positional(value) => {
                if seen_keyword {
                    return Err("positional argument cannot follow a keyword argument".to_string());
                }
                positional.push(value);
            },
            Argument::Keyword(name, value) => {
                seen_keyword = true;
                if keyword.contains_key(&name) {
                    return Err(format!("duplicate keyword argument `{}`", name));
                }
                keyword.insert(name, value);
            },
        }
    }
    Ok((positional, keyword))
}

// ================================ Tags ==================================

fn category_and_name(input: &str) -> PResult<(Option<String>, String)> {
    let (rest, first) = ident(input)?;
    if let Ok((rest2, _)) = char::<&str, PErr>('.')(rest) {
        match ident(rest2) {
            Ok((rest3, second)) => Ok((rest3, (Some(first), second))),
            Err(_) => Err(nom::Err::Failure(PErr::msg(
                rest2,
                "expected a tag name after the category prefix",
            ))),
        }
    } else {
        Ok((rest, (None, first)))
    }
}

fn tag_call(input: &str) -> PResult<TagCall> {
    let (rest, _) = char('%')(input)?;
    let (rest, (category, name)) = category_and_name(rest)
        .map_err(|_| nom::Err::Failure(PErr::msg(rest, "expected a tag name after '%'")))?;

    let (rest, _) = char::<&str, PErr>('(')(rest)
        .map_err(|_| nom::Err::Failure(PErr::msg(rest, format!("expected '(' after tag name `{}`", name))))?;
    let (rest, _) = ws0(rest)?;
    let (rest, raw_args) = arglist(rest)?;
    let (rest, _) = ws0(rest)?;
    let (rest, _) = char::<&str, PErr>(')')(rest)
        .map_err(|_| nom::Err::Failure(PErr::msg(rest, format!("unterminated call to tag `{}`, missing ')'", name))))?;

    let (args, kwargs) =
        split_args(raw_args).map_err(|message| nom::Err::Failure(PErr::msg(rest, message)))?;

    let (rest, context) = if let Ok((rest2, _)) = char::<&str, PErr>('{')(rest) {
        let (rest3, inner) = pattern(rest2)?;
        match char::<&str, PErr>('}')(rest3) {
            Ok((rest4, _)) => (rest4, Some(inner)),
            Err(_) => {
                return Err(nom::Err::Failure(PErr::msg(rest3, "unclosed context, missing '}'")))
            },
        }
    } else {
        (rest, None)
    };

    Ok((
        rest,
        TagCall {
            category,
            name,
            args,
            kwargs,
            context,
        },
    ))
}

// ============================= Raw text =================================

/// One literal raw-text character, including the `%%`, `{{`, `}}` escapes.
fn raw_char(input: &str) -> PResult<char> {
    alt((
        value('%', tag("%%")),
        value('{', tag("{{")),
        value('}', tag("}}")),
        none_of("%{}"),
    ))(input)
}

fn raw_text(input: &str) -> PResult<String> {
    map(many1(raw_char), |chars| chars.into_iter().collect())(input)
}

fn element(input: &str) -> PResult<PatternElement> {
    alt((
        map(tag_call, PatternElement::TagPlaceholder),
        map(raw_text, PatternElement::RawText),
    ))(input)
}

fn pattern(input: &str) -> PResult<Pattern> {
    map(many0(element), Pattern::new)(input)
}
