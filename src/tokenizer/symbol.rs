//! # Symbol Token Handling
//!
//! Scans operators and punctuation marks.
//!
//! ## Parsing Strategy
//!
//! Two-character operators are matched first so that `==` is never read as
//! two `=` marks; only then does the scanner fall back to the single-char
//! punctuation set. A character that fits neither is a hard error, the
//! tokenizer does not guess.

use nom::{
    branch::alt, bytes::complete::tag, character::complete::one_of, combinator::value, IResult,
};
use strum_macros::{AsRefStr, Display, EnumString};

use super::token::{ScanResult, Token, TokenizerErrorKind};

/// Multi-character comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum Operator {
    /// Equality comparison (`==`)
    #[strum(serialize = "==")]
    Eq,
    /// Inequality comparison (`!=`)
    #[strum(serialize = "!=")]
    NotEq,
    /// Less-or-equal comparison (`<=`)
    #[strum(serialize = "<=")]
    LessOrEq,
    /// Greater-or-equal comparison (`>=`)
    #[strum(serialize = ">=")]
    GreaterOrEq,
}

/// The single-character punctuation marks the language recognizes.
pub const PUNCTUATION: &str = "=*.,(+<>)-:";

fn two_char_operator(input: &str) -> IResult<&str, Operator> {
    alt((
        value(Operator::Eq, tag("==")),
        value(Operator::NotEq, tag("!=")),
        value(Operator::LessOrEq, tag("<=")),
        value(Operator::GreaterOrEq, tag(">=")),
    ))(input)
}

/// Scans an operator or punctuation token starting at `input`.
///
/// Tries the two-character operators first, then the punctuation set.
/// Anything else fails with [`TokenizerErrorKind::UnknownOperator`].
#[tracing::instrument(level = "debug", skip(input))]
pub fn scan_symbol(input: &str) -> ScanResult<'_> {
    if let Ok((rest, operator)) = two_char_operator(input) {
        return Ok((rest, Token::Operator(operator)));
    }
    match one_of::<_, _, nom::error::Error<&str>>(PUNCTUATION)(input) {
        Ok((rest, c)) => Ok((rest, Token::Punct(c))),
        Err(_) => match input.chars().next() {
            Some(c) => Err(TokenizerErrorKind::UnknownOperator(c)),
            // the driver never dispatches on an empty rest
            None => Err(TokenizerErrorKind::UnknownOperator(' ')),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators() {
        let test_cases = [
            ("==", Operator::Eq),
            ("!=", Operator::NotEq),
            ("<=", Operator::LessOrEq),
            (">=", Operator::GreaterOrEq),
        ];

        for (input, expected) in test_cases {
            let (rest, token) = scan_symbol(input).unwrap();
            assert_eq!(token, Token::Operator(expected));
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_punctuation() {
        for c in PUNCTUATION.chars() {
            let input = c.to_string();
            let (rest, token) = scan_symbol(&input).unwrap();
            assert_eq!(token, Token::Punct(c));
            assert_eq!(rest, "");
        }
    }

    // `<=` must not be read as `<` followed by `=`
    #[test]
    fn test_two_char_before_single() {
        let (rest, token) = scan_symbol("<= 1").unwrap();
        assert_eq!(token, Token::Operator(Operator::LessOrEq));
        assert_eq!(rest, " 1");

        let (rest, token) = scan_symbol("< 1").unwrap();
        assert_eq!(token, Token::Punct('<'));
        assert_eq!(rest, " 1");
    }

    // a lone `!` is not a recognized mark, only `!=` is
    #[test]
    fn test_unknown_operator() {
        assert_eq!(
            scan_symbol("! x"),
            Err(TokenizerErrorKind::UnknownOperator('!'))
        );
        assert_eq!(
            scan_symbol("@foo"),
            Err(TokenizerErrorKind::UnknownOperator('@'))
        );
    }
}
