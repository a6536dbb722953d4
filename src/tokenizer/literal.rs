//! # Literal Token Handling
//!
//! Scans number and string literals.
//!
//! ## Numbers
//!
//! A number is a maximal run of decimal digits parsed as an `i64`. Signs are
//! not part of the literal: `-5` is a `Punct('-')` followed by `Number(5)`,
//! and the parser's precedence rules put them back together.
//!
//! ## Strings
//!
//! A string opens with `"` or `'` and runs to the next unescaped occurrence
//! of the *same* quote. A backslash escapes the character after it. Escape
//! decoding happens after capture and only when the captured text actually
//! contains a backslash.

use nom::character::complete::digit1;

use super::token::{ScanResult, Token, TokenizerErrorKind};

/// Scans a decimal integer literal starting at `input`.
///
/// Fails with [`TokenizerErrorKind::MalformedNumber`] when there is no digit
/// to consume or the digit run does not fit an `i64`.
#[tracing::instrument(level = "debug", skip(input))]
pub fn scan_number(input: &str) -> ScanResult<'_> {
    let (rest, digits) = digit1::<_, nom::error::Error<&str>>(input)
        .map_err(|_| TokenizerErrorKind::MalformedNumber(String::new()))?;
    let value = digits
        .parse::<i64>()
        .map_err(|_| TokenizerErrorKind::MalformedNumber(digits.to_string()))?;
    Ok((rest, Token::Number(value)))
}

/// Scans a quoted string literal starting at `input`.
///
/// The driver dispatches here on a leading `"` or `'`. The scan runs to the
/// next unescaped occurrence of the same quote; a backslash skips over the
/// character that follows it. Fails with
/// [`TokenizerErrorKind::UnterminatedString`] when the input ends first —
/// the driver feeds one line at a time, so strings never span lines.
#[tracing::instrument(level = "debug", skip(input))]
pub fn scan_string(input: &str) -> ScanResult<'_> {
    let mut chars = input.char_indices();
    let quote = match chars.next() {
        Some((_, c @ ('"' | '\''))) => c,
        _ => return Err(TokenizerErrorKind::UnterminatedString),
    };
    let mut escaped = false;
    for (index, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            let body = &input[1..index];
            // both quote characters are one byte
            return Ok((&input[index + 1..], Token::Str(decode_escapes(body))));
        }
    }
    Err(TokenizerErrorKind::UnterminatedString)
}

/// Decodes the escape sequences in a captured string body.
///
/// Recognized: `\"`, `\'`, `\t`, `\n`, `\\`. Any other backslash-prefixed
/// character passes through as the backslash plus that character.
fn decode_escapes(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => decoded.push('"'),
            Some('\'') => decoded.push('\''),
            Some('t') => decoded.push('\t'),
            Some('n') => decoded.push('\n'),
            Some('\\') => decoded.push('\\'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            // a trailing backslash would have escaped the closing quote,
            // so the capture never ends with an unpaired one
            None => decoded.push('\\'),
        }
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        let (rest, token) = scan_number("123 + 4").unwrap();
        assert_eq!(token, Token::Number(123));
        assert_eq!(rest, " + 4");
    }

    #[test]
    fn test_number_stops_at_non_digit() {
        let (rest, token) = scan_number("1:").unwrap();
        assert_eq!(token, Token::Number(1));
        assert_eq!(rest, ":");
    }

    #[test]
    fn test_number_overflow() {
        let huge = "99999999999999999999";
        assert_eq!(
            scan_number(huge),
            Err(TokenizerErrorKind::MalformedNumber(huge.to_string()))
        );
    }

    #[test]
    fn test_number_empty() {
        assert!(matches!(
            scan_number("abc"),
            Err(TokenizerErrorKind::MalformedNumber(_))
        ));
    }

    #[test]
    fn test_simple_string() {
        let (rest, token) = scan_string("\"hello\" rest").unwrap();
        assert_eq!(token, Token::Str("hello".to_string()));
        assert_eq!(rest, " rest");
    }

    #[test]
    fn test_single_quoted_string() {
        let (rest, token) = scan_string("'hello'").unwrap();
        assert_eq!(token, Token::Str("hello".to_string()));
        assert_eq!(rest, "");
    }

    // a single quote inside a double-quoted string needs no escape
    #[test]
    fn test_other_quote_is_plain() {
        let (_, token) = scan_string("\"it's\"").unwrap();
        assert_eq!(token, Token::Str("it's".to_string()));
    }

    #[test]
    fn test_empty_string() {
        let (rest, token) = scan_string("\"\"").unwrap();
        assert_eq!(token, Token::Str(String::new()));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_escape_decoding() {
        let (_, token) = scan_string(r#""a\tb""#).unwrap();
        assert_eq!(token, Token::Str("a\tb".to_string()));

        let (_, token) = scan_string(r#""line\nnext""#).unwrap();
        assert_eq!(token, Token::Str("line\nnext".to_string()));

        let (_, token) = scan_string(r#""say \"hi\"""#).unwrap();
        assert_eq!(token, Token::Str("say \"hi\"".to_string()));

        let (_, token) = scan_string(r#""back\\slash""#).unwrap();
        assert_eq!(token, Token::Str("back\\slash".to_string()));

        let (_, token) = scan_string(r#"'don\'t'"#).unwrap();
        assert_eq!(token, Token::Str("don't".to_string()));
    }

    // unknown escapes pass through untouched
    #[test]
    fn test_unknown_escape_passes_through() {
        let (_, token) = scan_string(r#""a\qb""#).unwrap();
        assert_eq!(token, Token::Str("a\\qb".to_string()));
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            scan_string("\"no end"),
            Err(TokenizerErrorKind::UnterminatedString)
        );
        // the escaped quote does not close the literal
        assert_eq!(
            scan_string(r#""almost\""#),
            Err(TokenizerErrorKind::UnterminatedString)
        );
        // mismatched quote kinds do not close each other
        assert_eq!(
            scan_string("\"mixed'"),
            Err(TokenizerErrorKind::UnterminatedString)
        );
    }
}
