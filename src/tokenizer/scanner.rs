//! # Scan Driver
//!
//! Walks the source buffer line by line, dispatching to the classifiers and
//! the indentation tracker, and assembles the final token list.
//!
//! One logical line is processed per loop iteration — an explicit loop over
//! `split('\n')`, so scan depth never grows with input size. Blank lines and
//! comment-only lines vanish without a trace; every other line contributes
//! its tokens plus a trailing `LineEnd`. When the input is exhausted the
//! driver flushes the indentation stack and appends `EndOfInput`.

use super::indent::IndentTracker;
use super::keyword::scan_word;
use super::literal::{scan_number, scan_string};
use super::symbol::scan_symbol;
use super::token::{Token, TokenizerError, TokenizerErrorKind};

/// Tokenizes a complete source buffer.
///
/// The returned list always ends with exactly one [`Token::EndOfInput`], and
/// its `BlockOpen`/`BlockClose` tokens are balanced. The first scan failure
/// aborts the run.
#[tracing::instrument(level = "debug", skip(input))]
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
    let mut tokens = Vec::new();
    let mut indent = IndentTracker::new();
    for (index, raw) in input.split('\n').enumerate() {
        // accept CRLF input by dropping the carriage return
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        scan_line(line, index + 1, &mut indent, &mut tokens)?;
    }
    tokens.extend(indent.finish());
    tokens.push(Token::EndOfInput);
    Ok(tokens)
}

/// Scans one source line into `tokens`.
fn scan_line(
    line: &str,
    number: usize,
    indent: &mut IndentTracker,
    tokens: &mut Vec<Token>,
) -> Result<(), TokenizerError> {
    let (leading, mut rest) = split_indent(line);
    if rest.is_empty() || rest.starts_with('#') {
        // blank and comment-only lines leave no trace
        return Ok(());
    }
    if leading.contains('\t') {
        return Err(fail(
            number,
            TokenizerErrorKind::Indentation("tab character in indentation".to_string()),
        ));
    }
    tokens.extend(
        indent
            .observe(leading.len())
            .map_err(|kind| fail(number, kind))?,
    );
    loop {
        rest = rest.trim_start_matches([' ', '\t']);
        if rest.is_empty() || rest.starts_with('#') {
            // a trailing comment ends the content, not the logical line
            break;
        }
        let (next, token) = classify(rest).map_err(|kind| fail(number, kind))?;
        tokens.push(token);
        rest = next;
    }
    tokens.push(Token::LineEnd);
    Ok(())
}

/// Splits a line into its leading whitespace and the content after it.
fn split_indent(line: &str) -> (&str, &str) {
    let rest = line.trim_start_matches([' ', '\t']);
    (&line[..line.len() - rest.len()], rest)
}

/// Picks the classifier for the character `rest` starts with.
fn classify(rest: &str) -> Result<(&str, Token), TokenizerErrorKind> {
    match rest.chars().next() {
        Some(c) if c.is_alphabetic() || c == '_' => Ok(scan_word(rest)),
        Some(c) if c.is_ascii_digit() => scan_number(rest),
        Some('"' | '\'') => scan_string(rest),
        _ => scan_symbol(rest),
    }
}

fn fail(line: usize, kind: TokenizerErrorKind) -> TokenizerError {
    let error = TokenizerError { kind, line };
    tracing::error!("{error}");
    error
}
