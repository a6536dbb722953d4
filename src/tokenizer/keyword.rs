//! # Keyword Token Handling
//!
//! Defines the reserved words of the Pylite language and the word scanner
//! that separates them from plain identifiers.
//!
//! ## Matching Strategy
//!
//! The scanner first consumes the maximal run of identifier characters, then
//! looks the captured text up in the keyword table. Capturing the whole run
//! before the lookup means an identifier that merely starts with a keyword
//! (`classes`, `iffy`) is never split.
//!
//! ## Keyword Table
//!
//! The table is the [`Keyword`] enum itself: `strum::EnumString` derives the
//! spelling-to-variant lookup at compile time, so there is no runtime-built
//! map and no shared mutable state. Spellings are case-sensitive: the value
//! words `None`, `True` and `False` are capitalized, everything else is
//! lowercase.

use std::str::FromStr;

use super::token::Token;

/// Reserved words of the Pylite language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    /// Starts a class definition.
    Class,
    /// Returns a value from a function.
    Return,
    /// Conditional statement.
    If,
    /// Alternative branch of a conditional.
    Else,
    /// Starts a function definition.
    Def,
    /// Output statement.
    Print,
    /// Logical conjunction.
    And,
    /// Logical disjunction.
    Or,
    /// Logical negation.
    Not,
    /// The absent value.
    #[strum(serialize = "None")]
    None,
    /// Boolean true.
    #[strum(serialize = "True")]
    True,
    /// Boolean false.
    #[strum(serialize = "False")]
    False,
}

/// Scans a word starting at `input` and classifies it.
///
/// Consumes the maximal run of alphanumeric-or-underscore characters; the
/// driver only dispatches here when the first character is alphabetic or an
/// underscore, so the run is never empty. Returns the matching [`Keyword`]
/// token on a table hit, otherwise an [`Token::Identifier`].
#[tracing::instrument(level = "debug", skip(input))]
pub fn scan_word(input: &str) -> (&str, Token) {
    let end = input
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(input.len());
    let (word, rest) = input.split_at(end);
    match Keyword::from_str(word) {
        Ok(keyword) => (rest, Token::Keyword(keyword)),
        Err(_) => (rest, Token::Identifier(word.to_string())),
    }
}
