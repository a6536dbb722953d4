//! Core token types shared by the scanners, the driver, and the stream.

use std::fmt;

use strum_macros::EnumDiscriminants;
use thiserror::Error;

use super::keyword::Keyword;
use super::symbol::Operator;

/// A single lexeme of Pylite source.
///
/// Valued variants compare by payload; fixed variants compare by identity.
/// `BlockOpen`, `BlockClose`, `LineEnd` and `EndOfInput` never appear in the
/// source text itself, they are synthesized by the scan driver.
#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(TokenKind), derive(strum::Display))]
pub enum Token {
    /// Integer literal.
    Number(i64),
    /// Name that is not a reserved word.
    Identifier(String),
    /// String literal with escape sequences already decoded.
    Str(String),
    /// Single punctuation mark that is not part of a multi-char operator.
    Punct(char),
    /// Reserved word.
    Keyword(Keyword),
    /// Multi-character comparison operator.
    Operator(Operator),
    /// Start of a nested block (indentation increased).
    BlockOpen,
    /// End of a nested block (indentation decreased).
    BlockClose,
    /// End of a logical source line.
    LineEnd,
    /// End of the whole input, always the final token.
    EndOfInput,
}

impl Token {
    /// The payload-free discriminant of this token.
    pub fn kind(&self) -> TokenKind {
        TokenKind::from(self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "Number({value})"),
            Token::Identifier(name) => write!(f, "Identifier({name})"),
            Token::Str(text) => write!(f, "Str({text:?})"),
            Token::Punct(c) => write!(f, "Punct('{c}')"),
            Token::Keyword(keyword) => write!(f, "Keyword({keyword})"),
            Token::Operator(operator) => write!(f, "Operator({operator})"),
            Token::BlockOpen => f.write_str("BlockOpen"),
            Token::BlockClose => f.write_str("BlockClose"),
            Token::LineEnd => f.write_str("LineEnd"),
            Token::EndOfInput => f.write_str("EndOfInput"),
        }
    }
}

/// Result of one classifier step: the input after the token, and the token.
pub type ScanResult<'a> = Result<(&'a str, Token), TokenizerErrorKind>;

/// What went wrong during a scan, without source context.
///
/// The scanners report these; the driver wraps them into [`TokenizerError`]
/// together with the line the failure happened on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("malformed number `{0}`")]
    MalformedNumber(String),
    #[error("unrecognized operator `{0}`")]
    UnknownOperator(char),
    #[error("indentation error: {0}")]
    Indentation(String),
}

/// A scan failure, positioned on its 1-based source line.
///
/// Tokenization fails fast: the first error aborts the run, there is no
/// partial token list to recover.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} on line {line}")]
pub struct TokenizerError {
    pub kind: TokenizerErrorKind,
    pub line: usize,
}
