//! # Tokenizer Component
//!
//! Lexical analysis for Pylite source code: raw text in, a flat list of
//! [`Token`](token::Token)s out, ready for the parser.
//!
//! ## Component Structure
//!
//! * [`token`]: Core token types and scan errors
//! * [`keyword`]: Reserved-word table and word scanning
//! * [`literal`]: Number and string literal scanning
//! * [`symbol`]: Operator and punctuation scanning
//! * [`indent`]: Indentation tracking, the source of `BlockOpen`/`BlockClose`
//! * [`scanner`]: The scan driver walking the input line by line
//!
//! ## Structural Tokens
//!
//! Pylite delimits blocks by indentation, so the token list carries
//! synthesized markers instead of braces: `BlockOpen` and `BlockClose` for
//! nesting (always balanced), `LineEnd` for each logical line, `EndOfInput`
//! as the single final token.
//!
//! ## Usage Example
//!
//! ```rust
//! use pylite::tokenizer::scanner::tokenize;
//! use pylite::tokenizer::token::Token;
//!
//! let tokens = tokenize("x = 1\n").unwrap();
//! assert_eq!(tokens.last(), Some(&Token::EndOfInput));
//! ```

pub mod indent;
pub mod keyword;
pub mod literal;
pub mod scanner;
pub mod symbol;
pub mod token;
