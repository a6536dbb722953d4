//! Indentation-sensitive tokenizer for the Pylite scripting language.
//!
//! [`tokenize`](tokenizer::scanner::tokenize) turns source text into a flat
//! token list with synthesized block structure; [`TokenStream`] is the
//! forward-only cursor a parser drives over it.

pub mod stream;
pub mod tokenizer;

// Re-exports
pub use stream::*;
pub use tokenizer::indent::*;
pub use tokenizer::keyword::*;
pub use tokenizer::literal::*;
pub use tokenizer::scanner::*;
pub use tokenizer::symbol::*;
pub use tokenizer::token::*;
