//! # Umber Lexer
//!
//! Tokenizes CSS source text following the CSS Syntax Level 3 tokenization
//! algorithm.
//!
//! The lexer is a hand-written, byte-position-driven state machine exposing
//! single-token lookahead: callers push it forward with [`Lexer::advance`],
//! and `current`, `current_string`, and `current_numeral` describe the
//! token just produced. Positions are byte offsets, so spans are byte-exact
//! for diagnostics.
//!
//! ## Example
//!
//! ```
//! use umber_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(".class { width: 2rem }").unwrap();
//! assert_eq!(lexer.current, TokenKind::Delim);
//! assert_eq!(lexer.current_string, ".");
//! lexer.advance().unwrap();
//! assert_eq!(lexer.current, TokenKind::Ident);
//! assert_eq!(lexer.current_string, "class");
//! ```

mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::TokenKind;
