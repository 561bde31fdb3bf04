//! # Umber Parser
//!
//! Parses CSS source text into an [`umber_ast::Stylesheet`].
//!
//! The parser is recursive descent over the lexer's single-token
//! lookahead, with no backtracking. There is no error recovery: the first
//! lexing or grammar error aborts the parse and is returned as the single
//! result, carrying a byte span for diagnostics.
//!
//! ## Example
//!
//! ```
//! use umber_ast::Source;
//!
//! let source = Source::new("main.css", ".class { width: 2rem }");
//! let stylesheet = umber_parser::parse(&source).unwrap();
//! assert_eq!(stylesheet.nodes.len(), 1);
//! ```

mod at_rule;
mod error;
mod media;
mod parser;
mod selectors;

pub use error::ParseError;
pub use parser::Parser;

use umber_ast::{Source, Stylesheet};

/// Parse a source into a stylesheet. Synchronous; the first error aborts.
pub fn parse(source: &Source) -> Result<Stylesheet, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_stylesheet()
}
