//! Lexer error definitions.

use thiserror::Error;

use crate::token::TokenKind;

/// A lexer error. Lexing errors are fatal to the current parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        found: char,
        span: std::ops::Range<usize>,
    },

    #[error("unexpected EOF")]
    UnexpectedEof { span: std::ops::Range<usize> },

    #[error("unclosed string: unexpected newline")]
    UnterminatedString { span: std::ops::Range<usize> },

    #[error("expected * to open a comment, got {found}")]
    BadCommentStart {
        found: char,
        span: std::ops::Range<usize>,
    },

    #[error("invalid escape")]
    InvalidEscape { span: std::ops::Range<usize> },

    #[error("expected {expected}, got {found}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        span: std::ops::Range<usize>,
    },
}

impl LexError {
    /// Get the span of this error.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            LexError::UnexpectedToken { span, .. } => span.clone(),
            LexError::UnexpectedEof { span } => span.clone(),
            LexError::UnterminatedString { span } => span.clone(),
            LexError::BadCommentStart { span, .. } => span.clone(),
            LexError::InvalidEscape { span } => span.clone(),
            LexError::Expected { span, .. } => span.clone(),
        }
    }
}
