//! Parser error definitions and diagnostic rendering.

use smol_str::SmolStr;
use thiserror::Error;
use umber_ast::Source;
use umber_lexer::LexError;

/// A parse error. The parser aborts at the first error; this is the
/// single result of a failed compile.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("unexpected token: {found}")]
    UnexpectedToken {
        found: SmolStr,
        span: std::ops::Range<usize>,
    },

    #[error("unexpected EOF")]
    UnexpectedEof { span: std::ops::Range<usize> },

    #[error("expected {expected}, got {found}")]
    Expected {
        expected: SmolStr,
        found: SmolStr,
        span: std::ops::Range<usize>,
    },

    #[error("expected selector")]
    ExpectedSelector { span: std::ops::Range<usize> },

    #[error("expected media query")]
    ExpectedMediaQuery { span: std::ops::Range<usize> },

    #[error("expected supports condition")]
    ExpectedSupportsCondition { span: std::ops::Range<usize> },

    #[error("expected even, odd, or an+b syntax")]
    InvalidNth { span: std::ops::Range<usize> },

    #[error("expected literal n as part of An+B")]
    ExpectedAnPlusB { span: std::ops::Range<usize> },

    #[error("expected from, to, or a percentage")]
    InvalidKeyframeSelector { span: std::ops::Range<usize> },

    #[error("invalid hex color: #{value}")]
    InvalidHexColor {
        value: SmolStr,
        span: std::ops::Range<usize>,
    },

    #[error("@custom-media rule requires a single media query argument")]
    CustomMediaSingleQuery { span: std::ops::Range<usize> },
}

impl ParseError {
    /// Get the span of this error.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::UnexpectedToken { span, .. } => span.clone(),
            ParseError::UnexpectedEof { span } => span.clone(),
            ParseError::Expected { span, .. } => span.clone(),
            ParseError::ExpectedSelector { span } => span.clone(),
            ParseError::ExpectedMediaQuery { span } => span.clone(),
            ParseError::ExpectedSupportsCondition { span } => span.clone(),
            ParseError::InvalidNth { span } => span.clone(),
            ParseError::ExpectedAnPlusB { span } => span.clone(),
            ParseError::InvalidKeyframeSelector { span } => span.clone(),
            ParseError::InvalidHexColor { span, .. } => span.clone(),
            ParseError::CustomMediaSingleQuery { span } => span.clone(),
        }
    }

    /// Render the error against its source in the diagnostic format:
    ///
    /// ```text
    /// <path>:<line>:<col>
    /// <message>:
    /// <tab><source line>
    /// <tab><spaces>~[~...]
    /// ```
    ///
    /// Line and column are 1-based; the column is the byte offset within
    /// the line. Tabs in the echoed source line become single spaces so
    /// the marker row lines up.
    pub fn to_diagnostic(&self, source: &Source) -> String {
        let span = self.span();
        let (line, col) = source.line_col(span.start);
        let text = source.line_at(span.start);

        let available = text.len().saturating_sub(col - 1);
        let tildes = span.len().max(1).min(available.max(1));

        let mut out = String::new();
        out.push_str(&source.path);
        out.push_str(&format!(":{}:{}\n", line, col));
        out.push_str(&format!("{}:\n", self));
        out.push('\t');
        for ch in text.chars() {
            out.push(if ch == '\t' { ' ' } else { ch });
        }
        out.push('\n');
        out.push('\t');
        for _ in 0..col - 1 {
            out.push(' ');
        }
        for _ in 0..tildes {
            out.push('~');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_format() {
        let source = Source::new("main.css", ".a {\n  color:: red;\n}\n");
        let err = ParseError::UnexpectedToken {
            found: ":".into(),
            span: 13..14,
        };
        assert_eq!(
            err.to_diagnostic(&source),
            "main.css:2:9\nunexpected token: ::\n\t  color:: red;\n\t        ~"
        );
    }
}
