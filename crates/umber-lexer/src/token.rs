//! Token definitions and code point classification.

use std::fmt;

/// The set of lexical tokens in CSS, per
/// <https://www.w3.org/TR/css-syntax-3/#consume-token>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,

    /// A whitespace run, only produced when the lexer retains whitespace.
    Whitespace,

    Comma,     // ,
    Colon,     // :
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LCurly,    // {
    RCurly,    // }
    Cdo,       // <!--
    Cdc,       // -->

    Comment,       // /* comment */
    Url,           // url(...)
    FunctionStart, // something(
    AtKeyword,     // @keyword
    Hash,          // #hash
    Number,        // numeric literal
    Percentage,    // numeric literal followed by %
    Dimension,     // numeric literal followed by a unit
    String,        // string literal
    Ident,         // identifier
    /// A single code point the lexer has no better classification for.
    /// The parser decides its role from `current_string`.
    Delim,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::Cdo => "<!--",
            TokenKind::Cdc => "-->",
            TokenKind::Comment => "COMMENT",
            TokenKind::Url => "URL",
            TokenKind::FunctionStart => "FUNCTION",
            TokenKind::AtKeyword => "@",
            TokenKind::Hash => "HASH",
            TokenKind::Number => "NUMBER",
            TokenKind::Percentage => "PERCENTAGE",
            TokenKind::Dimension => "DIMENSION",
            TokenKind::String => "STRING",
            TokenKind::Ident => "IDENT",
            TokenKind::Delim => "DELIMITER",
        };
        f.write_str(text)
    }
}

/// <https://www.w3.org/TR/css-syntax-3/#whitespace>. Carriage returns and
/// form feeds are normalized away before lexing.
pub(crate) fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

/// <https://www.w3.org/TR/css-syntax-3/#hex-digit>
pub(crate) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// <https://www.w3.org/TR/css-syntax-3/#name-start-code-point>
pub(crate) fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c >= '\u{80}' || c == '_'
}

/// <https://www.w3.org/TR/css-syntax-3/#name-code-point>
pub(crate) fn is_name(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

/// <https://www.w3.org/TR/css-syntax-3/#non-printable-code-point>
pub(crate) fn is_non_printable(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{e}'..='\u{1f}' | '\u{7f}')
}
