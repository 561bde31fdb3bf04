//! The tokenizer state machine.

use crate::error::LexError;
use crate::token::{is_hex_digit, is_name, is_name_start, is_non_printable, is_whitespace};
use crate::TokenKind;

/// A streaming CSS lexer with single-token lookahead.
///
/// Callers push the lexer along with [`Lexer::advance`]; after each call,
/// [`current`](Lexer::current) holds the token kind,
/// [`current_string`](Lexer::current_string) its textual payload (name,
/// unit, delimiter, string content), and
/// [`current_numeral`](Lexer::current_numeral) the literal numeral of
/// numeric tokens. Payloads are slices of the source; they are not cleared
/// between tokens that carry none.
#[derive(Debug)]
pub struct Lexer<'s> {
    /// The source being lexed. Expected to be normalized (no `\r`/`\f`).
    source: &'s str,

    /// The last code point consumed with `step`, or `None` at the end.
    ch: Option<char>,

    /// Byte offset one past `ch`.
    pos: usize,

    /// Byte offset of `ch`.
    last_pos: usize,

    /// Byte offset of the current token's first byte.
    token_start: usize,

    /// Byte offset one past the current token's last byte.
    token_end: usize,

    /// The kind of the token produced by the last `advance`.
    pub current: TokenKind,

    /// The payload of the last string-carrying token.
    pub current_string: &'s str,

    /// The numeral of the last numeric token.
    pub current_numeral: &'s str,

    /// When true, whitespace runs yield [`TokenKind::Whitespace`] tokens;
    /// when false, they are skipped silently. The parser flips this inside
    /// selectors and restores it on exit.
    pub retain_whitespace: bool,
}

impl<'s> Lexer<'s> {
    /// Create a lexer and prime the first token.
    pub fn new(source: &'s str) -> Result<Self, LexError> {
        let mut lexer = Self {
            source,
            ch: None,
            pos: 0,
            last_pos: 0,
            token_start: 0,
            token_end: 0,
            current: TokenKind::Eof,
            current_string: "",
            current_numeral: "",
            retain_whitespace: false,
        };
        lexer.step();
        lexer.advance()?;
        Ok(lexer)
    }

    /// The current token's kind, without consuming it.
    pub fn peek_kind(&self) -> TokenKind {
        self.current
    }

    /// Byte offset of the current token's first byte.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Byte offset one past the current token's last byte.
    pub fn token_end(&self) -> usize {
        self.token_end
    }

    /// Assert the current token's kind, then advance past it.
    pub fn expect(&mut self, kind: TokenKind) -> Result<(), LexError> {
        if self.current != kind {
            return Err(LexError::Expected {
                expected: kind,
                found: self.current,
                span: self.token_start..self.token_end,
            });
        }
        self.advance()
    }

    /// Consume the next code point.
    fn step(&mut self) {
        match self.source[self.pos..].chars().next() {
            Some(c) => {
                self.ch = Some(c);
                self.last_pos = self.pos;
                self.pos += c.len_utf8();
            }
            None => {
                self.ch = None;
                self.last_pos = self.source.len();
            }
        }
    }

    /// The ith unconsumed code point after `ch`, without consuming it.
    fn peek(&self, i: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(i)
    }

    /// Lex the next token, per
    /// <https://www.w3.org/TR/css-syntax-3/#consume-token>.
    pub fn advance(&mut self) -> Result<(), LexError> {
        // A loop so the whitespace-skipping path can continue on to the
        // next token. Every other path falls through to the single return.
        loop {
            self.token_start = self.last_pos;
            match self.ch {
                None => self.current = TokenKind::Eof,

                Some(';') => {
                    self.current = TokenKind::Semicolon;
                    self.step();
                }

                Some(':') => {
                    self.current = TokenKind::Colon;
                    self.step();
                }

                Some(',') => {
                    self.current = TokenKind::Comma;
                    self.step();
                }

                Some('(') => {
                    self.current = TokenKind::LParen;
                    self.step();
                }

                Some(')') => {
                    self.current = TokenKind::RParen;
                    self.step();
                }

                Some('[') => {
                    self.current = TokenKind::LBracket;
                    self.step();
                }

                Some(']') => {
                    self.current = TokenKind::RBracket;
                    self.step();
                }

                Some('{') => {
                    self.current = TokenKind::LCurly;
                    self.step();
                }

                Some('}') => {
                    self.current = TokenKind::RCurly;
                    self.step();
                }

                Some('+') => {
                    if starts_number(self.ch, self.peek(0), self.peek(1)) {
                        self.numeric_token();
                    } else {
                        self.delim_token();
                    }
                }

                Some('-') => {
                    if starts_number(self.ch, self.peek(0), self.peek(1)) {
                        self.numeric_token();
                    } else if self.peek(0) == Some('-') && self.peek(1) == Some('>') {
                        self.step();
                        self.step();
                        self.step();
                        self.current = TokenKind::Cdc;
                    } else if starts_identifier(self.ch, self.peek(0), self.peek(1)) {
                        self.ident_like_token()?;
                    } else {
                        self.delim_token();
                    }
                }

                Some('<') => {
                    if self.peek(0) == Some('!')
                        && self.peek(1) == Some('-')
                        && self.peek(2) == Some('-')
                    {
                        self.step();
                        self.step();
                        self.step();
                        self.step();
                        self.current = TokenKind::Cdo;
                    } else {
                        self.delim_token();
                    }
                }

                Some('@') => {
                    if starts_identifier(self.peek(0), self.peek(1), self.peek(2)) {
                        self.step();
                        let start = self.last_pos;
                        self.name();
                        self.current_string = &self.source[start..self.last_pos];
                        self.current = TokenKind::AtKeyword;
                    } else {
                        self.delim_token();
                    }
                }

                Some('#') => {
                    let starts_name = matches!(self.peek(0), Some(c) if is_name(c))
                        || starts_escape(self.peek(0), self.peek(1));
                    if starts_name {
                        self.step();
                        let start = self.last_pos;
                        self.name();
                        self.current_string = &self.source[start..self.last_pos];
                        self.current = TokenKind::Hash;
                    } else {
                        self.delim_token();
                    }
                }

                Some('.') => {
                    if starts_number(self.ch, self.peek(0), self.peek(1)) {
                        self.numeric_token();
                    } else {
                        self.delim_token();
                    }
                }

                Some('\\') => {
                    if !starts_escape(self.ch, self.peek(0)) {
                        return Err(LexError::InvalidEscape {
                            span: self.last_pos..self.pos,
                        });
                    }
                    self.ident_like_token()?;
                }

                Some('/') => self.comment_token()?,

                Some('"') | Some('\'') => self.string_token()?,

                Some(c) => {
                    if is_whitespace(c) {
                        if self.retain_whitespace {
                            while matches!(self.ch, Some(w) if is_whitespace(w)) {
                                self.step();
                            }
                            self.current = TokenKind::Whitespace;
                        } else {
                            self.step();
                            continue;
                        }
                    } else if c.is_ascii_digit() {
                        self.numeric_token();
                    } else if is_name_start(c) {
                        self.ident_like_token()?;
                    } else {
                        self.delim_token();
                    }
                }
            }

            self.token_end = self.last_pos;
            return Ok(());
        }
    }

    /// <https://www.w3.org/TR/css-syntax-3/#consume-a-numeric-token>
    fn numeric_token(&mut self) {
        let start = self.last_pos;
        self.number();
        self.current_numeral = &self.source[start..self.last_pos];

        if starts_identifier(self.ch, self.peek(0), self.peek(1)) {
            let unit_start = self.last_pos;
            self.name();
            self.current_string = &self.source[unit_start..self.last_pos];
            self.current = TokenKind::Dimension;
        } else if self.ch == Some('%') {
            self.step();
            self.current = TokenKind::Percentage;
        } else {
            self.current = TokenKind::Number;
        }
    }

    /// <https://www.w3.org/TR/css-syntax-3/#consume-a-number>. Integers
    /// and reals are not distinguished; the numeral is kept as text.
    fn number(&mut self) {
        if matches!(self.ch, Some('+') | Some('-')) {
            self.step();
        }

        while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
            self.step();
        }

        if self.ch == Some('.') && matches!(self.peek(0), Some(c) if c.is_ascii_digit()) {
            self.step();
            self.step();
            while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
                self.step();
            }
        }

        let exponent = matches!(self.ch, Some('e') | Some('E'))
            && (matches!(self.peek(0), Some(c) if c.is_ascii_digit())
                || (matches!(self.peek(0), Some('+') | Some('-'))
                    && matches!(self.peek(1), Some(c) if c.is_ascii_digit())));
        if exponent {
            self.step();
            if matches!(self.ch, Some('+') | Some('-')) {
                self.step();
            }
            while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
                self.step();
            }
        }
    }

    /// <https://www.w3.org/TR/css-syntax-3/#consume-an-ident-like-token>.
    ///
    /// `url(` with unquoted content becomes a single [`TokenKind::Url`]
    /// token; with quoted content it degrades to a function start so the
    /// parser sees an ordinary string argument.
    fn ident_like_token(&mut self) -> Result<(), LexError> {
        let start = self.last_pos;
        self.name();
        self.current_string = &self.source[start..self.last_pos];

        if self.ch != Some('(') {
            self.current = TokenKind::Ident;
            return Ok(());
        }

        if !self.current_string.eq_ignore_ascii_case("url") {
            self.step();
            self.current = TokenKind::FunctionStart;
            return Ok(());
        }

        self.step();
        while matches!(self.ch, Some(c) if is_whitespace(c)) {
            self.step();
        }

        if matches!(self.ch, Some('"') | Some('\'')) {
            self.current = TokenKind::FunctionStart;
            return Ok(());
        }

        let content_start = self.last_pos;
        let mut content_end = self.last_pos;
        loop {
            match self.ch {
                Some(')') => {
                    self.current_string = &self.source[content_start..content_end];
                    self.step();
                    self.current = TokenKind::Url;
                    return Ok(());
                }
                None => {
                    return Err(LexError::UnexpectedEof {
                        span: self.token_start..self.last_pos,
                    })
                }
                Some(c @ ('"' | '\'' | '(')) => {
                    return Err(LexError::UnexpectedToken {
                        found: c,
                        span: self.last_pos..self.pos,
                    })
                }
                Some('\\') => {
                    if !starts_escape(self.ch, self.peek(0)) {
                        return Err(LexError::UnexpectedToken {
                            found: '\\',
                            span: self.last_pos..self.pos,
                        });
                    }
                    self.step();
                    self.escaped();
                    content_end = self.last_pos;
                }
                Some(c) if is_whitespace(c) => {
                    // Whitespace is only legal immediately before the
                    // closing paren; the token value excludes it.
                    while matches!(self.ch, Some(w) if is_whitespace(w)) {
                        self.step();
                    }
                    match self.ch {
                        Some(')') => {}
                        None => {
                            return Err(LexError::UnexpectedEof {
                                span: self.token_start..self.last_pos,
                            })
                        }
                        Some(c) => {
                            return Err(LexError::UnexpectedToken {
                                found: c,
                                span: self.last_pos..self.pos,
                            })
                        }
                    }
                }
                Some(c) if is_non_printable(c) => {
                    return Err(LexError::UnexpectedToken {
                        found: c,
                        span: self.last_pos..self.pos,
                    })
                }
                Some(_) => {
                    self.step();
                    content_end = self.last_pos;
                }
            }
        }
    }

    fn comment_token(&mut self) -> Result<(), LexError> {
        self.step();
        match self.ch {
            Some('*') => self.step(),
            Some(c) => {
                return Err(LexError::BadCommentStart {
                    found: c,
                    span: self.last_pos..self.pos,
                })
            }
            None => {
                return Err(LexError::UnexpectedEof {
                    span: self.token_start..self.last_pos,
                })
            }
        }

        let start = self.last_pos;
        loop {
            match self.ch {
                Some('*') if self.peek(0) == Some('/') => {
                    let end = self.last_pos;
                    self.step();
                    self.step();
                    self.current_string = &self.source[start..end];
                    self.current = TokenKind::Comment;
                    return Ok(());
                }
                Some(_) => self.step(),
                None => {
                    return Err(LexError::UnexpectedEof {
                        span: self.token_start..self.last_pos,
                    })
                }
            }
        }
    }

    /// Consume a string token. Escapes are consumed but kept raw; a bare
    /// newline inside the string is an error.
    fn string_token(&mut self) -> Result<(), LexError> {
        let mark = self.ch;
        self.step();
        let start = self.last_pos;

        loop {
            match self.ch {
                c if c == mark => {
                    self.current_string = &self.source[start..self.last_pos];
                    self.step();
                    self.current = TokenKind::String;
                    return Ok(());
                }
                Some('\n') => {
                    return Err(LexError::UnterminatedString {
                        span: self.token_start..self.last_pos,
                    })
                }
                Some('\\') => {
                    self.step();
                    match self.ch {
                        // Escaped newlines continue the string.
                        Some('\n') => self.step(),
                        None => {
                            return Err(LexError::UnexpectedEof {
                                span: self.token_start..self.last_pos,
                            })
                        }
                        Some(_) => self.escaped(),
                    }
                }
                None => {
                    return Err(LexError::UnexpectedEof {
                        span: self.token_start..self.last_pos,
                    })
                }
                Some(_) => self.step(),
            }
        }
    }

    /// Consume a single code point and save it as a delimiter.
    fn delim_token(&mut self) {
        let start = self.last_pos;
        self.step();
        self.current_string = &self.source[start..self.last_pos];
        self.current = TokenKind::Delim;
    }

    /// <https://www.w3.org/TR/css-syntax-3/#consume-a-name>
    fn name(&mut self) {
        loop {
            match self.ch {
                Some(c) if is_name(c) => self.step(),
                Some('\\') if starts_escape(self.ch, self.peek(0)) => {
                    self.step();
                    self.escaped();
                }
                _ => return,
            }
        }
    }

    /// <https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point>.
    ///
    /// Called with `ch` on the code point after the backslash. The bytes
    /// are recorded, never interpreted: a hex escape consumes up to six
    /// hex digits plus one trailing whitespace.
    fn escaped(&mut self) {
        if matches!(self.ch, Some(c) if is_hex_digit(c)) {
            let mut digits = 1;
            self.step();
            while digits < 6 && matches!(self.ch, Some(c) if is_hex_digit(c)) {
                self.step();
                digits += 1;
            }
            if matches!(self.ch, Some(c) if is_whitespace(c)) {
                self.step();
            }
        } else {
            self.step();
        }
    }
}

/// <https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier>
fn starts_identifier(p0: Option<char>, p1: Option<char>, p2: Option<char>) -> bool {
    match p0 {
        Some('-') => {
            matches!(p1, Some('-'))
                || matches!(p1, Some(c) if is_name_start(c))
                || starts_escape(p1, p2)
        }
        Some('\\') => starts_escape(p0, p1),
        Some(c) => is_name_start(c),
        None => false,
    }
}

/// <https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape>
fn starts_escape(p0: Option<char>, p1: Option<char>) -> bool {
    p0 == Some('\\') && p1 != Some('\n')
}

/// <https://www.w3.org/TR/css-syntax-3/#starts-with-a-number>
fn starts_number(p0: Option<char>, p1: Option<char>, p2: Option<char>) -> bool {
    match p0 {
        Some('+') | Some('-') => match p1 {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => matches!(p2, Some(c) if c.is_ascii_digit()),
            _ => false,
        },
        Some('.') => matches!(p1, Some(c) if c.is_ascii_digit()),
        Some(c) => c.is_ascii_digit(),
        None => false,
    }
}
