//! Supports condition definitions.

use crate::ast::Declaration;
use crate::span::Span;
use crate::value::Identifier;

/// An `@supports` prelude, e.g. `(display: grid) and (not (display: inline-grid))`.
///
/// Like media queries, the condition is a flat sequence of keywords and
/// parenthesized terms; nesting only happens through parentheses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupportsCondition {
    pub span: Span,
    pub parts: Vec<SupportsPart>,
}

/// A part of a supports condition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SupportsPart {
    /// A combinator keyword: `and`, `or`, or `not`.
    Keyword(Identifier),
    /// A parenthesized term.
    InParens(SupportsInParens),
}

/// A parenthesized supports term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupportsInParens {
    pub span: Span,
    pub content: SupportsContent,
}

/// The content of a parenthesized supports term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SupportsContent {
    /// A feature test: `(display: grid)`.
    Declaration(Box<Declaration>),
    /// A nested condition: `(not (display: grid))`.
    Condition(Box<SupportsCondition>),
}
