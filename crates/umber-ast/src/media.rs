//! Media query definitions.
//!
//! Queries keep the same flat shape as selectors: a query is a sequence of
//! keywords (`screen`, `and`, `not`, ...) and parenthesized features, so
//! rewrites like custom-media substitution are part-level splices.

use crate::span::Span;
use crate::value::{Identifier, Value};

/// One or more comma-separated media queries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaQueryList {
    pub span: Span,
    pub queries: Vec<MediaQuery>,
}

/// A single media query, e.g. `screen and (min-width: 30em)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaQuery {
    pub span: Span,
    pub parts: Vec<MediaQueryPart>,
}

/// A part of a media query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaQueryPart {
    /// A bare identifier: a media type or a combinator keyword.
    Keyword(Identifier),
    /// A parenthesized feature condition.
    Feature(MediaFeature),
}

/// A parenthesized media feature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaFeature {
    Plain(MediaFeaturePlain),
    Range(MediaFeatureRange),
}

impl MediaFeature {
    pub fn span(&self) -> Span {
        match self {
            MediaFeature::Plain(f) => f.span,
            MediaFeature::Range(f) => f.span,
        }
    }
}

/// A name-value feature like `(max-width: 30em)`, or a boolean feature
/// like `(color)` when `values` is empty. Custom media references
/// `(--name)` are boolean features whose property starts with `--`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaFeaturePlain {
    pub span: Span,
    pub property: Identifier,
    pub values: Vec<Value>,
}

/// A range feature like `(200px < width < 600px)`.
///
/// Either side may be absent: `(width < 600px)` has no left side and
/// `(200px < width)` has no right side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaFeatureRange {
    pub span: Span,
    pub left: Option<Value>,
    pub left_operator: Option<RangeOperator>,
    pub property: Identifier,
    pub right_operator: Option<RangeOperator>,
    pub right: Option<Value>,
}

/// A comparison operator in a range feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeOperator {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl RangeOperator {
    /// The operator's source text.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOperator::Lt => "<",
            RangeOperator::Le => "<=",
            RangeOperator::Gt => ">",
            RangeOperator::Ge => ">=",
            RangeOperator::Eq => "=",
        }
    }
}
