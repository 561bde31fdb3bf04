//! Selector definitions.
//!
//! A selector is a flat ordered sequence of parts: complex and compound
//! structure is implicit in adjacency, [`Whitespace`], and
//! [`CombinatorSelector`] parts, following Selectors Level 4's token-level
//! view rather than a nested grammar.

use smol_str::SmolStr;

use crate::span::Span;
use crate::value::{Identifier, Value};

/// One or more comma-separated selectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorList {
    pub span: Span,
    pub selectors: Vec<Selector>,
}

/// A single selector.
///
/// Invariant: parts never begin or end with [`SelectorPart::Whitespace`]
/// (the parser trims), and two combinators are never adjacent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selector {
    pub span: Span,
    pub parts: Vec<SelectorPart>,
}

/// A part of a selector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectorPart {
    Type(TypeSelector),
    Class(ClassSelector),
    Id(IdSelector),
    Combinator(CombinatorSelector),
    PseudoClass(PseudoClassSelector),
    PseudoElement(PseudoElementSelector),
    Whitespace(Whitespace),
    Attribute(AttributeSelector),
}

impl SelectorPart {
    /// The part's source span.
    pub fn span(&self) -> Span {
        match self {
            SelectorPart::Type(p) => p.span,
            SelectorPart::Class(p) => p.span,
            SelectorPart::Id(p) => p.span,
            SelectorPart::Combinator(p) => p.span,
            SelectorPart::PseudoClass(p) => p.span,
            SelectorPart::PseudoElement(p) => p.span,
            SelectorPart::Whitespace(p) => p.span,
            SelectorPart::Attribute(p) => p.span,
        }
    }
}

/// A type selector, e.g. `div`. The universal selector is a type selector
/// named `*`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSelector {
    pub span: Span,
    pub name: SmolStr,
}

/// A class selector, e.g. `.test`. The name excludes the leading `.`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassSelector {
    pub span: Span,
    pub name: SmolStr,
}

/// An ID selector, e.g. `#container`. The name excludes the leading `#`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdSelector {
    pub span: Span,
    pub name: SmolStr,
}

/// A combinator between selector parts: `+`, `>`, `~`, or `|`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinatorSelector {
    pub span: Span,
    pub operator: SmolStr,
}

/// A pseudo-class selector, e.g. `:hover` or `:not(.a)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PseudoClassSelector {
    pub span: Span,
    pub name: SmolStr,
    /// Arguments of a functional pseudo-class, if any.
    pub arguments: Option<PseudoClassArguments>,
}

/// Arguments of a functional pseudo-class.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PseudoClassArguments {
    /// A nested selector list, e.g. `:not(.a, .b)`.
    SelectorList(SelectorList),
    /// `even` or `odd` for the `nth-*` family.
    Identifier(Identifier),
    /// An `An+B` argument for the `nth-*` family.
    AnPlusB(AnPlusB),
}

/// An `An+B` index argument, e.g. `2n+1`.
///
/// All fields are literal source text; `a` is empty when the coefficient
/// is implicit and `operator`/`b` are empty when the offset is absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnPlusB {
    pub span: Span,
    pub a: SmolStr,
    /// `+`, `-`, or empty.
    pub operator: SmolStr,
    pub b: SmolStr,
}

/// A pseudo-element selector, e.g. `::before`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PseudoElementSelector {
    pub span: Span,
    pub inner: PseudoClassSelector,
}

/// A whitespace sequence. Whitespace is only kept in the AST where it is
/// syntactically meaningful, i.e. between selector parts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Whitespace {
    pub span: Span,
}

/// An attribute selector, e.g. `[href]` or `[href^="https"]`.
///
/// The `=` is implied whenever `value` is present.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSelector {
    pub span: Span,
    /// The attribute to match.
    pub property: SmolStr,
    /// `^`, `~`, `$`, `*`, or empty for a plain `=` match.
    pub pre_operator: SmolStr,
    /// The value to match against, if any.
    pub value: Option<Value>,
}
