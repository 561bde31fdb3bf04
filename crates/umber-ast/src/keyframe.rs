//! Keyframe selector definitions.

use crate::span::Span;
use crate::value::{Identifier, Percentage};

/// The comma-separated selector list of a rule inside `@keyframes`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyframeSelectorList {
    pub span: Span,
    pub selectors: Vec<KeyframeSelector>,
}

/// A selector for a keyframe rule: a percentage, or the identifiers
/// `from`/`to`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyframeSelector {
    Percentage(Percentage),
    Ident(Identifier),
}
