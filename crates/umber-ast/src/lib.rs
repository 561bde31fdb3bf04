//! # Umber AST
//!
//! Data model for the umber CSS compiler: source text, spans, and the
//! stylesheet tree produced by the parser and consumed by the transformer
//! and printer.
//!
//! Every node is a closed sum type; dispatch is by `match`, so adding a
//! variant is a deliberate breaking change that surfaces at every use site.

mod ast;
mod keyframe;
mod media;
mod selector;
mod source;
mod span;
mod supports;
mod value;

pub use ast::{
    AtRule, Block, Comment, CustomMediaPrelude, Declaration, DeclarationBlock, ImportPrelude,
    ImportSpecifier, Node, Prelude, QualifiedRule, QualifiedRuleBlock, Stylesheet, ValueList,
};
pub use keyframe::{KeyframeSelector, KeyframeSelectorList};
pub use media::{
    MediaFeature, MediaFeaturePlain, MediaFeatureRange, MediaQuery, MediaQueryList, MediaQueryPart,
    RangeOperator,
};
pub use selector::{
    AnPlusB, AttributeSelector, ClassSelector, CombinatorSelector, IdSelector,
    PseudoClassArguments, PseudoClassSelector, PseudoElementSelector, Selector, SelectorList,
    SelectorPart, TypeSelector, Whitespace,
};
pub use source::Source;
pub use span::Span;
pub use supports::{SupportsCondition, SupportsContent, SupportsInParens, SupportsPart};
pub use value::{
    Comma, Dimension, Function, HexColor, Identifier, MathOperator, Number, Percentage,
    StringValue, Url, Value,
};
