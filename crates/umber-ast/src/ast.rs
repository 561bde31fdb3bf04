//! Stylesheet node definitions.

use smol_str::SmolStr;

use crate::keyframe::KeyframeSelectorList;
use crate::media::{MediaQuery, MediaQueryList};
use crate::selector::SelectorList;
use crate::span::Span;
use crate::supports::SupportsCondition;
use crate::value::{Identifier, Value};

/// A parsed CSS stylesheet.
///
/// The stylesheet exclusively owns its nodes. The `imports` index is a
/// convenience view into the same tree: it must list exactly the `@import`
/// at-rules present in `nodes`, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stylesheet {
    /// Top-level nodes in document order.
    pub nodes: Vec<Node>,
    /// Side index of `@import` rules.
    pub imports: Vec<ImportSpecifier>,
}

impl Stylesheet {
    /// Rescan `nodes` and rebuild the import index.
    ///
    /// Transforms that add, remove, or reorder nodes call this afterwards
    /// to restore the index invariant.
    pub fn rebuild_imports(&mut self) {
        self.imports.clear();
        for (index, node) in self.nodes.iter().enumerate() {
            if let Node::AtRule(rule) = node {
                if let Some(Prelude::Import(import)) = &rule.prelude {
                    if let Some(value) = import.specifier() {
                        self.imports.push(ImportSpecifier {
                            value: SmolStr::new(value),
                            at_rule: index,
                        });
                    }
                }
            }
        }
    }
}

/// A reference to an `@import` at-rule within the owning stylesheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportSpecifier {
    /// The import target, e.g. `"tokens.css"`.
    pub value: SmolStr,
    /// Index of the at-rule in [`Stylesheet::nodes`]. Never an owning
    /// reference; the tree stays acyclic.
    pub at_rule: usize,
}

/// A top-level stylesheet node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A comment retained from the source.
    Comment(Comment),
    /// An at-rule: `@media`, `@import`, `@keyframes`, ...
    AtRule(AtRule),
    /// A qualified rule: `selector { declarations }`.
    QualifiedRule(QualifiedRule),
}

impl Node {
    /// The node's source span.
    pub fn span(&self) -> Span {
        match self {
            Node::Comment(n) => n.span,
            Node::AtRule(n) => n.span,
            Node::QualifiedRule(n) => n.span,
        }
    }
}

/// A comment: `/* ... */`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub span: Span,
    /// Text between the comment markers.
    pub text: SmolStr,
}

/// An at-rule, e.g. `@media (min-width: 30em) { ... }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtRule {
    pub span: Span,
    /// The rule name without the leading `@`.
    pub name: SmolStr,
    /// The prelude between the name and the block or `;`, if any.
    pub prelude: Option<Prelude>,
    /// The rule's block, if it takes one.
    pub block: Option<Block>,
}

/// A qualified rule: a prelude plus a block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedRule {
    pub span: Span,
    /// A [`SelectorList`], or a [`KeyframeSelectorList`] inside
    /// `@keyframes` blocks.
    pub prelude: Prelude,
    pub block: Block,
}

/// The content between a rule name and its block or terminator.
///
/// The variant is decided by the at-rule shape table; qualified rules
/// always carry selector lists.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prelude {
    SelectorList(SelectorList),
    KeyframeSelectorList(KeyframeSelectorList),
    MediaQueryList(MediaQueryList),
    SupportsCondition(SupportsCondition),
    /// The animation name of a `@keyframes` rule.
    KeyframesName(Identifier),
    Import(ImportPrelude),
    CustomMedia(CustomMediaPrelude),
    /// Fallback for at-rules the parser has no shape for.
    ValueList(ValueList),
}

/// The prelude of an `@import` rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportPrelude {
    pub span: Span,
    /// A string, an unquoted `url(...)`, or a `url("...")` function call.
    pub href: Value,
}

impl ImportPrelude {
    /// The import target as a plain string, if the href form carries one.
    pub fn specifier(&self) -> Option<&str> {
        match &self.href {
            Value::String(s) => Some(&s.value),
            Value::Url(u) => Some(&u.value),
            Value::Function(f) if f.name.eq_ignore_ascii_case("url") => {
                match f.arguments.first() {
                    Some(Value::String(s)) => Some(&s.value),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// The prelude of a `@custom-media` rule: `@custom-media --name query;`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomMediaPrelude {
    pub span: Span,
    /// The alias, including its `--` prefix.
    pub name: Identifier,
    /// The single media query the alias expands to.
    pub query: MediaQuery,
}

/// An unparsed-shape prelude: a flat list of values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueList {
    pub span: Span,
    pub values: Vec<Value>,
}

/// A block of declarations or a block of nested rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    DeclarationBlock(DeclarationBlock),
    QualifiedRuleBlock(QualifiedRuleBlock),
}

impl Block {
    pub fn span(&self) -> Span {
        match self {
            Block::DeclarationBlock(b) => b.span,
            Block::QualifiedRuleBlock(b) => b.span,
        }
    }
}

/// A block containing declarations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationBlock {
    pub span: Span,
    pub declarations: Vec<Declaration>,
}

/// A block containing nested qualified rules, e.g. the body of `@media`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedRuleBlock {
    pub span: Span,
    pub rules: Vec<QualifiedRule>,
}

/// A property assignment, e.g. `width: 2px`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub span: Span,
    /// The property being assigned.
    pub property: SmolStr,
    /// The values assigned to the property, commas included.
    pub values: Vec<Value>,
    /// Whether the declaration was marked `!important`.
    pub important: bool,
}
