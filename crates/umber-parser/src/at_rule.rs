//! The at-rule shape table.
//!
//! This is the single point of knowledge about at-rule shapes: which
//! prelude an at-rule name takes, and what follows it. Unknown names fall
//! back to a flat value-list prelude with an optional declaration block,
//! which is also how shapes like `@font-face` and `@charset` parse.

/// The prelude an at-rule name takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreludeShape {
    /// An animation name identifier, e.g. `@keyframes slide`.
    KeyframesName,
    /// A comma-separated media query list.
    MediaQueryList,
    /// A supports condition.
    SupportsCondition,
    /// A single URL or string value.
    Import,
    /// A `--name` identifier followed by exactly one media query.
    CustomMedia,
    /// A flat list of values.
    ValueList,
}

/// What follows an at-rule's prelude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockShape {
    /// A required block of nested qualified rules.
    QualifiedRules,
    /// A required block of keyframe rules.
    KeyframeRules,
    /// No block; the rule is terminated by `;`.
    None,
    /// An optional declaration block, otherwise terminated by `;`.
    OptionalDeclarations,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AtRuleShape {
    pub prelude: PreludeShape,
    pub block: BlockShape,
}

/// Look up the shape for an at-rule name (without the `@`).
pub(crate) fn shape(name: &str) -> AtRuleShape {
    match name {
        "media" => AtRuleShape {
            prelude: PreludeShape::MediaQueryList,
            block: BlockShape::QualifiedRules,
        },
        "supports" => AtRuleShape {
            prelude: PreludeShape::SupportsCondition,
            block: BlockShape::QualifiedRules,
        },
        "keyframes" | "-webkit-keyframes" => AtRuleShape {
            prelude: PreludeShape::KeyframesName,
            block: BlockShape::KeyframeRules,
        },
        "import" => AtRuleShape {
            prelude: PreludeShape::Import,
            block: BlockShape::None,
        },
        "custom-media" => AtRuleShape {
            prelude: PreludeShape::CustomMedia,
            block: BlockShape::None,
        },
        _ => AtRuleShape {
            prelude: PreludeShape::ValueList,
            block: BlockShape::OptionalDeclarations,
        },
    }
}
