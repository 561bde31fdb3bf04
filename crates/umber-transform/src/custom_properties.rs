//! Compile-time `var()` resolution.
//!
//! Definitions are `--*` declarations on `:root` rules, collected in
//! document order with later definitions overwriting earlier ones.
//! Inlining removes the definitions and splices the stored values over
//! every `var(--name)` whose definition is known, recursing into nested
//! function arguments. References to unknown names (with or without a
//! fallback) pass through unchanged.

use std::collections::HashMap;

use smol_str::SmolStr;
use umber_ast::{
    Block, Function, Node, Prelude, SelectorList, SelectorPart, Stylesheet, Value,
};

pub(crate) fn apply(stylesheet: &mut Stylesheet) {
    let mut table: HashMap<SmolStr, Vec<Value>> = HashMap::new();

    for node in &stylesheet.nodes {
        if let Node::QualifiedRule(rule) = node {
            if let (Prelude::SelectorList(list), Block::DeclarationBlock(block)) =
                (&rule.prelude, &rule.block)
            {
                if !is_root_selector(list) {
                    continue;
                }
                for declaration in &block.declarations {
                    if declaration.property.starts_with("--") {
                        table.insert(declaration.property.clone(), declaration.values.clone());
                    }
                }
            }
        }
    }

    for node in &mut stylesheet.nodes {
        if let Node::QualifiedRule(rule) = node {
            if let (Prelude::SelectorList(list), Block::DeclarationBlock(block)) =
                (&rule.prelude, &mut rule.block)
            {
                if is_root_selector(list) {
                    block
                        .declarations
                        .retain(|declaration| !declaration.property.starts_with("--"));
                }
            }
        }
    }

    for node in &mut stylesheet.nodes {
        rewrite_node(node, &table);
    }
}

/// Whether any selector in the list is exactly `:root`.
fn is_root_selector(list: &SelectorList) -> bool {
    list.selectors.iter().any(|selector| {
        selector.parts.len() == 1
            && matches!(
                &selector.parts[0],
                SelectorPart::PseudoClass(pseudo)
                    if pseudo.name == "root" && pseudo.arguments.is_none()
            )
    })
}

fn rewrite_node(node: &mut Node, table: &HashMap<SmolStr, Vec<Value>>) {
    match node {
        Node::QualifiedRule(rule) => rewrite_block(&mut rule.block, table),
        Node::AtRule(rule) => {
            if let Some(block) = &mut rule.block {
                rewrite_block(block, table);
            }
        }
        Node::Comment(_) => {}
    }
}

fn rewrite_block(block: &mut Block, table: &HashMap<SmolStr, Vec<Value>>) {
    match block {
        Block::DeclarationBlock(block) => {
            for declaration in &mut block.declarations {
                declaration.values = resolve_values(std::mem::take(&mut declaration.values), table);
            }
        }
        Block::QualifiedRuleBlock(block) => {
            for rule in &mut block.rules {
                rewrite_block(&mut rule.block, table);
            }
        }
    }
}

fn resolve_values(values: Vec<Value>, table: &HashMap<SmolStr, Vec<Value>>) -> Vec<Value> {
    let mut out = Vec::with_capacity(values.len());

    for value in values {
        match value {
            Value::Function(mut function) => {
                if function.name == "var" {
                    match referenced_name(&function).and_then(|name| table.get(&name)) {
                        Some(replacement) => out.extend(replacement.iter().cloned()),
                        None => out.push(Value::Function(function)),
                    }
                } else {
                    function.arguments = resolve_values(function.arguments, table);
                    out.push(Value::Function(function));
                }
            }
            other => out.push(other),
        }
    }

    out
}

/// The `--name` referenced by a `var()` call, from its first argument.
fn referenced_name(function: &Function) -> Option<SmolStr> {
    match function.arguments.first() {
        Some(Value::Identifier(identifier)) if identifier.value.starts_with("--") => {
            Some(identifier.value.clone())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{transform, Options, Transform};
    use umber_ast::Source;

    fn inline(input: &str) -> String {
        let source = Source::new("main.css", input);
        let mut stylesheet = umber_parser::parse(&source).unwrap();
        transform(
            &mut stylesheet,
            Options {
                custom_properties: Transform::Inline,
                ..Options::default()
            },
        )
        .unwrap();
        umber_printer::print(&stylesheet)
    }

    #[test]
    fn test_resolves_known_references() {
        assert_eq!(
            inline(":root { --accent: #ff0000 } .a { color: var(--accent) }"),
            ":root{}.a{color:#ff0000}"
        );
    }

    #[test]
    fn test_resolves_multi_value_definitions() {
        assert_eq!(
            inline(":root { --stack: \"Helvetica\", sans-serif } .a { font-family: var(--stack) }"),
            ":root{}.a{font-family:\"Helvetica\",sans-serif}"
        );
    }

    #[test]
    fn test_resolves_inside_nested_functions() {
        assert_eq!(
            inline(":root { --gap: 10px } .a { width: calc(100% - var(--gap)) }"),
            ":root{}.a{width:calc(100% - 10px)}"
        );
    }

    #[test]
    fn test_unknown_references_pass_through() {
        assert_eq!(
            inline(".a { color: var(--missing) }"),
            ".a{color:var(--missing)}"
        );
        assert_eq!(
            inline(".a { color: var(--missing, blue) }"),
            ".a{color:var(--missing,blue)}"
        );
    }

    #[test]
    fn test_known_reference_ignores_fallback() {
        assert_eq!(
            inline(":root { --accent: green } .a { color: var(--accent, blue) }"),
            ":root{}.a{color:green}"
        );
    }

    #[test]
    fn test_resolves_inside_media_blocks() {
        assert_eq!(
            inline(
                ":root { --accent: green }
                 @media screen { .a { color: var(--accent) } }"
            ),
            ":root{}@media screen{.a{color:green}}"
        );
    }
}
