//! Custom media inlining.
//!
//! `@custom-media --name query;` declares an alias; `(--name)` inside a
//! `@media` prelude references it. Inlining collects the aliases, removes
//! the declarations, and splices each alias's query parts over its
//! references. Definitions are collected in document order with later
//! definitions overwriting earlier ones; unknown references pass through
//! unchanged.

use std::collections::HashMap;

use smol_str::SmolStr;
use umber_ast::{MediaFeature, MediaQuery, MediaQueryPart, Node, Prelude, Stylesheet};

pub(crate) fn apply(stylesheet: &mut Stylesheet) {
    let mut table: HashMap<SmolStr, MediaQuery> = HashMap::new();
    for node in &stylesheet.nodes {
        if let Node::AtRule(rule) = node {
            if let Some(Prelude::CustomMedia(prelude)) = &rule.prelude {
                table.insert(prelude.name.value.clone(), prelude.query.clone());
            }
        }
    }

    stylesheet.nodes.retain(|node| {
        !matches!(
            node,
            Node::AtRule(rule) if matches!(rule.prelude, Some(Prelude::CustomMedia(_)))
        )
    });

    for node in &mut stylesheet.nodes {
        if let Node::AtRule(rule) = node {
            if let Some(Prelude::MediaQueryList(list)) = &mut rule.prelude {
                for query in &mut list.queries {
                    substitute(query, &table);
                }
            }
        }
    }

    stylesheet.rebuild_imports();
}

fn substitute(query: &mut MediaQuery, table: &HashMap<SmolStr, MediaQuery>) {
    let parts = std::mem::take(&mut query.parts);
    let mut out = Vec::with_capacity(parts.len());

    for part in parts {
        let alias = match &part {
            MediaQueryPart::Feature(MediaFeature::Plain(plain))
                if plain.values.is_empty() && plain.property.value.starts_with("--") =>
            {
                Some(plain.property.value.clone())
            }
            _ => None,
        };

        match alias.and_then(|name| table.get(&name)) {
            Some(replacement) => out.extend(replacement.parts.iter().cloned()),
            None => out.push(part),
        }
    }

    query.parts = out;
}
