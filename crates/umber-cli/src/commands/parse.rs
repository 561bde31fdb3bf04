//! Parse command - parse a file and show the AST.

use std::fs;
use std::path::Path;

use umber_ast::{Block, Node, Prelude, Source, Stylesheet};

pub fn run(file: &Path, json: bool) -> miette::Result<()> {
    let content = fs::read_to_string(file)
        .map_err(|err| miette::miette!("failed to read {}: {}", file.display(), err))?;
    let source = Source::new(file.display().to_string(), content);

    let stylesheet = match umber_parser::parse(&source) {
        Ok(stylesheet) => stylesheet,
        Err(err) => {
            eprintln!("{}", err.to_diagnostic(&source));
            return Err(miette::miette!("parse failed"));
        }
    };

    if json {
        let rendered = serde_json::to_string_pretty(&stylesheet)
            .map_err(|err| miette::miette!("failed to serialize: {}", err))?;
        println!("{}", rendered);
    } else {
        print_summary(&stylesheet);
    }

    Ok(())
}

fn print_summary(stylesheet: &Stylesheet) {
    for node in &stylesheet.nodes {
        match node {
            Node::Comment(_) => println!("Comment"),
            Node::AtRule(rule) => {
                let block = match &rule.block {
                    Some(Block::DeclarationBlock(block)) => {
                        format!(" ({} declarations)", block.declarations.len())
                    }
                    Some(Block::QualifiedRuleBlock(block)) => {
                        format!(" ({} rules)", block.rules.len())
                    }
                    None => String::new(),
                };
                println!("AtRule: @{}{}", rule.name, block);
            }
            Node::QualifiedRule(rule) => {
                let selectors = match &rule.prelude {
                    Prelude::SelectorList(list) => list.selectors.len(),
                    _ => 0,
                };
                let declarations = match &rule.block {
                    Block::DeclarationBlock(block) => block.declarations.len(),
                    Block::QualifiedRuleBlock(_) => 0,
                };
                println!(
                    "QualifiedRule: {} selectors, {} declarations",
                    selectors, declarations
                );
            }
        }
    }

    println!(
        "\n{} nodes, {} imports",
        stylesheet.nodes.len(),
        stylesheet.imports.len()
    );
}
