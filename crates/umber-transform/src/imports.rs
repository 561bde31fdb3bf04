//! Import inlining.
//!
//! Each entry of the stylesheet's import index is loaded through the
//! caller's resolver, parsed, recursively transformed with the same
//! options, and spliced in place of its `@import` node, in document
//! order. Cycle detection is the resolver's concern: the core never
//! touches the filesystem itself.

use std::collections::HashMap;

use umber_ast::{Source, Stylesheet};

use crate::{Options, TransformError, Transformer};

/// Loads `@import` targets. Implementations decide how specifiers map to
/// sources (filesystem, archives, tests).
pub trait ImportResolver {
    fn load(&self, specifier: &str) -> std::io::Result<Source>;
}

pub(crate) fn apply(
    stylesheet: &mut Stylesheet,
    resolver: &dyn ImportResolver,
    options: Options,
) -> Result<(), TransformError> {
    if stylesheet.imports.is_empty() {
        return Ok(());
    }

    let targets: HashMap<usize, String> = stylesheet
        .imports
        .iter()
        .map(|import| (import.at_rule, import.value.to_string()))
        .collect();

    let nodes = std::mem::take(&mut stylesheet.nodes);
    let mut out = Vec::with_capacity(nodes.len());

    for (index, node) in nodes.into_iter().enumerate() {
        let Some(specifier) = targets.get(&index) else {
            out.push(node);
            continue;
        };

        let source = resolver.load(specifier).map_err(|err| TransformError::Io {
            path: specifier.clone(),
            source: err,
        })?;

        let mut imported = crate::parse_import(&source)?;
        Transformer::new(options)
            .with_resolver(resolver)
            .transform(&mut imported)?;

        out.extend(imported.nodes);
    }

    stylesheet.nodes = out;
    stylesheet.rebuild_imports();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Transform, Transformer};

    /// A resolver backed by an in-memory table.
    struct MapResolver(HashMap<&'static str, &'static str>);

    impl ImportResolver for MapResolver {
        fn load(&self, specifier: &str) -> std::io::Result<Source> {
            match self.0.get(specifier) {
                Some(content) => Ok(Source::new(specifier, *content)),
                None => Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    specifier.to_string(),
                )),
            }
        }
    }

    fn inline(input: &str, files: &[(&'static str, &'static str)]) -> Stylesheet {
        let source = Source::new("main.css", input);
        let mut stylesheet = umber_parser::parse(&source).unwrap();
        let resolver = MapResolver(files.iter().copied().collect());
        Transformer::new(Options {
            import_rules: Transform::Inline,
            ..Options::default()
        })
        .with_resolver(&resolver)
        .transform(&mut stylesheet)
        .unwrap();
        stylesheet
    }

    #[test]
    fn test_inlines_in_place() {
        let stylesheet = inline(
            "@import \"a.css\";\n.main { color: green }",
            &[("a.css", ".imported { color: red }")],
        );
        assert_eq!(
            umber_printer::print(&stylesheet),
            ".imported{color:red}.main{color:green}"
        );
        assert!(stylesheet.imports.is_empty());
    }

    #[test]
    fn test_inlines_recursively() {
        let stylesheet = inline(
            "@import \"a.css\";",
            &[
                ("a.css", "@import \"b.css\";\n.a {}"),
                ("b.css", ".b {}"),
            ],
        );
        assert_eq!(umber_printer::print(&stylesheet), ".b{}.a{}");
    }

    #[test]
    fn test_index_rebuilt_after_inlining() {
        let stylesheet = inline(
            "@import \"a.css\";\n@import \"b.css\";",
            &[("a.css", ".a {}"), ("b.css", ".b {}")],
        );
        assert!(stylesheet.imports.is_empty());
        assert_eq!(stylesheet.nodes.len(), 2);
    }

    #[test]
    fn test_missing_import_is_io_error() {
        let source = Source::new("main.css", "@import \"missing.css\";");
        let mut stylesheet = umber_parser::parse(&source).unwrap();
        let resolver = MapResolver(HashMap::new());
        let err = Transformer::new(Options {
            import_rules: Transform::Inline,
            ..Options::default()
        })
        .with_resolver(&resolver)
        .transform(&mut stylesheet)
        .unwrap_err();
        assert!(matches!(err, TransformError::Io { .. }));
    }

    #[test]
    fn test_missing_resolver_is_error() {
        let source = Source::new("main.css", "@import \"a.css\";");
        let mut stylesheet = umber_parser::parse(&source).unwrap();
        let err = crate::transform(
            &mut stylesheet,
            Options {
                import_rules: Transform::Inline,
                ..Options::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, TransformError::MissingResolver));
    }

    #[test]
    fn test_passthrough_keeps_import() {
        let source = Source::new("main.css", "@import \"a.css\";");
        let mut stylesheet = umber_parser::parse(&source).unwrap();
        crate::transform(&mut stylesheet, Options::default()).unwrap();
        assert_eq!(stylesheet.imports.len(), 1);
        assert_eq!(
            umber_printer::print(&stylesheet),
            "@import \"a.css\";"
        );
    }
}
