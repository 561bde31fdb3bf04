//! # Umber Driver
//!
//! Orchestrates the compilation pipeline:
//!
//! 1. Parsing (`umber-parser`)
//! 2. Transforms (`umber-transform`)
//! 3. Printing (`umber-printer`)
//!
//! A compile is synchronous and owns a private lexer and tree; multiple
//! sources may be compiled in parallel by the host without shared state.

use std::path::{Path, PathBuf};

use thiserror::Error;
use umber_ast::Source;
use umber_transform::{ImportResolver, Transform, Transformer};

/// Compiler configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// The transforms to apply between parsing and printing.
    pub transform: umber_transform::Options,
}

/// A compilation failure.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A lex or parse error, already rendered against its source.
    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Transform(#[from] umber_transform::TransformError),
}

/// Compile a source to minified CSS, resolving imports through `resolver`.
pub fn compile_source(
    source: &Source,
    options: &CompileOptions,
    resolver: Option<&dyn ImportResolver>,
) -> Result<String, CompileError> {
    tracing::debug!(path = %source.path, "parsing");
    let mut stylesheet =
        umber_parser::parse(source).map_err(|err| CompileError::Parse(err.to_diagnostic(source)))?;

    tracing::debug!(
        nodes = stylesheet.nodes.len(),
        imports = stylesheet.imports.len(),
        "transforming"
    );
    let mut transformer = Transformer::new(options.transform);
    if let Some(resolver) = resolver {
        transformer = transformer.with_resolver(resolver);
    }
    transformer.transform(&mut stylesheet)?;

    tracing::debug!("printing");
    Ok(umber_printer::print(&stylesheet))
}

/// Compile a file to minified CSS. Imports resolve relative to the file's
/// directory when import inlining is enabled.
pub fn compile_file(path: &Path, options: &CompileOptions) -> Result<String, CompileError> {
    let content = std::fs::read_to_string(path).map_err(|err| CompileError::Io {
        path: path.display().to_string(),
        source: err,
    })?;
    let source = Source::new(path.display().to_string(), content);

    if options.transform.import_rules == Transform::Inline {
        let base = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        let resolver = FileResolver::new(base);
        compile_source(&source, options, Some(&resolver))
    } else {
        compile_source(&source, options, None)
    }
}

/// Resolves import specifiers against a base directory on the local
/// filesystem.
pub struct FileResolver {
    base: PathBuf,
}

impl FileResolver {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }
}

impl ImportResolver for FileResolver {
    fn load(&self, specifier: &str) -> std::io::Result<Source> {
        let path = self.base.join(specifier);
        let content = std::fs::read_to_string(&path)?;
        Ok(Source::new(path.display().to_string(), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umber_transform::Options;

    #[test]
    fn test_compile_source() {
        let source = Source::new("main.css", ".class { width: 2rem }");
        let out = compile_source(&source, &CompileOptions::default(), None).unwrap();
        assert_eq!(out, ".class{width:2rem}");
    }

    #[test]
    fn test_compile_source_with_transforms() {
        let source = Source::new(
            "main.css",
            "@custom-media --narrow (max-width: 30em);\n@media (--narrow) { .a { color: green } }",
        );
        let options = CompileOptions {
            transform: Options {
                custom_media: Transform::Inline,
                ..Options::default()
            },
        };
        let out = compile_source(&source, &options, None).unwrap();
        assert_eq!(out, "@media (max-width:30em){.a{color:green}}");
    }

    #[test]
    fn test_parse_error_carries_diagnostic() {
        let source = Source::new("main.css", ".a { color:: red }");
        let err = compile_source(&source, &CompileOptions::default(), None).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("main.css:1:"), "message: {message}");
        assert!(message.contains('~'), "message: {message}");
    }

    #[test]
    fn test_compile_file_inlines_imports() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tokens.css"), ".imported { color: red }").unwrap();
        let main = dir.path().join("main.css");
        std::fs::write(&main, "@import \"tokens.css\";\n.main { color: green }").unwrap();

        let options = CompileOptions {
            transform: Options {
                import_rules: Transform::Inline,
                ..Options::default()
            },
        };
        let out = compile_file(&main, &options).unwrap();
        assert_eq!(out, ".imported{color:red}.main{color:green}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = compile_file(Path::new("does-not-exist.css"), &CompileOptions::default())
            .unwrap_err();
        assert!(matches!(err, CompileError::Io { .. }));
    }
}
