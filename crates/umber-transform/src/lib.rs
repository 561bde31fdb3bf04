//! # Umber Transform
//!
//! Source-to-source rewrites applied between parsing and printing, driven
//! by an [`Options`] record. Passes run in a fixed order so later passes
//! observe earlier passes' output:
//!
//! 1. custom properties (`var(--x)` resolution)
//! 2. custom media (`@custom-media` inlining)
//! 3. imports (`@import` inlining, via an external resolver)
//!
//! Each pass is a whole-tree rewrite and is idempotent; the import index
//! is rebuilt after any pass that changes the node list.

mod custom_media;
mod custom_properties;
mod imports;

use thiserror::Error;
use umber_ast::{Source, Stylesheet};

pub use imports::ImportResolver;

/// How a transform behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Leave the construct in the output untouched.
    #[default]
    Passthrough,
    /// Rewrite the construct away.
    Inline,
}

/// The transforms to apply. A plain data record; no global state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Resolve `var(--name)` references whose definition is statically
    /// known from `:root`.
    pub custom_properties: Transform,
    /// Inline `@custom-media` aliases into `@media` preludes.
    pub custom_media: Transform,
    /// Inline `@import`ed stylesheets in place. Requires a resolver.
    pub import_rules: Transform,
}

/// A transform failure. Rewrites themselves cannot fail; only loading or
/// parsing an imported stylesheet can.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to load import {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse import {path}:\n{diagnostic}")]
    Parse { path: String, diagnostic: String },

    #[error("inlining import rules requires a resolver")]
    MissingResolver,
}

/// Applies [`Options`] to stylesheets.
pub struct Transformer<'r> {
    options: Options,
    resolver: Option<&'r dyn ImportResolver>,
}

impl<'r> Transformer<'r> {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            resolver: None,
        }
    }

    /// Attach the resolver used to load `@import` targets.
    pub fn with_resolver(mut self, resolver: &'r dyn ImportResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Rewrite the stylesheet in place.
    pub fn transform(&self, stylesheet: &mut Stylesheet) -> Result<(), TransformError> {
        if self.options.custom_properties == Transform::Inline {
            custom_properties::apply(stylesheet);
        }

        if self.options.custom_media == Transform::Inline {
            custom_media::apply(stylesheet);
        }

        if self.options.import_rules == Transform::Inline {
            let resolver = self.resolver.ok_or(TransformError::MissingResolver)?;
            imports::apply(stylesheet, resolver, self.options)?;
        }

        Ok(())
    }
}

/// Rewrite a stylesheet in place with the given options. Convenience for
/// callers that don't inline imports.
pub fn transform(stylesheet: &mut Stylesheet, options: Options) -> Result<(), TransformError> {
    Transformer::new(options).transform(stylesheet)
}

/// Parse an imported source, used by the import pass.
pub(crate) fn parse_import(source: &Source) -> Result<Stylesheet, TransformError> {
    umber_parser::parse(source).map_err(|err| TransformError::Parse {
        path: source.path.clone(),
        diagnostic: err.to_diagnostic(source),
    })
}
