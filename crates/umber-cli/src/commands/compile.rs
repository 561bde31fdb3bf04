//! Compile command - compile a file to minified CSS.

use std::path::Path;

use umber_driver::{compile_file, CompileOptions};
use umber_transform::{Options, Transform};

pub fn run(
    file: &Path,
    output: Option<&Path>,
    inline_custom_media: bool,
    inline_custom_properties: bool,
    inline_imports: bool,
) -> miette::Result<()> {
    let to_transform = |enabled: bool| {
        if enabled {
            Transform::Inline
        } else {
            Transform::Passthrough
        }
    };

    let options = CompileOptions {
        transform: Options {
            custom_media: to_transform(inline_custom_media),
            custom_properties: to_transform(inline_custom_properties),
            import_rules: to_transform(inline_imports),
        },
    };

    let css = compile_file(file, &options).map_err(|err| miette::miette!("{}", err))?;

    match output {
        Some(path) => std::fs::write(path, css)
            .map_err(|err| miette::miette!("failed to write {}: {}", path.display(), err))?,
        None => println!("{}", css),
    }

    Ok(())
}
