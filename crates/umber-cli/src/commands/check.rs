//! Check command - parse files and report errors.

use std::fs;
use std::path::{Path, PathBuf};

use umber_ast::Source;

pub fn run(files: &[PathBuf]) -> miette::Result<()> {
    let mut failures = 0;

    for file in files {
        if let Err(message) = check(file) {
            eprintln!("{}", message);
            failures += 1;
        } else {
            println!("{}: ok", file.display());
        }
    }

    if failures > 0 {
        Err(miette::miette!("{} of {} files failed", failures, files.len()))
    } else {
        Ok(())
    }
}

fn check(file: &Path) -> Result<(), String> {
    let content = fs::read_to_string(file)
        .map_err(|err| format!("failed to read {}: {}", file.display(), err))?;
    let source = Source::new(file.display().to_string(), content);

    umber_parser::parse(&source)
        .map(|_| ())
        .map_err(|err| err.to_diagnostic(&source))
}
