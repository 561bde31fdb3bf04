//! Umber CLI - command-line interface for the umber CSS compiler.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Umber - a CSS compiler
#[derive(Parser)]
#[command(name = "umber")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a CSS file to minified CSS
    Compile {
        /// Input file
        file: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Inline @custom-media aliases into @media preludes
        #[arg(long)]
        inline_custom_media: bool,
        /// Resolve var() references defined on :root
        #[arg(long)]
        inline_custom_properties: bool,
        /// Inline @import-ed stylesheets in place
        #[arg(long)]
        inline_imports: bool,
    },

    /// Parse a CSS file and show the AST
    Parse {
        /// Input file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tokenize a CSS file and show tokens
    Lex {
        /// Input file
        file: PathBuf,
    },

    /// Check CSS files for errors
    Check {
        /// Input file(s)
        files: Vec<PathBuf>,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command {
        Commands::Compile {
            file,
            output,
            inline_custom_media,
            inline_custom_properties,
            inline_imports,
        } => commands::compile::run(
            &file,
            output.as_deref(),
            inline_custom_media,
            inline_custom_properties,
            inline_imports,
        ),
        Commands::Parse { file, json } => commands::parse::run(&file, json),
        Commands::Lex { file } => commands::lex::run(&file),
        Commands::Check { files } => commands::check::run(&files),
    }
}
