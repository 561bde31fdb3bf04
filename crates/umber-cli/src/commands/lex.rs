//! Lex command - tokenize a file and show tokens.

use std::fs;
use std::path::Path;

use umber_ast::Source;
use umber_lexer::{Lexer, TokenKind};

pub fn run(file: &Path) -> miette::Result<()> {
    let content = fs::read_to_string(file)
        .map_err(|err| miette::miette!("failed to read {}: {}", file.display(), err))?;
    let source = Source::new(file.display().to_string(), content);

    let mut lexer = Lexer::new(source.content()).map_err(|err| miette::miette!("{}", err))?;

    let mut count = 0;
    while lexer.current != TokenKind::Eof {
        let payload = match lexer.current {
            TokenKind::Number | TokenKind::Percentage => lexer.current_numeral.to_string(),
            TokenKind::Dimension => format!("{}{}", lexer.current_numeral, lexer.current_string),
            TokenKind::Ident
            | TokenKind::String
            | TokenKind::Url
            | TokenKind::AtKeyword
            | TokenKind::Hash
            | TokenKind::FunctionStart
            | TokenKind::Delim
            | TokenKind::Comment => lexer.current_string.to_string(),
            _ => String::new(),
        };

        println!(
            "{:>5}..{:<5} {:?} {}",
            lexer.token_start(),
            lexer.token_end(),
            lexer.current,
            payload,
        );

        count += 1;
        lexer.advance().map_err(|err| miette::miette!("{}", err))?;
    }

    println!("\n{} tokens", count);
    Ok(())
}
