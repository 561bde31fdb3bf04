//! The recursive-descent parser core: top-level nodes, at-rules, blocks,
//! declarations, and values. Selector and media-query parsing live in
//! their own modules.

use smol_str::SmolStr;
use umber_ast::{
    AtRule, Block, Comma, Comment, CustomMediaPrelude, Declaration, DeclarationBlock, Dimension,
    Function, HexColor, Identifier, ImportPrelude, ImportSpecifier, KeyframeSelector,
    KeyframeSelectorList, MathOperator, Node, Number, Percentage, Prelude, QualifiedRule,
    QualifiedRuleBlock, Source, Span, StringValue, Stylesheet, Url, Value, ValueList,
};
use umber_lexer::{Lexer, TokenKind};

use crate::at_rule::{self, BlockShape, PreludeShape};
use crate::error::ParseError;

pub(crate) type PResult<T> = Result<T, ParseError>;

/// A parser over a single source.
pub struct Parser<'s> {
    pub(crate) lexer: Lexer<'s>,
    /// Byte offset one past the last consumed token, for closing spans.
    last_end: usize,
}

impl<'s> Parser<'s> {
    /// Create a parser for the source and prime the first token.
    pub fn new(source: &'s Source) -> PResult<Self> {
        Ok(Self {
            lexer: Lexer::new(source.content())?,
            last_end: 0,
        })
    }

    // ========================================================================
    // Lookahead plumbing
    // ========================================================================

    pub(crate) fn advance(&mut self) -> PResult<()> {
        self.last_end = self.lexer.token_end();
        self.lexer.advance()?;
        Ok(())
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> PResult<()> {
        self.last_end = self.lexer.token_end();
        self.lexer.expect(kind)?;
        Ok(())
    }

    /// The current token's span as byte offsets.
    pub(crate) fn current_range(&self) -> std::ops::Range<usize> {
        self.lexer.token_start()..self.lexer.token_end()
    }

    /// The current token's span as an AST span.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(self.lexer.token_start() as u32, self.lexer.token_end() as u32)
    }

    /// Close a node span opened at `start`, ending at the last consumed
    /// token.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        Span::new(start as u32, self.last_end as u32)
    }

    /// A short rendition of the current token for error messages.
    pub(crate) fn found_text(&self) -> SmolStr {
        match self.lexer.current {
            TokenKind::Ident
            | TokenKind::Delim
            | TokenKind::String
            | TokenKind::AtKeyword
            | TokenKind::Url
            | TokenKind::Dimension
            | TokenKind::FunctionStart => SmolStr::new(self.lexer.current_string),
            TokenKind::Number | TokenKind::Percentage => SmolStr::new(self.lexer.current_numeral),
            kind => SmolStr::new(kind.to_string()),
        }
    }

    /// Run `f` with the lexer's whitespace retention set to `retain`,
    /// restoring the previous value on every exit path, error paths
    /// included.
    pub(crate) fn with_whitespace_retention<T>(
        &mut self,
        retain: bool,
        f: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<T> {
        let previous = self.lexer.retain_whitespace;
        self.lexer.retain_whitespace = retain;
        let result = f(self);
        self.lexer.retain_whitespace = previous;
        result
    }

    pub(crate) fn parse_identifier(&mut self) -> PResult<Identifier> {
        if self.lexer.current != TokenKind::Ident {
            return Err(ParseError::Expected {
                expected: "IDENT".into(),
                found: self.found_text(),
                span: self.current_range(),
            });
        }
        let identifier = Identifier {
            span: self.token_span(),
            value: SmolStr::new(self.lexer.current_string),
        };
        self.advance()?;
        Ok(identifier)
    }

    // ========================================================================
    // Top level
    // ========================================================================

    /// Parse the whole source into a stylesheet.
    pub fn parse_stylesheet(&mut self) -> PResult<Stylesheet> {
        let mut stylesheet = Stylesheet::default();

        loop {
            match self.lexer.current {
                TokenKind::Eof => break,

                // HTML comment guards are valid at the top level and
                // otherwise meaningless.
                TokenKind::Cdo | TokenKind::Cdc => self.advance()?,

                TokenKind::Comment => {
                    let comment = Comment {
                        span: self.token_span(),
                        text: SmolStr::new(self.lexer.current_string),
                    };
                    self.advance()?;
                    stylesheet.nodes.push(Node::Comment(comment));
                }

                TokenKind::AtKeyword => {
                    let rule = self.parse_at_rule()?;
                    if let Some(Prelude::Import(import)) = &rule.prelude {
                        if let Some(value) = import.specifier() {
                            stylesheet.imports.push(ImportSpecifier {
                                value: SmolStr::new(value),
                                at_rule: stylesheet.nodes.len(),
                            });
                        }
                    }
                    stylesheet.nodes.push(Node::AtRule(rule));
                }

                TokenKind::LCurly => {
                    return Err(ParseError::UnexpectedToken {
                        found: "{".into(),
                        span: self.current_range(),
                    })
                }

                _ => {
                    let rule = self.parse_qualified_rule()?;
                    stylesheet.nodes.push(Node::QualifiedRule(rule));
                }
            }
        }

        Ok(stylesheet)
    }

    // ========================================================================
    // At-rules
    // ========================================================================

    fn parse_at_rule(&mut self) -> PResult<AtRule> {
        let start = self.lexer.token_start();
        let name = SmolStr::new(self.lexer.current_string);
        self.advance()?;

        let shape = at_rule::shape(&name);

        let prelude = match shape.prelude {
            PreludeShape::KeyframesName => Some(Prelude::KeyframesName(self.parse_identifier()?)),
            PreludeShape::MediaQueryList => {
                Some(Prelude::MediaQueryList(self.parse_media_query_list()?))
            }
            PreludeShape::SupportsCondition => {
                Some(Prelude::SupportsCondition(self.parse_supports_condition()?))
            }
            PreludeShape::Import => {
                let prelude_start = self.lexer.token_start();
                let href = self.parse_value()?;
                Some(Prelude::Import(ImportPrelude {
                    span: self.span_from(prelude_start),
                    href,
                }))
            }
            PreludeShape::CustomMedia => {
                Some(Prelude::CustomMedia(self.parse_custom_media_prelude()?))
            }
            PreludeShape::ValueList => {
                let list = self.parse_value_list()?;
                if list.values.is_empty() {
                    None
                } else {
                    Some(Prelude::ValueList(list))
                }
            }
        };

        let block = match shape.block {
            BlockShape::QualifiedRules => Some(Block::QualifiedRuleBlock(
                self.parse_qualified_rule_block()?,
            )),
            BlockShape::KeyframeRules => {
                Some(Block::QualifiedRuleBlock(self.parse_keyframe_block()?))
            }
            BlockShape::None => {
                self.expect(TokenKind::Semicolon)?;
                None
            }
            BlockShape::OptionalDeclarations => {
                if self.lexer.current == TokenKind::LCurly {
                    Some(Block::DeclarationBlock(self.parse_declaration_block()?))
                } else {
                    self.expect(TokenKind::Semicolon)?;
                    None
                }
            }
        };

        Ok(AtRule {
            span: self.span_from(start),
            name,
            prelude,
            block,
        })
    }

    fn parse_custom_media_prelude(&mut self) -> PResult<CustomMediaPrelude> {
        let start = self.lexer.token_start();

        let name = self.parse_identifier()?;
        if !name.value.starts_with("--") {
            return Err(ParseError::Expected {
                expected: "a custom media name beginning with --".into(),
                found: name.value,
                span: name.span.start as usize..name.span.end as usize,
            });
        }

        let query = self.parse_media_query()?;
        if self.lexer.current == TokenKind::Comma {
            return Err(ParseError::CustomMediaSingleQuery {
                span: self.current_range(),
            });
        }

        Ok(CustomMediaPrelude {
            span: self.span_from(start),
            name,
            query,
        })
    }

    // ========================================================================
    // Rules and blocks
    // ========================================================================

    pub(crate) fn parse_qualified_rule(&mut self) -> PResult<QualifiedRule> {
        let start = self.lexer.token_start();
        let prelude = Prelude::SelectorList(self.parse_selector_list()?);
        let block = Block::DeclarationBlock(self.parse_declaration_block()?);
        Ok(QualifiedRule {
            span: self.span_from(start),
            prelude,
            block,
        })
    }

    fn parse_qualified_rule_block(&mut self) -> PResult<QualifiedRuleBlock> {
        let start = self.lexer.token_start();
        self.expect(TokenKind::LCurly)?;

        let mut rules = Vec::new();
        loop {
            match self.lexer.current {
                TokenKind::RCurly => {
                    self.advance()?;
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        span: self.current_range(),
                    })
                }
                TokenKind::Comment => self.advance()?,
                _ => rules.push(self.parse_qualified_rule()?),
            }
        }

        Ok(QualifiedRuleBlock {
            span: self.span_from(start),
            rules,
        })
    }

    fn parse_declaration_block(&mut self) -> PResult<DeclarationBlock> {
        let start = self.lexer.token_start();
        self.expect(TokenKind::LCurly)?;

        let mut declarations = Vec::new();
        loop {
            match self.lexer.current {
                TokenKind::RCurly => {
                    self.advance()?;
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        span: self.current_range(),
                    })
                }
                TokenKind::Comment | TokenKind::Semicolon => self.advance()?,
                TokenKind::Ident => declarations.push(self.parse_declaration()?),
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        found: self.found_text(),
                        span: self.current_range(),
                    })
                }
            }
        }

        Ok(DeclarationBlock {
            span: self.span_from(start),
            declarations,
        })
    }

    fn parse_declaration(&mut self) -> PResult<Declaration> {
        let start = self.lexer.token_start();
        let property = SmolStr::new(self.lexer.current_string);
        self.advance()?;
        self.expect(TokenKind::Colon)?;

        let mut values = Vec::new();
        let mut important = false;
        loop {
            match self.lexer.current {
                // The trailing `;` is optional before `}`; the enclosing
                // block consumes whichever terminator is present.
                TokenKind::Semicolon | TokenKind::RCurly | TokenKind::Eof => break,
                TokenKind::Comment => self.advance()?,
                TokenKind::Delim if self.lexer.current_string == "!" => {
                    self.advance()?;
                    let is_important = self.lexer.current == TokenKind::Ident
                        && self.lexer.current_string.eq_ignore_ascii_case("important");
                    if !is_important {
                        return Err(ParseError::Expected {
                            expected: "important".into(),
                            found: self.found_text(),
                            span: self.current_range(),
                        });
                    }
                    important = true;
                    self.advance()?;
                }
                _ => values.push(self.parse_value()?),
            }
        }

        Ok(Declaration {
            span: self.span_from(start),
            property,
            values,
            important,
        })
    }

    // ========================================================================
    // Keyframes
    // ========================================================================

    fn parse_keyframe_block(&mut self) -> PResult<QualifiedRuleBlock> {
        let start = self.lexer.token_start();
        self.expect(TokenKind::LCurly)?;

        let mut rules = Vec::new();
        loop {
            match self.lexer.current {
                TokenKind::RCurly => {
                    self.advance()?;
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        span: self.current_range(),
                    })
                }
                TokenKind::Comment => self.advance()?,
                _ => {
                    let rule_start = self.lexer.token_start();
                    let prelude = Prelude::KeyframeSelectorList(self.parse_keyframe_selectors()?);
                    let block = Block::DeclarationBlock(self.parse_declaration_block()?);
                    rules.push(QualifiedRule {
                        span: self.span_from(rule_start),
                        prelude,
                        block,
                    });
                }
            }
        }

        Ok(QualifiedRuleBlock {
            span: self.span_from(start),
            rules,
        })
    }

    fn parse_keyframe_selectors(&mut self) -> PResult<KeyframeSelectorList> {
        let start = self.lexer.token_start();
        let mut selectors = Vec::new();

        loop {
            match self.lexer.current {
                TokenKind::Percentage => {
                    selectors.push(KeyframeSelector::Percentage(Percentage {
                        span: self.token_span(),
                        value: SmolStr::new(self.lexer.current_numeral),
                    }));
                    self.advance()?;
                }
                TokenKind::Ident
                    if self.lexer.current_string.eq_ignore_ascii_case("from")
                        || self.lexer.current_string.eq_ignore_ascii_case("to") =>
                {
                    selectors.push(KeyframeSelector::Ident(Identifier {
                        span: self.token_span(),
                        value: SmolStr::new(self.lexer.current_string),
                    }));
                    self.advance()?;
                }
                _ => {
                    return Err(ParseError::InvalidKeyframeSelector {
                        span: self.current_range(),
                    })
                }
            }

            if self.lexer.current == TokenKind::Comma {
                self.advance()?;
                continue;
            }
            break;
        }

        Ok(KeyframeSelectorList {
            span: self.span_from(start),
            selectors,
        })
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Parse values until a block opener, `;`, or EOF. Used for at-rule
    /// preludes with no dedicated shape.
    fn parse_value_list(&mut self) -> PResult<ValueList> {
        let start = self.lexer.token_start();
        let mut values = Vec::new();

        loop {
            match self.lexer.current {
                TokenKind::LCurly | TokenKind::Semicolon | TokenKind::Eof => break,
                TokenKind::Comment => self.advance()?,
                _ => values.push(self.parse_value()?),
            }
        }

        Ok(ValueList {
            span: self.span_from(start),
            values,
        })
    }

    pub(crate) fn parse_value(&mut self) -> PResult<Value> {
        let span = self.token_span();
        let value = match self.lexer.current {
            TokenKind::Number => Value::Number(Number {
                span,
                value: SmolStr::new(self.lexer.current_numeral),
            }),
            TokenKind::Percentage => Value::Percentage(Percentage {
                span,
                value: SmolStr::new(self.lexer.current_numeral),
            }),
            TokenKind::Dimension => Value::Dimension(Dimension {
                span,
                value: SmolStr::new(self.lexer.current_numeral),
                unit: SmolStr::new(self.lexer.current_string),
            }),
            TokenKind::String => Value::String(StringValue {
                span,
                value: SmolStr::new(self.lexer.current_string),
            }),
            TokenKind::Url => Value::Url(Url {
                span,
                value: SmolStr::new(self.lexer.current_string),
            }),
            TokenKind::Ident => Value::Identifier(Identifier {
                span,
                value: SmolStr::new(self.lexer.current_string),
            }),
            TokenKind::Hash => {
                let name = self.lexer.current_string;
                if !is_hex_color(name) {
                    return Err(ParseError::InvalidHexColor {
                        value: SmolStr::new(name),
                        span: self.current_range(),
                    });
                }
                Value::HexColor(HexColor {
                    span,
                    rgba: SmolStr::new(name),
                })
            }
            TokenKind::Comma => Value::Comma(Comma { span }),
            TokenKind::FunctionStart => return self.parse_function(),
            TokenKind::Delim
                if matches!(self.lexer.current_string, "+" | "-" | "*" | "/") =>
            {
                Value::MathOperator(MathOperator {
                    span,
                    operator: SmolStr::new(self.lexer.current_string),
                })
            }
            TokenKind::Eof => {
                return Err(ParseError::UnexpectedEof {
                    span: self.current_range(),
                })
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    found: self.found_text(),
                    span: self.current_range(),
                })
            }
        };
        self.advance()?;
        Ok(value)
    }

    fn parse_function(&mut self) -> PResult<Value> {
        let start = self.lexer.token_start();
        let name = SmolStr::new(self.lexer.current_string);
        self.advance()?;

        let mut arguments = Vec::new();
        loop {
            match self.lexer.current {
                TokenKind::RParen => {
                    self.advance()?;
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        span: self.current_range(),
                    })
                }
                TokenKind::Comment => self.advance()?,
                _ => arguments.push(self.parse_value()?),
            }
        }

        Ok(Value::Function(Function {
            span: self.span_from(start),
            name,
            arguments,
        }))
    }
}

/// Hash token content that reads as a hex color: 3 to 8 hex digits.
fn is_hex_color(name: &str) -> bool {
    (3..=8).contains(&name.len()) && name.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Stylesheet {
        crate::parse(&Source::new("main.css", input)).unwrap()
    }

    fn parse_err(input: &str) -> ParseError {
        crate::parse(&Source::new("main.css", input)).unwrap_err()
    }

    fn only_rule(stylesheet: &Stylesheet) -> &QualifiedRule {
        match &stylesheet.nodes[0] {
            Node::QualifiedRule(rule) => rule,
            other => panic!("expected qualified rule, got {:?}", other),
        }
    }

    fn only_at_rule(stylesheet: &Stylesheet) -> &AtRule {
        match &stylesheet.nodes[0] {
            Node::AtRule(rule) => rule,
            other => panic!("expected at rule, got {:?}", other),
        }
    }

    fn declarations(rule: &QualifiedRule) -> &[Declaration] {
        match &rule.block {
            Block::DeclarationBlock(block) => &block.declarations,
            other => panic!("expected declaration block, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_stylesheet() {
        let stylesheet = parse("");
        assert!(stylesheet.nodes.is_empty());
        assert!(stylesheet.imports.is_empty());
    }

    #[test]
    fn test_declarations() {
        let stylesheet = parse(".class { font-family: \"Helvetica\", sans-serif; width: 2rem }");
        let rule = only_rule(&stylesheet);
        let decls = declarations(rule);
        assert_eq!(decls.len(), 2);

        assert_eq!(decls[0].property, "font-family");
        assert_eq!(
            decls[0].values,
            vec![
                Value::String(StringValue {
                    span: Span::default(),
                    value: "Helvetica".into()
                }),
                Value::Comma(Comma {
                    span: Span::default()
                }),
                Value::Identifier(Identifier {
                    span: Span::default(),
                    value: "sans-serif".into()
                }),
            ]
        );

        // The last declaration has no trailing semicolon.
        assert_eq!(decls[1].property, "width");
        assert_eq!(
            decls[1].values,
            vec![Value::Dimension(Dimension {
                span: Span::default(),
                value: "2".into(),
                unit: "rem".into()
            })]
        );
    }

    #[test]
    fn test_important() {
        let stylesheet = parse(".a { color: red !important; }");
        let decls = declarations(only_rule(&stylesheet));
        assert!(decls[0].important);

        let stylesheet = parse(".a { color: red !IMPORTANT }");
        let decls = declarations(only_rule(&stylesheet));
        assert!(decls[0].important);
    }

    #[test]
    fn test_hex_colors() {
        let stylesheet = parse(".a { color: #aabbccdd }");
        let decls = declarations(only_rule(&stylesheet));
        assert_eq!(
            decls[0].values,
            vec![Value::HexColor(HexColor {
                span: Span::default(),
                rgba: "aabbccdd".into()
            })]
        );

        let err = parse_err(".a { color: #zzz }");
        assert_eq!(err.to_string(), "invalid hex color: #zzz");
    }

    #[test]
    fn test_function_values() {
        let stylesheet = parse(".a { width: calc(100% - 10px) }");
        let decls = declarations(only_rule(&stylesheet));
        match &decls[0].values[0] {
            Value::Function(function) => {
                assert_eq!(function.name, "calc");
                assert_eq!(function.arguments.len(), 3);
                assert!(matches!(
                    function.arguments[1],
                    Value::MathOperator(ref op) if op.operator == "-"
                ));
            }
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_url_values() {
        let stylesheet = parse(".a { background: url(image.png) }");
        let decls = declarations(only_rule(&stylesheet));
        assert_eq!(
            decls[0].values,
            vec![Value::Url(Url {
                span: Span::default(),
                value: "image.png".into()
            })]
        );

        // A quoted url degrades to a function call.
        let stylesheet = parse(".a { background: url(\"image.png\") }");
        let decls = declarations(only_rule(&stylesheet));
        match &decls[0].values[0] {
            Value::Function(function) => {
                assert_eq!(function.name, "url");
                assert_eq!(
                    function.arguments,
                    vec![Value::String(StringValue {
                        span: Span::default(),
                        value: "image.png".into()
                    })]
                );
            }
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_import_registration() {
        let stylesheet = parse("@import \"a.css\";\n@import url(b.css);\n.c {}");
        assert_eq!(stylesheet.imports.len(), 2);
        assert_eq!(stylesheet.imports[0].value, "a.css");
        assert_eq!(stylesheet.imports[0].at_rule, 0);
        assert_eq!(stylesheet.imports[1].value, "b.css");
        assert_eq!(stylesheet.imports[1].at_rule, 1);
    }

    #[test]
    fn test_keyframes() {
        let stylesheet = parse("@keyframes x { from { opacity: 0 } 50% { opacity: .5 } to { opacity: 1 } }");
        let rule = only_at_rule(&stylesheet);
        assert_eq!(rule.name, "keyframes");
        assert!(matches!(
            rule.prelude,
            Some(Prelude::KeyframesName(ref name)) if name.value == "x"
        ));

        let rules = match rule.block.as_ref().unwrap() {
            Block::QualifiedRuleBlock(block) => &block.rules,
            other => panic!("expected rule block, got {:?}", other),
        };
        assert_eq!(rules.len(), 3);
        match &rules[1].prelude {
            Prelude::KeyframeSelectorList(list) => {
                assert!(matches!(
                    list.selectors[0],
                    KeyframeSelector::Percentage(ref percentage) if percentage.value == "50"
                ));
            }
            other => panic!("expected keyframe selectors, got {:?}", other),
        }
    }

    #[test]
    fn test_keyframes_invalid_selector() {
        let err = parse_err("@keyframes x { middle { opacity: 0 } }");
        assert_eq!(err.to_string(), "expected from, to, or a percentage");
    }

    #[test]
    fn test_unknown_at_rule_with_block() {
        let stylesheet = parse("@font-face { font-family: \"Umber Sans\"; src: url(umber.woff2) }");
        let rule = only_at_rule(&stylesheet);
        assert_eq!(rule.name, "font-face");
        assert!(rule.prelude.is_none());
        assert!(matches!(rule.block, Some(Block::DeclarationBlock(_))));
    }

    #[test]
    fn test_unknown_at_rule_without_block() {
        let stylesheet = parse("@charset \"UTF-8\";");
        let rule = only_at_rule(&stylesheet);
        assert_eq!(rule.name, "charset");
        assert!(matches!(rule.prelude, Some(Prelude::ValueList(_))));
        assert!(rule.block.is_none());
    }

    #[test]
    fn test_top_level_comment_is_kept() {
        let stylesheet = parse("/* header */ .a {}");
        assert!(matches!(
            &stylesheet.nodes[0],
            Node::Comment(comment) if comment.text == " header "
        ));
        assert!(matches!(&stylesheet.nodes[1], Node::QualifiedRule(_)));
    }

    #[test]
    fn test_cdo_cdc_discarded() {
        let stylesheet = parse("<!-- .a {} -->");
        assert_eq!(stylesheet.nodes.len(), 1);
    }

    #[test]
    fn test_top_level_curly_is_error() {
        let err = parse_err("{ color: red }");
        assert_eq!(err.to_string(), "unexpected token: {");
    }

    #[test]
    fn test_unclosed_block_is_error() {
        let err = parse_err(".a { color: red");
        assert_eq!(err.to_string(), "unexpected EOF");
    }

    #[test]
    fn test_custom_media_single_query() {
        let stylesheet = parse("@custom-media --narrow-window (max-width: 30em);");
        let rule = only_at_rule(&stylesheet);
        match rule.prelude.as_ref().unwrap() {
            Prelude::CustomMedia(prelude) => {
                assert_eq!(prelude.name.value, "--narrow-window");
                assert_eq!(prelude.query.parts.len(), 1);
            }
            other => panic!("expected custom media prelude, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_media_multiple_queries_is_error() {
        let err = parse_err("@custom-media --narrow-window (max-width: 30em), print;");
        assert_eq!(
            err.to_string(),
            "@custom-media rule requires a single media query argument"
        );
        // The span points at the comma.
        assert_eq!(err.span(), 47..48);
    }

    #[test]
    fn test_spans_are_monotonic() {
        let input = ".class { width: 2rem; height: 4rem }";
        let stylesheet = parse(input);
        let rule = only_rule(&stylesheet);
        assert_eq!(rule.span.start, 0);
        assert_eq!(rule.span.end as usize, input.len());

        let decls = declarations(rule);
        let first = decls[0].span;
        let second = decls[1].span;
        assert!(rule.span.start <= first.start);
        assert!(first.end <= second.start);
        assert!(second.end <= rule.span.end);
        assert_eq!(&input[first.start as usize..first.end as usize], "width: 2rem");
    }
}
