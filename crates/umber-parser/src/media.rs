//! Media query and supports condition parsing.

use umber_ast::{
    MediaFeature, MediaFeaturePlain, MediaFeatureRange, MediaQuery, MediaQueryList,
    MediaQueryPart, RangeOperator, SupportsCondition, SupportsContent, SupportsInParens,
    SupportsPart,
};
use umber_lexer::TokenKind;

use crate::error::ParseError;
use crate::parser::{PResult, Parser};

impl<'s> Parser<'s> {
    pub(crate) fn parse_media_query_list(&mut self) -> PResult<MediaQueryList> {
        let start = self.lexer.token_start();

        let mut queries = vec![self.parse_media_query()?];
        while self.lexer.current == TokenKind::Comma {
            self.advance()?;
            queries.push(self.parse_media_query()?);
        }

        Ok(MediaQueryList {
            span: self.span_from(start),
            queries,
        })
    }

    pub(crate) fn parse_media_query(&mut self) -> PResult<MediaQuery> {
        let start = self.lexer.token_start();
        let mut parts = Vec::new();

        loop {
            match self.lexer.current {
                TokenKind::Ident => {
                    parts.push(MediaQueryPart::Keyword(self.parse_identifier()?));
                }
                TokenKind::LParen => {
                    parts.push(MediaQueryPart::Feature(self.parse_media_feature()?));
                }
                _ => break,
            }
        }

        if parts.is_empty() {
            return Err(ParseError::ExpectedMediaQuery {
                span: self.current_range(),
            });
        }

        Ok(MediaQuery {
            span: self.span_from(start),
            parts,
        })
    }

    /// Parse a parenthesized media feature: a plain `(name: value)` or
    /// boolean `(name)` feature, or a range like `(200px < width < 600px)`.
    fn parse_media_feature(&mut self) -> PResult<MediaFeature> {
        let start = self.lexer.token_start();
        self.expect(TokenKind::LParen)?;

        if self.lexer.current == TokenKind::Ident {
            let property = self.parse_identifier()?;

            return match self.lexer.current {
                // (name: value...)
                TokenKind::Colon => {
                    self.advance()?;
                    let mut values = Vec::new();
                    loop {
                        match self.lexer.current {
                            TokenKind::RParen => break,
                            TokenKind::Eof => {
                                return Err(ParseError::UnexpectedEof {
                                    span: self.current_range(),
                                })
                            }
                            TokenKind::Comment => self.advance()?,
                            _ => values.push(self.parse_value()?),
                        }
                    }
                    self.advance()?;
                    Ok(MediaFeature::Plain(MediaFeaturePlain {
                        span: self.span_from(start),
                        property,
                        values,
                    }))
                }

                // (name)
                TokenKind::RParen => {
                    self.advance()?;
                    Ok(MediaFeature::Plain(MediaFeaturePlain {
                        span: self.span_from(start),
                        property,
                        values: Vec::new(),
                    }))
                }

                // (width < 600px)
                _ => {
                    let right_operator = self.parse_range_operator()?;
                    let right = self.parse_value()?;
                    self.expect(TokenKind::RParen)?;
                    Ok(MediaFeature::Range(MediaFeatureRange {
                        span: self.span_from(start),
                        left: None,
                        left_operator: None,
                        property,
                        right_operator: Some(right_operator),
                        right: Some(right),
                    }))
                }
            };
        }

        // (200px < width) or (200px < width < 600px)
        let left = self.parse_value()?;
        let left_operator = self.parse_range_operator()?;
        let property = self.parse_identifier()?;

        let (right_operator, right) = if self.lexer.current == TokenKind::RParen {
            (None, None)
        } else {
            let operator = self.parse_range_operator()?;
            let value = self.parse_value()?;
            (Some(operator), Some(value))
        };
        self.expect(TokenKind::RParen)?;

        Ok(MediaFeature::Range(MediaFeatureRange {
            span: self.span_from(start),
            left: Some(left),
            left_operator: Some(left_operator),
            property,
            right_operator,
            right,
        }))
    }

    /// Parse `<`, `<=`, `>`, `>=`, or `=`. The two-character operators
    /// arrive as adjacent delimiter tokens.
    fn parse_range_operator(&mut self) -> PResult<RangeOperator> {
        let fail = |p: &Parser<'s>| ParseError::Expected {
            expected: "<, <=, >, >=, or =".into(),
            found: p.found_text(),
            span: p.current_range(),
        };

        if self.lexer.current != TokenKind::Delim {
            return Err(fail(self));
        }

        match self.lexer.current_string {
            "<" => {
                self.advance()?;
                if self.lexer.current == TokenKind::Delim && self.lexer.current_string == "=" {
                    self.advance()?;
                    Ok(RangeOperator::Le)
                } else {
                    Ok(RangeOperator::Lt)
                }
            }
            ">" => {
                self.advance()?;
                if self.lexer.current == TokenKind::Delim && self.lexer.current_string == "=" {
                    self.advance()?;
                    Ok(RangeOperator::Ge)
                } else {
                    Ok(RangeOperator::Gt)
                }
            }
            "=" => {
                self.advance()?;
                Ok(RangeOperator::Eq)
            }
            _ => Err(fail(self)),
        }
    }

    // ========================================================================
    // Supports conditions
    // ========================================================================

    pub(crate) fn parse_supports_condition(&mut self) -> PResult<SupportsCondition> {
        let start = self.lexer.token_start();
        let mut parts = Vec::new();

        loop {
            match self.lexer.current {
                TokenKind::Ident => {
                    parts.push(SupportsPart::Keyword(self.parse_identifier()?));
                }
                TokenKind::LParen => {
                    parts.push(SupportsPart::InParens(self.parse_supports_in_parens()?));
                }
                _ => break,
            }
        }

        if parts.is_empty() {
            return Err(ParseError::ExpectedSupportsCondition {
                span: self.current_range(),
            });
        }

        Ok(SupportsCondition {
            span: self.span_from(start),
            parts,
        })
    }

    fn parse_supports_in_parens(&mut self) -> PResult<SupportsInParens> {
        let start = self.lexer.token_start();
        self.expect(TokenKind::LParen)?;

        let content = match self.lexer.current {
            // Either a feature test `(display: grid)` or a nested
            // condition starting with a combinator keyword.
            TokenKind::Ident => {
                if matches!(self.lexer.current_string, "not" | "and" | "or") {
                    SupportsContent::Condition(Box::new(self.parse_supports_condition()?))
                } else {
                    SupportsContent::Declaration(Box::new(self.parse_supports_declaration()?))
                }
            }
            TokenKind::LParen => {
                SupportsContent::Condition(Box::new(self.parse_supports_condition()?))
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    found: self.found_text(),
                    span: self.current_range(),
                })
            }
        };

        self.expect(TokenKind::RParen)?;

        Ok(SupportsInParens {
            span: self.span_from(start),
            content,
        })
    }

    fn parse_supports_declaration(&mut self) -> PResult<umber_ast::Declaration> {
        let start = self.lexer.token_start();
        let property = smol_str::SmolStr::new(self.lexer.current_string);
        self.advance()?;
        self.expect(TokenKind::Colon)?;

        let mut values = Vec::new();
        loop {
            match self.lexer.current {
                TokenKind::RParen => break,
                TokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        span: self.current_range(),
                    })
                }
                TokenKind::Comment => self.advance()?,
                _ => values.push(self.parse_value()?),
            }
        }

        Ok(umber_ast::Declaration {
            span: self.span_from(start),
            property,
            values,
            important: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umber_ast::{AtRule, Node, Prelude, Source, Stylesheet, Value};

    fn parse(input: &str) -> Stylesheet {
        crate::parse(&Source::new("main.css", input)).unwrap()
    }

    fn at_rule(stylesheet: &Stylesheet) -> &AtRule {
        match &stylesheet.nodes[0] {
            Node::AtRule(rule) => rule,
            other => panic!("expected at rule, got {:?}", other),
        }
    }

    fn queries(stylesheet: &Stylesheet) -> &[MediaQuery] {
        match at_rule(stylesheet).prelude.as_ref().unwrap() {
            Prelude::MediaQueryList(list) => &list.queries,
            other => panic!("expected media query list, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_feature() {
        let stylesheet = parse("@media (max-width: 30em) {}");
        let query = &queries(&stylesheet)[0];
        match &query.parts[0] {
            MediaQueryPart::Feature(MediaFeature::Plain(plain)) => {
                assert_eq!(plain.property.value, "max-width");
                assert_eq!(plain.values.len(), 1);
            }
            other => panic!("expected plain feature, got {:?}", other),
        }
    }

    #[test]
    fn test_boolean_feature_and_keywords() {
        let stylesheet = parse("@media not screen and (color) {}");
        let query = &queries(&stylesheet)[0];
        assert_eq!(query.parts.len(), 4);
        assert!(matches!(
            &query.parts[0],
            MediaQueryPart::Keyword(keyword) if keyword.value == "not"
        ));
        assert!(matches!(
            &query.parts[3],
            MediaQueryPart::Feature(MediaFeature::Plain(plain))
                if plain.property.value == "color" && plain.values.is_empty()
        ));
    }

    #[test]
    fn test_range_features() {
        let stylesheet =
            parse("@media (200px < width < 600px), (200px < width), (width < 600px) {}");
        let list = queries(&stylesheet);
        assert_eq!(list.len(), 3);

        match &list[0].parts[0] {
            MediaQueryPart::Feature(MediaFeature::Range(range)) => {
                assert!(matches!(range.left, Some(Value::Dimension(_))));
                assert_eq!(range.left_operator, Some(RangeOperator::Lt));
                assert_eq!(range.property.value, "width");
                assert_eq!(range.right_operator, Some(RangeOperator::Lt));
                assert!(matches!(range.right, Some(Value::Dimension(_))));
            }
            other => panic!("expected range feature, got {:?}", other),
        }

        match &list[1].parts[0] {
            MediaQueryPart::Feature(MediaFeature::Range(range)) => {
                assert!(range.right.is_none());
                assert!(range.right_operator.is_none());
            }
            other => panic!("expected range feature, got {:?}", other),
        }

        match &list[2].parts[0] {
            MediaQueryPart::Feature(MediaFeature::Range(range)) => {
                assert!(range.left.is_none());
                assert!(range.left_operator.is_none());
                assert_eq!(range.right_operator, Some(RangeOperator::Lt));
            }
            other => panic!("expected range feature, got {:?}", other),
        }
    }

    #[test]
    fn test_le_ge_operators() {
        let stylesheet = parse("@media (width <= 600px) {}");
        match &queries(&stylesheet)[0].parts[0] {
            MediaQueryPart::Feature(MediaFeature::Range(range)) => {
                assert_eq!(range.right_operator, Some(RangeOperator::Le));
            }
            other => panic!("expected range feature, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_media_reference_is_boolean_feature() {
        let stylesheet = parse("@media (--narrow-window) {}");
        match &queries(&stylesheet)[0].parts[0] {
            MediaQueryPart::Feature(MediaFeature::Plain(plain)) => {
                assert_eq!(plain.property.value, "--narrow-window");
                assert!(plain.values.is_empty());
            }
            other => panic!("expected plain feature, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_media_rules() {
        let stylesheet = parse("@media screen { .a { color: red } .b { color: blue } }");
        let rule = at_rule(&stylesheet);
        match rule.block.as_ref().unwrap() {
            umber_ast::Block::QualifiedRuleBlock(block) => assert_eq!(block.rules.len(), 2),
            other => panic!("expected rule block, got {:?}", other),
        }
    }

    #[test]
    fn test_supports_condition() {
        let stylesheet =
            parse("@supports (display: grid) and (not (display: inline-grid)) { .a {} }");
        let rule = at_rule(&stylesheet);
        match rule.prelude.as_ref().unwrap() {
            Prelude::SupportsCondition(condition) => {
                assert_eq!(condition.parts.len(), 3);
                assert!(matches!(
                    &condition.parts[0],
                    SupportsPart::InParens(SupportsInParens {
                        content: SupportsContent::Declaration(decl),
                        ..
                    }) if decl.property == "display"
                ));
                assert!(matches!(
                    &condition.parts[1],
                    SupportsPart::Keyword(keyword) if keyword.value == "and"
                ));
                match &condition.parts[2] {
                    SupportsPart::InParens(SupportsInParens {
                        content: SupportsContent::Condition(inner),
                        ..
                    }) => {
                        assert!(matches!(
                            &inner.parts[0],
                            SupportsPart::Keyword(keyword) if keyword.value == "not"
                        ));
                    }
                    other => panic!("expected nested condition, got {:?}", other),
                }
            }
            other => panic!("expected supports condition, got {:?}", other),
        }
    }
}
