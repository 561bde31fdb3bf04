//! Selector parsing.
//!
//! Selectors are the one context where whitespace is syntactically
//! meaningful (`div .a` vs `div.a`), so the lexer's whitespace retention
//! is switched on for the duration of each selector and restored on every
//! exit path. An+B arguments switch it back off: spaces inside `2n + 1`
//! carry no meaning.

use smol_str::SmolStr;
use umber_ast::{
    AnPlusB, AttributeSelector, ClassSelector, CombinatorSelector, IdSelector,
    PseudoClassArguments, PseudoClassSelector, PseudoElementSelector, Selector, SelectorList,
    SelectorPart, Span, TypeSelector, Whitespace,
};
use umber_lexer::TokenKind;

use crate::error::ParseError;
use crate::parser::{PResult, Parser};

impl<'s> Parser<'s> {
    pub(crate) fn parse_selector_list(&mut self) -> PResult<SelectorList> {
        let start = self.lexer.token_start();

        let mut selectors = vec![self.parse_selector()?];
        while self.lexer.current == TokenKind::Comma {
            self.advance()?;
            selectors.push(self.parse_selector()?);
        }

        Ok(SelectorList {
            span: self.span_from(start),
            selectors,
        })
    }

    fn parse_selector(&mut self) -> PResult<Selector> {
        self.with_whitespace_retention(true, |p| {
            // Leading whitespace (e.g. after the comma of the previous
            // selector) is never part of the selector.
            while p.lexer.current == TokenKind::Whitespace {
                p.advance()?;
            }

            let start = p.lexer.token_start();
            let mut parts: Vec<SelectorPart> = Vec::new();

            loop {
                match p.lexer.current {
                    TokenKind::Eof => {
                        return Err(ParseError::UnexpectedEof {
                            span: p.current_range(),
                        })
                    }

                    TokenKind::Whitespace => {
                        parts.push(SelectorPart::Whitespace(Whitespace {
                            span: p.token_span(),
                        }));
                        p.advance()?;
                    }

                    TokenKind::Ident => {
                        parts.push(SelectorPart::Type(TypeSelector {
                            span: p.token_span(),
                            name: SmolStr::new(p.lexer.current_string),
                        }));
                        p.advance()?;
                    }

                    TokenKind::Hash => {
                        parts.push(SelectorPart::Id(IdSelector {
                            span: p.token_span(),
                            name: SmolStr::new(p.lexer.current_string),
                        }));
                        p.advance()?;
                    }

                    TokenKind::Delim => match p.lexer.current_string {
                        "." => {
                            let class_start = p.lexer.token_start();
                            p.advance()?;
                            if p.lexer.current != TokenKind::Ident {
                                return Err(ParseError::Expected {
                                    expected: "IDENT".into(),
                                    found: p.found_text(),
                                    span: p.current_range(),
                                });
                            }
                            parts.push(SelectorPart::Class(ClassSelector {
                                span: Span::new(class_start as u32, p.lexer.token_end() as u32),
                                name: SmolStr::new(p.lexer.current_string),
                            }));
                            p.advance()?;
                        }

                        "+" | ">" | "~" | "|" => {
                            parts.push(SelectorPart::Combinator(CombinatorSelector {
                                span: p.token_span(),
                                operator: SmolStr::new(p.lexer.current_string),
                            }));
                            p.advance()?;
                        }

                        "*" => {
                            parts.push(SelectorPart::Type(TypeSelector {
                                span: p.token_span(),
                                name: SmolStr::new("*"),
                            }));
                            p.advance()?;
                        }

                        _ => {
                            return Err(ParseError::UnexpectedToken {
                                found: p.found_text(),
                                span: p.current_range(),
                            })
                        }
                    },

                    TokenKind::Colon => {
                        let part = p.parse_pseudo_selector()?;
                        parts.push(part);
                    }

                    TokenKind::LBracket => {
                        let part = p.parse_attribute_selector()?;
                        parts.push(part);
                    }

                    // `,`, `{`, `)`, or anything else ends this selector.
                    _ => {
                        if parts.is_empty() {
                            return Err(ParseError::ExpectedSelector {
                                span: p.current_range(),
                            });
                        }
                        break;
                    }
                }
            }

            while matches!(parts.last(), Some(SelectorPart::Whitespace(_))) {
                parts.pop();
            }
            if parts.is_empty() {
                return Err(ParseError::ExpectedSelector {
                    span: p.current_range(),
                });
            }

            let end = parts.last().map(|part| part.span().end).unwrap_or(0);
            Ok(Selector {
                span: Span::new(start as u32, end),
                parts,
            })
        })
    }

    fn parse_pseudo_selector(&mut self) -> PResult<SelectorPart> {
        let start = self.lexer.token_start();
        self.advance()?;

        // A second colon makes this a pseudo-element wrapping the inner
        // pseudo-class, e.g. `::before`.
        let element = if self.lexer.current == TokenKind::Colon {
            self.advance()?;
            true
        } else {
            false
        };

        let name = SmolStr::new(self.lexer.current_string);
        let inner = match self.lexer.current {
            TokenKind::Ident => {
                self.advance()?;
                PseudoClassSelector {
                    span: self.span_from(start),
                    name,
                    arguments: None,
                }
            }

            TokenKind::FunctionStart => {
                self.advance()?;
                let arguments = if is_nth_function(&name) {
                    self.parse_nth_arguments()?
                } else {
                    PseudoClassArguments::SelectorList(self.parse_selector_list()?)
                };
                self.expect(TokenKind::RParen)?;
                PseudoClassSelector {
                    span: self.span_from(start),
                    name,
                    arguments: Some(arguments),
                }
            }

            _ => {
                return Err(ParseError::UnexpectedToken {
                    found: self.found_text(),
                    span: self.current_range(),
                })
            }
        };

        Ok(if element {
            SelectorPart::PseudoElement(PseudoElementSelector {
                span: self.span_from(start),
                inner,
            })
        } else {
            SelectorPart::PseudoClass(inner)
        })
    }

    fn parse_nth_arguments(&mut self) -> PResult<PseudoClassArguments> {
        match self.lexer.current {
            TokenKind::Number | TokenKind::Dimension => {
                Ok(PseudoClassArguments::AnPlusB(self.parse_an_plus_b()?))
            }
            TokenKind::Ident => {
                let text = self.lexer.current_string;
                if text == "even" || text == "odd" {
                    Ok(PseudoClassArguments::Identifier(self.parse_identifier()?))
                } else if text == "n" || n_minus_offset(text).is_some() {
                    Ok(PseudoClassArguments::AnPlusB(self.parse_an_plus_b()?))
                } else {
                    Err(ParseError::InvalidNth {
                        span: self.current_range(),
                    })
                }
            }
            _ => Err(ParseError::InvalidNth {
                span: self.current_range(),
            }),
        }
    }

    /// Parse an `An+B` argument from the token shapes the lexer actually
    /// produces: `2n` is a dimension with unit `n`, `2n-1` a dimension
    /// with unit `n-1`, `2n+1` a dimension followed by the signed number
    /// `+1`, and `n+1` an identifier followed by a signed number.
    fn parse_an_plus_b(&mut self) -> PResult<AnPlusB> {
        self.with_whitespace_retention(false, |p| {
            let start = p.lexer.token_start();
            let mut a = SmolStr::default();
            let mut operator = SmolStr::default();
            let mut b = SmolStr::default();

            match p.lexer.current {
                TokenKind::Dimension => {
                    a = SmolStr::new(p.lexer.current_numeral);
                    let unit = p.lexer.current_string;
                    if unit == "n" {
                        p.advance()?;
                    } else if let Some(offset) = n_minus_offset(unit) {
                        operator = SmolStr::new("-");
                        b = SmolStr::new(offset);
                        p.advance()?;
                    } else {
                        return Err(ParseError::ExpectedAnPlusB {
                            span: p.current_range(),
                        });
                    }
                }
                TokenKind::Number => {
                    a = SmolStr::new(p.lexer.current_numeral);
                    p.advance()?;
                    if p.lexer.current == TokenKind::Ident && p.lexer.current_string == "n" {
                        p.advance()?;
                    } else {
                        return Err(ParseError::ExpectedAnPlusB {
                            span: p.current_range(),
                        });
                    }
                }
                TokenKind::Ident => {
                    let text = p.lexer.current_string;
                    if text == "n" {
                        p.advance()?;
                    } else if let Some(offset) = n_minus_offset(text) {
                        operator = SmolStr::new("-");
                        b = SmolStr::new(offset);
                        p.advance()?;
                    } else {
                        return Err(ParseError::ExpectedAnPlusB {
                            span: p.current_range(),
                        });
                    }
                }
                _ => {
                    return Err(ParseError::ExpectedAnPlusB {
                        span: p.current_range(),
                    })
                }
            }

            if b.is_empty() {
                if p.lexer.current == TokenKind::Delim
                    && matches!(p.lexer.current_string, "+" | "-")
                {
                    operator = SmolStr::new(p.lexer.current_string);
                    p.advance()?;
                    if p.lexer.current != TokenKind::Number {
                        return Err(ParseError::Expected {
                            expected: "NUMBER".into(),
                            found: p.found_text(),
                            span: p.current_range(),
                        });
                    }
                    b = SmolStr::new(p.lexer.current_numeral);
                    p.advance()?;
                } else if p.lexer.current == TokenKind::Number
                    && p.lexer.current_numeral.starts_with(['+', '-'])
                {
                    operator = SmolStr::new(&p.lexer.current_numeral[..1]);
                    b = SmolStr::new(&p.lexer.current_numeral[1..]);
                    p.advance()?;
                }
            }

            Ok(AnPlusB {
                span: p.span_from(start),
                a,
                operator,
                b,
            })
        })
    }

    fn parse_attribute_selector(&mut self) -> PResult<SelectorPart> {
        let start = self.lexer.token_start();
        self.advance()?;

        if self.lexer.current != TokenKind::Ident {
            return Err(ParseError::Expected {
                expected: "IDENT".into(),
                found: self.found_text(),
                span: self.current_range(),
            });
        }
        let property = SmolStr::new(self.lexer.current_string);
        self.advance()?;

        let mut pre_operator = SmolStr::default();
        let mut value = None;

        if self.lexer.current == TokenKind::Delim {
            match self.lexer.current_string {
                "^" | "~" | "$" | "*" => {
                    pre_operator = SmolStr::new(self.lexer.current_string);
                    self.advance()?;
                    let is_eq =
                        self.lexer.current == TokenKind::Delim && self.lexer.current_string == "=";
                    if !is_eq {
                        return Err(ParseError::Expected {
                            expected: "=".into(),
                            found: self.found_text(),
                            span: self.current_range(),
                        });
                    }
                    self.advance()?;
                }
                "=" => self.advance()?,
                _ => {
                    return Err(ParseError::Expected {
                        expected: "=".into(),
                        found: self.found_text(),
                        span: self.current_range(),
                    })
                }
            }
            value = Some(self.parse_value()?);
        }

        self.expect(TokenKind::RBracket)?;

        Ok(SelectorPart::Attribute(AttributeSelector {
            span: self.span_from(start),
            property,
            pre_operator,
            value,
        }))
    }
}

/// Four pseudo-classes take `An+B` arguments instead of selector lists.
fn is_nth_function(name: &str) -> bool {
    matches!(
        name,
        "nth-child" | "nth-last-child" | "nth-of-type" | "nth-last-of-type"
    )
}

/// Split an `n-3`-shaped name into its offset digits: `-` and digits are
/// name code points, so the lexer folds a negative offset into the name.
fn n_minus_offset(name: &str) -> Option<&str> {
    let offset = name.strip_prefix("n-")?;
    if !offset.is_empty() && offset.bytes().all(|b| b.is_ascii_digit()) {
        Some(offset)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umber_ast::{Node, Prelude, Source, Stylesheet};

    fn parse(input: &str) -> Stylesheet {
        crate::parse(&Source::new("main.css", input)).unwrap()
    }

    fn parse_err(input: &str) -> ParseError {
        crate::parse(&Source::new("main.css", input)).unwrap_err()
    }

    fn selectors(stylesheet: &Stylesheet) -> &[Selector] {
        match &stylesheet.nodes[0] {
            Node::QualifiedRule(rule) => match &rule.prelude {
                Prelude::SelectorList(list) => &list.selectors,
                other => panic!("expected selector list, got {:?}", other),
            },
            other => panic!("expected qualified rule, got {:?}", other),
        }
    }

    #[test]
    fn test_compound_selectors() {
        let stylesheet = parse("div.test #thing, div.test#thing, div .test#thing { }");
        let list = selectors(&stylesheet);
        assert_eq!(list.len(), 3);

        // div.test #thing
        assert!(matches!(&list[0].parts[0], SelectorPart::Type(t) if t.name == "div"));
        assert!(matches!(&list[0].parts[1], SelectorPart::Class(c) if c.name == "test"));
        assert!(matches!(&list[0].parts[2], SelectorPart::Whitespace(_)));
        assert!(matches!(&list[0].parts[3], SelectorPart::Id(i) if i.name == "thing"));

        // div.test#thing has no whitespace part
        assert_eq!(list[1].parts.len(), 3);

        // div .test#thing
        assert!(matches!(&list[2].parts[1], SelectorPart::Whitespace(_)));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let stylesheet = parse("  div ,  .a  { }");
        let list = selectors(&stylesheet);
        for selector in list {
            assert!(!matches!(
                selector.parts.first(),
                Some(SelectorPart::Whitespace(_))
            ));
            assert!(!matches!(
                selector.parts.last(),
                Some(SelectorPart::Whitespace(_))
            ));
        }
    }

    #[test]
    fn test_universal_selector() {
        let stylesheet = parse("* { }");
        let list = selectors(&stylesheet);
        assert!(matches!(&list[0].parts[0], SelectorPart::Type(t) if t.name == "*"));
    }

    #[test]
    fn test_combinators() {
        let stylesheet = parse("ul > li + li { }");
        let list = selectors(&stylesheet);
        let combinators: Vec<_> = list[0]
            .parts
            .iter()
            .filter_map(|part| match part {
                SelectorPart::Combinator(c) => Some(c.operator.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(combinators, vec![">", "+"]);
    }

    #[test]
    fn test_pseudo_class() {
        let stylesheet = parse("a:hover { }");
        let list = selectors(&stylesheet);
        assert!(matches!(
            &list[0].parts[1],
            SelectorPart::PseudoClass(pc) if pc.name == "hover" && pc.arguments.is_none()
        ));
    }

    #[test]
    fn test_pseudo_element() {
        let stylesheet = parse("p::before { }");
        let list = selectors(&stylesheet);
        match &list[0].parts[1] {
            SelectorPart::PseudoElement(element) => assert_eq!(element.inner.name, "before"),
            other => panic!("expected pseudo element, got {:?}", other),
        }
    }

    #[test]
    fn test_pseudo_class_selector_arguments() {
        let stylesheet = parse("div:not(.a, .b) { }");
        let list = selectors(&stylesheet);
        match &list[0].parts[1] {
            SelectorPart::PseudoClass(pc) => {
                assert_eq!(pc.name, "not");
                match pc.arguments.as_ref().unwrap() {
                    PseudoClassArguments::SelectorList(inner) => {
                        assert_eq!(inner.selectors.len(), 2)
                    }
                    other => panic!("expected selector list, got {:?}", other),
                }
            }
            other => panic!("expected pseudo class, got {:?}", other),
        }
    }

    fn nth_argument(input: &str) -> PseudoClassArguments {
        let stylesheet = parse(input);
        let list = selectors(&stylesheet);
        match &list[0].parts[1] {
            SelectorPart::PseudoClass(pc) => pc.arguments.clone().unwrap(),
            other => panic!("expected pseudo class, got {:?}", other),
        }
    }

    #[test]
    fn test_an_plus_b_forms() {
        match nth_argument("li:nth-child(2n+1) { }") {
            PseudoClassArguments::AnPlusB(v) => {
                assert_eq!((v.a.as_str(), v.operator.as_str(), v.b.as_str()), ("2", "+", "1"));
            }
            other => panic!("expected an+b, got {:?}", other),
        }

        match nth_argument("li:nth-child(2n - 1) { }") {
            PseudoClassArguments::AnPlusB(v) => {
                assert_eq!((v.a.as_str(), v.operator.as_str(), v.b.as_str()), ("2", "-", "1"));
            }
            other => panic!("expected an+b, got {:?}", other),
        }

        match nth_argument("li:nth-child(2n-1) { }") {
            PseudoClassArguments::AnPlusB(v) => {
                assert_eq!((v.a.as_str(), v.operator.as_str(), v.b.as_str()), ("2", "-", "1"));
            }
            other => panic!("expected an+b, got {:?}", other),
        }

        match nth_argument("li:nth-child(n+2) { }") {
            PseudoClassArguments::AnPlusB(v) => {
                assert_eq!((v.a.as_str(), v.operator.as_str(), v.b.as_str()), ("", "+", "2"));
            }
            other => panic!("expected an+b, got {:?}", other),
        }

        match nth_argument("li:nth-child(2n) { }") {
            PseudoClassArguments::AnPlusB(v) => {
                assert_eq!((v.a.as_str(), v.operator.as_str(), v.b.as_str()), ("2", "", ""));
            }
            other => panic!("expected an+b, got {:?}", other),
        }
    }

    #[test]
    fn test_nth_even_odd() {
        match nth_argument("li:nth-child(even) { }") {
            PseudoClassArguments::Identifier(id) => assert_eq!(id.value, "even"),
            other => panic!("expected identifier, got {:?}", other),
        }
        match nth_argument("li:nth-child(odd) { }") {
            PseudoClassArguments::Identifier(id) => assert_eq!(id.value, "odd"),
            other => panic!("expected identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_nth_rejects_other_identifiers() {
        let err = parse_err("li:nth-child(random) { }");
        assert_eq!(err.to_string(), "expected even, odd, or an+b syntax");
    }

    #[test]
    fn test_attribute_selectors() {
        let stylesheet = parse("[href] { }");
        let list = selectors(&stylesheet);
        match &list[0].parts[0] {
            SelectorPart::Attribute(attr) => {
                assert_eq!(attr.property, "href");
                assert_eq!(attr.pre_operator, "");
                assert!(attr.value.is_none());
            }
            other => panic!("expected attribute, got {:?}", other),
        }

        let stylesheet = parse("[href^=\"https\"] { }");
        let list = selectors(&stylesheet);
        match &list[0].parts[0] {
            SelectorPart::Attribute(attr) => {
                assert_eq!(attr.pre_operator, "^");
                assert!(attr.value.is_some());
            }
            other => panic!("expected attribute, got {:?}", other),
        }
    }

    #[test]
    fn test_attribute_operator_requires_eq() {
        let err = parse_err("[href^\"https\"] { }");
        assert_eq!(err.to_string(), "expected =, got https");
    }

    #[test]
    fn test_expected_selector() {
        let err = parse_err("; { }");
        assert_eq!(err.to_string(), "expected selector");
    }
}
