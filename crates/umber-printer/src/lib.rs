//! # Umber Printer
//!
//! Emits minified CSS from a stylesheet tree. The printer is a plain AST
//! consumer: it never re-examines source text, so whatever the parser
//! preserved (numerals, escapes, comma separators) prints back verbatim.
//!
//! Whitespace survives only where it carries meaning: descendant
//! combinators in selectors, between media query parts, after an at-rule
//! name, and around `+`/`-` math operators. Comments and `@custom-media`
//! declarations are compile-time constructs and are not emitted.

use umber_ast::{
    AtRule, Block, Declaration, KeyframeSelector, KeyframeSelectorList, MediaFeature,
    MediaQuery, MediaQueryList, MediaQueryPart, Node, Prelude, PseudoClassArguments,
    PseudoClassSelector, QualifiedRule, Selector, SelectorList, SelectorPart, Stylesheet,
    SupportsCondition, SupportsContent, SupportsPart, Value, ValueList,
};

/// Print a stylesheet as minified CSS.
pub fn print(stylesheet: &Stylesheet) -> String {
    let mut printer = Printer {
        out: String::new(),
    };
    printer.stylesheet(stylesheet);
    printer.out
}

struct Printer {
    out: String,
}

impl Printer {
    fn stylesheet(&mut self, stylesheet: &Stylesheet) {
        for node in &stylesheet.nodes {
            match node {
                Node::Comment(_) => {}
                Node::AtRule(rule) if rule.name == "custom-media" => {}
                Node::AtRule(rule) => self.at_rule(rule),
                Node::QualifiedRule(rule) => self.qualified_rule(rule),
            }
        }
    }

    fn at_rule(&mut self, rule: &AtRule) {
        self.out.push('@');
        self.out.push_str(&rule.name);

        if let Some(prelude) = &rule.prelude {
            self.out.push(' ');
            self.prelude(prelude);
        }

        match &rule.block {
            Some(block) => self.block(block),
            None => self.out.push(';'),
        }
    }

    fn qualified_rule(&mut self, rule: &QualifiedRule) {
        self.prelude(&rule.prelude);
        self.block(&rule.block);
    }

    fn prelude(&mut self, prelude: &Prelude) {
        match prelude {
            Prelude::SelectorList(list) => self.selector_list(list),
            Prelude::KeyframeSelectorList(list) => self.keyframe_selector_list(list),
            Prelude::MediaQueryList(list) => self.media_query_list(list),
            Prelude::SupportsCondition(condition) => self.supports_condition(condition),
            Prelude::KeyframesName(name) => self.out.push_str(&name.value),
            Prelude::Import(import) => self.value(&import.href),
            Prelude::CustomMedia(prelude) => {
                self.out.push_str(&prelude.name.value);
                self.out.push(' ');
                self.media_query(&prelude.query);
            }
            Prelude::ValueList(list) => self.value_list(list),
        }
    }

    fn block(&mut self, block: &Block) {
        self.out.push('{');
        match block {
            Block::DeclarationBlock(block) => {
                for (i, declaration) in block.declarations.iter().enumerate() {
                    if i > 0 {
                        self.out.push(';');
                    }
                    self.declaration(declaration);
                }
            }
            Block::QualifiedRuleBlock(block) => {
                for rule in &block.rules {
                    self.qualified_rule(rule);
                }
            }
        }
        self.out.push('}');
    }

    fn declaration(&mut self, declaration: &Declaration) {
        self.out.push_str(&declaration.property);
        self.out.push(':');
        self.values(&declaration.values);
        if declaration.important {
            self.out.push_str("!important");
        }
    }

    // ========================================================================
    // Selectors
    // ========================================================================

    fn selector_list(&mut self, list: &SelectorList) {
        for (i, selector) in list.selectors.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.selector(selector);
        }
    }

    fn selector(&mut self, selector: &Selector) {
        for part in &selector.parts {
            match part {
                // Whitespace parts are syntactically meaningful
                // (descendant combinators); they collapse to one space
                // but are never dropped, so reparsing the output yields
                // a structurally equal selector.
                SelectorPart::Whitespace(_) => self.out.push(' '),
                SelectorPart::Type(t) => self.out.push_str(&t.name),
                SelectorPart::Class(c) => {
                    self.out.push('.');
                    self.out.push_str(&c.name);
                }
                SelectorPart::Id(id) => {
                    self.out.push('#');
                    self.out.push_str(&id.name);
                }
                SelectorPart::Combinator(combinator) => self.out.push_str(&combinator.operator),
                SelectorPart::PseudoClass(pseudo) => self.pseudo_class(pseudo),
                SelectorPart::PseudoElement(element) => {
                    self.out.push(':');
                    self.pseudo_class(&element.inner);
                }
                SelectorPart::Attribute(attribute) => {
                    self.out.push('[');
                    self.out.push_str(&attribute.property);
                    if let Some(value) = &attribute.value {
                        self.out.push_str(&attribute.pre_operator);
                        self.out.push('=');
                        self.value(value);
                    }
                    self.out.push(']');
                }
            }
        }
    }

    fn pseudo_class(&mut self, pseudo: &PseudoClassSelector) {
        self.out.push(':');
        self.out.push_str(&pseudo.name);

        if let Some(arguments) = &pseudo.arguments {
            self.out.push('(');
            match arguments {
                PseudoClassArguments::SelectorList(list) => self.selector_list(list),
                PseudoClassArguments::Identifier(identifier) => {
                    self.out.push_str(&identifier.value)
                }
                PseudoClassArguments::AnPlusB(nth) => {
                    self.out.push_str(&nth.a);
                    self.out.push('n');
                    self.out.push_str(&nth.operator);
                    self.out.push_str(&nth.b);
                }
            }
            self.out.push(')');
        }
    }

    // ========================================================================
    // Keyframes
    // ========================================================================

    fn keyframe_selector_list(&mut self, list: &KeyframeSelectorList) {
        for (i, selector) in list.selectors.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            match selector {
                KeyframeSelector::Percentage(percentage) => {
                    self.out.push_str(&percentage.value);
                    self.out.push('%');
                }
                KeyframeSelector::Ident(identifier) => self.out.push_str(&identifier.value),
            }
        }
    }

    // ========================================================================
    // Media queries and supports conditions
    // ========================================================================

    fn media_query_list(&mut self, list: &MediaQueryList) {
        for (i, query) in list.queries.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.media_query(query);
        }
    }

    fn media_query(&mut self, query: &MediaQuery) {
        for (i, part) in query.parts.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            match part {
                MediaQueryPart::Keyword(keyword) => self.out.push_str(&keyword.value),
                MediaQueryPart::Feature(feature) => self.media_feature(feature),
            }
        }
    }

    fn media_feature(&mut self, feature: &MediaFeature) {
        self.out.push('(');
        match feature {
            MediaFeature::Plain(plain) => {
                self.out.push_str(&plain.property.value);
                if !plain.values.is_empty() {
                    self.out.push(':');
                    self.values(&plain.values);
                }
            }
            MediaFeature::Range(range) => {
                if let Some(left) = &range.left {
                    self.value(left);
                }
                if let Some(operator) = &range.left_operator {
                    self.out.push_str(operator.as_str());
                }
                self.out.push_str(&range.property.value);
                if let Some(operator) = &range.right_operator {
                    self.out.push_str(operator.as_str());
                }
                if let Some(right) = &range.right {
                    self.value(right);
                }
            }
        }
        self.out.push(')');
    }

    fn supports_condition(&mut self, condition: &SupportsCondition) {
        for (i, part) in condition.parts.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            match part {
                SupportsPart::Keyword(keyword) => self.out.push_str(&keyword.value),
                SupportsPart::InParens(in_parens) => {
                    self.out.push('(');
                    match &in_parens.content {
                        SupportsContent::Declaration(declaration) => {
                            self.declaration(declaration)
                        }
                        SupportsContent::Condition(inner) => self.supports_condition(inner),
                    }
                    self.out.push(')');
                }
            }
        }
    }

    // ========================================================================
    // Values
    // ========================================================================

    fn value_list(&mut self, list: &ValueList) {
        self.values(&list.values);
    }

    fn values(&mut self, values: &[Value]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 && needs_space(&values[i - 1], value) {
                self.out.push(' ');
            }
            self.value(value);
        }
    }

    fn value(&mut self, value: &Value) {
        match value {
            Value::String(string) => {
                self.out.push('"');
                self.out.push_str(&string.value);
                self.out.push('"');
            }
            Value::Url(url) => {
                self.out.push_str("url(");
                self.out.push_str(&url.value);
                self.out.push(')');
            }
            Value::Dimension(dimension) => {
                self.out.push_str(&dimension.value);
                self.out.push_str(&dimension.unit);
            }
            Value::Percentage(percentage) => {
                self.out.push_str(&percentage.value);
                self.out.push('%');
            }
            Value::Number(number) => self.out.push_str(&number.value),
            Value::Identifier(identifier) => self.out.push_str(&identifier.value),
            Value::HexColor(color) => {
                self.out.push('#');
                self.out.push_str(&color.rgba);
            }
            Value::Function(function) => {
                self.out.push_str(&function.name);
                self.out.push('(');
                self.values(&function.arguments);
                self.out.push(')');
            }
            Value::MathOperator(operator) => self.out.push_str(&operator.operator),
            Value::Comma(_) => self.out.push(','),
        }
    }
}

/// Whether two adjacent values need a separating space. Commas bind
/// tight on both sides; `+` and `-` keep their spaces (required inside
/// `calc()`), `*` and `/` do not.
fn needs_space(previous: &Value, next: &Value) -> bool {
    if matches!(previous, Value::Comma(_)) || matches!(next, Value::Comma(_)) {
        return false;
    }
    for operator in [previous, next] {
        if let Value::MathOperator(op) = operator {
            return matches!(op.operator.as_str(), "+" | "-");
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use umber_ast::Source;

    fn print_source(input: &str) -> String {
        let source = Source::new("main.css", input);
        let stylesheet = umber_parser::parse(&source).unwrap();
        print(&stylesheet)
    }

    #[test]
    fn test_class() {
        assert_eq!(
            print_source(".class {\n\tfont-family: \"Helvetica\", sans-serif;\n}"),
            ".class{font-family:\"Helvetica\",sans-serif}"
        );
    }

    #[test]
    fn test_class_multiple_declarations() {
        assert_eq!(
            print_source(".class {\n\tfont-family: \"Helvetica\", sans-serif;\n\twidth: 2rem;\n}"),
            ".class{font-family:\"Helvetica\",sans-serif;width:2rem}"
        );
    }

    #[test]
    fn test_class_complex_selector() {
        assert_eq!(
            print_source("div.test #thing, div.test#thing, div .test#thing { }"),
            "div.test #thing,div.test#thing,div .test#thing{}"
        );
    }

    #[test]
    fn test_media_query_ranges() {
        assert_eq!(
            print_source("@media (200px < width < 600px), (200px < width), (width < 600px) {}"),
            "@media (200px<width<600px),(200px<width),(width<600px){}"
        );
    }

    #[test]
    fn test_keyframes() {
        assert_eq!(
            print_source("@keyframes x { from { opacity: 0 } to { opacity: 1 } }"),
            "@keyframes x{from{opacity:0}to{opacity:1}}"
        );
    }

    #[test]
    fn test_rule_no_semicolon() {
        assert_eq!(print_source(".class { width: 2rem }"), ".class{width:2rem}");
    }

    #[test]
    fn test_important() {
        assert_eq!(
            print_source(".a { color: red !important; }"),
            ".a{color:red!important}"
        );
    }

    #[test]
    fn test_combinators() {
        assert_eq!(print_source("ul>li+li {}"), "ul>li+li{}");
        assert_eq!(print_source("ul > li {}"), "ul > li{}");
    }

    #[test]
    fn test_pseudo_selectors() {
        assert_eq!(
            print_source("li:nth-child(2n + 1)::before {}"),
            "li:nth-child(2n+1)::before{}"
        );
        assert_eq!(print_source("div:not(.a, .b) {}"), "div:not(.a,.b){}");
    }

    #[test]
    fn test_attribute_selectors() {
        assert_eq!(
            print_source("a[href^=\"https\"] {}"),
            "a[href^=\"https\"]{}"
        );
        assert_eq!(print_source("[disabled] {}"), "[disabled]{}");
    }

    #[test]
    fn test_calc_keeps_operator_spacing() {
        assert_eq!(
            print_source(".a { width: calc(100% - 10px); aspect-ratio: 16/9 }"),
            ".a{width:calc(100% - 10px);aspect-ratio:16/9}"
        );
    }

    #[test]
    fn test_supports() {
        assert_eq!(
            print_source("@supports (display: grid) and (not (display: inline-grid)) { .a {} }"),
            "@supports (display:grid) and (not (display:inline-grid)){.a{}}"
        );
    }

    #[test]
    fn test_import() {
        assert_eq!(
            print_source("@import url(\"fine.css\");"),
            "@import url(\"fine.css\");"
        );
        assert_eq!(print_source("@import \"fine.css\";"), "@import \"fine.css\";");
    }

    #[test]
    fn test_font_face() {
        assert_eq!(
            print_source("@font-face { font-family: \"Umber Sans\"; src: url(umber.woff2) }"),
            "@font-face{font-family:\"Umber Sans\";src:url(umber.woff2)}"
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(
            print_source("/* header */ .a { /* inner */ color: red }"),
            ".a{color:red}"
        );
    }

    #[test]
    fn test_media_with_type_and_feature() {
        assert_eq!(
            print_source("@media screen and (max-width: 30em) { .a { color: red } }"),
            "@media screen and (max-width:30em){.a{color:red}}"
        );
    }

    /// Printing is minifying, so output differs from input, but parsing
    /// the output again must converge: print(parse(print(parse(s)))) ==
    /// print(parse(s)).
    #[test]
    fn test_round_trip_converges() {
        let cases = [
            ".class { font-family: \"Helvetica\", sans-serif; }",
            "div.test #thing, div.test#thing, div .test#thing { }",
            "@media (200px < width < 600px), (200px < width), (width < 600px) {}",
            "@media not screen and (color), print {}",
            "@keyframes x { from { opacity: 0 } 50% { opacity: .5 } to { opacity: 1 } }",
            "ul > li:nth-child(2n+1)::after { content: \"*\" }",
            ".a { width: calc(100% - var(--gap, 10px)); background: url(a.png) }",
            "@supports (display: grid) and (not (display: inline-grid)) { .a {} }",
            "@font-face { font-family: \"Umber Sans\"; src: url(umber.woff2) }",
            "@import \"tokens.css\";\n:root { --accent: #aabbcc }",
        ];

        for case in cases {
            let once = print_source(case);
            let twice = print_source(&once);
            assert_eq!(once, twice, "input: {case}");
        }
    }

    /// Parsing the printed output yields a structurally equal tree
    /// (spans excepted, which never participate in equality).
    #[test]
    fn test_reparse_is_structurally_equal() {
        let input = "@media screen and (max-width: 30em) { .a > .b { width: calc(100% - 10px) } }";
        let source = Source::new("main.css", input);
        let stylesheet = umber_parser::parse(&source).unwrap();

        let printed = print(&stylesheet);
        let reparsed = umber_parser::parse(&Source::new("main.css", printed)).unwrap();
        assert_eq!(stylesheet, reparsed);
    }
}
