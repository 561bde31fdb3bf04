//! Value definitions.
//!
//! Numeric values keep their literal source text: the compiler never
//! parses numerals into floats, which preserves printing fidelity and
//! avoids rounding drift in downstream transforms.

use smol_str::SmolStr;

use crate::span::Span;

/// A CSS value, e.g. a dimension, percentage, or function call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    String(StringValue),
    /// An unquoted `url(...)` token. Quoted URLs are [`Value::Function`]
    /// calls named `url`.
    Url(Url),
    Dimension(Dimension),
    Percentage(Percentage),
    Number(Number),
    Identifier(Identifier),
    HexColor(HexColor),
    Function(Function),
    MathOperator(MathOperator),
    /// An explicit separator inside a value list or argument list, kept so
    /// printing reproduces the source shape.
    Comma(Comma),
}

impl Value {
    /// The value's source span.
    pub fn span(&self) -> Span {
        match self {
            Value::String(v) => v.span,
            Value::Url(v) => v.span,
            Value::Dimension(v) => v.span,
            Value::Percentage(v) => v.span,
            Value::Number(v) => v.span,
            Value::Identifier(v) => v.span,
            Value::HexColor(v) => v.span,
            Value::Function(v) => v.span,
            Value::MathOperator(v) => v.span,
            Value::Comma(v) => v.span,
        }
    }
}

/// A string literal, stored without quotes and with escapes unprocessed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringValue {
    pub span: Span,
    pub value: SmolStr,
}

/// An unquoted URL, e.g. `url(image.png)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Url {
    pub span: Span,
    pub value: SmolStr,
}

/// A numeric value with a unit, e.g. `2rem`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub span: Span,
    /// The literal numeral text.
    pub value: SmolStr,
    /// The unit, e.g. `rem` or `px`.
    pub unit: SmolStr,
}

/// A percentage, e.g. `50%`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percentage {
    pub span: Span,
    /// The literal numeral text, without the `%`.
    pub value: SmolStr,
}

/// A unitless number, integer or real.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Number {
    pub span: Span,
    /// The literal numeral text.
    pub value: SmolStr,
}

/// An identifier value, e.g. `inherit` or `sans-serif`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub span: Span,
    pub value: SmolStr,
}

/// A hex color, e.g. `#aabbccdd`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexColor {
    pub span: Span,
    /// The literal rgba digits, without the `#`.
    pub rgba: SmolStr,
}

/// A function call, e.g. `rgba(0, 0, 0, 0.5)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub span: Span,
    pub name: SmolStr,
    /// The argument values, separating commas included.
    pub arguments: Vec<Value>,
}

/// A math operator inside value expressions: `+`, `-`, `*`, or `/`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MathOperator {
    pub span: Span,
    pub operator: SmolStr,
}

/// A comma separator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comma {
    pub span: Span,
}
