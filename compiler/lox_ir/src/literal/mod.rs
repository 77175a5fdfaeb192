//! Decoded literal values and their canonical text.

use std::fmt;
use std::io::{self, Write};

/// The decoded value carried by a token.
///
/// Strings keep the raw bytes between the quotes (no escape processing), so
/// they borrow from the source just like lexemes do.
#[derive(Clone, Copy, PartialEq)]
pub enum Literal<'src> {
    /// Operators, keywords, identifiers and EOF.
    None,
    /// Bytes between the quotes of a string literal.
    String(&'src [u8]),
    /// Parsed numeric value.
    Number(f64),
}

impl Literal<'_> {
    /// Returns `true` if the token carries no decoded value.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }

    /// Write the literal's output text, copying string bytes unchanged.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Literal::None => out.write_all(b"null"),
            Literal::String(bytes) => out.write_all(bytes),
            Literal::Number(value) => out.write_all(format_number(*value).as_bytes()),
        }
    }
}

impl fmt::Debug for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("None"),
            Literal::String(bytes) => f
                .debug_tuple("String")
                .field(&String::from_utf8_lossy(bytes))
                .finish(),
            Literal::Number(value) => f.debug_tuple("Number").field(value).finish(),
        }
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("null"),
            Literal::String(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Literal::Number(value) => f.write_str(&format_number(*value)),
        }
    }
}

/// Significant digits used for numbers with a fractional part.
const GENERAL_PRECISION: i32 = 15;

/// Render a number literal's value in canonical form.
///
/// Integral values get exactly one fractional digit (`123` renders as
/// `123.0`). Everything else uses the C `%.15g` general format: 15
/// significant digits, trailing zeros stripped, scientific notation when the
/// decimal exponent is below -4 or at least 15.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.1}");
    }
    format_general(value)
}

/// `%.15g` equivalent.
///
/// The exponent is taken from the rounded scientific rendering, so values
/// that round up into the next decade (e.g. `9.9999999999999999`) pick the
/// notation for their rounded magnitude, as C does.
fn format_general(value: f64) -> String {
    let digits_after_point = usize::try_from(GENERAL_PRECISION - 1).unwrap_or(0);
    let scientific = format!("{value:.digits_after_point$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        let magnitude = exponent.unsigned_abs();
        format!("{}e{sign}{magnitude:02}", strip_trailing_zeros(mantissa))
    } else {
        let decimals = usize::try_from(GENERAL_PRECISION - 1 - exponent).unwrap_or(0);
        let fixed = format!("{value:.decimals$}");
        strip_trailing_zeros(&fixed).to_owned()
    }
}

/// Drop trailing fractional zeros, and the point itself if nothing is left.
fn strip_trailing_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}
