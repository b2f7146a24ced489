//! Conversions from host values to numbers, integers, lengths and indices.

use crate::constants::MAX_SAFE_INTEGER;
use crate::error::{ErrorType, Result};
use crate::field_types::RequestIndex;
use crate::value::host_value::Value;

pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Boolean(b) => if *b { 1.0 } else { 0.0 },
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(s),
        Value::Object | Value::Buffer(_) | Value::View(_) => f64::NAN,
    }
}

/// NaN becomes 0, the infinities are kept, everything else truncates towards zero
pub fn to_integer(number: f64) -> f64 {
    if number.is_nan() {
        0.0
    } else {
        number.trunc()
    }
}

/// clamp into [0, 2^53 - 1]
pub fn to_length(number: f64) -> f64 {
    let length = to_integer(number);
    if length <= 0.0 {
        0.0
    } else {
        length.min(MAX_SAFE_INTEGER)
    }
}

/// undefined is index 0, anything negative or above 2^53 - 1 is rejected
pub fn to_index(value: &Value) -> Result<RequestIndex> {
    if value.is_undefined() {
        return Ok(0);
    }
    let integer = to_integer(to_number(value));
    if integer < 0.0 {
        return Err(ErrorType::InvalidIndex(integer));
    }
    let index = to_length(integer);
    if index != integer {
        return Err(ErrorType::InvalidIndex(integer));
    }
    Ok(index as RequestIndex)
}

pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => !(*n == 0.0 || n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Object | Value::Buffer(_) | Value::View(_) => true,
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// numeric string grammar: surrounding whitespace is ignored,
/// the empty string is 0 and anything unparsable is NaN
pub fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(number) = parse_radix_literal(trimmed) {
        return number;
    }
    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'+' => (1.0, &trimmed[1..]),
        b'-' => (-1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }
    unsigned.parse::<f64>().map_or(f64::NAN, |n| sign * n)
}

/// 0x, 0o and 0b literals, no sign allowed
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut number = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(digit) => number = number * radix as f64 + digit as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(number)
}

/// digits, at most one dot, an optional exponent, and at least one mantissa digit
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(position) => (&s[..position], Some(&s[position + 1..])),
        None => (s, None),
    };
    let mut digits = 0;
    let mut dots = 0;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    if digits == 0 || dots > 1 {
        return false;
    }
    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exponent);
            !exponent.is_empty() && exponent.chars().all(|c| c.is_ascii_digit())
        }
    }
}
