//! Lenient number parsing.
//!
//! Blank or malformed tokens become zero instead of failing, and short
//! operand lists are padded with zeros so every operation sees at least
//! two values. Only plain decimal notation counts as a number: exponents,
//! digit separators and radix prefixes are malformed.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::{NumberStrings, ParsedNumbers};

/// Parse a single token, coercing anything unparseable to zero.
#[must_use]
pub fn parse_token(token: &str) -> Decimal {
    let token = token.trim();
    if !is_plain_decimal(token) {
        return Decimal::ZERO;
    }
    Decimal::from_str(token.strip_prefix('+').unwrap_or(token)).unwrap_or(Decimal::ZERO)
}

/// Optional sign, ASCII digits, at most one `.`, and at least one digit.
fn is_plain_decimal(token: &str) -> bool {
    let unsigned = token.strip_prefix(['-', '+']).unwrap_or(token);
    let mut digits = 0usize;
    let mut points = 0usize;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Parse all tokens, padding with trailing zeros up to two values.
#[must_use]
pub fn parse_numbers(tokens: &NumberStrings) -> ParsedNumbers {
    let mut values: Vec<Decimal> = tokens.values().iter().map(|t| parse_token(t)).collect();
    while values.len() < 2 {
        values.push(Decimal::ZERO);
    }
    ParsedNumbers::new(values)
}
