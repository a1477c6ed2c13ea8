//! Conversion between typed digits and `f64`.

use super::error::EngineError;
use super::state::NumberModel;

/// Fraction digits rendered when turning a number back into digits.
const FRACTION_DIGITS: usize = 20;

/// Smallest magnitude that would need exponential notation.
const EXPONENTIAL_THRESHOLD: f64 = 1e21;

/// Reads the typed digits as a decimal literal.
///
/// An untouched model is `0`, or `-0` once negated.
pub fn model_to_number(model: &NumberModel) -> f64 {
    if model.integer.is_empty() && model.fraction.is_empty() {
        return if model.negative { -0.0 } else { 0.0 };
    }

    let mut literal = String::with_capacity(model.integer.len() + model.fraction.len() + 4);
    if model.negative {
        literal.push('-');
    }
    push_digits(&mut literal, &model.integer);
    literal.push('.');
    push_digits(&mut literal, &model.fraction);

    // Only ASCII digits, one dot and an optional sign are ever written.
    literal.parse().unwrap_or_default()
}

fn push_digits(out: &mut String, digits: &[u8]) {
    if digits.is_empty() {
        out.push('0');
        return;
    }
    out.extend(digits.iter().map(|&digit| char::from(b'0' + digit)));
}

/// Splits a finite number into keypad digits.
///
/// Trailing fractional zeroes are dropped, so `dot` is set only when a
/// non-zero fraction remains.
pub fn number_to_model(value: f64) -> Result<NumberModel, EngineError> {
    if !value.is_finite() {
        return Err(EngineError::NonFinite { value });
    }
    if value.abs() >= EXPONENTIAL_THRESHOLD {
        return Err(EngineError::ExponentialRange { value });
    }

    let rendered = format!("{:.*}", FRACTION_DIGITS, value.abs());
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));

    let integer = to_digits(integer);
    let mut fraction = to_digits(fraction);
    let zeroes = count_trailing_zeroes(&fraction);
    fraction.truncate(fraction.len() - zeroes);

    Ok(NumberModel {
        integer,
        dot: !fraction.is_empty(),
        fraction,
        negative: value < 0.0,
    })
}

fn to_digits(text: &str) -> Vec<u8> {
    text.bytes().map(|b| b - b'0').collect()
}

pub fn count_trailing_zeroes(digits: &[u8]) -> usize {
    digits.iter().rev().take_while(|&&d| d == 0).count()
}
