//! Numeral encoding: every token is a number
//!
//! A token's numeral value is a signed rational in the lexicon's base,
//! derived from its digit characters, decimal markers, and sign flips.
//! Encoding is total: characters outside the alphabets are skipped, so any
//! token (including the empty one) has a value.

use crate::lexicon::Lexicon;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// A signed rational numeral
pub type Numeral = BigRational;

/// Encode a token into its numeral value. Pure and total.
///
/// Digits accumulate into the integer part until the first decimal marker,
/// then into the fractional part. Later decimal markers are no-ops. Every
/// sign character flips the sign, wherever it appears.
pub fn encode(lexicon: &Lexicon, token: &str) -> Numeral {
    let base = BigInt::from(lexicon.base());
    let mut whole = BigInt::zero();
    let mut numerator = BigInt::zero();
    let mut denominator = BigInt::one();
    let mut fractional = false;
    let mut flips = 0usize;

    for ch in token.chars() {
        if let Some(digit) = lexicon.digit_value(ch) {
            let digit = BigInt::from(digit);
            if fractional {
                numerator = numerator * &base + digit;
                denominator *= &base;
            } else {
                whole = whole * &base + digit;
            }
        } else if lexicon.is_decimal(ch) {
            fractional = true;
        } else if lexicon.is_sign(ch) {
            flips += 1;
        }
    }

    let mut value = BigRational::from_integer(whole) + BigRational::new(numerator, denominator);
    if flips % 2 == 1 {
        value = -value;
    }
    value
}

/// Render a numeral back into the lexicon's digit alphabet.
///
/// The integer part is written most-significant-digit-first; a fractional
/// part follows the first decimal character, up to 10 digits, stopping once
/// the remainder drops to base^-5 or below. Negative values carry the first
/// sign character at the end. Zero renders as the empty string, which
/// encodes back to zero.
pub fn render(lexicon: &Lexicon, value: &Numeral) -> String {
    let base = BigInt::from(lexicon.base());
    let magnitude = value.abs();
    let mut whole = magnitude.to_integer();

    let mut digits = Vec::new();
    while !whole.is_zero() {
        let (quotient, index) = whole.div_rem(&base);
        // index is in 0..base, so the digit lookup cannot miss
        if let Some(ch) = index.to_usize().and_then(|i| lexicon.digit(i)) {
            digits.push(ch);
        }
        whole = quotient;
    }
    let mut rendered: String = digits.into_iter().rev().collect();

    let mut fraction = magnitude.fract();
    if !fraction.is_zero() {
        let base_ratio = BigRational::from_integer(base.clone());
        let limit = BigRational::new(BigInt::one(), num_traits::pow(base, 5));
        let mut frac_chars = String::new();
        while fraction > limit && frac_chars.len() < 10 {
            let product = &fraction * &base_ratio;
            let index = product.to_integer();
            if let Some(ch) = index.to_usize().and_then(|i| lexicon.digit(i)) {
                frac_chars.push(ch);
            }
            fraction = product.fract();
        }
        if !frac_chars.is_empty() {
            rendered.push(lexicon.decimal_mark());
            rendered.push_str(&frac_chars);
        }
    }

    if value.is_negative() {
        rendered.push(lexicon.negative_mark());
    }
    rendered
}

/// Decimal rendering for the `calculate` statement: integers exactly,
/// everything else through floating point, with long division when the
/// value does not fit an `f64`.
pub fn display(value: &Numeral) -> String {
    if value.is_integer() {
        return value.to_integer().to_string();
    }
    match value.to_f64() {
        Some(float) if float.is_finite() => float.to_string(),
        _ => display_long(value),
    }
}

/// Decimal digits by long division, 16 fractional places at most
fn display_long(value: &Numeral) -> String {
    let ten = BigRational::from_integer(BigInt::from(10));
    let magnitude = value.abs();

    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }
    out.push_str(&magnitude.to_integer().to_string());
    out.push('.');

    let mut fraction = magnitude.fract();
    for _ in 0..16 {
        let product = &fraction * &ten;
        let digit = product.to_integer().to_u8().unwrap_or(0);
        out.push(char::from(b'0' + digit));
        fraction = product.fract();
        if fraction.is_zero() {
            break;
        }
    }
    out
}

/// Truncate toward zero, the rounding used for jump targets and
/// `left`/`right` lengths.
pub fn trunc(value: &Numeral) -> BigInt {
    value.to_integer()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Lexicon {
        Lexicon::english()
    }

    fn enc(token: &str) -> Numeral {
        encode(&english(), token)
    }

    #[test]
    fn test_reference_words() {
        // bozo reduces to the zero digit alone; ace to the one digit
        assert_eq!(enc("bozo"), Numeral::from_integer(0.into()));
        assert_eq!(enc("ace"), Numeral::from_integer(1.into()));
    }

    #[test]
    fn test_doubled_signs_cancel() {
        assert_eq!(enc("-'cd"), Numeral::from_integer(20.into()));
        assert_eq!(enc("cd-"), Numeral::from_integer((-20).into()));
    }

    #[test]
    fn test_decimal_marker_splits_digits() {
        // c.j = 1 + 6/18 = 4/3
        assert_eq!(enc("c.j"), BigRational::new(4.into(), 3.into()));
        // a second marker is a no-op: digits after it stay fractional
        assert_eq!(enc("c.j"), enc("c.j."));
    }

    #[test]
    fn test_trailing_decimal_contributes_nothing() {
        assert_eq!(enc("dc."), Numeral::from_integer(37.into()));
    }

    #[test]
    fn test_total_on_arbitrary_text() {
        assert_eq!(enc(""), Numeral::zero());
        assert_eq!(enc("aeiou!?"), Numeral::zero());
        assert_eq!(enc("\u{3042}c\u{1F600}"), Numeral::one());
    }

    #[test]
    fn test_long_tokens_do_not_overflow() {
        // 24 digit characters, far past what a machine word holds in base 18
        let token = "w".repeat(24);
        let value = enc(&token);
        assert!(value > Numeral::from_integer(i64::MAX.into()));
    }

    #[test]
    fn test_render_round_trips() {
        let lexicon = english();
        for token in ["", "c", "f", "dg", "cd-", "c.j", "f.m-"] {
            let value = encode(&lexicon, token);
            assert_eq!(render(&lexicon, &value), token, "round trip of {token:?}");
        }
    }

    #[test]
    fn test_render_known_values() {
        let lexicon = english();
        assert_eq!(render(&lexicon, &Numeral::from_integer(3.into())), "f");
        assert_eq!(render(&lexicon, &Numeral::from_integer(40.into())), "dg");
        assert_eq!(render(&lexicon, &BigRational::new((-7).into(), 2.into())), "f.m-");
        assert_eq!(render(&lexicon, &Numeral::zero()), "");
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(display(&Numeral::from_integer(3.into())), "3");
        assert_eq!(display(&Numeral::from_integer((-40).into())), "-40");
        assert_eq!(
            display(&BigRational::new(4.into(), 3.into())),
            "1.3333333333333333"
        );
    }

    #[test]
    fn test_display_stays_decimal_past_f64_range() {
        // 10^400 + 1/2 overflows f64 but must still print as a decimal
        let huge = num_traits::pow(BigInt::from(10), 400);
        let value = BigRational::new(huge * BigInt::from(2) + BigInt::from(1), 2.into());
        let expected = format!("1{}.5", "0".repeat(400));
        assert_eq!(display(&value), expected);
        assert_eq!(display(&-value), format!("-{expected}"));
    }

    #[test]
    fn test_trunc_is_toward_zero() {
        assert_eq!(trunc(&BigRational::new(7.into(), 2.into())), 3.into());
        assert_eq!(trunc(&BigRational::new((-7).into(), 2.into())), (-3).into());
    }
}
