// Canonical fixed-point rendering for the 10 digit display

use core::fmt::Write;

use crate::error::{Error, Result};

/// Digits the display can show, sign and decimal point excluded
pub const MAX_DIGITS: usize = 10;

/// Largest magnitude that still fits the display
pub const MAX_MAGNITUDE: f64 = 9_999_999_999.0;

/// Shown for results that are not finite
pub const UNDEFINED: &str = "Undefined";

/// Shown for results too large for the display
pub const ERROR: &str = "Error";

const TEN_DIGIT_MIN_MAGNITUDE: f64 = 1_000_000_000.0;
const TEN_DIGIT_MAX_SCALED: u64 = 9_999_999_999;

/// Text written to the display. Worst case is a sign, ten digits and a point.
pub type DisplayText = heapless::String<16>;

pub(crate) fn text(s: &str) -> DisplayText {
    let mut text = DisplayText::new();
    text.push_str(s).ok();
    text
}

/// Render a value the way the display shows it.
///
/// Never switches to scientific notation, never shows more than
/// [`MAX_DIGITS`] digits, keeps a leading zero below one and drops a trailing
/// point or trailing fractional zeros. Values that need more digits than
/// available are rounded half up on the magnitude.
pub fn render(value: f64) -> DisplayText {
    if !value.is_finite() {
        return text(UNDEFINED);
    }

    // work with the magnitude only, the sign is re-applied at the end
    let negative = value.is_sign_negative();
    let mut num = if negative { -value } else { value };

    if num > MAX_MAGNITUDE {
        return text(ERROR);
    }

    // scale so that rounding happens on the last displayable digit
    let mut dot_pos = MAX_DIGITS;
    while num > 0.0 && num < TEN_DIGIT_MIN_MAGNITUDE && dot_pos > 1 {
        num *= 10.0;
        dot_pos -= 1;
    }

    let mut scaled = round_half_up(num);
    if scaled == 0 {
        return text("0");
    }

    // rounding carried into an eleventh digit: give up one fractional place
    if scaled > TEN_DIGIT_MAX_SCALED && dot_pos < MAX_DIGITS {
        scaled /= 10;
        dot_pos += 1;
    }

    let mut digits = heapless::String::<MAX_DIGITS>::new();
    write!(&mut digits, "{scaled:010}").ok();

    let whole = &digits[..dot_pos];
    let fraction = digits[dot_pos..].trim_end_matches('0');

    let mut out = DisplayText::new();
    if negative {
        out.push('-').ok();
    }
    out.push_str(whole).ok();
    if !fraction.is_empty() {
        out.push('.').ok();
        out.push_str(fraction).ok();
    }
    out
}

/// Render a number given as text.
///
/// Fails with [`Error::InvalidInput`] when the text is not a number at all.
/// `NaN` and `inf` are numbers and render as [`UNDEFINED`].
pub fn render_text(input: &str) -> Result<DisplayText> {
    input
        .trim()
        .parse::<f64>()
        .map(render)
        .map_err(|_| {
            log::error!("render: {input:?} is not a number");
            Error::InvalidInput
        })
}

/// Round a non-negative value below 2^52 to the nearest integer, ties up.
fn round_half_up(num: f64) -> u64 {
    let whole = num as u64;
    if num - whole as f64 >= 0.5 {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_ties_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(333333333.3333), 333333333);
        assert_eq!(round_half_up(9999999999.6), 10000000000);
    }

    #[test]
    fn carry_keeps_leading_digit() {
        assert_eq!(render(999999999.96).as_str(), "1000000000");
        assert_eq!(render(-999999999.96).as_str(), "-1000000000");
        assert_eq!(render(0.99999999996).as_str(), "1");
    }

    #[test]
    fn tiny_values_collapse_to_unsigned_zero() {
        assert_eq!(render(1e-12).as_str(), "0");
        assert_eq!(render(-1e-12).as_str(), "0");
        assert_eq!(render(-0.0).as_str(), "0");
    }

    #[test]
    fn smallest_visible_fraction() {
        assert_eq!(render(0.000000001).as_str(), "0.000000001");
        assert_eq!(render(-0.05).as_str(), "-0.05");
    }

    #[test]
    fn text_input_is_checked() {
        assert_eq!(render_text("12.50").unwrap().as_str(), "12.5");
        assert_eq!(render_text("NaN").unwrap().as_str(), UNDEFINED);
        assert_eq!(render_text("twelve"), Err(Error::InvalidInput));
        assert_eq!(render_text(""), Err(Error::InvalidInput));
    }
}
