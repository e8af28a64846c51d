// The number currently being typed

use crate::input::Digit;
use crate::render::{DisplayText, MAX_DIGITS};

const POWERS_OF_TEN: [f64; MAX_DIGITS + 1] = [
    1.0,
    10.0,
    100.0,
    1_000.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    100_000_000.0,
    1_000_000_000.0,
    10_000_000_000.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Digits, decimal point and sign of the entry in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Never empty, at most [`MAX_DIGITS`] long
    digits: heapless::String<MAX_DIGITS>,
    /// Number of whole digits once the point has been placed
    decimal_marker: Option<usize>,
    sign: Sign,
}

impl Entry {
    pub fn new() -> Self {
        let mut digits = heapless::String::new();
        digits.push('0').ok();

        Self {
            digits,
            decimal_marker: None,
            sign: Sign::Positive,
        }
    }

    pub fn digits(&self) -> &str {
        self.digits.as_str()
    }

    pub fn decimal_marker(&self) -> Option<usize> {
        self.decimal_marker
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Append a digit. The placeholder zero is replaced rather than kept and
    /// digits past the display width are dropped.
    pub fn push_digit(&mut self, digit: Digit) {
        if self.digits.as_str() == "0" && self.decimal_marker.is_none() {
            self.digits.clear();
        }

        // full buffer: the push is refused and the digit discarded
        self.digits.push(digit.as_char()).ok();
    }

    /// Place the decimal point after the digits typed so far. Only the first
    /// call has an effect.
    pub fn place_decimal(&mut self) {
        if self.decimal_marker.is_none() {
            self.decimal_marker = Some(self.digits.len());
        }
    }

    pub fn negate(&mut self) {
        self.sign = self.sign.flip();
    }

    /// The entry as typed, without going through the renderer
    pub fn echo(&self) -> DisplayText {
        let mut text = DisplayText::new();
        if self.sign == Sign::Negative {
            text.push('-').ok();
        }

        match self.decimal_marker {
            Some(whole) => {
                text.push_str(&self.digits[..whole]).ok();
                text.push('.').ok();
                text.push_str(&self.digits[whole..]).ok();
            }
            None => {
                text.push_str(&self.digits).ok();
            }
        }
        text
    }

    /// Numeric value of the echo string, correctly rounded
    pub fn value(&self) -> f64 {
        let mantissa = self
            .digits
            .bytes()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
        let fraction_len = self.decimal_marker.map_or(0, |whole| self.digits.len() - whole);

        // both operands are exact in f64, so the quotient is correctly rounded
        let magnitude = mantissa as f64 / POWERS_OF_TEN[fraction_len];
        match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}
