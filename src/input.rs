// Typed vocabulary of everything a user can press

use crate::error::Error;

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(Error::InvalidDigit(ch))
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(Error::InvalidDigit(char::from(value)))
    }
}

/// Operators that bind tighter: multiply and divide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighPrecOp {
    Multiply,
    Divide,
}

impl HighPrecOp {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            HighPrecOp::Multiply => left * right,
            HighPrecOp::Divide => left / right,
        }
    }
}

/// Operators that bind looser: add and subtract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPrecOp {
    Add,
    Subtract,
}

impl LowPrecOp {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            LowPrecOp::Add => left + right,
            LowPrecOp::Subtract => left - right,
        }
    }
}

/// The four operator keys, before they are routed to their precedence tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl From<HighPrecOp> for Operator {
    fn from(op: HighPrecOp) -> Self {
        match op {
            HighPrecOp::Multiply => Operator::Multiply,
            HighPrecOp::Divide => Operator::Divide,
        }
    }
}

impl From<LowPrecOp> for Operator {
    fn from(op: LowPrecOp) -> Self {
        match op {
            LowPrecOp::Add => Operator::Add,
            LowPrecOp::Subtract => Operator::Subtract,
        }
    }
}

/// One user action. Every variant maps to exactly one calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    Digit(Digit),
    Decimal,
    Negate,
    Operator(Operator),
    Equals,
    /// Clear the current entry only
    Clear,
    /// Clear the entry and every pending operator
    AllClear,
}

impl TryFrom<char> for Input {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        let input = match ch {
            '0'..='9' => Input::Digit(Digit::try_from(ch)?),
            '.' => Input::Decimal,
            '+' => Input::Operator(Operator::Add),
            '-' => Input::Operator(Operator::Subtract),
            '*' => Input::Operator(Operator::Multiply),
            '/' => Input::Operator(Operator::Divide),
            // Enter doubles as equals
            '=' | '\n' | '\r' => Input::Equals,
            'C' => Input::Clear,
            'R' => Input::AllClear,
            'N' => Input::Negate,
            _ => return Err(Error::UnmappedKey(ch)),
        };
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_validated() {
        assert_eq!(Digit::try_from('7').map(Digit::value), Ok(7));
        assert_eq!(Digit::try_from(9u8).map(Digit::as_char), Ok('9'));
        assert_eq!(Digit::try_from('x'), Err(Error::InvalidDigit('x')));
        assert_eq!(Digit::new(10), None);
    }

    #[test]
    fn chars_map_to_inputs() {
        assert_eq!(Input::try_from('.'), Ok(Input::Decimal));
        assert_eq!(Input::try_from('\r'), Ok(Input::Equals));
        assert_eq!(Input::try_from('/'), Ok(Input::Operator(Operator::Divide)));
        assert_eq!(Input::try_from('?'), Err(Error::UnmappedKey('?')));
    }

    #[test]
    fn operators_apply_left_to_right() {
        assert_eq!(HighPrecOp::Divide.apply(6.0, 3.0), 2.0);
        assert_eq!(LowPrecOp::Subtract.apply(10.0, 4.0), 6.0);
        assert!(HighPrecOp::Divide.apply(1.0, 0.0).is_infinite());
    }
}
