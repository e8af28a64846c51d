// Physical key matrix of the keypad and what each key does

use crate::input::{Digit, Input, Operator};

pub const ROWS: usize = 6;
pub const COLS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    F1,
    F2,
    F3,
    F4,
    Lock,
    Div,
    Mul,
    Sub,
    Add,
    Enter,
    Dot,
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
}

/// Add and Enter span two rows, 0 spans two columns
pub const KEYMAP: [[Key; COLS]; ROWS] = [
    [Key::F1, Key::F2, Key::F3, Key::F4],
    [Key::Lock, Key::Div, Key::Mul, Key::Sub],
    [Key::D7, Key::D8, Key::D9, Key::Add],
    [Key::D4, Key::D5, Key::D6, Key::Add],
    [Key::D1, Key::D2, Key::D3, Key::Enter],
    [Key::D0, Key::D0, Key::Dot, Key::Enter],
];

impl Key {
    pub fn at(row: usize, col: usize) -> Option<Key> {
        KEYMAP.get(row)?.get(col).copied()
    }

    /// The calculator action bound to this key, `None` for spare keys
    pub fn input(self) -> Option<Input> {
        let input = match self {
            Key::F1 => Input::AllClear,
            Key::F2 => Input::Negate,
            Key::F3 | Key::F4 => return None,
            Key::Lock => Input::Clear,
            Key::Div => Input::Operator(Operator::Divide),
            Key::Mul => Input::Operator(Operator::Multiply),
            Key::Sub => Input::Operator(Operator::Subtract),
            Key::Add => Input::Operator(Operator::Add),
            Key::Enter => Input::Equals,
            Key::Dot => Input::Decimal,
            Key::D0 => Input::Digit(Digit::new(0)?),
            Key::D1 => Input::Digit(Digit::new(1)?),
            Key::D2 => Input::Digit(Digit::new(2)?),
            Key::D3 => Input::Digit(Digit::new(3)?),
            Key::D4 => Input::Digit(Digit::new(4)?),
            Key::D5 => Input::Digit(Digit::new(5)?),
            Key::D6 => Input::Digit(Digit::new(6)?),
            Key::D7 => Input::Digit(Digit::new(7)?),
            Key::D8 => Input::Digit(Digit::new(8)?),
            Key::D9 => Input::Digit(Digit::new(9)?),
        };
        Some(input)
    }
}
