#![cfg_attr(not(test), no_std)]

pub mod calculator;
pub mod entry;
pub mod error;
pub mod input;
pub mod keyboard;
pub mod render;

pub use calculator::{Calculator, PendingOp, State};
pub use entry::{Entry, Sign};
pub use error::Error;
pub use input::{Digit, HighPrecOp, Input, LowPrecOp, Operator};
pub use keyboard::{COLS, KEYMAP, Key, ROWS};
pub use render::{DisplayText, ERROR, MAX_DIGITS, MAX_MAGNITUDE, UNDEFINED, render, render_text};
