// Calculator engine: digit entry plus two tiers of deferred operators
//
// Every public operation is an event for the state machine and returns the
// text the display should show afterwards.

use crate::entry::Entry;
use crate::input::{Digit, HighPrecOp, Input, LowPrecOp, Operator};
use crate::render::{DisplayText, render, text};

/// An operator waiting for its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingOp<O> {
    pub operator: O,
    pub left: f64,
}

impl PendingOp<HighPrecOp> {
    pub fn apply(self, right: f64) -> f64 {
        self.operator.apply(self.left, right)
    }
}

impl PendingOp<LowPrecOp> {
    pub fn apply(self, right: f64) -> f64 {
        self.operator.apply(self.left, right)
    }
}

/// What the display is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    /// The user is typing a number
    Entering(Entry),
    /// A computed value, shown right after an operator or equals
    ShowingResult(f64),
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::Entering(_) => "Entering",
            State::ShowingResult(_) => "ShowingResult",
        }
    }
}

/// Calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    state: State,
    /// Pending multiply or divide
    high_prec: Option<PendingOp<HighPrecOp>>,
    /// Pending add or subtract
    low_prec: Option<PendingOp<LowPrecOp>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            state: State::Entering(Entry::new()),
            high_prec: None,
            low_prec: None,
        }
    }

    /// Dispatch one user action to its operation
    pub fn input(&mut self, input: Input) -> DisplayText {
        log::trace!("input {input:?} in state {}", self.state.name());

        match input {
            Input::Digit(digit) => self.add_digit(digit),
            Input::Decimal => self.place_decimal(),
            Input::Negate => self.negate(),
            Input::Operator(Operator::Add) => self.low_prec_op(LowPrecOp::Add),
            Input::Operator(Operator::Subtract) => self.low_prec_op(LowPrecOp::Subtract),
            Input::Operator(Operator::Multiply) => self.high_prec_op(HighPrecOp::Multiply),
            Input::Operator(Operator::Divide) => self.high_prec_op(HighPrecOp::Divide),
            Input::Equals => self.solve(),
            Input::Clear => self.reset_current(),
            Input::AllClear => self.reset_all(),
        }
    }

    /// Forget the entry and every pending operator
    pub fn reset_all(&mut self) -> DisplayText {
        self.high_prec = None;
        self.low_prec = None;
        self.reset_current()
    }

    /// Forget the entry only, pending operators survive
    pub fn reset_current(&mut self) -> DisplayText {
        self.state = State::Entering(Entry::new());
        text("0")
    }

    pub fn add_digit(&mut self, digit: Digit) -> DisplayText {
        self.edit_entry(|entry| entry.push_digit(digit))
    }

    /// Flip the sign of the shown result, or of the entry being typed.
    /// Operands already captured by pending operators keep their sign.
    pub fn negate(&mut self) -> DisplayText {
        match &mut self.state {
            State::ShowingResult(value) => {
                *value = -*value;
                render(*value)
            }
            State::Entering(entry) => {
                entry.negate();
                entry.echo()
            }
        }
    }

    /// Place the decimal point; ignored once the entry already has one
    pub fn place_decimal(&mut self) -> DisplayText {
        self.edit_entry(Entry::place_decimal)
    }

    /// Multiply or divide. A pending multiply or divide is applied first so
    /// that `2 * 3 *` shows 6.
    pub fn high_prec_op(&mut self, op: HighPrecOp) -> DisplayText {
        let mut value = self.value();
        if let Some(pending) = self.high_prec {
            value = pending.apply(value);
        }

        log::debug!("pending {op:?} with left operand {value}");
        self.high_prec = Some(PendingOp { operator: op, left: value });
        self.show(value)
    }

    /// Add or subtract. Any pending multiply or divide is collapsed first,
    /// then a pending add or subtract.
    pub fn low_prec_op(&mut self, op: LowPrecOp) -> DisplayText {
        let mut value = self.value();
        if let Some(pending) = self.high_prec.take() {
            value = pending.apply(value);
        }
        if let Some(pending) = self.low_prec {
            value = pending.apply(value);
        }

        log::debug!("pending {op:?} with left operand {value}");
        self.low_prec = Some(PendingOp { operator: op, left: value });
        self.show(value)
    }

    /// Resolve every pending operator and show the result
    pub fn solve(&mut self) -> DisplayText {
        let mut value = self.value();
        if let Some(pending) = self.high_prec {
            value = pending.apply(value);
        }
        if let Some(pending) = self.low_prec {
            value = pending.apply(value);
        }

        log::debug!("solved: {value}");
        self.reset_all();
        self.show(value)
    }

    /// The text currently on the display
    pub fn display(&self) -> DisplayText {
        match &self.state {
            State::Entering(entry) => entry.echo(),
            State::ShowingResult(value) => render(*value),
        }
    }

    /// The value an operator would take as its operand right now
    pub fn value(&self) -> f64 {
        match &self.state {
            State::Entering(entry) => entry.value(),
            State::ShowingResult(value) => *value,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn pending_high(&self) -> Option<&PendingOp<HighPrecOp>> {
        self.high_prec.as_ref()
    }

    pub fn pending_low(&self) -> Option<&PendingOp<LowPrecOp>> {
        self.low_prec.as_ref()
    }

    /// The operator that will consume the next operand, for an annunciator
    pub fn pending_operator(&self) -> Option<Operator> {
        self.high_prec
            .map(|pending| pending.operator.into())
            .or_else(|| self.low_prec.map(|pending| pending.operator.into()))
    }

    /// Apply an edit to the entry being typed, starting a fresh one if a
    /// result is shown
    fn edit_entry(&mut self, edit: impl FnOnce(&mut Entry)) -> DisplayText {
        let mut entry = match &self.state {
            State::Entering(entry) => entry.clone(),
            State::ShowingResult(_) => Entry::new(),
        };

        edit(&mut entry);
        let echo = entry.echo();
        self.state = State::Entering(entry);
        echo
    }

    fn show(&mut self, value: f64) -> DisplayText {
        self.state = State::ShowingResult(value);
        render(value)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
