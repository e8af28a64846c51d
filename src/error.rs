/// Contract violations raised at the edges of the calculator.
///
/// Calculation outcomes such as division by zero are never errors, they are
/// shown as `"Undefined"` or `"Error"` on the display instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The renderer was handed text that is not a number
    #[error("render: input was not a number")]
    InvalidInput,
    #[error("not a decimal digit: {0:?}")]
    InvalidDigit(char),
    #[error("no calculator key bound to {0:?}")]
    UnmappedKey(char),
}

pub type Result<T> = core::result::Result<T, Error>;
