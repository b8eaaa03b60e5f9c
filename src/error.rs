use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortError {
    /// The value at `index` is below zero.
    NegativeValue { index: usize },

    /// The value at `index` needs more than `bit_width` bits.
    ValueTooWide { index: usize, bit_width: u32 },

    /// A fixed bit width of zero, or wider than the key type.
    InvalidBitWidth { requested: u32, max: u32 },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortError::NegativeValue { index } => {
                write!(f, "negative value at index {}", index)
            }
            SortError::ValueTooWide { index, bit_width } => {
                write!(
                    f,
                    "value at index {} does not fit in {} bits",
                    index, bit_width
                )
            }
            SortError::InvalidBitWidth { requested, max } => {
                write!(f, "invalid bit width {} (must be 1..={})", requested, max)
            }
        }
    }
}

impl std::error::Error for SortError {}
