//! Error kinds raised by the kernel.
//!
//! All failures are local and immediate: the kernel never retries, logs, or
//! swallows. The "operand not supported" signal of dynamic arithmetic is not
//! an error; see `operand::Operand::from_value`.

use thiserror::Error;

use crate::point::Point;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TwodError {
    /// Input cannot be interpreted as the expected value shape.
    #[error("unable to convert {value} to {target}")]
    Conversion { value: String, target: &'static str },

    /// Structured input lacks a required field.
    #[error("missing key {key:?}")]
    MissingKey { key: String },

    /// Sequence input too short, or component index outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A divisor component is zero.
    #[error("division by zero: {divisor}")]
    DivisionByZero { divisor: String },

    /// Strict orientation query on three colinear points.
    #[error("colinear points: {a}, {b}, {c}")]
    ColinearPoints { a: Point, b: Point, c: Point },
}

impl TwodError {
    #[inline]
    pub(crate) fn conversion(value: impl std::fmt::Debug, target: &'static str) -> Self {
        TwodError::Conversion {
            value: format!("{value:?}"),
            target,
        }
    }
}

pub type Result<T, E = TwodError> = std::result::Result<T, E>;
