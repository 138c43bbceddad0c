//! When constructing or combining numbers goes wrong.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Alias for a `Result` with the error type `scmjs::number::Error`.
pub type Result<T> = result::Result<T, Error>;

/// This type represents the errors raised by the numeric tower.
///
/// Literal construction only ever produces `InvalidLiteral` and
/// `ZeroDenominator`; the remaining variants come from arithmetic and the
/// derived procedures in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lexeme matches none of the numeric grammars.
    InvalidLiteral(String),

    /// A rational number was constructed with a zero denominator.
    ZeroDenominator,

    /// Exact division by zero.
    DivisionByZero,

    /// An integer-only procedure received a non-integer argument.
    NotAnInteger {
        /// Name of the procedure that rejected the argument.
        procedure: &'static str,
        /// Printed representation of the rejected argument.
        value: String,
    },

    /// A procedure defined on real numbers only received a complex number.
    NotReal {
        /// Name of the procedure that rejected the argument.
        procedure: &'static str,
        /// Printed representation of the rejected argument.
        value: String,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLiteral(lexeme) => write!(f, "invalid number `{}`", lexeme),
            Error::ZeroDenominator => f.write_str("rational with zero denominator"),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::NotAnInteger { procedure, value } => {
                write!(f, "{}: expected an integer, got {}", procedure, value)
            }
            Error::NotReal { procedure, value } => {
                write!(f, "{}: expected a real number, got {}", procedure, value)
            }
        }
    }
}

impl error::Error for Error {}
