//! When a checked arithmetic operation or limb decoding goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::{result, Box, String, ToString};
use serde_core::{de, ser};

/// This type represents all possible errors that can occur when a checked
/// operation refuses to produce a value.
///
/// The reporting forms of the same operations (`Overflow<T>`) never fail;
/// this type is what their `into_result` and the `checked_*` methods turn a
/// raised flag into.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `limbkit::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Arithmetic` - a numeric edge condition such as division
    ///   by zero or subtraction underflow
    /// - `Category::Data` - input limbs or a serialized form that could not
    ///   be decoded
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::DivisionByZero | ErrorCode::Underflow | ErrorCode::Overflow => {
                Category::Arithmetic
            }
            ErrorCode::Message(_) | ErrorCode::InvalidLength(_, _) => Category::Data,
        }
    }

    /// Returns true if this error was caused by a numeric edge condition.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by input that could not be
    /// decoded into limbs.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    #[cold]
    pub(crate) fn arithmetic(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code }),
        }
    }
}

/// Categorizes the cause of a `limbkit::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a numeric edge condition.
    Arithmetic,

    /// The error was caused by input data that could not be decoded.
    Data,
}

struct ErrorImpl {
    code: ErrorCode,
}

/// This type describes all possible causes of a `limbkit::Error`.
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catchall for decoding error messages
    Message(Box<str>),

    /// Sequence with too many or too few limbs
    InvalidLength(usize, Box<str>),

    /// The divisor was zero.
    DivisionByZero,

    /// A subtraction would have produced a negative magnitude.
    Underflow,

    /// A result did not fit in its destination.
    Overflow,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(ref msg) => f.write_str(msg),
            ErrorCode::InvalidLength(len, exp) => {
                f.write_fmt(format_args!("invalid length {}, expected {}", len, exp))
            }
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::Underflow => f.write_str("subtraction underflow"),
            ErrorCode::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

impl serde_core::de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.err.code.to_string())
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }

    #[cold]
    fn invalid_length(len: usize, exp: &dyn de::Expected) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::InvalidLength(len, exp.to_string().into_boxed_str()),
            }),
        }
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

fn make_error(msg: String) -> Error {
    Error {
        err: Box::new(ErrorImpl {
            code: ErrorCode::Message(msg.into_boxed_str()),
        }),
    }
}
