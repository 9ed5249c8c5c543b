//! A partial value paired with an overflow flag.

use crate::error::{Error, ErrorCode, Result};

/// The result of an operation that reports, rather than traps, overflow.
///
/// When `overflow` is set the partial value is well defined but carries no
/// arithmetic meaning on its own; every operation documents what it leaves
/// there.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Overflow<T> {
    /// The wrapped or otherwise partial result.
    pub partial_value: T,
    /// True if the operation overflowed.
    pub overflow: bool,
}

impl<T> Overflow<T> {
    /// Pair a partial value with its overflow flag.
    #[inline]
    pub const fn new(partial_value: T, overflow: bool) -> Self {
        Overflow {
            partial_value,
            overflow,
        }
    }

    /// Split into the `(partial_value, overflow)` tuple.
    #[inline]
    pub fn into_parts(self) -> (T, bool) {
        (self.partial_value, self.overflow)
    }

    /// Transform the partial value, keeping the flag.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Overflow<U>
    where
        F: FnOnce(T) -> U,
    {
        Overflow::new(f(self.partial_value), self.overflow)
    }

    /// Return the value if it did not overflow.
    #[inline]
    pub fn checked(self) -> Option<T> {
        if self.overflow {
            None
        } else {
            Some(self.partial_value)
        }
    }

    /// Convert into a `Result`, reporting overflow as `code`.
    #[inline]
    pub fn into_result(self, code: ErrorCode) -> Result<T> {
        if self.overflow {
            Err(Error::arithmetic(code))
        } else {
            Ok(self.partial_value)
        }
    }
}

impl<T> From<(T, bool)> for Overflow<T> {
    #[inline]
    fn from((partial_value, overflow): (T, bool)) -> Self {
        Overflow::new(partial_value, overflow)
    }
}
