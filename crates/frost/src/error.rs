//! Freeze-array error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur when appending to a freeze array.
///
/// A freeze array never grows past its construction-time capacity, so a
/// rejected append is an ordinary, recoverable condition rather than a
/// silent drop: callers that sized the array correctly never see these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FreezeError {
    /// The array is full — `len == capacity` and no growth path exists.
    Full {
        /// The array's capacity at the time of the rejected append.
        capacity: usize,
    },
    /// A bulk append was larger than the remaining free capacity.
    ///
    /// Bulk appends are all-or-nothing; nothing was written.
    WouldOverflow {
        /// Number of elements the caller tried to append.
        requested: usize,
        /// Free slots remaining at the time of the call.
        remaining: usize,
    },
}

impl fmt::Display for FreezeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full { capacity } => {
                write!(f, "freeze array is full: capacity {capacity}")
            }
            Self::WouldOverflow {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "bulk append of {requested} elements exceeds remaining capacity {remaining}"
                )
            }
        }
    }
}

impl Error for FreezeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_display_names_capacity() {
        let err = FreezeError::Full { capacity: 10 };
        assert_eq!(err.to_string(), "freeze array is full: capacity 10");
    }

    #[test]
    fn would_overflow_display_names_both_sizes() {
        let err = FreezeError::WouldOverflow {
            requested: 8,
            remaining: 3,
        };
        assert!(err.to_string().contains("8 elements"));
        assert!(err.to_string().contains("remaining capacity 3"));
    }
}
