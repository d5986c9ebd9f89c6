// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// The largest input length accepted by the construction functions.
///
/// Offsets are stored as `u32`, and the construction appends three sentinels to its working
/// copy of the input, so the padded length must still fit in a `u32`.
pub const MAX_LEN: usize = u32::MAX as usize - 3;

/// An error indicating that a suffix array could not be constructed.
///
/// # Examples
///
/// ```
/// use dc3::{ConstructError, MAX_LEN};
///
/// let err = ConstructError::InputTooLarge { len: MAX_LEN + 1, max: MAX_LEN };
/// assert!(err.to_string().contains("too large"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// The input holds more symbols than can be indexed
    InputTooLarge {
        /// Length of the rejected input
        len: usize,
        /// Largest accepted length
        max: usize,
    },
}

impl Display for ConstructError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ConstructError::InputTooLarge { len, max } => {
                write!(f, "input too large: {len} symbols, at most {max} are supported")
            }
        }
    }
}

impl Error for ConstructError {}

/// Rejects lengths that do not fit the index type.
pub(crate) fn check_len(len: usize) -> Result<(), ConstructError> {
    if len > MAX_LEN {
        Err(ConstructError::InputTooLarge { len, max: MAX_LEN })
    } else {
        Ok(())
    }
}
