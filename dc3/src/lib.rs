// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Linear-time suffix array construction.
//!
//! This crate builds suffix arrays with the DC3 (skew) algorithm and LCP arrays with Kasai's
//! algorithm, both in *O*(*n*) time. Texts are slices of any symbol type that converts into a
//! `u32`, e.g. bytes, chars or token ids, and need no terminating sentinel.
//!
//! # Examples
//!
//! Building a suffix array and searching it:
//!
//! ```
//! use dc3::SuffixArray;
//!
//! # fn main() -> Result<(), dc3::ConstructError> {
//! let text = b"abracadabra";
//! let sa = SuffixArray::with_lcp(text)?;
//!
//! assert_eq!(sa.as_slice(), [10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
//! assert_eq!(sa.lcp(), Some(&[0, 1, 4, 1, 1, 0, 3, 0, 0, 0, 2][..]));
//! assert_eq!(sa.occurrences(b"bra"), [8, 1]);
//! # Ok(())
//! # }
//! ```

mod alphabet;
mod construct;
mod error;
mod lcp;
pub mod naive;
mod radix;
mod skew;
pub mod substrings;
mod suffix_array;

pub use construct::{Construction, construct, lcp_array, suffix_array};
pub use error::{ConstructError, MAX_LEN};
pub use suffix_array::SuffixArray;
