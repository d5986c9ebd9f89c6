// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    alphabet,
    error::{self, ConstructError},
    lcp,
    skew::{self, PADDING},
};

/// The result of [`construct()`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    /// Starting offsets of the suffixes in lexicographic order
    pub suffix_array: Vec<u32>,
    /// Common prefix lengths of adjacent suffixes, if requested
    pub lcp: Option<Vec<u32>>,
}

/// Computes the suffix array of `text` and, if `want_lcp` is set, its LCP array.
///
/// Suffixes are ordered lexicographically by symbol value, with a suffix that is a proper
/// prefix of another sorting first. `lcp[0]` is always 0 and `lcp[k]` is the length of the
/// common prefix of the suffixes at `suffix_array[k - 1]` and `suffix_array[k]`.
///
/// This operation is *O*(*n*).
///
/// # Errors
///
/// Returns [`ConstructError::InputTooLarge`] if `text.len() > MAX_LEN`.
///
/// # Examples
///
/// ```
/// let construction = dc3::construct(b"banana", true)?;
///
/// assert_eq!(construction.suffix_array, [5, 3, 1, 0, 4, 2]);
/// assert_eq!(construction.lcp, Some(vec![0, 1, 3, 0, 0, 2]));
/// # Ok::<(), dc3::ConstructError>(())
/// ```
///
/// [`MAX_LEN`]: crate::MAX_LEN
pub fn construct<T>(text: &[T], want_lcp: bool) -> Result<Construction, ConstructError>
where
    T: Copy + Into<u32>,
{
    error::check_len(text.len())?;

    let (mut codes, domain) = alphabet::compress(text, 1);
    codes.resize(text.len() + PADDING, 0);

    let suffix_array = skew::skew(&codes, domain);
    // Codes preserve symbol equality, so the LCP can be computed on them directly
    let lcp = want_lcp.then(|| lcp::kasai(&codes[..text.len()], &suffix_array));

    Ok(Construction { suffix_array, lcp })
}

/// Computes the suffix array of `text`.
///
/// This operation is *O*(*n*).
///
/// # Errors
///
/// Returns [`ConstructError::InputTooLarge`] if `text.len() > MAX_LEN`.
///
/// # Examples
///
/// ```
/// let text: Vec<u32> = vec![7, 1_000_000, 7, 3];
///
/// assert_eq!(dc3::suffix_array(&text)?, [3, 2, 0, 1]);
/// # Ok::<(), dc3::ConstructError>(())
/// ```
///
/// [`MAX_LEN`]: crate::MAX_LEN
pub fn suffix_array<T>(text: &[T]) -> Result<Vec<u32>, ConstructError>
where
    T: Copy + Into<u32>,
{
    construct(text, false).map(|construction| construction.suffix_array)
}

/// Computes the LCP array of `text` given its suffix array.
///
/// This operation is *O*(*n*).
///
/// # Panics
///
/// Panics if `suffix_array` does not have the same length as `text`.
///
/// # Examples
///
/// ```
/// let text = b"aaaa";
/// let suffix_array = dc3::suffix_array(text)?;
///
/// assert_eq!(dc3::lcp_array(text, &suffix_array), [0, 1, 2, 3]);
/// # Ok::<(), dc3::ConstructError>(())
/// ```
#[must_use]
pub fn lcp_array<T: PartialEq>(text: &[T], suffix_array: &[u32]) -> Vec<u32> {
    assert_eq!(
        text.len(),
        suffix_array.len(),
        "suffix array length does not match text length",
    );

    lcp::kasai(text, suffix_array)
}
