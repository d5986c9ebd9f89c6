// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Substring queries answered with suffix and LCP arrays.

use std::ops::Range;

use crate::{
    alphabet,
    construct::construct,
    error::{self, ConstructError},
    lcp,
    skew::{self, PADDING},
};

/// Finds the longest substring that occurs at least twice in `text`.
///
/// Occurrences may overlap. Returns the range of one occurrence, or `None` if no symbol
/// repeats.
///
/// This operation is *O*(*n*).
///
/// # Errors
///
/// Returns an error if `text.len() > MAX_LEN`.
///
/// # Examples
///
/// ```
/// let text = b"banana";
/// let range = dc3::substrings::longest_repeated_substring(text)?.unwrap();
///
/// assert_eq!(&text[range], b"ana");
/// # Ok::<(), dc3::ConstructError>(())
/// ```
///
/// [`MAX_LEN`]: crate::MAX_LEN
pub fn longest_repeated_substring<T>(text: &[T]) -> Result<Option<Range<usize>>, ConstructError>
where
    T: Copy + Into<u32>,
{
    let construction = construct(text, true)?;
    let lcp = construction.lcp.unwrap_or_default();

    let best = lcp
        .iter()
        .enumerate()
        .filter(|(_, len)| **len > 0)
        .max_by(|(ka, a), (kb, b)| a.cmp(b).then(kb.cmp(ka)));

    Ok(best.map(|(k, &len)| {
        let start = construction.suffix_array[k] as usize;
        start..start + len as usize
    }))
}

/// Finds the longest common substring of `a` and `b`.
///
/// Returns the ranges of one occurrence in `a` and in `b`, or `None` if the strings share no
/// symbol.
///
/// The strings are joined around a separator that occurs nowhere else, so the common prefix
/// of two adjacent suffixes from different strings never runs across the boundary.
///
/// This operation is *O*(*m* + *n*).
///
/// # Errors
///
/// Returns an error if `a.len() + b.len() + 1 > MAX_LEN`.
///
/// # Examples
///
/// ```
/// let a = b"xabcdy";
/// let b = b"zzbcdzz";
/// let (in_a, in_b) = dc3::substrings::longest_common_factor(a, b)?.unwrap();
///
/// assert_eq!(&a[in_a], b"bcd");
/// assert_eq!(&b[in_b], b"bcd");
/// # Ok::<(), dc3::ConstructError>(())
/// ```
///
/// [`MAX_LEN`]: crate::MAX_LEN
pub fn longest_common_factor<T>(
    a: &[T],
    b: &[T],
) -> Result<Option<(Range<usize>, Range<usize>)>, ConstructError>
where
    T: Copy + Into<u32>,
{
    if a.is_empty() || b.is_empty() {
        return Ok(None);
    }

    let joined_len = a.len().saturating_add(b.len()).saturating_add(1);
    error::check_len(joined_len)?;

    // Codes start at 2: 1 is the separator and 0 the end-of-string sentinel
    let raw: Vec<u32> = a.iter().chain(b).map(|&x| x.into()).collect();
    let (codes, domain) = alphabet::compress(&raw, 2);
    let mut text = Vec::with_capacity(joined_len + PADDING);
    text.extend_from_slice(&codes[..a.len()]);
    text.push(1);
    text.extend_from_slice(&codes[a.len()..]);
    text.resize(joined_len + PADDING, 0);

    let suffix_array = skew::skew(&text, domain);
    let lcp = lcp::kasai(&text[..joined_len], &suffix_array);

    let boundary = a.len();
    let mut best: Option<(usize, usize, usize)> = None;
    for (k, &len) in lcp.iter().enumerate().skip(1) {
        let len = len as usize;
        if len == 0 || best.is_some_and(|(_, _, best_len)| best_len >= len) {
            continue;
        }

        let (row, col) = (suffix_array[k - 1] as usize, suffix_array[k] as usize);
        let (in_a, in_b) = match (row < boundary, col < boundary) {
            (true, false) => (row, col),
            (false, true) => (col, row),
            _ => continue,
        };
        best = Some((in_a, in_b - boundary - 1, len));
    }

    Ok(best.map(|(in_a, in_b, len)| (in_a..in_a + len, in_b..in_b + len)))
}

/// Counts the distinct non-empty substrings of `text`.
///
/// Every suffix contributes its prefixes that are not shared with the preceding suffix.
///
/// This operation is *O*(*n*).
///
/// # Errors
///
/// Returns an error if `text.len() > MAX_LEN`.
///
/// # Examples
///
/// ```
/// // a, b, n, an, ba, na, ana, ban, nan, anan, bana, nana, anana, banan, banana
/// assert_eq!(dc3::substrings::count_distinct_substrings(b"banana")?, 15);
/// # Ok::<(), dc3::ConstructError>(())
/// ```
///
/// [`MAX_LEN`]: crate::MAX_LEN
pub fn count_distinct_substrings<T>(text: &[T]) -> Result<u64, ConstructError>
where
    T: Copy + Into<u32>,
{
    let construction = construct(text, true)?;
    let lcp = construction.lcp.unwrap_or_default();

    let n = text.len() as u64;
    let shared: u64 = lcp.iter().map(|&len| u64::from(len)).sum();

    Ok(n * (n + 1) / 2 - shared)
}

/// A Burrows-Wheeler transformed string.
///
/// The transform is taken over the text followed by a unique end marker that sorts before
/// every symbol. The marker itself is not stored; `primary` records the row it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bwt<T> {
    /// The last column without the end marker
    pub last: Vec<T>,
    /// The row of the end marker in the last column
    pub primary: usize,
}

/// Computes the Burrows-Wheeler transform of `text`.
///
/// This operation is *O*(*n*).
///
/// # Errors
///
/// Returns an error if `text.len() > MAX_LEN`.
///
/// # Examples
///
/// ```
/// let bwt = dc3::substrings::bwt(b"banana")?;
///
/// assert_eq!(bwt.last, b"annbaa");
/// assert_eq!(bwt.primary, 4);
/// assert_eq!(dc3::substrings::inverse_bwt(&bwt), b"banana");
/// # Ok::<(), dc3::ConstructError>(())
/// ```
///
/// [`MAX_LEN`]: crate::MAX_LEN
pub fn bwt<T>(text: &[T]) -> Result<Bwt<T>, ConstructError>
where
    T: Copy + Into<u32>,
{
    let suffix_array = construct(text, false)?.suffix_array;

    let mut last = Vec::with_capacity(text.len());
    // The first row is the end marker alone, preceded by the last symbol
    last.extend(text.last().copied());
    let mut primary = 0;

    for (k, &suffix) in suffix_array.iter().enumerate() {
        match suffix.checked_sub(1) {
            Some(prev) => last.push(text[prev as usize]),
            None => primary = k + 1,
        }
    }

    Ok(Bwt { last, primary })
}

/// Reconstructs the text from its Burrows-Wheeler transform.
///
/// This operation is *O*(*n* log(*n*)).
///
/// # Panics
///
/// Panics if `bwt.primary > bwt.last.len()`.
#[must_use]
pub fn inverse_bwt<T>(bwt: &Bwt<T>) -> Vec<T>
where
    T: Copy + Ord,
{
    let n = bwt.last.len();
    assert!(bwt.primary <= n, "primary row {} out of range", bwt.primary);

    // The full last column, with `None` standing in for the end marker
    let column = |row: usize| match row.cmp(&bwt.primary) {
        std::cmp::Ordering::Less => Some(bwt.last[row]),
        std::cmp::Ordering::Equal => None,
        std::cmp::Ordering::Greater => Some(bwt.last[row - 1]),
    };

    // Stable sorting the last column yields the first column; equal symbols keep their order,
    // which is what makes the last-to-first mapping well defined
    let mut order: Vec<usize> = (0..=n).collect();
    order.sort_by_key(|&row| column(row));
    let mut last_to_first = vec![0; n + 1];
    for (first, &row) in order.iter().enumerate() {
        last_to_first[row] = first;
    }

    let mut text = Vec::with_capacity(n);
    let mut row = 0;
    while let Some(symbol) = column(row) {
        text.push(symbol);
        row = last_to_first[row];
    }
    text.reverse();

    debug_assert_eq!(text.len(), n, "transform does not describe a single text");
    text
}
