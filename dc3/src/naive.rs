// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Slow reference implementations.
//!
//! These builders are straightforward enough to be obviously correct and exist to
//! cross-check the linear-time construction. They compare suffixes as slices, so the end of a
//! suffix sorts before every symbol, which is the same convention the fast builder uses.
//!
//! # Examples
//!
//! ```
//! let text = b"mississippi";
//!
//! assert_eq!(dc3::naive::suffix_array(text), dc3::suffix_array(text)?);
//! # Ok::<(), dc3::ConstructError>(())
//! ```

use std::cmp::Ordering;

/// Computes the suffix array of `text` by sorting its suffixes with slice comparisons.
///
/// This operation is *O*(*n*² log(*n*)) in the worst case.
///
/// # Panics
///
/// Panics if `text.len() > u32::MAX`.
#[must_use]
pub fn suffix_array<T: Ord>(text: &[T]) -> Vec<u32> {
    let n = u32::try_from(text.len()).expect("text too large for a u32 suffix array");
    let mut suffix_array: Vec<u32> = (0..n).collect();
    suffix_array.sort_unstable_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
    suffix_array
}

/// Computes the suffix array of `text` by prefix doubling.
///
/// After the round with step `k`, suffixes are ranked by their first `2k` symbols; ranking
/// stops as soon as all ranks are distinct. This operation is *O*(*n* log²(*n*)).
///
/// # Panics
///
/// Panics if `text.len() > u32::MAX`.
#[must_use]
pub fn suffix_array_doubling<T: Ord>(text: &[T]) -> Vec<u32> {
    let n = u32::try_from(text.len()).expect("text too large for a u32 suffix array");
    let n = n as usize;
    if n == 0 {
        return Vec::new();
    }

    let mut suffix_array: Vec<usize> = (0..n).collect();

    // Initial ranks are the positions of the first symbols in sorted order
    suffix_array.sort_by(|&a, &b| text[a].cmp(&text[b]));
    let mut rank = vec![0; n];
    for k in 1..n {
        let (a, b) = (suffix_array[k - 1], suffix_array[k]);
        rank[b] = rank[a] + usize::from(text[a] != text[b]);
    }

    let mut tmp = vec![0; n];
    let mut k = 1;
    while rank[suffix_array[n - 1]] < n - 1 {
        // Suffixes shorter than `k` get the smallest second key
        let key = |i: usize| (rank[i], rank.get(i + k).map_or(0, |&r| r + 1));
        suffix_array.sort_unstable_by_key(|&i| key(i));

        tmp[suffix_array[0]] = 0;
        for j in 1..n {
            let (a, b) = (suffix_array[j - 1], suffix_array[j]);
            tmp[b] = tmp[a] + usize::from(key(a) != key(b));
        }
        rank.copy_from_slice(&tmp);

        k *= 2;
    }

    suffix_array.into_iter().map(|i| i as u32).collect()
}

/// Computes the LCP array of `text` by comparing every pair of adjacent suffixes directly.
///
/// This operation is *O*(*n*²) in the worst case.
#[must_use]
pub fn lcp_array<T: PartialEq>(text: &[T], suffix_array: &[u32]) -> Vec<u32> {
    let mut lcp = vec![0; suffix_array.len()];
    for (k, pair) in suffix_array.windows(2).enumerate() {
        lcp[k + 1] = common_prefix(&text[pair[0] as usize..], &text[pair[1] as usize..]) as u32;
    }
    lcp
}

/// Returns the length of the longest common prefix of `a` and `b`.
pub(crate) fn common_prefix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Returns whether `suffix_array` lists every suffix of `text` exactly once in strictly
/// increasing order.
#[must_use]
pub fn is_suffix_array<T: Ord>(text: &[T], suffix_array: &[u32]) -> bool {
    if suffix_array.len() != text.len() {
        return false;
    }

    let mut seen = vec![false; text.len()];
    for &i in suffix_array {
        match seen.get_mut(i as usize) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }

    suffix_array.windows(2).all(|pair| {
        text[pair[0] as usize..].cmp(&text[pair[1] as usize..]) == Ordering::Less
    })
}
