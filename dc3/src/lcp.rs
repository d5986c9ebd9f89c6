// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Computes the inverse of `suffix_array`, i.e. the rank of every suffix.
pub(crate) fn inverse(suffix_array: &[u32]) -> Vec<u32> {
    let mut rank = vec![0; suffix_array.len()];
    for (k, &i) in suffix_array.iter().enumerate() {
        rank[i as usize] = k as u32;
    }
    rank
}

/// Computes the LCP array of `text` from its suffix array using Kasai's algorithm.
///
/// Suffixes are visited in text order rather than suffix array order. Removing the first
/// symbol of a suffix shortens its common prefix with its predecessor by at most one, so the
/// match length carries over between iterations and the whole pass is *O*(*n*).
pub(crate) fn kasai<T: PartialEq>(text: &[T], suffix_array: &[u32]) -> Vec<u32> {
    debug_assert_eq!(text.len(), suffix_array.len(), "suffix array does not match text");

    let n = text.len();
    let rank = inverse(suffix_array);
    let mut lcp = vec![0; n];
    let mut matches = 0;

    for (i, &r) in rank.iter().enumerate() {
        if r == 0 {
            // The smallest suffix has no predecessor
            matches = 0;
            continue;
        }

        let prev = suffix_array[r as usize - 1] as usize;
        while i + matches < n && prev + matches < n && text[i + matches] == text[prev + matches] {
            matches += 1;
        }
        lcp[r as usize] = matches as u32;
        matches = matches.saturating_sub(1);
    }

    lcp
}
