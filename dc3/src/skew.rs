// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::radix::{radix_pass, residues_12};

// This algorithm casts u32s to usizes for the purpose of indexing. Because of these casts, any
// target where the size of a usize is less than the size of a u32 will produce unexpected (albeit
// not undefined) behavior. To prevent this, cause a compiler error on such targets.
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("Target pointer width must be at least 32 bits");

/// The number of sentinels that must follow the text
pub(crate) const PADDING: usize = 3;

/// The deepest recursion level allowed.
///
/// Every level shrinks the problem to at most 2/3 of its size, so inputs of up to `u32::MAX`
/// symbols need fewer than 55 levels.
const MAX_DEPTH: usize = 64;

/// Computes the suffix array of `text` using the DC3 (skew) algorithm.
///
/// The algorithm is implemented as described in the article Simple Linear Work Suffix Array
/// Construction by Juha Kärkkäinen and Peter Sanders. It runs in *O*(*n*) time.
///
/// `text` must end with [`PADDING`] zeros which are not part of the text itself, and every
/// other element must lie in `1..domain`. A zero therefore acts as an end-of-string marker
/// that compares less than every real symbol.
///
/// # Panics
///
/// Panics if the recursion gets deeper than the problem size permits, which indicates a bug in
/// the construction rather than a bad input.
pub(crate) fn skew(text: &[u32], domain: usize) -> Vec<u32> {
    skew_level(text, domain, 0)
}

fn skew_level(text: &[u32], domain: usize, depth: usize) -> Vec<u32> {
    assert!(depth <= MAX_DEPTH, "recursion depth {depth} exceeds {MAX_DEPTH}");
    debug_assert!(text.len() >= PADDING, "text is missing its sentinels");
    debug_assert!(domain >= 1, "empty domain");
    debug_assert!(
        text[text.len() - PADDING..].iter().all(|&c| c == 0),
        "text does not end with sentinels",
    );

    let n = text.len() - PADDING;
    if n <= 1 {
        return (0..n as u32).collect();
    }

    let n0 = n.div_ceil(3);
    let n1 = (n + 1) / 3;
    let n2 = n / 3;
    let n02 = n0 + n2;
    // 1 if a dummy offset at `n` completes the last S0 suffix's successor, 0 otherwise
    let dummy = n0 - n1;

    // Sort the S12 offsets by their leading triples
    let mut s12 = residues_12(n + dummy);
    debug_assert_eq!(s12.len(), n02, "S12 has the wrong size");
    let mut sa12 = vec![0; n02];
    radix_pass(&s12, &mut sa12, text, 2, domain);
    radix_pass(&sa12, &mut s12, text, 1, domain);
    radix_pass(&s12, &mut sa12, text, 0, domain);

    let (mut reduced, changes) = name_triples(text, &sa12, n0);

    // `sa12` becomes the suffix array of the reduced string and `reduced` its inverse, with
    // ranks starting at 1 so that 0 keeps meaning "past the end".
    if changes < n02 {
        sa12 = skew_level(&reduced, changes + 1, depth + 1);
        for (rank, &j) in sa12.iter().enumerate() {
            reduced[j as usize] = rank as u32 + 1;
        }
    } else {
        for (j, &name) in reduced[..n02].iter().enumerate() {
            sa12[name as usize - 1] = j as u32;
        }
    }

    let sa0 = sort_s0(text, &sa12, n0, domain);

    merge(text, &sa0, &sa12, &reduced, n, n0, dummy)
}

/// Labels the sorted S12 triples and lays the labels out as the reduced string.
///
/// Labels start at 1. The label of offset `p` goes to `p / 3` if `p % 3 == 1` and to
/// `p / 3 + n0` otherwise, so the mod 1 suffixes precede the mod 2 suffixes in the reduced
/// string. Returns the reduced string, padded with sentinels, and the number of distinct
/// triples.
fn name_triples(text: &[u32], sa12: &[u32], n0: usize) -> (Vec<u32>, usize) {
    let triple = |p: usize| [text[p], text[p + 1], text[p + 2]];

    let mut reduced = vec![0; sa12.len() + PADDING];
    let mut name = 0;
    let mut last = None;

    for &p in sa12 {
        let p = p as usize;
        let current = triple(p);
        if last != Some(current) {
            name += 1;
            last = Some(current);
        }
        if p % 3 == 1 {
            reduced[p / 3] = name;
        } else {
            reduced[p / 3 + n0] = name;
        }
    }

    (reduced, name as usize)
}

/// Sorts the S0 offsets by their first symbol and the rank of the suffix that follows.
///
/// Scanning `sa12` in order and keeping the mod 1 entries yields every `i + 1` with `i` in S0
/// sorted by rank, so one stable pass on the first symbol finishes the job.
fn sort_s0(text: &[u32], sa12: &[u32], n0: usize, domain: usize) -> Vec<u32> {
    let s0: Vec<u32> = sa12
        .iter()
        .filter(|&&j| (j as usize) < n0)
        .map(|&j| 3 * j)
        .collect();
    debug_assert_eq!(s0.len(), n0, "S0 has the wrong size");

    let mut sa0 = vec![0; n0];
    radix_pass(&s0, &mut sa0, text, 0, domain);
    sa0
}

/// Merges the sorted S0 and S12 offsets into the final suffix array.
///
/// `ranks` maps reduced indices to 1-based S12 ranks, with trailing zeros for positions past
/// the end of the text.
fn merge(
    text: &[u32],
    sa0: &[u32],
    sa12: &[u32],
    ranks: &[u32],
    n: usize,
    n0: usize,
    dummy: usize,
) -> Vec<u32> {
    let offset_of = |j: usize| if j < n0 { 3 * j + 1 } else { 3 * (j - n0) + 2 };

    // Whether the S12 suffix at reduced index `j` sorts before the S0 suffix at `i`.
    //
    // Each side is reduced to a short tuple whose last element is the rank of a suffix in the
    // same residue class on both sides, so the tuples compare exactly like the suffixes.
    let s12_first = |j: usize, i: usize| {
        let p = offset_of(j);
        if j < n0 {
            (text[p], ranks[j + n0]) <= (text[i], ranks[i / 3])
        } else {
            (text[p], text[p + 1], ranks[j - n0 + 1])
                <= (text[i], text[i + 1], ranks[i / 3 + n0])
        }
    };

    let mut suffix_array = Vec::with_capacity(n);
    // The dummy triple is all sentinels, so it always sorts first
    let mut rest12 = &sa12[dummy..];
    let mut rest0 = sa0;

    while let (Some(&j), Some(&i)) = (rest12.first(), rest0.first()) {
        if s12_first(j as usize, i as usize) {
            suffix_array.push(offset_of(j as usize) as u32);
            rest12 = &rest12[1..];
        } else {
            suffix_array.push(i);
            rest0 = &rest0[1..];
        }
    }
    suffix_array.extend(rest12.iter().map(|&j| offset_of(j as usize) as u32));
    suffix_array.extend_from_slice(rest0);

    debug_assert_eq!(suffix_array.len(), n, "merge lost or duplicated suffixes");
    suffix_array
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pads `text` with sentinels after shifting every symbol up by one.
    fn padded(text: &[u32]) -> Vec<u32> {
        text.iter()
            .map(|&c| c + 1)
            .chain([0; PADDING])
            .collect()
    }

    fn naive(text: &[u32]) -> Vec<u32> {
        let mut suffix_array: Vec<u32> = (0..text.len() as u32).collect();
        suffix_array.sort_by_key(|&i| &text[i as usize..]);
        suffix_array
    }

    #[test]
    fn empty_text() {
        assert!(skew(&[0; PADDING], 1).is_empty());
    }

    #[test]
    fn single_symbol() {
        assert_eq!(skew(&padded(&[5]), 7), [0]);
    }

    #[test]
    fn two_symbols() {
        assert_eq!(skew(&padded(&[1, 0]), 3), [1, 0]);
        assert_eq!(skew(&padded(&[0, 1]), 3), [0, 1]);
        assert_eq!(skew(&padded(&[0, 0]), 3), [1, 0]);
    }

    #[test]
    fn banana() {
        // b = 1, a = 0, n = 2
        let text = [1, 0, 2, 0, 2, 0];

        assert_eq!(skew(&padded(&text), 4), [5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn recursion_on_repeats() {
        // Every S12 triple of a unary text is equal except at the end, forcing recursion
        // at almost every level
        for n in 0..100 {
            let text = vec![0; n];
            let expected: Vec<u32> = (0..n as u32).rev().collect();

            assert_eq!(skew(&padded(&text), 2), expected, "n = {n}");
        }
    }

    #[test]
    fn all_residues_against_naive() {
        let base = [2, 0, 1, 0, 2, 2, 1, 0, 0, 1, 2, 0, 1, 0, 2, 2, 1, 0];
        for n in 0..=base.len() {
            let text = &base[..n];

            assert_eq!(skew(&padded(text), 4), naive(text), "n = {n}");
        }
    }

    #[test]
    fn name_triples_lays_out_mod_1_first() {
        // "abcab" + sentinels, n0 = 2, S12 sorted as in radix::tests
        let text = [1, 2, 3, 1, 2, 0, 0, 0];
        let (reduced, changes) = name_triples(&text, &[4, 1, 2], 2);

        // 1 -> index 0, 4 -> index 1, 2 -> index 2
        assert_eq!(reduced, [2, 1, 3, 0, 0, 0]);
        assert_eq!(changes, 3);
    }

    #[test]
    fn name_triples_reuses_names() {
        // n = 7, so S12 includes the dummy offset 7
        let text = [1, 1, 1, 1, 1, 1, 1, 0, 0, 0];
        // (0,0,0) at 7 < (1,1,0) at 5 < (1,1,1) at 1, 2 and 4
        let (reduced, changes) = name_triples(&text, &[7, 5, 1, 2, 4], 3);

        assert_eq!(changes, 3);
        assert_eq!(reduced, [3, 3, 1, 3, 2, 0, 0, 0]);
    }
}
