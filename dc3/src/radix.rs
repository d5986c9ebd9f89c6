// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Index partitioning and counting sort passes.

/// Returns the offsets `i < end` with `i % 3 != 0` in increasing order.
///
/// `end` may exceed the text length by one to include the dummy offset needed when the text
/// length is congruent to 1 modulo 3.
pub(crate) fn residues_12(end: usize) -> Vec<u32> {
    (0..end as u32).filter(|i| i % 3 != 0).collect()
}

/// Stably sorts `src` into `dst` by the symbol found `offset` positions after each entry.
///
/// Every key `text[src[i] + offset]` must be below `domain`. This operation is
/// *O*(`src.len()` + `domain`).
pub(crate) fn radix_pass(src: &[u32], dst: &mut [u32], text: &[u32], offset: usize, domain: usize) {
    debug_assert_eq!(src.len(), dst.len(), "source and destination lengths differ");

    let key = |pos: u32| text[pos as usize + offset] as usize;

    let mut bucket = vec![0u32; domain];
    for &pos in src {
        bucket[key(pos)] += 1;
    }

    // Turn the counts into bucket starts
    let mut sum = 0;
    for x in bucket.iter_mut() {
        let count = *x;
        *x = sum;
        sum += count;
    }

    for &pos in src {
        let slot = &mut bucket[key(pos)];
        dst[*slot as usize] = pos;
        *slot += 1;
    }
}
