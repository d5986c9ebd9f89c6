// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Order-preserving alphabet compression.

/// Raw alphabets whose largest value is below this bound are always compressed with a flat
/// occurrence table, regardless of the input length.
const MIN_TABLE_SIZE: usize = 1 << 16;

/// Maps every symbol in `data` to a dense code, preserving order.
///
/// The smallest symbol that occurs gets code `addon`, the next one `addon + 1`, and so on, so
/// codes below `addon` stay free for sentinels. Returns the codes together with the domain
/// size, i.e. one more than the largest code that could be assigned. The domain size is
/// never 0.
pub(crate) fn compress<T>(data: &[T], addon: u32) -> (Vec<u32>, usize)
where
    T: Copy + Into<u32>,
{
    let Some(max) = data.iter().map(|&x| x.into()).max() else {
        return (Vec::new(), (addon as usize).max(1));
    };

    if (max as usize) < MIN_TABLE_SIZE.max(4 * data.len()) {
        compress_with_table(data, max as usize, addon)
    } else {
        compress_sparse(data, addon)
    }
}

fn compress_with_table<T>(data: &[T], max: usize, addon: u32) -> (Vec<u32>, usize)
where
    T: Copy + Into<u32>,
{
    // Pass 1: mark the values that occur
    let mut table = vec![false; max + 1];
    for &x in data {
        table[x.into() as usize] = true;
    }

    let mut codes = vec![0; max + 1];
    let mut next = addon;
    for (code, _) in codes.iter_mut().zip(&table).filter(|(_, seen)| **seen) {
        *code = next;
        next += 1;
    }

    // Pass 2: translate
    let compressed = data.iter().map(|&x| codes[x.into() as usize]).collect();

    (compressed, (next as usize).max(1))
}

// Large, sparse alphabets (e.g. 32-bit token ids) would make the occurrence table much
// bigger than the input, so the distinct values are sorted instead.
fn compress_sparse<T>(data: &[T], addon: u32) -> (Vec<u32>, usize)
where
    T: Copy + Into<u32>,
{
    let mut distinct: Vec<u32> = data.iter().map(|&x| x.into()).collect();
    distinct.sort_unstable();
    distinct.dedup();

    let compressed = data
        .iter()
        .map(|&x| {
            let (Ok(rank) | Err(rank)) = distinct.binary_search(&x.into());
            addon + rank as u32
        })
        .collect();

    (compressed, (addon as usize + distinct.len()).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(compress::<u8>(&[], 0), (vec![], 1));
        assert_eq!(compress::<u8>(&[], 1), (vec![], 1));
        assert_eq!(compress::<u8>(&[], 3), (vec![], 3));
    }

    #[test]
    fn single_symbol() {
        assert_eq!(compress(b"z", 1), (vec![1], 2));
    }

    #[test]
    fn dense_and_order_preserving() {
        let (codes, domain) = compress(b"banana", 1);

        assert_eq!(codes, [2, 1, 3, 1, 3, 1]);
        assert_eq!(domain, 4);
    }

    #[test]
    fn without_addon() {
        let (codes, domain) = compress(b"cab", 0);

        assert_eq!(codes, [2, 0, 1]);
        assert_eq!(domain, 3);
    }

    #[test]
    fn high_bytes_sort_after_low_bytes() {
        let (codes, _) = compress(&[0x80u8, 0x00, 0xff, 0x7f], 1);

        assert_eq!(codes, [3, 1, 4, 2]);
    }

    #[test]
    fn sparse_alphabet_matches_table() {
        let data = [u32::MAX, 7, 1 << 30, 7, 0, u32::MAX];
        let (codes, domain) = compress(&data, 1);

        assert_eq!(codes, [4, 2, 3, 2, 1, 4]);
        assert_eq!(domain, 5);
    }

    #[test]
    fn chars() {
        let data: Vec<char> = "žluťoučký".chars().collect();
        let (codes, domain) = compress(&data, 1);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(domain, sorted.len() + 1);
        for (a, ca) in data.iter().zip(&codes) {
            for (b, cb) in data.iter().zip(&codes) {
                assert_eq!(a.cmp(b), ca.cmp(cb), "order of {a} and {b} not preserved");
            }
        }
    }
}
