// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use std::error::Error;

use dc3::{ConstructError, SuffixArray, naive};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_text(rng: &mut ChaCha8Rng, max_len: usize, alphabet: u32) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(0..alphabet) as u8).collect()
}

fn check<T>(text: &[T]) -> Result<(), Box<dyn Error>>
where
    T: Copy + Ord + Into<u32> + std::fmt::Debug,
{
    let construction = dc3::construct(text, true)?;
    let expected = naive::suffix_array(text);

    assert_eq!(construction.suffix_array, expected, "text = {text:?}");
    assert!(naive::is_suffix_array(text, &construction.suffix_array));
    assert_eq!(
        construction.lcp,
        Some(naive::lcp_array(text, &expected)),
        "text = {text:?}",
    );

    Ok(())
}

#[test]
fn scenarios() -> Result<(), Box<dyn Error>> {
    let banana = dc3::construct(b"banana", true)?;
    assert_eq!(banana.suffix_array, [5, 3, 1, 0, 4, 2]);
    assert_eq!(banana.lcp, Some(naive::lcp_array(b"banana", &[5, 3, 1, 0, 4, 2])));

    assert!(dc3::suffix_array(b"")?.is_empty());

    let single = dc3::construct(b"a", true)?;
    assert_eq!(single.suffix_array, [0]);
    assert_eq!(single.lcp, Some(vec![0]));

    let unary = dc3::construct(b"aaaa", true)?;
    assert_eq!(unary.suffix_array, [3, 2, 1, 0]);
    assert_eq!(unary.lcp, Some(vec![0, 1, 2, 3]));

    let text = b"abcabcabc";
    let suffix_array = dc3::suffix_array(text)?;
    let firsts: Vec<u8> = suffix_array.iter().map(|&i| text[i as usize]).collect();
    assert_eq!(firsts, b"aaabbbccc");
    assert_eq!(suffix_array, naive::suffix_array(text));

    Ok(())
}

#[test]
fn original_fixtures() -> Result<(), Box<dyn Error>> {
    let cases: [&[u8]; 12] = [
        b"mississippiZ",
        b"abracadabraZ",
        b"abcdefgh",
        b"ccca",
        b"cccacc#",
        b"cccabcc#",
        b"ABAACBAB#",
        b"393200212178308812",
        b"9300",
        b"aab",
        b"aaaaaaaaaaaaaaaaaaab",
        b"bbbbbbbbbbbbbbbbbbbbbbbbbbbbba",
    ];

    for text in cases {
        check(text)?;
    }

    Ok(())
}

#[test]
fn fuzz_against_naive() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..1200 {
        let alphabet = rng.gen_range(1..=256);
        let text = random_text(&mut rng, 500, alphabet);
        check(&text)?;
    }

    Ok(())
}

#[test]
fn fuzz_small_alphabets_deep_recursion() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..200 {
        let alphabet = rng.gen_range(1..=3);
        let text = random_text(&mut rng, 600, alphabet);
        check(&text)?;
    }

    Ok(())
}

#[test]
fn periodic_texts() -> Result<(), Box<dyn Error>> {
    for period in 1..8 {
        for len in [0, 1, 2, 3, 10, 99, 100, 101, 500] {
            let text: Vec<u8> = (0..len).map(|i| b'a' + (i % period) as u8).collect();
            check(&text)?;
        }
    }

    Ok(())
}

#[test]
fn wide_symbols() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);

    for _ in 0..100 {
        let len = rng.gen_range(0..300);
        let tokens: Vec<u32> = (0..len)
            .map(|_| [0, 17, 1 << 20, u32::MAX][rng.gen_range(0..4)])
            .collect();
        check(&tokens)?;
    }

    let chars: Vec<char> = "příliš žluťoučký kůň úpěl ďábelské ódy".chars().collect();
    check(&chars)?;

    Ok(())
}

#[test]
fn doubling_oracle_agrees() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..300 {
        let alphabet = rng.gen_range(1..=8);
        let text = random_text(&mut rng, 300, alphabet);
        assert_eq!(
            naive::suffix_array_doubling(&text),
            naive::suffix_array(&text),
            "text = {text:?}",
        );
    }
}

#[test]
fn deterministic() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let text = random_text(&mut rng, 1000, 4);

    assert_eq!(dc3::construct(&text, true)?, dc3::construct(&text, true)?);

    Ok(())
}

#[test]
fn search_finds_every_substring() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..50 {
        let text = random_text(&mut rng, 200, 3);
        let sa = SuffixArray::new(&text)?;

        for start in 0..text.len() {
            let end = (start + 4).min(text.len());
            let pattern = &text[start..end];

            let offset = sa.search(pattern).ok_or("pattern not found")?;
            assert_eq!(&text[offset..offset + pattern.len()], pattern);

            let expected = text.windows(pattern.len()).filter(|w| *w == pattern).count();
            assert_eq!(sa.occurrences(pattern).len(), expected);
        }
    }

    Ok(())
}

#[test]
fn threads_build_independently() {
    let texts: Vec<Vec<u8>> = (0..4u64)
        .map(|seed| random_text(&mut ChaCha8Rng::seed_from_u64(seed), 5000, 2))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| scope.spawn(move || dc3::suffix_array(text)))
            .collect();

        for (handle, text) in handles.into_iter().zip(&texts) {
            let suffix_array = handle.join().unwrap().unwrap();
            assert_eq!(suffix_array, naive::suffix_array(text));
        }
    });
}

#[test]
fn error_is_displayable() {
    let err: Box<dyn Error> = Box::new(ConstructError::InputTooLarge {
        len: dc3::MAX_LEN + 1,
        max: dc3::MAX_LEN,
    });

    assert!(err.to_string().starts_with("input too large"));
}
