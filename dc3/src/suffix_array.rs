// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::cmp::Ordering;

use crate::{construct, error::ConstructError, lcp};

/// A suffix array for a string of symbols.
///
/// The suffix array borrows the text it was built for, so it can answer substring queries
/// without copying the text.
#[derive(Debug, Clone)]
pub struct SuffixArray<'a, T = u8> {
    text: &'a [T],
    inner: Vec<u32>,
    lcp: Option<Vec<u32>>,
}

impl<'a, T> SuffixArray<'a, T>
where
    T: Copy + Into<u32>,
{
    /// Creates a new `SuffixArray` for `text`.
    ///
    /// Unlike many suffix array implementations, `text` needs no terminating sentinel: the
    /// end of the text already sorts before every symbol.
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
    /// use dc3::SuffixArray;
    ///
    /// let text = b"Hello, world!";
    /// let sa = SuffixArray::new(text)?;
    /// # Ok::<(), dc3::ConstructError>(())
    /// ```
    ///
    /// [`MAX_LEN`]: crate::MAX_LEN
    pub fn new(text: &'a [T]) -> Result<Self, ConstructError> {
        Self::build(text, false)
    }

    /// Creates a new `SuffixArray` for `text` that also holds the LCP array.
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
    /// use dc3::SuffixArray;
    ///
    /// let sa = SuffixArray::with_lcp(b"banana")?;
    /// assert_eq!(sa.lcp(), Some(&[0, 1, 3, 0, 0, 2][..]));
    /// # Ok::<(), dc3::ConstructError>(())
    /// ```
    ///
    /// [`MAX_LEN`]: crate::MAX_LEN
    pub fn with_lcp(text: &'a [T]) -> Result<Self, ConstructError> {
        Self::build(text, true)
    }

    fn build(text: &'a [T], want_lcp: bool) -> Result<Self, ConstructError> {
        let construction = construct::construct(text, want_lcp)?;

        Ok(Self {
            text,
            inner: construction.suffix_array,
            lcp: construction.lcp,
        })
    }
}

impl<'a, T> SuffixArray<'a, T> {
    /// Returns the text this suffix array was built for.
    #[must_use]
    pub fn text(&self) -> &'a [T] {
        self.text
    }

    /// Returns the starting offsets of the suffixes in lexicographic order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.inner
    }

    /// Returns the LCP array if it was computed during construction.
    #[must_use]
    pub fn lcp(&self) -> Option<&[u32]> {
        self.lcp.as_deref()
    }

    /// Returns the number of suffixes, which equals the length of the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the rank of every suffix, indexed by starting offset.
    #[must_use]
    pub fn inverse(&self) -> Vec<u32> {
        lcp::inverse(&self.inner)
    }

    /// Returns the suffix array as raw bytes.
    ///
    /// Each offset occupies four bytes in native byte order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dc3::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"ab")?;
    /// assert_eq!(sa.as_bytes().len(), 8);
    /// # Ok::<(), dc3::ConstructError>(())
    /// ```
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.inner)
    }

    /// Returns the suffix array and the LCP array, if any, dropping the text reference.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u32>, Option<Vec<u32>>) {
        (self.inner, self.lcp)
    }
}

impl<T: Ord> SuffixArray<'_, T> {
    /// Returns the offset of an occurrence of `pattern` in the text, if there is one.
    ///
    /// Which occurrence is returned is unspecified when there are several.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dc3::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"Hello, world!")?;
    /// assert_eq!(sa.search(b"world"), Some(7));
    /// assert_eq!(sa.search(b"word"), None);
    /// # Ok::<(), dc3::ConstructError>(())
    /// ```
    #[must_use]
    pub fn search(&self, pattern: &[T]) -> Option<usize> {
        self.inner
            .binary_search_by(|&suffix| self.compare_prefix(suffix, pattern))
            .ok()
            .map(|k| self.inner[k] as usize)
    }

    /// Returns `true` if and only if `pattern` is contained in the text.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dc3::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"Hello, world!")?;
    /// assert!(sa.contains(b"world"));
    /// # Ok::<(), dc3::ConstructError>(())
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[T]) -> bool {
        self.search(pattern).is_some()
    }

    /// Returns the offsets of every occurrence of `pattern`, in suffix order.
    ///
    /// An empty pattern occurs at every offset.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dc3::SuffixArray;
    ///
    /// let sa = SuffixArray::new(b"banana")?;
    /// assert_eq!(sa.occurrences(b"ana"), [3, 1]);
    /// # Ok::<(), dc3::ConstructError>(())
    /// ```
    #[must_use]
    pub fn occurrences(&self, pattern: &[T]) -> &[u32] {
        let start = self
            .inner
            .partition_point(|&suffix| self.compare_prefix(suffix, pattern) == Ordering::Less);
        let len = self.inner[start..]
            .partition_point(|&suffix| self.compare_prefix(suffix, pattern) == Ordering::Equal);

        &self.inner[start..start + len]
    }

    /// Compares the first `pattern.len()` symbols of the suffix at `suffix` with `pattern`.
    fn compare_prefix(&self, suffix: u32, pattern: &[T]) -> Ordering {
        self.text[suffix as usize..]
            .iter()
            .take(pattern.len())
            .cmp(pattern.iter())
    }
}
