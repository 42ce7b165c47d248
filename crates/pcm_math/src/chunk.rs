//! Fixed-size regrouping of flat sequences.
//!
//! Scene exports store vertex positions and triangle indices as flat
//! arrays. [`chunk`] turns such an array into `[T; N]` groups, reading
//! strictly left to right and padding a short trailing group with a fill
//! value instead of dropping or rejecting it.

use std::iter::{Fuse, FusedIterator};

/// Iterator adapter yielding `[T; N]` groups from a flat iterator.
///
/// Created by [`chunk`] and [`chunk_or_default`]. The adapter is lazy and
/// consumes its source, so it can only be walked once.
pub struct Chunked<I: Iterator, const N: usize> {
    iter: Fuse<I>,
    fill: I::Item,
}

/// Group `iter` into arrays of `N` elements, padding the last one with `fill`.
///
/// An empty input yields no groups. A trailing group shorter than `N` is
/// completed with copies of `fill`.
///
/// # Panics
///
/// Panics if `N` is zero.
///
/// # Example
///
/// ```
/// use pcm_math::chunk;
///
/// let groups: Vec<[i32; 3]> = chunk([1, 2, 3, 4, 5, 6, 7], 0).collect();
/// assert_eq!(groups, vec![[1, 2, 3], [4, 5, 6], [7, 0, 0]]);
/// ```
pub fn chunk<I, const N: usize>(iter: I, fill: I::Item) -> Chunked<I::IntoIter, N>
where
    I: IntoIterator,
    I::Item: Clone,
{
    assert!(N > 0, "chunk size must be non-zero");
    Chunked {
        iter: iter.into_iter().fuse(),
        fill,
    }
}

/// Same as [`chunk`] with the element type's default (zero for numbers) as fill.
pub fn chunk_or_default<I, const N: usize>(iter: I) -> Chunked<I::IntoIter, N>
where
    I: IntoIterator,
    I::Item: Clone + Default,
{
    chunk(iter, I::Item::default())
}

impl<I, const N: usize> Iterator for Chunked<I, N>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = [I::Item; N];

    fn next(&mut self) -> Option<Self::Item> {
        let mut first = Some(self.iter.next()?);
        let iter = &mut self.iter;
        let fill = &self.fill;

        Some(std::array::from_fn(|_| {
            first
                .take()
                .or_else(|| iter.next())
                .unwrap_or_else(|| fill.clone())
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.div_ceil(N), upper.map(|u| u.div_ceil(N)))
    }
}

impl<I, const N: usize> ExactSizeIterator for Chunked<I, N>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I, const N: usize> FusedIterator for Chunked<I, N>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Check group count and the concatenate-then-truncate property for one `N`.
    fn check_reshape<const N: usize>(input: &[i64]) {
        let groups: Vec<[i64; N]> = chunk(input.iter().copied(), -1).collect();

        assert_eq!(groups.len(), input.len().div_ceil(N));

        let mut flat: Vec<i64> = groups.iter().flatten().copied().collect();
        assert!(flat[input.len()..].iter().all(|&v| v == -1));
        flat.truncate(input.len());
        assert_eq!(flat, input);
    }

    #[test]
    fn test_chunk_group_count_and_reshape() {
        for len in 0..=13 {
            let input: Vec<i64> = (0..len).collect();
            check_reshape::<1>(&input);
            check_reshape::<2>(&input);
            check_reshape::<3>(&input);
            check_reshape::<4>(&input);
            check_reshape::<7>(&input);
        }
    }

    #[test]
    fn test_chunk_empty_input() {
        let groups: Vec<[f32; 3]> = chunk(Vec::<f32>::new(), 0.0).collect();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_chunk_pads_with_fill() {
        let groups: Vec<[char; 3]> = chunk("ABCDEFG".chars(), 'x').collect();
        assert_eq!(
            groups,
            vec![['A', 'B', 'C'], ['D', 'E', 'F'], ['G', 'x', 'x']]
        );
    }

    #[test]
    fn test_chunk_or_default_pads_with_zero() {
        let groups: Vec<[u32; 3]> = chunk_or_default(vec![0u32, 1, 2, 0, 2]).collect();
        assert_eq!(groups, vec![[0, 1, 2], [0, 2, 0]]);
    }

    #[test]
    fn test_chunk_exact_size() {
        let chunks = chunk::<_, 3>(vec![1.0f32; 10], 0.0);
        assert_eq!(chunks.len(), 4);
    }

    #[test]
    fn test_chunk_is_fused() {
        let mut chunks = chunk::<_, 2>([1, 2], 0);
        assert_eq!(chunks.next(), Some([1, 2]));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn test_chunk_zero_size_panics() {
        let _ = chunk::<_, 0>([1, 2, 3], 0);
    }
}
