//! Uniform in-place shuffling

use rand::Rng;

/// Shuffle `items` in place
///
/// Each position `i` is swapped with a position drawn uniformly from
/// `[i, n)`, so every permutation is equally likely. One draw per element.
///
/// # Examples
/// ```
/// use holdgram::core::shuffle;
///
/// let mut letters = vec!['l', 'e', 'a', 'p'];
/// shuffle(&mut letters, &mut rand::rng());
///
/// letters.sort_unstable();
/// assert_eq!(letters, ['a', 'e', 'l', 'p']);
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    for i in 0..n {
        let r = rng.random_range(i..n);
        items.swap(i, r);
    }
}
