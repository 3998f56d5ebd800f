//! Draw helpers shared by the fault generators.

use rand::{Rng, seq::index};

/// Linear interpolation over `range` by `factor` in `[0, 1]`.
pub(super) fn lerp((min, max): (f64, f64), factor: f64) -> f64 {
    min + (max - min) * factor
}

/// Uniform draw over the closed `range`.
pub(super) fn uniform<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    rng.random_range(min..=max)
}

/// Picks one item of a non-empty table.
pub(super) fn pick<T: Copy, R: Rng + ?Sized, const N: usize>(rng: &mut R, items: &[T; N]) -> T {
    const { assert!(N > 0) };
    items[rng.random_range(0..N)]
}

/// Picks `amount` distinct items of a table, at most all of them.
pub(super) fn pick_distinct<T: Copy, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    amount: usize,
) -> Vec<T> {
    index::sample(rng, items.len(), amount.min(items.len()))
        .into_iter()
        .map(|i| items[i])
        .collect()
}

/// Draws `amount` distinct indices from `0..length`, sorted.
pub(super) fn distinct_indices<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    amount: usize,
) -> Vec<usize> {
    let mut indices = index::sample(rng, length, amount.min(length)).into_vec();
    indices.sort_unstable();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn interpolation() {
        assert_relative_eq!(lerp((20.0, 80.0), 0.0), 20.0);
        assert_relative_eq!(lerp((20.0, 80.0), 0.5), 50.0);
        assert_relative_eq!(lerp((20.0, 80.0), 1.0), 80.0);
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let x = uniform(&mut rng, (0.5, 8.0));
            assert!((0.5..=8.0).contains(&x));
            assert!([1, 2, 3].contains(&pick(&mut rng, &[1, 2, 3])));
        }
    }

    #[test]
    fn distinct_draws() {
        let mut rng = StdRng::seed_from_u64(5);

        let items = pick_distinct(&mut rng, &['a', 'b', 'c'], 5);
        assert_eq!(items.len(), 3);
        assert!(items.contains(&'a') && items.contains(&'b') && items.contains(&'c'));

        let indices = distinct_indices(&mut rng, 8, 4);
        assert_eq!(indices.len(), 4);
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(indices.iter().all(|&i| i < 8));

        assert!(distinct_indices(&mut rng, 0, 3).is_empty());
    }
}
