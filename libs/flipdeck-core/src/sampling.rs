//! Random selection helpers.

use rand::Rng;

/// Roulette-wheel lookup: index of the first weight whose cumulative sum
/// reaches `r`.
///
/// Walks `weights` in order, subtracting each from `r`, and returns the first
/// index where the remainder drops to zero or below. If rounding leaves a
/// positive remainder after the last weight, the last positive-weight index
/// is returned. Returns `None` if there is no positive weight.
pub fn roulette_index(weights: &[f64], r: f64) -> Option<usize> {
    let mut remaining = r;
    let mut last_positive = None;

    for (idx, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 || !weight.is_finite() {
            continue;
        }
        last_positive = Some(idx);
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(idx);
        }
    }

    last_positive
}

/// Draw an index with probability proportional to its weight.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let total: f64 = weights
        .iter()
        .filter(|w| w.is_finite() && **w > 0.0)
        .sum();
    if total <= 0.0 {
        return None;
    }

    let r = rng.gen_range(0.0..total);
    roulette_index(weights, r)
}

/// Fisher–Yates shuffle: for `i` from the last index down to 1, swap with a
/// uniformly chosen `j <= i`.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
