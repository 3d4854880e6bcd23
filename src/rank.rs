//! Rank targets and partial-ordering selection.
//!
//! A cluster of `n` members is viewed through the ascending order of the
//! members' distance to the cluster center. Selecting `k` members means
//! choosing `k` rank positions spread evenly over `[0, n - 1]` and reading
//! the members that sit at those positions, so the picks cover the full
//! range from the closest member to the farthest one.
//!
//! Ranks are resolved with repeated `select_nth_unstable_by` calls on a
//! shrinking tail of the permutation, never with a full sort.

use std::cmp::Ordering;

use log::trace;

/// `k` rank positions evenly spaced over `[0, n - 1]`.
///
/// Position `i` is `i * (n - 1) / (k - 1)` computed in floating point and
/// truncated toward zero; the last position is pinned to `n - 1`. With
/// `k == 1` the single position is `0`. When `k > n` positions repeat.
///
/// Returns an empty vector when `n == 0` or `k == 0`.
pub fn linspace_ranks(n: usize, k: usize) -> Vec<usize> {
    if n == 0 || k == 0 {
        return Vec::new();
    }
    if k == 1 {
        return vec![0];
    }

    let stop = (n - 1) as f64;
    let step = stop / (k - 1) as f64;

    let mut ranks: Vec<usize> = (0..k).map(|i| (i as f64 * step) as usize).collect();
    ranks[k - 1] = n - 1;

    trace!("linspace ranks for n={}, k={}: {:?}", n, k, ranks);
    ranks
}

// Total order on positions: distance first, then position for ties.
fn by_distance(dists: &[f64], a: usize, b: usize) -> Ordering {
    dists[a].total_cmp(&dists[b]).then(a.cmp(&b))
}

/// Positions (into `dists`) of the entries occupying each rank in `ranks`,
/// in ascending distance order.
///
/// The output follows the order of `ranks`, so repeated ranks yield
/// repeated positions. Ties between equal distances resolve to the lower
/// position first.
///
/// # Panics
///
/// Panics if any rank is `>= dists.len()`.
pub fn select_at_ranks(dists: &[f64], ranks: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..dists.len()).collect();

    let mut targets: Vec<usize> = ranks.to_vec();
    targets.sort_unstable();
    targets.dedup();

    // Every element left of `lo` is already in its final rank position.
    let mut lo = 0;
    for &r in &targets {
        order[lo..].select_nth_unstable_by(r - lo, |a, b| by_distance(dists, *a, *b));
        lo = r + 1;
    }

    ranks.iter().map(|&r| order[r]).collect()
}
