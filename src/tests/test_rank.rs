use crate::rank::{linspace_ranks, select_at_ranks};

// -------------------- Rank targets --------------------

#[test]
fn test_linspace_single_pick_is_closest() {
    assert_eq!(linspace_ranks(5, 1), vec![0]);
    assert_eq!(linspace_ranks(1, 1), vec![0]);
}

#[test]
fn test_linspace_spans_full_range() {
    assert_eq!(linspace_ranks(5, 2), vec![0, 4]);
    assert_eq!(linspace_ranks(5, 3), vec![0, 2, 4]);
    assert_eq!(linspace_ranks(5, 5), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_linspace_truncates_toward_zero() {
    // 0, 1.5, 3.0, 4.5, 6 -> 0, 1, 3, 4, 6
    assert_eq!(linspace_ranks(7, 5), vec![0, 1, 3, 4, 6]);
    // 0, 4.5, 9 -> 0, 4, 9
    assert_eq!(linspace_ranks(10, 3), vec![0, 4, 9]);
    // 0, 1/3, 2/3, 1 -> 0, 0, 0, 1
    assert_eq!(linspace_ranks(2, 4), vec![0, 0, 0, 1]);
}

#[test]
fn test_linspace_repeats_when_k_exceeds_n() {
    let ranks = linspace_ranks(3, 7);
    assert_eq!(ranks.len(), 7);
    assert_eq!(ranks.first(), Some(&0));
    assert_eq!(ranks.last(), Some(&2));
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    assert!(ranks.iter().all(|&r| r < 3));
}

#[test]
fn test_linspace_single_member_cluster() {
    assert_eq!(linspace_ranks(1, 4), vec![0, 0, 0, 0]);
}

#[test]
fn test_linspace_degenerate_inputs() {
    assert!(linspace_ranks(0, 3).is_empty());
    assert!(linspace_ranks(4, 0).is_empty());
}

// -------------------- Partial-ordering selection --------------------

#[test]
fn test_select_at_ranks_matches_full_sort() {
    let dists = vec![7.0, 0.5, 3.2, 9.9, 1.1, 4.4, 2.0, 8.8];
    let mut sorted: Vec<usize> = (0..dists.len()).collect();
    sorted.sort_by(|a, b| dists[*a].partial_cmp(&dists[*b]).unwrap());

    let ranks = vec![0, 3, 5, 7];
    let picked = select_at_ranks(&dists, &ranks);
    let expected: Vec<usize> = ranks.iter().map(|&r| sorted[r]).collect();
    assert_eq!(picked, expected);
}

#[test]
fn test_select_at_ranks_keeps_requested_order_and_repeats() {
    let dists = vec![3.0, 1.0, 2.0];
    // ranks: 0 -> pos 1, 2 -> pos 0, 1 -> pos 2
    assert_eq!(select_at_ranks(&dists, &[2, 0, 0, 1]), vec![0, 1, 1, 2]);
}

#[test]
fn test_select_at_ranks_ties_prefer_lower_position() {
    let dists = vec![1.0, 1.0, 1.0, 0.0];
    assert_eq!(select_at_ranks(&dists, &[0, 1, 2, 3]), vec![3, 0, 1, 2]);
}

#[test]
fn test_select_at_ranks_single() {
    assert_eq!(select_at_ranks(&[42.0], &[0, 0]), vec![0, 0]);
}

#[test]
#[should_panic]
fn test_select_at_ranks_out_of_bounds() {
    select_at_ranks(&[1.0, 2.0], &[2]);
}
