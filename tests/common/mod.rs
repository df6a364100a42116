//! Shared helpers for integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use u_bnb::matrix::{Cost, CostMatrix};

/// Cheapest closed tour over all permutations starting at 0.
pub fn brute_force(m: &CostMatrix) -> Cost {
    let n = m.len();
    if n <= 2 {
        return 0;
    }
    let mut rest: Vec<usize> = (1..n).collect();
    let mut best = Cost::MAX;
    permute(&mut rest, 0, &mut |perm: &[usize]| {
        let mut tour = Vec::with_capacity(n);
        tour.push(0);
        tour.extend_from_slice(perm);
        best = best.min(m.tour_cost(&tour));
    });
    best
}

/// Cheapest closed tour that starts with `prefix` (which must start at 0).
pub fn best_completion(m: &CostMatrix, prefix: &[usize]) -> Cost {
    let mut rest: Vec<usize> = (0..m.len()).filter(|v| !prefix.contains(v)).collect();
    let mut best = Cost::MAX;
    permute(&mut rest, 0, &mut |perm: &[usize]| {
        let mut tour = prefix.to_vec();
        tour.extend_from_slice(perm);
        best = best.min(m.tour_cost(&tour));
    });
    best
}

/// Calls `visit` with every permutation of `items[k..]` (prefix fixed).
pub fn permute<F: FnMut(&[usize])>(items: &mut Vec<usize>, k: usize, visit: &mut F) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

/// Random square matrices with 3 to `max_n` locations and small costs,
/// zeros included.
pub fn arb_matrix(max_n: usize) -> impl Strategy<Value = CostMatrix> {
    (3..=max_n).prop_flat_map(|n| {
        prop::collection::vec(0u64..40, n * n)
            .prop_map(move |costs| CostMatrix::from_flat(n, costs).unwrap())
    })
}
