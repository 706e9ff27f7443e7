//! Pareto dominance and non-dominated sorting.
//!
//! All objectives are minimized. A point **dominates** another if it is no
//! worse in every objective and strictly better in at least one; the
//! **Pareto front** of a set is the subset no other member dominates.
//!
//! # Available functions
//!
//! | Function | Purpose |
//! |---|---|
//! | [`dominates`] | Test dominance between two points |
//! | [`non_dominated_sort`] | Rank points into successive fronts (front 0, 1, …) |
//! | [`pareto_front_indices`] | Indices of the non-dominated points |
//! | [`pareto_front`] | Non-dominated points with duplicates collapsed |
//!
//! # Example
//!
//! ```
//! use trial_indicators::pareto::{non_dominated_sort, pareto_front, pareto_front_indices};
//!
//! let points = vec![
//!     vec![1.0, 5.0], // Pareto-optimal
//!     vec![5.0, 1.0], // Pareto-optimal
//!     vec![3.0, 3.0], // Pareto-optimal
//!     vec![4.0, 4.0], // Dominated by (3, 3)
//!     vec![3.0, 3.0], // Duplicate of #2
//! ];
//!
//! let fronts = non_dominated_sort(&points);
//! assert_eq!(fronts.len(), 2);
//!
//! assert_eq!(pareto_front_indices(&points), vec![0, 1, 2, 4]);
//! assert_eq!(pareto_front(&points).len(), 3);
//! ```

/// Returns `true` if `a` Pareto-dominates `b` under minimization.
///
/// Both slices must have the same length.
#[must_use]
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());

    let mut strictly_better = false;
    for (&av, &bv) in a.iter().zip(b) {
        if av > bv {
            return false;
        }
        if av < bv {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// Returns `Vec<Vec<usize>>` where `fronts[0]` is the Pareto front,
/// each inner vec contains indices into `values` in ascending order.
///
/// Complexity: O(M * N^2) where M = objectives, N = solutions.
pub(crate) fn fast_non_dominated_sort<P: AsRef<[f64]>>(values: &[P]) -> Vec<Vec<usize>> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    // S_p: set of solutions dominated by p
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    // n_p: domination count for p
    let mut domination_count: Vec<usize> = vec![0; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (values[i].as_ref(), values[j].as_ref());
            if dominates(a, b) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dominates(b, a) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current_front: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    while !current_front.is_empty() {
        let mut next_front: Vec<usize> = Vec::new();
        for &p in &current_front {
            for &q in &dominated_by[p] {
                domination_count[q] -= 1;
                if domination_count[q] == 0 {
                    next_front.push(q);
                }
            }
        }
        next_front.sort_unstable();
        fronts.push(current_front);
        current_front = next_front;
    }

    fronts
}

/// Reduce `points` to its non-dominated subset, dropping exact duplicates.
///
/// Insertion-based: each point is compared against the current front only,
/// which stays small for typical inputs. Input order is preserved.
pub(crate) fn nondominated_unique(points: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    let mut front: Vec<Vec<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if front.iter().any(|q| q == &p || dominates(q, &p)) {
            continue;
        }
        front.retain(|q| !dominates(&p, q));
        front.push(p);
    }
    front
}

/// Compute non-dominated sorting of a set of points.
///
/// Return a vec of fronts, where `fronts[0]` is the Pareto front
/// (non-dominated points), `fronts[1]` is the next-best front
/// (dominated only by front 0), and so on. Each inner vec contains
/// indices into `points`.
///
/// Equal points never dominate each other, so duplicates always share a
/// front.
#[must_use]
pub fn non_dominated_sort<P: AsRef<[f64]>>(points: &[P]) -> Vec<Vec<usize>> {
    fast_non_dominated_sort(points)
}

/// Return the indices of the non-dominated points, in ascending order.
///
/// Equivalent to `non_dominated_sort(points)[0]`. Duplicates of a
/// non-dominated point are all reported.
#[must_use]
pub fn pareto_front_indices<P: AsRef<[f64]>>(points: &[P]) -> Vec<usize> {
    let fronts = fast_non_dominated_sort(points);
    fronts.into_iter().next().unwrap_or_default()
}

/// Return the Pareto front of `points` as a set.
///
/// Every returned point is non-dominated within `points`; exact duplicates
/// are collapsed to their first occurrence. Order follows the input.
#[must_use]
pub fn pareto_front<P: AsRef<[f64]>>(points: &[P]) -> Vec<Vec<f64>> {
    let mut front: Vec<Vec<f64>> = Vec::new();
    for i in pareto_front_indices(points) {
        let p = points[i].as_ref();
        if !front.iter().any(|q| q.as_slice() == p) {
            front.push(p.to_vec());
        }
    }
    front
}
