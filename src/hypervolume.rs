//! Exact hypervolume of a Pareto front.
//!
//! The hypervolume is the Lebesgue measure of the region dominated by a set
//! of points and bounded by a reference point: the union, over every point
//! `p`, of the box `[p_1, r_1] × … × [p_d, r_d]`. Objectives are minimized,
//! so a larger hypervolume means a better front.
//!
//! Boxes with no positive extent on some axis (a point that is not strictly
//! better than the reference in every objective) contribute nothing.
//!
//! The computation slices on the last objective and recurses on the
//! remaining ones, bottoming out in a sorted sweep for two objectives. It is
//! exact; the cost is polynomial in the number of points for a fixed number
//! of objectives and grows exponentially with the number of objectives.
//!
//! ```
//! use trial_indicators::hypervolume::hypervolume;
//!
//! let front = vec![vec![2.0, 0.0], vec![0.0, 2.0], vec![1.0, 1.0]];
//! let hv = hypervolume(&front, &[2.0, 4.0]).unwrap();
//! assert!((hv - 5.0).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};
use crate::pareto::{dominates, nondominated_unique};

/// Compute the hypervolume of `front` against `reference_point`.
///
/// `front` may contain dominated or duplicate points; they do not change the
/// result. An empty front has hypervolume `0.0`.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] if a point's length differs from the
///   reference point's.
/// - [`Error::NanObjective`] if a point contains NaN.
/// - [`Error::InvalidReferencePoint`] if the reference point is empty or
///   contains NaN.
/// - [`Error::UndefinedHypervolume`] if the result is not finite (e.g. a
///   point at `-inf`).
pub fn hypervolume<P: AsRef<[f64]>>(front: &[P], reference_point: &[f64]) -> Result<f64> {
    let d = reference_point.len();
    if d == 0 {
        return Err(Error::InvalidReferencePoint("reference point is empty"));
    }
    if reference_point.iter().any(|r| r.is_nan()) {
        return Err(Error::InvalidReferencePoint("reference point contains NaN"));
    }
    // Keep only points strictly dominated by the reference point.
    let mut inside: Vec<Vec<f64>> = Vec::with_capacity(front.len());
    for p in front {
        let p = p.as_ref();
        if p.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                got: p.len(),
            });
        }
        if p.iter().any(|v| v.is_nan()) {
            return Err(Error::NanObjective);
        }
        if p.iter().zip(reference_point).all(|(&pv, &rv)| pv < rv) {
            inside.push(p.to_vec());
        }
    }

    if inside.is_empty() {
        return Ok(0.0);
    }

    let points = nondominated_unique(inside);
    let volume = hv_recursive(points, reference_point);
    trace_debug!(volume, n_points = front.len(), "hypervolume computed");

    if volume.is_finite() {
        Ok(volume)
    } else {
        Err(Error::UndefinedHypervolume(volume))
    }
}

/// Derive a reference point as the component-wise maximum of `front`.
///
/// Returns `None` for an empty front. With a single point the derived
/// reference coincides with it, so that front's hypervolume is zero.
#[must_use]
pub fn derive_reference_point<P: AsRef<[f64]>>(front: &[P]) -> Option<Vec<f64>> {
    let (first, rest) = front.split_first()?;
    let mut reference = first.as_ref().to_vec();
    for p in rest {
        for (r, &v) in reference.iter_mut().zip(p.as_ref()) {
            *r = r.max(v);
        }
    }
    Some(reference)
}

/// Recursive hypervolume via slicing on the last objective.
///
/// All points are mutually non-dominated and strictly dominated by
/// `reference`.
fn hv_recursive(mut points: Vec<Vec<f64>>, reference: &[f64]) -> f64 {
    let d = reference.len();

    match (d, points.len()) {
        (_, 0) => return 0.0,
        // 1-D hypervolume is the gap from the best point to ref.
        (1, _) => {
            let min_val = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
            return (reference[0] - min_val).max(0.0);
        }
        (2, _) => return hv_2d(&mut points, reference),
        (_, 1) => {
            return points[0]
                .iter()
                .zip(reference)
                .map(|(&p, &r)| r - p)
                .product();
        }
        _ => {}
    }

    points.sort_by(|a, b| a[d - 1].total_cmp(&b[d - 1]));

    let sub_ref = &reference[..d - 1];
    // Projections of the points swept so far, kept non-dominated.
    let mut active: Vec<Vec<f64>> = Vec::with_capacity(points.len());
    let mut result = 0.0;

    for (i, point) in points.iter().enumerate() {
        let projected = &point[..d - 1];
        if !active
            .iter()
            .any(|q| q.as_slice() == projected || dominates(q, projected))
        {
            active.retain(|q| !dominates(projected, q));
            active.push(projected.to_vec());
        }

        let upper = points.get(i + 1).map_or(reference[d - 1], |next| next[d - 1]);
        let height = upper - point[d - 1];
        if height > 0.0 {
            result += height * hv_recursive(active.clone(), sub_ref);
        }
    }

    result
}

/// Two-objective staircase sweep.
fn hv_2d(points: &mut [Vec<f64>], reference: &[f64]) -> f64 {
    points.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));

    let mut floor = reference[1];
    let mut area = 0.0;
    for p in points.iter() {
        if p[1] < floor {
            area += (reference[0] - p[0]) * (floor - p[1]);
            floor = p[1];
        }
    }
    area
}
