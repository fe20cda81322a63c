// ============================================================================
// Euclidean Distance
// Full and squared L2 distance over an optional prefix of two vectors
// ============================================================================

use super::element::DistanceElement;
use crate::numeric::{NumericError, NumericResult};

/// Check that both vectors have the same length and cut them down to the
/// first `k` elements. `None`, or a `k` past the end, keeps everything.
#[inline]
fn truncated_pair<'a, T>(
    l1: &'a [T],
    l2: &'a [T],
    k: Option<usize>,
) -> NumericResult<(&'a [T], &'a [T])> {
    if l1.len() != l2.len() {
        return Err(NumericError::LengthMismatch {
            left: l1.len(),
            right: l2.len(),
        });
    }

    let k = match k {
        Some(k) if k < l1.len() => k,
        _ => l1.len(),
    };

    Ok((&l1[..k], &l2[..k]))
}

/// Squared Euclidean distance between `l1[..k]` and `l2[..k]`.
///
/// This is the squared norm of the element-wise difference. Cheaper than
/// [`euclidean_distance`] when only the ordering of distances matters.
///
/// # Errors
/// Returns `LengthMismatch` if `l1` and `l2` differ in length. Lengths are
/// compared before truncation.
pub fn euclidean_distance_squared<T: DistanceElement>(
    l1: &[T],
    l2: &[T],
    k: Option<usize>,
) -> NumericResult<f64> {
    let (l1, l2) = truncated_pair(l1, l2, k)?;

    Ok(l1
        .iter()
        .zip(l2)
        .map(|(&a, &b)| a.abs_diff_squared(b))
        .sum())
}

/// Euclidean distance between `l1[..k]` and `l2[..k]`, or between the whole
/// vectors when `k` is `None` or exceeds their length.
///
/// # Example
/// ```
/// use numeric_utils::distance::euclidean_distance;
///
/// let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0], None)?;
/// assert_eq!(d, 5.0);
/// # Ok::<(), numeric_utils::numeric::NumericError>(())
/// ```
///
/// # Errors
/// Returns `LengthMismatch` if `l1` and `l2` differ in length.
pub fn euclidean_distance<T: DistanceElement>(
    l1: &[T],
    l2: &[T],
    k: Option<usize>,
) -> NumericResult<f64> {
    euclidean_distance_squared(l1, l2, k).map(f64::sqrt)
}
