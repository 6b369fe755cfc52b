//! Arc-length parameter tables shared by the spline variants.

use dynsurf_core::Tolerance;
use tracing::debug;

/// Build the normalized parameter table from per-segment lengths.
///
/// The first entry is 0 and the last is 1. Zero-length segments repeat the
/// previous parameter. Only an exactly zero or non-finite total counts as
/// degenerate, so tiny curves keep their proportions. Then the parameters
/// are spread uniformly so lookups never divide by zero.
pub(crate) fn normalized_params(segment_lengths: &[f64]) -> (Vec<f64>, f64) {
    let total: f64 = segment_lengths.iter().sum();
    let count = segment_lengths.len() + 1;

    let mut params = Vec::with_capacity(count);
    params.push(0.0);
    if segment_lengths.is_empty() {
        return (params, 0.0);
    }

    if Tolerance::default().is_negligible(total, 0.0) {
        debug!(
            segments = segment_lengths.len(),
            total, "zero arc length, using uniform parameters"
        );
        let last = segment_lengths.len() as f64;
        params.extend((1..count).map(|i| i as f64 / last));
        return (params, total);
    }

    let mut acc = 0.0;
    for &len in &segment_lengths[..segment_lengths.len() - 1] {
        acc += len;
        params.push(acc / total);
    }
    params.push(1.0);
    (params, total)
}

/// Find the segment containing `param`.
///
/// Returns the index `i` of the first parameter strictly greater than
/// `param` together with the local parameter on segment `[i - 1, i]`.
/// `param` must lie in `(0, 1)`.
pub(crate) fn locate(params: &[f64], param: f64) -> Option<(usize, f64)> {
    let i = params.partition_point(|&p| p <= param);
    if i == 0 || i >= params.len() {
        return None;
    }
    let span = params[i] - params[i - 1];
    let t = if span > 0.0 {
        (param - params[i - 1]) / span
    } else {
        1.0
    };
    Some((i, t))
}
