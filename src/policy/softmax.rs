//! Numerically stable softmax.

/// Map scores to a probability distribution.
///
/// The maximum is subtracted before exponentiating so the largest term is
/// exactly `exp(0) = 1` and nothing overflows. If the scores are unusable
/// (NaN, or no finite maximum) the result is uniform rather than NaN.
#[must_use]
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exp: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exp.iter().sum();

    if !max.is_finite() || !sum.is_finite() || sum <= 0.0 {
        let uniform = 1.0 / scores.len() as f64;
        return vec![uniform; scores.len()];
    }

    exp.iter().map(|v| v / sum).collect()
}
