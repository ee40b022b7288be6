//! Mathematical utility functions for DSP.
//!
//! - [`flush_denormal`] - Zero out tiny values in feedback paths
//! - [`constant_power_gains`] - Equal-power pan law
//! - [`ms_to_samples`] - Time conversion
//! - [`pearson_correlation`] - Similarity between two signals

/// Flush values below 1e-20 to zero.
///
/// Feedback paths decaying towards silence otherwise end up in subnormal
/// territory, which is very slow on most CPUs.
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Constant-power gains for a pan position in `[0, 1]`.
///
/// `0.0` is hard left, `0.5` center, `1.0` hard right. The returned
/// `(left, right)` pair always satisfies `left² + right² = 1`.
///
/// # Example
/// ```rust
/// use orbit_core::constant_power_gains;
///
/// let (l, r) = constant_power_gains(0.5);
/// assert!((l - r).abs() < 1e-12);
/// assert!((l * l + r * r - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn constant_power_gains(position: f64) -> (f64, f64) {
    let angle = position * core::f64::consts::FRAC_PI_2;
    (angle.cos(), angle.sin())
}

/// Convert milliseconds to a whole number of samples (truncating).
#[inline]
pub fn ms_to_samples(ms: f64, sample_rate: u32) -> usize {
    let samples = f64::from(sample_rate) * ms / 1000.0;
    if samples <= 0.0 { 0 } else { samples as usize }
}

/// Pearson correlation coefficient of two equal-length signals.
///
/// Returns `None` if the slices differ in length, are empty, or either has
/// zero variance.
pub fn pearson_correlation(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let n = a.len() as f64;
    let mean_a = a.iter().map(|&x| f64::from(x)).sum::<f64>() / n;
    let mean_b = b.iter().map(|&x| f64::from(x)).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        let dx = f64::from(x) - mean_a;
        let dy = f64::from(y) - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return None;
    }
    Some(cov / (var_a.sqrt() * var_b.sqrt()))
}
