//! One-pole RC lowpass filter.
//!
//! A single-pole IIR lowpass derived from an analog RC network:
//!
//! ```text
//! rc    = 1 / (2π · cutoff)
//! dt    = 1 / sample_rate
//! α     = dt / (rc + dt)
//! y[n]  = y[n-1] + α · (x[n] - y[n-1])
//! ```
//!
//! 6 dB/octave rolloff, one multiply per sample. Each output depends on the
//! previous output, so filtering a channel is a strictly sequential scan
//! over the time axis. This is the one place in the pipeline without
//! data-parallel structure.
//!
//! Runs in `f64` so long buffers don't accumulate rounding error in the
//! feedback path.
//!
//! # Usage
//!
//! ```rust
//! use orbit_core::OnePole;
//!
//! let lp = OnePole::new(44100.0, 4000.0);
//! let mut channel = vec![1.0f64, 0.0, 0.0, 0.0];
//! lp.filter(&mut channel);
//! assert_eq!(channel[0], 1.0); // first sample seeds the state
//! assert!(channel[1] < 1.0);
//! ```

/// One-pole (6 dB/oct) RC lowpass filter.
///
/// # Invariants
///
/// - `alpha` is in (0, 1] for any positive cutoff and sample rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePole {
    alpha: f64,
}

impl OnePole {
    /// Create a filter for the given sample rate and cutoff, both in Hz.
    pub fn new(sample_rate: f64, cutoff_hz: f64) -> Self {
        let rc = 1.0 / (2.0 * core::f64::consts::PI * cutoff_hz);
        let dt = 1.0 / sample_rate;
        Self {
            alpha: dt / (rc + dt),
        }
    }

    /// Smoothing coefficient α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Filter a channel in place.
    ///
    /// `y[0] = x[0]`; every later sample follows the recurrence.
    pub fn filter(&self, channel: &mut [f64]) {
        let Some((first, rest)) = channel.split_first_mut() else {
            return;
        };
        let mut prev = *first;
        for sample in rest {
            prev += self.alpha * (*sample - prev);
            *sample = prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_dc() {
        let lp = OnePole::new(48000.0, 1000.0);
        let mut channel = vec![1.0; 4800];
        lp.filter(&mut channel);
        assert!(channel.iter().all(|&y| (y - 1.0).abs() < 1e-12));
    }

    #[test]
    fn attenuates_nyquist() {
        let lp = OnePole::new(48000.0, 100.0);
        let mut channel: Vec<f64> = (0..4800)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        lp.filter(&mut channel);
        let avg = channel[100..].iter().map(|y| y.abs()).sum::<f64>() / 4700.0;
        assert!(avg < 0.05, "Nyquist signal should be heavily attenuated, avg = {avg}");
    }

    #[test]
    fn first_sample_seeds_state() {
        let lp = OnePole::new(44100.0, 2000.0);
        let mut channel = vec![0.8, 0.8, 0.0];
        lp.filter(&mut channel);
        assert_eq!(channel[0], 0.8);
        assert_eq!(channel[1], 0.8);
        assert!(channel[2] > 0.0 && channel[2] < 0.8);
    }

    #[test]
    fn alpha_formula() {
        let lp = OnePole::new(44100.0, 16000.0);
        let rc = 1.0 / (2.0 * core::f64::consts::PI * 16000.0);
        let dt = 1.0 / 44100.0;
        assert!((lp.alpha() - dt / (rc + dt)).abs() < 1e-15);
        assert!(lp.alpha() > 0.0 && lp.alpha() < 1.0);
    }

    #[test]
    fn empty_channel_is_noop() {
        let lp = OnePole::new(44100.0, 1000.0);
        let mut channel: Vec<f64> = Vec::new();
        lp.filter(&mut channel);
        assert!(channel.is_empty());
    }
}
