//! Comb filter for reverb algorithms.
//!
//! A comb filter with feedback and damping (one-pole lowpass in feedback path).
//! Essential building block for Schroeder and Freeverb-style reverbs.

use crate::math::flush_denormal;

/// Comb filter with feedback and damping.
///
/// The feedback path includes a one-pole lowpass filter for high-frequency
/// damping, simulating the absorption of high frequencies in real acoustic spaces.
///
/// # Example
///
/// ```rust
/// use orbit_core::CombFilter;
///
/// let mut comb = CombFilter::new(1000);
/// comb.set_feedback(0.8);
/// comb.set_damp(0.3);
///
/// let output = comb.process(1.0);
/// assert_eq!(output, 0.0); // delay line starts empty
/// ```
#[derive(Debug, Clone)]
pub struct CombFilter {
    buffer: Vec<f32>,
    index: usize,
    feedback: f32,
    damp1: f32,
    damp2: f32,
    filterstore: f32,
}

impl CombFilter {
    /// Create a new comb filter with the given delay size in samples.
    ///
    /// A size of zero is rounded up to one sample.
    pub fn new(delay_samples: usize) -> Self {
        Self {
            buffer: vec![0.0; delay_samples.max(1)],
            index: 0,
            feedback: 0.5,
            damp1: 0.5,
            damp2: 0.5,
            filterstore: 0.0,
        }
    }

    /// Set the feedback amount (0.0 to ~0.98).
    ///
    /// Higher values create longer decay times.
    #[inline]
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = feedback.clamp(0.0, 0.99);
    }

    /// Set the damping amount (0.0 to 1.0).
    ///
    /// - 0.0 = no damping (bright)
    /// - 1.0 = full damping (dark/muffled)
    #[inline]
    pub fn set_damp(&mut self, damp: f32) {
        self.damp1 = damp.clamp(0.0, 1.0);
        self.damp2 = 1.0 - self.damp1;
    }

    /// Process a single sample through the comb filter.
    ///
    /// The output is the delayed signal, which is then fed back through
    /// a one-pole lowpass filter and into the delay line.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.buffer[self.index];

        // filterstore = output * (1 - damp) + filterstore * damp
        self.filterstore = flush_denormal(output * self.damp2 + self.filterstore * self.damp1);

        self.buffer[self.index] = input + self.filterstore * self.feedback;
        self.index += 1;
        if self.index == self.buffer.len() {
            self.index = 0;
        }

        output
    }
}
