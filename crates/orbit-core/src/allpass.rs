//! Allpass filter for reverb diffusion.
//!
//! A Schroeder allpass filter that adds diffusion without coloring the
//! frequency response. Essential for creating dense, smooth reverb tails.

use crate::math::flush_denormal;

/// Schroeder allpass filter for diffusion.
///
/// Allpass filters pass all frequencies at equal amplitude but modify
/// the phase. In reverb, they "smear" the impulse response, creating
/// a denser, more diffuse sound.
///
/// # Example
///
/// ```rust
/// use orbit_core::AllpassFilter;
///
/// let mut allpass = AllpassFilter::new(500);
/// allpass.set_feedback(0.5);
///
/// let output = allpass.process(1.0);
/// assert_eq!(output, -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct AllpassFilter {
    buffer: Vec<f32>,
    index: usize,
    feedback: f32,
}

impl AllpassFilter {
    /// Create a new allpass filter with the given delay size in samples.
    ///
    /// A size of zero is rounded up to one sample.
    pub fn new(delay_samples: usize) -> Self {
        Self {
            buffer: vec![0.0; delay_samples.max(1)],
            index: 0,
            feedback: 0.5,
        }
    }

    /// Set the feedback coefficient.
    ///
    /// The allpass is stable for |feedback| < 1.0.
    #[inline]
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = feedback.clamp(-0.99, 0.99);
    }

    /// Process a single sample through the allpass filter.
    ///
    /// ```text
    /// output      = delayed - input
    /// delay_input = input + delayed * feedback
    /// ```
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let delayed = self.buffer[self.index];

        self.buffer[self.index] = flush_denormal(input + delayed * self.feedback);
        self.index += 1;
        if self.index == self.buffer.len() {
            self.index = 0;
        }

        delayed - input
    }
}
