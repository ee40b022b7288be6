//! Peak normalizer, the final stage of every chain.

use orbit_core::SampleBuffer;

/// Output peak level after normalization.
pub const TARGET_PEAK: f32 = 0.99;

/// Scale `buffer` so its peak absolute sample is [`TARGET_PEAK`].
///
/// Silent buffers come back unchanged.
pub fn normalize(buffer: &SampleBuffer) -> SampleBuffer {
    let mut out = buffer.clone();
    let peak = buffer.peak();
    if peak > 0.0 {
        out.scale(TARGET_PEAK / peak);
    }
    out
}
