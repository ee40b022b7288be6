//! Trimmer: cut a buffer down to a `[start, end)` window in seconds.

use orbit_core::SampleBuffer;

/// Trim `buffer` to the window from `start_sec` to `end_sec`.
///
/// An `end_sec` of zero (or past the end) means "to the end of the buffer".
/// Frame indices are `seconds · sample_rate`, truncated. Degenerate windows,
/// where the start frame is at or after the end frame, return the buffer
/// unchanged instead of an empty clip.
///
/// # Example
///
/// ```rust
/// use orbit_core::SampleBuffer;
/// use orbit_effects::trim;
///
/// let buffer = SampleBuffer::silence(44100, 44100).unwrap();
/// assert_eq!(trim(&buffer, 0.25, 0.75).len(), 22050);
/// assert_eq!(trim(&buffer, 0.0, 0.0).len(), 44100);
/// ```
pub fn trim(buffer: &SampleBuffer, start_sec: f64, end_sec: f64) -> SampleBuffer {
    let duration = buffer.duration_secs();
    if start_sec <= 0.0 && (end_sec <= 0.0 || end_sec >= duration) {
        return buffer.clone();
    }

    let sample_rate = f64::from(buffer.sample_rate());
    let total = buffer.len();
    let start_frame = seconds_to_frame(start_sec, sample_rate);
    let end_frame = if end_sec <= 0.0 || end_sec >= duration {
        total
    } else {
        seconds_to_frame(end_sec, sample_rate).min(total)
    };

    if start_frame >= end_frame {
        tracing::warn!(
            start_sec,
            end_sec,
            duration,
            "trim window is empty, keeping the full buffer"
        );
        return buffer.clone();
    }

    tracing::debug!(start_frame, end_frame, total, "trimming");
    buffer.slice(start_frame, end_frame)
}

fn seconds_to_frame(seconds: f64, sample_rate: f64) -> usize {
    let frame = seconds * sample_rate;
    if frame <= 0.0 { 0 } else { frame as usize }
}
