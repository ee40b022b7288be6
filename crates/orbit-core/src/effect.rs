//! Core Effect trait.
//!
//! The [`Effect`] trait is the unit of transformation in the pipeline. An
//! effect receives a buffer and the request's [`ParameterSet`], and returns a
//! new buffer of the same shape.
//!
//! ## Design Decisions
//!
//! - **Offline, whole-buffer processing**: effects see the entire signal at
//!   once, so a stage like the Haas delay can read ahead of the write cursor.
//!
//! - **Input by shared reference**: `apply` borrows the input immutably. An
//!   effect that needs to modify samples clones into a private buffer first,
//!   so the caller's buffer is never touched.
//!
//! - **Stateless**: no `&mut self`. All per-call state (filter memory, delay
//!   lines) lives on the stack of `apply`, so one instance can serve any
//!   number of concurrent requests.

use crate::buffer::SampleBuffer;
use crate::error::Result;
use crate::params::{ParamKey, ParameterSet};

/// Core trait for all audio effects.
///
/// # Example
///
/// ```rust
/// use orbit_core::{Effect, ParameterSet, Result, SampleBuffer};
///
/// struct Invert;
///
/// impl Effect for Invert {
///     fn id(&self) -> &'static str {
///         "invert"
///     }
///
///     fn apply(&self, buffer: &SampleBuffer, _params: &ParameterSet) -> Result<SampleBuffer> {
///         let mut out = buffer.clone();
///         out.scale(-1.0);
///         Ok(out)
///     }
/// }
///
/// let input = SampleBuffer::from_mono(vec![0.5; 4], 44100).unwrap();
/// let output = Invert.apply(&input, &ParameterSet::default()).unwrap();
/// assert_eq!(output.left()[0], -0.5);
/// ```
pub trait Effect: Send + Sync {
    /// Stable identifier, e.g. `"8d_rotate"`.
    fn id(&self) -> &'static str;

    /// Human-readable name used for progress reporting.
    ///
    /// Defaults to [`id`](Self::id).
    fn display_name(&self) -> &'static str {
        self.id()
    }

    /// Parameters this effect reads. Keys not listed here are ignored.
    fn params(&self) -> &'static [ParamKey] {
        &[]
    }

    /// Transform `buffer` and return the result.
    ///
    /// The output must have the same frame count and sample rate as the input.
    fn apply(&self, buffer: &SampleBuffer, params: &ParameterSet) -> Result<SampleBuffer>;
}

impl<E: Effect + ?Sized> Effect for Box<E> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn display_name(&self) -> &'static str {
        (**self).display_name()
    }

    fn params(&self) -> &'static [ParamKey] {
        (**self).params()
    }

    fn apply(&self, buffer: &SampleBuffer, params: &ParameterSet) -> Result<SampleBuffer> {
        (**self).apply(buffer, params)
    }
}

impl<E: Effect + ?Sized> Effect for std::sync::Arc<E> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn display_name(&self) -> &'static str {
        (**self).display_name()
    }

    fn params(&self) -> &'static [ParamKey] {
        (**self).params()
    }

    fn apply(&self, buffer: &SampleBuffer, params: &ParameterSet) -> Result<SampleBuffer> {
        (**self).apply(buffer, params)
    }
}
