//! Orbit Core - shared types and DSP primitives for the 8D audio pipeline
//!
//! This crate provides the building blocks every pipeline stage depends on.
//! It performs no file or network I/O: the input is a decoded
//! [`SampleBuffer`] and the output is another one.
//!
//! # Core Abstractions
//!
//! - [`SampleBuffer`] - Planar stereo `f32` buffer plus its sample rate
//! - [`ParameterSet`] - Typed, validated effect knobs with documented defaults
//! - [`Effect`] - Object-safe trait implemented by every transformation
//! - [`Error`] / [`ValidationError`] - Error taxonomy shared by all stages
//!
//! ## Filters
//!
//! - [`CombFilter`] - Damped feedback comb for reverb algorithms
//! - [`AllpassFilter`] - Schroeder allpass for diffusion
//! - [`OnePole`] - RC lowpass applied as a sequential scan
//!
//! ## Utilities
//!
//! - [`constant_power_gains`], [`ms_to_samples`], [`pearson_correlation`],
//!   [`flush_denormal`]
//!
//! # Example
//!
//! ```rust
//! use orbit_core::{ParameterSet, SampleBuffer};
//!
//! let buffer = SampleBuffer::from_mono(vec![0.0; 44100], 44100).unwrap();
//! let params = ParameterSet::default().with_pan_speed(0.2);
//! params.validate().unwrap();
//! assert_eq!(buffer.duration_secs(), 1.0);
//! ```

pub mod allpass;
pub mod buffer;
pub mod comb;
pub mod effect;
pub mod error;
pub mod math;
pub mod one_pole;
pub mod params;

pub use allpass::AllpassFilter;
pub use buffer::SampleBuffer;
pub use comb::CombFilter;
pub use effect::Effect;
pub use error::{Error, Result, ValidationError};
pub use math::{constant_power_gains, flush_denormal, ms_to_samples, pearson_correlation};
pub use one_pole::OnePole;
pub use params::{ParamDescriptor, ParamKey, ParamUnit, ParameterSet};
