//! Orbit Effects - the 8D audio effect library
//!
//! Offline, whole-buffer effects built on [`orbit_core`] primitives, plus
//! the chain executor that strings them together.
//!
//! # Effects
//!
//! | Id             | Type            | Parameters                             |
//! |----------------|-----------------|----------------------------------------|
//! | `8d_rotate`    | [`Rotation`]    | `pan_speed`, `pan_depth`               |
//! | `reverb`       | [`Reverb`]      | `room_size`, `wet_level`, `damping`    |
//! | `stereo_width` | [`StereoWidth`] | `stereo_width`                         |
//! | `vinyl_warmth` | [`VinylWarmth`] | `vinyl_warmth`                         |
//!
//! [`trim`] and [`normalize`] are not effects in the chain sense: the
//! executor runs trimming before the chain and normalization after it.
//!
//! # Example
//!
//! ```rust
//! use orbit_core::{ParameterSet, SampleBuffer};
//! use orbit_effects::{EffectChain, NoProgress, run_chain};
//!
//! let input = SampleBuffer::from_mono(vec![0.25; 4410], 44100).unwrap();
//! let params = ParameterSet::default().with_wet_level(0.2);
//!
//! let output = run_chain(&input, &EffectChain::default(), &params, &mut NoProgress).unwrap();
//! assert!((output.peak() - 0.99).abs() < 1e-4);
//! ```

pub mod chain;
pub mod normalize;
pub mod registry;
pub mod reverb;
pub mod rotation;
pub mod stereo_width;
pub mod trim;
pub mod vinyl_warmth;

pub use chain::{ChainStage, DEFAULT_EFFECTS, EffectChain, NoProgress, ProgressObserver, run_chain};
pub use normalize::{TARGET_PEAK, normalize};
pub use registry::{EffectCategory, EffectDescriptor, EffectKind};
pub use reverb::Reverb;
pub use rotation::Rotation;
pub use stereo_width::StereoWidth;
pub use trim::trim;
pub use vinyl_warmth::VinylWarmth;
