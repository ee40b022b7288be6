//! Effect chain and executor.
//!
//! An [`EffectChain`] is an ordered list of effects resolved from identifiers
//! up front. [`run_chain`] drives a buffer through the fixed pipeline:
//!
//! ```text
//! Idle → Loaded → Trimming? → Applying(0..n) → Normalizing → Done
//!                                   └──────────── any error ──→ Failed
//! ```
//!
//! Parameters are validated before the first stage runs. After each effect
//! the observer receives `(stage_index, total_stages, display_name)` with a
//! 1-based index, synchronously, before the next effect starts. The first
//! error aborts the chain and no partial buffer is returned.
//!
//! # Example
//!
//! ```rust
//! use orbit_core::{ParameterSet, SampleBuffer};
//! use orbit_effects::{EffectChain, run_chain};
//!
//! let mono: Vec<f32> = (0..22050).map(|i| (i as f32 * 0.06).sin()).collect();
//! let input = SampleBuffer::from_mono(mono, 44100).unwrap();
//!
//! let chain = EffectChain::from_ids(&["8d_rotate", "reverb"]).unwrap();
//! let mut steps = Vec::new();
//! let mut on_step = |i: usize, n: usize, name: &str| steps.push(format!("{i}/{n} {name}"));
//! let output = run_chain(&input, &chain, &ParameterSet::default(), &mut on_step).unwrap();
//!
//! assert_eq!(output.len(), input.len());
//! assert_eq!(steps, ["1/2 8D Rotation", "2/2 Reverb"]);
//! ```

use std::fmt;

use orbit_core::{Effect, Error, ParameterSet, Result, SampleBuffer, ValidationError};

use crate::normalize::normalize;
use crate::registry::EffectKind;
use crate::trim::trim;

/// Identifiers used when a request names no effects.
pub const DEFAULT_EFFECTS: [&str; 2] = ["8d_rotate", "reverb"];

/// An ordered, non-empty sequence of effects.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectChain {
    effects: Vec<EffectKind>,
}

impl EffectChain {
    /// Resolve a list of identifiers against the built-in whitelist.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyChain`] for an empty list,
    /// [`ValidationError::UnknownEffect`] for the first unrecognized (or
    /// blank) identifier.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> std::result::Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::EmptyChain);
        }
        let effects = ids
            .iter()
            .map(|id| EffectKind::from_id(id.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { effects })
    }

    /// Build a chain from already-resolved effects.
    pub fn from_effects(effects: Vec<EffectKind>) -> std::result::Result<Self, ValidationError> {
        if effects.is_empty() {
            return Err(ValidationError::EmptyChain);
        }
        Ok(Self { effects })
    }

    /// Append an effect.
    pub fn push(&mut self, effect: EffectKind) {
        self.effects.push(effect);
    }

    /// Number of effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Always false for a chain built through the constructors.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Effects in execution order.
    pub fn effects(&self) -> &[EffectKind] {
        &self.effects
    }

    /// Effect identifiers in execution order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.effects.iter().map(Effect::id).collect()
    }
}

impl Default for EffectChain {
    /// Rotation followed by reverb.
    fn default() -> Self {
        Self {
            effects: vec![EffectKind::Rotation, EffectKind::Reverb],
        }
    }
}

/// Executor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStage {
    /// Nothing started.
    Idle,
    /// Input accepted and parameters validated.
    Loaded,
    /// Cutting the input to the trim window.
    Trimming,
    /// Running the effect at this 0-based position.
    Applying(usize),
    /// Final peak normalization.
    Normalizing,
    /// Finished; the output buffer is available.
    Done,
    /// Aborted by an error.
    Failed,
}

impl fmt::Display for ChainStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainStage::Idle => f.write_str("idle"),
            ChainStage::Loaded => f.write_str("loaded"),
            ChainStage::Trimming => f.write_str("trimming"),
            ChainStage::Applying(i) => write!(f, "applying[{i}]"),
            ChainStage::Normalizing => f.write_str("normalizing"),
            ChainStage::Done => f.write_str("done"),
            ChainStage::Failed => f.write_str("failed"),
        }
    }
}

/// Receives progress events from [`run_chain`].
///
/// Implemented for any `FnMut(usize, usize, &str)`.
pub trait ProgressObserver {
    /// Called after effect `stage_index` of `total_stages` (1-based) finishes.
    fn on_progress(&mut self, stage_index: usize, total_stages: usize, stage_label: &str);

    /// Called on every state transition. Ignored by default.
    fn on_stage(&mut self, _stage: ChainStage) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, usize, &str),
{
    fn on_progress(&mut self, stage_index: usize, total_stages: usize, stage_label: &str) {
        self(stage_index, total_stages, stage_label);
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _: usize, _: usize, _: &str) {}
}

struct Tracker<'a, O: ProgressObserver + ?Sized> {
    stage: ChainStage,
    observer: &'a mut O,
}

impl<O: ProgressObserver + ?Sized> Tracker<'_, O> {
    fn enter(&mut self, next: ChainStage) {
        tracing::debug!(from = %self.stage, to = %next, "chain stage");
        self.stage = next;
        self.observer.on_stage(next);
    }

    fn fail(&mut self, err: Error) -> Error {
        tracing::debug!(at = %self.stage, error = %err, "chain failed");
        self.enter(ChainStage::Failed);
        err
    }
}

/// Run `buffer` through trim, `chain`, and normalization.
///
/// The input is only borrowed; the result is a new buffer.
///
/// # Errors
///
/// - [`Error::Validation`] if any parameter is out of range. Nothing runs.
/// - [`Error::Processing`] for an empty buffer, a failing effect, or an
///   effect that changes the frame count or sample rate.
pub fn run_chain<O>(
    buffer: &SampleBuffer,
    chain: &EffectChain,
    params: &ParameterSet,
    observer: &mut O,
) -> Result<SampleBuffer>
where
    O: ProgressObserver + ?Sized,
{
    let mut tracker = Tracker {
        stage: ChainStage::Idle,
        observer,
    };

    if let Err(err) = params.validate() {
        return Err(tracker.fail(err.into()));
    }
    if chain.is_empty() {
        return Err(tracker.fail(ValidationError::EmptyChain.into()));
    }
    if buffer.is_empty() {
        return Err(tracker.fail(Error::processing("load", "input buffer has no frames")));
    }
    tracker.enter(ChainStage::Loaded);

    let mut current = if params.has_trim() {
        tracker.enter(ChainStage::Trimming);
        let trimmed = trim(
            buffer,
            f64::from(params.trim_start()),
            f64::from(params.trim_end()),
        );
        if trimmed.is_empty() {
            return Err(tracker.fail(Error::processing("trim", "trim window has no frames")));
        }
        trimmed
    } else {
        buffer.clone()
    };

    let total = chain.len();
    for (i, effect) in chain.effects().iter().enumerate() {
        tracker.enter(ChainStage::Applying(i));
        let output = match effect.apply(&current, params) {
            Ok(output) => output,
            Err(err) => return Err(tracker.fail(err)),
        };
        if !output.same_shape(&current) {
            let reason = format!(
                "changed shape from {} frames @ {} Hz to {} frames @ {} Hz",
                current.len(),
                current.sample_rate(),
                output.len(),
                output.sample_rate()
            );
            return Err(tracker.fail(Error::processing(effect.id(), reason)));
        }
        current = output;
        tracker
            .observer
            .on_progress(i + 1, total, effect.display_name());
    }

    tracker.enter(ChainStage::Normalizing);
    let output = normalize(&current);
    tracker.enter(ChainStage::Done);
    Ok(output)
}
