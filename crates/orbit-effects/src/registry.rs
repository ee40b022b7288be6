//! Effect registry: the whitelist of built-in effects.
//!
//! [`EffectKind`] is the closed set of effects a request may name. Looking
//! an identifier up here is the only way a string turns into an effect, so
//! an unknown name is rejected before any audio is touched.

use std::fmt;
use std::sync::Arc;

use orbit_core::{Effect, ParamKey, ParameterSet, Result, SampleBuffer, ValidationError};

use crate::{Reverb, Rotation, StereoWidth, VinylWarmth};

/// Category of effect for organization and listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectCategory {
    /// Placement of the source in the stereo field
    Spatial,
    /// Room simulation
    Ambience,
    /// Tonal coloration and saturation
    Color,
}

impl EffectCategory {
    /// Returns a human-readable name for the category.
    pub const fn name(&self) -> &'static str {
        match self {
            EffectCategory::Spatial => "Spatial",
            EffectCategory::Ambience => "Ambience",
            EffectCategory::Color => "Color",
        }
    }
}

/// Describes a built-in effect.
#[derive(Debug, Clone)]
pub struct EffectDescriptor {
    /// Stable identifier used in requests and presets.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description of the effect.
    pub description: &'static str,
    /// Category for organization.
    pub category: EffectCategory,
    /// Parameters the effect reads.
    pub params: &'static [ParamKey],
}

/// A built-in effect, or a caller-supplied one.
///
/// # Example
///
/// ```rust
/// use orbit_core::Effect;
/// use orbit_effects::EffectKind;
///
/// let kind = EffectKind::from_id("8d_rotate").unwrap();
/// assert_eq!(kind.display_name(), "8D Rotation");
/// assert!(EffectKind::from_id("chorus").is_err());
/// ```
#[derive(Clone)]
pub enum EffectKind {
    /// `8d_rotate`
    Rotation,
    /// `reverb`
    Reverb,
    /// `stereo_width`
    StereoWidth,
    /// `vinyl_warmth`
    VinylWarmth,
    /// Any other [`Effect`] implementation.
    Custom(Arc<dyn Effect>),
}

impl EffectKind {
    /// Built-in effects in listing order.
    pub const BUILTIN: [EffectKind; 4] = [
        EffectKind::Rotation,
        EffectKind::Reverb,
        EffectKind::StereoWidth,
        EffectKind::VinylWarmth,
    ];

    /// Look up a built-in effect by identifier.
    pub fn from_id(id: &str) -> std::result::Result<Self, ValidationError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValidationError::UnknownEffect(String::new()));
        }
        Self::BUILTIN
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| ValidationError::UnknownEffect(id.to_string()))
    }

    /// Wrap a caller-supplied effect.
    pub fn custom(effect: impl Effect + 'static) -> Self {
        EffectKind::Custom(Arc::new(effect))
    }

    /// Identifiers of all built-in effects.
    pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
        Self::BUILTIN.into_iter().map(|kind| kind.id())
    }

    /// Metadata for listings. `None` for custom effects.
    pub fn descriptor(&self) -> Option<EffectDescriptor> {
        let (description, category) = match self {
            EffectKind::Rotation => (
                "Sinusoidal auto-pan that sweeps the source around the listener",
                EffectCategory::Spatial,
            ),
            EffectKind::Reverb => (
                "Algorithmic room reverb with adjustable size and damping",
                EffectCategory::Ambience,
            ),
            EffectKind::StereoWidth => (
                "Haas-effect widener that delays the right channel up to 20 ms",
                EffectCategory::Spatial,
            ),
            EffectKind::VinylWarmth => (
                "Low-pass roll-off with tanh saturation",
                EffectCategory::Color,
            ),
            EffectKind::Custom(_) => return None,
        };
        Some(EffectDescriptor {
            id: self.id(),
            name: self.display_name(),
            description,
            category,
            params: self.params(),
        })
    }

    fn as_effect(&self) -> &dyn Effect {
        match self {
            EffectKind::Rotation => &Rotation,
            EffectKind::Reverb => &Reverb,
            EffectKind::StereoWidth => &StereoWidth,
            EffectKind::VinylWarmth => &VinylWarmth,
            EffectKind::Custom(effect) => effect.as_ref(),
        }
    }
}

impl Effect for EffectKind {
    fn id(&self) -> &'static str {
        self.as_effect().id()
    }

    fn display_name(&self) -> &'static str {
        self.as_effect().display_name()
    }

    fn params(&self) -> &'static [ParamKey] {
        self.as_effect().params()
    }

    fn apply(&self, buffer: &SampleBuffer, params: &ParameterSet) -> Result<SampleBuffer> {
        self.as_effect().apply(buffer, params)
    }
}

impl fmt::Debug for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectKind::Custom(effect) => f.debug_tuple("Custom").field(&effect.id()).finish(),
            _ => f.write_str(self.id()),
        }
    }
}

impl PartialEq for EffectKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EffectKind::Custom(a), EffectKind::Custom(b)) => Arc::ptr_eq(a, b),
            (EffectKind::Custom(_), _) | (_, EffectKind::Custom(_)) => false,
            _ => self.id() == other.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_all_builtins() {
        for id in ["8d_rotate", "reverb", "stereo_width", "vinyl_warmth"] {
            let kind = EffectKind::from_id(id).unwrap();
            assert_eq!(kind.id(), id);
        }
    }

    #[test]
    fn test_display_names() {
        let names: Vec<_> = EffectKind::BUILTIN.iter().map(|k| k.display_name()).collect();
        assert_eq!(names, ["8D Rotation", "Reverb", "Stereo Width", "Vinyl Warmth"]);
    }

    #[test]
    fn test_unknown_and_empty_rejected() {
        assert_eq!(
            EffectKind::from_id("flanger"),
            Err(ValidationError::UnknownEffect("flanger".into()))
        );
        assert!(EffectKind::from_id("").is_err());
        assert!(EffectKind::from_id("   ").is_err());
        assert!(EffectKind::from_id("Reverb").is_err());
    }

    #[test]
    fn test_descriptors() {
        for kind in EffectKind::BUILTIN {
            let desc = kind.descriptor().unwrap();
            assert_eq!(desc.id, kind.id());
            assert!(!desc.description.is_empty());
            assert!(!desc.params.is_empty());
        }
        let reverb = EffectKind::Reverb.descriptor().unwrap();
        assert_eq!(reverb.category, EffectCategory::Ambience);
        assert_eq!(
            reverb.params,
            [ParamKey::RoomSize, ParamKey::WetLevel, ParamKey::Damping]
        );
    }

    #[test]
    fn test_custom_effect() {
        struct Mute;
        impl Effect for Mute {
            fn id(&self) -> &'static str {
                "mute"
            }
            fn apply(&self, buffer: &SampleBuffer, _: &ParameterSet) -> Result<SampleBuffer> {
                SampleBuffer::silence(buffer.len(), buffer.sample_rate())
            }
        }

        let kind = EffectKind::custom(Mute);
        assert_eq!(kind.id(), "mute");
        assert_eq!(kind.display_name(), "mute");
        assert!(kind.descriptor().is_none());
        assert_eq!(kind, kind.clone());
        assert_ne!(kind, EffectKind::Reverb);

        let input = SampleBuffer::from_mono(vec![1.0; 8], 44100).unwrap();
        let output = kind.apply(&input, &ParameterSet::default()).unwrap();
        assert_eq!(output.peak(), 0.0);
    }
}
