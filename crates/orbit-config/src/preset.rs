//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use orbit_core::ParameterSet;
use orbit_effects::{DEFAULT_EFFECTS, EffectChain};

use crate::error::ConfigError;

/// A named effect sequence plus parameter values.
///
/// # TOML Format
///
/// ```toml
/// name = "Wide"
/// description = "Rotation with a Haas widener before the room"
/// effects = ["8d_rotate", "stereo_width", "reverb"]
///
/// [params]
/// pan_speed = 0.2
/// stereo_width = 0.6
/// wet_level = 0.25
/// ```
///
/// `effects` defaults to the standard rotation + reverb chain, and every
/// key under `[params]` is optional. Unknown parameter keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Effect identifiers in execution order.
    #[serde(default = "default_effects")]
    pub effects: Vec<String>,

    /// Parameter overrides. Absent keys use the documented defaults.
    #[serde(default)]
    pub params: ParameterSet,
}

fn default_effects() -> Vec<String> {
    DEFAULT_EFFECTS.iter().map(ToString::to_string).collect()
}

impl Preset {
    /// Create a preset with the default chain and default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            effects: default_effects(),
            params: ParameterSet::default(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the effect sequence.
    pub fn with_effects<I, S>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.effects = effects.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the parameter set.
    pub fn with_params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    /// Load and validate a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(name = %preset.name, path = %path.display(), "loaded preset");
        Ok(preset)
    }

    /// Parse and validate a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let preset: Preset = toml::from_str(toml_str)?;
        preset.validate()?;
        Ok(preset)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check effect identifiers and parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chain()?;
        self.params
            .validate()
            .map_err(|e| ConfigError::invalid(&self.name, e))
    }

    /// Resolve the effect sequence into a runnable chain.
    pub fn chain(&self) -> Result<EffectChain, ConfigError> {
        EffectChain::from_ids(&self.effects).map_err(|e| ConfigError::invalid(&self.name, e))
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::ValidationError;

    #[test]
    fn test_preset_new() {
        let preset = Preset::new("Test Preset");
        assert_eq!(preset.name, "Test Preset");
        assert!(preset.description.is_none());
        assert_eq!(preset.effects, ["8d_rotate", "reverb"]);
        assert_eq!(preset.params, ParameterSet::default());
    }

    #[test]
    fn test_preset_builder() {
        let preset = Preset::new("Wide")
            .with_description("A wide one")
            .with_effects(["8d_rotate", "stereo_width"])
            .with_params(ParameterSet::default().with_stereo_width(0.8));

        assert_eq!(preset.description.as_deref(), Some("A wide one"));
        assert_eq!(preset.chain().unwrap().ids(), ["8d_rotate", "stereo_width"]);
        assert_eq!(preset.params.stereo_width(), 0.8);
    }

    #[test]
    fn test_from_toml_minimal() {
        let preset = Preset::from_toml("name = \"Bare\"").unwrap();
        assert_eq!(preset.effects, ["8d_rotate", "reverb"]);
        assert_eq!(preset.params, ParameterSet::default());
    }

    #[test]
    fn test_from_toml_full() {
        let toml_str = r#"
name = "Vinyl"
description = "Warm and round"
effects = ["vinyl_warmth", "8d_rotate", "reverb"]

[params]
vinyl_warmth = 0.6
pan_speed = 0.1
"#;
        let preset = Preset::from_toml(toml_str).unwrap();
        assert_eq!(preset.name, "Vinyl");
        assert_eq!(preset.effects.len(), 3);
        assert_eq!(preset.params.vinyl_warmth(), 0.6);
        assert_eq!(preset.params.pan_speed(), 0.1);
        assert_eq!(preset.params.room_size(), 0.4);
    }

    #[test]
    fn test_unknown_effect_rejected() {
        let err = Preset::from_toml("name = \"x\"\neffects = [\"chorus\"]").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                source: ValidationError::UnknownEffect(ref id),
                ..
            } if id == "chorus"
        ));
    }

    #[test]
    fn test_empty_effects_rejected() {
        let err = Preset::from_toml("name = \"x\"\neffects = []").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                source: ValidationError::EmptyChain,
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_param_rejected() {
        let err = Preset::from_toml("name = \"x\"\n[params]\nwet_level = 2.0").unwrap_err();
        assert!(err.to_string().contains("wet_level"), "got: {err}");
    }

    #[test]
    fn test_unknown_param_rejected() {
        let err = Preset::from_toml("name = \"x\"\n[params]\nfeedback = 0.5").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let preset = Preset::new("Round Trip")
            .with_description("desc")
            .with_effects(["stereo_width", "reverb"])
            .with_params(ParameterSet::default().with_room_size(0.9).with_trim_end(30.0));
        let toml_str = preset.to_toml().unwrap();
        assert!(toml_str.contains("[params]"));
        assert_eq!(Preset::from_toml(&toml_str).unwrap(), preset);
    }
}
