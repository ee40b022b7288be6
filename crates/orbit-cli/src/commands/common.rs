//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::Args;
use indicatif::ProgressStyle;
use orbit_config::{Preset, resolve_preset};
use orbit_core::{ParamKey, ParameterSet};
use orbit_effects::EffectChain;
use orbit_io::BitDepth;

/// Effect selection and parameter flags shared by `convert`, `batch` and
/// `presets save`.
///
/// Flags override values from `--preset`.
#[derive(Args, Debug, Clone, Default)]
pub struct EffectArgs {
    /// Preset name or path to a preset TOML file
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Comma-separated effect ids, e.g. "8d_rotate,reverb"
    #[arg(short, long, value_delimiter = ',')]
    pub effects: Option<Vec<String>>,

    /// Rotation speed in Hz (0.01-2.0)
    #[arg(long)]
    pub speed: Option<f32>,

    /// Rotation depth (0-1)
    #[arg(long)]
    pub depth: Option<f32>,

    /// Reverb room size (0-1)
    #[arg(long)]
    pub room: Option<f32>,

    /// Reverb wet level (0-1)
    #[arg(long)]
    pub wet: Option<f32>,

    /// Reverb damping (0-1)
    #[arg(long)]
    pub damping: Option<f32>,

    /// Stereo widening amount (0-1)
    #[arg(long)]
    pub width: Option<f32>,

    /// Vinyl warmth amount (0-1)
    #[arg(long)]
    pub warmth: Option<f32>,

    /// Start of the kept window in seconds
    #[arg(long)]
    pub trim_start: Option<f32>,

    /// End of the kept window in seconds (0 = end of file)
    #[arg(long)]
    pub trim_end: Option<f32>,

    /// Any parameter by name, e.g. "room_size=0.7"
    #[arg(long = "set", value_parser = parse_key_val, number_of_values = 1)]
    pub set: Vec<(String, String)>,
}

impl EffectArgs {
    fn flag_values(&self) -> [(ParamKey, Option<f32>); 9] {
        [
            (ParamKey::PanSpeed, self.speed),
            (ParamKey::PanDepth, self.depth),
            (ParamKey::RoomSize, self.room),
            (ParamKey::WetLevel, self.wet),
            (ParamKey::Damping, self.damping),
            (ParamKey::StereoWidth, self.width),
            (ParamKey::VinylWarmth, self.warmth),
            (ParamKey::TrimStart, self.trim_start),
            (ParamKey::TrimEnd, self.trim_end),
        ]
    }

    /// Build the preset these flags describe.
    ///
    /// Starts from `--preset` (or the default chain) and layers `--effects`,
    /// `--set` and the named flags on top. The result is validated, so bad
    /// values are reported before any audio is read.
    pub fn to_preset(&self, name: &str) -> anyhow::Result<Preset> {
        let mut preset = match &self.preset {
            Some(preset_name) => resolve_preset(preset_name)?,
            None => Preset::new(name),
        };

        if let Some(effects) = &self.effects {
            preset.effects.clone_from(effects);
        }

        let mut overrides = ParameterSet::default();
        for (key, value) in &self.set {
            overrides
                .set_named(key, value)
                .with_context(|| format!("invalid --set {key}={value}"))?;
        }
        for (key, value) in self.flag_values() {
            if let Some(value) = value {
                overrides.set(key, value);
            }
        }
        preset.params = preset.params.merged(&overrides);

        preset.validate()?;
        Ok(preset)
    }

    /// Resolve the chain and parameters to run.
    pub fn resolve(&self) -> anyhow::Result<(EffectChain, ParameterSet)> {
        let preset = self.to_preset("command-line")?;
        let chain = preset.chain()?;
        tracing::debug!(preset = %preset.name, effects = ?chain.ids(), "resolved chain");
        Ok((chain, preset.params))
    }
}

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) => Ok((key.trim().to_string(), value.trim().to_string())),
        None => Err(format!(
            "Invalid parameter format: '{s}' (expected key=value)"
        )),
    }
}

/// Parse `--bit-depth` for clap.
pub fn parse_bit_depth(s: &str) -> Result<BitDepth, String> {
    let bits: u16 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a bit depth (use 16, 24 or 32)"))?;
    BitDepth::try_from(bits).map_err(|e| e.to_string())
}

/// Bar style for per-effect progress.
pub fn stage_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{prefix:>12} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_parsing() {
        assert_eq!(
            parse_key_val("room_size = 0.7").unwrap(),
            ("room_size".to_string(), "0.7".to_string())
        );
        assert!(parse_key_val("room_size").is_err());
    }

    #[test]
    fn bit_depth_parsing() {
        assert_eq!(parse_bit_depth("24").unwrap(), BitDepth::Int24);
        assert!(parse_bit_depth("8").is_err());
        assert!(parse_bit_depth("loud").is_err());
    }

    #[test]
    fn flags_override_preset() {
        let args = EffectArgs {
            preset: Some("subtle".into()),
            wet: Some(0.5),
            ..EffectArgs::default()
        };
        let preset = args.to_preset("x").unwrap();
        assert_eq!(preset.params.wet_level(), 0.5);
        assert_eq!(preset.name, "subtle");
    }

    #[test]
    fn set_and_effects_flags() {
        let args = EffectArgs {
            effects: Some(vec!["vinyl_warmth".into()]),
            set: vec![("vinyl_warmth".into(), "0.9".into())],
            ..EffectArgs::default()
        };
        let (chain, params) = args.resolve().unwrap();
        assert_eq!(chain.ids(), ["vinyl_warmth"]);
        assert_eq!(params.vinyl_warmth(), 0.9);
    }

    #[test]
    fn out_of_range_flag_is_rejected() {
        let args = EffectArgs {
            speed: Some(5.0),
            ..EffectArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(format!("{err:#}").contains("pan_speed"), "{err:#}");
    }

    #[test]
    fn unknown_effect_is_rejected() {
        let args = EffectArgs {
            effects: Some(vec!["8d_rotate".into(), "flanger".into()]),
            ..EffectArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
