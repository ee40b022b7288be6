//! Factory presets bundled with the library.
//!
//! Always available without any files on disk. Each one is embedded as TOML
//! and parsed on demand, so it goes through the same validation as a user
//! preset.

use crate::Preset;

/// Names of all factory presets.
pub static FACTORY_PRESET_NAMES: &[&str] = &["classic", "wide", "vinyl", "subtle"];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("classic", CLASSIC_PRESET),
    ("wide", WIDE_PRESET),
    ("vinyl", VINYL_PRESET),
    ("subtle", SUBTLE_PRESET),
];

/// Default chain with default parameters.
const CLASSIC_PRESET: &str = r#"
name = "classic"
description = "Full 8D rotation into a medium room"
effects = ["8d_rotate", "reverb"]
"#;

const WIDE_PRESET: &str = r#"
name = "wide"
description = "Rotation plus a Haas widener before the room"
effects = ["8d_rotate", "stereo_width", "reverb"]

[params]
pan_speed = 0.2
stereo_width = 0.7
room_size = 0.5
wet_level = 0.25
"#;

const VINYL_PRESET: &str = r#"
name = "vinyl"
description = "Warm, saturated record sound circling the listener"
effects = ["vinyl_warmth", "8d_rotate", "stereo_width", "reverb"]

[params]
vinyl_warmth = 0.6
pan_speed = 0.12
stereo_width = 0.4
room_size = 0.35
damping = 0.7
"#;

const SUBTLE_PRESET: &str = r#"
name = "subtle"
description = "Slow, shallow movement with a light room"
effects = ["8d_rotate", "reverb"]

[params]
pan_speed = 0.08
pan_depth = 0.5
room_size = 0.3
wet_level = 0.15
"#;

/// Get a factory preset by name (case-insensitive).
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    let name = name.trim();
    FACTORY_PRESETS_TOML
        .iter()
        .find(|(preset_name, _)| preset_name.eq_ignore_ascii_case(name))
        .and_then(|(_, toml_str)| match Preset::from_toml(toml_str) {
            Ok(preset) => Some(preset),
            Err(e) => {
                tracing::error!(name, error = %e, "factory preset failed to parse");
                None
            }
        })
}

/// All factory presets.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESET_NAMES
        .iter()
        .filter_map(|name| get_factory_preset(name))
        .collect()
}

/// Returns `true` if `name` is a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    FACTORY_PRESET_NAMES
        .iter()
        .any(|n| n.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::ParameterSet;

    #[test]
    fn test_all_factory_presets_parse() {
        for name in FACTORY_PRESET_NAMES {
            let preset = get_factory_preset(name).unwrap_or_else(|| panic!("{name} failed"));
            assert_eq!(preset.name, *name);
            assert!(preset.description.is_some());
            preset.validate().unwrap();
        }
        assert_eq!(factory_presets().len(), FACTORY_PRESET_NAMES.len());
    }

    #[test]
    fn test_classic_is_default_chain() {
        let classic = get_factory_preset("classic").unwrap();
        assert_eq!(classic.effects, ["8d_rotate", "reverb"]);
        assert_eq!(classic.params, ParameterSet::default());
    }

    #[test]
    fn test_vinyl_uses_all_effects() {
        let vinyl = get_factory_preset("vinyl").unwrap();
        for id in orbit_effects::EffectKind::builtin_ids() {
            assert!(vinyl.effects.iter().any(|e| e == id), "missing {id}");
        }
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert!(get_factory_preset("WIDE").is_some());
        assert!(is_factory_preset(" Subtle "));
        assert!(!is_factory_preset("nonexistent"));
        assert!(get_factory_preset("nonexistent").is_none());
    }
}
