//! Preset management for the orbit 8D audio pipeline.
//!
//! A preset is a TOML file naming an effect sequence and a set of parameter
//! values. Presets are validated on load, so a preset that parses is always
//! runnable.
//!
//! # Features
//!
//! - **Preset files**: load and save [`Preset`] TOML files
//! - **Factory presets**: `classic`, `wide`, `vinyl`, `subtle`
//! - **Paths**: platform-specific user preset directory
//!
//! # Example
//!
//! ```rust
//! use orbit_config::{get_factory_preset, Preset};
//!
//! let wide = get_factory_preset("wide").unwrap();
//! let chain = wide.chain().unwrap();
//! assert_eq!(chain.len(), 3);
//!
//! let custom = Preset::from_toml("name = \"mine\"\n[params]\npan_speed = 0.3").unwrap();
//! assert_eq!(custom.params.pan_speed(), 0.3);
//! ```

mod error;
mod preset;

/// Factory presets bundled with the library.
pub mod factory_presets;

/// Platform-specific paths for presets.
pub mod paths;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_presets, get_factory_preset, is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset, list_user_presets, preset_name_from_path,
    user_presets_dir,
};
pub use preset::Preset;

/// Resolve a preset by factory name, file path or user preset name.
///
/// Factory presets win over user presets of the same name.
pub fn resolve_preset(name: &str) -> Result<Preset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }
    match find_preset(name) {
        Some(path) => Preset::load(path),
        None => Err(ConfigError::PresetNotFound(name.to_string())),
    }
}
