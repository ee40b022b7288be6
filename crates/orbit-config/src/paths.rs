//! Platform-specific preset directories.
//!
//! - Linux: `~/.config/orbit/presets/`
//! - macOS: `~/Library/Application Support/orbit/presets/`
//! - Windows: `%APPDATA%\orbit\presets\`

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Application name used for directory paths.
const APP_NAME: &str = "orbit";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user-specific presets directory.
///
/// Falls back to `./orbit/presets` if the config directory cannot be
/// determined.
pub fn user_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// Ensure the user presets directory exists and return it.
pub fn ensure_user_presets_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_presets_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// Find a preset file by path or by name.
///
/// `name` may be a path to an existing file, or a preset name (with or
/// without `.toml`) looked up in the user presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let user_path = user_presets_dir().join(filename);
    user_path.is_file().then_some(user_path)
}

/// List preset files in the user presets directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

/// List `.toml` files in `dir`, sorted by path.
pub fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    presets.sort();
    presets
}

/// Get the preset name from a file path (the file stem).
///
/// ```rust
/// use orbit_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/path/to/night_drive.toml"));
/// assert_eq!(name.as_deref(), Some("night_drive"));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}
