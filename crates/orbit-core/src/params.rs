//! Named effect parameters with documented ranges and defaults.
//!
//! A [`ParameterSet`] is built once per conversion and read by every effect
//! through typed accessors. Absent fields resolve to the defaults in the
//! [`ParamKey`] table, so effects never see a missing knob.
//!
//! | Key            | Range          | Default | Unit    |
//! |----------------|----------------|---------|---------|
//! | `pan_speed`    | 0.01 – 2.0     | 0.15    | Hz      |
//! | `pan_depth`    | 0.0 – 1.0      | 1.0     |         |
//! | `room_size`    | 0.0 – 1.0      | 0.4     |         |
//! | `wet_level`    | 0.0 – 1.0      | 0.3     |         |
//! | `damping`      | 0.0 – 1.0      | 0.5     |         |
//! | `stereo_width` | 0.0 – 1.0      | 0.5     |         |
//! | `vinyl_warmth` | 0.0 – 1.0      | 0.3     |         |
//! | `trim_start`   | ≥ 0            | 0.0     | seconds |
//! | `trim_end`     | ≥ 0 (0 = end)  | 0.0     | seconds |

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unit label for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Dimensionless 0–1 amount.
    Amount,
    /// Frequency in Hz.
    Hertz,
    /// Time in seconds.
    Seconds,
}

impl ParamUnit {
    /// Short suffix for display (`""`, `"Hz"`, `"s"`).
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Amount => "",
            ParamUnit::Hertz => "Hz",
            ParamUnit::Seconds => "s",
        }
    }
}

/// Static metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Which parameter this describes.
    pub key: ParamKey,
    /// Human-readable name.
    pub name: &'static str,
    /// Minimum allowed value (inclusive).
    pub min: f32,
    /// Maximum allowed value (inclusive).
    pub max: f32,
    /// Value used when the parameter is absent.
    pub default: f32,
    /// Display unit.
    pub unit: ParamUnit,
}

/// Every parameter understood by the built-in effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// Rotation oscillator frequency.
    PanSpeed,
    /// Rotation sweep intensity.
    PanDepth,
    /// Reverb room size.
    RoomSize,
    /// Reverb wet mix; dry is `1 - wet_level`.
    WetLevel,
    /// Reverb high-frequency damping.
    Damping,
    /// Haas delay amount.
    StereoWidth,
    /// Low-pass plus saturation amount.
    VinylWarmth,
    /// Trim window start.
    TrimStart,
    /// Trim window end (0 = end of buffer).
    TrimEnd,
}

impl ParamKey {
    /// All keys in display order.
    pub const ALL: [ParamKey; 9] = [
        ParamKey::PanSpeed,
        ParamKey::PanDepth,
        ParamKey::RoomSize,
        ParamKey::WetLevel,
        ParamKey::Damping,
        ParamKey::StereoWidth,
        ParamKey::VinylWarmth,
        ParamKey::TrimStart,
        ParamKey::TrimEnd,
    ];

    /// Stable snake_case identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParamKey::PanSpeed => "pan_speed",
            ParamKey::PanDepth => "pan_depth",
            ParamKey::RoomSize => "room_size",
            ParamKey::WetLevel => "wet_level",
            ParamKey::Damping => "damping",
            ParamKey::StereoWidth => "stereo_width",
            ParamKey::VinylWarmth => "vinyl_warmth",
            ParamKey::TrimStart => "trim_start",
            ParamKey::TrimEnd => "trim_end",
        }
    }

    /// Look up a key by its identifier.
    ///
    /// Accepts the snake_case id and the kebab-case spelling used on the
    /// command line.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|k| k.as_str() == normalized)
    }

    /// Range, default and display metadata.
    pub const fn descriptor(&self) -> ParamDescriptor {
        let (name, min, max, default, unit) = match self {
            ParamKey::PanSpeed => ("Pan Speed", 0.01, 2.0, 0.15, ParamUnit::Hertz),
            ParamKey::PanDepth => ("Pan Depth", 0.0, 1.0, 1.0, ParamUnit::Amount),
            ParamKey::RoomSize => ("Room Size", 0.0, 1.0, 0.4, ParamUnit::Amount),
            ParamKey::WetLevel => ("Wet Level", 0.0, 1.0, 0.3, ParamUnit::Amount),
            ParamKey::Damping => ("Damping", 0.0, 1.0, 0.5, ParamUnit::Amount),
            ParamKey::StereoWidth => ("Stereo Width", 0.0, 1.0, 0.5, ParamUnit::Amount),
            ParamKey::VinylWarmth => ("Vinyl Warmth", 0.0, 1.0, 0.3, ParamUnit::Amount),
            ParamKey::TrimStart => ("Trim Start", 0.0, f32::INFINITY, 0.0, ParamUnit::Seconds),
            ParamKey::TrimEnd => ("Trim End", 0.0, f32::INFINITY, 0.0, ParamUnit::Seconds),
        };
        ParamDescriptor {
            key: *self,
            name,
            min,
            max,
            default,
            unit,
        }
    }

    /// Check `value` against this key's range.
    pub fn check(&self, value: f32) -> Result<f32, ValidationError> {
        let desc = self.descriptor();
        if !value.is_finite() {
            return Err(ValidationError::NotFinite {
                param: self.as_str(),
                value,
            });
        }
        if value < desc.min || value > desc.max {
            return Err(ValidationError::OutOfRange {
                param: self.as_str(),
                value,
                min: desc.min,
                max: desc.max,
            });
        }
        Ok(value)
    }
}

impl core::fmt::Display for ParamKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated bag of effect knobs.
///
/// Fields left as `None` fall back to the documented defaults. Constructed
/// once per request; effects only read it.
///
/// # Example
///
/// ```rust
/// use orbit_core::ParameterSet;
///
/// let params = ParameterSet::default().with_pan_speed(0.25).with_wet_level(0.4);
/// params.validate().unwrap();
/// assert_eq!(params.pan_speed(), 0.25);
/// assert_eq!(params.room_size(), 0.4); // default
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterSet {
    /// Rotation speed in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_speed: Option<f32>,
    /// Rotation depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_depth: Option<f32>,
    /// Reverb room size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_size: Option<f32>,
    /// Reverb wet level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wet_level: Option<f32>,
    /// Reverb damping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,
    /// Haas widening amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stereo_width: Option<f32>,
    /// Vinyl warmth amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vinyl_warmth: Option<f32>,
    /// Trim start in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_start: Option<f32>,
    /// Trim end in seconds (0 = end of buffer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_end: Option<f32>,
}

macro_rules! param_accessors {
    ($($field:ident, $with:ident, $key:expr;)*) => {
        $(
            #[doc = concat!("Resolved `", stringify!($field), "` (default applied).")]
            pub fn $field(&self) -> f32 {
                self.$field.unwrap_or($key.descriptor().default)
            }

            #[doc = concat!("Builder: set `", stringify!($field), "`.")]
            pub fn $with(mut self, value: f32) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl ParameterSet {
    param_accessors! {
        pan_speed, with_pan_speed, ParamKey::PanSpeed;
        pan_depth, with_pan_depth, ParamKey::PanDepth;
        room_size, with_room_size, ParamKey::RoomSize;
        wet_level, with_wet_level, ParamKey::WetLevel;
        damping, with_damping, ParamKey::Damping;
        stereo_width, with_stereo_width, ParamKey::StereoWidth;
        vinyl_warmth, with_vinyl_warmth, ParamKey::VinylWarmth;
        trim_start, with_trim_start, ParamKey::TrimStart;
        trim_end, with_trim_end, ParamKey::TrimEnd;
    }

    fn slot(&self, key: ParamKey) -> Option<f32> {
        match key {
            ParamKey::PanSpeed => self.pan_speed,
            ParamKey::PanDepth => self.pan_depth,
            ParamKey::RoomSize => self.room_size,
            ParamKey::WetLevel => self.wet_level,
            ParamKey::Damping => self.damping,
            ParamKey::StereoWidth => self.stereo_width,
            ParamKey::VinylWarmth => self.vinyl_warmth,
            ParamKey::TrimStart => self.trim_start,
            ParamKey::TrimEnd => self.trim_end,
        }
    }

    fn slot_mut(&mut self, key: ParamKey) -> &mut Option<f32> {
        match key {
            ParamKey::PanSpeed => &mut self.pan_speed,
            ParamKey::PanDepth => &mut self.pan_depth,
            ParamKey::RoomSize => &mut self.room_size,
            ParamKey::WetLevel => &mut self.wet_level,
            ParamKey::Damping => &mut self.damping,
            ParamKey::StereoWidth => &mut self.stereo_width,
            ParamKey::VinylWarmth => &mut self.vinyl_warmth,
            ParamKey::TrimStart => &mut self.trim_start,
            ParamKey::TrimEnd => &mut self.trim_end,
        }
    }

    /// Explicitly set value for `key`, if any.
    pub fn get(&self, key: ParamKey) -> Option<f32> {
        self.slot(key)
    }

    /// Resolved value for `key` with the default applied.
    pub fn resolved(&self, key: ParamKey) -> f32 {
        self.slot(key).unwrap_or(key.descriptor().default)
    }

    /// Set a parameter by key.
    pub fn set(&mut self, key: ParamKey, value: f32) {
        *self.slot_mut(key) = Some(value);
    }

    /// Set a parameter from `name` / `value` strings, e.g. CLI `key=value` pairs.
    ///
    /// The value is range-checked immediately.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        let key = ParamKey::parse(name)
            .ok_or_else(|| ValidationError::UnknownParameter(name.to_string()))?;
        let parsed: f32 = value
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidFormat {
                param: key.as_str().to_string(),
                reason: format!("'{value}' is not a number"),
            })?;
        self.set(key, key.check(parsed)?);
        Ok(())
    }

    /// Overlay every explicitly set field of `other` onto `self`.
    pub fn merged(mut self, other: &ParameterSet) -> Self {
        for key in ParamKey::ALL {
            if let Some(value) = other.slot(key) {
                self.set(key, value);
            }
        }
        self
    }

    /// Range-check every present value.
    ///
    /// Returns the first failure in [`ParamKey::ALL`] order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for key in ParamKey::ALL {
            if let Some(value) = self.slot(key) {
                key.check(value)?;
            }
        }
        Ok(())
    }

    /// Returns `true` if either trim bound is set to a non-zero value.
    pub fn has_trim(&self) -> bool {
        self.trim_start() > 0.0 || self.trim_end() > 0.0
    }
}
