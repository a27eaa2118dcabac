use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Editing feel: snap steps, scale clamps and camera sensitivity. Loaded from
/// JSON with every field optional so a partial file only overrides what it
/// names.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_translate_snap")]
    pub translate_snap: f32,
    #[serde(default = "EditorConfig::default_rotate_snap")]
    pub rotate_snap: f32,
    #[serde(default = "EditorConfig::default_scale_snap")]
    pub scale_snap: f32,
    #[serde(default = "EditorConfig::default_scale_min")]
    pub scale_min: f32,
    #[serde(default = "EditorConfig::default_scale_max")]
    pub scale_max: f32,
    #[serde(default = "EditorConfig::default_drag_speed")]
    pub drag_speed: f32,
    #[serde(default = "EditorConfig::default_orbit_sensitivity")]
    pub orbit_sensitivity: f32,
}

impl EditorConfig {
    const fn default_translate_snap() -> f32 {
        0.05
    }

    fn default_rotate_snap() -> f32 {
        15.0_f32.to_radians()
    }

    const fn default_scale_snap() -> f32 {
        0.1
    }

    const fn default_scale_min() -> f32 {
        0.05
    }

    const fn default_scale_max() -> f32 {
        20.0
    }

    const fn default_drag_speed() -> f32 {
        0.01
    }

    const fn default_orbit_sensitivity() -> f32 {
        0.01
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            translate_snap: Self::default_translate_snap(),
            rotate_snap: Self::default_rotate_snap(),
            scale_snap: Self::default_scale_snap(),
            scale_min: Self::default_scale_min(),
            scale_max: Self::default_scale_max(),
            drag_speed: Self::default_drag_speed(),
            orbit_sensitivity: Self::default_orbit_sensitivity(),
        }
    }
}
