// src/config.rs
//! Tunables for the simulator, optionally overridden from a RON file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Read once in `PreStartup`; absent file means defaults.
pub const SETTINGS_PATH: &str = "assets/simulator.ron";

#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    pub tank: TankSettings,
    pub controls: ControlSettings,
    pub arena: ArenaSettings,
    pub view: ViewSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TankSettings {
    /// Asset path of the glTF scene, relative to `assets/`.
    pub model_path: String,
    pub model_scale: f32,
    /// 0xRRGGBB, sRGB.
    pub paint_color: u32,
    pub paint_metallic: f32,
    pub paint_roughness: f32,
}

impl Default for TankSettings {
    fn default() -> Self {
        Self {
            model_path: "models/Tank.glb".to_string(),
            model_scale: 0.0023,
            paint_color: 0xffa500,
            paint_metallic: 0.6,
            paint_roughness: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// World units per accepted W press / key repeat.
    pub move_distance: f32,
    /// Fraction of the remaining heading gap closed per pointer event.
    pub turn_smoothing: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            move_distance: 0.02,
            turn_smoothing: 0.05,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    pub half_extent: f32,
    pub grid_divisions: u32,
    pub grid_color: u32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            half_extent: 2.5,
            grid_divisions: 5,
            grid_color: 0x707070,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub camera_position: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub clear_color: u32,
    pub ambient_color: u32,
    pub ambient_brightness: f32,
    pub sun_position: [f32; 3],
    pub sun_illuminance: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            camera_position: [0.0, 5.0, 5.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            clear_color: 0x4a4a4a,
            ambient_color: 0x404040,
            ambient_brightness: 250.0,
            sun_position: [10.0, 10.0, 10.0],
            sun_illuminance: 4000.0,
        }
    }
}

impl SimulatorSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            ron::de::from_str(text).map_err(|e| SettingsError::Ron(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let c = &self.controls;
        if !(c.move_distance > 0.0) {
            return Err(SettingsError::invalid("controls.move_distance", "must be positive"));
        }
        if !(c.turn_smoothing > 0.0 && c.turn_smoothing <= 1.0) {
            return Err(SettingsError::invalid("controls.turn_smoothing", "must be in (0, 1]"));
        }
        if !(self.arena.half_extent > 0.0) {
            return Err(SettingsError::invalid("arena.half_extent", "must be positive"));
        }
        if self.arena.grid_divisions == 0 {
            return Err(SettingsError::invalid("arena.grid_divisions", "must be at least 1"));
        }
        if !(self.tank.model_scale > 0.0) {
            return Err(SettingsError::invalid("tank.model_scale", "must be positive"));
        }
        Ok(())
    }
}

/// 0xRRGGBB → sRGB colour.
pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// PreStartup: replace the default settings with the on-disk ones, if any.
pub fn load_settings(mut settings: ResMut<SimulatorSettings>) {
    match SimulatorSettings::load(SETTINGS_PATH) {
        Ok(loaded) => {
            info!("Settings: loaded overrides from '{}'", SETTINGS_PATH);
            *settings = loaded;
        }
        Err(SettingsError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!("Settings: no '{}', using defaults", SETTINGS_PATH);
        }
        Err(e) => {
            warn!("Settings: ignoring '{}': {}", SETTINGS_PATH, e);
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("I/O while reading settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

impl SettingsError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_document_is_all_defaults() {
        let s = SimulatorSettings::from_ron_str("()").unwrap();
        assert_eq!(s, SimulatorSettings::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let s = SimulatorSettings::from_ron_str(
            "(controls: (move_distance: 0.05), arena: (half_extent: 4.0))",
        )
        .unwrap();
        assert_eq!(s.controls.move_distance, 0.05);
        assert_eq!(s.controls.turn_smoothing, 0.05);
        assert_eq!(s.arena.half_extent, 4.0);
        assert_eq!(s.arena.grid_divisions, 5);
        assert_eq!(s.tank, TankSettings::default());
    }

    #[test]
    fn hex_literals_parse() {
        let s = SimulatorSettings::from_ron_str("(tank: (paint_color: 0x00ff00))").unwrap();
        assert_eq!(s.tank.paint_color, 0x00ff00);
    }

    #[rstest]
    #[case("(controls: (move_distance: 0.0))", "controls.move_distance")]
    #[case("(controls: (turn_smoothing: 1.5))", "controls.turn_smoothing")]
    #[case("(arena: (half_extent: -1.0))", "arena.half_extent")]
    #[case("(arena: (grid_divisions: 0))", "arena.grid_divisions")]
    #[case("(tank: (model_scale: 0.0))", "tank.model_scale")]
    fn out_of_range_values_are_rejected(#[case] text: &str, #[case] expected: &str) {
        match SimulatorSettings::from_ron_str(text) {
            Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected Invalid for {expected}, got {other:?}"),
        }
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(matches!(
            SimulatorSettings::from_ron_str("(controls: ("),
            Err(SettingsError::Ron(_))
        ));
    }

    #[test]
    fn missing_file_is_io_not_found() {
        match SimulatorSettings::load("does/not/exist.ron") {
            Err(SettingsError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn hex_color_unpacks_channels() {
        let c = hex_color(0xffa500).to_srgba();
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 165.0 / 255.0);
        assert_eq!(c.blue, 0.0);
    }
}
