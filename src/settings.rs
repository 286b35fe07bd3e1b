//! Game settings
//!
//! Defaults are the classic lane. Settings round-trip through JSON so a
//! shell can ship its own tuning; nothing is saved between runs.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Settings that failed to load
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("power level must be positive, got {0}")]
    PowerLevel(i32),
    #[error("a game needs at least one shot")]
    NoShots,
    #[error("foul line y={foul_line_y} is outside the lane (height {lane_height})")]
    FoulLine { foul_line_y: i32, lane_height: i32 },
}

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Drag-to-landing multiplier
    pub power_level: i32,
    pub shots_per_game: u32,
    /// Pointer y at or beyond which a throw is legal
    pub foul_line_y: i32,

    // === Layout (for the UI shell) ===
    pub lane_width: i32,
    pub lane_height: i32,
    pub input_width: i32,
    pub input_height: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            power_level: POWER_LEVEL,
            shots_per_game: SHOTS_PER_GAME,
            foul_line_y: FOUL_LINE_Y,
            lane_width: LANE_WIDTH,
            lane_height: LANE_HEIGHT,
            input_width: INPUT_WIDTH,
            input_height: INPUT_HEIGHT,
        }
    }
}

impl Settings {
    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.power_level <= 0 {
            return Err(SettingsError::PowerLevel(self.power_level));
        }
        if self.shots_per_game == 0 {
            return Err(SettingsError::NoShots);
        }
        if !(0..=self.lane_height).contains(&self.foul_line_y) {
            return Err(SettingsError::FoulLine {
                foul_line_y: self.foul_line_y,
                lane_height: self.lane_height,
            });
        }
        Ok(())
    }
}
