//! Ski Ball - A target-toss arcade game engine
//!
//! Core modules:
//! - `sim`: Deterministic gameplay (rings, gestures, shot scoring, session state)
//! - `settings`: Tunable game constants

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::I64Vec2;

/// Game configuration constants
pub mod consts {
    /// Lane dimensions (logical units)
    pub const LANE_WIDTH: i32 = 400;
    pub const LANE_HEIGHT: i32 = 800;

    /// Interactive pointer region of the controlling window
    pub const INPUT_WIDTH: i32 = 600;
    pub const INPUT_HEIGHT: i32 = 500;

    /// Pointer activity must be at or below this y to count
    pub const FOUL_LINE_Y: i32 = 500;

    /// Multiplier turning drag displacement into a landing point
    pub const POWER_LEVEL: i32 = 4;

    /// Shots per game
    pub const SHOTS_PER_GAME: u32 = 10;

    /// Bullseye center shared by the outer, inner and center rings
    pub const BULLSEYE_X: i32 = 200;
    pub const BULLSEYE_Y: i32 = 200;
    /// Bonus pocket sits above the bullseye
    pub const POCKET_OFFSET_Y: i32 = -80;

    pub const OUTER_RADIUS: i32 = 100;
    pub const INNER_RADIUS: i32 = 60;
    pub const CENTER_RADIUS: i32 = 25;
    pub const POCKET_RADIUS: i32 = 20;

    pub const OUTER_POINTS: u32 = 10;
    pub const INNER_POINTS: u32 = 20;
    pub const CENTER_POINTS: u32 = 30;
    pub const POCKET_POINTS: u32 = 50;
}

/// Squared euclidean distance between two lane points
///
/// Saturates at `i64::MAX`, which is still farther than any i32 radius.
#[inline]
pub fn distance_squared(a: I64Vec2, b: I64Vec2) -> i64 {
    let dx = a.x.saturating_sub(b.x);
    let dy = a.y.saturating_sub(b.y);
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
}
