//! Game session state
//!
//! One game is a fixed number of throws. The session owns the counters the
//! HUD shows and changes them exactly once per scored shot.

use serde::{Deserialize, Serialize};

use super::gesture::{Gesture, Shot};
use super::ring::RingSet;
use super::shot::{ShotResult, resolve};
use crate::consts::{POWER_LEVEL, SHOTS_PER_GAME};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start
    #[default]
    Idle,
    /// Throws remaining
    Playing,
    /// Out of throws
    GameOver,
}

/// Contract violations when submitting a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot submit a shot while {phase:?}")]
    NotPlaying { phase: GamePhase },
    #[error("gesture needs both a press and a release")]
    IncompleteGesture,
}

/// Everything the HUD needs to know about the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub shots_remaining: u32,
    pub score: u32,
    /// Best score this run; never persisted
    pub high_score: u32,
    pub last_shot: Option<ShotResult>,
    pub phase: GamePhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            shots_remaining: SHOTS_PER_GAME,
            score: 0,
            high_score: 0,
            last_shot: None,
            phase: GamePhase::Idle,
        }
    }
}

impl SessionState {
    /// Points scored by the most recent throw of this game
    pub fn last_shot_points(&self) -> Option<u32> {
        self.last_shot.map(|s| s.points)
    }

    /// Status line for the side bar
    pub fn status_message(&self) -> String {
        match (self.phase, self.last_shot) {
            (GamePhase::GameOver, _) => {
                format!("Game Over! You scored {} points!", self.score)
            }
            (_, Some(shot)) => shot.message(),
            (_, None) => "On the board.".to_string(),
        }
    }
}

/// Drives one game at a time and keeps the run's high score
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    rings: RingSet,
    power_level: i32,
    shots_per_game: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(RingSet::standard(), POWER_LEVEL, SHOTS_PER_GAME)
    }
}

impl GameSession {
    pub fn new(rings: RingSet, power_level: i32, shots_per_game: u32) -> Self {
        Self {
            state: SessionState {
                shots_remaining: shots_per_game,
                ..SessionState::default()
            },
            rings,
            power_level,
            shots_per_game,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn rings(&self) -> &RingSet {
        &self.rings
    }

    pub fn power_level(&self) -> i32 {
        self.power_level
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Begin a fresh game. The high score carries over.
    pub fn start_game(&mut self) {
        self.reset_counters();
        log::info!("Game started: {} shots", self.shots_per_game);
    }

    /// Score a completed gesture. An incomplete gesture is reported before
    /// the phase is checked.
    pub fn submit_shot(&mut self, gesture: &Gesture) -> Result<ShotResult, SessionError> {
        let shot = gesture.shot().ok_or(SessionError::IncompleteGesture)?;
        self.submit(shot)
    }

    /// Score a shot whose press and release are already known
    pub fn submit(&mut self, shot: Shot) -> Result<ShotResult, SessionError> {
        if self.state.phase != GamePhase::Playing {
            return Err(SessionError::NotPlaying {
                phase: self.state.phase,
            });
        }

        let result = resolve(&shot, &self.rings, self.power_level);
        let state = &mut self.state;
        state.score = state.score.saturating_add(result.points);
        state.shots_remaining = state.shots_remaining.saturating_sub(1);
        state.last_shot = Some(result);

        log::debug!(
            "Shot {:?} -> {:?} landed at {}: {} pts (score {}, {} left)",
            shot.press,
            shot.release,
            result.landing,
            result.points,
            state.score,
            state.shots_remaining
        );

        self.commit_high_score();

        if self.state.shots_remaining == 0 {
            self.state.phase = GamePhase::GameOver;
            log::info!("Game over: {} points", self.state.score);
        }

        Ok(result)
    }

    /// Throw the current game away and play again
    pub fn restart(&mut self) {
        self.commit_high_score();
        self.reset_counters();
        log::info!("Game restarted (high score {})", self.state.high_score);
    }

    fn commit_high_score(&mut self) {
        if self.state.score > self.state.high_score {
            self.state.high_score = self.state.score;
            log::info!("New high score: {}", self.state.high_score);
        }
    }

    fn reset_counters(&mut self) {
        let state = &mut self.state;
        state.shots_remaining = self.shots_per_game;
        state.score = 0;
        state.last_shot = None;
        state.phase = if self.shots_per_game == 0 {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        };
    }
}
