//! Game facade for the UI shell
//!
//! The shell forwards pointer events and button presses here and reads a
//! `RenderState` snapshot when it redraws. Scoring happens only on input;
//! building a snapshot never changes the game.

use glam::IVec2;
use serde::Serialize;

use super::gesture::{FoulLine, Gesture, GestureEvent, InputGesture};
use super::ring::{Ring, RingSet};
use super::session::{GamePhase, GameSession, SessionState};
use super::shot::ShotResult;
use crate::settings::{Settings, SettingsError};

/// Result of forwarding one pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOutcome {
    pub event: GestureEvent,
    /// Set when the event finished a throw
    pub shot: Option<ShotResult>,
}

impl InputOutcome {
    fn gesture(event: GestureEvent) -> Self {
        Self { event, shot: None }
    }
}

/// Lane geometry the shell draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lane {
    pub width: i32,
    pub height: i32,
    pub foul_line_y: i32,
    /// Pointer region of the window; the foul line spans its width
    pub input_width: i32,
    pub input_height: i32,
}

/// Read-only snapshot of everything on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    pub lane: Lane,
    pub rings: Vec<Ring>,
    /// Throw being aimed
    pub gesture: Gesture,
    pub session: SessionState,
    pub status: String,
}

/// One player's ski ball machine
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    input: InputGesture,
    session: GameSession,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_valid(Settings::default())
    }
}

impl Game {
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::from_valid(settings))
    }

    fn from_valid(settings: Settings) -> Self {
        let input = InputGesture::new(FoulLine::new(settings.foul_line_y));
        let session = GameSession::new(
            RingSet::standard(),
            settings.power_level,
            settings.shots_per_game,
        );
        Self {
            settings,
            input,
            session,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    /// "Start Game" button
    pub fn start_game(&mut self) {
        self.input.reset();
        self.session.start_game();
    }

    /// "Restart Game" / "Try Again" button
    pub fn restart(&mut self) {
        self.input.reset();
        self.session.restart();
    }

    pub fn on_press(&mut self, point: IVec2) -> InputOutcome {
        if !self.accepting_input() {
            return InputOutcome::gesture(GestureEvent::Ignored);
        }
        let event = self.input.press(point);
        if event == GestureEvent::Rejected {
            log::debug!("Press at {} is over the foul line", point);
        }
        InputOutcome::gesture(event)
    }

    pub fn on_drag(&mut self, point: IVec2) -> InputOutcome {
        if !self.accepting_input() {
            return InputOutcome::gesture(GestureEvent::Ignored);
        }
        InputOutcome::gesture(self.input.drag(point))
    }

    /// Pointer up; a valid release scores the throw immediately
    pub fn on_release(&mut self, point: IVec2) -> InputOutcome {
        if !self.accepting_input() {
            return InputOutcome::gesture(GestureEvent::Ignored);
        }
        let event = self.input.release(point);
        let shot = match event {
            GestureEvent::Completed(shot) => match self.session.submit(shot) {
                Ok(result) => Some(result),
                Err(err) => {
                    log::warn!("Dropped completed throw: {}", err);
                    None
                }
            },
            GestureEvent::Abandoned => {
                log::debug!("Release at {} is over the foul line, throw abandoned", point);
                None
            }
            _ => None,
        };
        InputOutcome { event, shot }
    }

    /// Snapshot for drawing
    pub fn render_state(&self) -> RenderState {
        let session = self.session.state().clone();
        RenderState {
            lane: Lane {
                width: self.settings.lane_width,
                height: self.settings.lane_height,
                foul_line_y: self.settings.foul_line_y,
                input_width: self.settings.input_width,
                input_height: self.settings.input_height,
            },
            rings: self.session.rings().candidates().to_vec(),
            gesture: *self.input.current(),
            status: session.status_message(),
            session,
        }
    }

    fn accepting_input(&self) -> bool {
        self.session.phase() == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ring::RingKind;

    fn p(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    fn throw(game: &mut Game, press: IVec2, release: IVec2) -> InputOutcome {
        game.on_press(press);
        game.on_drag(release);
        game.on_release(release)
    }

    fn started() -> Game {
        let mut game = Game::default();
        game.start_game();
        game
    }

    #[test]
    fn test_input_ignored_until_started() {
        let mut game = Game::default();
        assert_eq!(game.on_press(p(100, 600)).event, GestureEvent::Ignored);
        assert!(game.render_state().gesture.is_empty());
        assert_eq!(game.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_full_throw_scores() {
        let mut game = started();
        let outcome = throw(&mut game, p(100, 600), p(150, 630));
        assert!(matches!(outcome.event, GestureEvent::Completed(_)));

        let shot = outcome.shot.unwrap();
        assert_eq!(shot.ring, Some(RingKind::Small));
        assert_eq!(game.session().score, 50);
        assert_eq!(game.session().shots_remaining, 9);
        assert!(game.render_state().gesture.is_empty());
    }

    #[test]
    fn test_rejected_press_registers_nothing() {
        let mut game = started();
        assert_eq!(game.on_press(p(100, 400)).event, GestureEvent::Rejected);
        assert_eq!(game.on_release(p(150, 630)).event, GestureEvent::Ignored);
        assert_eq!(game.session().shots_remaining, 10);
    }

    #[test]
    fn test_abandoned_release_is_free() {
        let mut game = started();
        game.on_press(p(100, 600));
        let outcome = game.on_release(p(150, 450));
        assert_eq!(outcome.event, GestureEvent::Abandoned);
        assert_eq!(outcome.shot, None);
        assert_eq!(game.session().shots_remaining, 10);
        assert_eq!(game.session().last_shot, None);
    }

    #[test]
    fn test_far_horizontal_throw_is_a_miss() {
        let mut game = started();
        game.on_press(p(-300_000_000, 600));
        let outcome = game.on_release(p(300_000_000, 600));
        let shot = outcome.shot.unwrap();
        assert!(shot.is_miss());
        assert_eq!(game.session().shots_remaining, 9);
    }

    #[test]
    fn test_render_state_shows_aim() {
        let mut game = started();
        game.on_press(p(100, 600));
        game.on_drag(p(120, 640));

        let view = game.render_state();
        assert_eq!(view.gesture.press, Some(p(100, 600)));
        assert_eq!(view.gesture.drag, Some(p(120, 640)));
        assert_eq!(view.rings.len(), 4);
        assert_eq!(view.lane.foul_line_y, 500);
        assert_eq!((view.lane.input_width, view.lane.input_height), (600, 500));
        assert_eq!(view.status, "On the board.");

        // Reading twice changes nothing
        assert_eq!(game.render_state(), view);
    }

    #[test]
    fn test_game_over_locks_input() {
        let mut game = started();
        for _ in 0..10 {
            throw(&mut game, p(100, 600), p(150, 620));
        }
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.render_state().status, "Game Over! You scored 0 points!");

        let before = game.session().clone();
        assert_eq!(game.on_press(p(100, 600)).event, GestureEvent::Ignored);
        assert_eq!(game.on_release(p(150, 630)).event, GestureEvent::Ignored);
        assert_eq!(game.session(), &before);

        game.restart();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.session().shots_remaining, 10);
    }

    #[test]
    fn test_restart_drops_aim_in_progress() {
        let mut game = started();
        game.on_press(p(100, 600));
        game.restart();
        assert!(game.render_state().gesture.is_empty());
        assert_eq!(game.on_release(p(150, 630)).event, GestureEvent::Ignored);
    }

    #[test]
    fn test_custom_settings() {
        let settings = Settings {
            shots_per_game: 2,
            power_level: 1,
            ..Settings::default()
        };
        let mut game = Game::new(settings).unwrap();
        game.start_game();
        // With power 1 the raw drag (200, 200) hits the bullseye
        let outcome = throw(&mut game, p(100, 500), p(300, 700));
        assert_eq!(outcome.shot.map(|s| s.points), Some(30));
        throw(&mut game, p(100, 500), p(100, 500));
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            power_level: -1,
            ..Settings::default()
        };
        assert!(Game::new(settings).is_err());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut game = started();
        throw(&mut game, p(100, 550), p(150, 600));
        let json = serde_json::to_value(game.render_state()).unwrap();
        assert_eq!(json["session"]["score"], 30);
        assert_eq!(json["session"]["phase"], "Playing");
        assert_eq!(json["rings"][0]["kind"], "Small");
    }
}
