//! Demo autoplay
//!
//! A seeded bot that throws like a decent human: it aims at a random ring,
//! misjudges by a few units, and now and then lets go over the foul line.
//! Same seed, same game.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::game::{Game, InputOutcome};
use super::session::GamePhase;

/// Chance a throw is released over the foul line
const FOUL_RELEASE_CHANCE: f64 = 0.1;
/// Max aiming error, in pointer units
const AIM_JITTER: i32 = 8;
/// Intermediate drag points per throw
const DRAG_STEPS: i32 = 3;

/// Pointer events for one throw, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throw {
    pub press: IVec2,
    pub drags: Vec<IVec2>,
    pub release: IVec2,
}

/// Seeded demo player
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    seed: u64,
    rng: Pcg32,
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Plan the next throw against the game's current lane
    pub fn next_throw(&mut self, game: &Game) -> Throw {
        let settings = game.settings();
        let view = game.render_state();
        let power = settings.power_level.max(1);

        // Pick a ring and work back from its center to the drag needed
        let target = if view.rings.is_empty() {
            IVec2::ZERO
        } else {
            let idx = self.rng.random_range(0..view.rings.len());
            view.rings[idx].center()
        };
        let jitter = IVec2::new(
            self.rng.random_range(-AIM_JITTER..=AIM_JITTER),
            self.rng.random_range(-AIM_JITTER..=AIM_JITTER),
        );
        let displacement = target / power + jitter;

        // Leave room below the press for the drag
        let floor = settings.foul_line_y;
        let ceiling = (settings.lane_height - displacement.y.max(0)).max(floor + 1);
        let press = IVec2::new(
            self.rng.random_range(0..settings.input_width.max(1)),
            self.rng.random_range(floor..ceiling),
        );

        let mut release = press + displacement;
        release.y = release.y.max(floor);
        if self.rng.random_bool(FOUL_RELEASE_CHANCE) {
            release.y = floor - self.rng.random_range(1..=100);
        }

        let drags = (1..=DRAG_STEPS)
            .map(|step| press + (release - press) * step / (DRAG_STEPS + 1))
            .collect();

        Throw {
            press,
            drags,
            release,
        }
    }

    /// Feed one planned throw through the game's pointer handlers
    pub fn play_throw(&mut self, game: &mut Game) -> InputOutcome {
        let throw = self.next_throw(game);
        game.on_press(throw.press);
        for drag in &throw.drags {
            game.on_drag(*drag);
        }
        game.on_release(throw.release)
    }

    /// Play until the game ends; returns the final score
    pub fn play_game(&mut self, game: &mut Game) -> u32 {
        if game.phase() != GamePhase::Playing {
            game.start_game();
        }
        while game.phase() == GamePhase::Playing {
            let outcome = self.play_throw(game);
            if let Some(shot) = outcome.shot {
                log::debug!("Autoplay: {}", shot.message());
            }
        }
        game.session().score
    }
}
