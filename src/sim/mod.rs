//! Deterministic gameplay module
//!
//! All game rules live here. This module must stay pure and deterministic:
//! - Integer lane coordinates only
//! - Seeded RNG only (autoplay)
//! - State changes only in response to input, never while rendering
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod game;
pub mod gesture;
pub mod ring;
pub mod session;
pub mod shot;

pub use autoplay::{AutoPlayer, Throw};
pub use game::{Game, InputOutcome, Lane, RenderState};
pub use gesture::{FoulLine, Gesture, GestureEvent, InputGesture, Shot};
pub use ring::{Ring, RingError, RingKind, RingSet};
pub use session::{GamePhase, GameSession, SessionError, SessionState};
pub use shot::{ShotResult, landing_point, resolve};
