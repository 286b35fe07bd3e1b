//! Pointer gesture capture
//!
//! A shot is a press, any number of drags, and a release. Every point is
//! checked against the foul line: pointer activity above it (smaller y) is
//! not part of a throw.

use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::consts::FOUL_LINE_Y;

/// Horizontal boundary a throw must stay behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoulLine {
    pub y: i32,
}

impl Default for FoulLine {
    fn default() -> Self {
        Self { y: FOUL_LINE_Y }
    }
}

impl FoulLine {
    pub fn new(y: i32) -> Self {
        Self { y }
    }

    /// Points on or below the line are playable
    #[inline]
    pub fn allows(&self, point: IVec2) -> bool {
        point.y >= self.y
    }
}

/// The two points that decide a throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    pub press: IVec2,
    pub release: IVec2,
}

impl Shot {
    pub fn new(press: IVec2, release: IVec2) -> Self {
        Self { press, release }
    }

    /// Raw drag vector, before power scaling
    pub fn displacement(&self) -> I64Vec2 {
        self.release.as_i64vec2() - self.press.as_i64vec2()
    }
}

/// Points collected for the throw in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gesture {
    pub press: Option<IVec2>,
    /// Aim indicator; cleared while the pointer is over the foul line
    pub drag: Option<IVec2>,
    pub release: Option<IVec2>,
}

impl Gesture {
    pub fn is_empty(&self) -> bool {
        self.press.is_none() && self.drag.is_none() && self.release.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.press.is_some() && self.release.is_some()
    }

    /// The shot this gesture describes, once press and release are both set
    pub fn shot(&self) -> Option<Shot> {
        Some(Shot::new(self.press?, self.release?))
    }
}

/// What a pointer event did to the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Valid press, aiming started
    Started,
    /// Press over the foul line, nothing started
    Rejected,
    /// Drag accepted as the new aim point
    Aimed,
    /// Drag went over the foul line, aim indicator dropped
    AimLost,
    /// Valid release, the throw is ready to score
    Completed(Shot),
    /// Release over the foul line, throw discarded without cost
    Abandoned,
    /// Drag or release with no press in progress
    Ignored,
}

/// Foul-line gate that turns raw pointer events into shots
#[derive(Debug, Clone, Default)]
pub struct InputGesture {
    foul_line: FoulLine,
    gesture: Gesture,
}

impl InputGesture {
    pub fn new(foul_line: FoulLine) -> Self {
        Self {
            foul_line,
            gesture: Gesture::default(),
        }
    }

    pub fn foul_line(&self) -> FoulLine {
        self.foul_line
    }

    /// Gesture in progress (for drawing the aim indicator)
    pub fn current(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_pressed(&self) -> bool {
        self.gesture.press.is_some()
    }

    /// Pointer down. A valid press always starts a fresh gesture.
    pub fn press(&mut self, point: IVec2) -> GestureEvent {
        if !self.foul_line.allows(point) {
            self.reset();
            return GestureEvent::Rejected;
        }
        self.gesture = Gesture {
            press: Some(point),
            drag: None,
            release: None,
        };
        GestureEvent::Started
    }

    /// Pointer moved while held
    pub fn drag(&mut self, point: IVec2) -> GestureEvent {
        if !self.is_pressed() {
            return GestureEvent::Ignored;
        }
        if self.foul_line.allows(point) {
            self.gesture.drag = Some(point);
            GestureEvent::Aimed
        } else {
            self.gesture.drag = None;
            GestureEvent::AimLost
        }
    }

    /// Pointer up. Either hands out the finished shot or drops the gesture;
    /// both leave the gate empty for the next throw.
    pub fn release(&mut self, point: IVec2) -> GestureEvent {
        if !self.is_pressed() {
            return GestureEvent::Ignored;
        }
        if !self.foul_line.allows(point) {
            self.reset();
            return GestureEvent::Abandoned;
        }
        self.gesture.release = Some(point);
        let event = match self.gesture.shot() {
            Some(shot) => GestureEvent::Completed(shot),
            None => GestureEvent::Ignored,
        };
        self.reset();
        event
    }

    pub fn reset(&mut self) {
        self.gesture = Gesture::default();
    }
}
