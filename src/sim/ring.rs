//! Scoring rings on the lane
//!
//! Rings are stored in the order they are tested. A landing point belongs to
//! the first ring that contains it, so the bonus pocket (which overlaps the
//! outer and inner rings) is checked before the bullseye rings.

use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::distance_squared;

/// Which scoring zone a ring is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingKind {
    /// Widest bullseye band
    Outer,
    Inner,
    /// Bullseye
    Center,
    /// Bonus pocket above the bullseye
    Small,
}

impl RingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RingKind::Outer => "outer",
            RingKind::Inner => "inner",
            RingKind::Center => "center",
            RingKind::Small => "small",
        }
    }

    /// Fill colour (RGB) for drawing the ring
    pub fn color(&self) -> [u8; 3] {
        match self {
            RingKind::Outer => [179, 25, 66],
            RingKind::Inner => [255, 255, 255],
            RingKind::Center => [10, 49, 54],
            RingKind::Small => [218, 165, 32],
        }
    }
}

/// Rejected ring geometry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    #[error("{kind:?} ring radius must be positive, got {radius}")]
    NonPositiveRadius { kind: RingKind, radius: i32 },
    #[error("{kind:?} ring must be worth at least one point")]
    ZeroPoints { kind: RingKind },
}

/// A circular scoring zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ring {
    kind: RingKind,
    center: IVec2,
    radius: i32,
    points: u32,
}

impl Ring {
    pub fn new(kind: RingKind, center: IVec2, radius: i32, points: u32) -> Result<Self, RingError> {
        if radius <= 0 {
            return Err(RingError::NonPositiveRadius { kind, radius });
        }
        if points == 0 {
            return Err(RingError::ZeroPoints { kind });
        }
        Ok(Self {
            kind,
            center,
            radius,
            points,
        })
    }

    pub fn kind(&self) -> RingKind {
        self.kind
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// True if the point lies inside or on the edge of the ring
    #[inline]
    pub fn contains(&self, point: I64Vec2) -> bool {
        let r = i64::from(self.radius);
        distance_squared(point, self.center.as_i64vec2()) <= r * r
    }
}

/// The rings of one lane, in priority order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RingSet {
    rings: Vec<Ring>,
}

impl Default for RingSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl RingSet {
    /// Build a ring set; `rings` must already be in priority order
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// The classic layout: bonus pocket, center, inner, outer
    pub fn standard() -> Self {
        let bullseye = IVec2::new(BULLSEYE_X, BULLSEYE_Y);
        let pocket = bullseye + IVec2::new(0, POCKET_OFFSET_Y);

        // Constants are all positive; the constructor cannot reject them.
        let rings = [
            (RingKind::Small, pocket, POCKET_RADIUS, POCKET_POINTS),
            (RingKind::Center, bullseye, CENTER_RADIUS, CENTER_POINTS),
            (RingKind::Inner, bullseye, INNER_RADIUS, INNER_POINTS),
            (RingKind::Outer, bullseye, OUTER_RADIUS, OUTER_POINTS),
        ]
        .into_iter()
        .map(|(kind, center, radius, points)| Ring {
            kind,
            center,
            radius,
            points,
        })
        .collect();

        Self { rings }
    }

    /// Rings to test for a landing point, highest priority first
    pub fn candidates(&self) -> &[Ring] {
        &self.rings
    }

    /// Look up a ring by kind
    pub fn get(&self, kind: RingKind) -> Option<&Ring> {
        self.rings.iter().find(|r| r.kind == kind)
    }

    /// First ring (by priority) containing the point, if any
    pub fn find(&self, point: I64Vec2) -> Option<&Ring> {
        self.rings.iter().find(|r| r.contains(point))
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}
