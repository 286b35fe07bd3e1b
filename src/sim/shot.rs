//! Shot resolution
//!
//! Pure and deterministic: a shot's landing point is the drag vector scaled
//! by the power level, and its score is the first ring (in priority order)
//! that contains the landing point.

use glam::I64Vec2;
use serde::{Deserialize, Serialize};

use super::gesture::Shot;
use super::ring::{RingKind, RingSet};

/// Where a shot landed and what it scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotResult {
    pub landing: I64Vec2,
    /// None on a miss
    pub ring: Option<RingKind>,
    pub points: u32,
}

impl ShotResult {
    pub fn is_miss(&self) -> bool {
        self.ring.is_none()
    }

    /// Feedback line shown after the throw
    pub fn message(&self) -> String {
        if self.is_miss() {
            "Missed. Try again".to_string()
        } else {
            format!("Nice shot! You scored {} points!", self.points)
        }
    }
}

/// Landing point of a shot
///
/// Pointer x is unbounded, so the scaled drag saturates instead of wrapping.
#[inline]
pub fn landing_point(shot: &Shot, power_level: i32) -> I64Vec2 {
    let d = shot.displacement();
    let power = i64::from(power_level);
    I64Vec2::new(d.x.saturating_mul(power), d.y.saturating_mul(power))
}

/// Score a shot against a ring set
pub fn resolve(shot: &Shot, rings: &RingSet, power_level: i32) -> ShotResult {
    let landing = landing_point(shot, power_level);
    match rings.find(landing) {
        Some(ring) => ShotResult {
            landing,
            ring: Some(ring.kind()),
            points: ring.points(),
        },
        None => ShotResult {
            landing,
            ring: None,
            points: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::POWER_LEVEL;
    use crate::sim::ring::Ring;
    use glam::IVec2;
    use proptest::prelude::*;

    fn shot(px: i32, py: i32, rx: i32, ry: i32) -> Shot {
        Shot::new(IVec2::new(px, py), IVec2::new(rx, ry))
    }

    fn hit(s: Shot) -> ShotResult {
        resolve(&s, &RingSet::standard(), POWER_LEVEL)
    }

    #[test]
    fn test_short_drag_misses() {
        let result = hit(shot(100, 600, 150, 620));
        assert_eq!(result.landing, I64Vec2::new(200, 80));
        assert_eq!(result.ring, None);
        assert_eq!(result.points, 0);
        assert_eq!(result.message(), "Missed. Try again");
    }

    #[test]
    fn test_zero_displacement_misses() {
        let result = hit(shot(250, 700, 250, 700));
        assert_eq!(result.landing, I64Vec2::ZERO);
        assert!(result.is_miss());
    }

    #[test]
    fn test_each_ring() {
        // Pocket center (200, 120)
        let r = hit(shot(100, 600, 150, 630));
        assert_eq!(r.landing, I64Vec2::new(200, 120));
        assert_eq!((r.ring, r.points), (Some(RingKind::Small), 50));
        assert_eq!(r.message(), "Nice shot! You scored 50 points!");

        // Bullseye (200, 200)
        let r = hit(shot(100, 550, 150, 600));
        assert_eq!((r.ring, r.points), (Some(RingKind::Center), 30));

        // 40 right of the bullseye
        let r = hit(shot(100, 550, 160, 600));
        assert_eq!(r.landing, I64Vec2::new(240, 200));
        assert_eq!((r.ring, r.points), (Some(RingKind::Inner), 20));

        // 80 right of the bullseye
        let r = hit(shot(100, 550, 170, 600));
        assert_eq!(r.landing, I64Vec2::new(280, 200));
        assert_eq!((r.ring, r.points), (Some(RingKind::Outer), 10));
    }

    #[test]
    fn test_pocket_beats_inner_on_overlap() {
        // Lands at (200, 140): edge of the pocket and edge of the inner ring
        let r = hit(shot(100, 600, 150, 635));
        assert_eq!(r.landing, I64Vec2::new(200, 140));
        assert_eq!(r.ring, Some(RingKind::Small));
    }

    #[test]
    fn test_negative_displacement() {
        // Dragging up and left lands in negative lane coordinates
        let r = hit(shot(300, 700, 250, 650));
        assert_eq!(r.landing, I64Vec2::new(-200, -200));
        assert!(r.is_miss());
    }

    #[test]
    fn test_power_level_scales_landing() {
        let s = shot(100, 500, 300, 700);
        let rings = RingSet::standard();
        assert_eq!(resolve(&s, &rings, 1).ring, Some(RingKind::Center));
        assert!(resolve(&s, &rings, 2).is_miss());
    }

    #[test]
    fn test_far_gesture_saturates_and_misses() {
        let r = hit(shot(-300_000_000, 600, 300_000_000, 600));
        assert_eq!(r.landing, I64Vec2::new(2_400_000_000, 0));
        assert!(r.is_miss());

        let r = hit(shot(i32::MIN, 600, i32::MAX, 800));
        assert_eq!(r.landing, I64Vec2::new(4 * u32::MAX as i64, 800));
        assert!(r.is_miss());

        let r = resolve(&shot(i32::MIN, 500, i32::MAX, 500), &RingSet::standard(), i32::MAX);
        assert_eq!(r.landing, I64Vec2::new(u32::MAX as i64 * i32::MAX as i64, 0));
        assert!(r.is_miss());
    }

    proptest! {
        #[test]
        fn resolve_is_deterministic(
            px in 0i32..600, py in 500i32..800,
            rx in 0i32..600, ry in 500i32..800,
        ) {
            let s = shot(px, py, rx, ry);
            prop_assert_eq!(hit(s), hit(s));
        }

        #[test]
        fn any_pointer_x_resolves(px in any::<i32>(), rx in any::<i32>(), power in 1i32..=i32::MAX) {
            let r = resolve(&shot(px, 600, rx, 650), &RingSet::standard(), power);
            prop_assert_eq!(r.points == 0, r.is_miss());
        }

        #[test]
        fn scored_ring_is_highest_priority_match(
            px in 0i32..600, py in 500i32..800,
            rx in 0i32..600, ry in 500i32..800,
        ) {
            let rings = RingSet::standard();
            let r = hit(shot(px, py, rx, ry));
            let matching: Vec<&Ring> = rings
                .candidates()
                .iter()
                .filter(|ring| ring.contains(r.landing))
                .collect();

            match matching.first() {
                Some(first) => {
                    prop_assert_eq!(r.ring, Some(first.kind()));
                    prop_assert_eq!(r.points, first.points());
                }
                None => {
                    prop_assert!(r.is_miss());
                    prop_assert_eq!(r.points, 0);
                }
            }
        }
    }
}
