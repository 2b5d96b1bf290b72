//! Axis-aligned hitbox geometry
//!
//! Everything that can collide exposes one of these, recomputed from the
//! owner's current sprite dimensions each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Top-left corner
    pub pos: Vec2,
    /// Width/height
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True when the boxes overlap on both axes
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hb(x: f32, y: f32, w: f32, h: f32) -> Hitbox {
        Hitbox::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = hb(50.0, 116.0, 88.0, 94.0);
        let b = hb(100.0, 140.0, 34.0, 70.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint_on_x_axis() {
        let a = hb(50.0, 116.0, 88.0, 94.0);
        let b = hb(400.0, 140.0, 34.0, 70.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_disjoint_on_y_axis() {
        // Overlapping x range but the flyer is above the runner
        let a = hb(50.0, 150.0, 88.0, 60.0);
        let b = hb(60.0, 20.0, 92.0, 68.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = hb(0.0, 0.0, 10.0, 10.0);
        let b = hb(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn arb_hitbox() -> impl Strategy<Value = Hitbox> {
            (
                -500.0f32..1500.0,
                -100.0f32..400.0,
                1.0f32..200.0,
                1.0f32..200.0,
            )
                .prop_map(|(x, y, w, h)| hb(x, y, w, h))
        }

        proptest! {
            #[test]
            fn intersection_is_symmetric(a in arb_hitbox(), b in arb_hitbox()) {
                prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            }

            #[test]
            fn separated_on_an_axis_never_intersects(a in arb_hitbox(), b in arb_hitbox()) {
                if a.right() <= b.left() || b.right() <= a.left()
                    || a.bottom() <= b.top() || b.bottom() <= a.top()
                {
                    prop_assert!(!a.intersects(&b));
                } else {
                    prop_assert!(a.intersects(&b));
                }
            }
        }
    }
}
