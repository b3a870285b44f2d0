//! Axis-aligned body rectangle
//!
//! Positions are sub-pixel (`Vec2`, bottom-left corner, y-up), sizes are
//! whole world units. Collision queries sample the box at its four integer
//! corners, which are inclusive: a 36-wide box at x = 100 spans columns
//! 100..=135.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// The bounding box of one movable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyRect {
    /// Bottom-left corner, sub-pixel
    pub pos: Vec2,
    /// Size in whole world units
    pub size: IVec2,
}

impl BodyRect {
    pub fn new(pos: Vec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// The same box at a different position
    #[inline]
    pub fn at(&self, pos: Vec2) -> Self {
        Self { pos, size: self.size }
    }

    /// The same box displaced by `d`
    #[inline]
    pub fn offset(&self, d: Vec2) -> Self {
        self.at(self.pos + d)
    }

    /// Integer bottom-left corner (floored)
    #[inline]
    pub fn point(&self) -> IVec2 {
        self.pos.floor().as_ivec2()
    }

    /// Center of the box in integer world units
    pub fn center(&self) -> IVec2 {
        self.point() + self.size / 2
    }

    /// The four inclusive corners: bottom-left, bottom-right, top-right,
    /// top-left
    pub fn corners(&self) -> [IVec2; 4] {
        let lo = self.point();
        let hi = lo + self.size - IVec2::ONE;
        [
            lo,
            IVec2::new(hi.x, lo.y),
            hi,
            IVec2::new(lo.x, hi.y),
        ]
    }

    /// The two bottom corners, left then right
    pub fn bottom_corners(&self) -> [IVec2; 2] {
        let lo = self.point();
        [lo, IVec2::new(lo.x + self.size.x - 1, lo.y)]
    }

    /// The two top corners, left then right
    pub fn top_corners(&self) -> [IVec2; 2] {
        let lo = self.point();
        let top = lo.y + self.size.y - 1;
        [IVec2::new(lo.x, top), IVec2::new(lo.x + self.size.x - 1, top)]
    }

    /// Discrete AABB overlap test on the integer boxes
    pub fn intersects(&self, other: &BodyRect) -> bool {
        let a = self.point();
        let b = other.point();
        a.x < b.x + other.size.x
            && b.x < a.x + self.size.x
            && a.y < b.y + other.size.y
            && b.y < a.y + self.size.y
    }

    /// Does the box contain the integer point?
    pub fn contains(&self, p: IVec2) -> bool {
        let lo = self.point();
        p.x >= lo.x && p.x < lo.x + self.size.x && p.y >= lo.y && p.y < lo.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_inclusive() {
        let rect = BodyRect::new(Vec2::new(100.0, 50.0), IVec2::new(36, 36));
        assert_eq!(
            rect.corners(),
            [
                IVec2::new(100, 50),
                IVec2::new(135, 50),
                IVec2::new(135, 85),
                IVec2::new(100, 85),
            ]
        );
    }

    #[test]
    fn test_point_floors_subpixel_position() {
        let rect = BodyRect::new(Vec2::new(100.9, 50.2), IVec2::new(10, 10));
        assert_eq!(rect.point(), IVec2::new(100, 50));

        let negative = BodyRect::new(Vec2::new(-0.5, -0.5), IVec2::new(10, 10));
        assert_eq!(negative.point(), IVec2::new(-1, -1));
    }

    #[test]
    fn test_bottom_and_top_corners() {
        let rect = BodyRect::new(Vec2::new(0.0, 0.0), IVec2::new(20, 30));
        assert_eq!(rect.bottom_corners(), [IVec2::new(0, 0), IVec2::new(19, 0)]);
        assert_eq!(rect.top_corners(), [IVec2::new(0, 29), IVec2::new(19, 29)]);
    }

    #[test]
    fn test_intersects() {
        let a = BodyRect::new(Vec2::new(0.0, 0.0), IVec2::new(10, 10));
        let b = BodyRect::new(Vec2::new(9.0, 9.0), IVec2::new(10, 10));
        let c = BodyRect::new(Vec2::new(10.0, 0.0), IVec2::new(10, 10));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        // touching edges do not overlap
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_contains() {
        let rect = BodyRect::new(Vec2::new(5.0, 5.0), IVec2::new(10, 10));
        assert!(rect.contains(IVec2::new(5, 5)));
        assert!(rect.contains(IVec2::new(14, 14)));
        assert!(!rect.contains(IVec2::new(15, 5)));
        assert!(!rect.contains(IVec2::new(4, 5)));
    }

    #[test]
    fn test_center() {
        let rect = BodyRect::new(Vec2::new(100.0, 50.0), IVec2::new(36, 36));
        assert_eq!(rect.center(), IVec2::new(118, 68));
    }
}
