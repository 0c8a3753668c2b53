//! Axis-aligned hitboxes
//!
//! Both the ship and the meteorites are squares, so a single rectangle type
//! with a half-open overlap test covers every collision in the game.

use glam::IVec2;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub min: IVec2,
    pub size: IVec2,
}

impl Hitbox {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    pub fn square(min: IVec2, side: i32) -> Self {
        Self::new(min, IVec2::splat(side))
    }

    /// Exclusive bottom-right corner
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    pub fn center(&self) -> IVec2 {
        self.min + self.size / 2
    }

    /// Half-open overlap: rectangles that only share an edge do not intersect.
    /// Empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        if self.size.cmple(IVec2::ZERO).any() || other.size.cmple(IVec2::ZERO).any() {
            return false;
        }
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_squares() {
        // Ship at x=375 on the default field, block drifting into its corner
        let ship = Hitbox::square(IVec2::new(375, 520), 50);
        let block = Hitbox::square(IVec2::new(400, 520), 50);
        assert!(ship.intersects(&block));
        assert!(block.intersects(&ship));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let ship = Hitbox::square(IVec2::new(375, 520), 50);
        let right = Hitbox::square(IVec2::new(425, 520), 50);
        let above = Hitbox::square(IVec2::new(375, 470), 50);
        assert!(!ship.intersects(&right));
        assert!(!ship.intersects(&above));

        let above_by_one = Hitbox::square(IVec2::new(375, 471), 50);
        assert!(ship.intersects(&above_by_one));
    }

    #[test]
    fn test_empty_hitbox_never_collides() {
        let ship = Hitbox::square(IVec2::new(0, 0), 50);
        let empty = Hitbox::new(IVec2::new(10, 10), IVec2::new(0, 5));
        assert!(!ship.intersects(&empty));
    }

    #[test]
    fn test_center() {
        let ship = Hitbox::square(IVec2::new(100, 520), 50);
        assert_eq!(ship.center(), IVec2::new(125, 545));
    }
}
