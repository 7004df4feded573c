//! Signed clearance between an element and its container

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// Which axis a pair of opposing sides belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Clearance on each side of the element
///
/// Positive values are free space before the container edge, negative
/// values are how far the element sticks out past it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Overlap {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Overlap {
    /// Compute the clearance of `element` inside `container`
    pub fn between(element: &BoundingBox, container: &BoundingBox) -> Self {
        Self {
            left: element.x - container.x,
            right: container.right() - element.right(),
            top: element.y - container.y,
            bottom: container.bottom() - element.bottom(),
        }
    }

    /// The (start, end) clearances for an axis: left/right or top/bottom
    pub fn pair(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.left, self.right),
            Axis::Vertical => (self.top, self.bottom),
        }
    }

    /// True when no side collides
    pub fn fits(&self) -> bool {
        self.left >= 0.0 && self.right >= 0.0 && self.top >= 0.0 && self.bottom >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contained_box_has_positive_clearance() {
        let container = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let element = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        let overlap = Overlap::between(&element, &container);
        assert_eq!(
            overlap,
            Overlap {
                left: 10.0,
                right: 60.0,
                top: 20.0,
                bottom: 40.0
            }
        );
        assert!(overlap.fits());
    }

    #[test]
    fn test_protruding_box_has_negative_clearance() {
        let container = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let element = BoundingBox::new(-5.0, 95.0, 10.0, 10.0);
        let overlap = Overlap::between(&element, &container);
        assert_eq!(overlap.left, -5.0);
        assert_eq!(overlap.bottom, -5.0);
        assert!(!overlap.fits());
    }

    #[test]
    fn test_zero_size_boxes_are_not_special() {
        let container = BoundingBox::new(50.0, 50.0, 0.0, 0.0);
        let element = BoundingBox::new(40.0, 60.0, 0.0, 0.0);
        let overlap = Overlap::between(&element, &container);
        assert_eq!(overlap.pair(Axis::Horizontal), (-10.0, 10.0));
        assert_eq!(overlap.pair(Axis::Vertical), (10.0, -10.0));
    }
}
