//! Collision strategies and the per-axis correction

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::overlap::{Axis, Overlap};

/// What to do when the element crosses a container edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionStrategy {
    /// Leave the element where it is
    #[default]
    None,
    /// Move the element back inside, sharing the shortfall with the
    /// opposite side when both sides push
    Push,
    /// Like `Push`, but always clears this side completely
    ForcePush,
}

impl CollisionStrategy {
    /// Parse a keyword; unknown keywords mean `None`
    pub fn from_keyword(word: &str) -> Self {
        match word.trim() {
            "push" => Self::Push,
            "forcePush" | "force-push" | "force_push" => Self::ForcePush,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Push => "push",
            Self::ForcePush => "forcePush",
        }
    }

    /// Whether this side moves the element at all
    pub fn pushes(self) -> bool {
        matches!(self, Self::Push | Self::ForcePush)
    }
}

impl fmt::Display for CollisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CollisionStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CollisionStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let word = String::deserialize(deserializer)?;
        Ok(Self::from_keyword(&word))
    }
}

/// Collision strategy for each container side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Collision {
    pub left: CollisionStrategy,
    pub right: CollisionStrategy,
    pub top: CollisionStrategy,
    pub bottom: CollisionStrategy,
}

impl Collision {
    /// Same strategy on all four sides
    pub fn all(strategy: CollisionStrategy) -> Self {
        Self {
            left: strategy,
            right: strategy,
            top: strategy,
            bottom: strategy,
        }
    }

    /// The (start, end) strategies for an axis
    pub fn pair(&self, axis: Axis) -> (CollisionStrategy, CollisionStrategy) {
        match axis {
            Axis::Horizontal => (self.left, self.right),
            Axis::Vertical => (self.top, self.bottom),
        }
    }

    /// True when no side would ever move the element
    pub fn is_inert(&self) -> bool {
        !(self.left.pushes() || self.right.pushes() || self.top.pushes() || self.bottom.pushes())
    }

    /// Set one side by name (`left`, `right`, `top`, `bottom`)
    ///
    /// Returns `false` when the side name is not recognized.
    pub fn set_side(&mut self, side: &str, strategy: CollisionStrategy) -> bool {
        let slot = match side.trim() {
            "left" => &mut self.left,
            "right" => &mut self.right,
            "top" => &mut self.top,
            "bottom" => &mut self.bottom,
            _ => return false,
        };
        *slot = strategy;
        true
    }
}

/// Delta to add to the element coordinate on `axis`
pub fn correction(collision: &Collision, overlap: &Overlap, axis: Axis) -> f64 {
    let (start, end) = collision.pair(axis);
    let (start_overlap, end_overlap) = overlap.pair(axis);
    let delta = resolve_sides(start, end, start_overlap, end_overlap);
    tracing::trace!(?axis, start_overlap, end_overlap, delta, "collision correction");
    delta
}

/// Corrective delta for one pair of opposing sides
///
/// `start` is the left/top side and `end` the right/bottom side. A positive
/// delta moves the element towards the end side.
pub fn resolve_sides(
    start: CollisionStrategy,
    end: CollisionStrategy,
    start_overlap: f64,
    end_overlap: f64,
) -> f64 {
    if start.pushes() && end.pushes() && (start_overlap < 0.0 || end_overlap < 0.0) {
        squeeze(start, end, start_overlap, end_overlap)
    } else if start.pushes() && start_overlap < 0.0 {
        -start_overlap
    } else if end.pushes() && end_overlap < 0.0 {
        end_overlap
    } else {
        0.0
    }
}

/// Both sides push and at least one collides
fn squeeze(
    start: CollisionStrategy,
    end: CollisionStrategy,
    start_overlap: f64,
    end_overlap: f64,
) -> f64 {
    // Negative slack: the element is wider than the span between the sides
    let slack = start_overlap + end_overlap;
    let mut delta = 0.0;

    if start_overlap < end_overlap {
        delta -= if slack < 0.0 {
            start_overlap + (slack / 2.0).abs()
        } else {
            start_overlap
        };
    }
    if end_overlap < start_overlap {
        delta += if slack < 0.0 {
            end_overlap + (slack / 2.0).abs()
        } else {
            end_overlap
        };
    }

    let start_left = start_overlap + delta;
    let end_left = end_overlap - delta;

    if start == CollisionStrategy::ForcePush && end != CollisionStrategy::ForcePush && start_left < 0.0
    {
        delta -= start_left;
    }
    if end == CollisionStrategy::ForcePush && start != CollisionStrategy::ForcePush && end_left < 0.0
    {
        delta += end_left;
    }

    delta
}
