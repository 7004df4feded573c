//! Anchor keywords and the per-axis position formula

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reference point on one axis of a box
pub trait Anchor: Copy {
    /// Fraction of the box size between its start edge and the anchor
    fn factor(self) -> f64;
}

/// Horizontal anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

/// Vertical anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    Top,
    Center,
    Bottom,
}

impl HorizontalAnchor {
    /// Only the first letter counts; anything unrecognized is `Center`
    pub fn from_keyword(word: &str) -> Self {
        match word.chars().next() {
            Some('l') => Self::Left,
            Some('r') => Self::Right,
            _ => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl VerticalAnchor {
    /// Only the first letter counts; anything unrecognized is `Center`
    pub fn from_keyword(word: &str) -> Self {
        match word.chars().next() {
            Some('t') => Self::Top,
            Some('b') => Self::Bottom,
            _ => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl Anchor for HorizontalAnchor {
    fn factor(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

impl Anchor for VerticalAnchor {
    fn factor(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// A horizontal and a vertical anchor, written as e.g. `"right top"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorPair {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl AnchorPair {
    pub fn new(horizontal: HorizontalAnchor, vertical: VerticalAnchor) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Parse a two-word anchor string
    ///
    /// The first word is the horizontal anchor and the second the vertical
    /// one. Missing or unrecognized words resolve to `Center`.
    pub fn parse(input: &str) -> Self {
        let mut words = input.split_whitespace();
        let horizontal = HorizontalAnchor::from_keyword(words.next().unwrap_or_default());
        let vertical = VerticalAnchor::from_keyword(words.next().unwrap_or_default());
        Self::new(horizontal, vertical)
    }
}

impl Default for AnchorPair {
    fn default() -> Self {
        Self::new(HorizontalAnchor::Left, VerticalAnchor::Top)
    }
}

impl From<&str> for AnchorPair {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for AnchorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.horizontal.as_str(), self.vertical.as_str())
    }
}

impl Serialize for AnchorPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AnchorPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

/// Geometry of one axis, as consumed by [`resolve_axis`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisInput {
    pub target_size: f64,
    pub target_offset: f64,
    pub element_size: f64,
    pub element_northwest: f64,
    pub extra_offset: f64,
}

/// Coordinate to assign to the element on one axis
///
/// Aligns the element's `my` point with the target's `at` point, then
/// shifts by the extra offset. The result is relative to the element's
/// northwest offset, so it can be assigned directly as a positioning offset.
pub fn resolve_axis<A: Anchor>(my: A, at: A, axis: &AxisInput) -> f64 {
    let base = axis.target_offset + axis.extra_offset - axis.element_northwest;
    base + at.factor() * axis.target_size - my.factor() * axis.element_size
}
