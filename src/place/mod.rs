//! Placement engine for positioning one box relative to another
//!
//! The element's anchor point is aligned with the target's anchor point,
//! shifted by optional pixel offsets, and then optionally pushed back
//! inside a container according to per-side collision strategies.

pub mod anchor;
pub mod collision;
pub mod engine;
pub mod options;
pub mod overlap;

pub use anchor::{resolve_axis, Anchor, AnchorPair, AxisInput, HorizontalAnchor, VerticalAnchor};
pub use collision::{correction, resolve_sides, Collision, CollisionStrategy};
pub use engine::{measure_subject, place, solve, Geometry, MeasuredBox, PlacementResult, Solution};
pub use options::{Deferred, PlaceOptions, ResolvedOptions, Subject};
pub use overlap::{Axis, Overlap};
