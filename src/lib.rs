//! Box Placement - anchor-based positioning of one box relative to another
//!
//! Given an element, a target and an optional container, this library
//! computes where to put the element so that a named anchor point on it
//! ("right top") lines up with a named anchor point on the target
//! ("left bottom"), and optionally pushes it back inside the container when
//! it would cross an edge.
//!
//! Geometry comes from a [`BoxProvider`]. The bundled [`Snapshot`] provider
//! answers from a frozen, TOML-loadable layout description.
//!
//! # Example
//!
//! ```rust
//! use box_placement::{
//!     place, BoundingBox, BoxRef, Collision, CollisionStrategy, ElementRecord, PlaceOptions,
//!     Snapshot, Viewport,
//! };
//!
//! let snapshot = Snapshot::new(Viewport::new(400.0, 300.0))
//!     .with_element("button", ElementRecord::new(BoundingBox::new(350.0, 20.0, 40.0, 20.0)))
//!     .with_element("menu", ElementRecord::new(BoundingBox::new(0.0, 0.0, 100.0, 80.0)));
//!
//! let options = PlaceOptions::new()
//!     .with_my("left top")
//!     .with_at("left bottom")
//!     .with_of(BoxRef::element("button"))
//!     .with_within(BoxRef::Viewport)
//!     .with_collision(Collision::all(CollisionStrategy::Push));
//!
//! let result = place(&snapshot, &BoxRef::element("menu"), &options).unwrap();
//! assert_eq!((result.left, result.top), (300.0, 40.0));
//! ```

pub mod error;
pub mod geometry;
pub mod place;
pub mod provider;
pub mod scene;
pub mod snapshot;

pub use error::PlaceError;
pub use geometry::{BoundingBox, Edges, Point, Size};
pub use place::{
    place, solve, AnchorPair, Collision, CollisionStrategy, Deferred, Geometry, Overlap,
    PlaceOptions, PlacementResult, ResolvedOptions, Subject,
};
pub use provider::{BoxProvider, BoxRef, MeasureOptions};
pub use scene::{PlaceRequest, Scene, SceneError};
pub use snapshot::{ElementRecord, Inset, Position, Snapshot, SnapshotError, Viewport};
