//! Placement request configuration

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::provider::BoxRef;

use super::anchor::AnchorPair;
use super::collision::Collision;

/// An option value, either given directly or computed from the element
///
/// Computed values are evaluated once per placement call.
pub enum Deferred<T> {
    Value(T),
    Computed(Rc<dyn Fn(&BoxRef) -> T>),
}

impl<T> Deferred<T> {
    /// Wrap a function of the element being placed
    pub fn computed(f: impl Fn(&BoxRef) -> T + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }
}

impl<T: Clone> Deferred<T> {
    /// Produce the value for this element
    pub fn resolve(&self, element: &BoxRef) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Computed(f) => f(element),
        }
    }
}

impl<T: Clone> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Computed(f) => Self::Computed(Rc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<T> From<T> for Deferred<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Deferred<AnchorPair> {
    fn from(anchor: &str) -> Self {
        Self::Value(AnchorPair::parse(anchor))
    }
}

impl From<BoxRef> for Deferred<Subject> {
    fn from(reference: BoxRef) -> Self {
        Self::Value(Subject::Box(reference))
    }
}

impl From<Subject> for Deferred<Option<Subject>> {
    fn from(subject: Subject) -> Self {
        Self::Value(Some(subject))
    }
}

impl From<BoxRef> for Deferred<Option<Subject>> {
    fn from(reference: BoxRef) -> Self {
        Self::Value(Some(Subject::Box(reference)))
    }
}

/// What a placement is made against: a measurable box or a bare point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subject {
    Box(BoxRef),
    /// A zero-size box at `(x, y)` relative to `relative_to`, or to the
    /// viewport when unset
    Point {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relative_to: Option<BoxRef>,
    },
}

impl Subject {
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point {
            x,
            y,
            relative_to: None,
        }
    }

    pub fn point_in(x: f64, y: f64, frame: BoxRef) -> Self {
        Self::Point {
            x,
            y,
            relative_to: Some(frame),
        }
    }
}

impl From<BoxRef> for Subject {
    fn from(reference: BoxRef) -> Self {
        Self::Box(reference)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box(reference) => write!(f, "{reference}"),
            Self::Point {
                x,
                y,
                relative_to: None,
            } => write!(f, "[{x}, {y}]"),
            Self::Point {
                x,
                y,
                relative_to: Some(frame),
            } => write!(f, "[{x}, {y}] in {frame}"),
        }
    }
}

/// Options for a single placement
///
/// `Default` is the baseline configuration: both anchors `left top`,
/// placed against the viewport, no container, no offsets, no collision
/// handling.
#[derive(Debug, Clone)]
pub struct PlaceOptions {
    /// Anchor on the element
    pub my: Deferred<AnchorPair>,
    /// Anchor on the target
    pub at: Deferred<AnchorPair>,
    /// The target
    pub of: Deferred<Subject>,
    /// Container for overlap and collision handling
    pub within: Deferred<Option<Subject>>,
    pub offset_x: Deferred<f64>,
    pub offset_y: Deferred<f64>,
    pub collision: Deferred<Collision>,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        Self {
            my: Deferred::Value(AnchorPair::default()),
            at: Deferred::Value(AnchorPair::default()),
            of: Deferred::Value(Subject::Box(BoxRef::Viewport)),
            within: Deferred::Value(None),
            offset_x: Deferred::Value(0.0),
            offset_y: Deferred::Value(0.0),
            collision: Deferred::Value(Collision::default()),
        }
    }
}

impl PlaceOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_my(mut self, my: impl Into<Deferred<AnchorPair>>) -> Self {
        self.my = my.into();
        self
    }

    pub fn with_at(mut self, at: impl Into<Deferred<AnchorPair>>) -> Self {
        self.at = at.into();
        self
    }

    /// Set the target
    pub fn with_of(mut self, of: impl Into<Deferred<Subject>>) -> Self {
        self.of = of.into();
        self
    }

    /// Set the container
    pub fn with_within(mut self, within: impl Into<Deferred<Option<Subject>>>) -> Self {
        self.within = within.into();
        self
    }

    pub fn with_offset(mut self, x: impl Into<Deferred<f64>>, y: impl Into<Deferred<f64>>) -> Self {
        self.offset_x = x.into();
        self.offset_y = y.into();
        self
    }

    pub fn with_collision(mut self, collision: impl Into<Deferred<Collision>>) -> Self {
        self.collision = collision.into();
        self
    }

    /// Evaluate every option for `element`
    ///
    /// Non-finite offsets are treated as zero.
    pub fn resolve(&self, element: &BoxRef) -> ResolvedOptions {
        ResolvedOptions {
            my: self.my.resolve(element),
            at: self.at.resolve(element),
            of: self.of.resolve(element),
            within: self.within.resolve(element),
            offset_x: finite_or_zero(self.offset_x.resolve(element)),
            offset_y: finite_or_zero(self.offset_y.resolve(element)),
            collision: self.collision.resolve(element),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Plain option values after evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub my: AnchorPair,
    pub at: AnchorPair,
    pub of: Subject,
    pub within: Option<Subject>,
    pub offset_x: f64,
    pub offset_y: f64,
    pub collision: Collision,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        PlaceOptions::default().resolve(&BoxRef::Viewport)
    }
}
