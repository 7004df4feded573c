//! Placement orchestration
//!
//! [`place`] reads every box it needs from a [`BoxProvider`] up front and
//! then hands plain numbers to [`solve`], which does the arithmetic:
//! anchor resolution per axis, overlap against the container, and at most
//! one collision correction per axis.

use serde::Serialize;

use crate::error::PlaceError;
use crate::geometry::{BoundingBox, Point, Size};
use crate::provider::{BoxProvider, BoxRef, MeasureOptions};

use super::anchor::{resolve_axis, AxisInput};
use super::collision::correction;
use super::options::{PlaceOptions, ResolvedOptions, Subject};
use super::overlap::{Axis, Overlap};

/// A subject together with the box it measured to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredBox {
    pub subject: Subject,
    pub bounds: BoundingBox,
}

/// Outcome of a placement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementResult {
    /// Left positioning offset to assign to the element
    pub left: f64,
    /// Top positioning offset to assign to the element
    pub top: f64,
    /// Final clearance inside the container, `None` without a container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<Overlap>,
    /// The element as measured before placement
    pub element: MeasuredBox,
    pub northwest_offset: Point,
    pub target: MeasuredBox,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<MeasuredBox>,
}

impl PlacementResult {
    /// Document-space box the element occupies once placed
    pub fn placed_bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.left + self.northwest_offset.x,
            self.top + self.northwest_offset.y,
            self.element.bounds.width,
            self.element.bounds.height,
        )
    }
}

/// Everything [`solve`] needs to know about the boxes involved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub element: Size,
    pub northwest: Point,
    pub target: BoundingBox,
    pub container: Option<BoundingBox>,
}

/// Position and clearance computed by [`solve`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub left: f64,
    pub top: f64,
    pub overlap: Option<Overlap>,
}

/// Compute the element position from already-measured geometry
pub fn solve(geometry: &Geometry, options: &ResolvedOptions) -> Solution {
    let horizontal = AxisInput {
        target_size: geometry.target.width,
        target_offset: geometry.target.x,
        element_size: geometry.element.width,
        element_northwest: geometry.northwest.x,
        extra_offset: options.offset_x,
    };
    let vertical = AxisInput {
        target_size: geometry.target.height,
        target_offset: geometry.target.y,
        element_size: geometry.element.height,
        element_northwest: geometry.northwest.y,
        extra_offset: options.offset_y,
    };

    let mut left = resolve_axis(options.my.horizontal, options.at.horizontal, &horizontal);
    let mut top = resolve_axis(options.my.vertical, options.at.vertical, &vertical);

    let Some(container) = geometry.container else {
        return Solution {
            left,
            top,
            overlap: None,
        };
    };

    let mut overlap = overlap_at(geometry, &container, left, top);
    if !options.collision.is_inert() {
        // Both deltas come from the same overlap; no second round
        left += correction(&options.collision, &overlap, Axis::Horizontal);
        top += correction(&options.collision, &overlap, Axis::Vertical);
        overlap = overlap_at(geometry, &container, left, top);
    }

    Solution {
        left,
        top,
        overlap: Some(overlap),
    }
}

fn overlap_at(geometry: &Geometry, container: &BoundingBox, left: f64, top: f64) -> Overlap {
    let element = BoundingBox::from_parts(
        geometry.northwest.offset_by(left, top),
        geometry.element,
    );
    Overlap::between(&element, container)
}

/// Measure a subject as a document-space box
///
/// Boxes are measured including padding and border. A point becomes a
/// zero-size box offset from its frame.
pub fn measure_subject<P: BoxProvider + ?Sized>(
    provider: &P,
    subject: &Subject,
) -> Result<BoundingBox, PlaceError> {
    match subject {
        Subject::Box(reference) => {
            let size = provider.measure(reference, MeasureOptions::border_box())?;
            let offset = provider.offset(reference, false, false)?;
            Ok(BoundingBox::from_parts(offset, size))
        }
        Subject::Point { x, y, relative_to } => {
            let frame = relative_to.as_ref().unwrap_or(&BoxRef::Viewport);
            let origin = provider.offset(frame, false, false)?;
            Ok(BoundingBox::from_parts(
                origin.offset_by(*x, *y),
                Size::default(),
            ))
        }
    }
}

/// Place `element` according to `options`
pub fn place<P: BoxProvider + ?Sized>(
    provider: &P,
    element: &BoxRef,
    options: &PlaceOptions,
) -> Result<PlacementResult, PlaceError> {
    let options = options.resolve(element);

    let element_box = measure_subject(provider, &Subject::Box(element.clone()))?;
    let northwest = provider.northwest_offset(element)?;
    let target = measure_subject(provider, &options.of)?;
    let container = options
        .within
        .as_ref()
        .map(|subject| measure_subject(provider, subject))
        .transpose()?;

    let geometry = Geometry {
        element: element_box.size(),
        northwest,
        target,
        container,
    };
    tracing::debug!(%element, of = %options.of, ?geometry, "placing element");

    let solution = solve(&geometry, &options);
    tracing::debug!(
        %element,
        left = solution.left,
        top = solution.top,
        overlap = ?solution.overlap,
        "placement computed"
    );

    Ok(PlacementResult {
        left: solution.left,
        top: solution.top,
        overlap: solution.overlap,
        element: MeasuredBox {
            subject: Subject::Box(element.clone()),
            bounds: element_box,
        },
        northwest_offset: northwest,
        target: MeasuredBox {
            subject: options.of,
            bounds: target,
        },
        container: options
            .within
            .zip(container)
            .map(|(subject, bounds)| MeasuredBox { subject, bounds }),
    })
}
