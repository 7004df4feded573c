//! Every anchor combination on both axes.
//!
//! A 10x10 element is placed against a 10x10 target at (10, 10). The
//! expected coordinates are the same for absolute, relative and fixed
//! elements because the element's own northwest offset is the origin.

use pretty_assertions::assert_eq;

use box_placement::{
    place, BoundingBox, BoxRef, ElementRecord, PlaceOptions, Position, Snapshot, Viewport,
};

/// (my, at, expected left, expected top)
const POSITIONS: &[(&str, &str, f64, f64)] = &[
    ("left top", "left top", 10.0, 10.0),
    ("center top", "left top", 5.0, 10.0),
    ("right top", "left top", 0.0, 10.0),
    ("left center", "left top", 10.0, 5.0),
    ("center center", "left top", 5.0, 5.0),
    ("right center", "left top", 0.0, 5.0),
    ("left bottom", "left top", 10.0, 0.0),
    ("center bottom", "left top", 5.0, 0.0),
    ("right bottom", "left top", 0.0, 0.0),
    ("left top", "center top", 15.0, 10.0),
    ("center top", "center top", 10.0, 10.0),
    ("right top", "center top", 5.0, 10.0),
    ("left center", "center top", 15.0, 5.0),
    ("center center", "center top", 10.0, 5.0),
    ("right center", "center top", 5.0, 5.0),
    ("left bottom", "center top", 15.0, 0.0),
    ("center bottom", "center top", 10.0, 0.0),
    ("right bottom", "center top", 5.0, 0.0),
    ("left top", "right top", 20.0, 10.0),
    ("center top", "right top", 15.0, 10.0),
    ("right top", "right top", 10.0, 10.0),
    ("left center", "right top", 20.0, 5.0),
    ("center center", "right top", 15.0, 5.0),
    ("right center", "right top", 10.0, 5.0),
    ("left bottom", "right top", 20.0, 0.0),
    ("center bottom", "right top", 15.0, 0.0),
    ("right bottom", "right top", 10.0, 0.0),
    ("left top", "left center", 10.0, 15.0),
    ("center top", "left center", 5.0, 15.0),
    ("right top", "left center", 0.0, 15.0),
    ("left center", "left center", 10.0, 10.0),
    ("center center", "left center", 5.0, 10.0),
    ("right center", "left center", 0.0, 10.0),
    ("left bottom", "left center", 10.0, 5.0),
    ("center bottom", "left center", 5.0, 5.0),
    ("right bottom", "left center", 0.0, 5.0),
    ("left top", "center center", 15.0, 15.0),
    ("center top", "center center", 10.0, 15.0),
    ("right top", "center center", 5.0, 15.0),
    ("left center", "center center", 15.0, 10.0),
    ("center center", "center center", 10.0, 10.0),
    ("right center", "center center", 5.0, 10.0),
    ("left bottom", "center center", 15.0, 5.0),
    ("center bottom", "center center", 10.0, 5.0),
    ("right bottom", "center center", 5.0, 5.0),
    ("left top", "right center", 20.0, 15.0),
    ("center top", "right center", 15.0, 15.0),
    ("right top", "right center", 10.0, 15.0),
    ("left center", "right center", 20.0, 10.0),
    ("center center", "right center", 15.0, 10.0),
    ("right center", "right center", 10.0, 10.0),
    ("left bottom", "right center", 20.0, 5.0),
    ("center bottom", "right center", 15.0, 5.0),
    ("right bottom", "right center", 10.0, 5.0),
    ("left top", "left bottom", 10.0, 20.0),
    ("center top", "left bottom", 5.0, 20.0),
    ("right top", "left bottom", 0.0, 20.0),
    ("left center", "left bottom", 10.0, 15.0),
    ("center center", "left bottom", 5.0, 15.0),
    ("right center", "left bottom", 0.0, 15.0),
    ("left bottom", "left bottom", 10.0, 10.0),
    ("center bottom", "left bottom", 5.0, 10.0),
    ("right bottom", "left bottom", 0.0, 10.0),
    ("left top", "center bottom", 15.0, 20.0),
    ("center top", "center bottom", 10.0, 20.0),
    ("right top", "center bottom", 5.0, 20.0),
    ("left center", "center bottom", 15.0, 15.0),
    ("center center", "center bottom", 10.0, 15.0),
    ("right center", "center bottom", 5.0, 15.0),
    ("left bottom", "center bottom", 15.0, 10.0),
    ("center bottom", "center bottom", 10.0, 10.0),
    ("right bottom", "center bottom", 5.0, 10.0),
    ("left top", "right bottom", 20.0, 20.0),
    ("center top", "right bottom", 15.0, 20.0),
    ("right top", "right bottom", 10.0, 20.0),
    ("left center", "right bottom", 20.0, 15.0),
    ("center center", "right bottom", 15.0, 15.0),
    ("right center", "right bottom", 10.0, 15.0),
    ("left bottom", "right bottom", 20.0, 10.0),
    ("center bottom", "right bottom", 15.0, 10.0),
    ("right bottom", "right bottom", 10.0, 10.0),
];

fn snapshot(position: Position) -> Snapshot {
    Snapshot::new(Viewport::new(1000.0, 1000.0))
        .with_element(
            "target",
            ElementRecord::new(BoundingBox::new(10.0, 10.0, 10.0, 10.0))
                .with_position(Position::Absolute),
        )
        .with_element(
            "element",
            ElementRecord::new(BoundingBox::new(0.0, 0.0, 10.0, 10.0)).with_position(position),
        )
}

fn check_all_positions(position: Position) {
    let snapshot = snapshot(position);
    let element = BoxRef::element("element");

    for &(my, at, left, top) in POSITIONS {
        let options = PlaceOptions::new()
            .with_my(my)
            .with_at(at)
            .with_of(BoxRef::element("target"));
        let result = place(&snapshot, &element, &options).expect("Should place");
        assert_eq!(
            (result.left, result.top),
            (left, top),
            "{:?} - my: {} - at: {}",
            position,
            my,
            at
        );
    }
}

#[test]
fn test_grid_has_every_combination() {
    assert_eq!(POSITIONS.len(), 81);
}

#[test]
fn test_absolute_element_positions() {
    check_all_positions(Position::Absolute);
}

#[test]
fn test_relative_element_positions() {
    check_all_positions(Position::Relative);
}

#[test]
fn test_fixed_element_positions() {
    check_all_positions(Position::Fixed);
}

#[test]
fn test_static_element_positions() {
    check_all_positions(Position::Static);
}
