//! In-memory layout snapshot implementing [`BoxProvider`]
//!
//! A snapshot records the viewport, the document extent and the rendered
//! boxes of named elements at one moment in time. Because it never changes,
//! every measurement taken during a placement is mutually consistent.
//!
//! Element rectangles are border boxes in viewport coordinates, the same
//! numbers a browser reports for a client rect.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PlaceError;
use crate::geometry::{BoundingBox, Edges, Point, Size};
use crate::provider::{BoxProvider, BoxRef, MeasureOptions};

/// Errors that can occur when loading a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse snapshot TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// CSS positioning scheme of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

/// Positioning offsets; `None` is `auto`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Inset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
}

/// Rendered geometry and positioning style of one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Border box in viewport coordinates
    pub rect: BoundingBox,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub padding: Edges,
    #[serde(default)]
    pub border: Edges,
    #[serde(default)]
    pub margin: Edges,
    #[serde(default)]
    pub inset: Inset,
    /// Nearest ancestor the layout engine reports as offset parent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_parent: Option<String>,
}

impl ElementRecord {
    pub fn new(rect: BoundingBox) -> Self {
        Self {
            rect,
            position: Position::Static,
            padding: Edges::default(),
            border: Edges::default(),
            margin: Edges::default(),
            inset: Inset::default(),
            offset_parent: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: Edges) -> Self {
        self.border = border;
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_inset(mut self, inset: Inset) -> Self {
        self.inset = inset;
        self
    }

    pub fn with_offset_parent(mut self, parent: impl Into<String>) -> Self {
        self.offset_parent = Some(parent.into());
        self
    }
}

/// The visible area of the window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Inner width, vertical scrollbar included
    pub width: f64,
    /// Inner height, horizontal scrollbar included
    pub height: f64,
    /// Width of the vertical scrollbar
    pub scrollbar_width: f64,
    /// Height of the horizontal scrollbar
    pub scrollbar_height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_scrollbars(mut self, width: f64, height: f64) -> Self {
        self.scrollbar_width = width;
        self.scrollbar_height = height;
        self
    }

    pub fn with_scroll(mut self, x: f64, y: f64) -> Self {
        self.scroll_x = x;
        self.scroll_y = y;
        self
    }

    /// Size without scrollbars
    pub fn client_size(&self) -> Size {
        Size::new(
            self.width - self.scrollbar_width,
            self.height - self.scrollbar_height,
        )
    }

    pub fn scroll(&self) -> Point {
        Point::new(self.scroll_x, self.scroll_y)
    }
}

/// Scrollable extent of the document
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentExtent {
    pub scroll_width: f64,
    pub scroll_height: f64,
}

/// A frozen layout state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub viewport: Viewport,
    pub document: DocumentExtent,
    pub elements: BTreeMap<String, ElementRecord>,
}

impl Snapshot {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            document: DocumentExtent::default(),
            elements: BTreeMap::new(),
        }
    }

    pub fn with_document(mut self, scroll_width: f64, scroll_height: f64) -> Self {
        self.document = DocumentExtent {
            scroll_width,
            scroll_height,
        };
        self
    }

    pub fn with_element(mut self, name: impl Into<String>, record: ElementRecord) -> Self {
        self.elements.insert(name.into(), record);
        self
    }

    /// Load a snapshot from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a snapshot from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(content)?)
    }

    /// Look up an element record
    pub fn record(&self, name: &str) -> Result<&ElementRecord, PlaceError> {
        self.elements
            .get(name)
            .ok_or_else(|| PlaceError::unavailable(name, "element is not in the snapshot"))
    }

    fn document_size(&self, include_scrollbar: bool) -> Size {
        let client = self.viewport.client_size();
        if include_scrollbar {
            Size::new(
                (self.document.scroll_width + self.viewport.scrollbar_width)
                    .max(self.viewport.width),
                (self.document.scroll_height + self.viewport.scrollbar_height)
                    .max(self.viewport.height),
            )
        } else {
            Size::new(
                self.document.scroll_width.max(client.width),
                self.document.scroll_height.max(client.height),
            )
        }
    }

    /// Walk up from an absolutely positioned element past static ancestors
    fn positioned_ancestor(&self, name: &str, record: &ElementRecord) -> Result<BoxRef, PlaceError> {
        let mut current = record.offset_parent.as_deref();
        // A chain longer than the element count must revisit some element
        for _ in 0..=self.elements.len() {
            let Some(parent_name) = current else {
                return Ok(BoxRef::Document);
            };
            let parent = self.elements.get(parent_name).ok_or_else(|| {
                PlaceError::unavailable(name, format!("offset parent '{parent_name}' is missing"))
            })?;
            if parent.position != Position::Static {
                return Ok(BoxRef::element(parent_name));
            }
            current = parent.offset_parent.as_deref();
        }
        Err(PlaceError::unavailable(name, "offset parent chain is cyclic"))
    }
}

impl BoxProvider for Snapshot {
    fn measure(&self, reference: &BoxRef, options: MeasureOptions) -> Result<Size, PlaceError> {
        match reference {
            BoxRef::Viewport if options.viewport_scrollbar => {
                Ok(Size::new(self.viewport.width, self.viewport.height))
            }
            BoxRef::Viewport => Ok(self.viewport.client_size()),
            BoxRef::Document => Ok(self.document_size(options.viewport_scrollbar)),
            BoxRef::Element(name) => {
                let record = self.record(name)?;
                let mut size = record.rect.size();
                if !options.padding {
                    size.width -= record.padding.horizontal();
                    size.height -= record.padding.vertical();
                }
                if !options.border {
                    size.width -= record.border.horizontal();
                    size.height -= record.border.vertical();
                }
                if options.margin {
                    size.width += record.margin.horizontal();
                    size.height += record.margin.vertical();
                }
                Ok(size)
            }
        }
    }

    fn offset(
        &self,
        reference: &BoxRef,
        include_padding: bool,
        include_border: bool,
    ) -> Result<Point, PlaceError> {
        match reference {
            BoxRef::Viewport => Ok(self.viewport.scroll()),
            BoxRef::Document => Ok(Point::default()),
            BoxRef::Element(name) => {
                let record = self.record(name)?;
                let mut offset = record
                    .rect
                    .origin()
                    .offset_by(self.viewport.scroll_x, self.viewport.scroll_y);
                if include_padding {
                    offset = offset.offset_by(record.padding.left, record.padding.top);
                }
                if include_border {
                    offset = offset.offset_by(record.border.left, record.border.top);
                }
                Ok(offset)
            }
        }
    }

    fn northwest_offset(&self, reference: &BoxRef) -> Result<Point, PlaceError> {
        let BoxRef::Element(name) = reference else {
            return self.offset(reference, false, false);
        };
        let record = self.record(name)?;
        match record.position {
            Position::Static => self.offset(reference, false, false),
            Position::Relative => {
                let offset = self.offset(reference, false, false)?;
                let inset = &record.inset;
                Ok(Point::new(
                    offset.x - shift(inset.left, inset.right),
                    offset.y - shift(inset.top, inset.bottom),
                ))
            }
            Position::Absolute | Position::Fixed => {
                let parent = self.offset_parent(reference)?.unwrap_or(BoxRef::Document);
                self.offset(&parent, false, true)
            }
        }
    }

    fn offset_parent(&self, reference: &BoxRef) -> Result<Option<BoxRef>, PlaceError> {
        match reference {
            BoxRef::Document => Ok(None),
            BoxRef::Viewport => Ok(Some(BoxRef::Document)),
            BoxRef::Element(name) => {
                let record = self.record(name)?;
                let parent = match record.position {
                    Position::Fixed => BoxRef::Viewport,
                    Position::Absolute => self.positioned_ancestor(name, record)?,
                    Position::Static | Position::Relative => record
                        .offset_parent
                        .as_deref()
                        .map_or(BoxRef::Document, BoxRef::element),
                };
                Ok(Some(parent))
            }
        }
    }
}

/// How far a relatively positioned box is displaced along one axis
///
/// The start inset wins; the end inset only applies when the start is auto.
fn shift(start: Option<f64>, end: Option<f64>) -> f64 {
    match (start, end) {
        (Some(start), _) => start,
        (None, Some(end)) => -end,
        (None, None) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot::new(Viewport::new(800.0, 600.0).with_scrollbars(15.0, 0.0))
            .with_document(800.0, 2000.0)
            .with_element(
                "card",
                ElementRecord::new(BoundingBox::new(100.0, 50.0, 200.0, 100.0))
                    .with_position(Position::Relative)
                    .with_padding(Edges::uniform(10.0))
                    .with_border(Edges::uniform(2.0))
                    .with_margin(Edges::new(5.0, 5.0, 0.0, 0.0))
                    .with_inset(Inset {
                        right: Some(6.0),
                        top: Some(4.0),
                        ..Inset::default()
                    }),
            )
            .with_element(
                "wrapper",
                ElementRecord::new(BoundingBox::new(0.0, 0.0, 800.0, 400.0)),
            )
            .with_element(
                "tooltip",
                ElementRecord::new(BoundingBox::new(30.0, 30.0, 40.0, 20.0))
                    .with_position(Position::Absolute)
                    .with_offset_parent("wrapper"),
            )
    }

    #[test]
    fn test_measure_element_box_model() {
        let snap = snapshot();
        let card = BoxRef::element("card");
        assert_eq!(
            snap.measure(&card, MeasureOptions::border_box()).unwrap(),
            Size::new(200.0, 100.0)
        );
        assert_eq!(
            snap.measure(&card, MeasureOptions::content_box()).unwrap(),
            Size::new(176.0, 76.0)
        );
        assert_eq!(
            snap.measure(&card, MeasureOptions::margin_box()).unwrap(),
            Size::new(210.0, 100.0)
        );
    }

    #[test]
    fn test_measure_viewport_and_document() {
        let snap = snapshot();
        let with_bar = MeasureOptions::default().with_viewport_scrollbar(true);
        assert_eq!(
            snap.measure(&BoxRef::Viewport, MeasureOptions::default()).unwrap(),
            Size::new(785.0, 600.0)
        );
        assert_eq!(
            snap.measure(&BoxRef::Viewport, with_bar).unwrap(),
            Size::new(800.0, 600.0)
        );
        assert_eq!(
            snap.measure(&BoxRef::Document, MeasureOptions::default()).unwrap(),
            Size::new(800.0, 2000.0)
        );
        assert_eq!(
            snap.measure(&BoxRef::Document, with_bar).unwrap(),
            Size::new(815.0, 2000.0)
        );
    }

    #[test]
    fn test_offset_includes_scroll_padding_and_border() {
        let snap = Snapshot {
            viewport: snapshot().viewport.with_scroll(0.0, 300.0),
            ..snapshot()
        };
        let card = BoxRef::element("card");
        assert_eq!(
            snap.offset(&card, false, false).unwrap(),
            Point::new(100.0, 350.0)
        );
        assert_eq!(
            snap.offset(&card, true, true).unwrap(),
            Point::new(112.0, 362.0)
        );
        assert_eq!(
            snap.offset(&BoxRef::Viewport, true, true).unwrap(),
            Point::new(0.0, 300.0)
        );
        assert_eq!(
            snap.offset(&BoxRef::Document, false, false).unwrap(),
            Point::default()
        );
    }

    #[test]
    fn test_relative_northwest_undoes_insets() {
        let snap = snapshot();
        // right: 6 moved it left, top: 4 moved it down
        assert_eq!(
            snap.northwest_offset(&BoxRef::element("card")).unwrap(),
            Point::new(106.0, 46.0)
        );
    }

    #[test]
    fn test_absolute_skips_static_ancestors() {
        let snap = snapshot();
        let tooltip = BoxRef::element("tooltip");
        assert_eq!(snap.offset_parent(&tooltip).unwrap(), Some(BoxRef::Document));
        assert_eq!(snap.northwest_offset(&tooltip).unwrap(), Point::default());

        let positioned = snap.with_element(
            "wrapper",
            ElementRecord::new(BoundingBox::new(10.0, 20.0, 800.0, 400.0))
                .with_position(Position::Relative)
                .with_border(Edges::uniform(1.0)),
        );
        assert_eq!(
            positioned.offset_parent(&tooltip).unwrap(),
            Some(BoxRef::element("wrapper"))
        );
        assert_eq!(
            positioned.northwest_offset(&tooltip).unwrap(),
            Point::new(11.0, 21.0)
        );
    }

    #[test]
    fn test_fixed_is_positioned_against_viewport() {
        let snap = Snapshot {
            viewport: snapshot().viewport.with_scroll(0.0, 120.0),
            ..snapshot()
        }
        .with_element(
            "toast",
            ElementRecord::new(BoundingBox::new(0.0, 0.0, 10.0, 10.0))
                .with_position(Position::Fixed),
        );
        let toast = BoxRef::element("toast");
        assert_eq!(snap.offset_parent(&toast).unwrap(), Some(BoxRef::Viewport));
        assert_eq!(snap.northwest_offset(&toast).unwrap(), Point::new(0.0, 120.0));
    }

    #[test]
    fn test_position_relative_to_offset_parent() {
        let snap = snapshot().with_element(
            "wrapper",
            ElementRecord::new(BoundingBox::new(10.0, 20.0, 800.0, 400.0))
                .with_position(Position::Relative)
                .with_padding(Edges::uniform(3.0)),
        );
        let tooltip = BoxRef::element("tooltip");
        assert_eq!(
            snap.position(&tooltip, false, false).unwrap(),
            Point::new(20.0, 10.0)
        );
        assert_eq!(
            snap.position(&tooltip, true, false).unwrap(),
            Point::new(17.0, 7.0)
        );
        assert_eq!(
            snap.position(&BoxRef::Viewport, false, false).unwrap(),
            Point::default()
        );
    }

    #[test]
    fn test_missing_element_is_unavailable() {
        let err = snapshot()
            .measure(&BoxRef::element("ghost"), MeasureOptions::border_box())
            .unwrap_err();
        assert_eq!(err.reference(), "ghost");
    }

    #[test]
    fn test_cyclic_offset_parents_are_unavailable() {
        let snap = snapshot()
            .with_element(
                "a",
                ElementRecord::new(BoundingBox::zero()).with_offset_parent("b"),
            )
            .with_element(
                "b",
                ElementRecord::new(BoundingBox::zero()).with_offset_parent("a"),
            )
            .with_element(
                "floating",
                ElementRecord::new(BoundingBox::zero())
                    .with_position(Position::Absolute)
                    .with_offset_parent("a"),
            );
        let err = snap.offset_parent(&BoxRef::element("floating")).unwrap_err();
        assert!(err.to_string().contains("cyclic"));
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[viewport]
width = 1024.0
height = 768.0

[document]
scroll_height = 4000.0

[elements.menu]
rect = { x = 10.0, y = 20.0, width = 120.0, height = 200.0 }
position = "absolute"
border = { left = 1.0, right = 1.0 }
inset = { left = 10.0 }
"#;
        let snap = Snapshot::from_str(toml_str).expect("Should parse");
        assert_eq!(snap.viewport.width, 1024.0);
        assert_eq!(snap.document.scroll_height, 4000.0);
        let menu = snap.record("menu").expect("menu exists");
        assert_eq!(menu.position, Position::Absolute);
        assert_eq!(menu.border.left, 1.0);
        assert_eq!(menu.border.top, 0.0);
        assert_eq!(menu.inset.left, Some(10.0));
        assert_eq!(menu.inset.top, None);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Snapshot::from_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }
}
