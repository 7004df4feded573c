//! The box provider capability
//!
//! Placement never inspects layout internals. Everything it knows about a
//! box comes through [`BoxProvider`], which turns a [`BoxRef`] into plain
//! numeric geometry. Implementations are expected to answer every call of
//! one placement from the same consistent layout state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlaceError;
use crate::geometry::{Point, Size};

/// A handle to something that can be measured
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoxRef {
    /// A named element
    Element(String),
    /// The whole scrollable document
    Document,
    /// The visible area of the window
    Viewport,
}

impl BoxRef {
    pub fn element(name: impl Into<String>) -> Self {
        Self::Element(name.into())
    }

    /// Element name, if this refers to an element
    pub fn element_name(&self) -> Option<&str> {
        match self {
            Self::Element(name) => Some(name),
            Self::Document | Self::Viewport => None,
        }
    }
}

impl fmt::Display for BoxRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(name) => f.write_str(name),
            Self::Document => f.write_str("document"),
            Self::Viewport => f.write_str("viewport"),
        }
    }
}

/// `document`, `viewport` and `window` are reserved; every other name is an element
impl From<&str> for BoxRef {
    fn from(s: &str) -> Self {
        match s.trim() {
            "document" => Self::Document,
            "viewport" | "window" => Self::Viewport,
            name => Self::Element(name.to_string()),
        }
    }
}

impl FromStr for BoxRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for BoxRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BoxRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(BoxRef::from(name.as_str()))
    }
}

/// Which parts of the box model a size measurement covers
///
/// Scrollbars of elements are always part of their size; `viewport_scrollbar`
/// only affects the viewport and document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasureOptions {
    pub padding: bool,
    pub border: bool,
    pub margin: bool,
    pub viewport_scrollbar: bool,
}

impl MeasureOptions {
    /// Content box only
    pub fn content_box() -> Self {
        Self::default()
    }

    /// Content, padding and border
    pub fn border_box() -> Self {
        Self {
            padding: true,
            border: true,
            ..Self::default()
        }
    }

    /// Border box plus margin
    pub fn margin_box() -> Self {
        Self {
            margin: true,
            ..Self::border_box()
        }
    }

    pub fn with_viewport_scrollbar(mut self, include: bool) -> Self {
        self.viewport_scrollbar = include;
        self
    }
}

/// Source of box geometry for placement
pub trait BoxProvider {
    /// Outer size of a box
    fn measure(&self, reference: &BoxRef, options: MeasureOptions) -> Result<Size, PlaceError>;

    /// Distance of a box from the document's northwest corner
    fn offset(
        &self,
        reference: &BoxRef,
        include_padding: bool,
        include_border: bool,
    ) -> Result<Point, PlaceError>;

    /// Where the box's offset would be with its left/top positioning offsets set to zero
    fn northwest_offset(&self, reference: &BoxRef) -> Result<Point, PlaceError>;

    /// The box the reference is positioned against, `None` for the document
    fn offset_parent(&self, reference: &BoxRef) -> Result<Option<BoxRef>, PlaceError>;

    /// Distance of a box from its offset parent
    ///
    /// The viewport and document report their plain offsets.
    fn position(
        &self,
        reference: &BoxRef,
        include_parent_padding: bool,
        include_parent_border: bool,
    ) -> Result<Point, PlaceError> {
        let offset = self.offset(reference, false, false)?;
        if reference.element_name().is_none() {
            return Ok(offset);
        }
        let parent = self
            .offset_parent(reference)?
            .unwrap_or(BoxRef::Document);
        let parent_offset = self.offset(&parent, include_parent_padding, include_parent_border)?;
        Ok(Point::new(offset.x - parent_offset.x, offset.y - parent_offset.y))
    }
}
