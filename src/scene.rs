//! Scene files: a layout snapshot plus a placement request
//!
//! ```toml
//! [viewport]
//! width = 1024.0
//! height = 768.0
//!
//! [elements.button]
//! rect = { x = 100.0, y = 40.0, width = 80.0, height = 24.0 }
//!
//! [elements.menu]
//! rect = { x = 0.0, y = 0.0, width = 160.0, height = 300.0 }
//! position = "absolute"
//!
//! [place]
//! element = "menu"
//! my = "left top"
//! at = "left bottom"
//! of = "button"
//! within = "viewport"
//! collision = { bottom = "push", right = "forcePush" }
//! ```
//!
//! `of` and `within` take an element name, `document`, `viewport`, a point
//! `[x, y]`, or a point in a frame `[x, y, "frame"]`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::PlaceError;
use crate::geometry::{Point, Size};
use crate::place::{place, AnchorPair, Collision, PlaceOptions, PlacementResult, Subject};
use crate::provider::{BoxProvider, BoxRef, MeasureOptions};
use crate::snapshot::{DocumentExtent, ElementRecord, Snapshot, Viewport};

/// Errors that can occur when loading or running a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to write TOML output: {0}")]
    OutputError(#[from] toml::ser::Error),
    #[error("scene has no element to place")]
    MissingElement,
    #[error(transparent)]
    Place(#[from] PlaceError),
}

/// The `[place]` section of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRequest {
    pub element: BoxRef,
    #[serde(default)]
    pub my: AnchorPair,
    #[serde(default)]
    pub at: AnchorPair,
    #[serde(default = "viewport_subject", deserialize_with = "subject")]
    pub of: Subject,
    #[serde(
        default,
        deserialize_with = "optional_subject",
        skip_serializing_if = "Option::is_none"
    )]
    pub within: Option<Subject>,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default)]
    pub collision: Collision,
}

impl PlaceRequest {
    /// Request with default options for `element`
    pub fn new(element: BoxRef) -> Self {
        Self {
            element,
            my: AnchorPair::default(),
            at: AnchorPair::default(),
            of: viewport_subject(),
            within: None,
            offset_x: 0.0,
            offset_y: 0.0,
            collision: Collision::default(),
        }
    }

    /// Convert to engine options
    pub fn to_options(&self) -> PlaceOptions {
        PlaceOptions::new()
            .with_my(self.my)
            .with_at(self.at)
            .with_of(self.of.clone())
            .with_within(self.within.clone())
            .with_offset(self.offset_x, self.offset_y)
            .with_collision(self.collision)
    }
}

fn viewport_subject() -> Subject {
    Subject::Box(BoxRef::Viewport)
}

/// Accepted spellings of a subject in TOML
#[derive(Deserialize)]
#[serde(untagged)]
enum SubjectForm {
    Named(BoxRef),
    Point(f64, f64),
    PointIn(f64, f64, BoxRef),
    Table {
        x: f64,
        y: f64,
        #[serde(default)]
        relative_to: Option<BoxRef>,
    },
}

impl From<SubjectForm> for Subject {
    fn from(form: SubjectForm) -> Self {
        match form {
            SubjectForm::Named(reference) => Subject::Box(reference),
            SubjectForm::Point(x, y) => Subject::point(x, y),
            SubjectForm::PointIn(x, y, frame) => Subject::point_in(x, y, frame),
            SubjectForm::Table { x, y, relative_to } => Subject::Point { x, y, relative_to },
        }
    }
}

fn subject<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Subject, D::Error> {
    SubjectForm::deserialize(deserializer).map(Subject::from)
}

fn optional_subject<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Subject>, D::Error> {
    Option::<SubjectForm>::deserialize(deserializer).map(|form| form.map(Subject::from))
}

/// Parse a subject from command-line text
///
/// `x,y` is a point, `x,y,frame` a point in a frame, anything else a
/// reference name.
pub fn parse_subject(text: &str) -> Subject {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let coords = match parts.as_slice() {
        [x, y] | [x, y, _] => x.parse::<f64>().ok().zip(y.parse::<f64>().ok()),
        _ => None,
    };
    match (coords, parts.get(2)) {
        (Some((x, y)), None) => Subject::point(x, y),
        (Some((x, y)), Some(frame)) => Subject::point_in(x, y, BoxRef::from(*frame)),
        (None, _) => Subject::Box(BoxRef::from(text)),
    }
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
struct TomlScene {
    #[serde(default)]
    viewport: Viewport,
    #[serde(default)]
    document: DocumentExtent,
    #[serde(default)]
    elements: BTreeMap<String, ElementRecord>,
    place: Option<PlaceRequest>,
}

/// A snapshot with an optional placement request
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub snapshot: Snapshot,
    pub request: Option<PlaceRequest>,
}

/// Everything the box provider reports about one reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub reference: BoxRef,
    /// Border box size
    pub size: Size,
    pub content_size: Size,
    pub offset: Point,
    pub position: Point,
    pub northwest_offset: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_parent: Option<BoxRef>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;
        Ok(Scene {
            snapshot: Snapshot {
                viewport: parsed.viewport,
                document: parsed.document,
                elements: parsed.elements,
            },
            request: parsed.place,
        })
    }

    /// Run the scene's placement request
    pub fn place(&self) -> Result<PlacementResult, SceneError> {
        let request = self.request.as_ref().ok_or(SceneError::MissingElement)?;
        Ok(place(&self.snapshot, &request.element, &request.to_options())?)
    }

    /// Measure one reference in the scene's snapshot
    pub fn measure(&self, reference: &BoxRef) -> Result<Measurement, PlaceError> {
        let snapshot = &self.snapshot;
        Ok(Measurement {
            reference: reference.clone(),
            size: snapshot.measure(reference, MeasureOptions::border_box())?,
            content_size: snapshot.measure(reference, MeasureOptions::content_box())?,
            offset: snapshot.offset(reference, false, false)?,
            position: snapshot.position(reference, false, false)?,
            northwest_offset: snapshot.northwest_offset(reference)?,
            offset_parent: snapshot.offset_parent(reference)?,
        })
    }
}
