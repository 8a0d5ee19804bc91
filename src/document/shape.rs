//! Shapes on a slide (p:pic, p:sp)

use crate::document::{AutoShapeType, Color, Paragraph};

/// Position, size and rotation of a shape
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Horizontal offset in pixels
    pub x: i64,
    /// Vertical offset in pixels
    pub y: i64,
    /// Width in pixels
    pub width: i64,
    /// Height in pixels
    pub height: i64,
    /// Rotation in degrees
    pub rotation: i64,
}

/// Outer shadow effect (a:effectLst/a:outerShdw)
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Whether an effect list was present
    pub visible: bool,
    /// Blur radius in pixels
    pub blur_radius: i64,
    /// Distance in pixels
    pub distance: i64,
    /// Direction in degrees
    pub direction: i64,
    /// Alignment (ST_RectAlignment, e.g. "b", "tl")
    pub alignment: String,
    /// Shadow color
    pub color: Color,
    /// Opacity, 0.0 to 1.0
    pub alpha: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            visible: false,
            blur_radius: 6,
            distance: 2,
            direction: 0,
            alignment: "b".to_string(),
            color: Color::default(),
            alpha: 0.5,
        }
    }
}

/// Image bytes referenced from the package
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageData {
    /// Part name inside the package (e.g. `/ppt/media/image1.png`)
    pub path: String,
    /// MIME type from `[Content_Types].xml`
    pub content_type: Option<String>,
    /// Raw, undecoded bytes
    pub bytes: Vec<u8>,
}

/// Picture shape (p:pic)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Picture {
    pub name: String,
    pub description: String,
    /// `None` when the image relationship or part is missing
    pub image: Option<ImageData>,
    pub frame: Frame,
    pub shadow: Shadow,
}

/// Text shape (p:sp)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    pub name: String,
    pub frame: Frame,
    pub shadow: Shadow,
    /// Preset geometry when the shape declares a known one
    pub preset_geometry: Option<AutoShapeType>,
    pub paragraphs: Vec<Paragraph>,
}

impl RichText {
    /// Get all text; paragraphs are separated by `\n`
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Preset geometry shape with plain text, built by callers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutoShape {
    pub kind: AutoShapeType,
    pub frame: Frame,
    pub shadow: Shadow,
    pub text: String,
}

impl AutoShape {
    pub fn new(kind: AutoShapeType) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Set the text and return self
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// A shape on a slide
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Picture(Picture),
    RichText(RichText),
    AutoShape(AutoShape),
}

impl Shape {
    /// Position and size
    pub fn frame(&self) -> &Frame {
        match self {
            Shape::Picture(p) => &p.frame,
            Shape::RichText(t) => &t.frame,
            Shape::AutoShape(a) => &a.frame,
        }
    }

    /// Shadow effect
    pub fn shadow(&self) -> &Shadow {
        match self {
            Shape::Picture(p) => &p.shadow,
            Shape::RichText(t) => &t.shadow,
            Shape::AutoShape(a) => &a.shadow,
        }
    }

    pub fn as_picture(&self) -> Option<&Picture> {
        match self {
            Shape::Picture(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_rich_text(&self) -> Option<&RichText> {
        match self {
            Shape::RichText(t) => Some(t),
            _ => None,
        }
    }
}

impl From<AutoShape> for Shape {
    fn from(shape: AutoShape) -> Self {
        Shape::AutoShape(shape)
    }
}
