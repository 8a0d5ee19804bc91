//! Document model - high-level API for PPTX presentations

mod autoshape;
mod paragraph;
mod properties;
mod run;
mod shape;
mod slide;

pub use autoshape::AutoShapeType;
pub use paragraph::{
    Alignment, Bullet, HorizontalAlignment, Paragraph, ParagraphElement, VerticalAlignment,
};
pub use properties::DocumentProperties;
pub use run::{Color, Font, Hyperlink, Run, Underline};
pub use shape::{AutoShape, Frame, ImageData, Picture, RichText, Shadow, Shape};
pub use slide::{Background, Slide};

use crate::error::Result;
use crate::reader::PresentationReader;
use std::path::Path;

/// Address of a shape inside a [`Presentation`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeLocation {
    /// Slide index
    pub slide: usize,
    /// Shape index within the slide
    pub shape: usize,
}

/// A PPTX presentation
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Core properties
    pub properties: DocumentProperties,
    /// Whether the author marked the presentation as final
    pub marked_as_final: bool,
    /// Zoom factor of the normal view (1.0 = 100%)
    pub zoom: f64,
    /// Slides in presentation order
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a new empty presentation
    pub fn new() -> Self {
        Self {
            properties: DocumentProperties::default(),
            marked_as_final: false,
            zoom: 1.0,
            slides: Vec::new(),
        }
    }

    /// Open a presentation from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        PresentationReader::new().load(path)
    }

    /// Open a password-protected presentation from a file path
    pub fn open_with_password<P: AsRef<Path>>(path: P, password: &str) -> Result<Self> {
        PresentationReader::new().password(password).load(path)
    }

    /// Open a presentation from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        PresentationReader::new().load_bytes(bytes)
    }

    /// Get slide count
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get slide by index
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Append a slide and return its index
    pub fn add_slide(&mut self, slide: Slide) -> usize {
        self.slides.push(slide);
        self.slides.len() - 1
    }

    /// Locations of every shape, slide by slide
    pub fn shapes(&self) -> impl Iterator<Item = ShapeLocation> + '_ {
        self.slides.iter().enumerate().flat_map(|(slide, s)| {
            (0..s.shapes.len()).map(move |shape| ShapeLocation { slide, shape })
        })
    }

    /// Get the shape at a location
    pub fn shape(&self, location: ShapeLocation) -> Option<&Shape> {
        self.slides.get(location.slide)?.shapes.get(location.shape)
    }

    /// Get all text in the presentation, one line per paragraph
    pub fn text(&self) -> String {
        self.slides
            .iter()
            .flat_map(|s| s.texts())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
