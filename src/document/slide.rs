//! Slide (p:sld)

use crate::document::{Color, ImageData, Shape};

/// Slide background (p:bg/p:bgPr)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Background {
    /// Solid fill
    Color(Color),
    /// Picture fill
    Image(ImageData),
}

/// A slide
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    /// Part name of the slide (e.g. `/ppt/slides/slide1.xml`)
    pub part_name: String,
    pub background: Option<Background>,
    /// Shapes in document order
    pub shapes: Vec<Shape>,
    /// Name of the slide layout, when it could be resolved
    pub layout_name: Option<String>,
    /// Number of the slide master the layout belongs to
    pub master_id: u32,
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            part_name: String::new(),
            background: None,
            shapes: Vec::new(),
            layout_name: None,
            master_id: 1,
        }
    }
}

impl Slide {
    pub fn new(part_name: impl Into<String>) -> Self {
        Self {
            part_name: part_name.into(),
            ..Default::default()
        }
    }

    /// Append a shape and return its index
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> usize {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    /// Get the text of every rich-text shape, one entry per shape
    pub fn texts(&self) -> Vec<String> {
        self.shapes
            .iter()
            .filter_map(Shape::as_rich_text)
            .map(|t| t.text())
            .collect()
    }
}
