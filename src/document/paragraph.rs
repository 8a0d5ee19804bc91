//! Paragraph element (a:p)

use crate::document::Run;

/// Paragraph element (a:p)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph {
    /// Alignment, margins and outline level
    pub alignment: Alignment,
    /// Bullet style
    pub bullet: Bullet,
    /// Runs and line breaks, in document order
    pub elements: Vec<ParagraphElement>,
}

/// Content within a paragraph
#[derive(Clone, Debug, PartialEq)]
pub enum ParagraphElement {
    /// Text run (a:r)
    Run(Run),
    /// Line break (a:br)
    Break,
}

/// Horizontal text alignment (a:pPr/@algn)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
    JustifyLow,
    Distributed,
    ThaiDistributed,
}

impl HorizontalAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "l" => Self::Left,
            "ctr" => Self::Center,
            "r" => Self::Right,
            "just" => Self::Justify,
            "justLow" => Self::JustifyLow,
            "dist" => Self::Distributed,
            "thaiDist" => Self::ThaiDistributed,
            _ => return None,
        })
    }
}

/// Vertical font alignment (a:pPr/@fontAlgn)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    #[default]
    Auto,
    Baseline,
    Bottom,
    Center,
    Top,
}

impl VerticalAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "auto" => Self::Auto,
            "base" => Self::Baseline,
            "b" => Self::Bottom,
            "ctr" => Self::Center,
            "t" => Self::Top,
            _ => return None,
        })
    }
}

/// Paragraph alignment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    /// Left margin in pixels
    pub margin_left: i64,
    /// Right margin in pixels
    pub margin_right: i64,
    /// First-line indent in pixels
    pub indent: i64,
    /// Outline level (0-8)
    pub level: u32,
}

/// Bullet style
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Bullet {
    #[default]
    None,
    Bulleted {
        /// Bullet typeface
        font: String,
        /// Bullet character
        char: String,
    },
}

impl Bullet {
    pub const DEFAULT_FONT: &'static str = "Calibri";
    pub const DEFAULT_CHAR: &'static str = "-";

    /// A bullet with the default font and character
    pub fn bulleted() -> Self {
        Bullet::Bulleted {
            font: Self::DEFAULT_FONT.to_string(),
            char: Self::DEFAULT_CHAR.to_string(),
        }
    }
}

impl Paragraph {
    /// Create a paragraph with a single default-formatted run
    pub fn new(text: impl Into<String>) -> Self {
        let mut para = Paragraph::default();
        para.add_run(Run::new(text));
        para
    }

    /// Append a run
    pub fn add_run(&mut self, run: Run) {
        self.elements.push(ParagraphElement::Run(run));
    }

    /// Append a line break
    pub fn add_break(&mut self) {
        self.elements.push(ParagraphElement::Break);
    }

    /// Get all runs, skipping breaks
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.elements.iter().filter_map(|e| match e {
            ParagraphElement::Run(run) => Some(run),
            ParagraphElement::Break => None,
        })
    }

    /// Get all text in this paragraph; line breaks become `\n`
    pub fn text(&self) -> String {
        let mut result = String::new();
        for element in &self.elements {
            match element {
                ParagraphElement::Run(run) => result.push_str(&run.text),
                ParagraphElement::Break => result.push('\n'),
            }
        }
        result
    }
}
