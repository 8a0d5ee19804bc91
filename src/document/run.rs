//! Text run (a:r) - a contiguous run of text with uniform formatting

/// RGB color as six hex digits (e.g. "FF0000")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color {
    rgb: String,
}

impl Color {
    pub const BLACK: &'static str = "000000";

    /// Create a color from a hex string; a leading `#` is dropped and letters are uppercased
    pub fn new(rgb: impl AsRef<str>) -> Self {
        let rgb = rgb.as_ref().trim_start_matches('#').to_ascii_uppercase();
        Self { rgb }
    }

    /// Hex digits without a leading `#`
    pub fn rgb(&self) -> &str {
        &self.rgb
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(Self::BLACK)
    }
}

/// Underline style (a:rPr/@u)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    Heavy,
    Dotted,
    Dash,
    Wavy,
    /// Any other ST_TextUnderlineType value, kept verbatim
    Other(String),
}

impl Underline {
    /// Parse the `u` attribute value
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => Underline::None,
            "sng" => Underline::Single,
            "dbl" => Underline::Double,
            "heavy" => Underline::Heavy,
            "dotted" => Underline::Dotted,
            "dash" => Underline::Dash,
            "wavy" => Underline::Wavy,
            other => Underline::Other(other.to_string()),
        }
    }
}

/// Font attributes of a run
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Typeface (a:latin/@typeface)
    pub name: String,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Strike-through
    pub strikethrough: bool,
    /// Size in points
    pub size: u32,
    /// Underline
    pub underline: Underline,
    /// Text color
    pub color: Color,
}

impl Font {
    pub const DEFAULT_NAME: &'static str = "Calibri";
    pub const DEFAULT_SIZE: u32 = 10;
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            bold: false,
            italic: false,
            strikethrough: false,
            size: Self::DEFAULT_SIZE,
            underline: Underline::None,
            color: Color::default(),
        }
    }
}

/// Hyperlink attached to a run (a:hlinkClick)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hyperlink {
    /// Target URL, empty when the relationship could not be resolved
    pub url: String,
    /// Tooltip
    pub tooltip: Option<String>,
}

impl Hyperlink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tooltip: None,
        }
    }

    /// Whether this link points to an internal slide rather than a URL
    pub fn is_internal(&self) -> bool {
        self.url.starts_with("ppaction://")
    }
}

/// Text run (a:r)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Run {
    /// Text content
    pub text: String,
    /// Font attributes
    pub font: Font,
    /// Hyperlink, if any
    pub hyperlink: Option<Hyperlink>,
}

impl Run {
    /// Create a run with default formatting
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Get the text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set bold and return self
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set italic and return self
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }
}
