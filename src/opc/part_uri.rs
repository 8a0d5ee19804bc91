//! Part URI handling for OPC packages

use crate::error::{Error, Result};
use std::fmt;

/// Represents a URI to a part within an OPC package.
///
/// Part URIs are always absolute paths starting with '/', with `.` and `..`
/// segments already collapsed. Example: `/ppt/slides/slide1.xml`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartUri {
    path: String,
}

impl PartUri {
    /// Create a new PartUri from a string.
    ///
    /// The path will be normalized (leading '/' ensured, no trailing '/',
    /// dot segments collapsed).
    pub fn new(path: &str) -> Result<Self> {
        let path = path.trim();

        if path.is_empty() {
            return Err(Error::InvalidPartUri("empty path".into()));
        }

        if path.contains("//") {
            return Err(Error::InvalidPartUri(format!(
                "invalid path '{}': contains double slashes",
                path
            )));
        }

        let normalized = normalize(path);
        if normalized == "/" {
            return Err(Error::InvalidPartUri(format!(
                "invalid path '{}': does not name a part",
                path
            )));
        }

        Ok(Self { path: normalized })
    }

    /// Get the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Name of the entry inside the zip archive (no leading '/')
    pub fn zip_name(&self) -> &str {
        &self.path[1..]
    }

    /// Get the file name portion
    pub fn file_name(&self) -> Option<&str> {
        self.path.rsplit('/').next()
    }

    /// Get the file extension
    pub fn extension(&self) -> Option<&str> {
        self.file_name()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    /// Get the parent directory path (e.g. `/ppt/slides`), `None` at the root
    pub fn parent(&self) -> Option<&str> {
        let pos = self.path.rfind('/')?;
        if pos == 0 {
            None
        } else {
            Some(&self.path[..pos])
        }
    }

    /// Get the relationships URI for this part.
    ///
    /// For `/ppt/slides/slide1.xml`, returns `/ppt/slides/_rels/slide1.xml.rels`
    pub fn relationships_uri(&self) -> PartUri {
        let file_name = self.file_name().unwrap_or("");
        let parent = self.parent().unwrap_or("");

        PartUri {
            path: format!("{}/_rels/{}.rels", parent, file_name),
        }
    }

    /// Resolve a relationship target against this part's directory.
    ///
    /// For `/ppt/slides/slide1.xml` and `../media/image1.png`, returns `/ppt/media/image1.png`
    pub fn resolve(&self, relative: &str) -> Result<PartUri> {
        if relative.starts_with('/') {
            return PartUri::new(relative);
        }

        let base_dir = self.parent().unwrap_or("");
        PartUri::new(&format!("{}/{}", base_dir, relative))
    }

    /// Check if this URI points to a relationships file
    pub fn is_relationships(&self) -> bool {
        self.path.contains("/_rels/") && self.path.ends_with(".rels")
    }
}

/// Collapse `.` and `..` segments of a `/`-separated path.
///
/// Each `..` removes itself together with the segment right before it; a
/// `..` with nothing before it is dropped. The result always starts with '/'.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    format!("/{}", segments.join("/"))
}

impl fmt::Display for PartUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl std::str::FromStr for PartUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PartUri::new(s)
    }
}

/// Well-known part URIs of a presentation package
pub mod well_known {
    pub const CONTENT_TYPES: &str = "/[Content_Types].xml";
    pub const PRESENTATION: &str = "/ppt/presentation.xml";
    pub const VIEW_PROPS: &str = "/ppt/viewProps.xml";
    pub const CORE_PROPS: &str = "/docProps/core.xml";
    pub const CUSTOM_PROPS: &str = "/docProps/custom.xml";
}
