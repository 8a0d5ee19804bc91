//! Document metadata (docProps/core.xml)

/// Core document properties
///
/// Timestamps are kept as the W3CDTF strings found in the package.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    /// dc:creator
    pub creator: Option<String>,
    /// cp:lastModifiedBy
    pub last_modified_by: Option<String>,
    /// dc:title
    pub title: Option<String>,
    /// dc:description
    pub description: Option<String>,
    /// dc:subject
    pub subject: Option<String>,
    /// cp:keywords
    pub keywords: Option<String>,
    /// cp:category
    pub category: Option<String>,
    /// dcterms:created
    pub created: Option<String>,
    /// dcterms:modified
    pub modified: Option<String>,
}
