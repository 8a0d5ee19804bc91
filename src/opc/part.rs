//! Part representation for OPC packages

use crate::opc::PartUri;

/// A part within an OPC package
#[derive(Clone, Debug)]
pub struct Part {
    /// Part URI
    uri: PartUri,
    /// Content type, when `[Content_Types].xml` declares one
    content_type: Option<String>,
    /// Part data
    data: Vec<u8>,
}

impl Part {
    /// Create a new part
    pub fn new(uri: PartUri, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            uri,
            content_type,
            data,
        }
    }

    /// Get the part URI
    pub fn uri(&self) -> &PartUri {
        &self.uri
    }

    /// Get the content type
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get the raw data
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
