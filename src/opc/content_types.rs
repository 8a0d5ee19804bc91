//! Content Types handling for OPC packages
//!
//! Parses `[Content_Types].xml`

use crate::error::Result;
use crate::opc::PartUri;
use crate::xml::XmlElement;
use std::collections::HashMap;

/// Content types definition for an OPC package
#[derive(Clone, Debug, Default)]
pub struct ContentTypes {
    /// Default extension mappings (extension -> content type)
    defaults: HashMap<String, String>,
    /// Override mappings (part URI -> content type)
    overrides: HashMap<PartUri, String>,
}

impl ContentTypes {
    /// Parse from the bytes of `[Content_Types].xml`
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let root = XmlElement::parse(xml)?;
        let mut ct = Self::default();

        for node in root.elements() {
            let content_type = match node.attr("ContentType") {
                Some(v) => v.to_string(),
                None => continue,
            };

            match node.local_name() {
                "Default" => {
                    if let Some(ext) = node.attr("Extension") {
                        ct.defaults.insert(ext.to_lowercase(), content_type);
                    }
                }
                "Override" => {
                    let uri = node.attr("PartName").map(PartUri::new);
                    match uri {
                        Some(Ok(uri)) => {
                            ct.overrides.insert(uri, content_type);
                        }
                        Some(Err(err)) => log::debug!("skipping content type override: {}", err),
                        None => {}
                    }
                }
                _ => {}
            }
        }

        Ok(ct)
    }

    /// Get the content type for a part
    pub fn get(&self, uri: &PartUri) -> Option<&str> {
        // Check overrides first
        if let Some(ct) = self.overrides.get(uri) {
            return Some(ct);
        }

        // Fall back to extension default
        uri.extension()
            .and_then(|ext| self.defaults.get(&ext.to_lowercase()))
            .map(|s| s.as_str())
    }
}

pub const PRESENTATION_MAIN: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
