//! Relationships handling for OPC packages
//!
//! Parses `.rels` parts and scopes them by their owning part

use crate::error::{Error, Result};
use crate::opc::{Package, PartUri};
use crate::xml::XmlElement;
use std::collections::HashMap;

/// Relationships declared by one part, in document order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relationships {
    items: Vec<Relationship>,
    /// Relationship ID -> position in `items`
    by_id: HashMap<String, usize>,
}

/// A single relationship
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative or absolute)
    pub target: String,
    /// Target mode
    pub target_mode: TargetMode,
}

/// Target mode for relationships
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetMode {
    /// Internal target (part within the package)
    #[default]
    Internal,
    /// External target (hyperlink, etc.)
    External,
}

impl Relationships {
    /// Create empty relationships
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from the bytes of a `.rels` part
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let root = XmlElement::parse(xml)?;
        let mut rels = Self::new();

        for node in root.elements().filter(|e| e.is("Relationship")) {
            match parse_relationship(node) {
                Ok(rel) => rels.insert(rel),
                Err(err) => log::warn!("skipping malformed relationship: {}", err),
            }
        }

        Ok(rels)
    }

    /// Add a relationship; a repeated ID replaces the earlier entry in place
    pub fn insert(&mut self, rel: Relationship) {
        match self.by_id.get(&rel.id) {
            Some(&index) => self.items[index] = rel,
            None => {
                self.by_id.insert(rel.id.clone(), self.items.len());
                self.items.push(rel);
            }
        }
    }

    /// Get a relationship by ID
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id).map(|&index| &self.items[index])
    }

    /// Get a relationship by type (returns first match in document order)
    pub fn by_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.items.iter().find(|r| r.rel_type == rel_type)
    }

    /// Iterate over all relationships in document order
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.items.iter()
    }

    /// Number of relationships
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Relationship tables for every part touched during a load.
///
/// Lookups always take the owning part and the ID together; an ID declared by
/// one part never resolves through another part's table.
#[derive(Debug, Default)]
pub struct RelationshipTable {
    by_owner: HashMap<PartUri, Relationships>,
}

impl RelationshipTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Load (once) and return the relationships owned by `owner`.
    ///
    /// A missing `.rels` part yields an empty set. A malformed one is logged
    /// and treated as empty too.
    pub fn load(&mut self, package: &Package, owner: &PartUri) -> &Relationships {
        self.by_owner.entry(owner.clone()).or_insert_with(|| {
            let rels_uri = owner.relationships_uri();
            match package.part_data(&rels_uri) {
                Some(data) => Relationships::from_xml(data).unwrap_or_else(|err| {
                    log::warn!("ignoring unreadable {}: {}", rels_uri, err);
                    Relationships::new()
                }),
                None => {
                    log::debug!("{} has no relationships part", owner);
                    Relationships::new()
                }
            }
        })
    }

    /// Relationships already loaded for `owner`
    pub fn get(&self, owner: &PartUri) -> Option<&Relationships> {
        self.by_owner.get(owner)
    }

    /// Resolve `id` within the scope of `owner`
    pub fn resolve(&self, owner: &PartUri, id: &str) -> Option<&Relationship> {
        self.by_owner.get(owner)?.get(id)
    }

    /// Resolve `id` within `owner` to the internal part it targets
    pub fn resolve_part(&self, owner: &PartUri, id: &str) -> Option<PartUri> {
        let rel = self.resolve(owner, id)?;
        if rel.target_mode == TargetMode::External {
            return None;
        }
        match owner.resolve(&rel.target) {
            Ok(uri) => Some(uri),
            Err(err) => {
                log::debug!("relationship {} of {} has a bad target: {}", id, owner, err);
                None
            }
        }
    }

    /// Register relationships for `owner` directly
    pub fn insert(&mut self, owner: PartUri, rels: Relationships) {
        self.by_owner.insert(owner, rels);
    }
}

/// Parse a single Relationship element
fn parse_relationship(element: &XmlElement) -> Result<Relationship> {
    let required = |attr: &str| {
        element
            .attr(attr)
            .map(str::to_string)
            .ok_or_else(|| Error::InvalidDocument(format!("Relationship is missing '{}'", attr)))
    };

    let target_mode = match element.attr("TargetMode") {
        Some("External") => TargetMode::External,
        _ => TargetMode::Internal,
    };

    Ok(Relationship {
        id: required("Id")?,
        rel_type: required("Type")?,
        target: required("Target")?,
        target_mode,
    })
}

// Well-known relationship types
pub mod rel_types {
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    pub const HYPERLINK: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
}
