//! Open Packaging Convention (OPC) implementation
//!
//! This module handles the ZIP-based package format used by PPTX files.

mod content_types;
mod package;
mod part;
mod part_uri;
mod relationships;

pub use content_types::{ContentTypes, PRESENTATION_MAIN};
pub use package::Package;
pub use part::Part;
pub use part_uri::{normalize, well_known, PartUri};
pub use relationships::{rel_types, Relationship, RelationshipTable, Relationships, TargetMode};
