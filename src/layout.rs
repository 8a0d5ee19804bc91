//! Slide layout names
//!
//! A slide points at its layout through a `slideLayout` relationship whose
//! target is named `slideLayoutN.xml`. The number `N` and the number of the
//! slide master the layout belongs to are turned into a name by a
//! [`LayoutPack`].

use crate::opc::{rel_types, Package, PartUri, Relationship, RelationshipTable, Relationships};
use crate::xml::XmlElement;
use std::collections::HashMap;

const LAYOUT_PREFIX: &str = "slideLayout";
const MASTER_PREFIX: &str = "slideMaster";
const PART_SUFFIX: &str = ".xml";

/// Maps a layout number and a slide master number to a layout name
pub trait LayoutPack {
    /// Find the name of layout `layout_index` of master `master_id`
    fn find_layout_name(&self, layout_index: u32, master_id: u32) -> Option<String>;
}

/// Layout names read from the package being loaded (`p:cSld/@name`)
#[derive(Clone, Debug, Default)]
pub struct PackageLayoutPack {
    /// (master id, layout index) -> name
    names: HashMap<(u32, u32), String>,
}

impl PackageLayoutPack {
    /// Collect the names of every `slideLayoutN.xml` part in `package`
    pub fn from_package(package: &Package, rels: &mut RelationshipTable) -> Self {
        let mut pack = Self::default();

        let mut layouts: Vec<&PartUri> = package
            .part_uris()
            .filter(|uri| uri.as_str().starts_with("/ppt/slideLayouts/"))
            .filter(|uri| !uri.is_relationships())
            .collect();
        layouts.sort();

        for uri in layouts {
            let Some(index) = uri.file_name().and_then(|name| part_number(name, LAYOUT_PREFIX))
            else {
                continue;
            };
            let Some(data) = package.part_data(uri) else {
                continue;
            };

            let root = match XmlElement::parse(data) {
                Ok(root) => root,
                Err(err) => {
                    log::warn!("skipping unreadable layout {}: {}", uri, err);
                    continue;
                }
            };
            let Some(name) = root.child("cSld").and_then(|c| c.attr("name")) else {
                log::debug!("layout {} has no name", uri);
                continue;
            };

            let master_id = master_id(rels.load(package, uri));
            pack.names.insert((master_id, index), name.to_string());
        }

        log::debug!("found {} named slide layouts", pack.names.len());
        pack
    }

    /// Register a name
    pub fn insert(&mut self, layout_index: u32, master_id: u32, name: impl Into<String>) {
        self.names.insert((master_id, layout_index), name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl LayoutPack for PackageLayoutPack {
    fn find_layout_name(&self, layout_index: u32, master_id: u32) -> Option<String> {
        self.names.get(&(master_id, layout_index)).cloned()
    }
}

/// Names of the layouts of the stock Office theme
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLayoutPack;

impl DefaultLayoutPack {
    const NAMES: [&'static str; 11] = [
        "Title Slide",
        "Title and Content",
        "Section Header",
        "Two Content",
        "Comparison",
        "Title Only",
        "Blank",
        "Content with Caption",
        "Picture with Caption",
        "Title and Vertical Text",
        "Vertical Title and Text",
    ];
}

impl LayoutPack for DefaultLayoutPack {
    fn find_layout_name(&self, layout_index: u32, master_id: u32) -> Option<String> {
        if master_id != 1 {
            return None;
        }
        let slot = usize::try_from(layout_index.checked_sub(1)?).ok()?;
        Self::NAMES.get(slot).map(|name| name.to_string())
    }
}

/// Number `N` of a part named `{prefix}N.xml`
pub fn part_number(file_name: &str, prefix: &str) -> Option<u32> {
    file_name
        .strip_prefix(prefix)?
        .strip_suffix(PART_SUFFIX)?
        .parse()
        .ok()
}

/// First slide-layout relationship, in document order
pub fn layout_relationship(rels: &Relationships) -> Option<&Relationship> {
    rels.iter().find(|r| r.rel_type == rel_types::SLIDE_LAYOUT)
}

/// Layout number of a relationship target such as `../slideLayouts/slideLayout2.xml`
pub fn layout_index(target: &str) -> Option<u32> {
    let file_name = target.rsplit('/').next()?;
    let index = part_number(file_name, LAYOUT_PREFIX);
    if index.is_none() {
        log::debug!("cannot read a layout number from '{}'", target);
    }
    index
}

/// Slide master number of a layout, from the layout's own relationships (default 1)
pub fn master_id(layout_rels: &Relationships) -> u32 {
    layout_rels
        .by_type(rel_types::SLIDE_MASTER)
        .and_then(|rel| rel.target.rsplit('/').next())
        .and_then(|name| part_number(name, MASTER_PREFIX))
        .unwrap_or(1)
}
