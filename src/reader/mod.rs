//! Presentation loading
//!
//! [`PresentationReader`] takes a path or bytes, opens the ZIP package (or
//! unwraps an encrypted compound file first) and decodes properties, view
//! settings and every slide listed in `ppt/presentation.xml`.

pub mod properties;
pub mod slide;

use crate::crypto;
use crate::document::Presentation;
use crate::error::{Error, Result};
use crate::layout::{LayoutPack, PackageLayoutPack};
use crate::opc::{rel_types, well_known, Package, PartUri, RelationshipTable};
use crate::xml::XmlElement;
use std::fmt;
use std::path::Path;

/// Options for loading a presentation
///
/// ```no_run
/// use linch_pptx_rs::PresentationReader;
///
/// let pres = PresentationReader::new()
///     .password("secret")
///     .load("deck.pptx")?;
/// println!("{} slides", pres.slide_count());
/// # Ok::<(), linch_pptx_rs::Error>(())
/// ```
#[derive(Default)]
pub struct PresentationReader {
    password: Option<String>,
    layout_pack: Option<Box<dyn LayoutPack>>,
}

impl fmt::Debug for PresentationReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationReader")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("layout_pack", &self.layout_pack.is_some())
            .finish()
    }
}

impl PresentationReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Password used when the file turns out to be encrypted
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Resolve layout names with `pack` instead of the names stored in the package
    pub fn layout_pack(mut self, pack: impl LayoutPack + 'static) -> Self {
        self.layout_pack = Some(Box::new(pack));
        self
    }

    /// Whether `path` looks like something this reader can load
    pub fn can_read<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let bytes = read_file(path.as_ref())?;
        if Package::probe(&bytes) {
            return Ok(true);
        }
        Ok(crypto::is_compound_file(&bytes)
            && cfb::CompoundFile::open(std::io::Cursor::new(&bytes)).is_ok())
    }

    /// Load a presentation from a file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Presentation> {
        let path = path.as_ref();
        let bytes = read_file(path)?;
        log::info!("loading {}", path.display());
        self.load_bytes(&bytes)
    }

    /// Load a presentation from the bytes of a file
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Presentation> {
        if let Some(package) = Package::try_from_bytes(bytes)? {
            return self.load_package(&package);
        }

        if !crypto::is_compound_file(bytes) {
            return Err(Error::UnsupportedFormat(
                "input is neither a ZIP archive nor a compound file".into(),
            ));
        }

        log::debug!("input is a compound file, trying encrypted package");
        let decrypted = crypto::decrypt(bytes, self.password.as_deref())?;
        match Package::try_from_bytes(&decrypted)? {
            Some(package) => self.load_package(&package),
            None => Err(Error::InvalidEncryption(
                "decrypted package is not a ZIP archive".into(),
            )),
        }
    }

    fn load_package(&self, package: &Package) -> Result<Presentation> {
        let mut presentation = Presentation::new();
        let mut rels = RelationshipTable::new();

        if let Some(data) = package.part_by_name(well_known::CORE_PROPS) {
            match properties::read_core_properties(data) {
                Ok(props) => presentation.properties = props,
                Err(err) => log::warn!("ignoring unreadable core properties: {}", err),
            }
        }

        if let Some(data) = package.part_by_name(well_known::CUSTOM_PROPS) {
            match properties::read_marked_as_final(data) {
                Ok(marked) => presentation.marked_as_final = marked,
                Err(err) => log::warn!("ignoring unreadable custom properties: {}", err),
            }
        }

        if let Some(data) = package.part_by_name(well_known::VIEW_PROPS) {
            match properties::read_zoom(data) {
                Ok(Some(zoom)) => presentation.zoom = zoom,
                Ok(None) => {}
                Err(err) => log::warn!("ignoring unreadable view properties: {}", err),
            }
        }

        let package_pack;
        let layouts: &dyn LayoutPack = match &self.layout_pack {
            Some(pack) => &**pack,
            None => {
                package_pack = PackageLayoutPack::from_package(package, &mut rels);
                &package_pack
            }
        };

        for part in slide_parts(package, &mut rels)? {
            let Some(data) = package.part_data(&part) else {
                log::warn!("slide {} is listed but missing from the package", part);
                continue;
            };
            match slide::read_slide(package, &mut rels, layouts, &part, data) {
                Ok(slide) => presentation.slides.push(slide),
                Err(Error::InvalidDocument(err)) => {
                    log::warn!("skipping unreadable slide: {}", err);
                }
                Err(err) => return Err(err),
            }
        }

        log::info!("loaded {} slides", presentation.slides.len());
        Ok(presentation)
    }
}

/// Slide parts in `p:sldIdLst` order
fn slide_parts(package: &Package, rels: &mut RelationshipTable) -> Result<Vec<PartUri>> {
    let presentation_part = PartUri::new(well_known::PRESENTATION)?;
    let data = package
        .part_data(&presentation_part)
        .ok_or_else(|| Error::InvalidDocument("missing ppt/presentation.xml".into()))?;
    let root = match XmlElement::parse(data) {
        Ok(root) => root,
        Err(err) => {
            log::warn!("{} is unreadable, no slides loaded: {}", presentation_part, err);
            return Ok(Vec::new());
        }
    };

    rels.load(package, &presentation_part);

    let mut parts = Vec::new();
    for sld_id in root.find_all("sldIdLst/sldId") {
        let Some(id) = sld_id.attr("r:id") else {
            log::debug!("slide entry without r:id");
            continue;
        };
        if let Some(rel) = rels.resolve(&presentation_part, id) {
            if rel.rel_type != rel_types::SLIDE {
                log::warn!("'{}' is a {} relationship, not a slide", id, rel.rel_type);
                continue;
            }
        }
        match rels.resolve_part(&presentation_part, id) {
            Some(part) => parts.push(part),
            None => log::warn!("slide relationship '{}' does not resolve", id),
        }
    }
    Ok(parts)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(std::fs::read(path)?)
}
