//! OPC Package implementation
//!
//! Reads PPTX files as ZIP packages

use crate::error::{Error, Result};
use crate::opc::part_uri::well_known;
use crate::opc::{ContentTypes, Part, PartUri};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use zip::read::ZipArchive;
use zip::result::ZipError;

/// An OPC package (ZIP-based container for PPTX, DOCX, XLSX, etc.)
///
/// All parts are read into memory when the package is opened, so the archive
/// handle never outlives the call that opened it and a `Package` can be shared
/// between threads for reading.
#[derive(Debug, Default)]
pub struct Package {
    /// All parts in the package, including `.rels` parts
    parts: HashMap<PartUri, Part>,
    /// Content types ([Content_Types].xml)
    content_types: ContentTypes,
}

impl Package {
    /// Open a presentation package from bytes.
    ///
    /// Fails with [`Error::UnsupportedFormat`] when the bytes are not a ZIP
    /// archive at all.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::try_from_bytes(bytes)?
            .ok_or_else(|| Error::UnsupportedFormat("input is not a ZIP archive".into()))
    }

    /// Open a presentation package from bytes, returning `Ok(None)` when the
    /// input is not a ZIP archive so the caller can try another container.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Option<Self>> {
        Self::try_from_reader(Cursor::new(bytes))
    }

    /// Open a presentation package from a reader, see [`Package::try_from_bytes`]
    pub fn try_from_reader<R: Read + Seek>(reader: R) -> Result<Option<Self>> {
        let mut archive = match ZipArchive::new(reader) {
            Ok(archive) => archive,
            Err(ZipError::InvalidArchive(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut package = Self::default();

        // Step 1: Read [Content_Types].xml
        package.content_types = Self::read_content_types(&mut archive)?;

        // Step 2: Read all parts
        package.read_parts(&mut archive)?;

        // Step 3: Make sure this is a presentation
        if !package.contains(well_known::PRESENTATION) {
            return Err(Error::UnsupportedFormat(
                "ZIP archive has no ppt/presentation.xml part".into(),
            ));
        }

        log::debug!("opened package with {} parts", package.parts.len());
        Ok(Some(package))
    }

    /// Check whether bytes look like a presentation package without keeping it
    pub fn probe(bytes: &[u8]) -> bool {
        let mut archive = match ZipArchive::new(Cursor::new(bytes)) {
            Ok(archive) => archive,
            Err(_) => return false,
        };
        has_entry(&mut archive, well_known::CONTENT_TYPES)
            && has_entry(&mut archive, well_known::PRESENTATION)
    }

    /// Get a part by URI
    pub fn part(&self, uri: &PartUri) -> Option<&Part> {
        self.parts.get(uri)
    }

    /// Get the bytes of a part, `None` when the part is absent
    pub fn part_data(&self, uri: &PartUri) -> Option<&[u8]> {
        self.parts.get(uri).map(|p| p.data())
    }

    /// Get the bytes of a part by path (e.g. `ppt/viewProps.xml`)
    pub fn part_by_name(&self, name: &str) -> Option<&[u8]> {
        let uri = PartUri::new(name).ok()?;
        self.part_data(&uri)
    }

    /// Check whether a part exists
    pub fn contains(&self, name: &str) -> bool {
        self.part_by_name(name).is_some()
    }

    /// Get all part URIs
    pub fn part_uris(&self) -> impl Iterator<Item = &PartUri> {
        self.parts.keys()
    }

    /// Get content types
    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }

    // === Private methods ===

    fn read_content_types<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<ContentTypes> {
        let uri = PartUri::new(well_known::CONTENT_TYPES)?;
        let mut file = archive.by_name(uri.zip_name()).map_err(|_| {
            Error::UnsupportedFormat("ZIP archive has no [Content_Types].xml part".into())
        })?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;

        ContentTypes::from_xml(&content)
    }

    fn read_parts<R: Read + Seek>(&mut self, archive: &mut ZipArchive<R>) -> Result<()> {
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let uri = match PartUri::new(&name) {
                Ok(uri) => uri,
                Err(err) => {
                    log::warn!("skipping ZIP entry '{}': {}", name, err);
                    continue;
                }
            };

            if uri.as_str() == well_known::CONTENT_TYPES {
                continue;
            }

            let content_type = self.content_types.get(&uri).map(str::to_string);

            let mut data = Vec::new();
            file.read_to_end(&mut data)?;

            self.parts
                .insert(uri.clone(), Part::new(uri, content_type, data));
        }

        Ok(())
    }
}

fn has_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> bool {
    PartUri::new(name)
        .map(|uri| archive.by_name(uri.zip_name()).is_ok())
        .unwrap_or(false)
}
