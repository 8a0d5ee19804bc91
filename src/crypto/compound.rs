//! Compound File Binary (OLE2) container holding an encrypted package

use crate::error::{Error, Result};
use std::io::{Cursor, Read, Seek};

/// Magic bytes at the start of every compound file
pub const SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

pub const ENCRYPTION_INFO_STREAM: &str = "EncryptionInfo";
pub const ENCRYPTED_PACKAGE_STREAM: &str = "EncryptedPackage";

/// Whether the bytes start with the compound file signature
pub fn is_compound_file(bytes: &[u8]) -> bool {
    bytes.starts_with(&SIGNATURE)
}

/// The two streams of an encrypted OOXML wrapper
#[derive(Clone, Debug)]
pub struct EncryptedContainer {
    /// Raw `EncryptionInfo` stream
    pub encryption_info: Vec<u8>,
    /// Raw `EncryptedPackage` stream (8-byte size prefix + ciphertext)
    pub encrypted_package: Vec<u8>,
}

impl EncryptedContainer {
    /// Parse a compound file and pull out its encryption streams.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if !is_compound_file(bytes) {
            return Err(Error::UnsupportedFormat(
                "input is neither a ZIP archive nor a compound file".into(),
            ));
        }

        let mut file = cfb::CompoundFile::open(Cursor::new(bytes))
            .map_err(|err| Error::InvalidEncryption(format!("unreadable compound file: {}", err)))?;

        let encryption_info = read_stream(&mut file, ENCRYPTION_INFO_STREAM)?;
        let encrypted_package = read_stream(&mut file, ENCRYPTED_PACKAGE_STREAM)?;

        log::debug!(
            "compound file: {} bytes of EncryptionInfo, {} bytes of EncryptedPackage",
            encryption_info.len(),
            encrypted_package.len()
        );

        Ok(Self {
            encryption_info,
            encrypted_package,
        })
    }
}

fn read_stream<F: Read + Seek>(file: &mut cfb::CompoundFile<F>, name: &str) -> Result<Vec<u8>> {
    if !file.is_stream(name) {
        return Err(Error::InvalidEncryption(format!(
            "compound file has no {} stream",
            name
        )));
    }

    let mut stream = file
        .open_stream(name)
        .map_err(|err| Error::InvalidEncryption(format!("cannot open {} stream: {}", name, err)))?;

    let mut data = Vec::new();
    stream
        .read_to_end(&mut data)
        .map_err(|err| Error::InvalidEncryption(format!("cannot read {} stream: {}", name, err)))?;
    Ok(data)
}
