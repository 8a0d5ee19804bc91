//! Error types for linch-pptx-rs

use std::path::PathBuf;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Could not open {0} for reading: file does not exist")]
    NotFound(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid part URI: {0}")]
    InvalidPartUri(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Truncated data while reading {context}")]
    Truncated { context: &'static str },

    #[error("Invalid encrypted container: {0}")]
    InvalidEncryption(String),

    #[error("Unsupported encryption: {0}")]
    UnsupportedEncryption(String),

    #[error("The presentation is encrypted and no password was supplied")]
    PasswordRequired,

    #[error("Invalid password")]
    InvalidPassword,
}

impl Error {
    /// Whether asking the user for another password could fix this error.
    ///
    /// Structural problems with the encrypted container return `false`.
    pub fn is_password_error(&self) -> bool {
        matches!(self, Error::PasswordRequired | Error::InvalidPassword)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_errors_are_distinct_from_structural_errors() {
        assert!(Error::InvalidPassword.is_password_error());
        assert!(Error::PasswordRequired.is_password_error());
        assert!(!Error::InvalidEncryption("bad salt".into()).is_password_error());
        assert!(!Error::Truncated { context: "salt" }.is_password_error());
    }
}
