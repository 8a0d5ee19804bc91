//! Password-protected presentations
//!
//! Office wraps an encrypted package in a Compound File Binary container with
//! two streams: `EncryptionInfo` (algorithm header and password verifier) and
//! `EncryptedPackage` (the ciphertext of the whole ZIP package). Only ECMA-376
//! Standard Encryption with AES is supported.

pub mod binary;
pub mod compound;
pub mod encrypted_package;
pub mod info;
pub mod key;

pub use compound::{is_compound_file, EncryptedContainer};
pub use info::{CipherAlgorithm, EncryptionInfo, HashAlgorithm};

use crate::error::{Error, Result};

/// Unwrap an encrypted compound file into the bytes of the ZIP package it holds.
///
/// The password is verified before any content is decrypted. A missing
/// password gives [`Error::PasswordRequired`], a wrong one
/// [`Error::InvalidPassword`].
pub fn decrypt(bytes: &[u8], password: Option<&str>) -> Result<Vec<u8>> {
    let container = EncryptedContainer::from_bytes(bytes)?;
    let info = EncryptionInfo::parse(&container.encryption_info)?;

    let password = password.ok_or(Error::PasswordRequired)?;
    let key = key::unlock(&info, password)?;

    encrypted_package::decrypt_package(&container.encrypted_package, &key)
}
