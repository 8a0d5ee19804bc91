//! `EncryptedPackage` stream decryption

use crate::crypto::binary::read_u64_le;
use crate::crypto::key::aes_ecb_decrypt;
use crate::error::{Error, Result};

/// Size of the plaintext length prefix
pub const SIZE_PREFIX_LEN: usize = 8;

/// Decrypt an `EncryptedPackage` stream with a verified key.
///
/// The stream is the plaintext size as a little-endian u64 followed by the
/// AES-ECB ciphertext; the plaintext is truncated to the declared size.
pub fn decrypt_package(stream: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let declared = read_u64_le(stream, 0, "EncryptedPackage size")?;
    let ciphertext = stream.get(SIZE_PREFIX_LEN..).ok_or(Error::Truncated {
        context: "EncryptedPackage size",
    })?;

    let declared = usize::try_from(declared).map_err(|_| {
        Error::InvalidEncryption(format!("declared package size {} is too large", declared))
    })?;
    if declared > ciphertext.len() {
        return Err(Error::InvalidEncryption(format!(
            "declared package size {} exceeds {} bytes of ciphertext",
            declared,
            ciphertext.len()
        )));
    }

    let mut plaintext = ciphertext.to_vec();
    aes_ecb_decrypt(key, &mut plaintext)?;
    plaintext.truncate(declared);

    log::debug!("decrypted package: {} bytes", plaintext.len());
    Ok(plaintext)
}
