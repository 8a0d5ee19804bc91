//! Password key derivation and verifier check

use crate::crypto::info::EncryptionInfo;
use crate::error::{Error, Result};
use aes::cipher::{generic_array::GenericArray, BlockDecrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use sha1::{Digest, Sha1};

/// Number of hash rounds applied to the salted password
pub const SPIN_COUNT: u32 = 50_000;

const SHA1_LEN: usize = 20;
const AES_BLOCK_LEN: usize = 16;

/// Password encoded the way the key derivation hashes it
pub fn password_utf16le(password: &str) -> Vec<u8> {
    password
        .encode_utf16()
        .flat_map(|unit| unit.to_le_bytes())
        .collect()
}

/// Salted and iterated password hash, before the block combine
pub fn iterated_hash(password: &str, salt: &[u8]) -> [u8; SHA1_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(salt);
    hasher.update(password_utf16le(password));
    let mut hash: [u8; SHA1_LEN] = hasher.finalize().into();

    let mut buf = [0u8; 4 + SHA1_LEN];
    for i in 0..SPIN_COUNT {
        buf[..4].copy_from_slice(&i.to_le_bytes());
        buf[4..].copy_from_slice(&hash);
        hash = Sha1::digest(buf).into();
    }
    hash
}

/// Derive a cipher key of `key_len` bytes from a password and salt.
pub fn derive_key(password: &str, salt: &[u8], key_len: usize) -> Result<Vec<u8>> {
    if key_len > 2 * SHA1_LEN {
        return Err(Error::InvalidEncryption(format!(
            "cannot derive a {} byte key from SHA-1",
            key_len
        )));
    }

    let hash = iterated_hash(password, salt);

    // block 0 is the content key
    let mut hasher = Sha1::new();
    hasher.update(hash);
    hasher.update(0u32.to_le_bytes());
    let h_final: [u8; SHA1_LEN] = hasher.finalize().into();

    let mut inner = [0x36u8; 64];
    let mut outer = [0x5Cu8; 64];
    for (i, byte) in h_final.iter().enumerate() {
        inner[i] ^= byte;
        outer[i] ^= byte;
    }

    let mut key = Sha1::digest(inner).to_vec();
    if key_len > SHA1_LEN {
        key.extend_from_slice(&Sha1::digest(outer));
    }
    key.truncate(key_len);
    Ok(key)
}

/// Decrypt `buf` in place with AES in ECB mode, no padding.
pub fn aes_ecb_decrypt(key: &[u8], buf: &mut [u8]) -> Result<()> {
    if buf.len() % AES_BLOCK_LEN != 0 {
        return Err(Error::InvalidEncryption(format!(
            "ciphertext length {} is not a multiple of the AES block size",
            buf.len()
        )));
    }

    fn decrypt_with<C: BlockDecrypt + KeyInit>(key: &[u8], buf: &mut [u8]) -> Result<()> {
        let cipher = C::new_from_slice(key)
            .map_err(|_| Error::InvalidEncryption(format!("invalid AES key length {}", key.len())))?;
        for block in buf.chunks_mut(AES_BLOCK_LEN) {
            cipher.decrypt_block(GenericArray::from_mut_slice(block));
        }
        Ok(())
    }

    match key.len() {
        16 => decrypt_with::<Aes128>(key, buf),
        24 => decrypt_with::<Aes192>(key, buf),
        32 => decrypt_with::<Aes256>(key, buf),
        other => Err(Error::InvalidEncryption(format!(
            "invalid AES key length {}",
            other
        ))),
    }
}

/// Check a derived key against the verifier record.
///
/// Returns [`Error::InvalidPassword`] when the decrypted verifier does not
/// hash to the decrypted verifier hash.
pub fn verify_key(info: &EncryptionInfo, key: &[u8]) -> Result<()> {
    let mut verifier = info.verifier.encrypted_verifier;
    aes_ecb_decrypt(key, &mut verifier)?;

    let mut verifier_hash = info.verifier.encrypted_verifier_hash;
    aes_ecb_decrypt(key, &mut verifier_hash)?;

    let digest_len = info.header.hash.digest_len();
    let expected = Sha1::digest(verifier);
    if expected[..digest_len] == verifier_hash[..digest_len] {
        Ok(())
    } else {
        Err(Error::InvalidPassword)
    }
}

/// Derive the key for `password` and verify it; the key is returned only when it matches.
pub fn unlock(info: &EncryptionInfo, password: &str) -> Result<Vec<u8>> {
    let key = derive_key(password, &info.verifier.salt, info.key_len())?;
    verify_key(info, &key)?;
    log::debug!("password verified");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::info::tests::build_info;
    use crate::crypto::info::CipherAlgorithm;
    use aes::cipher::BlockEncrypt;

    fn sha1(parts: &[&[u8]]) -> Vec<u8> {
        let mut hasher = Sha1::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().to_vec()
    }

    fn aes128_ecb_encrypt(key: &[u8], buf: &mut [u8]) {
        let cipher = Aes128::new_from_slice(key).unwrap();
        for block in buf.chunks_mut(16) {
            cipher.encrypt_block(GenericArray::from_mut_slice(block));
        }
    }

    /// A verifier record for `password`, written the way an encrypting producer does
    fn info_for(password: &str, salt: [u8; 16]) -> EncryptionInfo {
        let key = derive_key(password, &salt, 16).unwrap();
        let mut verifier = *b"0123456789abcdef";
        let mut verifier_hash = [0u8; 32];
        verifier_hash[..20].copy_from_slice(&sha1(&[&verifier[..]]));
        aes128_ecb_encrypt(&key, &mut verifier);
        aes128_ecb_encrypt(&key, &mut verifier_hash);
        let bytes = build_info(CipherAlgorithm::AES_128_ID, 128, &salt, &verifier, &verifier_hash);
        EncryptionInfo::parse(&bytes).unwrap()
    }

    #[test]
    fn test_password_encoding() {
        assert_eq!(password_utf16le("ab"), vec![b'a', 0, b'b', 0]);
        assert_eq!(password_utf16le("é"), vec![0xE9, 0]);
    }

    #[test]
    fn test_iterated_hash_matches_step_by_step_reference() {
        let salt = [0u8; 16];
        let password: Vec<u8> = "motdepasse"
            .encode_utf16()
            .flat_map(u16::to_le_bytes)
            .collect();
        let mut h = sha1(&[&salt[..], &password[..]]);
        for i in 0u32..50_000 {
            h = sha1(&[&i.to_le_bytes()[..], &h[..]]);
        }
        assert_eq!(iterated_hash("motdepasse", &salt).to_vec(), h);
    }

    #[test]
    fn test_derive_key_matches_reference_construction() {
        let salt = [0u8; 16];
        let h = iterated_hash("motdepasse", &salt);
        let h_final = sha1(&[&h[..], &[0u8; 4][..]]);

        let mut inner = vec![0x36u8; 64];
        let mut outer = vec![0x5Cu8; 64];
        for i in 0..20 {
            inner[i] ^= h_final[i];
            outer[i] ^= h_final[i];
        }
        let mut expected = sha1(&[&inner[..]]);
        expected.extend(sha1(&[&outer[..]]));

        let key128 = derive_key("motdepasse", &salt, 16).unwrap();
        assert_eq!(key128, expected[..16].to_vec());
        let key256 = derive_key("motdepasse", &salt, 32).unwrap();
        assert_eq!(key256, expected[..32].to_vec());
        assert_eq!(&key256[..16], &key128[..]);

        assert!(derive_key("motdepasse", &salt, 41).is_err());
    }

    #[test]
    fn test_golden_vector() {
        let salt = [0u8; 16];
        assert_eq!(
            iterated_hash("motdepasse", &salt),
            [
                0x4d, 0x1c, 0x68, 0xd9, 0x34, 0x76, 0x50, 0x72, 0x0a, 0xef, 0xe9, 0x36, 0x31, 0x99,
                0xf3, 0xd3, 0xfb, 0x11, 0x2f, 0x90,
            ]
        );
        assert_eq!(
            derive_key("motdepasse", &salt, 16).unwrap(),
            vec![
                0x68, 0xd6, 0xe2, 0xbe, 0xc5, 0x66, 0xec, 0xc1, 0x15, 0x75, 0x03, 0x75, 0x1e, 0x6b,
                0x4a, 0xe1,
            ]
        );
    }

    #[test]
    fn test_iteration_counter_is_prepended() {
        let salt = [0u8; 16];
        let mut appended = sha1(&[&salt[..], &password_utf16le("motdepasse")[..]]);
        for i in 0u32..50_000 {
            appended = sha1(&[&appended[..], &i.to_le_bytes()[..]]);
        }
        assert_ne!(iterated_hash("motdepasse", &salt).to_vec(), appended);
    }

    #[test]
    fn test_verify_accepts_right_password_and_rejects_wrong_one() {
        let info = info_for("motdepasse", [0u8; 16]);
        let key = unlock(&info, "motdepasse").unwrap();
        assert_eq!(key.len(), 16);

        let err = unlock(&info, "wrong").unwrap_err();
        assert!(matches!(err, Error::InvalidPassword));
        assert!(err.is_password_error());
    }

    #[test]
    fn test_salt_changes_key() {
        let a = derive_key("motdepasse", &[0u8; 16], 16).unwrap();
        let b = derive_key("motdepasse", &[1u8; 16], 16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ecb_rejects_partial_blocks() {
        let mut buf = [0u8; 15];
        assert!(matches!(
            aes_ecb_decrypt(&[0u8; 16], &mut buf),
            Err(Error::InvalidEncryption(_))
        ));
        let mut buf = [0u8; 16];
        assert!(aes_ecb_decrypt(&[0u8; 5], &mut buf).is_err());
    }
}
