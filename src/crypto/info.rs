//! `EncryptionInfo` stream parsing (ECMA-376 Standard Encryption)

use crate::crypto::binary::{decode_utf16le_nul_terminated, ByteReader};
use crate::error::{Error, Result};

/// Length of the salt carried by the verifier record
pub const SALT_LEN: usize = 16;
/// Length of the encrypted verifier
pub const VERIFIER_LEN: usize = 16;
/// Length of the encrypted verifier hash (a SHA-1 digest padded to two AES blocks)
pub const VERIFIER_HASH_BLOCK_LEN: usize = 32;

/// Bytes of fixed-width fields at the start of the header, before the provider name
const HEADER_FIXED_LEN: usize = 8 * 4;

/// Cipher named by the header's algorithm id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherAlgorithm {
    Aes128,
    Aes192,
    Aes256,
}

impl CipherAlgorithm {
    pub const AES_128_ID: u32 = 0x0000_660E;
    pub const AES_192_ID: u32 = 0x0000_660F;
    pub const AES_256_ID: u32 = 0x0000_6610;
    pub const RC4_ID: u32 = 0x0000_6801;

    /// Map an algorithm id to a supported cipher
    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            Self::AES_128_ID => Ok(Self::Aes128),
            Self::AES_192_ID => Ok(Self::Aes192),
            Self::AES_256_ID => Ok(Self::Aes256),
            Self::RC4_ID => Err(Error::UnsupportedEncryption(
                "RC4 encrypted presentations are not supported".into(),
            )),
            other => Err(Error::UnsupportedEncryption(format!(
                "unknown cipher algorithm id {:#06x}",
                other
            ))),
        }
    }

    /// Key size implied by the algorithm, in bits
    pub fn key_bits(self) -> u32 {
        match self {
            Self::Aes128 => 128,
            Self::Aes192 => 192,
            Self::Aes256 => 256,
        }
    }
}

/// Hash named by the header's hash algorithm id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
}

impl HashAlgorithm {
    pub const SHA1_ID: u32 = 0x0000_8004;

    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            // zero means "the default", which is SHA-1
            0 | Self::SHA1_ID => Ok(Self::Sha1),
            other => Err(Error::UnsupportedEncryption(format!(
                "unknown hash algorithm id {:#06x}",
                other
            ))),
        }
    }

    /// Digest length in bytes
    pub fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
        }
    }
}

/// `EncryptionVersionInfo`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub flags: u32,
}

impl Version {
    /// Agile encryption stores an XML descriptor instead of a binary header
    pub fn is_agile(&self) -> bool {
        self.major == 4 && self.minor == 4
    }
}

/// `EncryptionHeader`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionHeader {
    pub flags: u32,
    pub size_extra: u32,
    pub algorithm: CipherAlgorithm,
    pub hash: HashAlgorithm,
    pub key_bits: u32,
    pub provider_type: u32,
    /// Cryptographic service provider name
    pub csp_name: String,
}

/// `EncryptionVerifier`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionVerifier {
    pub salt: [u8; SALT_LEN],
    pub encrypted_verifier: [u8; VERIFIER_LEN],
    pub verifier_hash_size: u32,
    pub encrypted_verifier_hash: [u8; VERIFIER_HASH_BLOCK_LEN],
}

/// Parsed `EncryptionInfo` stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionInfo {
    pub version: Version,
    pub header: EncryptionHeader,
    pub verifier: EncryptionVerifier,
}

impl EncryptionInfo {
    /// Parse the stream.
    ///
    /// Truncation and inconsistent fields are structural errors
    /// ([`Error::Truncated`], [`Error::InvalidEncryption`]); algorithms this
    /// crate cannot decrypt give [`Error::UnsupportedEncryption`].
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut r = ByteReader::new(data);

        let version = Version {
            major: r.read_u16_le("EncryptionInfo version major")?,
            minor: r.read_u16_le("EncryptionInfo version minor")?,
            flags: r.read_u32_le("EncryptionInfo flags")?,
        };

        if version.is_agile() {
            return Err(Error::UnsupportedEncryption(
                "agile encryption (version 4.4) is not supported".into(),
            ));
        }

        let header_size = r.read_u32_le("EncryptionHeader size")? as usize;
        let header_bytes = r.take(header_size, "EncryptionHeader")?;
        let header = parse_header(header_bytes)?;

        let verifier = parse_verifier(&mut r)?;

        log::debug!(
            "EncryptionInfo {}.{}: {:?}/{:?}, {} bit key, provider '{}'",
            version.major,
            version.minor,
            header.algorithm,
            header.hash,
            header.key_bits,
            header.csp_name
        );

        Ok(Self {
            version,
            header,
            verifier,
        })
    }

    /// Derived key length in bytes
    pub fn key_len(&self) -> usize {
        (self.header.key_bits / 8) as usize
    }
}

fn parse_header(bytes: &[u8]) -> Result<EncryptionHeader> {
    if bytes.len() < HEADER_FIXED_LEN {
        return Err(Error::Truncated {
            context: "EncryptionHeader fixed fields",
        });
    }

    let mut r = ByteReader::new(bytes);
    let flags = r.read_u32_le("EncryptionHeader flags")?;
    let size_extra = r.read_u32_le("EncryptionHeader sizeExtra")?;
    let algorithm_id = r.read_u32_le("EncryptionHeader algId")?;
    let hash_id = r.read_u32_le("EncryptionHeader algIdHash")?;
    let key_bits = r.read_u32_le("EncryptionHeader keySize")?;
    let provider_type = r.read_u32_le("EncryptionHeader providerType")?;
    r.skip(8, "EncryptionHeader reserved")?;
    let csp_name = decode_utf16le_nul_terminated(r.remaining());

    let algorithm = CipherAlgorithm::from_id(algorithm_id)?;
    let hash = HashAlgorithm::from_id(hash_id)?;

    if key_bits != algorithm.key_bits() {
        return Err(Error::InvalidEncryption(format!(
            "key size {} bits does not match {:?}",
            key_bits, algorithm
        )));
    }

    Ok(EncryptionHeader {
        flags,
        size_extra,
        algorithm,
        hash,
        key_bits,
        provider_type,
        csp_name,
    })
}

fn parse_verifier(r: &mut ByteReader<'_>) -> Result<EncryptionVerifier> {
    let salt_size = r.read_u32_le("EncryptionVerifier saltSize")? as usize;
    if salt_size != SALT_LEN {
        return Err(Error::InvalidEncryption(format!(
            "salt size must be {}, found {}",
            SALT_LEN, salt_size
        )));
    }

    let salt = r.read_array::<SALT_LEN>("EncryptionVerifier salt")?;
    let encrypted_verifier = r.read_array::<VERIFIER_LEN>("EncryptionVerifier encryptedVerifier")?;
    let verifier_hash_size = r.read_u32_le("EncryptionVerifier verifierHashSize")?;
    if verifier_hash_size as usize > VERIFIER_HASH_BLOCK_LEN {
        return Err(Error::InvalidEncryption(format!(
            "verifier hash size {} exceeds {} bytes",
            verifier_hash_size, VERIFIER_HASH_BLOCK_LEN
        )));
    }
    let encrypted_verifier_hash =
        r.read_array::<VERIFIER_HASH_BLOCK_LEN>("EncryptionVerifier encryptedVerifierHash")?;

    Ok(EncryptionVerifier {
        salt,
        encrypted_verifier,
        verifier_hash_size,
        encrypted_verifier_hash,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a Standard `EncryptionInfo` stream
    pub(crate) fn build_info(
        algorithm_id: u32,
        key_bits: u32,
        salt: &[u8],
        verifier: &[u8; 16],
        verifier_hash: &[u8; 32],
    ) -> Vec<u8> {
        let mut header = Vec::new();
        header.extend_from_slice(&0x24u32.to_le_bytes()); // fCryptoAPI | fAES
        header.extend_from_slice(&0u32.to_le_bytes());
        header.extend_from_slice(&algorithm_id.to_le_bytes());
        header.extend_from_slice(&HashAlgorithm::SHA1_ID.to_le_bytes());
        header.extend_from_slice(&key_bits.to_le_bytes());
        header.extend_from_slice(&0x18u32.to_le_bytes());
        header.extend_from_slice(&[0u8; 8]);
        for unit in "Microsoft Enhanced RSA and AES Cryptographic Provider".encode_utf16() {
            header.extend_from_slice(&unit.to_le_bytes());
        }
        header.extend_from_slice(&[0, 0]);

        let mut out = Vec::new();
        out.extend_from_slice(&3u16.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&0x24u32.to_le_bytes());
        out.extend_from_slice(&(header.len() as u32).to_le_bytes());
        out.extend_from_slice(&header);
        out.extend_from_slice(&(salt.len() as u32).to_le_bytes());
        out.extend_from_slice(salt);
        out.extend_from_slice(verifier);
        out.extend_from_slice(&20u32.to_le_bytes());
        out.extend_from_slice(verifier_hash);
        out
    }

    #[test]
    fn test_parse_standard_info() {
        let salt: Vec<u8> = (0u8..16).collect();
        let bytes = build_info(CipherAlgorithm::AES_128_ID, 128, &salt, &[7; 16], &[9; 32]);

        let info = EncryptionInfo::parse(&bytes).unwrap();
        assert_eq!(info.version.major, 3);
        assert_eq!(info.version.minor, 2);
        assert_eq!(info.header.algorithm, CipherAlgorithm::Aes128);
        assert_eq!(info.header.hash, HashAlgorithm::Sha1);
        assert_eq!(info.header.key_bits, 128);
        assert_eq!(info.key_len(), 16);
        assert_eq!(
            info.header.csp_name,
            "Microsoft Enhanced RSA and AES Cryptographic Provider"
        );
        assert_eq!(&info.verifier.salt[..], &salt[..]);
        assert_eq!(info.verifier.encrypted_verifier, [7; 16]);
        assert_eq!(info.verifier.verifier_hash_size, 20);
        assert_eq!(info.verifier.encrypted_verifier_hash, [9; 32]);
    }

    #[test]
    fn test_truncated_streams_are_structural_errors() {
        let bytes = build_info(CipherAlgorithm::AES_128_ID, 128, &[0; 16], &[0; 16], &[0; 32]);
        for len in [0, 3, 11, 40, bytes.len() - 1] {
            let err = EncryptionInfo::parse(&bytes[..len]).unwrap_err();
            assert!(matches!(err, Error::Truncated { .. }), "len {}: {:?}", len, err);
            assert!(!err.is_password_error());
        }
    }

    #[test]
    fn test_key_size_mismatch() {
        let bytes = build_info(CipherAlgorithm::AES_256_ID, 128, &[0; 16], &[0; 16], &[0; 32]);
        assert!(matches!(
            EncryptionInfo::parse(&bytes),
            Err(Error::InvalidEncryption(_))
        ));
    }

    #[test]
    fn test_bad_salt_size() {
        let bytes = build_info(CipherAlgorithm::AES_128_ID, 128, &[0; 8], &[0; 16], &[0; 32]);
        assert!(matches!(
            EncryptionInfo::parse(&bytes),
            Err(Error::InvalidEncryption(_))
        ));
    }

    #[test]
    fn test_rc4_and_agile_are_unsupported() {
        let bytes = build_info(CipherAlgorithm::RC4_ID, 128, &[0; 16], &[0; 16], &[0; 32]);
        assert!(matches!(
            EncryptionInfo::parse(&bytes),
            Err(Error::UnsupportedEncryption(_))
        ));

        let mut agile = vec![4, 0, 4, 0, 0x40, 0, 0, 0];
        agile.extend_from_slice(b"<?xml version=\"1.0\"?><encryption/>");
        assert!(matches!(
            EncryptionInfo::parse(&agile),
            Err(Error::UnsupportedEncryption(_))
        ));
    }

    #[test]
    fn test_hash_id_zero_means_sha1() {
        assert_eq!(HashAlgorithm::from_id(0).unwrap(), HashAlgorithm::Sha1);
        assert_eq!(HashAlgorithm::Sha1.digest_len(), 20);
        assert!(HashAlgorithm::from_id(0x800C).is_err());
    }
}
