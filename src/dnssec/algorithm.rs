use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{DnsSecError, Result};

/// DNSSEC signature algorithm numbers (RFC 4034, 5155, 5702, 5933, 6605, 8080, 8624).
///
/// The decoders never consult this table; algorithm codes in decoded
/// records stay raw `u8` values. It exists to name a code for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DnsSecAlgorithm {
    /// Delete DS (RFC 8078)
    DeleteDs = 0,
    /// RSA/MD5 (deprecated)
    RsaMd5 = 1,
    /// Diffie-Hellman
    Dh = 2,
    /// DSA/SHA1 (RFC 2536)
    Dsa = 3,
    /// RSA/SHA-1 (RFC 3110)
    RsaSha1 = 5,
    /// DSA-NSEC3-SHA1 (RFC 5155)
    DsaNsec3Sha1 = 6,
    /// RSASHA1-NSEC3-SHA1 (RFC 5155)
    RsaSha1Nsec3Sha1 = 7,
    /// RSA/SHA-256 (RFC 5702)
    RsaSha256 = 8,
    /// RSA/SHA-512 (RFC 5702)
    RsaSha512 = 10,
    /// GOST R 34.10-2001 (RFC 5933)
    EccGost = 12,
    /// ECDSA Curve P-256 with SHA-256 (RFC 6605)
    EcdsaP256Sha256 = 13,
    /// ECDSA Curve P-384 with SHA-384 (RFC 6605)
    EcdsaP384Sha384 = 14,
    /// Ed25519 (RFC 8080)
    Ed25519 = 15,
    /// Ed448 (RFC 8080)
    Ed448 = 16,
    /// Indirect (RFC 4034)
    Indirect = 252,
    PrivateDns = 253,
    PrivateOid = 254,
}

impl DnsSecAlgorithm {
    /// Convert to algorithm number
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Presentation mnemonic from the IANA registry
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::DeleteDs => "DELETE",
            Self::RsaMd5 => "RSAMD5",
            Self::Dh => "DH",
            Self::Dsa => "DSA",
            Self::RsaSha1 => "RSASHA1",
            Self::DsaNsec3Sha1 => "DSA-NSEC3-SHA1",
            Self::RsaSha1Nsec3Sha1 => "RSASHA1-NSEC3-SHA1",
            Self::RsaSha256 => "RSASHA256",
            Self::RsaSha512 => "RSASHA512",
            Self::EccGost => "ECC-GOST",
            Self::EcdsaP256Sha256 => "ECDSAP256SHA256",
            Self::EcdsaP384Sha384 => "ECDSAP384SHA384",
            Self::Ed25519 => "ED25519",
            Self::Ed448 => "ED448",
            Self::Indirect => "INDIRECT",
            Self::PrivateDns => "PRIVATEDNS",
            Self::PrivateOid => "PRIVATEOID",
        }
    }

    /// MUST NOT be used for signing per RFC 8624
    pub fn is_deprecated(&self) -> bool {
        matches!(
            self,
            Self::RsaMd5 | Self::Dsa | Self::DsaNsec3Sha1 | Self::EccGost
        )
    }
}

impl TryFrom<u8> for DnsSecAlgorithm {
    type Error = DnsSecError;

    fn try_from(value: u8) -> Result<Self> {
        let algorithm = match value {
            0 => Self::DeleteDs,
            1 => Self::RsaMd5,
            2 => Self::Dh,
            3 => Self::Dsa,
            5 => Self::RsaSha1,
            6 => Self::DsaNsec3Sha1,
            7 => Self::RsaSha1Nsec3Sha1,
            8 => Self::RsaSha256,
            10 => Self::RsaSha512,
            12 => Self::EccGost,
            13 => Self::EcdsaP256Sha256,
            14 => Self::EcdsaP384Sha384,
            15 => Self::Ed25519,
            16 => Self::Ed448,
            252 => Self::Indirect,
            253 => Self::PrivateDns,
            254 => Self::PrivateOid,
            // reserved or unassigned
            _ => return Err(DnsSecError::UnsupportedAlgorithm(value)),
        };
        Ok(algorithm)
    }
}

impl fmt::Display for DnsSecAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
