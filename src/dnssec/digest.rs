use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{DnsSecError, Result};

/// DS digest type registry.
///
/// Deliberately partial: only SHA-1 (RFC 3658) is implemented. SHA-256 (2)
/// and SHA-384 (4) are assigned by IANA but resolve to
/// [`DnsSecError::UnsupportedAlgorithm`] until a variant is added here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DigestType {
    /// SHA-1 (RFC 3658)
    Sha1 = 1,
}

impl DigestType {
    /// Every implemented digest type, in code order
    pub const ALL: [DigestType; 1] = [DigestType::Sha1];

    /// Convert to digest type number
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Algorithm name as registered by IANA
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
        }
    }

    /// Get the expected digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
        }
    }
}

impl TryFrom<u8> for DigestType {
    type Error = DnsSecError;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|digest| digest.to_u8() == value)
            .ok_or(DnsSecError::UnsupportedAlgorithm(value))
    }
}

impl fmt::Display for DigestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a DS digest type code to its digest algorithm.
///
/// Unknown codes are a hard failure, never a default.
pub fn digest_algorithm_name(digest_type: u8) -> Result<DigestType> {
    DigestType::try_from(digest_type).inspect_err(|_| {
        debug!("Refusing unsupported DS digest type {}", digest_type);
    })
}
