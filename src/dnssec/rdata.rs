use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::errors::{DnsSecError, Result};

/// Length of the fixed header shared by DNSKEY and DS RDATA
pub const RDATA_HEADER_LEN: usize = 4;

/// DNSKEY flag: the key is a zone key (RFC 4034 2.1.1)
pub const FLAG_ZONE_KEY: u16 = 0x0100;

/// DNSKEY flag: revoked (RFC 5011)
pub const FLAG_REVOKE: u16 = 0x0080;

/// DNSKEY flag: secure entry point (RFC 3757)
pub const FLAG_SECURE_ENTRY_POINT: u16 = 0x0001;

/// Decoded DNSKEY RDATA (RFC 4034 2.1)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnsKeyRecord {
    pub flags: u16,
    /// Passed through as found; RFC 4034 requires 3
    pub protocol: u8,
    pub algorithm: u8,
    /// Standard base64, padded
    pub public_key: String,
}

/// Decoded DS RDATA (RFC 4034 5.1)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DsRecord {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    /// Standard base64, padded
    pub digest: String,
}

/// Binary-to-text encoding shared by the key and digest fields
pub(crate) fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub(crate) fn decode_base64(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

/// Split an RDATA buffer into its big-endian u16, two u8 and the remainder
fn split_header(rdata: &[u8]) -> Result<(u16, u8, u8, &[u8])> {
    let Some((header, rest)) = rdata.split_first_chunk::<RDATA_HEADER_LEN>() else {
        debug!(
            "RDATA too short for header: {} < {}",
            rdata.len(),
            RDATA_HEADER_LEN
        );
        return Err(DnsSecError::MalformedInput {
            need: RDATA_HEADER_LEN,
            have: rdata.len(),
        });
    };
    let [hi, lo, second, third] = *header;
    Ok((u16::from_be_bytes([hi, lo]), second, third, rest))
}

fn join_header(word: u16, second: u8, third: u8, tail: &str) -> Result<Vec<u8>> {
    let tail = decode_base64(tail)?;
    let mut rdata = Vec::with_capacity(RDATA_HEADER_LEN + tail.len());
    rdata.extend_from_slice(&word.to_be_bytes());
    rdata.push(second);
    rdata.push(third);
    rdata.extend_from_slice(&tail);
    Ok(rdata)
}

/// Decode DNSKEY RDATA into flags, protocol, algorithm and base64 public key.
///
/// Only the header length is checked; protocol and algorithm are not validated.
pub fn decode_dnskey(rdata: &[u8]) -> Result<DnsKeyRecord> {
    let (flags, protocol, algorithm, public_key) = split_header(rdata)?;
    trace!(
        "Parsed DNSKEY flags={} protocol={} algorithm={} key_len={}",
        flags,
        protocol,
        algorithm,
        public_key.len()
    );

    Ok(DnsKeyRecord {
        flags,
        protocol,
        algorithm,
        public_key: encode_base64(public_key),
    })
}

/// Decode DS RDATA into key tag, algorithm, digest type and base64 digest.
///
/// The digest type is not resolved and the digest length is not checked
/// against it; see [`digest_algorithm_name`](super::digest_algorithm_name).
pub fn decode_ds(rdata: &[u8]) -> Result<DsRecord> {
    let (key_tag, algorithm, digest_type, digest) = split_header(rdata)?;
    trace!(
        "Parsed DS key_tag={} algorithm={} digest_type={} digest_len={}",
        key_tag,
        algorithm,
        digest_type,
        digest.len()
    );

    Ok(DsRecord {
        key_tag,
        algorithm,
        digest_type,
        digest: encode_base64(digest),
    })
}

impl DnsKeyRecord {
    pub fn to_tuple(&self) -> (u16, u8, u8, String) {
        (
            self.flags,
            self.protocol,
            self.algorithm,
            self.public_key.clone(),
        )
    }

    /// Rebuild the wire RDATA this record was decoded from
    pub fn to_rdata(&self) -> Result<Vec<u8>> {
        join_header(
            self.flags,
            self.protocol,
            self.algorithm,
            &self.public_key,
        )
    }

    /// Raw public key bytes
    pub fn public_key_bytes(&self) -> Result<Vec<u8>> {
        decode_base64(&self.public_key)
    }

    pub fn is_zone_key(&self) -> bool {
        self.flags & FLAG_ZONE_KEY != 0
    }

    pub fn is_revoked(&self) -> bool {
        self.flags & FLAG_REVOKE != 0
    }

    /// Usually set on key signing keys
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & FLAG_SECURE_ENTRY_POINT != 0
    }
}

impl DsRecord {
    pub fn to_tuple(&self) -> (u16, u8, u8, String) {
        (
            self.key_tag,
            self.algorithm,
            self.digest_type,
            self.digest.clone(),
        )
    }

    /// Rebuild the wire RDATA this record was decoded from
    pub fn to_rdata(&self) -> Result<Vec<u8>> {
        join_header(
            self.key_tag,
            self.algorithm,
            self.digest_type,
            &self.digest,
        )
    }

    /// Raw digest bytes
    pub fn digest_bytes(&self) -> Result<Vec<u8>> {
        decode_base64(&self.digest)
    }
}

impl fmt::Display for DnsKeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.flags, self.protocol, self.algorithm, self.public_key
        )
    }
}

impl fmt::Display for DsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.key_tag, self.algorithm, self.digest_type, self.digest
        )
    }
}
