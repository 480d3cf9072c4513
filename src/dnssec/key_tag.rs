use tracing::trace;

use super::errors::Result;
use super::rdata::DnsKeyRecord;

/// Calculate the key tag of a DNSKEY RDATA buffer (RFC 4034 Appendix B.1).
///
/// `rdata` is the whole payload, flags through public key. Bytes are summed
/// as big-endian 16-bit words; an odd trailing byte is the high half of a
/// word whose low half is zero. The carry is folded back exactly once.
///
/// The algorithm field is not consulted, so RSA/MD5 keys get the checksum
/// rather than the Appendix B.1 modulus shortcut.
pub fn keytag(rdata: &[u8]) -> u16 {
    // u64 so arbitrarily long buffers cannot wrap before the fold
    let mut accumulator: u64 = 0;

    for (i, &byte) in rdata.iter().enumerate() {
        if i % 2 == 0 {
            accumulator += u64::from(byte) << 8;
        } else {
            accumulator += u64::from(byte);
        }
    }

    let key_tag = ((accumulator + (accumulator >> 16)) & 0xFFFF) as u16;
    trace!("Key tag over {} RDATA bytes -> {}", rdata.len(), key_tag);
    key_tag
}

impl DnsKeyRecord {
    /// Key tag of this record, computed over its reconstructed RDATA
    pub fn key_tag(&self) -> Result<u16> {
        Ok(keytag(&self.to_rdata()?))
    }
}
