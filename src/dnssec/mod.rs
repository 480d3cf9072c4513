pub mod algorithm;
pub mod digest;
pub mod errors;
pub mod key_tag;
pub mod rdata;

pub use algorithm::DnsSecAlgorithm;
pub use digest::{DigestType, digest_algorithm_name};
pub use errors::{DnsSecError, Result};
pub use key_tag::keytag;
pub use rdata::{DnsKeyRecord, DsRecord, decode_dnskey, decode_ds};

/// DNSSEC constants
pub mod constants {
    /// Value RFC 4034 requires in the DNSKEY protocol field
    pub const DNSKEY_PROTOCOL: u8 = 3;

    /// Root trust anchor key tag (2024 KSK)
    pub const ROOT_KSK_KEY_TAG: u16 = 20326;
}
