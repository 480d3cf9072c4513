//! Decoding of DNSSEC DNSKEY and DS RDATA, and the RFC 4034 key tag checksum.

pub mod config;
pub mod dns;
pub mod dnssec;
pub mod error;

pub use dnssec::{
    DigestType, DnsKeyRecord, DnsSecError, DsRecord, decode_dnskey, decode_ds,
    digest_algorithm_name, keytag,
};
