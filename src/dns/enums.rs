use std::fmt;

use super::constants::DNSRecordType;

/// Record types with a decoder in this crate
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordType {
    DS,
    DNSKEY,
}

impl TryFrom<u16> for RecordType {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            DNSRecordType::DS => Ok(RecordType::DS),
            DNSRecordType::DNSKEY => Ok(RecordType::DNSKEY),
            other => Err(other),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::DS => DNSRecordType::DS,
            RecordType::DNSKEY => DNSRecordType::DNSKEY,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::DS => write!(f, "DS"),
            RecordType::DNSKEY => write!(f, "DNSKEY"),
        }
    }
}
