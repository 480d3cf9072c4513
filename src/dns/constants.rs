/// DNS resource record type codes for the records this crate decodes
pub struct DNSRecordType;

impl DNSRecordType {
    pub const DS: u16 = 43; // Delegation Signer (RFC 4034)
    pub const DNSKEY: u16 = 48; // DNS public key (RFC 4034)
}
