pub mod constants;
pub mod enums;

pub use constants::DNSRecordType;
pub use enums::RecordType;
