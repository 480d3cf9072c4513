use thiserror::Error;

/// Errors raised while decoding DNSSEC RDATA or resolving algorithm codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsSecError {
    /// Buffer is shorter than the fixed RDATA header
    #[error("Malformed RDATA: need {need} bytes, have {have} bytes")]
    MalformedInput { need: usize, have: usize },

    /// Digest type or signature algorithm code outside the implemented set
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(u8),

    /// A base64 field of a decoded record could not be decoded back to bytes
    #[error("Invalid base64 field: {0}")]
    InvalidBase64(String),

    /// Hex-encoded input could not be decoded
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),
}

impl From<base64::DecodeError> for DnsSecError {
    fn from(err: base64::DecodeError) -> Self {
        DnsSecError::InvalidBase64(err.to_string())
    }
}

impl From<hex::FromHexError> for DnsSecError {
    fn from(err: hex::FromHexError) -> Self {
        DnsSecError::InvalidHex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DnsSecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let cases = vec![
            (
                DnsSecError::MalformedInput { need: 4, have: 3 },
                "Malformed RDATA: need 4 bytes, have 3 bytes",
            ),
            (
                DnsSecError::UnsupportedAlgorithm(99),
                "Unsupported algorithm: 99",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: DnsSecError = hex::decode("0g").unwrap_err().into();
        assert!(matches!(err, DnsSecError::InvalidHex(_)));
    }
}
