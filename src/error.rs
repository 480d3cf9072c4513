use thiserror::Error;

pub use crate::dnssec::errors::DnsSecError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}
