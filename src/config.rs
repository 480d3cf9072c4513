use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// How the inspection binary prints decoded records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Presentation format, one record per line
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    /// `tracing_subscriber` filter directive, e.g. `debug` or `dnssec_rdata=trace`
    pub log_filter: String,

    pub output: OutputFormat,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl InspectConfig {
    /// Create an InspectConfig from environment variables
    /// Returns Err if a variable is present but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source, so callers and tests need not
    /// touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(log_filter) = lookup("DNSSEC_RDATA_LOG") {
            config.log_filter = log_filter;
        }

        if let Some(output) = lookup("DNSSEC_RDATA_OUTPUT") {
            config.output = output.parse()?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.env_filter().map(|_| ())
    }

    /// Filter for the stderr subscriber
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|e| ConfigError::InvalidLogFilter(format!("{}: {}", self.log_filter, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = InspectConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!(
            "yaml".parse::<OutputFormat>(),
            Err(ConfigError::InvalidOutputFormat("yaml".to_string()))
        );
    }

    #[test]
    fn test_invalid_log_filter() {
        let config = InspectConfig {
            log_filter: "dnssec_rdata=loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogFilter(_))
        ));
    }
}
