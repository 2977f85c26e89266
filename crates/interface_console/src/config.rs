//! Console configuration

use serde::Deserialize;

use core_kernel::Currency;
use infra_mock::SimulatedLatency;

/// Console configuration, loaded from the environment with the `CLINIC_`
/// prefix (`CLINIC_LATENCY_MS`, `CLINIC_CURRENCY`, `CLINIC_LOG_LEVEL`).
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Simulated network latency in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Currency new drafts are denominated in
    #[serde(default)]
    pub currency: Currency,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_latency_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            currency: Currency::INR,
            log_level: default_log_level(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CLINIC"))
            .build()?
            .try_deserialize()
    }

    /// The simulated latency the mock sources should use
    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.latency_ms, 500);
        assert_eq!(config.currency, Currency::INR);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.latency(), SimulatedLatency::from_millis(500));
    }
}
