//! Simulated network latency

use std::time::Duration;

/// Fixed artificial delay awaited at the top of every mock source call.
///
/// Defaults to 500ms, roughly what the screens were built against. Tests
/// use [`SimulatedLatency::none`] so nothing actually sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    /// Creates a latency of the given number of milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(millis),
        }
    }

    /// No delay at all
    pub fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleeps for the configured delay
    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::from_millis(500)
    }
}
