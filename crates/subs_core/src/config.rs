use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("animation duration must be positive")]
    ZeroDuration,
    #[error("tick interval must be positive")]
    ZeroInterval,
    #[error("digit count must be positive")]
    ZeroDigits,
    #[error("duration {duration_ms}ms is not a whole number of {interval_ms}ms ticks")]
    UnevenSteps { duration_ms: u32, interval_ms: u32 },
}

/// Timing and width of a flip-clock counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub interval_ms: u32,
    pub digits: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            interval_ms: 20,
            digits: 5,
        }
    }
}

impl CounterConfig {
    /// Returns the number of ticks an animation takes, rejecting configurations
    /// that cannot produce a clean step count.
    pub fn step_count(&self) -> Result<u32, ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.digits == 0 {
            return Err(ConfigError::ZeroDigits);
        }
        if self.duration_ms % self.interval_ms != 0 {
            return Err(ConfigError::UnevenSteps {
                duration_ms: self.duration_ms,
                interval_ms: self.interval_ms,
            });
        }
        Ok(self.duration_ms / self.interval_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CounterConfig};

    #[test]
    fn default_is_one_hundred_steps() {
        assert_eq!(CounterConfig::default().step_count(), Ok(100));
    }

    #[test]
    fn uneven_duration_is_rejected() {
        let config = CounterConfig {
            duration_ms: 1000,
            interval_ms: 30,
            digits: 5,
        };
        assert_eq!(
            config.step_count(),
            Err(ConfigError::UnevenSteps {
                duration_ms: 1000,
                interval_ms: 30
            })
        );
    }

    #[test]
    fn zero_fields_are_rejected() {
        let base = CounterConfig::default();
        let zero_interval = CounterConfig {
            interval_ms: 0,
            ..base
        };
        let zero_duration = CounterConfig {
            duration_ms: 0,
            ..base
        };
        let zero_digits = CounterConfig { digits: 0, ..base };
        assert_eq!(zero_interval.step_count(), Err(ConfigError::ZeroInterval));
        assert_eq!(zero_duration.step_count(), Err(ConfigError::ZeroDuration));
        assert_eq!(zero_digits.step_count(), Err(ConfigError::ZeroDigits));
    }
}
