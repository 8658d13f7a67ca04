//! Startup configuration for the logging substrate.
//!
//! Loaded once at startup (TOML), validated, then used to size the manager,
//! the pools, and the drain worker. Capacities are fixed for the process
//! lifetime; nothing here is hot-reloadable.

use std::io;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use emberlog_core::EventManager;

/// Errors raised while loading or validating a [`LogConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The queue cannot be sized to zero.
    #[error("queue capacity must be greater than zero")]
    ZeroQueueCapacity,

    /// A flush that publishes nothing per cycle would never drain.
    #[error("flush batch must be greater than zero")]
    ZeroFlushBatch,

    /// A zero interval would spin the drain worker.
    #[error("flush interval must be greater than zero")]
    ZeroFlushInterval,

    /// The TOML text could not be parsed.
    #[error("invalid log config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Sizing knobs for the manager, pools, and drain worker.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Events the queue holds before overwriting the oldest.
    pub queue_capacity: usize,
    /// Storage blocks to pre-allocate per event pool.
    pub pool_capacity: usize,
    /// Max events published per drain cycle.
    pub flush_batch: usize,
    /// Milliseconds between drain cycles.
    pub flush_interval_ms: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 1024,
            pool_capacity: 256,
            flush_batch: 64,
            flush_interval_ms: 50,
        }
    }
}

impl LogConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or zero-sized capacities.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the substrate relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any zero-sized capacity. A zero
    /// `pool_capacity` is allowed; pools grow on demand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        if self.flush_batch == 0 {
            return Err(ConfigError::ZeroFlushBatch);
        }
        if self.flush_interval_ms == 0 {
            return Err(ConfigError::ZeroFlushInterval);
        }
        Ok(())
    }

    /// The drain cadence as a [`Duration`].
    #[must_use]
    pub const fn flush_interval(&self) -> Duration {
        Duration::from_millis(self.flush_interval_ms)
    }

    /// Builds an [`EventManager`] sized by this config, writing to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config does not validate.
    pub fn build_manager<W>(&self, sink: W) -> Result<EventManager, ConfigError>
    where
        W: io::Write + Send + 'static,
    {
        self.validate()?;
        Ok(EventManager::new(sink, self.queue_capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = LogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.flush_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_parse_overrides() {
        let config = LogConfig::from_toml_str(
            r#"
            queue_capacity = 20
            flush_batch = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.queue_capacity, 20);
        assert_eq!(config.flush_batch, 5);
        // Unset fields keep their defaults.
        assert_eq!(config.pool_capacity, LogConfig::default().pool_capacity);
    }

    #[test]
    fn test_zero_queue_capacity_rejected() {
        let result = LogConfig::from_toml_str("queue_capacity = 0");
        assert!(matches!(result, Err(ConfigError::ZeroQueueCapacity)));
    }

    #[test]
    fn test_zero_flush_interval_rejected() {
        let result = LogConfig::from_toml_str("flush_interval_ms = 0");
        assert!(matches!(result, Err(ConfigError::ZeroFlushInterval)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = LogConfig::from_toml_str("queue_depth = 10");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_build_manager_applies_capacity() {
        let config = LogConfig {
            queue_capacity: 2,
            ..LogConfig::default()
        };
        let manager = config.build_manager(io::sink()).unwrap();

        let pool = emberlog_core::EventPool::new();
        for i in 0..5 {
            manager.enqueue(pool.acquire(emberlog_core::TextEvent::new(format!("{i}"))));
        }
        assert_eq!(manager.dump(), 2);
    }
}
