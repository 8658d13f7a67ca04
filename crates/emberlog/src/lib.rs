//! # emberlog
//!
//! Pooled, bounded, drop-oldest in-process logging.
//!
//! [`emberlog_core`] provides the machinery — recycling event pools, the
//! bounded ring queue, and the event manager; this crate adds the deployable
//! surface: configuration loading and the periodic drain worker. A wrapper
//! supplies a sink and owns the lifetimes:
//!
//! ```rust,ignore
//! let config = LogConfig::from_toml_str(&std::fs::read_to_string(path)?)?;
//! let (manager, worker) = emberlog::start(&config, std::io::stderr())?;
//!
//! let pool: EventPool<TextEvent> = EventPool::with_capacity(config.pool_capacity);
//! manager.enqueue(pool.acquire(TextEvent::with_severity(Severity::Info, "up")));
//!
//! worker.shutdown(); // final dump, then join
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod worker;

pub use config::{ConfigError, LogConfig};
pub use worker::FlushThread;

pub use emberlog_core::{
    render_line, Event, EventHeader, EventManager, EventPool, EventRef, GenericEvent, RingQueue,
    Severity, TextEvent, Value,
};

use std::io;
use std::sync::Arc;

/// Builds the manager from `config` and spawns the drain worker over it.
///
/// # Errors
///
/// Returns [`ConfigError`] if the config does not validate.
pub fn start<W>(config: &LogConfig, sink: W) -> Result<(Arc<EventManager>, FlushThread), ConfigError>
where
    W: io::Write + Send + 'static,
{
    let manager = Arc::new(config.build_manager(sink)?);
    let worker = FlushThread::spawn(
        Arc::clone(&manager),
        config.flush_interval(),
        config.flush_batch,
    );
    Ok((manager, worker))
}
