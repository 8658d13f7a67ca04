//! The periodic drain consumer.
//!
//! One background thread flushes the manager on a fixed cadence; producers
//! never wait on the sink. Shutdown is signalled over a channel and always
//! ends with a full dump, so a clean shutdown publishes everything still
//! queued.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};

use emberlog_core::EventManager;

/// Handle to the background drain thread.
///
/// Dropping the handle (or calling [`FlushThread::shutdown`]) signals the
/// thread, waits for its final dump, and joins it.
pub struct FlushThread {
    shutdown: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl FlushThread {
    /// Spawns the drain thread.
    ///
    /// Every `interval` the thread publishes up to `batch` events; on
    /// shutdown it drains the queue completely.
    ///
    /// # Panics
    ///
    /// Panics if the OS refuses to spawn the thread.
    #[must_use]
    pub fn spawn(manager: Arc<EventManager>, interval: Duration, batch: usize) -> Self {
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("emberlog-flush".into())
            .spawn(move || {
                tracing::debug!(?interval, batch, "drain worker started");
                let ticker = tick(interval);

                loop {
                    select! {
                        recv(shutdown_rx) -> _ => {
                            manager.dump();
                            break;
                        }
                        recv(ticker) -> _ => {
                            manager.flush(batch);
                        }
                    }
                }

                tracing::debug!("drain worker stopped");
            })
            .expect("failed to spawn emberlog drain thread");

        Self {
            shutdown: shutdown_tx,
            handle: Some(handle),
        }
    }

    /// Stops the worker after a final full dump and joins it.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.shutdown.send(());
            let _ = handle.join();
        }
    }
}

impl Drop for FlushThread {
    fn drop(&mut self) {
        self.stop();
    }
}
