//! # emberlog Core
//!
//! In-process logging substrate built around three pieces of concurrent
//! lifecycle machinery:
//!
//! 1. **Recycling pools** — one per concrete event type, amortizing
//!    allocation under steady load
//! 2. **Bounded ring queue** — fixed capacity, drop-oldest overflow,
//!    strictly serialized
//! 3. **Event manager** — ties queue occupancy to lifetime counters and
//!    controlled draining
//!
//! ## Data Flow
//!
//! ```text
//! producer ──> EventPool::acquire ──> EventRef ──> EventManager::enqueue
//!                   ▲                                      │
//!                   │                              (overwritten on
//!                   │                               overflow, or)
//!                   │                                      ▼
//!                   └──── handle drop <──── flush/dump ──> sink
//! ```
//!
//! Every path ends with the handle dropping and its storage returning to
//! the pool; nothing leaks, enqueue never blocks, and the oldest events are
//! the ones shed under pressure.
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocation on the warm path** - pre-grow pools with
//!    [`EventPool::add_capacity`] before steady-state load
//! 2. **Steady-state operations never fail** - enqueue, flush, dump and
//!    clear always make progress
//! 3. **Strict serialization over cleverness** - one lock per queue, one
//!    lock per free list, no lock-free machinery

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod event;
pub mod manager;
pub mod pool;
pub mod queue;
pub mod render;

pub use event::{Event, EventHeader, EventRef, GenericEvent, Severity, TextEvent, Value};
pub use manager::EventManager;
pub use pool::EventPool;
pub use queue::RingQueue;
pub use render::render_line;
