#![forbid(unsafe_code)]

//! Runtime services shared by revolve widgets: a deterministic task
//! scheduler and key-value persistence.

pub mod scheduler;
pub mod state_persistence;

pub use scheduler::{Fired, Scheduler, TaskId};
pub use state_persistence::{KeyValueStore, MemoryStore, StorageError, StorageResult};

#[cfg(feature = "state-persistence")]
pub use state_persistence::FileStore;
