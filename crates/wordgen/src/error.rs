use std::io;

/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `wordgen` can produce.
///
/// Configuration problems are reported before any worker is spawned. Every
/// other variant surfaces from a running generation and aborts the whole run.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The generation parameters were rejected before any work started.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Writing to or flushing the output sink failed.
    ///
    /// `written` is the number of lines fully committed to the sink before
    /// the failure.
    #[error("output sink failed after {written} lines: {source}")]
    Sink {
        written: u64,
        #[source]
        source: io::Error,
    },

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    /// A worker thread panicked before finishing its partition.
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    /// The emission lock was poisoned by a panicking worker.
    ///
    /// `parking_lot` mutexes do not poison, so this variant only exists
    /// without the `parking-lot` feature.
    #[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
    #[cfg(not(feature = "parking-lot"))]
    #[error("emission lock poisoned")]
    LockPoisoned,
}

impl Error {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(not(feature = "parking-lot"))]
use crate::mutex::{MutexGuard, PoisonError};
// Collapse every poisoned guard into a single `LockPoisoned`
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
