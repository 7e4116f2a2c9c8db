use std::io::{self, Write};

use portable_atomic::{AtomicBool, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    EmitStatus, Emitter, Error, Result,
    mutex::{Mutex, MutexGuard},
};

/// The state every worker mutates, always under the emitter's lock.
#[derive(Debug)]
pub(crate) struct EmissionState<W> {
    pub(crate) count: u64,
    pub(crate) cap: Option<u64>,
    pub(crate) failed: bool,
    pub(crate) writer: W,
    /// Scratch space for the next line, so each line is one `write_all`.
    line: Vec<u8>,
}

impl<W> EmissionState<W> {
    fn has_room(&self) -> bool {
        self.cap.is_none_or(|cap| self.count < cap)
    }
}

/// A lock-based emitter shared by every worker of a run.
///
/// One mutex guards the line count, the optional cap and the output writer,
/// so the cap check, the line write and the increment form a single critical
/// section. This also serializes writes system-wide, which keeps lines from
/// interleaving mid-word.
///
/// A separate relaxed flag mirrors "no emission can succeed anymore" (cap
/// reached or the run failed) and backs [`Emitter::is_halted`]. It is only a
/// hint for pruning; the locked check is the sole authority.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Never exceeds the cap
/// - ✅ Line-atomic output
///
/// # Example
/// ```
/// use wordgen::{EmitStatus, Emitter, LockEmitter};
///
/// let emitter = LockEmitter::new(Vec::new(), Some(1));
/// assert_eq!(emitter.try_emit("abc").unwrap(), EmitStatus::Written);
/// assert_eq!(emitter.try_emit("abd").unwrap(), EmitStatus::Capped);
/// assert_eq!(emitter.into_inner().unwrap(), b"abc\n");
/// ```
pub struct LockEmitter<W> {
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<Mutex<EmissionState<W>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Mutex<EmissionState<W>>,
    halted: AtomicBool,
}

impl<W: Write> LockEmitter<W> {
    /// Creates an emitter writing to `writer`, stopping after `cap` lines if
    /// one is given.
    pub fn new(writer: W, cap: Option<u64>) -> Self {
        let state = EmissionState {
            count: 0,
            cap,
            failed: false,
            writer,
            line: Vec::new(),
        };
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(Mutex::new(state)),
            #[cfg(not(feature = "cache-padded"))]
            state: Mutex::new(state),
            halted: AtomicBool::new(cap == Some(0)),
        }
    }

    /// Number of lines written so far.
    ///
    /// # Errors
    /// - Returns an error if the underlying lock has been poisoned.
    pub fn count(&self) -> Result<u64> {
        Ok(self.lock()?.count)
    }

    pub fn cap(&self) -> Result<Option<u64>> {
        Ok(self.lock()?.cap)
    }

    /// Marks the run as failed so every later attempt returns
    /// [`EmitStatus::Halted`].
    ///
    /// # Errors
    /// - Returns an error if the underlying lock has been poisoned.
    pub fn halt(&self) -> Result<()> {
        let mut state = self.lock()?;
        state.failed = true;
        self.halted.store(true, Ordering::Relaxed);
        Ok(())
    }

    /// Flushes the writer under the lock.
    ///
    /// # Errors
    /// - Returns [`Error::Sink`] if flushing fails.
    /// - Returns an error if the underlying lock has been poisoned.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.lock()?;
        let written = state.count;
        state
            .writer
            .flush()
            .map_err(|source| Error::Sink { written, source })
    }

    /// Consumes the emitter and returns the writer.
    ///
    /// # Errors
    /// - Returns an error if the underlying lock has been poisoned.
    pub fn into_inner(self) -> Result<W> {
        self.into_state().map(|state| state.writer)
    }

    pub(crate) fn into_state(self) -> Result<EmissionState<W>> {
        #[cfg(feature = "cache-padded")]
        let state = crossbeam_utils::CachePadded::into_inner(self.state);
        #[cfg(not(feature = "cache-padded"))]
        let state = self.state;

        #[cfg(feature = "parking-lot")]
        {
            Ok(state.into_inner())
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            state.into_inner().map_err(|_| Error::LockPoisoned)
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, EmissionState<W>>> {
        #[cfg(feature = "parking-lot")]
        {
            Ok(self.state.lock())
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            Ok(self.state.lock()?)
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_sink_failed(&self, state: &mut EmissionState<W>, source: io::Error) -> Error {
        state.failed = true;
        self.halted.store(true, Ordering::Relaxed);
        #[cfg(feature = "tracing")]
        tracing::error!(written = state.count, "output sink failed: {source}");
        Error::Sink {
            written: state.count,
            source,
        }
    }
}

impl<W: Write> Emitter for LockEmitter<W> {
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn try_emit(&self, word: &str) -> Result<EmitStatus> {
        let mut guard = self.lock()?;
        let state = &mut *guard;

        if state.failed {
            return Ok(EmitStatus::Halted);
        }
        if !state.has_room() {
            return Ok(EmitStatus::Capped);
        }

        state.line.clear();
        state.line.extend_from_slice(word.as_bytes());
        state.line.push(b'\n');
        if let Err(source) = state.writer.write_all(&state.line) {
            return Err(self.cold_sink_failed(state, source));
        }
        state.count += 1;

        if !state.has_room() {
            self.halted.store(true, Ordering::Relaxed);
        }
        Ok(EmitStatus::Written)
    }

    fn is_halted(&self) -> bool {
        self.halted.load(Ordering::Relaxed)
    }
}
