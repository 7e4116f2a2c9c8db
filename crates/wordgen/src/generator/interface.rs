use crate::{EmitStatus, Result};

/// The accounting and output seam a generation walk emits through.
///
/// An implementation decides, atomically with respect to every other caller,
/// whether a candidate word may still be written, writes it as one line, and
/// counts it.
pub trait Emitter {
    /// Attempts to write `word` as a line.
    ///
    /// The check, the write and the increment happen as one unit: no other
    /// caller can observe or change the count in between.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Sink`] if the underlying writer failed. The
    /// word is not counted in that case.
    fn try_emit(&self, word: &str) -> Result<EmitStatus>;

    /// Best-effort hint that no further emission can succeed.
    ///
    /// May lag behind the real state. Walks use it to skip descending into
    /// subtrees early; correctness never depends on it.
    fn is_halted(&self) -> bool {
        false
    }
}

impl<E: Emitter + ?Sized> Emitter for &E {
    fn try_emit(&self, word: &str) -> Result<EmitStatus> {
        (**self).try_emit(word)
    }

    fn is_halted(&self) -> bool {
        (**self).is_halted()
    }
}
