/// Represents the result of one emission attempt.
///
/// This type models the outcome of [`Emitter::try_emit`]:
///
/// - [`EmitStatus::Written`] means the word was written as a line and the
///   shared counter was incremented.
/// - [`EmitStatus::Capped`] means the global line cap had already been
///   reached, so nothing was written.
/// - [`EmitStatus::Halted`] means another worker hit a sink failure and the
///   run is aborting, so nothing was written.
///
/// Only `Written` lets a walk continue past the current node with work left
/// to do. The other two are terminal for every worker.
///
/// [`Emitter::try_emit`]: crate::Emitter::try_emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitStatus {
    /// The word was written and counted.
    Written,
    /// The line cap is exhausted.
    Capped,
    /// The run is aborting after a failure elsewhere.
    Halted,
}

impl EmitStatus {
    /// Returns `true` if the word was written.
    pub const fn is_written(self) -> bool {
        matches!(self, Self::Written)
    }

    /// Returns `true` if no further emission can ever succeed.
    pub const fn is_terminal(self) -> bool {
        !self.is_written()
    }
}
