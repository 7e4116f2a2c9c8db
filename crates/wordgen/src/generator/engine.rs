use core::ops::ControlFlow;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Charset, EmitStatus, Emitter, GenerationConfig, Partition, Result};

/// Upper bound on what is reserved up front for the word buffer (bytes) and
/// the cursor stack (entries).
///
/// Longer words still work; the buffer just grows once on the first deep
/// descent and is reused afterwards.
const MAX_WORD_PREALLOC: usize = 4096;

/// A depth-first walker over one worker's share of the search tree.
///
/// Each engine owns a single word buffer that is reused for the whole walk:
/// moving to a sibling pops the last symbol and pushes the next one, so no
/// node allocates. The walk keeps its own stack of per-depth charset cursors,
/// so word length is bounded by memory rather than by the worker's stack.
///
/// Emission is pre-order. A word is offered to the [`Emitter`] as soon as its
/// length reaches `min_len`, before any of its extensions. Within one engine
/// the order is therefore fully determined by the charset order.
///
/// # Example
/// ```
/// use wordgen::{Engine, GenerationConfig, LockEmitter, Partition};
///
/// let config = GenerationConfig::builder("ab").max_len(2).build().unwrap();
/// let emitter = LockEmitter::new(Vec::new(), config.max_lines());
/// let written = Engine::new(&config, &emitter).run(Partition::new(0, 1)).unwrap();
///
/// assert_eq!(written, 6);
/// assert_eq!(emitter.into_inner().unwrap(), b"a\naa\nab\nb\nba\nbb\n");
/// ```
pub struct Engine<'a, E: ?Sized> {
    charset: &'a Charset,
    min_len: usize,
    max_len: usize,
    emitter: &'a E,
    word: String,
    cursors: Vec<usize>,
    written: u64,
}

impl<'a, E: Emitter + ?Sized> Engine<'a, E> {
    pub fn new(config: &'a GenerationConfig, emitter: &'a E) -> Self {
        let charset = config.charset();
        let capacity = config
            .max_len()
            .saturating_mul(charset.max_symbol_bytes())
            .min(MAX_WORD_PREALLOC);
        Self {
            charset,
            min_len: config.min_len(),
            max_len: config.max_len(),
            emitter,
            word: String::with_capacity(capacity),
            cursors: Vec::with_capacity(config.max_len().min(MAX_WORD_PREALLOC)),
            written: 0,
        }
    }

    /// Lines this engine has written so far.
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// Walks every subtree `partition` owns and returns the number of lines
    /// this engine wrote.
    ///
    /// The owner of the empty word makes the single depth-0 attempt first.
    /// Each owned first symbol is then walked starting at depth 1. The walk
    /// ends early once the emitter reports a cap or a halted run.
    ///
    /// # Errors
    ///
    /// Propagates the first emitter error, such as a failed sink.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self), fields(worker = partition.worker()))
    )]
    pub fn run(&mut self, partition: Partition) -> Result<u64> {
        self.word.clear();

        if partition.owns_empty_word() && self.min_len == 0 && self.emit()?.is_terminal() {
            return Ok(self.written);
        }
        if self.max_len == 0 {
            return Ok(self.written);
        }

        let charset = self.charset;
        for index in partition.first_symbols(charset.len()) {
            if self.emitter.is_halted() {
                break;
            }
            let Some(symbol) = charset.get(index) else {
                break;
            };
            self.word.clear();
            self.word.push(symbol);
            if self.walk()?.is_break() {
                break;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(written = self.written, "partition finished");
        Ok(self.written)
    }

    /// Walks the subtree rooted at the one-symbol word in the buffer.
    ///
    /// Iterative so that deep words cost heap, not thread stack. `cursors`
    /// holds, for every node currently being expanded, the charset index of
    /// its next child. The buffer always spells the path to the top node.
    fn walk(&mut self) -> Result<ControlFlow<()>> {
        let charset = self.charset;
        let symbols = charset.symbols();
        self.cursors.clear();

        match self.visit(1)? {
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
            ControlFlow::Continue(false) => return Ok(ControlFlow::Continue(())),
            ControlFlow::Continue(true) => self.cursors.push(0),
        }

        while let Some(cursor) = self.cursors.last_mut() {
            let Some(&symbol) = symbols.get(*cursor) else {
                // Children exhausted, back up to the parent.
                self.cursors.pop();
                self.word.pop();
                continue;
            };
            *cursor += 1;
            self.word.push(symbol);

            match self.visit(self.cursors.len() + 1)? {
                ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
                ControlFlow::Continue(true) => self.cursors.push(0),
                ControlFlow::Continue(false) => {
                    self.word.pop();
                }
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Offers the buffer, `len` symbols long, and decides whether to descend
    /// below it.
    fn visit(&mut self, len: usize) -> Result<ControlFlow<(), bool>> {
        if len >= self.min_len && self.emit()?.is_terminal() {
            return Ok(ControlFlow::Break(()));
        }
        if len >= self.max_len {
            return Ok(ControlFlow::Continue(false));
        }
        // Unlocked hint only; `try_emit` re-checks under the lock.
        if self.emitter.is_halted() {
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(true))
    }

    fn emit(&mut self) -> Result<EmitStatus> {
        let status = self.emitter.try_emit(&self.word)?;
        if status.is_written() {
            self.written += 1;
        }
        Ok(status)
    }
}
