/// The slice of the search tree's root owned by one worker.
///
/// Worker `i` of `n` owns the first symbols at charset indices `i`, `i + n`,
/// `i + 2n`, and so on. Every index belongs to exactly one worker and the
/// split never depends on timing. Worker 0 additionally owns the empty word,
/// which sits above every first symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Partition {
    worker: usize,
    workers: usize,
}

impl Partition {
    /// Creates the partition for `worker` out of `workers`.
    ///
    /// # Panics
    ///
    /// Panics if `workers` is zero or `worker >= workers`.
    pub fn new(worker: usize, workers: usize) -> Self {
        assert!(workers > 0, "partition requires at least one worker");
        assert!(
            worker < workers,
            "worker index {worker} out of range for {workers} workers"
        );
        Self { worker, workers }
    }

    /// Every partition of a `workers`-wide split, in worker order.
    pub fn all(workers: usize) -> impl ExactSizeIterator<Item = Self> {
        (0..workers).map(move |worker| Self::new(worker, workers))
    }

    pub const fn worker(&self) -> usize {
        self.worker
    }

    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Whether this worker makes the single depth-0 emission attempt.
    pub const fn owns_empty_word(&self) -> bool {
        self.worker == 0
    }

    /// Charset indices of the first symbols this worker walks.
    ///
    /// Empty when the worker index is past the charset size.
    pub fn first_symbols(&self, charset_len: usize) -> impl Iterator<Item = usize> {
        (self.worker..charset_len).step_by(self.workers)
    }
}
