use crate::{Charset, Error, Result};

/// Default minimum word length.
pub const DEFAULT_MIN_LEN: usize = 1;
/// Default maximum word length.
pub const DEFAULT_MAX_LEN: usize = 8;
/// Default number of worker threads.
pub const DEFAULT_NUM_THREADS: usize = 1;

/// Immutable parameters for one generation run.
///
/// Construct it through [`GenerationConfig::builder`], which validates the
/// combination of values. Once built it is only ever read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    charset: Charset,
    min_len: usize,
    max_len: usize,
    max_lines: Option<u64>,
    num_threads: usize,
}

impl GenerationConfig {
    /// Starts a builder with the default lengths, no line cap and a single
    /// worker.
    ///
    /// # Example
    /// ```
    /// use wordgen::GenerationConfig;
    ///
    /// let config = GenerationConfig::builder("abc")
    ///     .min_len(2)
    ///     .max_len(4)
    ///     .max_lines(Some(100))
    ///     .num_threads(3)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.charset().len(), 3);
    /// assert_eq!(config.max_lines(), Some(100));
    /// ```
    pub fn builder(charset: impl Into<Charset>) -> GenerationConfigBuilder {
        GenerationConfigBuilder::new(charset.into())
    }

    pub const fn charset(&self) -> &Charset {
        &self.charset
    }

    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// The global line cap, or `None` when unbounded.
    pub const fn max_lines(&self) -> Option<u64> {
        self.max_lines
    }

    pub const fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Number of lines the run would write without a cap.
    ///
    /// See [`Charset::search_space`].
    pub fn search_space(&self) -> Option<u128> {
        self.charset.search_space(self.min_len, self.max_len)
    }

    /// Number of lines the run is expected to write, honoring the cap.
    ///
    /// `None` only when the uncapped search space overflows and there is no
    /// cap to bound it.
    pub fn expected_lines(&self) -> Option<u128> {
        match (self.search_space(), self.max_lines) {
            (Some(total), Some(cap)) => Some(total.min(u128::from(cap))),
            (Some(total), None) => Some(total),
            (None, Some(cap)) => Some(u128::from(cap)),
            (None, None) => None,
        }
    }
}

/// Builder for [`GenerationConfig`].
#[derive(Clone, Debug)]
pub struct GenerationConfigBuilder {
    charset: Charset,
    min_len: usize,
    max_len: usize,
    max_lines: Option<u64>,
    num_threads: usize,
}

impl GenerationConfigBuilder {
    fn new(charset: Charset) -> Self {
        Self {
            charset,
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            max_lines: None,
            num_threads: DEFAULT_NUM_THREADS,
        }
    }

    #[must_use]
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    #[must_use]
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    #[must_use]
    pub fn max_lines(mut self, max_lines: Option<u64>) -> Self {
        self.max_lines = max_lines;
        self
    }

    #[must_use]
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Validates and freezes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the charset is empty, if
    /// `min_len > max_len`, or if `num_threads` is zero.
    pub fn build(self) -> Result<GenerationConfig> {
        if self.charset.is_empty() {
            return Err(Error::invalid_config("charset must not be empty"));
        }
        if self.min_len > self.max_len {
            return Err(Error::invalid_config(format!(
                "min length ({}) exceeds max length ({})",
                self.min_len, self.max_len
            )));
        }
        if self.num_threads == 0 {
            return Err(Error::invalid_config("thread count must be greater than 0"));
        }

        Ok(GenerationConfig {
            charset: self.charset,
            min_len: self.min_len,
            max_len: self.max_len,
            max_lines: self.max_lines,
            num_threads: self.num_threads,
        })
    }
}
