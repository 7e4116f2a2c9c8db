use core::fmt;

/// The ordered alphabet candidate words are built from.
///
/// Symbols are Unicode scalar values kept in the order given. Duplicates are
/// not removed: a repeated symbol simply yields repeated enumeration paths.
/// A `Charset` is never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Charset {
    symbols: Box<[char]>,
}

impl Charset {
    /// Builds a charset from symbols in enumeration order.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// The longest UTF-8 encoding among the symbols, in bytes.
    pub(crate) fn max_symbol_bytes(&self) -> usize {
        self.symbols
            .iter()
            .map(|c| c.len_utf8())
            .max()
            .unwrap_or(0)
    }

    /// Number of candidate words with a length in `[min_len, max_len]`.
    ///
    /// This is `sum(len^L)` for every `L` in the range, counting the empty
    /// word once when `min_len` is zero. Returns `None` if the total does not
    /// fit in a `u128`, or if `min_len > max_len`.
    ///
    /// # Example
    /// ```
    /// use wordgen::Charset;
    ///
    /// let charset = Charset::from("ab");
    /// assert_eq!(charset.search_space(1, 2), Some(6));
    /// assert_eq!(charset.search_space(0, 0), Some(1));
    /// ```
    pub fn search_space(&self, min_len: usize, max_len: usize) -> Option<u128> {
        if min_len > max_len {
            return None;
        }
        let base = self.symbols.len() as u128;
        let mut level: u128 = 1;
        let mut total: u128 = 0;
        for depth in 0..=max_len {
            if depth > 0 {
                level = level.checked_mul(base)?;
            }
            if depth >= min_len {
                total = total.checked_add(level)?;
            }
            // Every deeper level is empty too.
            if level == 0 {
                break;
            }
        }
        Some(total)
    }
}

impl From<&str> for Charset {
    fn from(symbols: &str) -> Self {
        Self::new(symbols.chars())
    }
}

impl From<String> for Charset {
    fn from(symbols: String) -> Self {
        Self::from(symbols.as_str())
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
