//! Character classes and candidate pool construction.

/// Lowercase letters, `a`-`z`.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase letters, `A`-`Z`.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digits, `0`-`9`.
pub const DIGITS: &str = "0123456789";
/// Symbols: `!`, `#`, `$`, `*`, `-`, `_`.
pub const SYMBOLS: &str = "!#$*-_";

/// Which character classes contribute candidates to the pool.
///
/// Every class is enabled by default. Fields are plain flags so a request
/// can be assembled literally:
///
/// ```
/// use mkpass::Classes;
///
/// let alphanumeric = Classes { symbols: false, ..Classes::all() };
/// assert_eq!(alphanumeric.pool_size(), 62);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classes {
    /// Include [`LOWERCASE`].
    pub lower: bool,
    /// Include [`UPPERCASE`].
    pub upper: bool,
    /// Include [`DIGITS`].
    pub digits: bool,
    /// Include [`SYMBOLS`].
    pub symbols: bool,
}

impl Default for Classes {
    fn default() -> Self {
        Self::all()
    }
}

impl Classes {
    /// Every class enabled.
    pub const fn all() -> Self {
        Self {
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
        }
    }

    /// No class enabled; the pool comes out empty.
    pub const fn none() -> Self {
        Self {
            lower: false,
            upper: false,
            digits: false,
            symbols: false,
        }
    }

    /// Whether at least one class is enabled.
    pub const fn any(&self) -> bool {
        self.lower || self.upper || self.digits || self.symbols
    }

    /// Build the candidate pool.
    ///
    /// Enabled classes are appended in a fixed order: lowercase,
    /// uppercase, digits, symbols. Disabled classes contribute nothing,
    /// so the result is empty when no class is enabled. The pool is not
    /// de-duplicated or shuffled; order only matters for index-based
    /// sampling.
    pub fn pool(&self) -> Vec<char> {
        let mut pool = Vec::with_capacity(self.pool_size());

        if self.lower {
            pool.extend(LOWERCASE.chars());
        }
        if self.upper {
            pool.extend(UPPERCASE.chars());
        }
        if self.digits {
            pool.extend(DIGITS.chars());
        }
        if self.symbols {
            pool.extend(SYMBOLS.chars());
        }

        pool
    }

    /// Number of candidates [`pool`](Self::pool) will hold.
    pub const fn pool_size(&self) -> usize {
        let mut size = 0;
        if self.lower {
            size += LOWERCASE.len();
        }
        if self.upper {
            size += UPPERCASE.len();
        }
        if self.digits {
            size += DIGITS.len();
        }
        if self.symbols {
            size += SYMBOLS.len();
        }
        size
    }
}
