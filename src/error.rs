use thiserror::Error;

/// Errors surfaced by password generation.
#[derive(Debug, Error)]
pub enum Error {
    /// All four character-class flags were disabled.
    #[error("at least one character class must be enabled")]
    NoClasses,

    /// Requested length falls outside the permitted range.
    #[error("length {length} is outside the permitted range {min}..={max}")]
    LengthOutOfRange {
        /// The rejected length, after clamping to the minimum.
        length: usize,
        /// Smallest permitted length.
        min: usize,
        /// Largest permitted length.
        max: usize,
    },

    /// The candidate pool cannot support a random draw.
    ///
    /// A pool of one candidate would only ever emit a constant string, so
    /// anything below two candidates is rejected.
    #[error("character pool must hold at least 2 candidates, got {size}")]
    PoolTooSmall {
        /// Number of candidates in the rejected pool.
        size: usize,
    },
}
