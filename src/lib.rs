//! Random password generation with configurable character classes.
//!
//! Passwords are drawn uniformly, with replacement, from a pool assembled
//! out of four fixed character classes (lowercase, uppercase, digits,
//! symbols) using the operating system's CSPRNG. Requested lengths are
//! clamped up to a configurable minimum and validated against a
//! configurable maximum; the `PWD_MIN_LENGTH` and `PWD_MAX_LENGTH`
//! environment variables may tighten, never widen, the default `16..=512`
//! range.
//!
//! ```
//! use mkpass::{Generate, Password};
//!
//! let password = Password::from_env().generate()?;
//! assert!(!password.is_empty());
//! # Ok::<(), mkpass::Error>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod bounds;
mod charset;
mod error;
mod generate;

pub use bounds::{
    Bounds, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_LENGTH_ENV, MIN_LENGTH_ENV,
};
pub use charset::{Classes, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use error::Error;
pub use generate::{Generate, Password, from_pool, generate};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}
