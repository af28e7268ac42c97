//! Length bounds and their environment overrides.

use std::env;

use crate::Result;
use crate::error::Error;

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 16;
/// Default maximum password length.
pub const DEFAULT_MAX_LENGTH: usize = 512;

/// Environment variable that may raise the minimum length.
pub const MIN_LENGTH_ENV: &str = "PWD_MIN_LENGTH";
/// Environment variable that may lower the maximum length.
pub const MAX_LENGTH_ENV: &str = "PWD_MAX_LENGTH";

/// Permitted password length range.
///
/// Environment overrides only tighten the default `16..=512` band:
/// [`MIN_LENGTH_ENV`] takes effect only when it parses to an integer
/// strictly greater than [`DEFAULT_MIN_LENGTH`], and [`MAX_LENGTH_ENV`]
/// only when strictly less than [`DEFAULT_MAX_LENGTH`]. Anything else is
/// ignored. Overrides that cross (`min > max`) leave a range no length
/// satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest permitted length; shorter requests are raised to it.
    pub min: usize,
    /// Largest permitted length.
    pub max: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Bounds {
    /// Resolve bounds from the process environment.
    ///
    /// Reads [`MIN_LENGTH_ENV`] and [`MAX_LENGTH_ENV`] once; the returned
    /// value is then passed around explicitly instead of re-reading global
    /// state. Ignored overrides are reported through `tracing`.
    pub fn from_env() -> Self {
        Self {
            min: resolve_min(),
            max: resolve_max(),
        }
    }

    /// Whether `length` falls inside the permitted range.
    pub const fn contains(&self, length: usize) -> bool {
        length >= self.min && length <= self.max
    }

    /// Range validation as a typed error.
    pub fn check(&self, length: usize) -> Result<()> {
        if self.contains(length) {
            Ok(())
        } else {
            Err(Error::LengthOutOfRange {
                length,
                min: self.min,
                max: self.max,
            })
        }
    }
}

fn resolve_min() -> usize {
    match override_value(MIN_LENGTH_ENV) {
        Some(value) if value > DEFAULT_MIN_LENGTH => value,
        Some(value) => {
            tracing::warn!(
                value,
                default = DEFAULT_MIN_LENGTH,
                "{MIN_LENGTH_ENV} does not raise the default minimum, ignoring"
            );
            DEFAULT_MIN_LENGTH
        }
        None => DEFAULT_MIN_LENGTH,
    }
}

fn resolve_max() -> usize {
    match override_value(MAX_LENGTH_ENV) {
        Some(value) if value < DEFAULT_MAX_LENGTH => value,
        Some(value) => {
            tracing::warn!(
                value,
                default = DEFAULT_MAX_LENGTH,
                "{MAX_LENGTH_ENV} does not lower the default maximum, ignoring"
            );
            DEFAULT_MAX_LENGTH
        }
        None => DEFAULT_MAX_LENGTH,
    }
}

/// Parse an override variable; `None` when unset or not an integer.
fn override_value(var: &str) -> Option<usize> {
    let raw = env::var(var).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var, raw = %raw, "ignoring non-numeric length override");
            None
        }
    }
}
