//! Password generation.

use rand::{CryptoRng, Rng};

use crate::Result;
use crate::bounds::{Bounds, DEFAULT_MIN_LENGTH};
use crate::charset::Classes;
use crate::csprng;
use crate::error::Error;

/// Capability to produce a random string from the implementor's own
/// parameters.
///
/// [`Password`] is the one implementor here; shared helpers such as pool
/// construction and range validation live on [`Classes`] and [`Bounds`]
/// so further generators can compose them the same way.
pub trait Generate {
    /// Produce one freshly generated random string.
    fn generate(&self) -> Result<String>;
}

/// A password generation request.
///
/// Requests shorter than `bounds.min` are silently raised to it; lengths
/// above `bounds.max` are rejected. Characters are drawn uniformly, with
/// replacement, from the pool the enabled [`Classes`] assemble, using the
/// operating system's CSPRNG.
///
/// ```
/// use mkpass::{Classes, Generate, Password};
///
/// let request = Password {
///     length: 24,
///     classes: Classes { symbols: false, ..Classes::all() },
///     ..Password::default()
/// };
/// let password = request.generate()?;
/// assert_eq!(password.chars().count(), 24);
/// assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
/// # Ok::<(), mkpass::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Password {
    /// Requested length.
    pub length: usize,
    /// Character classes to draw from.
    pub classes: Classes,
    /// Permitted length range.
    pub bounds: Bounds,
}

impl Default for Password {
    /// Library defaults only; the environment is not consulted.
    fn default() -> Self {
        Self {
            length: DEFAULT_MIN_LENGTH,
            classes: Classes::all(),
            bounds: Bounds::default(),
        }
    }
}

impl Password {
    /// Request honoring the `PWD_MIN_LENGTH` / `PWD_MAX_LENGTH`
    /// environment overrides, starting at the effective minimum length
    /// with every class enabled.
    pub fn from_env() -> Self {
        let bounds = Bounds::from_env();
        Self {
            length: bounds.min,
            classes: Classes::all(),
            bounds,
        }
    }
}

impl Generate for Password {
    fn generate(&self) -> Result<String> {
        let mut length = self.length;
        if length < self.bounds.min {
            tracing::debug!(
                requested = length,
                minimum = self.bounds.min,
                "raising password length to the permitted minimum"
            );
            length = self.bounds.min;
        }

        self.bounds.check(length)?;
        if !self.classes.any() {
            return Err(Error::NoClasses);
        }

        from_pool(&mut csprng(), &self.classes.pool(), length)
    }
}

/// Draw `length` characters uniformly at random from `pool`.
///
/// The RNG must be cryptographically secure; the `CryptoRng` bound keeps
/// statistical generators out. Pools of fewer than two candidates are
/// rejected, since they cannot produce anything but a constant string.
///
/// ```
/// use mkpass::from_pool;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let pool: Vec<char> = "abc".chars().collect();
/// let mut rng = StdRng::seed_from_u64(7);
/// let drawn = from_pool(&mut rng, &pool, 8)?;
/// assert!(drawn.chars().all(|c| "abc".contains(c)));
/// # Ok::<(), mkpass::Error>(())
/// ```
pub fn from_pool<R>(rng: &mut R, pool: &[char], length: usize) -> Result<String>
where
    R: Rng + CryptoRng,
{
    if pool.len() < 2 {
        return Err(Error::PoolTooSmall { size: pool.len() });
    }

    Ok((0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

/// Generate a password with every class enabled, the effective minimum
/// length, and any environment overrides applied.
///
/// The environment is re-read on each call, so override changes between
/// calls take effect.
pub fn generate() -> Result<String> {
    Password::from_env().generate()
}
