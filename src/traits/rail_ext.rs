//! Extension trait for chaining steps directly on `Result`.
//!
//! # Examples
//!
//! ```
//! use chain_rail::traits::RailExt;
//! use chain_rail::Failure;
//!
//! fn parse(raw: &str) -> Result<i32, Failure<&'static str>> {
//!     raw.trim().parse().map_err(|_| Failure::Detailed("not a number"))
//! }
//!
//! let mut seen = Vec::new();
//! let value = parse(" 41 ")
//!     .then(|v| seen.push(*v))
//!     .bind(|v| Ok(v + 1));
//!
//! assert_eq!(value, Ok(42));
//! assert_eq!(seen, vec![41]);
//! ```

use crate::combinators;
use crate::types::Rail;

/// Extension trait adding the chain combinators to `Result`.
///
/// `result.bind(f)` is [`combinators::bind`] and `result.then(f)` is
/// [`combinators::then`], written in method position.
pub trait RailExt<T, E>: Sized {
    /// Applies a transforming step unless `self` is an error.
    ///
    /// ```
    /// use chain_rail::traits::RailExt;
    ///
    /// let value: Result<i32, &str> = Ok(40);
    /// assert_eq!(value.bind(|v| Ok(v + 2)), Ok(42));
    ///
    /// let value: Result<i32, &str> = Err("boom");
    /// assert_eq!(value.bind(|v| Ok(v + 2)), Err("boom"));
    /// ```
    fn bind<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// Runs a side-effecting step unless `self` is an error, keeping the
    /// original value.
    ///
    /// ```
    /// use chain_rail::traits::RailExt;
    ///
    /// let value: Result<i32, &str> = Ok(21);
    /// assert_eq!(value.then(|v| v * 2), Ok(21));
    /// ```
    fn then<R, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(&T) -> R;

    /// Starts a [`Rail`] from this result.
    fn into_rail(self) -> Rail<T, E>;
}

impl<T, E> RailExt<T, E> for Result<T, E> {
    #[inline]
    fn bind<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        combinators::bind(self, f)
    }

    #[inline]
    fn then<R, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(&T) -> R,
    {
        combinators::then(self, f)
    }

    #[inline]
    fn into_rail(self) -> Rail<T, E> {
        Rail::new(self)
    }
}
