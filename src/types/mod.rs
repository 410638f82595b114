//! Value types flowing through a chain.
//!
//! - [`Failure`] and [`ErrorMarker`] encode the error-sentinel protocol.
//! - [`Rail`] composes steps explicitly, one method call per step.
//!
//! # Examples
//!
//! ```
//! use chain_rail::{Failure, Rail, ERROR};
//!
//! let rail = Rail::<u8, Failure<&str>>::ok(3)
//!     .bind(|n| if n > 2 { Err((ERROR, "too large").into()) } else { Ok(n) });
//!
//! assert_eq!(rail.finish(), Err(Failure::Detailed("too large")));
//! ```

pub mod failure;
pub mod rail;

pub use failure::*;
pub use rail::*;

/// Result alias whose failure channel follows the error-sentinel protocol.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `D` - The detail carried by [`Failure::Detailed`]
pub type FailureResult<T, D = ()> = Result<T, Failure<D>>;
