//! Short-circuiting composition of fallible steps.
//!
//! A chain threads one value through a sequence of unary steps. A step that
//! produces an error-shaped value stops the chain, and that error is handed
//! back to the caller unchanged.
//!
//! The crate exposes the same composition three ways:
//!
//! - [`chain!`] rewrites `head ~> step ~>> step` into combinator calls at
//!   compile time.
//! - [`combinators::bind`] and [`combinators::then`] are the primitives the
//!   macro expands to.
//! - [`Rail`] is a fluent builder with one method call per step.
//!
//! # Examples
//!
//! ## Chain Macro
//!
//! ```
//! use chain_rail::{chain, Failure};
//!
//! fn partial_operation(value: i32, k: i32) -> Result<i32, Failure> {
//!     Ok(value + k)
//! }
//!
//! fn error_operation(_: i32) -> Result<i32, Failure> {
//!     Err(Failure::Generic)
//! }
//!
//! assert_eq!(chain!(Ok(40) ~> partial_operation(2)), Ok(42));
//! assert_eq!(
//!     chain!(Ok(40) ~> error_operation ~> partial_operation(3)),
//!     Err(Failure::Generic)
//! );
//! ```
//!
//! ## Error Protocol
//!
//! ```
//! use chain_rail::{is_error, Failure, ERROR};
//!
//! assert!(is_error(&ERROR));
//! assert!(is_error(&(ERROR, "reason")));
//! assert!(!is_error(&42_u8));
//!
//! let failure: Failure<&str> = (ERROR, "reason").into();
//! assert_eq!(failure.to_string(), "error: reason");
//! ```
//!
//! ## Rail Builder
//!
//! ```
//! use chain_rail::{Failure, Rail};
//!
//! let rail = Rail::<i32, Failure>::ok(20)
//!     .bind(|v| Ok(v + 1))
//!     .then(|v| v * 2)
//!     .bind(|v| Ok(v + 1));
//!
//! assert_eq!(rail.finish(), Ok(22));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Short-circuiting `bind` / `then` primitives
pub mod combinators;
/// Chain rewriting macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for error classification and composition
pub mod traits;
/// Failure protocol types and the Rail builder
pub mod types;

pub use combinators::{bind, bind_fn, then, then_fn};
pub use traits::*;
pub use types::{ErrorMarker, Failure, FailureResult, Rail, ERROR};
