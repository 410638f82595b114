//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use chain_rail::prelude::*;
//!
//! fn double(value: i32) -> FailureResult<i32> {
//!     Ok(value * 2)
//! }
//!
//! assert_eq!(chain!(Ok(21) ~> double), Ok(42));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`], [`impl_plain_value!`]
//! - **Types**: [`Failure`], [`FailureResult`], [`Rail`], [`ERROR`]
//! - **Traits**: [`ErrorShaped`], [`PlainValue`], [`RailExt`]

// Macros
pub use crate::{chain, impl_plain_value};

// Core types
pub use crate::types::{ErrorMarker, Failure, FailureResult, Rail, ERROR};

// Traits
pub use crate::traits::{is_error, ErrorShaped, PlainValue, RailExt};
