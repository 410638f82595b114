//! Core traits for short-circuiting composition.
//!
//! - [`ErrorShaped`]: Total classification of values as error-shaped or plain
//! - [`PlainValue`]: Marker for types that are never error-shaped, pairs led by them included
//! - [`RailExt`]: `bind` / `then` / `into_rail` in method position on `Result`
//!
//! # Examples
//!
//! ```
//! use chain_rail::traits::{ErrorShaped, RailExt};
//! use chain_rail::Failure;
//!
//! let value = Ok::<i32, Failure>(1).bind(|v| Ok(v + 1));
//! assert!(!value.is_error());
//! ```

pub mod error_shaped;
pub mod rail_ext;

pub use error_shaped::{is_error, ErrorShaped, PlainValue};
pub use rail_ext::RailExt;
