//! Short-circuiting composition primitives.
//!
//! [`bind`] threads a value into a transforming step, [`then`] hands it to a
//! side-effecting step and keeps it. Both return an error-shaped input
//! unchanged without calling the step. [`bind_fn`] and [`then_fn`] lift a
//! step into a unary function over `Result` for callers that want to store or
//! pass the composed step around.
//!
//! These are the functions a [`chain!`](crate::chain) expression expands to.
//!
//! # Examples
//!
//! ```
//! use chain_rail::combinators::{bind, then};
//! use chain_rail::Failure;
//!
//! fn halve(value: u32) -> Result<u32, Failure<&'static str>> {
//!     if value % 2 == 0 {
//!         Ok(value / 2)
//!     } else {
//!         Err(Failure::Detailed("odd"))
//!     }
//! }
//!
//! let mut log = Vec::new();
//! let value = then(bind(Ok(8), halve), |v| log.push(*v));
//!
//! assert_eq!(value, Ok(4));
//! assert_eq!(bind(Ok(3), halve), Err(Failure::Detailed("odd")));
//! assert_eq!(log, vec![4]);
//! ```

/// Applies a transforming step unless `value` is error-shaped.
///
/// `bind(Ok(v), f) == f(v)` and `bind(Err(e), f) == Err(e)`; in the second
/// case `f` is never called.
///
/// # Arguments
///
/// * `value` - The value threaded from the previous step
/// * `f` - The step receiving the plain value
#[inline]
pub fn bind<T, U, E, F>(value: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    match value {
        Ok(value) => f(value),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "chain_rail", "bind short-circuited on error-shaped value");
            Err(error)
        },
    }
}

/// Runs a side-effecting step unless `value` is error-shaped, then returns
/// the original `value`.
///
/// `f` is called exactly once with a reference to the plain value and its
/// return value is discarded, even when that return value is itself
/// error-shaped. A panic raised by `f` is not caught.
///
/// # Arguments
///
/// * `value` - The value threaded from the previous step
/// * `f` - The step observing the plain value
#[inline]
pub fn then<T, E, R, F>(value: Result<T, E>, f: F) -> Result<T, E>
where
    F: FnOnce(&T) -> R,
{
    match value {
        Ok(value) => {
            let _ = f(&value);
            Ok(value)
        },
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "chain_rail", "then short-circuited on error-shaped value");
            Err(error)
        },
    }
}

/// Lifts a transforming step into a short-circuiting unary function.
///
/// `bind_fn(f)(value) == bind(value, f)`.
///
/// # Examples
///
/// ```
/// use chain_rail::combinators::bind_fn;
/// use chain_rail::Failure;
///
/// let increment = bind_fn(|v: i32| Ok::<_, Failure>(v + 1));
/// assert_eq!(increment(Ok(41)), Ok(42));
///
/// let increment = bind_fn(|v: i32| Ok::<_, Failure>(v + 1));
/// assert_eq!(increment(Err(Failure::Generic)), Err(Failure::Generic));
/// ```
#[inline]
pub fn bind_fn<T, U, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<U, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    move |value| bind(value, f)
}

/// Lifts a side-effecting step into a short-circuiting unary function.
///
/// `then_fn(f)(value) == then(value, f)`.
///
/// # Examples
///
/// ```
/// use chain_rail::combinators::then_fn;
/// use chain_rail::Failure;
///
/// let mut audit = Vec::new();
/// let record = then_fn(|v: &i32| audit.push(*v));
///
/// assert_eq!(record(Ok::<_, Failure>(7)), Ok(7));
/// assert_eq!(audit, vec![7]);
/// ```
#[inline]
pub fn then_fn<T, E, R, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<T, E>
where
    F: FnOnce(&T) -> R,
{
    move |value| then(value, f)
}
