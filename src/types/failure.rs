//! The error-sentinel protocol as a tagged type.
//!
//! A value is error-shaped when it is the marker constant [`ERROR`] on its own,
//! or a pair whose first element is [`ERROR`] and whose second element carries
//! detail. Both forms convert into [`Failure`], which is the error type the
//! rest of the crate threads through `Result::Err`.
//!
//! # Examples
//!
//! ```
//! use chain_rail::{Failure, ERROR};
//!
//! let bare: Failure<&str> = ERROR.into();
//! let detailed: Failure<&str> = (ERROR, "disk full").into();
//!
//! assert!(bare.is_generic());
//! assert_eq!(detailed.detail(), Some(&"disk full"));
//! assert_eq!(detailed.to_string(), "error: disk full");
//! ```

use core::fmt::{Debug, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The marker denoting a generic error.
///
/// There is exactly one value of this type, [`ERROR`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ErrorMarker;

/// The marker constant.
pub const ERROR: ErrorMarker = ErrorMarker;

impl Display for ErrorMarker {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("error")
    }
}

/// An error-shaped value: either the bare marker or the marker with detail.
///
/// # Type Parameters
///
/// * `D` - The detail carried by [`Failure::Detailed`]. Defaults to `()` for
///   chains that only ever fail generically.
///
/// # Examples
///
/// ```
/// use chain_rail::Failure;
///
/// fn parse_port(raw: &str) -> Result<u16, Failure<&'static str>> {
///     raw.parse().map_err(|_| Failure::Detailed("not a port"))
/// }
///
/// assert_eq!(parse_port("8080"), Ok(8080));
/// assert_eq!(parse_port("http"), Err(Failure::Detailed("not a port")));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure<D = ()> {
    /// The bare marker, no detail attached.
    Generic,
    /// The marker paired with detail.
    Detailed(D),
}

impl<D> Failure<D> {
    /// Builds a detailed failure.
    #[inline]
    pub const fn detailed(detail: D) -> Self {
        Failure::Detailed(detail)
    }

    /// Returns `true` for the bare marker form.
    #[inline]
    pub const fn is_generic(&self) -> bool {
        matches!(self, Failure::Generic)
    }

    /// Returns the attached detail, if any.
    #[inline]
    pub const fn detail(&self) -> Option<&D> {
        match self {
            Failure::Generic => None,
            Failure::Detailed(detail) => Some(detail),
        }
    }

    /// Consumes the failure, returning the attached detail, if any.
    #[inline]
    pub fn into_detail(self) -> Option<D> {
        match self {
            Failure::Generic => None,
            Failure::Detailed(detail) => Some(detail),
        }
    }

    /// Transforms the detail while keeping the failure form.
    ///
    /// ```
    /// use chain_rail::Failure;
    ///
    /// let failure = Failure::Detailed(404).map_detail(|code| code + 1);
    /// assert_eq!(failure, Failure::Detailed(405));
    ///
    /// let generic = Failure::<u16>::Generic.map_detail(|code| code + 1);
    /// assert!(generic.is_generic());
    /// ```
    #[inline]
    pub fn map_detail<G, F>(self, f: F) -> Failure<G>
    where
        F: FnOnce(D) -> G,
    {
        match self {
            Failure::Generic => Failure::Generic,
            Failure::Detailed(detail) => Failure::Detailed(f(detail)),
        }
    }

    /// Splits the failure back into the marker and its optional detail.
    #[inline]
    pub fn into_parts(self) -> (ErrorMarker, Option<D>) {
        (ERROR, self.into_detail())
    }
}

impl<D> Default for Failure<D> {
    #[inline]
    fn default() -> Self {
        Failure::Generic
    }
}

impl<D> From<ErrorMarker> for Failure<D> {
    #[inline]
    fn from(_: ErrorMarker) -> Self {
        Failure::Generic
    }
}

impl<D> From<(ErrorMarker, D)> for Failure<D> {
    #[inline]
    fn from((_, detail): (ErrorMarker, D)) -> Self {
        Failure::Detailed(detail)
    }
}

impl<D: Display> Display for Failure<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Failure::Generic => Display::fmt(&ERROR, f),
            Failure::Detailed(detail) => write!(f, "{}: {detail}", ERROR),
        }
    }
}

impl<D> core::error::Error for Failure<D>
where
    D: Debug + Display,
{
}
