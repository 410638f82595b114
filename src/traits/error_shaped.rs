use crate::types::{ErrorMarker, Failure, Rail};

/// Classifies a value as error-shaped or plain.
///
/// The classification is total: every implementor answers for every value,
/// and the combinators only ever short-circuit on values for which
/// [`is_error`](ErrorShaped::is_error) returns `true`.
///
/// | Type | Error-shaped when |
/// |------|-------------------|
/// | [`ErrorMarker`] | always |
/// | `(ErrorMarker, D)` | always |
/// | [`Failure<D>`] | always |
/// | `Result<T, E>` | `Err(_)` |
/// | [`Rail<T, E>`] | it holds an error |
/// | scalars, `&str`, `String`, `()` | never |
/// | `(A, B)` with `A: PlainValue` | never |
///
/// Other types can be declared plain with [`impl_plain_value!`](crate::impl_plain_value).
///
/// # Examples
///
/// ```
/// use chain_rail::{ErrorShaped, Failure, ERROR};
///
/// assert!(ERROR.is_error());
/// assert!((ERROR, "timeout").is_error());
/// assert!(Err::<u8, Failure>(Failure::Generic).is_error());
/// assert!(!Ok::<_, Failure>((1, 2)).is_error());
/// assert!(!42_i32.is_error());
/// ```
pub trait ErrorShaped {
    /// Returns `true` if this value must short-circuit a chain.
    fn is_error(&self) -> bool;
}

/// Marker for types whose values are never error-shaped.
///
/// A pair is error-shaped only when its first element is [`ErrorMarker`], which
/// never implements this trait; pairs led by a plain value are plain.
/// Implemented through [`impl_plain_value!`](crate::impl_plain_value).
pub trait PlainValue {}

impl<V> PlainValue for &V where V: PlainValue + ?Sized {}

/// Free-function form of [`ErrorShaped::is_error`].
///
/// ```
/// use chain_rail::{is_error, ERROR};
///
/// assert!(is_error(&ERROR));
/// assert!(!is_error("ok"));
/// ```
#[inline]
pub fn is_error<V>(value: &V) -> bool
where
    V: ErrorShaped + ?Sized,
{
    value.is_error()
}

impl ErrorShaped for ErrorMarker {
    #[inline]
    fn is_error(&self) -> bool {
        true
    }
}

impl<D> ErrorShaped for (ErrorMarker, D) {
    #[inline]
    fn is_error(&self) -> bool {
        true
    }
}

impl<A, B> ErrorShaped for (A, B)
where
    A: PlainValue,
{
    #[inline]
    fn is_error(&self) -> bool {
        false
    }
}

impl<D> ErrorShaped for Failure<D> {
    #[inline]
    fn is_error(&self) -> bool {
        true
    }
}

impl<T, E> ErrorShaped for Result<T, E> {
    #[inline]
    fn is_error(&self) -> bool {
        self.is_err()
    }
}

impl<T, E> ErrorShaped for Rail<T, E> {
    #[inline]
    fn is_error(&self) -> bool {
        Rail::is_error(self)
    }
}

impl<V> ErrorShaped for &V
where
    V: ErrorShaped + ?Sized,
{
    #[inline]
    fn is_error(&self) -> bool {
        (**self).is_error()
    }
}

crate::impl_plain_value!(
    (), bool, char, str, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

#[cfg(feature = "std")]
crate::impl_plain_value!(std::string::String);
#[cfg(not(feature = "std"))]
crate::impl_plain_value!(alloc::string::String);
