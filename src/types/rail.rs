use crate::combinators;

/// A builder for composing fallible steps one call at a time.
///
/// `Rail` is the explicit form of a [`chain!`](crate::chain) expression:
/// every `~>` becomes a [`bind`](Rail::bind) call and every `~>>` a
/// [`then`](Rail::then) call. Once a step produces an error the remaining
/// steps are skipped and the error is carried through unchanged.
///
/// The rail also counts applied steps, so callers can tell which step halted
/// the chain.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use chain_rail::{Failure, Rail};
///
/// fn add(value: i32, k: i32) -> Result<i32, Failure> {
///     Ok(value + k)
/// }
///
/// let rail = Rail::ok(20)
///     .bind(|v| add(v, 1))
///     .then(|v| v * 2)
///     .bind(|v| add(v, 1));
///
/// assert_eq!(rail.steps(), 3);
/// assert_eq!(rail.finish(), Ok(22));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rail<T, E> {
    result: Result<T, E>,
    steps: usize,
    halted_at: Option<usize>,
}

impl<T, E> Rail<T, E> {
    /// Creates a rail from an existing `Result`.
    ///
    /// A rail that starts from `Err` reports [`halted_at`](Rail::halted_at) as
    /// `Some(0)`.
    #[inline]
    pub fn new(result: Result<T, E>) -> Self {
        let halted_at = if result.is_err() { Some(0) } else { None };
        Self { result, steps: 0, halted_at }
    }

    /// Creates a rail holding a plain value.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::new(Ok(value))
    }

    /// Creates a rail that is already halted on `error`.
    #[inline]
    pub fn err(error: E) -> Self {
        Self::new(Err(error))
    }

    /// Applies a transforming step.
    ///
    /// If the rail holds a value, `f` is called with it and its result becomes
    /// the new state. If the rail holds an error, `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Failure, Rail};
    ///
    /// let calls = std::cell::Cell::new(0);
    /// let rail = Rail::<i32, Failure>::err(Failure::Generic).bind(|v| {
    ///     calls.set(calls.get() + 1);
    ///     Ok(v + 1)
    /// });
    ///
    /// assert_eq!(calls.get(), 0);
    /// assert_eq!(rail.finish(), Err(Failure::Generic));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let step = self.steps + 1;
        let result = combinators::bind(self.result, f);
        let halted_at = self.halted_at.or_else(|| result.is_err().then_some(step));
        Rail { result, steps: step, halted_at }
    }

    /// Applies a side-effecting step.
    ///
    /// `f` observes the current value by reference and its return value is
    /// discarded; the rail keeps the value it held before the step.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Failure, Rail};
    ///
    /// let mut seen = Vec::new();
    /// let rail = Rail::<_, Failure>::ok(5).then(|v| seen.push(*v));
    ///
    /// assert_eq!(rail.finish(), Ok(5));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    pub fn then<R, F>(self, f: F) -> Rail<T, E>
    where
        F: FnOnce(&T) -> R,
    {
        Rail { result: combinators::then(self.result, f), steps: self.steps + 1, ..self }
    }

    /// Applies a step that cannot fail.
    ///
    /// ```
    /// use chain_rail::Rail;
    ///
    /// let rail = Rail::<i32, &str>::ok(21).map(|x| x * 2);
    /// assert_eq!(rail.finish(), Ok(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Ok(f(value)))
    }

    /// Transforms the error type using a mapping function.
    ///
    /// Step bookkeeping is preserved; this does not count as a step.
    ///
    /// ```
    /// use chain_rail::Rail;
    ///
    /// let rail = Rail::<i32, &str>::err("text error").map_err(|e| e.len());
    /// assert_eq!(rail.finish(), Err(10));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Rail<T, G>
    where
        F: FnOnce(E) -> G,
    {
        Rail { result: self.result.map_err(f), steps: self.steps, halted_at: self.halted_at }
    }

    /// Attempts to recover from an error using a fallback function.
    ///
    /// If recovery succeeds the rail continues as if no error had happened and
    /// [`halted_at`](Rail::halted_at) is cleared. If recovery fails the new
    /// error replaces the old one and the halting step is kept.
    ///
    /// ```
    /// use chain_rail::Rail;
    ///
    /// let rail = Rail::<i32, &str>::err("missing").recover(|_| Ok(0));
    /// assert_eq!(rail.halted_at(), None);
    /// assert_eq!(rail.finish(), Ok(0));
    /// ```
    #[inline]
    pub fn recover<F>(self, recovery: F) -> Rail<T, E>
    where
        F: FnOnce(E) -> Result<T, E>,
    {
        match self.result {
            Ok(value) => Rail { result: Ok(value), ..self },
            Err(error) => match recovery(error) {
                Ok(value) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        halted_at = self.halted_at,
                        steps = self.steps,
                        "rail recovered from error"
                    );
                    Rail { result: Ok(value), steps: self.steps, halted_at: None }
                },
                Err(error) => Rail { result: Err(error), ..self },
            },
        }
    }

    /// Recovers from an error using a default value.
    ///
    /// ```
    /// use chain_rail::Rail;
    ///
    /// let rail = Rail::<i32, &str>::err("error").fallback(42);
    /// assert_eq!(rail.finish(), Ok(42));
    /// ```
    #[inline]
    pub fn fallback(self, value: T) -> Rail<T, E> {
        self.recover(|_| Ok(value))
    }

    /// Returns `true` if the rail currently holds an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.result.is_err()
    }

    /// Returns the number of `bind`, `then` and `map` steps applied so far,
    /// including the ones that were skipped.
    #[inline]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the 1-based index of the step that produced the current error.
    ///
    /// `Some(0)` means the rail was created from an error. `None` means the
    /// rail holds a value.
    ///
    /// ```
    /// use chain_rail::{Failure, Rail};
    ///
    /// let rail = Rail::<i32, Failure>::ok(1)
    ///     .bind(|v| Ok(v + 1))
    ///     .bind(|_| Err::<i32, _>(Failure::Generic))
    ///     .bind(|v| Ok(v + 1));
    ///
    /// assert_eq!(rail.halted_at(), Some(2));
    /// assert_eq!(rail.steps(), 3);
    /// ```
    #[inline]
    pub const fn halted_at(&self) -> Option<usize> {
        self.halted_at
    }

    /// Returns a reference to the current state.
    #[inline]
    pub const fn as_result(&self) -> &Result<T, E> {
        &self.result
    }

    /// Completes the rail, returning the final `Result`.
    #[inline]
    pub fn finish(self) -> Result<T, E> {
        self.result
    }

    /// Alias for [`finish`](Rail::finish).
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.finish()
    }
}

impl<T, E> From<Result<T, E>> for Rail<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Rail::new(result)
    }
}

impl<T, E> From<Rail<T, E>> for Result<T, E> {
    #[inline]
    fn from(rail: Rail<T, E>) -> Self {
        rail.finish()
    }
}
