//! Macros for writing short-circuiting chains.
//!
//! - [`macro@crate::chain`] - Rewrites `head ~> step ~>> step` into nested
//!   [`bind`](crate::combinators::bind) / [`then`](crate::combinators::then)
//!   calls at compile time.
//! - [`macro@crate::impl_plain_value`] - Declares types whose values are never
//!   error-shaped.
//!
//! # Examples
//!
//! ```
//! use chain_rail::{chain, Failure};
//!
//! fn add(value: i32, k: i32) -> Result<i32, Failure> {
//!     Ok(value + k)
//! }
//!
//! fn observe(value: &i32) -> i32 {
//!     value * 2
//! }
//!
//! assert_eq!(chain!(Ok(20) ~> add(1) ~>> observe ~> add(1)), Ok(22));
//! ```

/// Rewrites a chain of steps into nested short-circuiting combinator calls.
///
/// The input is an optional run of statements, each ending in `;`, followed by
/// one chain expression. The statements are emitted unchanged. The chain
/// expression starts with a head that evaluates to a `Result` and continues
/// with steps joined by two connectors:
///
/// | Connector | Expands to | Step receives |
/// |-----------|------------|---------------|
/// | `~>` | [`combinators::bind`](crate::combinators::bind) | the plain value, returns `Result<U, E>` |
/// | `~>>` | [`combinators::then`](crate::combinators::then) | `&T`, return value discarded |
///
/// A `~>>` step is handed the value by reference, so it must accept `&T`:
/// `fn log(value: &i32)` fits there, `fn log(value: i32)` does not compile.
///
/// Connectors associate to the left, so `head ~> f ~>> g ~> h` expands to
/// `bind(then(bind(head, |v| f(v)), |v| g(v)), |v| h(v))`. Nothing is
/// evaluated during the rewrite; the expansion runs each step at most once,
/// left to right, and stops at the first error.
///
/// A parenthesised head followed by a connector is rewritten as a chain of its
/// own, so `(head ~> f) ~> g` is the same as `head ~> f ~> g`.
///
/// # Step Shapes
///
/// The threaded value is always inserted as the first argument:
///
/// | Step | Call |
/// |------|------|
/// | `f` or `f()` | `f(v)` |
/// | `f(a, b)` | `f(v, a, b)` |
/// | `module::f(a)` | `module::f(v, a)` |
/// | `receiver.method(a)` | `receiver.method(v, a)` |
/// | `(callable)` | `(callable)(v)` |
/// | `(callable)(a)` | `(callable)(v, a)` |
///
/// `v` is a macro-hygienic name. A local variable spelled the same way in the
/// surrounding code is a different binding and can be passed as an argument.
///
/// Any other step shape is rejected at compile time. Turbofish calls and
/// qualified paths such as `<T as Trait>::f` are written as callables:
/// `(parse::<u16>)` or `(<T as Trait>::f)(a)`.
///
/// A chain without connectors expands to its input unchanged.
///
/// # Examples
///
/// ```
/// use chain_rail::{chain, Failure};
///
/// mod pricing {
///     use chain_rail::Failure;
///
///     pub fn discount(total: u32, percent: u32) -> Result<u32, Failure<&'static str>> {
///         if percent > 100 {
///             return Err(Failure::Detailed("discount above 100%"));
///         }
///         Ok(total - total * percent / 100)
///     }
/// }
///
/// struct Audit {
///     entries: std::cell::RefCell<Vec<String>>,
/// }
///
/// impl Audit {
///     fn record(&self, total: &u32, label: &str) {
///         self.entries.borrow_mut().push(format!("{label}={total}"));
///     }
/// }
///
/// fn checkout(total: u32) -> Result<u32, Failure<&'static str>> {
///     if total == 0 { Err(Failure::Generic) } else { Ok(total) }
/// }
///
/// let audit = Audit { entries: Default::default() };
///
/// let total = chain! {
///     let shipping = 5;
///     let add_shipping = |total: u32| Ok::<_, Failure<&'static str>>(total + shipping);
///     checkout(200)
///         ~> pricing::discount(10)
///         ~>> audit.record("discounted")
///         ~> (add_shipping)
/// };
///
/// assert_eq!(total, Ok(185));
/// assert_eq!(audit.entries.borrow().as_slice(), ["discounted=180"]);
///
/// let rejected = chain!(checkout(0) ~> pricing::discount(10) ~>> audit.record("never"));
/// assert_eq!(rejected, Err(Failure::Generic));
/// assert_eq!(audit.entries.borrow().len(), 1);
/// ```
///
/// Steps that are not calls fail to compile:
///
/// ```rust,compile_fail
/// use chain_rail::{chain, Failure};
///
/// let value = chain!(Ok::<i32, Failure>(1) ~> 42);
/// ```
///
/// ```rust,compile_fail
/// use chain_rail::{chain, Failure};
///
/// fn add(value: i32, k: i32) -> Result<i32, Failure> { Ok(value + k) }
///
/// let value = chain!(Ok(1) ~> add(1) + 2);
/// ```
///
/// ```rust,compile_fail
/// use chain_rail::{chain, Failure};
///
/// fn add(value: i32, k: i32) -> Result<i32, Failure> { Ok(value + k) }
///
/// let value = chain!(Ok(1) ~> add(1) ~>);
/// ```
///
/// # Recursion Limit
///
/// The macro consumes one token tree per expansion step. Very long blocks may
/// need a higher `#![recursion_limit]` in the calling crate.
#[macro_export]
macro_rules! chain {
    () => {
        compile_error!("chain!: expected a chain expression such as `Ok(value) ~> step`")
    };
    ($($tokens:tt)+) => {
        $crate::__chain_block!([] [] $($tokens)+)
    };
}

/// Splits the statements of a `chain!` block from its final chain expression.
#[macro_export]
#[doc(hidden)]
macro_rules! __chain_block {
    ([$($stmt:tt)*] [$($current:tt)*] ; $($rest:tt)*) => {
        $crate::__chain_block!([$($stmt)* $($current)* ;] [] $($rest)*)
    };
    ([$($stmt:tt)*] [$($current:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__chain_block!([$($stmt)*] [$($current)* $next] $($rest)*)
    };
    ([$($stmt:tt)*] []) => {
        compile_error!("chain!: the block must end with a chain expression, not a statement")
    };
    ([$($stmt:tt)*] [$($current:tt)+]) => {{
        $($stmt)*
        $crate::__chain_head!([] $($current)+)
    }};
}

/// Collects the head of a chain up to the first connector.
#[macro_export]
#[doc(hidden)]
macro_rules! __chain_head {
    ([] ~>> $($rest:tt)*) => {
        compile_error!("chain!: missing head value before `~>>`")
    };
    ([] ~> $($rest:tt)*) => {
        compile_error!("chain!: missing head value before `~>`")
    };
    // A parenthesised head is a chain of its own.
    ([( $($inner:tt)+ )] ~>> $($rest:tt)*) => {
        $crate::__chain_step!(then [$crate::chain!($($inner)+)] [] $($rest)*)
    };
    ([( $($inner:tt)+ )] ~> $($rest:tt)*) => {
        $crate::__chain_step!(bind [$crate::chain!($($inner)+)] [] $($rest)*)
    };
    ([$($head:tt)+] ~>> $($rest:tt)*) => {
        $crate::__chain_step!(then [$($head)+] [] $($rest)*)
    };
    ([$($head:tt)+] ~> $($rest:tt)*) => {
        $crate::__chain_step!(bind [$($head)+] [] $($rest)*)
    };
    ([$($head:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__chain_head!([$($head)* $next] $($rest)*)
    };
    ([$($head:tt)*]) => {
        $($head)*
    };
}

/// Collects one step up to the next connector and folds it into the
/// accumulated expression.
#[macro_export]
#[doc(hidden)]
macro_rules! __chain_step {
    ($kind:ident [$($acc:tt)*] [$($step:tt)*] ~>> $($rest:tt)*) => {
        $crate::__chain_step!(
            then [$crate::__chain_wrap!($kind [$($acc)*] $($step)*)] [] $($rest)*
        )
    };
    ($kind:ident [$($acc:tt)*] [$($step:tt)*] ~> $($rest:tt)*) => {
        $crate::__chain_step!(
            bind [$crate::__chain_wrap!($kind [$($acc)*] $($step)*)] [] $($rest)*
        )
    };
    ($kind:ident [$($acc:tt)*] [$($step:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__chain_step!($kind [$($acc)*] [$($step)* $next] $($rest)*)
    };
    ($kind:ident [$($acc:tt)*] [$($step:tt)*]) => {
        $crate::__chain_wrap!($kind [$($acc)*] $($step)*)
    };
}

/// Applies a combinator to the accumulated expression and a closure that
/// threads the value into the step.
#[macro_export]
#[doc(hidden)]
macro_rules! __chain_wrap {
    (bind [$($acc:tt)*] $($step:tt)*) => {
        $crate::combinators::bind(($($acc)*), |__chain_value| {
            $crate::__chain_call!(__chain_value; $($step)*)
        })
    };
    (then [$($acc:tt)*] $($step:tt)*) => {
        $crate::combinators::then(($($acc)*), |__chain_value| {
            $crate::__chain_call!(__chain_value; $($step)*)
        })
    };
}

/// Rebuilds a step's call with the threaded value as its first argument.
#[macro_export]
#[doc(hidden)]
macro_rules! __chain_call {
    ($value:ident;) => {
        compile_error!("chain!: missing step after connector")
    };

    // Callable values: `(callable)` and `(callable)(args..)`
    ($value:ident; ($($callee:tt)+)) => {
        ($($callee)+)($value)
    };
    ($value:ident; ($($callee:tt)+) ($($arg:tt)*)) => {
        ($($callee)+)($value, $($arg)*)
    };

    // Method calls: `receiver.method(args..)`
    ($value:ident; $receiver:ident $(. $member:ident)+ ($($arg:tt)*)) => {
        $receiver $(. $member)+ ($value, $($arg)*)
    };

    // Paths with arguments: `f(args..)`, `module::f(args..)`
    ($value:ident; $head:ident $(:: $segment:ident)* ($($arg:tt)*)) => {
        $head $(:: $segment)* ($value, $($arg)*)
    };
    ($value:ident; :: $head:ident $(:: $segment:ident)* ($($arg:tt)*)) => {
        :: $head $(:: $segment)* ($value, $($arg)*)
    };

    // Bare paths: `f`, `module::f`
    ($value:ident; $head:ident $(:: $segment:ident)*) => {
        $head $(:: $segment)* ($value)
    };
    ($value:ident; :: $head:ident $(:: $segment:ident)*) => {
        :: $head $(:: $segment)* ($value)
    };

    ($value:ident; $($other:tt)+) => {
        compile_error!(concat!(
            "chain!: unrecognized step `",
            stringify!($($other)+),
            "`; expected `f`, `f(args..)`, `path::f(args..)`, `receiver.method(args..)` or `(callable)`"
        ))
    };
}

/// Declares types whose values are never error-shaped.
///
/// This implements [`PlainValue`](crate::traits::PlainValue) and
/// [`ErrorShaped`](crate::traits::ErrorShaped) with `is_error` always
/// returning `false`, so pairs led by the type are plain as well.
///
/// # Examples
///
/// ```
/// use chain_rail::{impl_plain_value, is_error};
///
/// struct Invoice {
///     total: u32,
/// }
///
/// impl_plain_value!(Invoice);
///
/// assert!(!is_error(&Invoice { total: 10 }));
/// assert!(!is_error(&(Invoice { total: 10 }, "paid")));
/// ```
#[macro_export]
macro_rules! impl_plain_value {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::PlainValue for $type {}

            impl $crate::traits::ErrorShaped for $type {
                #[inline]
                fn is_error(&self) -> bool {
                    false
                }
            }
        )+
    };
}
