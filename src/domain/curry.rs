//! Currying for fixed-arity functions over a single argument type.
//!
//! [`curry`] wraps a function whose arity is known when it is wrapped. The
//! returned [`Curried`] value accepts any number of arguments per call and
//! either hands back a new, longer partial or, once the arity is reached,
//! the function's result. A partial never changes after construction, so the
//! same partial can be applied again with different trailing arguments.
//!
//! ```
//! use lineage::domain::curry;
//!
//! let product = curry(|a: i64, b: i64, c: i64, d: i64| a * b * c * d).unwrap();
//! let partial = product.call([1, 2, 3]).partial().unwrap();
//!
//! assert_eq!(partial.apply(0).value().unwrap(), 0);
//! assert_eq!(partial.apply(1).value().unwrap(), 6);
//! assert_eq!(partial.apply(2).value().unwrap(), 12);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};

/// A function that [`curry`] can wrap.
///
/// `Marker` only exists to keep the per-arity implementations apart; callers
/// never name it.
pub trait CurryTarget<T, R, Marker>: Send + Sync + 'static {
    /// Number of arguments the function takes, `None` if not fixed.
    fn arity(&self) -> Option<usize>;

    /// Invoke with exactly `arity` arguments.
    fn invoke(&self, args: &[T]) -> R;
}

macro_rules! slot {
    ($_idx:tt) => {
        T
    };
}

macro_rules! impl_curry_target {
    ($arity:expr; $($idx:tt),+) => {
        impl<T, R, F> CurryTarget<T, R, fn($(slot!($idx)),+) -> R> for F
        where
            F: Fn($(slot!($idx)),+) -> R + Send + Sync + 'static,
            T: Clone,
        {
            fn arity(&self) -> Option<usize> {
                Some($arity)
            }

            fn invoke(&self, args: &[T]) -> R {
                (self)($(args[$idx].clone()),+)
            }
        }
    };
}

impl_curry_target!(1; 0);
impl_curry_target!(2; 0, 1);
impl_curry_target!(3; 0, 1, 2);
impl_curry_target!(4; 0, 1, 2, 3);
impl_curry_target!(5; 0, 1, 2, 3, 4);
impl_curry_target!(6; 0, 1, 2, 3, 4, 5);

/// A slice function with a declared arity.
pub struct Nary<F> {
    arity: usize,
    function: F,
}

impl<F> Nary<F> {
    pub fn new(arity: usize, function: F) -> Self {
        Self { arity, function }
    }
}

#[doc(hidden)]
pub struct NaryMarker;

impl<T, R, F> CurryTarget<T, R, NaryMarker> for Nary<F>
where
    F: Fn(&[T]) -> R + Send + Sync + 'static,
{
    fn arity(&self) -> Option<usize> {
        Some(self.arity)
    }

    fn invoke(&self, args: &[T]) -> R {
        (self.function)(args)
    }
}

/// A slice function taking any number of arguments. Cannot be curried.
pub struct Variadic<F>(pub F);

#[doc(hidden)]
pub struct VariadicMarker;

impl<T, R, F> CurryTarget<T, R, VariadicMarker> for Variadic<F>
where
    F: Fn(&[T]) -> R + Send + Sync + 'static,
{
    fn arity(&self) -> Option<usize> {
        None
    }

    fn invoke(&self, args: &[T]) -> R {
        (self.0)(args)
    }
}

/// Wrap `target` for incremental application.
///
/// Closures and functions taking 1 to 6 arguments of type `T` are accepted
/// directly. Any other fixed arity, including 0, goes through [`Nary`]:
/// `curry(Nary::new(0, |_: &[T]| ..))` runs on the first call, even an empty
/// one.
///
/// # Errors
/// [`DomainError::IndeterminateArity`] if `target` has no fixed arity. The
/// check happens here, not when the curried function is later called.
pub fn curry<T, R, M, F>(target: F) -> DomainResult<Curried<T, R>>
where
    F: CurryTarget<T, R, M>,
    T: Clone + 'static,
    R: 'static,
    M: 'static,
{
    let arity = target.arity().ok_or(DomainError::IndeterminateArity)?;
    trace!(arity, "curry");
    Ok(Curried {
        function: Arc::new(move |args: &[T]| target.invoke(args)),
        arity,
        args: Arc::from(Vec::new()),
    })
}

/// A function together with the arguments supplied to it so far.
pub struct Curried<T, R> {
    function: Arc<dyn Fn(&[T]) -> R + Send + Sync>,
    arity: usize,
    args: Arc<[T]>,
}

impl<T, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            arity: self.arity,
            args: Arc::clone(&self.args),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("arity", &self.arity)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, R> Curried<T, R> {
    /// Supply any number of further arguments.
    ///
    /// The new arguments are appended to a copy of this partial's arguments;
    /// `self` is left as it was. Once the arity is reached the function runs
    /// with the first `arity` arguments and any surplus is dropped.
    pub fn call<I>(&self, args: I) -> Application<T, R>
    where
        I: IntoIterator<Item = T>,
    {
        let mut accumulated: Vec<T> = self.args.to_vec();
        accumulated.extend(args);

        if accumulated.len() >= self.arity {
            trace!(supplied = accumulated.len(), arity = self.arity, "invoking");
            Application::Complete((self.function)(&accumulated[..self.arity]))
        } else {
            Application::Partial(Curried {
                function: Arc::clone(&self.function),
                arity: self.arity,
                args: Arc::from(accumulated),
            })
        }
    }

    /// Supply a single further argument.
    pub fn apply(&self, arg: T) -> Application<T, R> {
        self.call(std::iter::once(arg))
    }
}

impl<T, R> Curried<T, R> {
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Arguments accumulated so far, in call order.
    pub fn supplied(&self) -> &[T] {
        &self.args
    }

    pub fn remaining(&self) -> usize {
        self.arity - self.args.len()
    }
}

/// Outcome of supplying arguments to a [`Curried`] function.
pub enum Application<T, R> {
    /// Still waiting for arguments.
    Partial(Curried<T, R>),
    /// The function ran and produced this value.
    Complete(R),
}

impl<T: Clone, R> Application<T, R> {
    /// Supply further arguments to a partial.
    ///
    /// # Errors
    /// [`DomainError::Saturated`] if the function already ran.
    pub fn call<I>(self, args: I) -> DomainResult<Application<T, R>>
    where
        I: IntoIterator<Item = T>,
    {
        match self {
            Application::Partial(curried) => Ok(curried.call(args)),
            Application::Complete(_) => Err(DomainError::Saturated),
        }
    }

    pub fn apply(self, arg: T) -> DomainResult<Application<T, R>> {
        self.call(std::iter::once(arg))
    }
}

impl<T, R> Application<T, R> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Application::Complete(_))
    }

    /// The function's result.
    ///
    /// # Errors
    /// [`DomainError::Unsaturated`] if arguments are still missing.
    pub fn value(self) -> DomainResult<R> {
        match self {
            Application::Complete(value) => Ok(value),
            Application::Partial(curried) => Err(DomainError::Unsaturated {
                supplied: curried.supplied().len(),
                arity: curried.arity(),
            }),
        }
    }

    /// The partial awaiting more arguments.
    ///
    /// # Errors
    /// [`DomainError::Saturated`] if the function already ran.
    pub fn partial(self) -> DomainResult<Curried<T, R>> {
        match self {
            Application::Partial(curried) => Ok(curried),
            Application::Complete(_) => Err(DomainError::Saturated),
        }
    }
}

impl<T: fmt::Debug, R: fmt::Debug> fmt::Debug for Application<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Application::Partial(curried) => f.debug_tuple("Partial").field(curried).finish(),
            Application::Complete(value) => f.debug_tuple("Complete").field(value).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_four_arity_sum_when_applied_one_by_one_then_adds() {
        let sum = curry(|a: i64, b: i64, c: i64, d: i64| a + b + c + d).unwrap();

        let result = sum
            .apply(1)
            .apply(2)
            .and_then(|p| p.apply(3))
            .and_then(|p| p.apply(4))
            .and_then(Application::value);

        assert_eq!(result, Ok(10));
    }

    #[test]
    fn given_partial_when_reused_then_each_call_sees_its_own_prefix() {
        let product = curry(|a: i64, b: i64, c: i64, d: i64| a * b * c * d).unwrap();
        let partial = product.call([1, 2, 3]).partial().unwrap();

        assert_eq!(partial.apply(0).value(), Ok(0));
        assert_eq!(partial.apply(1).value(), Ok(6));
        assert_eq!(partial.apply(2).value(), Ok(12));
        assert_eq!(partial.supplied(), &[1, 2, 3]);
    }

    #[test]
    fn given_two_partials_from_one_base_when_applied_out_of_order_then_independent() {
        let join = curry(|a: String, b: String, c: String| format!("{a}{b}{c}")).unwrap();
        let base = join.apply("x".to_string()).partial().unwrap();
        let left = base.apply("L".to_string()).partial().unwrap();
        let right = base.apply("R".to_string()).partial().unwrap();

        assert_eq!(right.apply("1".into()).value().unwrap(), "xR1");
        assert_eq!(left.apply("2".into()).value().unwrap(), "xL2");
        assert_eq!(base.supplied(), &["x".to_string()]);
    }

    #[test]
    fn given_excess_arguments_when_called_then_ignores_surplus() {
        let add = curry(|a: i64, b: i64| a + b).unwrap();
        assert_eq!(add.call([1, 2, 3]).value(), Ok(3));
    }

    #[test]
    fn given_variadic_function_when_wrapping_then_indeterminate_arity() {
        let result = curry(Variadic(|args: &[i64]| args.iter().sum::<i64>()));
        assert!(matches!(result, Err(DomainError::IndeterminateArity)));
    }

    #[test]
    fn given_nary_function_when_curried_then_uses_declared_arity() {
        let sum = curry(Nary::new(3, |args: &[i64]| args.iter().sum::<i64>())).unwrap();
        let partial = sum.call([5, 6]).partial().unwrap();

        assert_eq!(partial.remaining(), 1);
        assert_eq!(partial.call([7, 100]).value(), Ok(18));
    }

    #[test]
    fn given_empty_call_when_partial_then_returns_equivalent_partial() {
        let add = curry(|a: i64, b: i64| a + b).unwrap();
        let partial = add.call(Vec::new()).partial().unwrap();

        assert_eq!(partial.supplied(), &[] as &[i64]);
        assert_eq!(partial.remaining(), 2);
    }

    #[test]
    fn given_unary_function_when_applied_then_completes_immediately() {
        let double = curry(|a: i64| a * 2).unwrap();
        assert_eq!(double.apply(21).value(), Ok(42));
    }

    #[test]
    fn given_complete_application_when_applying_again_then_saturated() {
        let add = curry(|a: i64, b: i64| a + b).unwrap();
        let done = add.call([1, 2]);

        assert!(done.is_complete());
        assert!(matches!(done.apply(3), Err(DomainError::Saturated)));
    }

    #[test]
    fn given_partial_application_when_asking_value_then_unsaturated() {
        let add = curry(|a: i64, b: i64, c: i64| a + b + c).unwrap();
        assert_eq!(
            add.apply(1).value(),
            Err(DomainError::Unsaturated {
                supplied: 1,
                arity: 3
            })
        );
    }

    #[rstest]
    #[case(vec![vec![1, 2, 3, 4, 5, 6]])]
    #[case(vec![vec![1], vec![2, 3], vec![], vec![4, 5, 6]])]
    #[case(vec![vec![1, 2, 3], vec![4, 5, 6, 7]])]
    fn given_six_arity_when_grouped_differently_then_same_result(#[case] groups: Vec<Vec<i64>>) {
        let sum = curry(|a: i64, b: i64, c: i64, d: i64, e: i64, f: i64| a + b + c + d + e + f)
            .unwrap();

        let mut application = Application::Partial(sum);
        for group in groups {
            application = application.call(group).unwrap();
        }

        assert_eq!(application.value(), Ok(21));
    }

    #[test]
    fn given_curried_when_shared_across_threads_then_usable() {
        let add = curry(|a: i64, b: i64| a + b).unwrap();
        let partial = add.apply(10).partial().unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let partial = partial.clone();
                std::thread::spawn(move || partial.apply(i).value())
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results, vec![Ok(10), Ok(11), Ok(12), Ok(13)]);
    }
}
