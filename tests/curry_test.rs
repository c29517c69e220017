//! Tests for curry: incremental application, partial reuse, arity checks

use rstest::rstest;

use lineage::domain::{curry, Application, DomainError, Nary, Variadic};

fn sum4(a: i64, b: i64, c: i64, d: i64) -> i64 {
    a + b + c + d
}

#[test]
fn given_named_function_when_applied_one_at_a_time_then_sums() {
    // Arrange
    let curried = curry(sum4).unwrap();

    // Act
    let result = curried
        .apply(1)
        .apply(2)
        .and_then(|p| p.apply(3))
        .and_then(|p| p.apply(4))
        .and_then(Application::value);

    // Assert
    assert_eq!(result, Ok(10));
}

#[test]
fn given_partial_product_when_reused_then_not_mutated() {
    let product = curry(|a: i64, b: i64, c: i64, d: i64| a * b * c * d).unwrap();
    let p = product.call([1, 2, 3]).partial().unwrap();

    assert_eq!(p.apply(0).value(), Ok(0));
    assert_eq!(p.apply(1).value(), Ok(6));
    assert_eq!(p.apply(2).value(), Ok(12));
    assert_eq!(p.remaining(), 1);
}

#[test]
fn given_excess_arguments_when_called_then_first_arity_used() {
    let add = curry(|a: i64, b: i64| a + b).unwrap();
    assert_eq!(add.call([1, 2, 3]).value(), Ok(3));
}

#[test]
fn given_variadic_function_when_wrapping_then_fails_before_any_call() {
    let result = curry(Variadic(|args: &[i64]| args.len()));
    assert_eq!(result.err(), Some(DomainError::IndeterminateArity));
}

#[rstest]
#[case(1, vec![7], 7)]
#[case(2, vec![7, 8], 15)]
#[case(5, vec![1, 1, 1, 1, 1, 99], 5)]
fn given_nary_sum_when_called_at_once_then_folds_first_arity(
    #[case] arity: usize,
    #[case] args: Vec<i64>,
    #[case] expected: i64,
) {
    let sum = curry(Nary::new(arity, |args: &[i64]| args.iter().sum::<i64>())).unwrap();
    assert_eq!(sum.call(args).value(), Ok(expected));
}

#[test]
fn given_zero_arity_nary_when_called_with_nothing_then_invokes() {
    let constant = curry(Nary::new(0, |_: &[i64]| 42)).unwrap();
    assert_eq!(constant.call(Vec::new()).value(), Ok(42));
}

#[test]
fn given_string_arguments_when_curried_then_clones_per_call() {
    let greet = curry(|greeting: String, name: String| format!("{greeting}, {name}!")).unwrap();
    let hello = greet.apply("Hello".to_string()).partial().unwrap();

    assert_eq!(hello.apply("cat".into()).value().unwrap(), "Hello, cat!");
    assert_eq!(hello.apply("dog".into()).value().unwrap(), "Hello, dog!");
}

#[test]
fn given_side_effecting_function_when_partial_then_not_invoked_until_saturated() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let add = curry(move |a: i64, b: i64| {
        counter.fetch_add(1, Ordering::SeqCst);
        a + b
    })
    .unwrap();

    let partial = add.apply(1).partial().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    partial.apply(2).value().unwrap();
    partial.apply(3).value().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
