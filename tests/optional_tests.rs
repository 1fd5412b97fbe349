//! Unit tests for the `Optional<T>` type.
//!
//! Every combinator is exercised once on a `Some` and once on a `None`,
//! including the cases where a supplied function must not be called.

use optio::optional::{ConstructionError, Match, Optional};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

/// Counts how often a closure built from it is invoked.
#[derive(Default)]
struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn count(&self) -> usize {
        self.calls.get()
    }
}

#[derive(Debug, PartialEq)]
struct Foo {
    foo: &'static str,
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn of_present_value_is_some() {
    let maybe_one = Optional::<i32>::of(1);
    assert!(maybe_one.is_some());
    assert_eq!(maybe_one.unwrap_or(2), 1);
}

#[rstest]
fn of_absent_value_is_none() {
    let maybe_none = Optional::<i32>::of(None);
    assert!(maybe_none.is_none());
    assert_eq!(maybe_none.unwrap_or(2), 2);
}

#[rstest]
fn some_of_absent_value_fails() {
    assert_eq!(
        Optional::<i32>::some(None).err(),
        Some(ConstructionError::AbsentSome)
    );
    assert_eq!(
        Optional::<String>::some(Option::<String>::None).err(),
        Some(ConstructionError::AbsentSome)
    );
}

#[rstest]
fn try_none_of_present_value_fails() {
    assert_eq!(
        Optional::<i32>::try_none(1).err(),
        Some(ConstructionError::PresentNone)
    );
}

#[rstest]
fn try_none_of_absent_value_is_none() {
    let none = Optional::<i32>::try_none(None).unwrap();
    assert!(none.is_none());
}

#[rstest]
fn some_and_none_share_one_type() {
    fn process(value: Optional<i32>) -> Optional<i32> {
        value
    }

    let one = Optional::<i32>::some(1).unwrap();
    let nope = Optional::none();

    assert!(process(one).is_some());
    assert!(process(nope).is_none());
}

#[rstest]
fn absent_values_of_every_origin_are_interchangeable() {
    fn process(value: Optional<String>) -> Optional<String> {
        value
    }

    let from_of = Optional::of(None);
    let from_try_none = Optional::try_none(None).unwrap();
    let from_none = Optional::none();

    assert!(process(from_of).is_none());
    assert!(process(from_try_none).is_none());
    assert!(process(from_none).is_none());
}

// =============================================================================
// Some
// =============================================================================

#[rstest]
fn some_is_some() {
    let one = Optional::<i32>::some(1).unwrap();
    assert!(one.is_some());
    assert!(!one.is_none());
}

#[rstest]
fn some_to_string() {
    assert_eq!(Optional::<i32>::some(1).unwrap().to_string(), "Some( 1 )");
}

#[rstest]
fn some_expect_returns_value() {
    assert_eq!(Optional::<i32>::of(1).expect("it failed"), 1);
}

#[rstest]
fn some_unwrap_returns_value() {
    assert_eq!(Optional::<i32>::of(1).unwrap(), 1);
}

#[rstest]
fn some_unwrap_or_ignores_fallback() {
    assert_eq!(Optional::<i32>::of(1).unwrap_or(10), 1);
}

#[rstest]
fn some_unwrap_or_else_skips_producer() {
    let counter = CallCounter::default();
    let value = Optional::<i32>::of(1).unwrap_or_else(|| {
        counter.hit();
        2
    });
    assert_eq!(value, 1);
    assert_eq!(counter.count(), 0);
}

#[rstest]
fn some_map_applies_function() {
    let two = Optional::<i32>::of(1).map(|_| 2);
    assert!(two.is_some());
    assert_eq!(two.unwrap(), 2);
}

#[rstest]
fn some_map_keeps_absent_result_wrapped() {
    let wrapped = Optional::<i32>::of(1).map(|_| Option::<i32>::None);
    assert!(wrapped.is_some());
    assert_eq!(wrapped.unwrap(), None);
}

#[rstest]
fn some_filter_map_collapses_absent_result() {
    let one = Optional::<i32>::of(1);

    let three = one.filter_map(|_| Option::<i32>::None);
    assert!(three.is_none());

    let four = one.filter_map(|value| Some(value + 3));
    assert_eq!(four.unwrap(), 4);
}

#[rstest]
fn some_map_or_returns_mapped_value() {
    assert_eq!(Optional::<i32>::of(1).map_or(3, |value| value * 2), 2);
}

#[rstest]
fn some_map_or_else_calls_only_mapper() {
    let counter = CallCounter::default();
    let result = Optional::<i32>::of(1).map_or_else(
        || {
            counter.hit();
            3
        },
        |value| value * 2,
    );
    assert_eq!(result, 2);
    assert_eq!(counter.count(), 0);
}

#[rstest]
fn some_and_returns_other() {
    let one = Optional::<i32>::of(1);

    let maybe_two = one.and(Optional::<i32>::of(2));
    assert_eq!(maybe_two.unwrap(), 2);

    let maybe_three = one.and(Optional::<i32>::none());
    assert!(maybe_three.is_none());
}

#[rstest]
fn some_flat_map_returns_function_result() {
    let one = Optional::<i32>::of(1);

    let maybe_two = one.flat_map(|value| Optional::<i32>::some(value * 2).unwrap());
    assert_eq!(maybe_two.unwrap(), 2);

    let maybe_three = one.flat_map(|_| Optional::<i32>::none());
    assert!(maybe_three.is_none());
}

#[rstest]
fn some_or_keeps_self() {
    let one = Optional::<i32>::of(1);
    assert_eq!(one.or(Optional::of(2)).unwrap(), 1);
    assert_eq!(one.or(Optional::none()).unwrap(), 1);
}

#[rstest]
fn some_or_else_skips_producer() {
    let counter = CallCounter::default();
    let one = Optional::<i32>::of(1);

    let result = one.or_else(|| {
        counter.hit();
        Optional::of(2)
    });

    assert_eq!(result.unwrap(), 1);
    assert_eq!(counter.count(), 0);
}

#[rstest]
fn some_match_with_calls_some_handler() {
    let one = Optional::<i32>::of(1);

    let doubled = one.match_with(Match {
        some: |value: i32| value * 2,
        none: || 0,
    });
    assert_eq!(doubled, 2);

    let three = Cell::new(0);
    one.match_with(Match {
        some: |_: i32| three.set(3),
        none: || {},
    });
    assert_eq!(three.get(), 3);
}

#[rstest]
fn some_clone_is_distinct_but_equal() {
    let one = Optional::<i32>::of(1);
    let one_again = one.clone();

    assert_eq!(one.unwrap(), one_again.unwrap());
    assert!(!std::ptr::eq(&one, &one_again));
}

#[rstest]
fn some_filter_keeps_or_drops() {
    let one = Optional::<i32>::of(1);

    let filtered = one.filter(|value| *value > 0);
    assert_eq!(filtered.unwrap(), 1);

    let filtered_again = one.filter(|value| *value < 0);
    assert!(filtered_again.is_none());
}

#[rstest]
fn some_filter_returns_same_allocation() {
    let shared = Rc::new(Foo { foo: "bar" });
    let original = Optional::<Rc<Foo>>::of(Rc::clone(&shared));

    let filtered = original.filter(|value| value.foo == "bar");

    assert!(Rc::ptr_eq(&filtered.unwrap(), &shared));
}

#[rstest]
fn some_for_each_sees_value() {
    let mut value = 0;
    Optional::<i32>::of(1).for_each(|held| value = *held);
    assert_eq!(value, 1);
}

#[rstest]
fn some_equals_compares_shallowly() {
    let a = Optional::<i32>::of(1);
    let b = Optional::<i32>::of(1);
    assert!(a.equals(&b));

    let c = Optional::<Rc<Foo>>::of(Rc::new(Foo { foo: "bar" }));
    let d = Optional::<Rc<Foo>>::of(Rc::new(Foo { foo: "bar" }));
    assert!(!c.equals(&d));

    let object = Rc::new(Foo { foo: "bar" });
    let e = Optional::<Rc<Foo>>::of(Rc::clone(&object));
    let f = Optional::<Rc<Foo>>::of(Rc::clone(&object));
    assert!(e.equals(&f));

    let g = Optional::<i32>::of(1);
    let h = Optional::<i32>::none();
    assert!(!g.equals(&h));
}

#[rstest]
fn some_has_value_compares_shallowly() {
    let one = Optional::<i32>::of(1);
    assert!(one.has_value(&1));
    assert!(!one.has_value(&2));

    let another = Optional::<Rc<Foo>>::of(Rc::new(Foo { foo: "bar" }));
    assert!(!another.has_value(&Rc::new(Foo { foo: "bar" })));

    let object = Rc::new(Foo { foo: "bar" });
    let maybe_object = Optional::<Rc<Foo>>::of(Rc::clone(&object));
    assert!(maybe_object.has_value(&object));
}

#[rstest]
#[case("foo", true)]
#[case("bar", false)]
fn some_string_slice_compares_by_value(#[case] other: &str, #[case] expected: bool) {
    let owned = String::from(other);
    let held = Optional::<&str>::of("foo");

    assert_eq!(held.has_value(&owned.as_str()), expected);
    assert_eq!(held.equals(&Optional::of(owned.as_str())), expected);
}

#[rstest]
#[case(1, true)]
#[case(2, false)]
fn some_integer_reference_compares_by_value(#[case] other: i32, #[case] expected: bool) {
    let held_value = Box::new(1);
    let other_value = Box::new(other);
    let held = Optional::<&i32>::of(&*held_value);

    assert_eq!(held.has_value(&&*other_value), expected);
    assert_eq!(held.equals(&Optional::of(&*other_value)), expected);
}

#[rstest]
fn some_contains_evaluates_predicate() {
    let one = Optional::<i32>::of(1);
    assert!(one.contains(|value| *value > 0));
    assert!(!one.contains(|value| *value < 0));

    let object = Optional::<Foo>::of(Foo { foo: "bar" });
    assert!(object.contains(|value| value.foo == "bar"));
    assert!(!object.contains(|value| value.foo == "baz"));
}

// =============================================================================
// None
// =============================================================================

#[rstest]
fn none_is_none() {
    let none = Optional::<i32>::none();
    assert!(!none.is_some());
    assert!(none.is_none());
}

#[rstest]
fn none_to_string() {
    assert_eq!(Optional::<i32>::none().to_string(), "None()");
}

#[rstest]
#[should_panic(expected = "failed")]
fn none_expect_panics_with_message() {
    let _ = Optional::<i32>::none().expect("failed");
}

#[rstest]
#[should_panic(expected = "Called unwrap on a None value")]
fn none_unwrap_panics() {
    let _ = Optional::<i32>::none().unwrap();
}

#[rstest]
fn none_try_expect_reports_message() {
    let error = Optional::<i32>::none().try_expect("failed").unwrap_err();
    assert_eq!(error.message(), "failed");
}

#[rstest]
fn none_unwrap_or_returns_fallback() {
    assert_eq!(Optional::<i32>::none().unwrap_or(10), 10);
}

#[rstest]
fn none_unwrap_or_else_calls_producer_once() {
    let counter = CallCounter::default();
    let value = Optional::<i32>::none().unwrap_or_else(|| {
        counter.hit();
        1
    });
    assert_eq!(value, 1);
    assert_eq!(counter.count(), 1);
}

#[rstest]
fn none_map_skips_function() {
    let counter = CallCounter::default();
    let result = Optional::<i32>::none().map(|value| {
        counter.hit();
        value * 2
    });
    assert!(result.is_none());
    assert_eq!(counter.count(), 0);
}

#[rstest]
fn none_map_or_returns_fallback() {
    assert_eq!(Optional::<i32>::none().map_or(1, |value| value * 2), 1);
}

#[rstest]
fn none_map_or_else_calls_only_fallback() {
    let counter = CallCounter::default();
    let result = Optional::<i32>::none().map_or_else(
        || 1,
        |value| {
            counter.hit();
            value * 2
        },
    );
    assert_eq!(result, 1);
    assert_eq!(counter.count(), 0);
}

#[rstest]
fn none_and_is_none() {
    let none = Optional::<i32>::none();
    assert!(none.and(Optional::<i32>::of(1)).is_none());
    assert!(none.and(Optional::<i32>::none()).is_none());
}

#[rstest]
fn none_or_returns_other() {
    let none = Optional::<i32>::none();

    let or_result = none.or(Optional::of(1));
    assert!(or_result.is_some());
    assert_eq!(or_result.unwrap(), 1);

    assert!(none.or(Optional::none()).is_none());
}

#[rstest]
fn none_flat_map_skips_function() {
    let counter = CallCounter::default();
    let none = Optional::<i32>::none();

    let nothing = none.flat_map(|_| {
        counter.hit();
        Optional::<i32>::none()
    });
    let something = none.flat_map(|_| {
        counter.hit();
        Optional::<i32>::of(1)
    });

    assert!(nothing.is_none());
    assert!(something.is_none());
    assert_eq!(counter.count(), 0);
}

#[rstest]
fn none_or_else_calls_producer() {
    let none = Optional::<String>::none();

    assert!(none.clone().or_else(Optional::none).is_none());
    assert!(
        none.clone()
            .or_else(|| Optional::of("x".to_string()))
            .is_some()
    );
    assert_eq!(
        none.or_else(|| Optional::of("foobar".to_string())).unwrap(),
        "foobar"
    );
}

#[rstest]
fn none_match_with_calls_none_handler() {
    let result = Optional::<i32>::none().match_with(Match {
        some: |_: i32| 1,
        none: || 0,
    });
    assert_eq!(result, 0);
}

#[rstest]
fn none_clone_is_none() {
    let none = Optional::<i32>::none();
    let none_again = none.clone();
    assert!(none_again.is_none());
    assert!(!std::ptr::eq(&none, &none_again));
}

#[rstest]
fn none_filter_skips_predicate() {
    let counter = CallCounter::default();
    let filtered = Optional::<i32>::none().filter(|value| {
        counter.hit();
        *value > 0
    });
    assert!(filtered.is_none());
    assert_eq!(counter.count(), 0);
}

#[rstest]
fn none_for_each_does_nothing() {
    let mut value = 0;
    Optional::<i32>::none().for_each(|held| value = *held);
    assert_eq!(value, 0);
}

#[rstest]
fn none_equals() {
    let a = Optional::<i32>::none();
    let b = Optional::<i32>::of(1);
    assert!(!a.equals(&b));

    let c = Optional::<i32>::none();
    let d = Optional::<i32>::none();
    assert!(c.equals(&d));
}

#[rstest]
fn none_has_value_is_false() {
    assert!(!Optional::<i32>::none().has_value(&1));
}

#[rstest]
fn none_contains_is_false() {
    let none = Optional::<i32>::none();
    assert!(!none.contains(|value| *value > 0));
    assert!(!none.contains(|value| *value < 0));

    let none_again = Optional::<Foo>::none();
    assert!(!none_again.contains(|value| value.foo.is_empty()));
}
