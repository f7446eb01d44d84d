use outcome_rail::{Error, Fallible, Maybe, ResultState};
use std::sync::atomic::{AtomicU32, Ordering};

fn failing<T>(message: &str) -> Fallible<T> {
    Fallible::fail(Error::new(message))
}

fn half(value: i32) -> Fallible<i32> {
    if value % 2 == 0 {
        Fallible::success(value / 2)
    } else {
        failing("odd")
    }
}

#[test]
fn constructors_report_state() {
    assert_eq!(Fallible::success(1).state(), ResultState::Success);
    assert_eq!(failing::<i32>("x").state(), ResultState::Fail);
    assert_eq!(Fallible::<i32>::fail_default().err(), Some(Error::default()));
    assert_eq!(Fallible::<i32>::fail_or_default(None).err(), Some(Error::default()));
}

#[test]
fn from_value_turns_none_into_absence_failure() {
    assert_eq!(Fallible::from_value(Some(4)), Fallible::success(4));
    assert!(Fallible::<i32>::from_value(None).err().unwrap().is_absence());

    let custom = Fallible::<i32>::from_value_or_else(None, || Error::new("missing id"));
    assert_eq!(custom.err().unwrap().message(), "missing id");
}

#[test]
fn extraction_helpers() {
    assert_eq!(Fallible::success(3).ok(), Some(3));
    assert_eq!(failing::<i32>("x").ok(), None);
    assert_eq!(Fallible::success(3).err(), None);
    assert_eq!(failing::<i32>("x").error_ref().map(Error::message), Some("x"));

    let owned = Fallible::success(String::from("text"));
    assert_eq!(owned.as_ref().map(|s| s.len()), Fallible::success(4));
}

#[test]
fn map_runs_only_on_success() {
    let calls = AtomicU32::new(0);

    let mapped = failing::<i32>("x").map(|v| {
        calls.fetch_add(1, Ordering::SeqCst);
        v + 1
    });

    assert!(mapped.is_fail());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(Fallible::success(1).map(|v| v + 1), Fallible::success(2));
}

#[test]
fn then_chains_and_short_circuits() {
    assert_eq!(Fallible::success(8).then(half).then(half), Fallible::success(2));
    assert_eq!(Fallible::success(6).then(half).then(half).err().unwrap().message(), "odd");
    assert_eq!(Fallible::success(8).flat_map(half), Fallible::success(4));
}

#[test]
fn then_outcome_discards_value() {
    assert!(Fallible::success(1).then_outcome(|_| outcome_rail::Outcome::success()).is_success());
    assert!(failing::<i32>("x").then_outcome(|_| outcome_rail::Outcome::success()).is_fail());
}

#[test]
fn otherwise_and_or_recover() {
    assert_eq!(failing::<i32>("x").otherwise(Fallible::success(1)), Fallible::success(1));
    assert_eq!(Fallible::success(0).otherwise(Fallible::success(1)), Fallible::success(0));

    let recovered =
        failing::<usize>("four").otherwise_with(|error| Fallible::success(error.message().len()));
    assert_eq!(recovered, Fallible::success(4));

    assert_eq!(failing::<i32>("x").or(9), Fallible::success(9));
    let recovered = failing::<usize>("abc").or_with(|error| error.message().len());
    assert_eq!(recovered, Fallible::success(3));
}

#[test]
fn value_or_returns_fallback_only_on_failure() {
    assert_eq!(Fallible::success(1).value_or(2), 1);
    assert_eq!(failing::<i32>("x").value_or(2), 2);

    let calls = AtomicU32::new(0);
    let value = Fallible::success(1).value_or_else(|_| {
        calls.fetch_add(1, Ordering::SeqCst);
        0
    });
    assert_eq!(value, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn with_error_preserves_success() {
    let tagged = failing::<i32>("x").with_error(|error| error.with_code(42));
    assert_eq!(tagged.err().unwrap().error_code(), Some(42));

    assert_eq!(Fallible::success(1).with_error(|error| error.with_code(42)), Fallible::success(1));
}

#[test]
fn hooks_observe_without_changing() {
    let seen = AtomicU32::new(0);

    let value = Fallible::success(5)
        .on_success(|v| {
            seen.fetch_add(*v, Ordering::SeqCst);
        })
        .on_fail(|_| panic!("not called on success"));

    assert_eq!(value, Fallible::success(5));
    assert_eq!(seen.load(Ordering::SeqCst), 5);
}

#[test]
fn match_with_folds_branches() {
    let describe = |f: Fallible<i32>| {
        f.match_with(|v| format!("value {v}"), |e| format!("error {}", e.message()))
    };

    assert_eq!(describe(Fallible::success(1)), "value 1");
    assert_eq!(describe(failing("x")), "error x");
}

#[test]
fn widening_never_produces_none() {
    assert_eq!(Fallible::success(1).into_maybe(), Maybe::some(1));
    assert!(failing::<i32>("x").into_maybe().is_fail());
    assert!(Fallible::success(1).into_outcome().is_success());
}

#[test]
fn flatten_removes_one_level() {
    assert_eq!(Fallible::success(Fallible::success(1)).flatten(), Fallible::success(1));
    assert!(Fallible::success(failing::<i32>("inner")).flatten().is_fail());
    assert!(failing::<Fallible<i32>>("outer").flatten().is_fail());
}

#[test]
fn iteration_yields_success_value() {
    let values: Vec<i32> = Fallible::success(3).into_iter().collect();
    assert_eq!(values, vec![3]);
    assert_eq!(failing::<i32>("x").iter().count(), 0);

    let borrowed = Fallible::success(7);
    let mut total = 0;
    for value in &borrowed {
        total += value;
    }
    assert_eq!(total, 7);
}

#[test]
fn collect_stops_at_first_failure() {
    let all: Fallible<Vec<i32>> =
        vec![Fallible::success(1), Fallible::success(2)].into_iter().collect();
    assert_eq!(all, Fallible::success(vec![1, 2]));

    let failed: Fallible<Vec<i32>> =
        vec![Fallible::success(1), failing("a"), failing("b")].into_iter().collect();
    assert_eq!(failed.err().unwrap().message(), "a");
}

#[test]
fn collect_all_accumulates_errors() {
    let failed: Fallible<Vec<i32>> =
        Fallible::collect_all(vec![failing("a"), Fallible::success(1), failing("b"), failing("c")]);
    let error = failed.err().unwrap();

    assert!(error.is_composite());
    assert_eq!(error.message(), "Three errors occurred");
}
