use outcome_rail::{Error, Fallible, Maybe, MaybeState};
use std::sync::atomic::{AtomicU32, Ordering};

fn failing<T>(message: &str) -> Maybe<T> {
    Maybe::fail(Error::new(message))
}

#[test]
fn constructors_report_state() {
    assert_eq!(Maybe::some(1).state(), MaybeState::Some);
    assert_eq!(Maybe::<i32>::none().state(), MaybeState::None);
    assert_eq!(failing::<i32>("x").state(), MaybeState::Fail);
    assert_eq!(Maybe::<i32>::default(), Maybe::none());
    assert_eq!(Maybe::<i32>::fail_default().err(), Some(Error::default()));
}

#[test]
fn from_value_keeps_absence() {
    assert_eq!(Maybe::from_value(Some(2)), Maybe::some(2));
    assert!(Maybe::<i32>::from_value(None).is_none());
    assert_eq!(Maybe::from_fallible(Fallible::success(3)), Maybe::some(3));
}

#[test]
fn map_and_then_propagate_none_and_fail() {
    let calls = AtomicU32::new(0);
    let count = |v: i32| {
        calls.fetch_add(1, Ordering::SeqCst);
        v
    };

    assert!(Maybe::<i32>::none().map(count).is_none());
    assert!(failing::<i32>("x").map(count).is_fail());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(Maybe::some(2).then(|v| Maybe::some(v * 3)), Maybe::some(6));
    assert!(Maybe::some(2).then(|_| Maybe::<i32>::none()).is_none());
    assert!(Maybe::<i32>::none().flat_map(|v| Maybe::some(v)).is_none());
}

#[test]
fn filter_only_ever_produces_none() {
    assert_eq!(Maybe::some(10).filter(|v| *v > 5), Maybe::some(10));
    assert!(Maybe::some(1).filter(|v| *v > 5).is_none());
    assert!(Maybe::<i32>::none().filter(|_| true).is_none());
    assert_eq!(failing::<i32>("x").filter(|_| false).err().unwrap().message(), "x");
}

#[test]
fn otherwise_with_reports_which_branch_was_replaced() {
    let from_none = Maybe::<String>::none().otherwise_with(|error| match error {
        None => Maybe::some("was empty".to_string()),
        Some(error) => Maybe::some(error.message().to_string()),
    });
    assert_eq!(from_none, Maybe::some("was empty".to_string()));

    let from_fail = failing::<String>("broken").otherwise_with(|error| match error {
        None => Maybe::none(),
        Some(error) => Maybe::some(error.message().to_string()),
    });
    assert_eq!(from_fail, Maybe::some("broken".to_string()));
}

#[test]
fn or_and_value_or_cover_none_and_fail() {
    assert_eq!(Maybe::<i32>::none().or(1), Maybe::some(1));
    assert_eq!(failing::<i32>("x").or(1), Maybe::some(1));
    assert_eq!(Maybe::some(0).or(1), Maybe::some(0));
    assert_eq!(Maybe::<i32>::none().or_with(|| 5), Maybe::some(5));
    assert_eq!(Maybe::<i32>::none().otherwise(Maybe::some(3)), Maybe::some(3));

    assert_eq!(Maybe::some(1).value_or(2), 1);
    assert_eq!(Maybe::<i32>::none().value_or(2), 2);
    assert_eq!(failing::<i32>("x").value_or_else(|| 3), 3);
}

#[test]
fn with_error_leaves_none_untouched() {
    assert!(Maybe::<i32>::none().with_error(|e| e.with_code(1)).is_none());
    let remapped = failing::<i32>("x").with_error(|e| e.with_code(1));
    assert_eq!(remapped.err().unwrap().error_code(), Some(1));
}

#[test]
fn hooks_fire_on_their_branch_only() {
    let some = AtomicU32::new(0);
    let none = AtomicU32::new(0);
    let fail = AtomicU32::new(0);

    for maybe in [Maybe::some(1), Maybe::none(), failing("x"), Maybe::none()] {
        let _ = maybe
            .on_some(|_| {
                some.fetch_add(1, Ordering::SeqCst);
            })
            .on_none(|| {
                none.fetch_add(1, Ordering::SeqCst);
            })
            .on_fail(|_| {
                fail.fetch_add(1, Ordering::SeqCst);
            });
    }

    assert_eq!(some.load(Ordering::SeqCst), 1);
    assert_eq!(none.load(Ordering::SeqCst), 2);
    assert_eq!(fail.load(Ordering::SeqCst), 1);
}

#[test]
fn match_with_has_three_branches() {
    let describe = |m: Maybe<i32>| {
        m.match_with(|v| format!("some {v}"), || "none".to_string(), |e| e.message().to_string())
    };

    assert_eq!(describe(Maybe::some(1)), "some 1");
    assert_eq!(describe(Maybe::none()), "none");
    assert_eq!(describe(failing("bad")), "bad");
}

#[test]
fn narrowing_turns_none_into_failure() {
    assert_eq!(Maybe::some(1).into_fallible(), Fallible::success(1));
    assert!(Maybe::<i32>::none().into_fallible().err().unwrap().is_absence());
    assert_eq!(failing::<i32>("x").into_fallible().err().unwrap().message(), "x");

    let custom =
        Maybe::<i32>::none().into_fallible_with(|| Error::new("user missing").with_code(404));
    assert_eq!(custom.err().unwrap().error_code(), Some(404));
}

#[test]
fn std_result_keeps_none_as_ok() {
    assert_eq!(Maybe::some(1).into_std_result(), Ok(Some(1)));
    assert_eq!(Maybe::<i32>::none().into_std_result(), Ok(None));
    assert!(failing::<i32>("x").into_std_result().is_err());
    assert_eq!(failing::<i32>("x").into_option(), None);
}

#[test]
fn flatten_and_as_ref() {
    assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    assert!(Maybe::some(Maybe::<i32>::none()).flatten().is_none());

    let owned = Maybe::some(String::from("abc"));
    assert_eq!(owned.as_ref().map(|s| s.len()), Maybe::some(3));
}

#[test]
fn collect_stops_at_first_gap() {
    let all: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::some(2)].into_iter().collect();
    assert_eq!(all, Maybe::some(vec![1, 2]));

    let gap: Maybe<Vec<i32>> =
        vec![Maybe::some(1), Maybe::none(), failing("late")].into_iter().collect();
    assert!(gap.is_none());

    let failed: Maybe<Vec<i32>> = vec![failing("early"), Maybe::none()].into_iter().collect();
    assert_eq!(failed.err().unwrap().message(), "early");
}

#[test]
fn iteration_yields_present_value() {
    assert_eq!(Maybe::some(4).into_iter().sum::<i32>(), 4);
    assert_eq!(Maybe::<i32>::none().iter().count(), 0);
}
