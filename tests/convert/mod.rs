use outcome_rail::convert::{
    fallible_to_maybe, fallible_to_outcome, maybe_to_fallible, outcome_to_fallible,
};
use outcome_rail::{Error, Fallible, Maybe, Outcome, Unit};

#[test]
fn outcome_and_unit_fallible_convert_both_ways() {
    let widened: Fallible<Unit> = Outcome::success().into();
    assert_eq!(widened, Fallible::success(Unit));

    let narrowed: Outcome = Fallible::<Unit>::fail(Error::new("x")).into();
    assert_eq!(narrowed.err().unwrap().message(), "x");

    assert_eq!(outcome_to_fallible(Outcome::success()), Fallible::success(Unit));
    assert!(fallible_to_outcome(Fallible::success("discarded")).is_success());
}

#[test]
fn fallible_widens_into_maybe() {
    let widened: Maybe<i32> = Fallible::success(1).into();
    assert_eq!(widened, Maybe::some(1));

    let failed: Maybe<i32> = Fallible::<i32>::fail(Error::absent()).into();
    assert!(failed.is_fail(), "an absence error stays a failure when widened");

    assert_eq!(fallible_to_maybe(Fallible::success(2)), Maybe::some(2));
}

#[test]
fn maybe_narrows_into_fallible() {
    assert_eq!(maybe_to_fallible(Maybe::some(2)), Fallible::success(2));
    assert!(maybe_to_fallible(Maybe::<i32>::none()).err().unwrap().is_absence());
}

#[test]
fn std_types_convert_into_containers() {
    let from_option: Maybe<i32> = Some(3).into();
    assert_eq!(from_option, Maybe::some(3));

    let from_none: Maybe<i32> = None.into();
    assert!(from_none.is_none());

    let from_result: Fallible<i32> = Err::<i32, _>(Error::new("x")).into();
    assert!(from_result.is_fail());

    let from_unit_result: Outcome = Ok::<(), Error>(()).into();
    assert!(from_unit_result.is_success());

    let from_error: Outcome = Error::new("direct").into();
    assert!(from_error.is_fail());
}

#[test]
fn containers_convert_back_into_std_results() {
    let result: Result<i32, Error> = Fallible::success(1).into();
    assert_eq!(result, Ok(1));

    let unit: Result<(), Error> = Outcome::success().into();
    assert_eq!(unit, Ok(()));

    let optional: Result<Option<i32>, Error> = Maybe::<i32>::none().into();
    assert_eq!(optional, Ok(None));
}

#[test]
fn unit_converts_to_and_from_unit_tuple() {
    let unit: Unit = ().into();
    let () = unit.into();
    assert_eq!(Unit.to_string(), "()");
}
