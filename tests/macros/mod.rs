use outcome_rail::{ensure, fail, rail, Error, Fallible, Maybe, Outcome};

fn parse_port(raw: &str) -> Fallible<u16> {
    rail!(raw.parse::<u16>()).then(|port| {
        ensure!(port >= 1024, "port {} is privileged", port);
        Fallible::success(port)
    })
}

fn check_limit(value: u32) -> Outcome {
    ensure!(value <= 10, error = Error::new("too large").with_code(413));
    Outcome::success()
}

fn lookup(id: u32) -> Maybe<&'static str> {
    match id {
        0 => fail!("id {} is reserved", id),
        1 => Maybe::some("root"),
        _ => Maybe::none(),
    }
}

#[test]
fn rail_translates_std_errors() {
    assert_eq!(parse_port("8080"), Fallible::success(8080));

    let error = parse_port("not a port").err().unwrap();
    assert_eq!(error.title(), "ParseIntError");
}

#[test]
fn ensure_formats_failure_message() {
    assert_eq!(parse_port("80").err().unwrap().message(), "port 80 is privileged");
}

#[test]
fn ensure_accepts_prebuilt_error() {
    assert!(check_limit(3).is_success());
    assert_eq!(check_limit(11).err().unwrap().error_code(), Some(413));
}

#[test]
fn fail_returns_enclosing_container_type() {
    assert_eq!(lookup(0).err().unwrap().message(), "id 0 is reserved");
    assert_eq!(lookup(1), Maybe::some("root"));
    assert!(lookup(2).is_none());
}
