use criterion::Criterion;
use outcome_rail::{Error, Fallible, Maybe};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct UserData {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl UserData {
    pub fn new(id: u64) -> Self {
        Self { id, name: format!("user_{id}"), email: format!("user{id}@example.com") }
    }
}

/// Loads a user, failing for ids divisible by `fail_every`.
pub fn load_user(id: u64, fail_every: u64) -> Fallible<UserData> {
    if fail_every != 0 && id % fail_every == 0 {
        let error = Error::new(format!("user {id} not found")).with_code(404);
        Fallible::fail(error.with_identifier("load_user"))
    } else {
        Fallible::success(UserData::new(id))
    }
}

/// Looks up an optional nickname; odd ids have none.
pub fn find_nickname(user: UserData) -> Maybe<String> {
    if user.id % 2 == 0 {
        Maybe::some(format!("nick_{}", user.id))
    } else {
        Maybe::none()
    }
}

pub fn nested_error(depth: usize) -> Error {
    (0..depth).fold(Error::new("root cause").with_code(500), |inner, level| {
        Error::new(format!("layer {level}")).with_identifier("bench").with_inner(inner)
    })
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
