use crate::outcome::core::Outcome;
use crate::types::{Error, ErrorVec};

impl Outcome {
    /// Evaluates every outcome and accumulates all failures.
    ///
    /// One failure is returned unchanged; several are aggregated into a
    /// composite error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let combined = Outcome::collect_all([
    ///     Outcome::success(),
    ///     Outcome::fail(Error::new("a")),
    ///     Outcome::fail(Error::new("b")),
    /// ]);
    ///
    /// assert_eq!(combined.err().unwrap().errors().len(), 2);
    /// ```
    pub fn collect_all<I>(outcomes: I) -> Outcome
    where
        I: IntoIterator<Item = Outcome>,
    {
        let errors: ErrorVec<Error> = outcomes.into_iter().filter_map(Outcome::err).collect();
        match Error::aggregate(errors) {
            None => Outcome::Success,
            Some(error) => Outcome::fail(error),
        }
    }
}

/// Short-circuits on the first failure.
impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        iter.into_iter().find(Outcome::is_fail).unwrap_or(Outcome::Success)
    }
}
