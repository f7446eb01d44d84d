use crate::fallible::core::Fallible;
use crate::types::{Error, ErrorVec};

impl<T> Fallible<T> {
    /// Evaluates every container, collecting all values or accumulating every
    /// error instead of stopping at the first one.
    ///
    /// A single failure is returned unchanged; several are aggregated into a
    /// composite error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Fallible};
    ///
    /// let all: Fallible<Vec<i32>> =
    ///     Fallible::collect_all([Fallible::success(1), Fallible::success(2)]);
    /// assert_eq!(all, Fallible::success(vec![1, 2]));
    ///
    /// let failed: Fallible<Vec<i32>> = Fallible::collect_all([
    ///     Fallible::fail(Error::new("a")),
    ///     Fallible::success(2),
    ///     Fallible::fail(Error::new("b")),
    /// ]);
    /// let error = failed.err().unwrap();
    /// assert_eq!(error.errors().len(), 2);
    /// assert_eq!(error.message(), "Two errors occurred");
    /// ```
    pub fn collect_all<I, C>(items: I) -> Fallible<C>
    where
        I: IntoIterator<Item = Fallible<T>>,
        C: FromIterator<T>,
    {
        let mut errors: ErrorVec<Error> = ErrorVec::new();
        let values: Vec<T> = items
            .into_iter()
            .filter_map(|item| match item {
                Fallible::Success(value) => Some(value),
                Fallible::Fail(error) => {
                    errors.push(error);
                    None
                },
            })
            .collect();

        match Error::aggregate(errors) {
            None => Fallible::Success(values.into_iter().collect()),
            Some(error) => Fallible::fail(error),
        }
    }
}

/// Collects values, short-circuiting on the first failure.
impl<T, C> FromIterator<Fallible<T>> for Fallible<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Fallible<T>>>(iter: I) -> Self {
        iter.into_iter().map(Fallible::into_std_result).collect::<Result<C, Error>>().into()
    }
}

impl<T> IntoIterator for Fallible<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Fallible<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
