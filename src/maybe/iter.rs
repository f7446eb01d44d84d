use crate::maybe::core::Maybe;
use crate::types::Error;

/// Collects present values, stopping at the first `None` or failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::Maybe;
///
/// let all: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::some(2)].into_iter().collect();
/// assert_eq!(all, Maybe::some(vec![1, 2]));
///
/// let gap: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::none()].into_iter().collect();
/// assert!(gap.is_none());
/// ```
impl<T, C> FromIterator<Maybe<T>> for Maybe<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        let mut stop: Option<Option<Error>> = None;
        let collected: C = iter
            .into_iter()
            .map_while(|item| match item {
                Maybe::Some(value) => Some(value),
                Maybe::None => {
                    stop = Some(None);
                    None
                },
                Maybe::Fail(error) => {
                    stop = Some(Some(error));
                    None
                },
            })
            .collect();

        match stop {
            None => Maybe::Some(collected),
            Some(None) => Maybe::None,
            Some(Some(error)) => Maybe::Fail(error),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
