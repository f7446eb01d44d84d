/// Containers whose payload can be transformed in place of the container
/// kind.
///
/// Implemented by [`Fallible`](crate::Fallible) and [`Maybe`](crate::Maybe);
/// [`MapFuture`](crate::async_ext::MapFuture) is written against it so one
/// adapter serves both.
pub trait MapValue {
    type Value;

    type Output<U>;

    fn map_value<U, F>(self, f: F) -> Self::Output<U>
    where
        F: FnOnce(Self::Value) -> U;
}
