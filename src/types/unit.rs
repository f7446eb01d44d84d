use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Singleton marker carrying no information.
///
/// [`Outcome`](crate::Outcome) is isomorphic to `Fallible<Unit>`; the
/// conversions in [`convert`](crate::convert) move between the two.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit;

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
