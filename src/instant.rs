use std::fmt;

/// A point in time, in whole seconds since the Unix epoch.
///
/// Matches are rated in ascending order of their scheduled instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant(pub i64);

impl From<Instant> for i64 {
    #[inline]
    fn from(Instant(instant): Instant) -> i64 {
        instant
    }
}

impl From<i64> for Instant {
    #[inline]
    fn from(value: i64) -> Instant {
        Instant(value)
    }
}
impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
