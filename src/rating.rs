use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Number representing playing strength, such that the difference between two
/// ratings can be used to predict an expected score. Higher is better.
///
/// The default value `0.0` is what unrated fields of an
/// [`AnnotatedMatch`](crate::AnnotatedMatch) hold.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct RatingScalar(pub f64);

impl From<RatingScalar> for f64 {
    #[inline]
    fn from(RatingScalar(rating): RatingScalar) -> f64 {
        rating
    }
}

impl From<f64> for RatingScalar {
    #[inline]
    fn from(rating: f64) -> RatingScalar {
        RatingScalar(rating)
    }
}

impl Sub<RatingScalar> for RatingScalar {
    type Output = RatingDifference;

    #[inline]
    fn sub(self, rhs: RatingScalar) -> RatingDifference {
        RatingDifference(self.0 - rhs.0)
    }
}

impl Add<RatingDifference> for RatingScalar {
    type Output = RatingScalar;

    #[inline]
    fn add(self, RatingDifference(difference): RatingDifference) -> RatingScalar {
        RatingScalar(self.0 + difference)
    }
}

impl AddAssign<RatingDifference> for RatingScalar {
    #[inline]
    fn add_assign(&mut self, RatingDifference(difference): RatingDifference) {
        self.0 += difference;
    }
}

impl Sub<RatingDifference> for RatingScalar {
    type Output = RatingScalar;

    #[inline]
    fn sub(self, RatingDifference(difference): RatingDifference) -> RatingScalar {
        RatingScalar(self.0 - difference)
    }
}

impl SubAssign<RatingDifference> for RatingScalar {
    #[inline]
    fn sub_assign(&mut self, RatingDifference(difference): RatingDifference) {
        self.0 -= difference;
    }
}

/// A difference between two ratings, or a number of rating points added to
/// or removed from a rating.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct RatingDifference(pub f64);

impl From<RatingDifference> for f64 {
    #[inline]
    fn from(RatingDifference(difference): RatingDifference) -> f64 {
        difference
    }
}

impl From<f64> for RatingDifference {
    #[inline]
    fn from(difference: f64) -> RatingDifference {
        RatingDifference(difference)
    }
}

impl RatingDifference {
    #[inline]
    pub fn abs(self) -> RatingDifference {
        RatingDifference(self.0.abs())
    }
}

impl Add<RatingDifference> for RatingDifference {
    type Output = RatingDifference;

    #[inline]
    fn add(self, RatingDifference(difference): RatingDifference) -> RatingDifference {
        RatingDifference(self.0 + difference)
    }
}

impl Sub<RatingDifference> for RatingDifference {
    type Output = RatingDifference;

    #[inline]
    fn sub(self, RatingDifference(difference): RatingDifference) -> RatingDifference {
        RatingDifference(self.0 - difference)
    }
}

impl Mul<f64> for RatingDifference {
    type Output = RatingDifference;

    #[inline]
    fn mul(self, scalar: f64) -> RatingDifference {
        RatingDifference(self.0 * scalar)
    }
}

impl Mul<RatingDifference> for f64 {
    type Output = RatingDifference;

    #[inline]
    fn mul(self, RatingDifference(difference): RatingDifference) -> RatingDifference {
        RatingDifference(self * difference)
    }
}

impl Neg for RatingDifference {
    type Output = RatingDifference;

    #[inline]
    fn neg(self) -> RatingDifference {
        RatingDifference(-self.0)
    }
}
