use crate::{RatingDifference, RatingScalar, Score};

/// Rating difference that multiplies the odds of winning by ten.
const LOGISTIC_SCALE: f64 = 400.0;

#[derive(Debug, Clone)]
pub struct RatingSystemBuilder {
    base_rating: RatingScalar,
    k_factor: f64,
    home_advantage: RatingDifference,
}

impl Default for RatingSystemBuilder {
    fn default() -> RatingSystemBuilder {
        RatingSystemBuilder::new()
    }
}

impl RatingSystemBuilder {
    pub fn new() -> RatingSystemBuilder {
        RatingSystemBuilder {
            base_rating: RatingScalar(1500.0),
            k_factor: 20.0,
            home_advantage: RatingDifference(60.0),
        }
    }

    /// Rating assigned to a competitor that has not been seen before.
    pub fn base_rating(&mut self, base_rating: RatingScalar) -> &mut Self {
        assert!(base_rating.0.is_finite());
        self.base_rating = base_rating;
        self
    }

    /// Maximum number of rating points exchanged in a single match.
    pub fn k_factor(&mut self, k_factor: f64) -> &mut Self {
        assert!(k_factor.is_finite() && k_factor >= 0.0);
        self.k_factor = k_factor;
        self
    }

    /// Bonus added to the home side when computing the expectation. It is
    /// never stored in a rating.
    pub fn home_advantage(&mut self, home_advantage: RatingDifference) -> &mut Self {
        assert!(home_advantage.0.is_finite());
        self.home_advantage = home_advantage;
        self
    }

    pub fn build(&self) -> RatingSystem {
        RatingSystem {
            base_rating: self.base_rating,
            k_factor: self.k_factor,
            home_advantage: self.home_advantage,
        }
    }
}

/// Fixed parameters of the Elo model. Immutable once built.
#[derive(Debug, Clone)]
pub struct RatingSystem {
    base_rating: RatingScalar,
    k_factor: f64,
    home_advantage: RatingDifference,
}

impl Default for RatingSystem {
    fn default() -> RatingSystem {
        RatingSystem::new()
    }
}

impl RatingSystem {
    pub fn builder() -> RatingSystemBuilder {
        RatingSystemBuilder::default()
    }

    pub fn new() -> RatingSystem {
        RatingSystem::builder().build()
    }

    pub fn base_rating(&self) -> RatingScalar {
        self.base_rating
    }

    pub fn k_factor(&self) -> f64 {
        self.k_factor
    }

    pub fn home_advantage(&self) -> RatingDifference {
        self.home_advantage
    }

    /// Expected score of the home side, given the stored ratings of both
    /// sides. The home advantage is applied here.
    pub fn expected_score(&self, home: RatingScalar, away: RatingScalar) -> Score {
        let home_effective = home + self.home_advantage;
        let away_effective = away;
        let RatingDifference(difference) = away_effective - home_effective;
        Score(1.0 / (1.0 + 10f64.powf(difference / LOGISTIC_SCALE)))
    }

    /// Points moved from the away side to the home side (negative if the
    /// home side loses points).
    pub fn delta(&self, home: RatingScalar, away: RatingScalar, home_score: Score) -> RatingDifference {
        let expected = self.expected_score(home, away);
        RatingDifference(self.k_factor * (home_score.value() - expected.value()))
    }

    /// New ratings of both sides after a match. Whatever the home side
    /// gains, the away side loses.
    pub fn update_ratings(
        &self,
        home: RatingScalar,
        away: RatingScalar,
        home_score: Score,
    ) -> (RatingScalar, RatingScalar) {
        let delta = self.delta(home, away, home_score);
        (home + delta, away - delta)
    }
}
