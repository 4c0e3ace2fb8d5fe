use std::{cmp::Reverse, str::FromStr};

use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{AnnotatedMatch, CompetitorId, RatingScalar};

/// Which match a competitor's final rating is read from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FinalRatingPolicy {
    /// The post-match rating of the last match the competitor appears in,
    /// closed or not. If that match is not closed, the final rating is
    /// `0.0`.
    #[default]
    LastAppearance,
    /// The post-match rating of the last closed match of the competitor, or
    /// `0.0` if there is none.
    LastClosed,
}

#[derive(Debug, Error)]
#[error("invalid final rating policy (expected last-appearance or last-closed)")]
pub struct InvalidFinalRatingPolicy;

impl FromStr for FinalRatingPolicy {
    type Err = InvalidFinalRatingPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "last-appearance" => FinalRatingPolicy::LastAppearance,
            "last-closed" => FinalRatingPolicy::LastClosed,
            _ => return Err(InvalidFinalRatingPolicy),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub competitor_id: CompetitorId,
    pub final_rating: RatingScalar,
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
}

impl RankingEntry {
    fn new(competitor_id: CompetitorId) -> RankingEntry {
        RankingEntry {
            competitor_id,
            final_rating: RatingScalar::default(),
            wins: 0,
            losses: 0,
            games_played: 0,
        }
    }

    /// Fraction of games won, or `0.0` without any games.
    pub fn win_pct(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played)
        }
    }

    fn record(&mut self, annotated: &AnnotatedMatch, rating_post: RatingScalar, policy: FinalRatingPolicy) {
        if annotated.won_by(&self.competitor_id) {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.games_played = self.wins + self.losses;

        if policy == FinalRatingPolicy::LastAppearance || annotated.record.status.is_closed() {
            self.final_rating = rating_post;
        }
    }
}

/// Competitors ordered by final rating, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<RankingEntry>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, competitor_id: &str) -> Option<&RankingEntry> {
        self.entries
            .iter()
            .find(|entry| entry.competitor_id == competitor_id)
    }

    /// 1-based position of the competitor.
    pub fn rank_of(&self, competitor_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.competitor_id == competitor_id)
            .map(|index| index + 1)
    }
}

/// Builds the ranking with the [default policy](FinalRatingPolicy::LastAppearance).
pub fn aggregate(annotated: &[AnnotatedMatch]) -> Ranking {
    aggregate_with(annotated, FinalRatingPolicy::default())
}

/// Builds the ranking from annotated matches in chronological order.
///
/// Every match counts towards the win/loss record, whatever its status. Only
/// a strict win counts as a win. A competitor listed on both sides of a match
/// plays it once, in the home role. Competitors with equal final ratings are
/// ordered by id.
pub fn aggregate_with(annotated: &[AnnotatedMatch], policy: FinalRatingPolicy) -> Ranking {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut entries: Vec<RankingEntry> = Vec::new();

    for m in annotated {
        let sides = [
            (&m.record.home_id, m.home_rating_post),
            (&m.record.away_id, m.away_rating_post),
        ];
        let playing = if m.record.away_id == m.record.home_id { 1 } else { 2 };

        for (competitor_id, rating_post) in sides.into_iter().take(playing) {
            let i = *index.entry(competitor_id.as_str()).or_insert_with(|| {
                entries.push(RankingEntry::new(competitor_id.clone()));
                entries.len() - 1
            });
            entries[i].record(m, rating_post, policy);
        }
    }

    entries.sort_unstable_by(|a, b| a.competitor_id.cmp(&b.competitor_id));
    entries.sort_by_key(|entry| Reverse(OrderedFloat(entry.final_rating.0)));

    Ranking { entries }
}
