use std::{convert::Infallible, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

use crate::{Instant, RatingDifference, RatingScalar, Score};

/// Identifier of a competitor, usually a team name.
pub type CompetitorId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    /// The match has been played and its score is final.
    Closed,
    /// Scheduled, in progress, postponed, ... Never rated.
    Other(String),
}

impl MatchStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, MatchStatus::Closed)
    }
}

impl FromStr for MatchStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "closed" => MatchStatus::Closed,
            other => MatchStatus::Other(other.to_owned()),
        })
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Closed => f.write_str("closed"),
            MatchStatus::Other(status) => f.write_str(status),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub scheduled_time: Instant,
    pub status: MatchStatus,
    pub home_id: CompetitorId,
    pub away_id: CompetitorId,
    pub home_score: i64,
    pub away_score: i64,
}

impl MatchRecord {
    /// Score of the home side. Anything but a strict home win is a loss.
    pub fn home_result(&self) -> Score {
        Score::from_points(self.home_score, self.away_score)
    }
}

/// A match record together with the ratings before and after it.
///
/// For matches that are not closed all rating fields keep their default
/// value `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedMatch {
    pub record: MatchRecord,
    pub home_rating_pre: RatingScalar,
    pub away_rating_pre: RatingScalar,
    pub home_rating_post: RatingScalar,
    pub away_rating_post: RatingScalar,
    pub rating_diff_pre: RatingDifference,
}

impl AnnotatedMatch {
    pub fn unrated(record: MatchRecord) -> AnnotatedMatch {
        AnnotatedMatch {
            record,
            home_rating_pre: RatingScalar::default(),
            away_rating_pre: RatingScalar::default(),
            home_rating_post: RatingScalar::default(),
            away_rating_post: RatingScalar::default(),
            rating_diff_pre: RatingDifference::default(),
        }
    }

    /// Rating of the given competitor after this match, if they took part
    /// in it.
    pub fn rating_post(&self, competitor_id: &str) -> Option<RatingScalar> {
        if self.record.home_id == competitor_id {
            Some(self.home_rating_post)
        } else if self.record.away_id == competitor_id {
            Some(self.away_rating_post)
        } else {
            None
        }
    }

    /// Whether the given competitor took part in and won this match.
    pub fn won_by(&self, competitor_id: &str) -> bool {
        let record = &self.record;
        if record.home_id == competitor_id {
            record.home_score > record.away_score
        } else if record.away_id == competitor_id {
            record.away_score > record.home_score
        } else {
            false
        }
    }
}

#[derive(Debug, Error)]
#[error("match #{index} is scheduled at {current}, before the preceding match at {previous}")]
pub struct OrderingViolation {
    pub index: usize,
    pub previous: Instant,
    pub current: Instant,
}

/// Match records in ascending order of their scheduled time.
///
/// Matches scheduled at the same instant keep their relative order.
#[derive(Debug, Clone, Default)]
pub struct OrderedMatches {
    inner: Vec<MatchRecord>,
}

impl OrderedMatches {
    /// Checks that the records are already in order, and fails on the first
    /// record that is not.
    pub fn new(matches: Vec<MatchRecord>) -> Result<OrderedMatches, OrderingViolation> {
        for (index, pair) in matches.windows(2).enumerate() {
            if pair[1].scheduled_time < pair[0].scheduled_time {
                return Err(OrderingViolation {
                    index: index + 1,
                    previous: pair[0].scheduled_time,
                    current: pair[1].scheduled_time,
                });
            }
        }
        Ok(OrderedMatches { inner: matches })
    }

    /// Puts the records in order. The sort is stable.
    pub fn sorted(mut matches: Vec<MatchRecord>) -> OrderedMatches {
        matches.sort_by_key(|record| record.scheduled_time);
        OrderedMatches { inner: matches }
    }
}

impl Deref for OrderedMatches {
    type Target = [MatchRecord];

    fn deref(&self) -> &[MatchRecord] {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(at: i64, home: &str, away: &str) -> MatchRecord {
        MatchRecord {
            scheduled_time: Instant(at),
            status: MatchStatus::Closed,
            home_id: home.to_owned(),
            away_id: away.to_owned(),
            home_score: 1,
            away_score: 0,
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("closed".parse::<MatchStatus>(), Ok(MatchStatus::Closed));
        assert_eq!(
            "scheduled".parse::<MatchStatus>(),
            Ok(MatchStatus::Other("scheduled".to_owned()))
        );
        assert!(!MatchStatus::Other("inprogress".to_owned()).is_closed());
        assert_eq!(MatchStatus::Closed.to_string(), "closed");
    }

    #[test]
    fn test_ordered_accepts_ties() {
        let matches = vec![record(1, "a", "b"), record(1, "c", "d"), record(2, "a", "c")];
        let ordered = OrderedMatches::new(matches).expect("ordered");
        assert_eq!(ordered.len(), 3);
    }

    #[test]
    fn test_ordered_rejects_unsorted() {
        let matches = vec![record(1, "a", "b"), record(5, "c", "d"), record(3, "a", "c")];
        let err = OrderedMatches::new(matches).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.previous, Instant(5));
        assert_eq!(err.current, Instant(3));
    }

    #[test]
    fn test_sorted_is_stable() {
        let matches = vec![record(2, "a", "b"), record(1, "c", "d"), record(1, "e", "f")];
        let ordered = OrderedMatches::sorted(matches);
        let homes: Vec<&str> = ordered.iter().map(|r| r.home_id.as_str()).collect();
        assert_eq!(homes, ["c", "e", "a"]);
    }

    #[test]
    fn test_won_by_and_rating_post() {
        let mut annotated = AnnotatedMatch::unrated(record(1, "a", "b"));
        annotated.home_rating_post = RatingScalar(1510.0);
        annotated.away_rating_post = RatingScalar(1490.0);
        assert!(annotated.won_by("a"));
        assert!(!annotated.won_by("b"));
        assert!(!annotated.won_by("z"));
        assert_eq!(annotated.rating_post("b"), Some(RatingScalar(1490.0)));
        assert_eq!(annotated.rating_post("z"), None);
    }
}
