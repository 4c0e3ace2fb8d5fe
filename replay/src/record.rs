use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat};
use eloboard::{AnnotatedMatch, Instant, MatchRecord, MatchStatus, RankingEntry, RatingDifference, RatingScalar};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::Error;

/// A row of the match schedule, as exported from the league feed.
#[serde_as]
#[derive(Deserialize, Debug)]
pub struct RawMatch {
    pub scheduled: String,
    pub status: String,
    pub home_name: String,
    pub away_name: String,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub home_score: Option<Points>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub away_score: Option<Points>,
}

/// Final score of one side. Integral floats like `112.0` are accepted, since
/// spreadsheet tools write score columns with gaps that way.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Points(pub i64);

#[derive(Debug, thiserror::Error)]
#[error("invalid score")]
pub struct InvalidPoints;

impl FromStr for Points {
    type Err = InvalidPoints;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(points) = s.parse() {
            return Ok(Points(points));
        }
        match s.parse::<f64>() {
            // i64::MAX as f64 rounds up to 2^63, which is already out of range.
            Ok(points)
                if points.fract() == 0.0 && points >= i64::MIN as f64 && points < i64::MAX as f64 =>
            {
                Ok(Points(points as i64))
            }
            _ => Err(InvalidPoints),
        }
    }
}

/// Parses a scheduled time, either RFC 3339 or naive UTC.
pub fn parse_scheduled(line: u64, s: &str) -> Result<Instant, Error> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|date_time| date_time.timestamp())
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|t| t.and_utc().timestamp()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|t| t.and_utc().timestamp()))
        .map(Instant)
        .map_err(|source| Error::Timestamp {
            line,
            value: s.to_owned(),
            source,
        })
}

pub fn format_scheduled(Instant(seconds): Instant) -> String {
    DateTime::from_timestamp(seconds, 0)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl RawMatch {
    /// Validates the row. Closed matches need both scores, for other matches
    /// a missing score counts as `0`.
    pub fn into_record(self, line: u64) -> Result<MatchRecord, Error> {
        if self.home_name.is_empty() {
            return Err(Error::schema(line, "missing home_name"));
        }
        if self.away_name.is_empty() {
            return Err(Error::schema(line, "missing away_name"));
        }

        let status: MatchStatus = match self.status.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        };

        let points = |points: Option<Points>, column: &str| match points {
            Some(Points(points)) => Ok(points),
            None if status.is_closed() => Err(Error::schema(line, format!("missing {column} of closed match"))),
            None => Ok(0),
        };

        Ok(MatchRecord {
            scheduled_time: parse_scheduled(line, &self.scheduled)?,
            home_score: points(self.home_score, "home_score")?,
            away_score: points(self.away_score, "away_score")?,
            status,
            home_id: self.home_name,
            away_id: self.away_name,
        })
    }
}

/// A row of the rated match history. Carries the normalized schedule
/// columns only, see [`write_annotated`](crate::write_annotated).
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AnnotatedRow {
    pub scheduled: String,
    pub status: String,
    pub home_name: String,
    pub away_name: String,
    pub home_score: i64,
    pub away_score: i64,
    pub elo_home_pre: f64,
    pub elo_away_pre: f64,
    pub elo_home_post: f64,
    pub elo_away_post: f64,
    pub elo_diff_pre: f64,
}

impl From<&AnnotatedMatch> for AnnotatedRow {
    fn from(annotated: &AnnotatedMatch) -> AnnotatedRow {
        let record = &annotated.record;
        AnnotatedRow {
            scheduled: format_scheduled(record.scheduled_time),
            status: record.status.to_string(),
            home_name: record.home_id.clone(),
            away_name: record.away_id.clone(),
            home_score: record.home_score,
            away_score: record.away_score,
            elo_home_pre: annotated.home_rating_pre.into(),
            elo_away_pre: annotated.away_rating_pre.into(),
            elo_home_post: annotated.home_rating_post.into(),
            elo_away_post: annotated.away_rating_post.into(),
            elo_diff_pre: annotated.rating_diff_pre.into(),
        }
    }
}

impl AnnotatedRow {
    pub fn into_annotated(self, line: u64) -> Result<AnnotatedMatch, Error> {
        let status: MatchStatus = match self.status.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        };
        Ok(AnnotatedMatch {
            record: MatchRecord {
                scheduled_time: parse_scheduled(line, &self.scheduled)?,
                status,
                home_id: self.home_name,
                away_id: self.away_name,
                home_score: self.home_score,
                away_score: self.away_score,
            },
            home_rating_pre: RatingScalar(self.elo_home_pre),
            away_rating_pre: RatingScalar(self.elo_away_pre),
            home_rating_post: RatingScalar(self.elo_home_post),
            away_rating_post: RatingScalar(self.elo_away_post),
            rating_diff_pre: RatingDifference(self.elo_diff_pre),
        })
    }
}

/// A row of the final ranking.
#[derive(Serialize, Debug)]
pub struct RankingRow<'a> {
    pub team: &'a str,
    pub elo_final: f64,
    pub wins: u32,
    pub losses: u32,
    pub games: u32,
}

impl<'a> From<&'a RankingEntry> for RankingRow<'a> {
    fn from(entry: &'a RankingEntry) -> RankingRow<'a> {
        RankingRow {
            team: &entry.competitor_id,
            elo_final: entry.final_rating.into(),
            wins: entry.wins,
            losses: entry.losses,
            games: entry.games_played,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: &str, home_score: Option<i64>, away_score: Option<i64>) -> RawMatch {
        RawMatch {
            scheduled: "2024-10-22T23:30:00Z".to_owned(),
            status: status.to_owned(),
            home_name: "Boston Celtics".to_owned(),
            away_name: "New York Knicks".to_owned(),
            home_score: home_score.map(Points),
            away_score: away_score.map(Points),
        }
    }

    #[test]
    fn test_points_from_str() {
        assert_eq!("112".parse::<Points>().unwrap(), Points(112));
        assert_eq!("112.0".parse::<Points>().unwrap(), Points(112));
        assert!("112.5".parse::<Points>().is_err());
        assert!("twelve".parse::<Points>().is_err());
        assert!("1e30".parse::<Points>().is_err());
        assert!("-1e30".parse::<Points>().is_err());
        assert!("9223372036854775808.0".parse::<Points>().is_err());
        assert!("inf".parse::<Points>().is_err());
        assert!("NaN".parse::<Points>().is_err());
    }

    #[test]
    fn test_parse_scheduled_formats() {
        let expected = Instant(1_729_639_800);
        assert_eq!(parse_scheduled(1, "2024-10-22T23:30:00Z").unwrap(), expected);
        assert_eq!(parse_scheduled(1, "2024-10-22T23:30:00+00:00").unwrap(), expected);
        assert_eq!(parse_scheduled(1, "2024-10-22T19:30:00-04:00").unwrap(), expected);
        assert_eq!(parse_scheduled(1, "2024-10-22 23:30:00").unwrap(), expected);
        assert!(matches!(
            parse_scheduled(7, "yesterday"),
            Err(Error::Timestamp { line: 7, .. })
        ));
        assert_eq!(format_scheduled(expected), "2024-10-22T23:30:00Z");
    }

    #[test]
    fn test_closed_match_needs_scores() {
        assert!(matches!(
            raw("closed", Some(132), None).into_record(3),
            Err(Error::Schema { line: 3, .. })
        ));
        let record = raw("closed", Some(132), Some(109)).into_record(3).unwrap();
        assert_eq!(record.status, MatchStatus::Closed);
        assert_eq!((record.home_score, record.away_score), (132, 109));
    }

    #[test]
    fn test_open_match_defaults_scores() {
        let record = raw("scheduled", None, None).into_record(2).unwrap();
        assert!(!record.status.is_closed());
        assert_eq!((record.home_score, record.away_score), (0, 0));
    }
}
