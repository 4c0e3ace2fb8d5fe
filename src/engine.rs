use tracing::{debug, trace};

use crate::{
    state::RatingState, AnnotatedMatch, Instant, MatchRecord, OrderedMatches, OrderingViolation,
    RatingSnapshot, RatingSystem,
};

/// Replays matches in chronological order, keeping the current rating of
/// every competitor.
///
/// The engine owns its rating state. Callers only observe it through the
/// annotated matches and the final [`RatingSnapshot`].
#[derive(Debug, Default)]
pub struct RatingEngine {
    rating_system: RatingSystem,
    state: RatingState,
    seen: usize,
    last_scheduled: Option<Instant>,
    rated: u64,
}

impl RatingEngine {
    pub fn new(rating_system: RatingSystem) -> RatingEngine {
        RatingEngine {
            rating_system,
            state: RatingState::default(),
            seen: 0,
            last_scheduled: None,
            rated: 0,
        }
    }

    /// Number of closed matches rated so far.
    pub fn rated(&self) -> u64 {
        self.rated
    }

    fn check_order(&self, scheduled_time: Instant) -> Result<(), OrderingViolation> {
        match self.last_scheduled {
            Some(previous) if scheduled_time < previous => Err(OrderingViolation {
                index: self.seen,
                previous,
                current: scheduled_time,
            }),
            _ => Ok(()),
        }
    }

    /// Rates a single match. Fails without touching the state if the match
    /// is scheduled before a match previously passed to this engine.
    ///
    /// Matches that are not closed are passed through with all rating
    /// fields left at `0.0`, and leave the ratings untouched.
    pub fn rate(&mut self, record: &MatchRecord) -> Result<AnnotatedMatch, OrderingViolation> {
        self.check_order(record.scheduled_time)?;
        Ok(self.rate_in_order(record))
    }

    fn rate_in_order(&mut self, record: &MatchRecord) -> AnnotatedMatch {
        self.seen += 1;
        self.last_scheduled = Some(record.scheduled_time);

        if !record.status.is_closed() {
            trace!(
                home = %record.home_id,
                away = %record.away_id,
                status = %record.status,
                "match not closed, not rated"
            );
            return AnnotatedMatch::unrated(record.clone());
        }

        let base = self.rating_system.base_rating();
        let home_pre = self.state.rating_or_insert(&record.home_id, base);
        let away_pre = self.state.rating_or_insert(&record.away_id, base);

        let (home_post, away_post) =
            self.rating_system
                .update_ratings(home_pre, away_pre, record.home_result());

        self.state.set(&record.home_id, home_post);
        self.state.set(&record.away_id, away_post);
        self.rated += 1;

        debug!(
            home = %record.home_id,
            away = %record.away_id,
            home_pre = home_pre.0,
            away_pre = away_pre.0,
            delta = (home_post - home_pre).0,
            "rated match"
        );

        AnnotatedMatch {
            record: record.clone(),
            home_rating_pre: home_pre,
            away_rating_pre: away_pre,
            home_rating_post: home_post,
            away_rating_post: away_post,
            rating_diff_pre: home_pre - away_pre,
        }
    }

    /// Rates all matches, producing one annotated match per record in the
    /// same order. Fails up front if the first match is scheduled before the
    /// last match this engine has seen.
    pub fn process(&mut self, matches: &OrderedMatches) -> Result<Vec<AnnotatedMatch>, OrderingViolation> {
        if let Some(first) = matches.first() {
            self.check_order(first.scheduled_time)?;
        }
        let annotated: Vec<AnnotatedMatch> =
            matches.iter().map(|record| self.rate_in_order(record)).collect();
        debug!(
            matches = annotated.len(),
            rated = self.rated,
            competitors = self.state.len(),
            "processed matches"
        );
        Ok(annotated)
    }

    /// Current ratings, without consuming the engine.
    pub fn snapshot(&self) -> RatingSnapshot {
        self.state.snapshot()
    }

    pub fn into_snapshot(self) -> RatingSnapshot {
        self.state.snapshot()
    }
}

/// Rates all matches with a fresh rating state.
pub fn process(matches: &OrderedMatches, rating_system: &RatingSystem) -> Vec<AnnotatedMatch> {
    let mut engine = RatingEngine::new(rating_system.clone());
    matches.iter().map(|record| engine.rate_in_order(record)).collect()
}
