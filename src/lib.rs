//! Elo ratings for competitors from a chronological sequence of match
//! results, with a fixed home advantage, and the final ranking derived from
//! them.
//!
//! ```
//! use eloboard::{aggregate, process, Instant, MatchRecord, MatchStatus, OrderedMatches, RatingSystem};
//!
//! let matches = OrderedMatches::new(vec![MatchRecord {
//!     scheduled_time: Instant(1_729_639_800),
//!     status: MatchStatus::Closed,
//!     home_id: "Boston Celtics".to_owned(),
//!     away_id: "New York Knicks".to_owned(),
//!     home_score: 132,
//!     away_score: 109,
//! }])?;
//!
//! let annotated = process(&matches, &RatingSystem::new());
//! let ranking = aggregate(&annotated);
//! assert_eq!(ranking.rank_of("Boston Celtics"), Some(1));
//! # Ok::<_, eloboard::OrderingViolation>(())
//! ```

mod engine;
mod instant;
mod matches;
mod ranking;
mod rating;
mod rating_system;
mod score;
mod state;

pub use engine::{process, RatingEngine};
pub use instant::Instant;
pub use matches::{AnnotatedMatch, CompetitorId, MatchRecord, MatchStatus, OrderedMatches, OrderingViolation};
pub use ranking::{aggregate, aggregate_with, FinalRatingPolicy, InvalidFinalRatingPolicy, Ranking, RankingEntry};
pub use rating::{RatingDifference, RatingScalar};
pub use rating_system::{RatingSystem, RatingSystemBuilder};
pub use score::Score;
pub use state::RatingSnapshot;
