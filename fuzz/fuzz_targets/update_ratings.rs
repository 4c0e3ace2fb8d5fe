#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use eloboard::{RatingDifference, RatingScalar, RatingSystem, Score};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary)]
struct Encounter {
    home: f64,
    away: f64,
    home_points: i64,
    away_points: i64,
    k_factor: f64,
    home_advantage: f64,
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(encounter) = Encounter::arbitrary(&mut u) else {
        return;
    };
    if !(encounter.home.is_finite()
        && encounter.away.is_finite()
        && encounter.k_factor.is_finite()
        && encounter.home_advantage.is_finite())
    {
        return;
    }

    let rating_system = RatingSystem::builder()
        .k_factor(encounter.k_factor.abs().min(1000.0))
        .home_advantage(RatingDifference(encounter.home_advantage.clamp(-1000.0, 1000.0)))
        .build();

    let home = RatingScalar(encounter.home.clamp(-10000.0, 10000.0));
    let away = RatingScalar(encounter.away.clamp(-10000.0, 10000.0));
    let score = Score::from_points(encounter.home_points, encounter.away_points);

    let expected = rating_system.expected_score(home, away);
    assert!((0.0..=1.0).contains(&expected.value()));

    let (home_post, away_post) = rating_system.update_ratings(home, away, score);
    assert!(f64::from(home_post).is_finite());
    assert!(f64::from(away_post).is_finite());

    let home_change = home_post - home;
    let away_change = away_post - away;
    assert!((home_change + away_change).abs().0 <= 1e-6);
    assert!(home_change.abs().0 <= rating_system.k_factor() + 1e-6);
});
