use eloboard::{aggregate, aggregate_with, FinalRatingPolicy, OrderedMatches, RatingEngine, RatingSystem};
use eloboard_replay::{read_annotated, read_matches, write_annotated, write_ranking, Error};

const SCHEDULE: &str = "\
id,scheduled,status,home_name,away_name,home_score,away_score
g3,2024-10-24T23:30:00Z,closed,Boston Celtics,Washington Wizards,122,102
g1,2024-10-22T23:30:00Z,closed,Boston Celtics,New York Knicks,132,109
g2,2024-10-23T00:00:00Z,closed,Washington Wizards,New York Knicks,100,100
g4,2024-10-26T00:00:00Z,scheduled,New York Knicks,Boston Celtics,,
";

fn rate(schedule: &str) -> Vec<eloboard::AnnotatedMatch> {
    let matches = OrderedMatches::sorted(read_matches(schedule.as_bytes()).unwrap());
    RatingEngine::new(RatingSystem::new()).process(&matches).unwrap()
}

#[test]
fn test_schedule_is_rated_in_time_order() {
    let annotated = rate(SCHEDULE);
    assert_eq!(annotated.len(), 4);

    let first = &annotated[0];
    assert_eq!(first.record.away_id, "New York Knicks");
    assert_eq!(f64::from(first.home_rating_pre), 1500.0);
    assert!((f64::from(first.home_rating_post) - 1508.29).abs() < 1e-3);

    // Celtics carry their rating into the third match.
    assert_eq!(annotated[2].home_rating_pre, first.home_rating_post);

    let open = &annotated[3];
    assert_eq!(f64::from(open.home_rating_pre), 0.0);
    assert_eq!((open.record.home_score, open.record.away_score), (0, 0));
}

#[test]
fn test_unsorted_schedule_can_be_rejected() {
    let matches = read_matches(SCHEDULE.as_bytes()).unwrap();
    let err = OrderedMatches::new(matches).unwrap_err();
    assert_eq!(err.index, 1);
}

#[test]
fn test_annotated_csv_round_trip() {
    let annotated = rate(SCHEDULE);

    let mut buf = Vec::new();
    write_annotated(&mut buf, &annotated).unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.starts_with(
        "scheduled,status,home_name,away_name,home_score,away_score,\
         elo_home_pre,elo_away_pre,elo_home_post,elo_away_post,elo_diff_pre\n"
    ));
    assert!(text.contains("2024-10-22T23:30:00Z,closed,Boston Celtics,New York Knicks,132,109,"));

    let read_back = read_annotated(buf.as_slice()).unwrap();
    assert_eq!(read_back, annotated);
}

#[test]
fn test_annotated_csv_is_normalized() {
    let annotated = rate(SCHEDULE);

    let mut buf = Vec::new();
    write_annotated(&mut buf, &annotated).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(!text.contains("g1"));
    assert!(text.contains("\n2024-10-26T00:00:00Z,scheduled,New York Knicks,Boston Celtics,0,0,0.0,0.0,0.0,0.0,0.0\n"));

    let schedule = "\
scheduled,status,home_name,away_name,home_score,away_score
2024-10-22 19:30:00,closed,Boston Celtics,New York Knicks,132.0,109
";
    let mut buf = Vec::new();
    write_annotated(&mut buf, &rate(schedule)).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("\n2024-10-22T19:30:00Z,closed,Boston Celtics,New York Knicks,132,109,1500.0,1500.0,"));
}

#[test]
fn test_ranking_csv() {
    let annotated = rate(SCHEDULE);

    let ranking = aggregate(&annotated);
    let mut buf = Vec::new();
    write_ranking(&mut buf, &ranking).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("team,elo_final,wins,losses,games"));
    // Knicks' and Celtics' last appearance is the scheduled match.
    assert!(lines.next().unwrap().starts_with("Washington Wizards,"));
    assert_eq!(lines.count(), 2);

    let ranking = aggregate_with(&annotated, FinalRatingPolicy::LastClosed);
    assert_eq!(ranking.rank_of("Boston Celtics"), Some(1));
    let celtics = ranking.get("Boston Celtics").unwrap();
    assert_eq!((celtics.wins, celtics.losses, celtics.games_played), (2, 1, 3));
    let knicks = ranking.get("New York Knicks").unwrap();
    assert_eq!((knicks.wins, knicks.losses, knicks.games_played), (0, 3, 3));
}

#[test]
fn test_closed_match_without_score_is_rejected() {
    let schedule = "\
scheduled,status,home_name,away_name,home_score,away_score
2024-10-22T23:30:00Z,closed,Boston Celtics,New York Knicks,132,
";
    assert!(matches!(
        read_matches(schedule.as_bytes()),
        Err(Error::Schema { line: 2, .. })
    ));
}

#[test]
fn test_non_numeric_score_is_rejected() {
    let schedule = "\
scheduled,status,home_name,away_name,home_score,away_score
2024-10-22T23:30:00Z,closed,Boston Celtics,New York Knicks,132,lots
";
    assert!(matches!(read_matches(schedule.as_bytes()), Err(Error::Csv(_))));
}

#[test]
fn test_missing_column_is_rejected() {
    let schedule = "\
scheduled,status,home_name,home_score,away_score
2024-10-22T23:30:00Z,closed,Boston Celtics,132,109
";
    assert!(matches!(read_matches(schedule.as_bytes()), Err(Error::Csv(_))));
}

#[test]
fn test_bad_timestamp_is_rejected() {
    let schedule = "\
scheduled,status,home_name,away_name,home_score,away_score
tomorrow,closed,Boston Celtics,New York Knicks,132,109
";
    assert!(matches!(
        read_matches(schedule.as_bytes()),
        Err(Error::Timestamp { line: 2, .. })
    ));
}
